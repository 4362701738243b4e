use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn generate(dir: &Path, samples: usize) -> std::path::PathBuf {
    let input = dir.join("input_parameters.csv");
    Command::cargo_bin("allelic")
        .unwrap()
        .arg("generate")
        .arg("--samples")
        .arg(samples.to_string())
        .arg("--output")
        .arg(&input)
        .assert()
        .success();
    input
}

fn write_table(path: &Path, rows: &[&str]) {
    let mut text =
        String::from("Population_Size,Initial_Allele_Frequency,Generations,Mutation_Rate\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_generate_writes_parameter_table() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("params.csv");

    let mut cmd = Command::cargo_bin("allelic").unwrap();
    cmd.arg("generate")
        .arg("--samples")
        .arg("12")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 12 parameter sets"));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with(
        "Population_Size,Initial_Allele_Frequency,Generations,Selection_Coefficient,Mutation_Rate"
    ));
    assert_eq!(text.lines().count(), 13);
}

#[test]
fn test_generate_is_seeded() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a.csv");
    let b = temp.path().join("b.csv");

    for path in [&a, &b] {
        Command::cargo_bin("allelic")
            .unwrap()
            .args(["generate", "--samples", "9", "--seed", "7", "--output"])
            .arg(path)
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&a).unwrap(), fs::read_to_string(&b).unwrap());
}

#[test]
fn test_run_and_summarize() {
    let temp = tempdir().unwrap();
    let input = generate(temp.path(), 4);
    let results = temp.path().join("results.csv");
    let summary = temp.path().join("summary.csv");

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .args(["--replicates", "5", "--seed", "42", "--progress", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulated: 4"))
        .stdout(predicate::str::contains("Rows written: 20"));

    let text = fs::read_to_string(&results).unwrap();
    assert!(text.starts_with("Simulation_ID,Population_Size"));
    assert!(text.lines().next().unwrap().contains("Selection_Coefficient"));
    assert_eq!(text.lines().count(), 21);

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("summarize")
        .arg("--input")
        .arg(&results)
        .arg("--output")
        .arg(&summary)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 summaries"));

    let text = fs::read_to_string(&summary).unwrap();
    assert!(text.contains("Final_Mean_Allele_Frequency,Final_Std_Allele_Frequency"));
    assert_eq!(text.lines().count(), 5);
}

#[test]
fn test_run_is_reproducible_with_seed() {
    let temp = tempdir().unwrap();
    let input = generate(temp.path(), 3);
    let outputs = [temp.path().join("a.csv"), temp.path().join("b.csv")];

    for (output, threads) in outputs.iter().zip(["1", "4"]) {
        Command::cargo_bin("allelic")
            .unwrap()
            .args(["--threads", threads, "run", "--mode", "hybrid"])
            .arg("--input")
            .arg(&input)
            .arg("--output")
            .arg(output)
            .args(["--replicates", "6", "--seed", "11", "--progress", "false"])
            .assert()
            .success();
    }

    assert_eq!(
        fs::read_to_string(&outputs[0]).unwrap(),
        fs::read_to_string(&outputs[1]).unwrap()
    );
}

#[test]
fn test_deterministic_mode_one_row_per_set() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.csv");
    let results = temp.path().join("results.csv");
    write_table(&input, &["100,0.2,10,0.01", "50,0.5,3,0.0"]);

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .args(["--mode", "deterministic", "--progress", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: deterministic"));

    let text = fs::read_to_string(&results).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(!lines[0].contains("Selection_Coefficient"));
    assert!(lines[2].ends_with("0.5,0.5,0.5,0.5,,,,,,,"));
}

#[test]
fn test_invalid_rows_reported_and_strict_fails() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.csv");
    let results = temp.path().join("results.csv");
    write_table(&input, &["100,0.5,5,0.0", "0,0.5,5,0.0", "10,1.5,5,0.0"]);

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .args(["--replicates", "3", "--progress", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rejected parameter sets: 2"))
        .stdout(predicate::str::contains("Invalid population size"));

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .args(["--replicates", "3", "--progress", "false", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 of 3 parameter sets were rejected"));
}

#[test]
fn test_run_with_json_config() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.csv");
    let results = temp.path().join("results.csv");
    let config = temp.path().join("run.json");
    write_table(&input, &["20,0.5,4,0.0"]);
    fs::write(&config, r#"{ "mode": "hybrid", "replicates": 7, "seed": 3 }"#).unwrap();

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .arg("--config")
        .arg(&config)
        .args(["--progress", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: hybrid"))
        .stdout(predicate::str::contains("Rows written: 7"));
}

#[test]
fn test_resource_limit_rejects_large_matrix() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("input.csv");
    let results = temp.path().join("results.csv");
    write_table(&input, &["20,0.5,99,0.0"]);

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&results)
        .args(["--replicates", "10", "--max-cells", "500", "--progress", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeding the limit of 500"));
}

#[test]
fn test_run_missing_input_fails() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("allelic")
        .unwrap()
        .arg("run")
        .arg("--input")
        .arg(temp.path().join("missing.csv"))
        .arg("--output")
        .arg(temp.path().join("out.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read parameter sets"));
}

#[test]
fn test_unknown_mode_rejected() {
    Command::cargo_bin("allelic")
        .unwrap()
        .args(["run", "--mode", "selection"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown simulation mode"));
}
