//! Batch execution over a collection of parameter sets.
//!
//! The runner draws one seed per parameter set from a master
//! `Xoshiro256PlusPlus` in input order before any work starts, then runs the
//! sets sequentially or with rayon. Results are always reported in input
//! order and are bit-identical for a given seed either way.

use crate::base::{ModelParams, ParameterSet, ReplicateMatrix};
use crate::errors::{BuilderError, SimulationError};
use crate::simulation::{
    DeterministicEngine, HybridModel, RecordFailure, ReplicateAggregator, RunConfig, RunReport,
    RunnerBuilder, SimulationMode, SimulationRecord, WrightFisherModel,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the configured mode for every parameter set of a batch.
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    config: RunConfig,
    aggregator: ReplicateAggregator,
    cancel: Option<Arc<AtomicBool>>,
}

impl SimulationRunner {
    /// Create a runner from a validated configuration.
    pub fn new(config: RunConfig) -> Result<Self, BuilderError> {
        config.validate()?;
        let aggregator = if config.parallel {
            ReplicateAggregator::parallel()
        } else {
            ReplicateAggregator::sequential()
        };
        Ok(Self {
            config,
            aggregator,
            cancel: None,
        })
    }

    /// Start a fluent builder.
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Observe `flag`; once it is set no further parameter set is started.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    fn master_rng(&self) -> Xoshiro256PlusPlus {
        match self.config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
        }
    }

    /// Simulate every parameter set.
    pub fn run_all(&self, parameter_sets: &[ParameterSet]) -> RunReport {
        self.run_all_with_progress(parameter_sets, |_| {})
    }

    /// Simulate every parameter set, calling `on_done` with the simulation id
    /// as each one finishes (successfully or not).
    pub fn run_all_with_progress<F>(&self, parameter_sets: &[ParameterSet], on_done: F) -> RunReport
    where
        F: Fn(usize) + Sync,
    {
        info!(
            mode = %self.config.mode,
            replicates = self.config.replicates,
            parameter_sets = parameter_sets.len(),
            parallel = self.config.parallel,
            "Starting simulation batch"
        );

        let mut master = self.master_rng();
        let seeds: Vec<u64> = parameter_sets.iter().map(|_| master.random()).collect();

        let task = |(simulation_id, (set, &seed)): (usize, (&ParameterSet, &u64))| {
            if self.is_cancelled() {
                return None;
            }
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let outcome = self.run_one(simulation_id, set, &mut rng);
            on_done(simulation_id);
            Some(outcome)
        };

        let outcomes: Vec<Option<Result<SimulationRecord, SimulationError>>> =
            if self.config.parallel {
                parameter_sets
                    .par_iter()
                    .zip(seeds.par_iter())
                    .enumerate()
                    .map(task)
                    .collect()
            } else {
                parameter_sets
                    .iter()
                    .zip(seeds.iter())
                    .enumerate()
                    .map(task)
                    .collect()
            };

        let mut report = RunReport::default();
        for (simulation_id, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                Some(Ok(record)) => report.records.push(record),
                Some(Err(error)) => {
                    warn!(simulation_id, %error, "Skipping parameter set");
                    report.failures.push(RecordFailure {
                        simulation_id,
                        parameters: parameter_sets[simulation_id].clone(),
                        error,
                    });
                }
                None => report.cancelled = true,
            }
        }

        if report.cancelled {
            warn!(
                completed = report.records.len() + report.failures.len(),
                total = parameter_sets.len(),
                "Simulation batch cancelled"
            );
        }
        info!(
            records = report.records.len(),
            failures = report.failures.len(),
            rows = report.total_rows(),
            "Simulation batch finished"
        );

        report
    }

    /// Validate and simulate a single parameter set.
    ///
    /// All checks happen before any trajectory is computed.
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] for out-of-range inputs and
    /// [`SimulationError::ResourceLimit`] when the replicate matrix would be
    /// larger than `max_cells`.
    pub fn run_one<R: Rng + ?Sized>(
        &self,
        simulation_id: usize,
        parameters: &ParameterSet,
        rng: &mut R,
    ) -> Result<SimulationRecord, SimulationError> {
        let params = parameters.validate()?;
        self.check_budget(&params)?;

        debug!(
            simulation_id,
            population_size = params.population_size(),
            initial_frequency = params.initial_frequency(),
            generations = params.generations(),
            mutation_rate = params.mutation_rate(),
            "Running parameter set"
        );

        let replicates = self.config.replicates;
        let (matrix, baseline) = match self.config.mode {
            SimulationMode::WrightFisher => {
                let model = WrightFisherModel::new(params);
                (self.aggregator.run(&model, replicates, rng)?, None)
            }
            SimulationMode::Hybrid => {
                let baseline = DeterministicEngine::simulate(&params);
                let model = HybridModel::for_params(&params, &baseline)?;
                let matrix = self.aggregator.run(&model, replicates, rng)?;
                (matrix, Some(baseline))
            }
            SimulationMode::Deterministic => {
                let baseline = DeterministicEngine::simulate(&params);
                let matrix = ReplicateMatrix::from_rows(params.generations(), [baseline.clone()])?;
                (matrix, Some(baseline))
            }
        };

        Ok(SimulationRecord {
            simulation_id,
            parameters: parameters.clone(),
            mode: self.config.mode,
            matrix,
            baseline,
        })
    }

    fn check_budget(&self, params: &ModelParams) -> Result<(), SimulationError> {
        let cells = self.config.rows_per_simulation() as u128 * params.trajectory_len() as u128;
        if cells > self.config.max_cells as u128 {
            return Err(SimulationError::ResourceLimit {
                cells,
                limit: self.config.max_cells,
            });
        }
        Ok(())
    }
}
