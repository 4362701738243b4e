//! Loss and fixation of the focal allele.

use allelic_sim::base::ReplicateMatrix;

/// How many replicates have lost, fixed or still carry both alleles at a
/// generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbsorptionCounts {
    pub lost: usize,
    pub fixed: usize,
    pub segregating: usize,
}

impl AbsorptionCounts {
    pub fn total(&self) -> usize {
        self.lost + self.fixed + self.segregating
    }

    pub fn absorbed(&self) -> usize {
        self.lost + self.fixed
    }

    /// Share of replicates at 0 or 1; `0.0` for an empty count.
    pub fn absorbed_fraction(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.absorbed() as f64 / total as f64,
        }
    }
}

/// Count absorbed replicates at `generation`, or `None` if the matrix does
/// not reach it.
pub fn absorption(matrix: &ReplicateMatrix, generation: usize) -> Option<AbsorptionCounts> {
    let column = matrix.column(generation)?;
    let mut counts = AbsorptionCounts::default();
    for p in column {
        if p == 0.0 {
            counts.lost += 1;
        } else if p == 1.0 {
            counts.fixed += 1;
        } else {
            counts.segregating += 1;
        }
    }
    Some(counts)
}

/// First generation at which each replicate sits at 0 or 1 for the rest of
/// the run, `None` for replicates that never settle.
pub fn absorption_times(matrix: &ReplicateMatrix) -> Vec<Option<usize>> {
    matrix
        .rows()
        .map(|row| {
            let last = *row.last()?;
            if last != 0.0 && last != 1.0 {
                return None;
            }
            let unsettled = row.iter().rposition(|&p| p != last);
            Some(unsettled.map_or(0, |g| g + 1))
        })
        .collect()
}
