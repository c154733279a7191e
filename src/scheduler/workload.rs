use super::Process;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::ops::RangeInclusive;

const BURST_RANGE: RangeInclusive<u64> = 1..=10;
const ARRIVAL_RANGE: RangeInclusive<u64> = 0..=9;

// Seeded demo-batch generation: the same seed always produces the same
// sequence of batches, so simulation runs are reproducible.
pub struct WorkloadGenerator {
    rng: StdRng,
}

impl WorkloadGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn batch(&mut self, count: usize) -> Vec<Process> {
        (1..=count as u32)
            .map(|id| {
                Process::new(
                    id,
                    self.rng.random_range(BURST_RANGE),
                    self.rng.random_range(ARRIVAL_RANGE),
                )
            })
            .collect()
    }
}
