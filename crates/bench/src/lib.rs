use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0xCAFE_5EED;

/// Criterion group presets, keyed by how long one iteration takes.
#[derive(Clone, Copy, Debug)]
pub enum Runtime {
    Short,
    Long,
}

impl Runtime {
    fn sample_size(self) -> usize {
        match self {
            Runtime::Short => 15,
            Runtime::Long => 10,
        }
    }

    fn warm_up(self) -> Duration {
        match self {
            Runtime::Short => Duration::from_millis(100),
            Runtime::Long => Duration::from_millis(600),
        }
    }

    fn measurement(self) -> Duration {
        match self {
            Runtime::Short => Duration::from_millis(200),
            Runtime::Long => Duration::from_millis(1200),
        }
    }
}

pub fn configure_group<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, runtime: Runtime) {
    group.sample_size(runtime.sample_size());
    group.warm_up_time(runtime.warm_up());
    group.measurement_time(runtime.measurement());
}

/// RNG with a fixed seed so every bench sees the same dataset.
pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
