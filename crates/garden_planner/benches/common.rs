use std::time::Duration;

use criterion::{Criterion, Throughput};
use garden_planner::prelude::{PlantVariety, Species};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// `count` varieties cycling through the species catalog.
pub fn varieties(count: usize) -> Vec<PlantVariety> {
    (0..count)
        .map(|i| PlantVariety::new(format!("V{}", i % 7), Species::ALL[i % Species::COUNT]))
        .collect()
}
