use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::dataset::Dataset;

/// Total and mean trip duration. Every value counts, including negative
/// or extreme ones.
pub fn duration_stats(dataset: &Dataset) -> DurationStats {
    let durations: Vec<f64> = dataset.trips.iter().map(|t| t.trip_duration).collect();

    DurationStats {
        total: durations.iter().sum(),
        mean: mean(&durations),
    }
}
