use crate::analyzers::frequency::FrequencyTable;
use crate::analyzers::types::{Mode, StationStats};
use crate::dataset::Dataset;

/// Most used start station, end station, and (start, end) combination.
///
/// Returns `None` for an empty dataset.
pub fn station_stats(dataset: &Dataset) -> Option<StationStats> {
    let starts: FrequencyTable<&str> = dataset
        .trips
        .iter()
        .map(|t| t.start_station.as_str())
        .collect();
    let ends: FrequencyTable<&str> = dataset
        .trips
        .iter()
        .map(|t| t.end_station.as_str())
        .collect();
    let pairs: FrequencyTable<(&str, &str)> = dataset
        .trips
        .iter()
        .map(|t| (t.start_station.as_str(), t.end_station.as_str()))
        .collect();

    let (start, start_count) = starts.mode()?;
    let (end, end_count) = ends.mode()?;
    let ((pair_start, pair_end), pair_count) = pairs.mode()?;

    Some(StationStats {
        start_station: Mode::new(start.to_string(), start_count),
        end_station: Mode::new(end.to_string(), end_count),
        trip: Mode::new((pair_start.to_string(), pair_end.to_string()), pair_count),
    })
}
