use crate::analyzers::frequency::FrequencyTable;
use crate::analyzers::types::{Mode, TimeStats};
use crate::dataset::Dataset;

/// Most frequent month, day of week and start hour.
///
/// Returns `None` for an empty dataset. The hour is derived per trip and
/// never stored on the dataset.
pub fn time_stats(dataset: &Dataset) -> Option<TimeStats> {
    let months: FrequencyTable<u32> = dataset.trips.iter().map(|t| t.month).collect();
    let days: FrequencyTable<u32> = dataset.trips.iter().map(|t| t.day_of_week).collect();
    let hours: FrequencyTable<u32> = dataset.trips.iter().map(|t| t.hour()).collect();

    let (&month, month_count) = months.mode()?;
    let (&day, day_count) = days.mode()?;
    let (&hour, hour_count) = hours.mode()?;

    Some(TimeStats {
        month: Mode::new(month, month_count),
        day_of_week: Mode::new(day, day_count),
        hour: Mode::new(hour, hour_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Columns, TripRecord};
    use crate::parser::parse_start_time;

    fn dataset(times: &[&str]) -> Dataset {
        let trips = times
            .iter()
            .map(|ts| TripRecord::new(parse_start_time(ts).unwrap(), "A", "B"))
            .collect();
        Dataset::new(Columns::default(), trips)
    }

    #[test]
    fn test_empty_dataset() {
        assert_eq!(time_stats(&Dataset::default()), None);
    }

    #[test]
    fn test_busiest_times() {
        let ds = dataset(&[
            "2017-06-05 08:10:00", // Mon
            "2017-06-06 08:20:00", // Tue
            "2017-06-06 17:00:00", // Tue
            "2017-03-07 08:00:00", // Tue
        ]);
        let stats = time_stats(&ds).unwrap();
        assert_eq!(stats.month, Mode::new(6, 3));
        assert_eq!(stats.day_of_week, Mode::new(1, 3));
        assert_eq!(stats.hour, Mode::new(8, 3));
    }

    #[test]
    fn test_ties_resolve_to_first_seen() {
        let ds = dataset(&["2017-02-01 10:00:00", "2017-01-01 11:00:00"]);
        let stats = time_stats(&ds).unwrap();
        assert_eq!(stats.month, Mode::new(2, 1));
        assert_eq!(stats.hour, Mode::new(10, 1));
    }

    #[test]
    fn test_is_pure() {
        let ds = dataset(&["2017-06-05 08:10:00", "2017-05-01 09:00:00"]);
        let before = ds.clone();
        assert_eq!(time_stats(&ds), time_stats(&ds));
        assert_eq!(ds, before);
    }
}
