//! Reads a city's CSV into a [`Dataset`] and narrows it to the selected
//! month and day.

use csv::StringRecord;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::dataset::{Columns, Dataset, TripRecord};
use crate::error::{LoadError, Result};
use crate::parser::parse_start_time;
use crate::registry::FilterSelection;

/// Header names the unnamed leading id column may carry.
const ID_HEADERS: &[&str] = &["", "Unnamed: 0", "User ID"];

/// A single row as stored in the source file.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "User ID", default)]
    user_id: Option<String>,
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<f64>,
}

/// Loads the selected city's data from `data_dir` and applies the month and
/// day filters.
#[tracing::instrument(skip(data_dir), fields(city = %selection.city, month = selection.month.name(), day = selection.day.name()))]
pub fn load_data(data_dir: &Path, selection: &FilterSelection) -> Result<Dataset> {
    let path = data_dir.join(selection.city.file_name());
    debug!(path = %path.display(), "Opening city data");

    let file = File::open(&path).map_err(|source| LoadError::Open {
        path: path.clone(),
        source,
    })?;

    let dataset = load_from_reader(file, selection)?;
    info!(rows = dataset.len(), "Dataset loaded");
    Ok(dataset)
}

/// Same as [`load_data`] over any CSV source.
pub fn load_from_reader<R: Read>(reader: R, selection: &FilterSelection) -> Result<Dataset> {
    let dataset = read_trips(reader)?;
    let total = dataset.len();
    let filtered = dataset.filter(selection.month, selection.day);
    debug!(total, kept = filtered.len(), "Applied month/day filter");
    Ok(filtered)
}

/// Reads every row without filtering. Fails on the first Start Time that
/// cannot be parsed.
pub fn read_trips<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = normalize_headers(rdr.headers()?);
    let columns = Columns {
        has_gender: headers.iter().any(|h| h == "Gender"),
        has_birth_year: headers.iter().any(|h| h == "Birth Year"),
    };
    rdr.set_headers(headers.clone());

    let mut trips = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawTrip = record.deserialize(Some(&headers))?;

        let start_time = parse_start_time(&raw.start_time).ok_or_else(|| LoadError::Timestamp {
            line,
            value: raw.start_time.clone(),
        })?;

        let mut trip = TripRecord::new(start_time, &raw.start_station, &raw.end_station)
            .with_duration(raw.trip_duration);
        trip.user_id = raw.user_id;
        trip.end_time = raw.end_time;
        trip.user_type = raw.user_type;
        trip.gender = raw.gender;
        trip.birth_year = raw.birth_year;

        trips.push(trip);
    }

    Ok(Dataset::new(columns, trips))
}

/// Gives the unnamed leading id column a usable name.
fn normalize_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let h = h.trim();
            if i == 0 && ID_HEADERS.contains(&h) {
                "User ID"
            } else {
                h
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{City, DayFilter, MonthFilter};
    use chrono::Weekday;

    const CHICAGO: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Customer,,
";

    const WASHINGTON: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
";

    fn all(city: City) -> FilterSelection {
        FilterSelection::new(city, MonthFilter::All, DayFilter::All)
    }

    #[test]
    fn test_load_all_rows_with_derived_columns() {
        let ds = load_from_reader(CHICAGO.as_bytes(), &all(City::Chicago)).unwrap();

        assert_eq!(ds.len(), 4);
        assert_eq!(ds.columns, Columns::all());
        let first = &ds.trips[0];
        assert_eq!(first.user_id.as_deref(), Some("1423854"));
        assert_eq!(first.month, 6);
        assert_eq!(first.day_of_week, 4); // Friday
        assert_eq!(first.trip_duration, 321.0);
        assert_eq!(first.birth_year, Some(1992.0));
    }

    #[test]
    fn test_blank_cells_are_missing_values() {
        let ds = load_from_reader(CHICAGO.as_bytes(), &all(City::Chicago)).unwrap();
        let last = &ds.trips[3];
        assert_eq!(last.gender, None);
        assert_eq!(last.birth_year, None);
        assert_eq!(last.user_type.as_deref(), Some("Customer"));
    }

    #[test]
    fn test_missing_optional_columns() {
        let ds = load_from_reader(WASHINGTON.as_bytes(), &all(City::Washington)).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.columns.has_gender);
        assert!(!ds.columns.has_birth_year);
        assert_eq!(ds.trips[0].gender, None);
    }

    #[test]
    fn test_month_filter_keeps_only_that_month() {
        let selection = FilterSelection::new(City::Washington, MonthFilter::Only(6), DayFilter::All);
        let ds = load_from_reader(WASHINGTON.as_bytes(), &selection).unwrap();
        assert_eq!(ds.len(), 1);
        assert!(ds.trips.iter().all(|t| t.month == 6));
    }

    #[test]
    fn test_day_filter_uses_vocabulary_index() {
        // Wednesday is entry 3 of the day vocabulary; derived index 3 is Thursday.
        let selection =
            FilterSelection::new(City::Chicago, MonthFilter::All, DayFilter::Only(Weekday::Wed));
        let ds = load_from_reader(CHICAGO.as_bytes(), &selection).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.trips[0].day_of_week, 3);
        assert_eq!(ds.trips[0].user_id.as_deref(), Some("955915"));
    }

    #[test]
    fn test_sunday_filter_keeps_no_rows() {
        let data = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-05 08:00:00,,10,A,B,Subscriber
2,2017-06-06 08:00:00,,10,A,B,Subscriber
3,2017-06-11 08:00:00,,10,A,B,Subscriber
";
        let monday =
            FilterSelection::new(City::Washington, MonthFilter::All, DayFilter::Only(Weekday::Mon));
        let kept: Vec<u32> = load_from_reader(data.as_bytes(), &monday)
            .unwrap()
            .trips
            .iter()
            .map(|t| t.day_of_week)
            .collect();
        assert_eq!(kept, vec![1]);

        let sunday =
            FilterSelection::new(City::Washington, MonthFilter::All, DayFilter::Only(Weekday::Sun));
        let ds = load_from_reader(data.as_bytes(), &sunday).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn test_filtered_is_subset_of_unfiltered() {
        let full = read_trips(CHICAGO.as_bytes()).unwrap();
        let selection = FilterSelection::new(City::Chicago, MonthFilter::Only(5), DayFilter::All);
        let filtered = load_from_reader(CHICAGO.as_bytes(), &selection).unwrap();
        assert!(filtered.trips.iter().all(|t| full.trips.contains(t)));
    }

    #[test]
    fn test_bad_timestamp_fails_whole_load() {
        let data = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1,2017-06-21 08:36:34,,10,A,B,Subscriber
2,not-a-time,,10,A,B,Subscriber
";
        let err = load_from_reader(data.as_bytes(), &all(City::Washington)).unwrap_err();
        match err {
            LoadError::Timestamp { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-time");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_column_is_csv_error() {
        let data = ",Start Time,End Station\n1,2017-06-21 08:36:34,B\n";
        let err = load_from_reader(data.as_bytes(), &all(City::Washington)).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = std::env::temp_dir().join("bikeshare_stats_missing_dir");
        let err = load_data(&dir, &all(City::Chicago)).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
