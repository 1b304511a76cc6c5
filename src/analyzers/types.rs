//! Result types produced by the aggregators.

use super::frequency::FrequencyTable;

/// A most-common value with how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Mode<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }
}

/// Busiest month, day of week and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Calendar month number, 1-based.
    pub month: Mode<u32>,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: Mode<u32>,
    /// 0–23.
    pub hour: Mode<u32>,
}

/// Busiest start station, end station and station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: Mode<String>,
    pub end_station: Mode<String>,
    pub trip: Mode<(String, String)>,
}

/// Total and mean trip duration in minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    pub mean: f64,
}

/// A statistic over a column that not every city's data carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability<T> {
    Available(T),
    NotAvailable,
}

impl<T> Availability<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Availability::Available(v) => Some(v),
            Availability::NotAvailable => None,
        }
    }
}

/// Earliest, most recent and most common year of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User-type distribution plus the optional demographics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: FrequencyTable<String>,
    pub gender: Availability<FrequencyTable<String>>,
    pub birth_years: Availability<BirthYearStats>,
}
