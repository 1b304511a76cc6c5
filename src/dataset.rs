use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::registry::{DayFilter, MonthFilter};

/// One trip, with its derived Month and Day of Week.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub user_id: Option<String>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    /// Calendar month of `start_time`, 1-based.
    pub month: u32,
    /// Weekday of `start_time`, 0 = Monday .. 6 = Sunday.
    pub day_of_week: u32,
}

impl TripRecord {
    /// Builds a record and derives its Month and Day of Week from
    /// `start_time`.
    pub fn new(start_time: NaiveDateTime, start_station: &str, end_station: &str) -> Self {
        TripRecord {
            user_id: None,
            start_time,
            end_time: None,
            trip_duration: 0.0,
            start_station: start_station.to_string(),
            end_station: end_station.to_string(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday().num_days_from_monday(),
        }
    }

    pub fn with_duration(mut self, trip_duration: f64) -> Self {
        self.trip_duration = trip_duration;
        self
    }

    pub fn with_user_type(mut self, user_type: &str) -> Self {
        self.user_type = Some(user_type.to_string());
        self
    }

    pub fn with_demographics(mut self, gender: Option<&str>, birth_year: Option<f64>) -> Self {
        self.gender = gender.map(str::to_string);
        self.birth_year = birth_year;
        self
    }

    /// Hour of day the trip started, 0–23.
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Columns {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl Columns {
    pub fn all() -> Self {
        Columns {
            has_gender: true,
            has_birth_year: true,
        }
    }
}

/// An ordered collection of trips for one city.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub columns: Columns,
    pub trips: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(columns: Columns, trips: Vec<TripRecord>) -> Self {
        Self { columns, trips }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Keeps only trips whose derived Month and Day of Week match, in
    /// source order.
    pub fn filter(self, month: MonthFilter, day: DayFilter) -> Dataset {
        let trips = self
            .trips
            .into_iter()
            .filter(|t| month.matches(t.month) && day.matches(t.day_of_week))
            .collect();

        Dataset {
            columns: self.columns,
            trips,
        }
    }
}
