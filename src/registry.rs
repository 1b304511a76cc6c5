//! Fixed vocabularies: the three cities and their CSV files, and the month
//! and day-of-week names used for menus and filter encoding.

use chrono::Weekday;
use std::fmt;

/// Month vocabulary. Index 0 is "all"; index `n` is calendar month `n`.
pub const MONTHS: [&str; 7] = [
    "all", "january", "february", "march", "april", "may", "june",
];

/// Day vocabulary. Index 0 is "all"; index `n` is the `n`-th weekday
/// starting from Monday.
pub const DAYS_OF_WEEK: [&str; 8] = [
    "all",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// A city with a bikeshare dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities in menu order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Maps a 1-based menu number to a city.
    pub fn from_menu(choice: i64) -> Option<City> {
        usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Name of the CSV file backing this city's data.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month restriction on the working dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1 (January) to 6 (June).
    Only(u32),
}

impl MonthFilter {
    /// Maps a menu number (0 = all, 1..=6 = January..June).
    pub fn from_menu(choice: i64) -> Option<MonthFilter> {
        match choice {
            0 => Some(MonthFilter::All),
            1..=6 => Some(MonthFilter::Only(choice as u32)),
            _ => None,
        }
    }

    /// Vocabulary entry for this filter, e.g. `"all"` or `"march"`.
    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => MONTHS[0],
            MonthFilter::Only(m) => MONTHS[*m as usize],
        }
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => *m == month,
        }
    }
}

/// Day-of-week restriction on the working dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Weekday),
}

impl DayFilter {
    /// Maps a menu number (0 = all, 1..=7 = Monday..Sunday).
    pub fn from_menu(choice: i64) -> Option<DayFilter> {
        match choice {
            0 => Some(DayFilter::All),
            1..=7 => Weekday::try_from((choice - 1) as u8).ok().map(DayFilter::Only),
            _ => None,
        }
    }

    /// Position of this filter in [`DAYS_OF_WEEK`], 1 = Monday .. 7 = Sunday.
    pub fn vocabulary_index(&self) -> u32 {
        match self {
            DayFilter::All => 0,
            DayFilter::Only(d) => d.number_from_monday(),
        }
    }

    pub fn name(&self) -> &'static str {
        DAYS_OF_WEEK[self.vocabulary_index() as usize]
    }

    /// Compares the derived index (0 = Monday .. 6 = Sunday) against the
    /// filter's vocabulary index, the same rule months use. Monday keeps
    /// derived index 1 and Sunday keeps nothing.
    pub fn matches(&self, day_of_week: u32) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(_) => self.vocabulary_index() == day_of_week,
        }
    }
}

/// The validated (city, month, day) triple chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl FilterSelection {
    pub fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }
}

/// Capitalizes the first letter of each word, e.g. `"new york city"` →
/// `"New York City"`.
pub fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
