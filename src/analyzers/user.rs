use crate::analyzers::frequency::FrequencyTable;
use crate::analyzers::types::{Availability, BirthYearStats, UserStats};
use crate::dataset::Dataset;

/// User-type distribution, gender distribution and birth-year summary.
///
/// Blank cells are skipped. Gender and birth year are reported as
/// [`Availability::NotAvailable`] when the source file has no such column
/// or the column holds no values; the two checks are independent.
pub fn user_stats(dataset: &Dataset) -> UserStats {
    let user_types: FrequencyTable<String> = dataset
        .trips
        .iter()
        .filter_map(|t| t.user_type.clone())
        .collect();

    let gender = if dataset.columns.has_gender {
        gender_counts(dataset)
    } else {
        Availability::NotAvailable
    };

    let birth_years = if dataset.columns.has_birth_year {
        match birth_year_stats(dataset) {
            Some(stats) => Availability::Available(stats),
            None => Availability::NotAvailable,
        }
    } else {
        Availability::NotAvailable
    };

    UserStats {
        user_types,
        gender,
        birth_years,
    }
}

fn gender_counts(dataset: &Dataset) -> Availability<FrequencyTable<String>> {
    let counts: FrequencyTable<String> = dataset
        .trips
        .iter()
        .filter_map(|t| t.gender.clone())
        .collect();

    if counts.is_empty() {
        Availability::NotAvailable
    } else {
        Availability::Available(counts)
    }
}

fn birth_year_stats(dataset: &Dataset) -> Option<BirthYearStats> {
    // NaN and infinities parse as f64 but are not years.
    let years: Vec<i32> = dataset
        .trips
        .iter()
        .filter_map(|t| t.birth_year)
        .filter(|y| y.is_finite())
        .map(|y| y as i32)
        .collect();

    let counts: FrequencyTable<i32> = years.iter().copied().collect();
    let (&most_common, _) = counts.mode()?;

    Some(BirthYearStats {
        earliest: *years.iter().min()?,
        most_recent: *years.iter().max()?,
        most_common,
    })
}
