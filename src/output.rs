//! Human-readable rendering of the statistics reports and per-record dumps.

use anyhow::Result;
use chrono::{Month, NaiveDateTime};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

use crate::analyzers::frequency::FrequencyTable;
use crate::analyzers::types::{Availability, DurationStats, StationStats, TimeStats, UserStats};
use crate::dataset::{Columns, TripRecord};
use crate::registry::{DAYS_OF_WEEK, title_case};

/// Width of the dashed line closing each section.
const SEPARATOR_WIDTH: usize = 40;

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Runs `body` and follows its output with the elapsed time and a separator.
pub fn timed<W, F>(out: &mut W, section: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut W) -> Result<()>,
{
    let start = Instant::now();
    body(out)?;
    let elapsed = start.elapsed();
    debug!(section, elapsed_ms = elapsed.as_millis() as u64, "Section rendered");

    writeln!(out, "This took {} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{}", separator())?;
    Ok(())
}

/// English name for a 1-based calendar month number.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| format!("month {}", month))
}

/// English name for a Monday-first day index.
pub fn day_name(day_of_week: u32) -> String {
    DAYS_OF_WEEK
        .get(day_of_week as usize + 1)
        .map(|d| title_case(d))
        .unwrap_or_else(|| format!("day {}", day_of_week))
}

pub fn write_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> Result<()> {
    writeln!(
        out,
        "The most common month is {} with {} trips.",
        month_name(stats.month.value),
        stats.month.count
    )?;
    writeln!(
        out,
        "The most common day of the week is {} with {} trips.",
        day_name(stats.day_of_week.value),
        stats.day_of_week.count
    )?;
    writeln!(
        out,
        "The most common hour of the day is {} with {} trips.",
        stats.hour.value, stats.hour.count
    )?;
    Ok(())
}

pub fn write_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> Result<()> {
    writeln!(
        out,
        "The most used start station is {} with {} trips.",
        stats.start_station.value, stats.start_station.count
    )?;
    writeln!(
        out,
        "The most used end station is {} with {} trips.",
        stats.end_station.value, stats.end_station.count
    )?;
    let (from, to) = &stats.trip.value;
    writeln!(
        out,
        "The most used station combination is {} to {} with {} trips.",
        from, to, stats.trip.count
    )?;
    Ok(())
}

pub fn write_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> Result<()> {
    writeln!(out, "Total travel time for this period is {} minutes.", stats.total)?;
    writeln!(out, "Mean travel time for this period is {:.2} minutes.", stats.mean)?;
    Ok(())
}

pub fn write_user_stats<W: Write>(out: &mut W, stats: &UserStats) -> Result<()> {
    writeln!(out, "Statistics for each user type:")?;
    write_distribution(out, &stats.user_types)?;
    writeln!(out)?;

    match &stats.gender {
        Availability::Available(genders) => {
            writeln!(out, "Statistics for each gender:")?;
            write_distribution(out, genders)?;
            writeln!(out)?;
        }
        Availability::NotAvailable => {
            writeln!(out, "Statistics for gender not available for this dataset.")?;
        }
    }

    match &stats.birth_years {
        Availability::Available(years) => {
            writeln!(out, "The earliest year of birth is {}.", years.earliest)?;
            writeln!(out, "The most recent is {}.", years.most_recent)?;
            writeln!(out, "The most common is {}.", years.most_common)?;
        }
        Availability::NotAvailable => {
            writeln!(
                out,
                "Statistics for year of birth not available for this dataset."
            )?;
        }
    }
    Ok(())
}

/// One `name: count` line per category, most frequent first.
fn write_distribution<W: Write>(out: &mut W, table: &FrequencyTable<String>) -> Result<()> {
    for (name, count) in table.sorted_desc() {
        writeln!(out, "  {}: {}", name, count)?;
    }
    Ok(())
}

/// Field-by-field view of a trip as printed by the record browser.
#[derive(Serialize)]
struct RecordView<'a> {
    #[serde(rename = "User ID")]
    user_id: &'a Option<String>,
    #[serde(rename = "Start Time")]
    start_time: &'a NaiveDateTime,
    #[serde(rename = "End Time")]
    end_time: &'a Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: &'a str,
    #[serde(rename = "End Station")]
    end_station: &'a str,
    #[serde(rename = "User Type")]
    user_type: &'a Option<String>,
    // Outer None: the source file has no such column.
    #[serde(rename = "Gender", skip_serializing_if = "Option::is_none")]
    gender: Option<&'a Option<String>>,
    #[serde(rename = "Birth Year", skip_serializing_if = "Option::is_none")]
    birth_year: Option<&'a Option<f64>>,
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Day of Week")]
    day_of_week: u32,
}

/// Serializes a trip as a single-line JSON object. Optional columns the
/// source file did not carry are left out.
pub fn record_json(trip: &TripRecord, columns: &Columns) -> Result<String> {
    let view = RecordView {
        user_id: &trip.user_id,
        start_time: &trip.start_time,
        end_time: &trip.end_time,
        trip_duration: trip.trip_duration,
        start_station: &trip.start_station,
        end_station: &trip.end_station,
        user_type: &trip.user_type,
        gender: columns.has_gender.then_some(&trip.gender),
        birth_year: columns.has_birth_year.then_some(&trip.birth_year),
        month: trip.month,
        day_of_week: trip.day_of_week,
    };
    Ok(serde_json::to_string(&view)?)
}
