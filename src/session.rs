//! The outer loop: choose filters, load, report, browse, offer a restart.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{error, info, warn};

use crate::analyzers::{duration_stats, station_stats, time_stats, user_stats};
use crate::browser::browse;
use crate::config::Settings;
use crate::console::Console;
use crate::dataset::Dataset;
use crate::filters::get_filters;
use crate::loader::load_data;
use crate::output::{
    timed, write_duration_stats, write_station_stats, write_time_stats, write_user_stats,
};

const RESTART_PROMPT: &str =
    "\nWould you like to end it here? Type any key to end or '1' to restart.\n";
const RESTART_TOKEN: &str = "1";

/// Runs session cycles until the user declines to restart or input ends.
/// Returns the number of cycles started.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    settings: &Settings,
) -> Result<usize> {
    let mut cycles = 0;

    loop {
        let Some(selection) = get_filters(console)? else {
            info!("Input closed during filter selection");
            break;
        };
        cycles += 1;
        info!(cycle = cycles, city = %selection.city, month = selection.month.name(), day = selection.day.name(), "Session cycle started");

        match load_data(&settings.data_dir, &selection) {
            Ok(dataset) if dataset.is_empty() => {
                warn!("No trips match the chosen filters");
                console.say("No data exist for the parameters chosen.")?;
            }
            Ok(dataset) => {
                report(console, &dataset)?;
                browse(console, &dataset, settings.page_size)?;
            }
            Err(e) => {
                error!(error = %e, "Failed to load city data");
                console.say(&format!("Could not load data: {}", e))?;
            }
        }

        let reply = console.prompt(RESTART_PROMPT)?;
        if reply.as_deref().map(str::trim) != Some(RESTART_TOKEN) {
            break;
        }
    }

    info!(cycles, "Session finished");
    Ok(cycles)
}

/// Prints the four statistics sections, in order, for a non-empty dataset.
pub fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, dataset: &Dataset) -> Result<()> {
    let out = console.writer();

    writeln!(out, "\nCalculating the most frequent times of travel...\n")?;
    timed(out, "time", |out| match time_stats(dataset) {
        Some(stats) => write_time_stats(out, &stats),
        None => Ok(()),
    })?;

    writeln!(out, "\nCalculating the most popular stations and trip...\n")?;
    timed(out, "station", |out| match station_stats(dataset) {
        Some(stats) => write_station_stats(out, &stats),
        None => Ok(()),
    })?;

    writeln!(out, "\nCalculating trip duration...\n")?;
    timed(out, "duration", |out| {
        write_duration_stats(out, &duration_stats(dataset))
    })?;

    writeln!(out, "\nCalculating user stats...\n")?;
    timed(out, "user", |out| write_user_stats(out, &user_stats(dataset)))?;

    Ok(())
}
