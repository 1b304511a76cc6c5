//! Interactive selection of city, month and day.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::Console;
use crate::registry::{City, DayFilter, FilterSelection, MonthFilter, title_case};

const CITY_PROMPT: &str = "Which city's bikeshare data do you want to explore? \nType 1 for Chicago, 2 for New York City or 3 for Washington: ";
const MONTH_PROMPT: &str = "Which month's bikeshare data do you want to explore? Write the number corresponding to the month (e.g. 1 = January, 2 = February) or 0 for all months: ";
const DAY_PROMPT: &str = "Which day's bikeshare data do you want to explore? Write the corresponding number (e.g. 1 = Monday, 2 = Tuesday) or 0 for all days: ";

/// Asks for a city, month and day, re-prompting until each answer is valid.
///
/// Returns `None` if input ends before all three are chosen.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<FilterSelection>> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let Some(city) = ask(console, CITY_PROMPT, "Please enter a number from 1 to 3.", City::from_menu)?
    else {
        return Ok(None);
    };
    console.say(&format!("You have chosen {}.", city))?;

    let Some(month) = ask(
        console,
        MONTH_PROMPT,
        "Please enter a number from 0 to 6.",
        MonthFilter::from_menu,
    )?
    else {
        return Ok(None);
    };
    match month {
        MonthFilter::All => console.say("You have chosen data for all months.")?,
        MonthFilter::Only(_) => {
            console.say(&format!("You have chosen data for {}.", title_case(month.name())))?
        }
    }

    let Some(day) = ask(
        console,
        DAY_PROMPT,
        "Please enter a number from 0 to 7. Try again.",
        DayFilter::from_menu,
    )?
    else {
        return Ok(None);
    };
    match day {
        DayFilter::All => console.say("You have chosen data for all days.")?,
        DayFilter::Only(_) => {
            console.say(&format!("You have chosen data for {}.", title_case(day.name())))?
        }
    }

    console.say(&"-".repeat(40))?;

    let selection = FilterSelection::new(city, month, day);
    debug!(?selection, "Filters selected");
    Ok(Some(selection))
}

/// Prompts until the reply parses as an integer that `choose` accepts.
fn ask<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    range_message: &str,
    choose: impl Fn(i64) -> Option<T>,
) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(reply) = console.prompt(prompt)? else {
            return Ok(None);
        };

        match reply.trim().parse::<i64>() {
            Ok(n) => match choose(n) {
                Some(choice) => return Ok(Some(choice)),
                None => console.say(range_message)?,
            },
            Err(_) => console.say("Please input a number.")?,
        }
    }
}
