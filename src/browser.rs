//! Paginated viewer over the working dataset.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::debug;

use crate::console::Console;
use crate::dataset::Dataset;
use crate::output::{record_json, separator};

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

const CONTINUE_PROMPT: &str = "Do you want to see (more) individual data? Type '1' if yes. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowserState {
    AwaitingContinue { offset: usize },
    Done,
}

/// Shows `page_size` records at a time for as long as the user answers `1`.
///
/// Stops on any other answer, on end of input, or once every record has
/// been shown. Returns the number of pages printed.
pub fn browse<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &Dataset,
    page_size: usize,
) -> Result<usize> {
    let page_size = page_size.max(1);
    let mut pages = 0;
    let mut state = BrowserState::AwaitingContinue { offset: 0 };

    while let BrowserState::AwaitingContinue { offset } = state {
        if offset >= dataset.len() {
            state = BrowserState::Done;
            continue;
        }

        let reply = console.prompt(CONTINUE_PROMPT)?;
        if !is_affirmative(reply.as_deref()) {
            state = BrowserState::Done;
            continue;
        }

        let start = Instant::now();
        let end = (offset + page_size).min(dataset.len());
        for trip in &dataset.trips[offset..end] {
            console.say(&record_json(trip, &dataset.columns)?)?;
        }
        console.say(&format!(
            "This took {} seconds.",
            start.elapsed().as_secs_f64()
        ))?;
        console.say(&separator())?;

        pages += 1;
        debug!(offset, shown = end - offset, "Printed record page");
        state = BrowserState::AwaitingContinue {
            offset: offset + page_size,
        };
    }

    Ok(pages)
}

/// Only an integer reply equal to 1 means "show more".
fn is_affirmative(reply: Option<&str>) -> bool {
    reply
        .and_then(|r| r.trim().parse::<i64>().ok())
        .is_some_and(|n| n == 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Columns, TripRecord};
    use crate::parser::parse_start_time;
    use std::io::Cursor;

    fn dataset(n: usize) -> Dataset {
        let ts = parse_start_time("2017-06-05 08:00:00").unwrap();
        let trips = (0..n)
            .map(|i| TripRecord::new(ts, &format!("S{i}"), "E"))
            .collect();
        Dataset::new(Columns::default(), trips)
    }

    fn run(n: usize, input: &str) -> (usize, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let pages = browse(&mut console, &dataset(n), DEFAULT_PAGE_SIZE).unwrap();
        (pages, String::from_utf8(console.into_output()).unwrap())
    }

    fn record_lines(out: &str) -> usize {
        out.lines().filter(|l| l.contains("\"Start Station\"")).count()
    }

    #[test]
    fn test_pages_until_exhausted() {
        for n in [1usize, 4, 5, 6, 10, 12] {
            let (pages, out) = run(n, &"1\n".repeat(10));
            assert_eq!(pages, n.div_ceil(5), "n = {n}");
            assert_eq!(record_lines(&out), n);
            // No prompt once every record has been shown.
            assert_eq!(out.matches(CONTINUE_PROMPT).count(), pages);
        }
    }

    #[test]
    fn test_last_page_size() {
        let (_, out) = run(7, "1\n1\n");
        let pages: Vec<&str> = out.split(CONTINUE_PROMPT).skip(1).collect();
        assert_eq!(pages.len(), 2);
        assert_eq!(record_lines(pages[0]), 5);
        assert_eq!(record_lines(pages[1]), 2);
    }

    #[test]
    fn test_stops_on_decline() {
        let (pages, out) = run(12, "1\n0\n1\n");
        assert_eq!(pages, 1);
        assert_eq!(record_lines(&out), 5);
    }

    #[test]
    fn test_stops_on_unparseable_reply() {
        let (pages, _) = run(12, "yes\n");
        assert_eq!(pages, 0);
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let (pages, _) = run(12, "1\n");
        assert_eq!(pages, 1);
    }

    #[test]
    fn test_empty_dataset_never_prompts() {
        let (pages, out) = run(0, "1\n");
        assert_eq!(pages, 0);
        assert!(out.is_empty());
    }
}
