//! Descriptive statistics over a working dataset.
//!
//! Each aggregator is a pure function of the [`Dataset`](crate::dataset::Dataset)
//! it is given and returns a value from [`types`]; rendering lives in
//! [`crate::output`].

pub mod duration;
pub mod frequency;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use user::user_stats;
