//! Flight Time Limitation rule catalogue.
//!
//! Every rule is a pure predicate over a duty, a pair of duties or an ordered
//! duty sequence. Nothing here keeps state between calls.

use chrono::TimeDelta;

mod adjacency;
mod catalogue;
mod duty;
mod sequence;


pub use adjacency::{min_sittime, reduced_rest};
pub use catalogue::{Rule, Verdict, evaluate};
pub use duty::{has_max_sectors, is_early, is_late, max_duty_days, rest_time};
pub use sequence::{
    max_aircraft_changes, max_duty, max_early_duties, max_pairing_length, max_sectors,
    max_transports, no_early_after_late, no_early_after_reduced_rest,
};

/// A duty whose first leg leaves before this local hour is early.
pub const EARLY_BEFORE_HOUR: u32 = 9;
/// A duty whose last leg leaves at or after this local hour is late.
pub const LATE_FROM_HOUR: u32 = 21;

pub const MAX_SECTORS_LEGS: usize = 3;
pub const MIN_AIRCRAFT_CHANGE_GAP: TimeDelta = TimeDelta::minutes(50);
pub const MAX_DUTY_SPAN: TimeDelta = TimeDelta::days(2);

pub const REDUCED_REST_BELOW: TimeDelta = TimeDelta::hours(9);
pub const MIN_SIT_TIME: TimeDelta = TimeDelta::minutes(100);

pub const MAX_CONSECUTIVE_EARLY: usize = 3;
pub const MAX_DUTIES: usize = 4;
pub const MAX_PAIRING_SPAN: TimeDelta = TimeDelta::days(4);
pub const MAX_TRANSPORTS: usize = 10;
pub const MAX_AIRCRAFT_CHANGES: usize = 2;
