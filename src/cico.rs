use crate::leg::Leg;
use crate::time::LocalTime;
use chrono::TimeDelta;

pub const CHECK_IN_BEFORE: TimeDelta = TimeDelta::hours(1);
pub const CHECK_OUT_AFTER: TimeDelta = TimeDelta::minutes(30);

/// Check-in and check-out around a leg, on the local clocks of its stations.
pub fn cico(leg: &Leg) -> (LocalTime, LocalTime) {
    (leg.dep_lt - CHECK_IN_BEFORE, leg.arr_lt + CHECK_OUT_AFTER)
}
