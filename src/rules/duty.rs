use super::{
    EARLY_BEFORE_HOUR, LATE_FROM_HOUR, MAX_DUTY_SPAN, MAX_SECTORS_LEGS, MIN_AIRCRAFT_CHANGE_GAP,
};
use crate::duty::Duty;
use chrono::Timelike;

/// First leg leaves before 09:00 local. Only the time of day counts.
pub fn is_early(duty: &Duty) -> bool {
    duty.first_leg().dep_lt.hour() < EARLY_BEFORE_HOUR
}

/// Last leg *leaves* at or after 21:00 local. A late start of the final
/// sector, not a late finish.
pub fn is_late(duty: &Duty) -> bool {
    duty.last_leg().dep_lt.hour() >= LATE_FROM_HOUR
}

/// At most three legs, exactly one of them a transport.
pub fn has_max_sectors(duty: &Duty) -> bool {
    duty.legs().len() <= MAX_SECTORS_LEGS && duty.transports() == 1
}

/// Every aircraft change inside the duty leaves at least 50 minutes on the ground.
pub fn rest_time(duty: &Duty) -> bool {
    duty.aircraft_changes().all(|(prev, next)| {
        let gap = prev.ground_time_until(next);
        if gap < MIN_AIRCRAFT_CHANGE_GAP {
            tracing::debug!(from = %prev, to = %next, %gap, "aircraft change too tight");
            return false;
        }
        true
    })
}

/// First departure to last arrival spans no more than two days.
pub fn max_duty_days(duty: &Duty) -> bool {
    duty.span() <= MAX_DUTY_SPAN
}
