use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

/// Instant on the UTC clock.
pub type UtcTime = DateTime<Utc>;

/// Wall-clock time at the station where the event happens.
pub type LocalTime = NaiveDateTime;

/// Signed length of time between two stamps of the same clock.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd)]
pub struct Span(pub TimeDelta);

impl Span {
    pub fn between(from: UtcTime, to: UtcTime) -> Span {
        Span(to - from)
    }

    pub fn between_local(from: LocalTime, to: LocalTime) -> Span {
        Span(to - from)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.0.num_minutes();
        let sign = if total < 0 { "-" } else { "" };
        let total = total.unsigned_abs();
        let days = total / 1440;
        let remaining = total % 1440;
        let hours = remaining / 60;
        let mins = remaining % 60;
        if days > 0 {
            write!(f, "{}{}d {:02}:{:02}", sign, days, hours, mins)
        } else {
            write!(f, "{}{:02}:{:02}", sign, hours, mins)
        }
    }
}

impl PartialEq<TimeDelta> for Span {
    fn eq(&self, other: &TimeDelta) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<TimeDelta> for Span {
    fn partial_cmp(&self, other: &TimeDelta) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}
