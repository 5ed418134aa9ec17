use super::{MIN_SIT_TIME, REDUCED_REST_BELOW};
use crate::duty::Duty;
use crate::time::Span;

/// Rest between `first` and `second` is under nine hours (UTC).
pub fn reduced_rest(first: &Duty, second: &Duty) -> bool {
    first.rest_until(second) < REDUCED_REST_BELOW
}

/// After a duty that *opens* with a transport, the crew sits at least
/// 1h40 (local clocks) before the next duty departs.
pub fn min_sittime(duties: &[Duty]) -> bool {
    short_sit_at(duties).is_none()
}

/// Index of the transport-opened duty followed by too short a sit.
pub(crate) fn short_sit_at(duties: &[Duty]) -> Option<usize> {
    duties.windows(2).enumerate().find_map(|(i, ds)| {
        let (current, next) = (&ds[0], &ds[1]);
        if !current.first_leg().is_transport {
            return None;
        }
        let sit = Span::between_local(current.last_leg().arr_lt, next.first_leg().dep_lt);
        if sit < MIN_SIT_TIME {
            tracing::debug!(duty = i, %sit, "sit time after transport too short");
            return Some(i);
        }
        None
    })
}
