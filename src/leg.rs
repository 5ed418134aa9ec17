use crate::time::{LocalTime, Span, UtcTime};
use serde::Deserialize;
use std::sync::Arc;

pub type FlightDesignator = Arc<str>;

pub type RotationId = u32;

/// One operated or positioning segment, stamped on both the UTC clock and the
/// local clocks of its departure and arrival stations.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Leg {
    pub flight_designator: FlightDesignator,
    #[serde(default)]
    pub rotation: Option<RotationId>,
    #[serde(default)]
    pub is_transport: bool,
    #[serde(default)]
    pub day: u32,
    pub dep_utc: UtcTime,
    pub dep_lt: LocalTime,
    pub arr_utc: UtcTime,
    pub arr_lt: LocalTime,
}

impl Leg {
    /// Ground time on the UTC clock between this leg's arrival and `next`'s departure.
    pub fn ground_time_until(&self, next: &Leg) -> Span {
        Span::between(self.arr_utc, next.dep_utc)
    }

    pub fn is_aircraft_change(&self, next: &Leg) -> bool {
        self.flight_designator != next.flight_designator
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flight_designator)
    }
}
