use crate::error::FtlError;
use crate::leg::Leg;
use crate::time::Span;
use serde::Deserialize;

/// Legs flown back-to-back without rest. Never empty, chronologically ordered.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawDuty")]
pub struct Duty {
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct RawDuty {
    legs: Vec<Leg>,
}

impl TryFrom<RawDuty> for Duty {
    type Error = FtlError;

    fn try_from(raw: RawDuty) -> Result<Self, Self::Error> {
        Duty::new(raw.legs)
    }
}

impl Duty {
    pub fn new(legs: Vec<Leg>) -> Result<Duty, FtlError> {
        if legs.is_empty() {
            return Err(FtlError::EmptyDuty);
        }
        if let Some(leg) = legs.iter().find(|l| l.arr_utc <= l.dep_utc) {
            return Err(FtlError::NonPositiveBlock {
                designator: leg.flight_designator.clone(),
                dep_utc: leg.dep_utc,
                arr_utc: leg.arr_utc,
            });
        }
        if let Some(index) = legs.windows(2).position(|ls| ls[1].dep_utc < ls[0].arr_utc) {
            return Err(FtlError::LegOverlap {
                index: index + 1,
                designator: legs[index + 1].flight_designator.clone(),
            });
        }
        Ok(Duty { legs })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn first_leg(&self) -> &Leg {
        &self.legs[0]
    }

    pub fn last_leg(&self) -> &Leg {
        &self.legs[self.legs.len() - 1]
    }

    pub fn transports(&self) -> usize {
        self.legs.iter().filter(|l| l.is_transport).count()
    }

    /// Consecutive leg pairs whose flight designator differs.
    pub fn aircraft_changes(&self) -> impl Iterator<Item = (&Leg, &Leg)> {
        self.legs
            .windows(2)
            .map(|ls| (&ls[0], &ls[1]))
            .filter(|(prev, next)| prev.is_aircraft_change(next))
    }

    /// From first departure to last arrival, UTC.
    pub fn span(&self) -> Span {
        Span::between(self.first_leg().dep_utc, self.last_leg().arr_utc)
    }

    /// Rest on the UTC clock between the end of this duty and the start of `next`.
    pub fn rest_until(&self, next: &Duty) -> Span {
        self.last_leg().ground_time_until(next.first_leg())
    }
}
