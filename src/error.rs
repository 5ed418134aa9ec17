use crate::leg::FlightDesignator;
use crate::pairing::PairingId;
use crate::time::UtcTime;
use thiserror::Error;

/// Malformed roster input. Rules never produce these: a `Duty` or `Pairing`
/// that exists has already passed validation.
#[derive(Debug, Error)]
pub enum FtlError {
    #[error("duty has no legs")]
    EmptyDuty,

    #[error("pairing {0} has no duties")]
    EmptyPairing(PairingId),

    #[error("leg {designator} arrives at {arr_utc} but departs at {dep_utc}")]
    NonPositiveBlock {
        designator: FlightDesignator,
        dep_utc: UtcTime,
        arr_utc: UtcTime,
    },

    #[error("leg {index} ({designator}) departs before the previous leg arrives")]
    LegOverlap {
        index: usize,
        designator: FlightDesignator,
    },

    #[error("duty {index} of pairing {pairing} starts before the previous duty ends")]
    DutyOverlap { pairing: PairingId, index: usize },

    #[error("pairing {0} appears more than once in the roster")]
    DuplicatePairing(PairingId),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
