use crate::duty::Duty;
use crate::error::FtlError;
use crate::time::Span;
use serde::Deserialize;
use std::sync::Arc;

pub type PairingId = Arc<str>;

/// One crew trip: duties separated by rest, in chronological order.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawPairing")]
pub struct Pairing {
    id: PairingId,
    duties: Vec<Duty>,
}

#[derive(Deserialize)]
struct RawPairing {
    id: PairingId,
    duties: Vec<Duty>,
}

impl TryFrom<RawPairing> for Pairing {
    type Error = FtlError;

    fn try_from(raw: RawPairing) -> Result<Self, Self::Error> {
        Pairing::new(raw.id, raw.duties)
    }
}

impl Pairing {
    pub fn new(id: PairingId, duties: Vec<Duty>) -> Result<Pairing, FtlError> {
        if duties.is_empty() {
            return Err(FtlError::EmptyPairing(id));
        }
        if let Some(index) = duties
            .windows(2)
            .position(|ds| ds[1].first_leg().dep_utc < ds[0].last_leg().arr_utc)
        {
            return Err(FtlError::DutyOverlap {
                pairing: id,
                index: index + 1,
            });
        }
        Ok(Pairing { id, duties })
    }

    pub fn id(&self) -> &PairingId {
        &self.id
    }

    pub fn duties(&self) -> &[Duty] {
        &self.duties
    }

    pub fn legs(&self) -> usize {
        self.duties.iter().map(|d| d.legs().len()).sum()
    }

    pub fn transports(&self) -> usize {
        self.duties.iter().map(Duty::transports).sum()
    }

    pub fn span(&self) -> Span {
        let first = self.duties[0].first_leg();
        let last = self.duties[self.duties.len() - 1].last_leg();
        Span::between(first.dep_utc, last.arr_utc)
    }
}

impl AsRef<[Duty]> for Pairing {
    fn as_ref(&self) -> &[Duty] {
        &self.duties
    }
}
