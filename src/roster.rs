use crate::error::FtlError;
use crate::pairing::{Pairing, PairingId};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Pairings loaded from a roster file, kept in file order.
pub struct Roster {
    pub pairings: Vec<Pairing>,
    pairings_index: HashMap<PairingId, usize>,
}

impl Roster {
    pub fn new(pairings: Vec<Pairing>) -> Result<Roster, FtlError> {
        let mut pairings_index = HashMap::with_capacity(pairings.len());
        for (i, pairing) in pairings.iter().enumerate() {
            if pairings_index.insert(pairing.id().clone(), i).is_some() {
                return Err(FtlError::DuplicatePairing(pairing.id().clone()));
            }
        }
        Ok(Roster {
            pairings,
            pairings_index,
        })
    }

    pub fn from_json(data: &str) -> Result<Self, FtlError> {
        #[derive(Deserialize)]
        struct RawData {
            pairings: Vec<Pairing>,
        }
        let raw: RawData = serde_json::from_str(data)?;
        Roster::new(raw.pairings)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, FtlError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let roster = Roster::from_json(&data)?;
        tracing::info!(
            path = %path.as_ref().display(),
            pairings = roster.pairings.len(),
            "roster loaded"
        );
        Ok(roster)
    }

    pub fn get(&self, id: &str) -> Option<&Pairing> {
        self.pairings_index.get(id).map(|i| &self.pairings[*i])
    }
}
