pub mod cico;
pub mod duty;
pub mod error;
pub mod leg;
pub mod pairing;
pub mod roster;
pub mod rules;
pub mod time;

pub use cico::cico;
pub use duty::Duty;
pub use error::FtlError;
pub use leg::Leg;
pub use pairing::Pairing;
pub use roster::Roster;
