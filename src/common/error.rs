//! Error type shared across the simulator.

use std::fmt;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum SimError {
    IoError(std::io::Error),
    RequestOutOfRange { track: u32, sector: u32 },
    InvalidSettings(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::IoError(e) => write!(f, "I/O Error: {}", e),
            SimError::RequestOutOfRange { track, sector } => {
                write!(f, "Request Out Of Range: track {}, sector {}", track, sector)
            }
            SimError::InvalidSettings(s) => write!(f, "Invalid Settings: {}", s),
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::IoError(err)
    }
}

impl From<ParseIntError> for SimError {
    fn from(err: ParseIntError) -> Self {
        SimError::InvalidSettings(format!("Not a number: {}", err))
    }
}
