//! The I/O request value type.

use crate::common::error::SimError;
use crate::config::geometry::DriveGeometry;

/// One read/write request for a single block at `(track, sector)`.
/// Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub track: u32,
    pub sector: u32,
}

impl Request {
    pub fn new(track: u32, sector: u32) -> Self {
        Self { track, sector }
    }

    /// Key extractor for track-ordered sorting.
    pub fn track_key(request: &Request) -> u32 {
        request.track
    }

    /// Key extractor for sector-ordered sorting.
    pub fn sector_key(request: &Request) -> u32 {
        request.sector
    }

    /// Fails fast on coordinates outside the drive geometry.
    pub fn check_bounds(&self, geometry: &DriveGeometry) -> Result<(), SimError> {
        if self.track >= geometry.tracks || self.sector >= geometry.sectors {
            return Err(SimError::RequestOutOfRange {
                track: self.track,
                sector: self.sector,
            });
        }
        Ok(())
    }
}
