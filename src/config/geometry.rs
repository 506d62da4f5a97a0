//! Drive geometry and timing constants.
//!
//! One immutable value built at startup and passed by reference into every
//! component that needs it. Defaults model a 12,000 RPM drive with 201
//! tracks, 360 sectors per track, 4 KB blocks and a 6 GB/s transfer rate.

#[derive(Debug, Clone, Copy)]
pub struct DriveGeometry {
    /// Addressable tracks, 0-based.
    pub tracks: u32,
    /// Sectors per track, 0-based.
    pub sectors: u32,
    /// Platter speed. 12,000 RPM is 0.2 rotations per millisecond.
    pub rotations_per_ms: f64,
    /// Nominal average seek time in ms, the calibration constant for the
    /// per-track seek cost.
    pub avg_seek_ms: f64,
    /// One block is transferred per request.
    pub block_size_kb: u64,
    /// Sustained transfer rate in GB/s.
    pub transfer_rate_gb_s: f64,
}

impl Default for DriveGeometry {
    fn default() -> Self {
        Self {
            tracks: 201,
            sectors: 360,
            rotations_per_ms: 0.2,
            avg_seek_ms: 2.5,
            block_size_kb: 4,
            transfer_rate_gb_s: 6.0,
        }
    }
}

impl DriveGeometry {
    /// Seek cost per unit track distance. The mean seek distance of a
    /// uniform random batch is about a third of the stroke, so this is
    /// calibrated to make such a batch average `avg_seek_ms` per request.
    pub fn seek_ms_per_track(&self) -> f64 {
        self.avg_seek_ms / (f64::from(self.tracks) / 3.0)
    }

    /// Time for the platter to sweep one sector under the head.
    pub fn ms_per_sector(&self) -> f64 {
        1.0 / (self.rotations_per_ms * f64::from(self.sectors))
    }

    /// Time for one full platter rotation.
    pub fn rotation_ms(&self) -> f64 {
        1.0 / self.rotations_per_ms
    }

    /// The head parks at the middle track before every experiment.
    pub fn parked_track(&self) -> u32 {
        self.tracks / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_derived_values() {
        let geometry = DriveGeometry::default();
        assert_eq!(geometry.parked_track(), 100);
        assert!((geometry.rotation_ms() - 5.0).abs() < 1e-12);
        assert!((geometry.ms_per_sector() - 5.0 / 360.0).abs() < 1e-12);
    }

    #[test]
    fn seek_calibration_matches_mean_random_distance() {
        let geometry = DriveGeometry::default();
        let mean_distance = f64::from(geometry.tracks) / 3.0;
        let avg = geometry.seek_ms_per_track() * mean_distance;
        assert!((avg - geometry.avg_seek_ms).abs() < 1e-12);
    }
}
