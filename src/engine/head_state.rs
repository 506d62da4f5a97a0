//! The simulated disk head.
//!
//! Owned exclusively by one policy invocation. The track and sector stay
//! within geometry bounds at every observation point.

use crate::algorithms::timing_math;
use crate::config::geometry::DriveGeometry;
use crate::engine::request::Request;
use crate::engine::result::RunAccumulator;

#[derive(Debug, Clone, Copy)]
pub struct HeadState {
    pub track: u32,
    pub sector: u32,
    pub elapsed_ms: f64,
}

impl HeadState {
    /// The parked position the head resets to before every experiment:
    /// middle track, sector 0, clock at zero.
    pub fn parked(geometry: &DriveGeometry) -> Self {
        Self {
            track: geometry.parked_track(),
            sector: 0,
            elapsed_ms: 0.0,
        }
    }

    /// Services one request: seek, wait out the rotation, transfer the
    /// block. The platter keeps spinning while the head seeks, so the
    /// post-seek sector is derived from total elapsed time rather than from
    /// the sector the seek started at.
    pub fn visit(
        &mut self,
        geometry: &DriveGeometry,
        request: &Request,
        acc: &mut RunAccumulator,
    ) {
        let distance = self.track.abs_diff(request.track);
        let seek_ms = timing_math::seek_duration(geometry, distance);
        self.elapsed_ms += seek_ms;
        acc.seek_distance += f64::from(distance);
        acc.seek_ms += seek_ms;
        self.track = request.track;

        self.sector = timing_math::sector_after_elapsed(geometry, self.elapsed_ms);
        let gap = timing_math::sector_gap(geometry, self.sector, request.sector);
        let rotation_ms = f64::from(gap) * geometry.ms_per_sector();
        self.elapsed_ms += rotation_ms;
        acc.rotational_delay_ms += rotation_ms;
        self.sector = timing_math::advance_sector(geometry, self.sector, gap);

        self.elapsed_ms += timing_math::transfer_duration(geometry);
        // Reference estimate, kept apart from the replayed clock.
        acc.access_ms += timing_math::access_time(geometry);
    }

    /// Projected time to reach `request` from the current position, using
    /// the same seek and rotation formulas as a visit but without moving
    /// the head. Used by SSTF to pick its sweep start.
    pub fn projected_reach_ms(&self, geometry: &DriveGeometry, request: &Request) -> f64 {
        let distance = self.track.abs_diff(request.track);
        let seek_ms = timing_math::seek_duration(geometry, distance);
        let sector = timing_math::sector_after_elapsed(geometry, self.elapsed_ms + seek_ms);
        seek_ms + timing_math::rotational_latency(geometry, sector, request.sector)
    }
}
