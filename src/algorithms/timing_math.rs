//! Pure timing math for the synthetic drive.
//!
//! Every function is side-effect free and takes the geometry by reference.
//! Inputs are range-checked at the simulation boundary, so nothing here can
//! fail.

use crate::config::geometry::DriveGeometry;

/// Time to move the head radially across `distance_tracks` tracks.
pub fn seek_duration(geometry: &DriveGeometry, distance_tracks: u32) -> f64 {
    f64::from(distance_tracks) * geometry.seek_ms_per_track()
}

/// Forward-only circular distance from `current` to `target` in sectors.
/// The platter cannot rotate backward, so the result is always in
/// `[0, sectors)`.
pub fn sector_gap(geometry: &DriveGeometry, current: u32, target: u32) -> u32 {
    if target >= current {
        target - current
    } else {
        (geometry.sectors - current) + target
    }
}

/// Time spent waiting for the platter to bring `target` under the head.
pub fn rotational_latency(geometry: &DriveGeometry, current: u32, target: u32) -> f64 {
    f64::from(sector_gap(geometry, current, target)) * geometry.ms_per_sector()
}

/// Time to transfer one block once positioned.
pub fn transfer_duration(geometry: &DriveGeometry) -> f64 {
    let rate_kb_per_s = geometry.transfer_rate_gb_s * 1024.0 * 1024.0;
    geometry.block_size_kb as f64 / rate_kb_per_s * 1000.0
}

/// Textbook access-time estimate: nominal seek plus half a rotation plus
/// the transfer. A reference metric only, never fed back into simulated
/// elapsed time.
pub fn access_time(geometry: &DriveGeometry) -> f64 {
    geometry.avg_seek_ms + geometry.rotation_ms() / 2.0 + transfer_duration(geometry)
}

/// Absolute sector under the head after `elapsed_ms` of continuous platter
/// rotation. The sweep is reduced modulo one revolution in f64 before
/// truncation, so the result is always a valid sector index.
pub fn sector_after_elapsed(geometry: &DriveGeometry, elapsed_ms: f64) -> u32 {
    let sectors = f64::from(geometry.sectors);
    let swept = elapsed_ms.max(0.0) * geometry.rotations_per_ms * sectors;
    let wrapped = (swept % sectors).floor() as u32;
    wrapped % geometry.sectors
}

/// Steps a sector index forward by `count`, wrapping at the track end.
pub fn advance_sector(geometry: &DriveGeometry, sector: u32, count: u32) -> u32 {
    (sector + count) % geometry.sectors
}
