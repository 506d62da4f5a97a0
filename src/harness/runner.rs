//! Experiment sweep driver.
//!
//! Runs one policy over every load level, many independent trials per
//! level, and averages the per-trial statistics. Trials share nothing but
//! the immutable geometry: each one gets its own head state and its own
//! seeded batch.

use crate::common::error::SimError;
use crate::config::experiment::ExperimentSettings;
use crate::config::geometry::DriveGeometry;
use crate::engine::policies::{self, PolicyKind};
use crate::harness::generator;

/// Trial-averaged statistics for one (policy, load) cell.
#[derive(Debug, Clone, Copy)]
pub struct LoadAggregate {
    pub load: usize,
    pub trials: usize,
    pub avg_request_ms: f64,
    pub avg_access_ms: f64,
    pub avg_seek_distance: f64,
    pub avg_rotational_delay_ms: f64,
    /// Requests served per trial, averaged. Equals the load level exactly.
    pub avg_requests_per_trial: f64,
}

#[derive(Debug)]
pub struct PolicyReport {
    pub policy: PolicyKind,
    pub rows: Vec<LoadAggregate>,
}

pub fn run_sweep(
    policy: PolicyKind,
    settings: &ExperimentSettings,
    geometry: &DriveGeometry,
) -> Result<PolicyReport, SimError> {
    settings.validate()?;
    let levels = settings.load_levels();
    log::info!(
        "{}: sweeping {} load levels, {} trials each",
        policy,
        levels.len(),
        settings.trials
    );

    let mut rows = Vec::with_capacity(levels.len());
    for load in levels {
        let mut sum_request_ms = 0.0;
        let mut sum_access_ms = 0.0;
        let mut sum_seek_distance = 0.0;
        let mut sum_rotational_ms = 0.0;
        let mut total_requests: u64 = 0;

        for trial in 0..settings.trials {
            let seed = generator::trial_seed(settings.base_seed, load, trial);
            let batch = generator::generate_batch(geometry, load, seed);
            let result = policies::simulate(policy, &batch, geometry)?;
            sum_request_ms += result.avg_request_ms;
            sum_access_ms += result.avg_access_ms;
            sum_seek_distance += result.avg_seek_distance;
            sum_rotational_ms += result.avg_rotational_delay_ms;
            total_requests += result.request_count as u64;
        }

        let trials = settings.trials as f64;
        let row = LoadAggregate {
            load,
            trials: settings.trials,
            avg_request_ms: sum_request_ms / trials,
            avg_access_ms: sum_access_ms / trials,
            avg_seek_distance: sum_seek_distance / trials,
            avg_rotational_delay_ms: sum_rotational_ms / trials,
            avg_requests_per_trial: total_requests as f64 / trials,
        };
        log::debug!(
            "{} load {}: {:.4} ms/request, {:.2} tracks/seek",
            policy,
            load,
            row.avg_request_ms,
            row.avg_seek_distance
        );
        rows.push(row);
    }

    log::info!("{}: sweep complete", policy);
    Ok(PolicyReport { policy, rows })
}
