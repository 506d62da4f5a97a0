//! Head-movement scheduling policies.
//!
//! Each policy turns a request batch into a visiting order; the head-state
//! simulator then replays that order. `simulate` is the single entry point
//! the experiment harness calls.

use crate::algorithms::ordering;
use crate::common::error::SimError;
use crate::config::geometry::DriveGeometry;
use crate::engine::head_state::HeadState;
use crate::engine::request::Request;
use crate::engine::result::{RunAccumulator, SimulationResult};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Lifo,
    Sstf,
    Scan,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Sstf,
        PolicyKind::Scan,
        PolicyKind::Lifo,
    ];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Fifo => write!(f, "FIFO"),
            PolicyKind::Lifo => write!(f, "LIFO"),
            PolicyKind::Sstf => write!(f, "SSTF"),
            PolicyKind::Scan => write!(f, "SCAN"),
        }
    }
}

/// Replays one request batch under `policy` and returns the finalized
/// statistics. The slice is copied internally; the caller's batch is never
/// mutated. Out-of-range requests are rejected before any simulation state
/// is touched, and an empty batch yields the zero result.
pub fn simulate(
    policy: PolicyKind,
    requests: &[Request],
    geometry: &DriveGeometry,
) -> Result<SimulationResult, SimError> {
    for request in requests {
        request.check_bounds(geometry)?;
    }
    if requests.is_empty() {
        return Ok(SimulationResult::default());
    }
    let order = visit_order(policy, requests, geometry);
    let mut head = HeadState::parked(geometry);
    let mut acc = RunAccumulator::default();
    for request in &order {
        head.visit(geometry, request, &mut acc);
    }
    Ok(acc.finalize(order.len(), head.elapsed_ms, geometry.block_size_kb))
}

/// The visiting order a policy imposes on a batch.
pub fn visit_order(
    policy: PolicyKind,
    requests: &[Request],
    geometry: &DriveGeometry,
) -> Vec<Request> {
    if requests.is_empty() {
        return Vec::new();
    }
    match policy {
        PolicyKind::Fifo => requests.to_vec(),
        PolicyKind::Lifo => lifo_order(requests),
        PolicyKind::Sstf => sstf_order(requests, geometry),
        PolicyKind::Scan => scan_order(requests, geometry),
    }
}

/// Most recently arrived first: consume from the tail of the batch.
fn lifo_order(requests: &[Request]) -> Vec<Request> {
    let mut queue = requests.to_vec();
    let mut order = Vec::with_capacity(queue.len());
    while let Some(request) = queue.pop() {
        order.push(request);
    }
    order
}

/// States of the one-shot bidirectional sweep. Each sweep phase runs exactly
/// once; the initial-direction flag decides which comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepState {
    Unstarted,
    Ascending,
    Descending,
    Done,
}

fn next_state(state: SweepState, ascend_first: bool) -> SweepState {
    match (state, ascend_first) {
        (SweepState::Unstarted, true) | (SweepState::Descending, false) => SweepState::Ascending,
        (SweepState::Unstarted, false) | (SweepState::Ascending, true) => SweepState::Descending,
        (SweepState::Ascending, false)
        | (SweepState::Descending, true)
        | (SweepState::Done, _) => SweepState::Done,
    }
}

/// Batch SSTF: one global (sector, then track) sort, a start index chosen by
/// full projected reach time from the parked head, then a single
/// bidirectional sweep. A deliberate approximation of true per-request SSTF,
/// which would re-sort by distance after every move.
fn sstf_order(requests: &[Request], geometry: &DriveGeometry) -> Vec<Request> {
    let mut sorted = requests.to_vec();
    ordering::sort_for_sweep(&mut sorted);

    let start = nearest_start_index(&sorted, geometry);
    let ascend_first = sorted[start].track >= geometry.parked_track();
    // The first phase owns the start element; the opposite phase picks up
    // from the other side of it.
    let split = if ascend_first { start } else { start + 1 };

    let mut order = Vec::with_capacity(sorted.len());
    let mut state = next_state(SweepState::Unstarted, ascend_first);
    while state != SweepState::Done {
        match state {
            SweepState::Ascending => order.extend_from_slice(&sorted[split..]),
            SweepState::Descending => order.extend(sorted[..split].iter().rev()),
            SweepState::Unstarted | SweepState::Done => {}
        }
        state = next_state(state, ascend_first);
    }
    order
}

/// Index of the sorted request the parked head can reach soonest, counting
/// both seek time and the rotational latency behind it.
fn nearest_start_index(sorted: &[Request], geometry: &DriveGeometry) -> usize {
    let head = HeadState::parked(geometry);
    let mut best = 0;
    let mut best_ms = f64::MAX;
    for (index, request) in sorted.iter().enumerate() {
        let projected = head.projected_reach_ms(geometry, request);
        if projected < best_ms {
            best_ms = projected;
            best = index;
        }
    }
    best
}

/// Elevator sweep: ascend from the first request at or above the parked
/// track to the batch's highest track, then reverse through the rest.
fn scan_order(requests: &[Request], geometry: &DriveGeometry) -> Vec<Request> {
    let mut sorted = requests.to_vec();
    ordering::sort_for_sweep(&mut sorted);

    let parked = geometry.parked_track();
    let start = sorted
        .iter()
        .position(|request| request.track >= parked)
        .unwrap_or(sorted.len());

    let mut order = Vec::with_capacity(sorted.len());
    order.extend_from_slice(&sorted[start..]);
    order.extend(sorted[..start].iter().rev());
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::timing_math;

    fn fixed_batch() -> Vec<Request> {
        vec![
            Request::new(150, 10),
            Request::new(50, 300),
            Request::new(120, 0),
        ]
    }

    fn tracks(order: &[Request]) -> Vec<u32> {
        order.iter().map(|r| r.track).collect()
    }

    #[test]
    fn fifo_visits_in_input_order() {
        let geometry = DriveGeometry::default();
        let order = visit_order(PolicyKind::Fifo, &fixed_batch(), &geometry);
        assert_eq!(tracks(&order), vec![150, 50, 120]);
    }

    #[test]
    fn lifo_visits_in_reverse_input_order() {
        let geometry = DriveGeometry::default();
        let order = visit_order(PolicyKind::Lifo, &fixed_batch(), &geometry);
        assert_eq!(tracks(&order), vec![120, 50, 150]);
    }

    #[test]
    fn scan_ascends_from_the_parked_track_then_descends() {
        let geometry = DriveGeometry::default();
        let batch = vec![
            Request::new(150, 0),
            Request::new(50, 0),
            Request::new(120, 0),
            Request::new(90, 0),
            Request::new(110, 0),
        ];
        let order = visit_order(PolicyKind::Scan, &batch, &geometry);
        assert_eq!(tracks(&order), vec![110, 120, 150, 90, 50]);
    }

    #[test]
    fn scan_with_all_tracks_below_the_parked_track_only_descends() {
        let geometry = DriveGeometry::default();
        let batch = vec![
            Request::new(10, 0),
            Request::new(80, 0),
            Request::new(40, 0),
        ];
        let order = visit_order(PolicyKind::Scan, &batch, &geometry);
        assert_eq!(tracks(&order), vec![80, 40, 10]);
    }

    #[test]
    fn sstf_ascends_first_when_the_nearest_request_sits_at_the_parked_track() {
        let geometry = DriveGeometry::default();
        // (100, 0) is reachable in zero time, so it must win the start
        // selection; its track equals the parked track, so the sweep
        // ascends first.
        let batch = vec![
            Request::new(150, 40),
            Request::new(50, 10),
            Request::new(100, 0),
            Request::new(120, 30),
            Request::new(90, 20),
        ];
        let order = visit_order(PolicyKind::Sstf, &batch, &geometry);
        assert_eq!(tracks(&order), vec![100, 120, 150, 90, 50]);
    }

    #[test]
    fn sstf_descends_first_when_the_nearest_request_is_below_the_parked_track() {
        let geometry = DriveGeometry::default();
        // (20, 300) has the shortest projected reach time here: the long
        // seek still beats waiting out most of a rotation for sector 0.
        let batch = vec![
            Request::new(95, 0),
            Request::new(180, 200),
            Request::new(150, 100),
            Request::new(20, 300),
        ];
        let order = visit_order(PolicyKind::Sstf, &batch, &geometry);
        assert_eq!(tracks(&order), vec![20, 95, 150, 180]);
    }

    #[test]
    fn sweep_phases_are_monotonic_in_track_order() {
        let geometry = DriveGeometry::default();
        let batch: Vec<Request> = (0..40)
            .map(|i| Request::new(i * 37 % 201, i * 91 % 360))
            .collect();
        for policy in [PolicyKind::Sstf, PolicyKind::Scan] {
            let order = visit_order(policy, &batch, &geometry);
            assert_eq!(order.len(), batch.len());
            let sequence = tracks(&order);
            // At most one direction reversal across the whole traversal.
            let mut reversals = 0;
            let mut direction: Option<bool> = None;
            for pair in sequence.windows(2) {
                if pair[0] == pair[1] {
                    continue;
                }
                let ascending = pair[1] > pair[0];
                if direction.is_some_and(|previous| previous != ascending) {
                    reversals += 1;
                }
                direction = Some(ascending);
            }
            assert!(reversals <= 1, "{} produced {:?}", policy, sequence);
        }
    }

    #[test]
    fn sweep_transition_table_runs_each_phase_once() {
        assert_eq!(next_state(SweepState::Unstarted, true), SweepState::Ascending);
        assert_eq!(next_state(SweepState::Ascending, true), SweepState::Descending);
        assert_eq!(next_state(SweepState::Descending, true), SweepState::Done);
        assert_eq!(next_state(SweepState::Unstarted, false), SweepState::Descending);
        assert_eq!(next_state(SweepState::Descending, false), SweepState::Ascending);
        assert_eq!(next_state(SweepState::Ascending, false), SweepState::Done);
        assert_eq!(next_state(SweepState::Done, true), SweepState::Done);
    }

    #[test]
    fn every_policy_preserves_the_request_count() {
        let geometry = DriveGeometry::default();
        let batch: Vec<Request> = (0..25)
            .map(|i| Request::new(i * 53 % 201, i * 17 % 360))
            .collect();
        for policy in PolicyKind::ALL {
            let result = simulate(policy, &batch, &geometry).unwrap();
            assert_eq!(result.request_count, batch.len());
            assert_eq!(result.total_bytes_kb, 4 * batch.len() as u64);
        }
    }

    #[test]
    fn simulate_is_deterministic() {
        let geometry = DriveGeometry::default();
        let batch = fixed_batch();
        for policy in PolicyKind::ALL {
            let first = simulate(policy, &batch, &geometry).unwrap();
            let second = simulate(policy, &batch, &geometry).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn simulate_does_not_mutate_the_callers_batch() {
        let geometry = DriveGeometry::default();
        let batch = fixed_batch();
        let before = batch.clone();
        simulate(PolicyKind::Sstf, &batch, &geometry).unwrap();
        assert_eq!(batch, before);
    }

    #[test]
    fn empty_batch_yields_the_zero_result() {
        let geometry = DriveGeometry::default();
        for policy in PolicyKind::ALL {
            let result = simulate(policy, &[], &geometry).unwrap();
            assert_eq!(result, SimulationResult::default());
        }
    }

    #[test]
    fn out_of_range_request_is_rejected() {
        let geometry = DriveGeometry::default();
        let batch = vec![Request::new(201, 0)];
        assert!(simulate(PolicyKind::Fifo, &batch, &geometry).is_err());
        let batch = vec![Request::new(0, 360)];
        assert!(simulate(PolicyKind::Scan, &batch, &geometry).is_err());
    }

    #[test]
    fn single_request_at_the_parked_position_is_the_cheapest_run() {
        let geometry = DriveGeometry::default();
        let result =
            simulate(PolicyKind::Fifo, &[Request::new(100, 0)], &geometry).unwrap();
        assert_eq!(result.request_count, 1);
        assert!((result.avg_seek_distance - 0.0).abs() < 1e-12);
        assert!((result.avg_rotational_delay_ms - 0.0).abs() < 1e-12);
        let transfer = timing_math::transfer_duration(&geometry);
        assert!((result.total_elapsed_ms - transfer).abs() < 1e-12);
    }
}
