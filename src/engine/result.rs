//! Per-run accumulators and the finalized simulation result.

/// Summary of exactly one ordered traversal of one request batch. Finalized
/// once, never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationResult {
    pub request_count: usize,
    pub total_elapsed_ms: f64,
    /// Simulated elapsed time divided by the request count.
    pub avg_request_ms: f64,
    /// Mean radial distance per seek, in tracks.
    pub avg_seek_distance: f64,
    pub avg_seek_ms: f64,
    pub avg_rotational_delay_ms: f64,
    /// Mean of the textbook access-time estimate, reported alongside the
    /// replayed timings for comparison.
    pub avg_access_ms: f64,
    pub total_bytes_kb: u64,
}

/// Running totals gathered by the head-state simulator during a traversal.
#[derive(Debug, Default)]
pub struct RunAccumulator {
    pub seek_distance: f64,
    pub seek_ms: f64,
    pub rotational_delay_ms: f64,
    pub access_ms: f64,
}

impl RunAccumulator {
    /// Divides the accumulators by the request count. An empty run yields
    /// the zero result instead of dividing.
    pub fn finalize(
        &self,
        request_count: usize,
        total_elapsed_ms: f64,
        block_size_kb: u64,
    ) -> SimulationResult {
        if request_count == 0 {
            return SimulationResult::default();
        }
        let count = request_count as f64;
        SimulationResult {
            request_count,
            total_elapsed_ms,
            avg_request_ms: total_elapsed_ms / count,
            avg_seek_distance: self.seek_distance / count,
            avg_seek_ms: self.seek_ms / count,
            avg_rotational_delay_ms: self.rotational_delay_ms / count,
            avg_access_ms: self.access_ms / count,
            total_bytes_kb: block_size_kb * request_count as u64,
        }
    }
}
