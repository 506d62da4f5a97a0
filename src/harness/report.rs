//! Result rendering.

use crate::harness::runner::PolicyReport;

/// Aligned per-policy table for terminal reading.
pub fn print_table(report: &PolicyReport) {
    println!("\nPolicy: {}", report.policy);
    println!(
        "{:>6} {:>8} {:>14} {:>14} {:>12} {:>12}",
        "load", "trials", "req time(ms)", "access(ms)", "seek(trk)", "rot(ms)"
    );
    for row in &report.rows {
        println!(
            "{:>6} {:>8} {:>14.4} {:>14.4} {:>12.2} {:>12.4}",
            row.load,
            row.trials,
            row.avg_request_ms,
            row.avg_access_ms,
            row.avg_seek_distance,
            row.avg_rotational_delay_ms
        );
    }
}

pub fn print_csv_header() {
    println!("policy,load,trials,avg_request_ms,avg_access_ms,avg_seek_tracks,avg_rot_ms,avg_requests");
}

pub fn print_csv(report: &PolicyReport) {
    for row in &report.rows {
        println!(
            "{},{},{},{:.6},{:.6},{:.4},{:.6},{:.1}",
            report.policy,
            row.load,
            row.trials,
            row.avg_request_ms,
            row.avg_access_ms,
            row.avg_seek_distance,
            row.avg_rotational_delay_ms,
            row.avg_requests_per_trial
        );
    }
}
