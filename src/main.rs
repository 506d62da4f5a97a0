//! CLI entry point: sweeps the configured load levels under the selected
//! scheduling policies and prints the aggregated results.

use clap::{Parser, ValueEnum};
use std::time::{SystemTime, UNIX_EPOCH};

use hdd_sim::common::error::SimError;
use hdd_sim::config::experiment::ExperimentSettings;
use hdd_sim::config::geometry::DriveGeometry;
use hdd_sim::engine::policies::PolicyKind;
use hdd_sim::harness::{logging, report, runner};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PolicyArg {
    Fifo,
    Sstf,
    Scan,
    Lifo,
    /// Run all four policies for comparison.
    All,
}

#[derive(Parser, Debug)]
#[command(name = "hdd-sim")]
#[command(about = "Estimate disk-head scheduling policy performance on a synthetic drive")]
struct Args {
    /// Scheduling policy to simulate.
    #[arg(short, long, value_enum, default_value_t = PolicyArg::All)]
    policy: PolicyArg,

    /// Independent trials per load level.
    #[arg(short, long, default_value_t = 1000)]
    trials: usize,

    /// Smallest request batch in the load sweep.
    #[arg(long, default_value_t = 50)]
    min_requests: usize,

    /// Largest request batch in the load sweep.
    #[arg(long, default_value_t = 150)]
    max_requests: usize,

    /// Step between load levels.
    #[arg(long, default_value_t = 10)]
    step: usize,

    /// Base seed for request generation. Defaults to a clock-derived value.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Emit CSV rows instead of tables.
    #[arg(long, default_value_t = false)]
    csv: bool,

    /// Per-level progress on stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn selected_policies(arg: PolicyArg) -> Vec<PolicyKind> {
    match arg {
        PolicyArg::Fifo => vec![PolicyKind::Fifo],
        PolicyArg::Sstf => vec![PolicyKind::Sstf],
        PolicyArg::Scan => vec![PolicyKind::Scan],
        PolicyArg::Lifo => vec![PolicyKind::Lifo],
        PolicyArg::All => PolicyKind::ALL.to_vec(),
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

fn run(args: &Args) -> Result<(), SimError> {
    let geometry = DriveGeometry::default();
    let base_seed = args.seed.unwrap_or_else(clock_seed);
    let settings = ExperimentSettings {
        min_requests: args.min_requests,
        max_requests: args.max_requests,
        step: args.step,
        trials: args.trials,
        base_seed,
    };
    settings.validate()?;
    log::info!("base seed: {}", base_seed);

    if args.csv {
        report::print_csv_header();
    }
    for policy in selected_policies(args.policy) {
        let policy_report = runner::run_sweep(policy, &settings, &geometry)?;
        if args.csv {
            report::print_csv(&policy_report);
        } else {
            report::print_table(&policy_report);
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
