//! Logger setup.

use log::LevelFilter;

pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if cfg!(debug_assertions) {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
