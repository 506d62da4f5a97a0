pub mod generator;
pub mod logging;
pub mod report;
pub mod runner;
