pub mod experiment;
pub mod geometry;
