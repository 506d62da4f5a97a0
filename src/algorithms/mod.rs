pub mod ordering;
pub mod timing_math;
