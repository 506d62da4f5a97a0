pub mod head_state;
pub mod policies;
pub mod request;
pub mod result;
