pub mod jpeg;
pub mod raw;
