//! Core processing building blocks: scale-to-fit, padding and mean
//! normalization, plus the parameter structs that drive them. These are
//! in-memory primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
