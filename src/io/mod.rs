//! I/O layer: image decoding with the RGB channel policy (`reader`) and the
//! JPEG and raw tensor `writers`.
pub mod reader;
pub use reader::{read_raw, read_rgb_array, read_source_rgb};

pub mod writers;
