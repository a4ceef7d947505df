#![doc = r#"
jpg2raw — batch conversion of JPEG images into raw tensor files.

Each image goes through two stateless steps:

1. **Resize to square**: scale uniformly to fit a target width/height, then
   pad with black on one side to exactly that size, and save as JPEG.
2. **Normalize**: subtract a per-channel mean, divide by a scalar, optionally
   reverse RGB to BGR and cast to `u8`, and dump the HWC tensor as a flat,
   header-less `.raw` file.

The same crate powers the `jpg2raw` CLI.

Quick start: convert a directory
--------------------------------
```rust,no_run
use std::path::Path;
use jpg2raw::{convert_directory, ConversionParams};

fn main() -> jpg2raw::Result<()> {
    let report = convert_directory(
        Path::new("/data/images"),
        Path::new("/data/raw"),
        &ConversionParams::default(),
    )?;
    println!("resized={} normalized={}", report.resized, report.normalized);
    Ok(())
}
```

Single files
------------
```rust,no_run
use std::path::Path;
use jpg2raw::{create_raw, resize_to_square_jpeg, NormalizeParams, ResizeMethod, ResizeParams};

fn main() -> jpg2raw::Result<()> {
    let resize = ResizeParams {
        width: 224,
        height: 224,
        method: ResizeMethod::Antialias,
        ..Default::default()
    };
    resize_to_square_jpeg(Path::new("in/cat.jpg"), Path::new("out/cat.jpg"), &resize)?;

    let normalize = NormalizeParams {
        mean: [123.68, 116.78, 103.94],
        divisor: 1.0,
        bgr: true,
        save_uint8: false,
    };
    let raw = create_raw(Path::new("out/cat.jpg"), &normalize)?;
    println!("wrote {}", raw.display());
    Ok(())
}
```

Raw file format
---------------
Row-major `(height, width, 3)` elements with no header. Elements are `f32` in
native byte order, or `u8` when `save_uint8` is set. Use [`read_raw`] to load
one back when the shape is known.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::{ConversionParams, NormalizeParams, ResizeParams};
pub use crate::core::processing::normalize::NormalizedTensor;
pub use crate::core::processing::padding::Padding;
pub use error::{Error, Result};
pub use types::{PadAnchor, RawDataType, ResizeMethod};

// Readers
pub use io::reader::{read_raw, read_rgb_array, read_source_rgb};

// High-level API re-exports
pub use api::{
    BatchReport, convert_directory, create_raw, is_jpeg_candidate, iterate_jpeg_files,
    normalize_image, resize_to_square, resize_to_square_jpeg,
};
