use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub fn write_rgb_jpeg(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let width = u16::try_from(cols).map_err(|_| Error::invalid_argument("width", cols))?;
    let height = u16::try_from(rows).map_err(|_| Error::invalid_argument("height", rows))?;

    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder.encode(rgb_data, width, height, ColorType::Rgb)?;
    writer.flush()?;
    Ok(())
}
