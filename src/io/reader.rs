use std::path::Path;

use image::{DynamicImage, ImageReader, RgbImage};
use ndarray::Array3;
use tracing::debug;

use crate::core::processing::normalize::NormalizedTensor;
use crate::error::{Error, Result};
use crate::types::RawDataType;

// Format is sniffed from content so files like "a.jpg.bak" still decode.
fn open_image(path: &Path) -> Result<DynamicImage> {
    let open_err = |source| Error::ImageOpen {
        path: path.to_path_buf(),
        source,
    };
    ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?
        .decode()
        .map_err(|source| Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode an image for resizing. Grayscale input is promoted to RGB by
/// replicating the single channel; any channel count other than 1 or 3 is
/// rejected.
pub fn read_source_rgb(path: &Path) -> Result<RgbImage> {
    let img = open_image(path)?;
    let channels = img.color().channel_count();
    match channels {
        1 => {
            debug!("Converting grayscale image to RGB: {:?}", path);
            Ok(img.to_rgb8())
        }
        3 => Ok(img.into_rgb8()),
        _ => Err(Error::UnsupportedChannels {
            path: path.to_path_buf(),
            channels,
        }),
    }
}

/// Decode an image that must already have exactly three channels, as an
/// `(height, width, 3)` array.
pub fn read_rgb_array(path: &Path) -> Result<Array3<u8>> {
    let img = open_image(path)?;
    let channels = img.color().channel_count();
    if channels != 3 {
        return Err(Error::UnsupportedChannels {
            path: path.to_path_buf(),
            channels,
        });
    }
    rgb_to_array(img.into_rgb8())
}

pub fn rgb_to_array(img: RgbImage) -> Result<Array3<u8>> {
    let (width, height) = img.dimensions();
    Ok(Array3::from_shape_vec(
        (height as usize, width as usize, 3),
        img.into_raw(),
    )?)
}

/// Load a raw tensor file written by [`crate::io::writers::raw::write_raw`].
///
/// Raw files carry no header, so the shape and element type must be known.
pub fn read_raw(
    path: &Path,
    shape: (usize, usize, usize),
    data_type: RawDataType,
) -> Result<NormalizedTensor> {
    let bytes = std::fs::read(path)?;
    let expected = shape.0 * shape.1 * shape.2 * data_type.element_size();
    if bytes.len() != expected {
        return Err(Error::invalid_argument(
            "raw_len",
            format!("{} (expected {})", bytes.len(), expected),
        ));
    }
    Ok(match data_type {
        RawDataType::F32 => {
            let values: Vec<f32> = bytes
                .chunks_exact(4)
                .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
                .collect();
            NormalizedTensor::F32(Array3::from_shape_vec(shape, values)?)
        }
        RawDataType::U8 => NormalizedTensor::U8(Array3::from_shape_vec(shape, bytes)?),
    })
}
