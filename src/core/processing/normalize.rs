//! Mean subtraction, scalar division, optional channel reversal and element
//! cast, producing the tensor that is dumped to a `.raw` file.
use ndarray::{Array2, Array3, ArrayView2, Axis};
use tracing::debug;

use crate::core::params::NormalizeParams;
use crate::error::{Error, Result};
use crate::types::RawDataType;

/// A normalized HWC tensor in the element type it will be written with.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedTensor {
    F32(Array3<f32>),
    U8(Array3<u8>),
}

impl NormalizedTensor {
    /// `(height, width, channels)`
    pub fn dim(&self) -> (usize, usize, usize) {
        match self {
            NormalizedTensor::F32(a) => a.dim(),
            NormalizedTensor::U8(a) => a.dim(),
        }
    }

    pub fn data_type(&self) -> RawDataType {
        match self {
            NormalizedTensor::F32(_) => RawDataType::F32,
            NormalizedTensor::U8(_) => RawDataType::U8,
        }
    }

    pub fn byte_len(&self) -> usize {
        let (h, w, c) = self.dim();
        h * w * c * self.data_type().element_size()
    }

    /// Row-major (H, W, C) bytes; f32 elements use native byte order.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            NormalizedTensor::F32(a) => a.iter().flat_map(|v| v.to_ne_bytes()).collect(),
            NormalizedTensor::U8(a) => a.iter().copied().collect(),
        }
    }
}

/// Broadcast a per-channel mean to an `(height, width, 3)` array.
///
/// The three constant planes are stacked channel-first and then permuted
/// back to HWC, so the result is in standard layout.
pub fn mean_array(height: usize, width: usize, mean: [f32; 3]) -> Result<Array3<f32>> {
    let planes: Vec<Array2<f32>> = mean
        .iter()
        .map(|&m| Array2::from_elem((height, width), m))
        .collect();
    let views: Vec<ArrayView2<f32>> = planes.iter().map(|p| p.view()).collect();
    let chw = ndarray::stack(Axis(0), &views)?;
    Ok(chw.permuted_axes([1, 2, 0]).as_standard_layout().into_owned())
}

// Float to u8 the way a C cast on a 64-bit integer register behaves: truncate
// toward zero, then keep the low byte.
fn cast_u8(v: f32) -> u8 {
    (v as i64) as u8
}

/// Normalize an RGB8 HWC array: `(image - mean) / divisor`, optionally
/// reversed to BGR and cast to u8.
pub fn normalize_rgb(image: &Array3<u8>, params: &NormalizeParams) -> Result<NormalizedTensor> {
    let (height, width, channels) = image.dim();
    if channels != 3 {
        return Err(Error::invalid_argument("channels", channels));
    }
    params.validate()?;

    debug!(
        "Normalizing {}x{}: mean={:?}, divisor={}, bgr={}, dtype={:?}",
        width,
        height,
        params.mean,
        params.divisor,
        params.bgr,
        params.data_type()
    );

    let mean = mean_array(height, width, params.mean)?;
    let mut normalized = image.mapv(f32::from) - &mean;
    normalized /= params.divisor;

    if params.bgr {
        normalized.invert_axis(Axis(2));
    }
    let normalized = normalized.as_standard_layout().into_owned();

    Ok(match params.data_type() {
        RawDataType::F32 => NormalizedTensor::F32(normalized),
        RawDataType::U8 => NormalizedTensor::U8(normalized.mapv(cast_u8)),
    })
}
