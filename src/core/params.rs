use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{PadAnchor, RawDataType, ResizeMethod};

pub const DEFAULT_TARGET_SIZE: u32 = 299;
pub const DEFAULT_JPEG_QUALITY: u8 = 75;
pub const DEFAULT_MEAN: [f32; 3] = [128.0, 128.0, 128.0];
pub const DEFAULT_DIVISOR: f32 = 128.0;

/// Resize-to-square parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeParams {
    pub width: u32,
    pub height: u32,
    pub method: ResizeMethod,
    pub anchor: PadAnchor,
    /// JPEG quality of the padded output (1-100)
    pub jpeg_quality: u8,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_TARGET_SIZE,
            height: DEFAULT_TARGET_SIZE,
            method: ResizeMethod::Bilinear,
            anchor: PadAnchor::TopRight,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl ResizeParams {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::ZeroSize { size: self.width });
        }
        if self.height == 0 {
            return Err(Error::ZeroSize { size: self.height });
        }
        // Baseline JPEG stores dimensions as u16.
        if self.width > u32::from(u16::MAX) {
            return Err(Error::invalid_argument("width", self.width));
        }
        if self.height > u32::from(u16::MAX) {
            return Err(Error::invalid_argument("height", self.height));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(Error::invalid_argument("jpeg_quality", self.jpeg_quality));
        }
        Ok(())
    }
}

/// Mean subtraction and output format parameters, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Per-channel mean in RGB order
    pub mean: [f32; 3],
    pub divisor: f32,
    /// Reverse the channel axis (RGB -> BGR) before writing
    pub bgr: bool,
    /// Store elements as u8 instead of f32
    pub save_uint8: bool,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            mean: DEFAULT_MEAN,
            divisor: DEFAULT_DIVISOR,
            bgr: false,
            save_uint8: false,
        }
    }
}

impl NormalizeParams {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: NormalizeParams = serde_json::from_str(&text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.divisor.is_finite() || self.divisor == 0.0 {
            return Err(Error::invalid_argument("divisor", self.divisor));
        }
        if let Some(m) = self.mean.iter().find(|m| !m.is_finite()) {
            return Err(Error::invalid_argument("mean", m));
        }
        Ok(())
    }

    pub fn data_type(&self) -> RawDataType {
        if self.save_uint8 {
            RawDataType::U8
        } else {
            RawDataType::F32
        }
    }
}

/// Full batch conversion parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParams {
    pub resize: ResizeParams,
    pub normalize: NormalizeParams,
}

impl ConversionParams {
    pub fn validate(&self) -> Result<()> {
        self.resize.validate()?;
        self.normalize.validate()
    }
}
