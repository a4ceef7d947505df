//! Shared types and enums used across jpg2raw.
//! Includes the resize kernel choice (`ResizeMethod`), the padding placement
//! (`PadAnchor`) and the element type of the produced raw files (`RawDataType`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Interpolation kernel used when scaling to fit the target size.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMethod {
    #[default]
    Bilinear,
    /// High-quality downsampling. Always Lanczos3.
    Antialias,
}

impl std::fmt::Display for ResizeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResizeMethod::Bilinear => write!(f, "bilinear"),
            ResizeMethod::Antialias => write!(f, "antialias"),
        }
    }
}

/// Corner of the output canvas the scaled image is pinned to.
///
/// Only one axis is ever padded, and all of the fill lands on the side
/// opposite the anchor.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PadAnchor {
    /// Fill goes to the bottom or the left.
    #[default]
    TopRight,
    /// Fill goes to the bottom or the right.
    TopLeft,
    /// Fill goes to the top or the left.
    BottomRight,
}

impl std::fmt::Display for PadAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PadAnchor::TopRight => write!(f, "top-right"),
            PadAnchor::TopLeft => write!(f, "top-left"),
            PadAnchor::BottomRight => write!(f, "bottom-right"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum RawDataType {
    F32,
    U8,
}

impl RawDataType {
    /// Size of one element in the raw file, in bytes.
    pub fn element_size(self) -> usize {
        match self {
            RawDataType::F32 => std::mem::size_of::<f32>(),
            RawDataType::U8 => std::mem::size_of::<u8>(),
        }
    }
}
