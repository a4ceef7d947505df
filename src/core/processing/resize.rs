use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::debug;

use crate::error::Result;
use crate::types::ResizeMethod;

/// Size of the image after a uniform, aspect-preserving scale that fits
/// inside `target_cols` x `target_rows`.
///
/// The scale factor is `min(target_cols / cols, target_rows / rows)`, so at
/// least one side always lands exactly on its target. Both results are
/// clamped to `1..=target`.
pub fn calculate_fit_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> (usize, usize) {
    let rho = f64::min(
        target_cols as f64 / original_cols as f64,
        target_rows as f64 / original_rows as f64,
    );
    let new_cols = (original_cols as f64 * rho).round() as usize;
    let new_rows = (original_rows as f64 * rho).round() as usize;

    (
        new_cols.clamp(1, target_cols.max(1)),
        new_rows.clamp(1, target_rows.max(1)),
    )
}

fn resize_alg(method: ResizeMethod) -> ResizeAlg {
    match method {
        ResizeMethod::Bilinear => ResizeAlg::Convolution(FilterType::Bilinear),
        ResizeMethod::Antialias => ResizeAlg::Convolution(FilterType::Lanczos3),
    }
}

/// Resample interleaved RGB8 data to `target_cols` x `target_rows`.
pub fn resize_rgb_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
    method: ResizeMethod,
) -> Result<Vec<u8>> {
    debug!(
        "Resampling {}x{} -> {}x{} ({})",
        original_cols, original_rows, target_cols, target_rows, method
    );
    let resize_options = ResizeOptions::new().resize_alg(resize_alg(method));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8x3,
    )?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8x3);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}
