//! High-level, ergonomic library API: resize one image to a padded square
//! JPEG, turn one image into a `.raw` tensor, and drive both over directory
//! trees. Prefer these entrypoints over the low-level processing modules.
use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::Serialize;
use tracing::{debug, info};

use crate::core::params::{ConversionParams, NormalizeParams, ResizeParams};
use crate::core::processing::normalize::{NormalizedTensor, normalize_rgb};
use crate::core::processing::padding::{Padding, add_padding};
use crate::core::processing::resize::{calculate_fit_dimensions, resize_rgb_image};
use crate::error::{Error, Result};
use crate::io::reader::{read_rgb_array, read_source_rgb, rgb_to_array};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::raw::{raw_path_for, write_raw};

/// Counts of files produced by [`convert_directory`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub resized: usize,
    pub normalized: usize,
}

/// Scale an RGB image to fit `params.width` x `params.height` and pad it with
/// black to exactly that size. Returns the padded image and the padding used.
pub fn resize_to_square(img: &RgbImage, params: &ResizeParams) -> Result<(RgbImage, Padding)> {
    params.validate()?;
    let (cols, rows) = (img.width() as usize, img.height() as usize);
    let (target_cols, target_rows) = (params.width as usize, params.height as usize);

    let (new_cols, new_rows) = calculate_fit_dimensions(cols, rows, target_cols, target_rows);
    debug!(
        "Original size: {}x{}, scaled size: {}x{}",
        cols, rows, new_cols, new_rows
    );

    let resized = resize_rgb_image(
        img.as_raw(),
        cols,
        rows,
        new_cols,
        new_rows,
        params.method,
    )?;
    let padding = Padding::for_fit(new_cols, new_rows, target_cols, target_rows, params.anchor);
    let (final_cols, final_rows, padded) = add_padding(&resized, new_cols, new_rows, padding);

    let out = RgbImage::from_raw(final_cols as u32, final_rows as u32, padded)
        .ok_or_else(|| Error::invalid_argument("padded_len", final_cols * final_rows * 3))?;
    Ok((out, padding))
}

/// Resize `src` into a padded `width` x `height` JPEG written to `dst`.
pub fn resize_to_square_jpeg(src: &Path, dst: &Path, params: &ResizeParams) -> Result<Padding> {
    let img = read_source_rgb(src)?;
    let (square, padding) = resize_to_square(&img, params)?;
    write_rgb_jpeg(
        dst,
        square.width() as usize,
        square.height() as usize,
        square.as_raw(),
        params.jpeg_quality,
    )?;
    Ok(padding)
}

/// Normalize an in-memory RGB image without touching the filesystem.
pub fn normalize_image(img: RgbImage, params: &NormalizeParams) -> Result<NormalizedTensor> {
    normalize_rgb(&rgb_to_array(img)?, params)
}

/// Normalize the image at `image_path` and write `<basename>.raw` next to it.
/// Returns the path of the raw file.
pub fn create_raw(image_path: &Path, params: &NormalizeParams) -> Result<PathBuf> {
    let array = read_rgb_array(image_path)?;
    let tensor = normalize_rgb(&array, params)?;
    let output = raw_path_for(image_path);
    write_raw(&output, &tensor)?;
    debug!("Wrote {} bytes to {:?}", tensor.byte_len(), output);
    Ok(output)
}

/// Loose JPEG filter: the full path only needs to contain ".jpg" somewhere.
pub fn is_jpeg_candidate(path: &Path) -> bool {
    path.to_string_lossy().contains(".jpg")
}

fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            debug!("Not following directory symlink: {:?}", path);
        } else {
            files.push(path);
        }
    }
    for subdir in subdirs {
        walk_files(&subdir, files)?;
    }
    Ok(())
}

/// Recursively collect every file under `root` whose path passes
/// [`is_jpeg_candidate`], top-down in directory enumeration order.
pub fn iterate_jpeg_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_files(root, &mut files)?;
    files.retain(|p| is_jpeg_candidate(p));
    Ok(files)
}

/// Resize every JPEG under `src_dir` into the flat directory `dest_dir`, then
/// write a `.raw` tensor for every JPEG found under `dest_dir`.
///
/// Output names keep only the basename, so same-named files from different
/// source subdirectories overwrite each other. The first error aborts the
/// batch.
pub fn convert_directory(
    src_dir: &Path,
    dest_dir: &Path,
    params: &ConversionParams,
) -> Result<BatchReport> {
    params.validate()?;
    std::fs::create_dir_all(dest_dir)?;

    let mut report = BatchReport::default();

    info!(
        "Converting images to {}x{} ({}) raw tensors",
        params.resize.width, params.resize.height, params.resize.method
    );
    info!("Scaling to square: {}", src_dir.display());
    for path in iterate_jpeg_files(src_dir)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        info!("{}", path.display());
        resize_to_square_jpeg(&path, &dest_dir.join(name), &params.resize)?;
        report.resized += 1;
    }

    info!("Image mean: {}", dest_dir.display());
    for path in iterate_jpeg_files(dest_dir)? {
        info!("{}", path.display());
        create_raw(&path, &params.normalize)?;
        report.normalized += 1;
    }

    Ok(report)
}
