use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use jpg2raw::core::params::{DEFAULT_JPEG_QUALITY, DEFAULT_TARGET_SIZE};
use jpg2raw::{PadAnchor, ResizeMethod};

#[derive(Parser, Debug)]
#[command(
    name = "jpg2raw",
    version,
    about = "Batch convert jpgs into mean-subtracted raw tensors"
)]
pub struct CliArgs {
    /// Output directory root
    #[arg(short = 'd', long = "dest")]
    pub dest: PathBuf,

    /// Input directory root, searched recursively for *.jpg
    #[arg(short = 'i', long = "img_folder")]
    pub img_folder: PathBuf,

    /// Target width
    #[arg(short = 'w', long, default_value_t = DEFAULT_TARGET_SIZE)]
    pub width: u32,

    /// Target height
    #[arg(short = 'g', long, default_value_t = DEFAULT_TARGET_SIZE)]
    pub height: u32,

    /// Image resize type. Should match the resize type used on the images the
    /// model was trained with, otherwise model accuracy may suffer.
    #[arg(short = 'r', long = "resize_type", value_enum, default_value_t = ResizeMethod::Bilinear)]
    pub resize_type: ResizeMethod,

    /// Canvas corner the scaled image is pinned to; padding fills the opposite side
    #[arg(long, value_enum, default_value_t = PadAnchor::TopRight)]
    pub pad_anchor: PadAnchor,

    /// JPEG quality of the resized images
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: u8,

    /// JSON file with normalization settings (mean, divisor, bgr, save_uint8)
    #[arg(long)]
    pub norm_config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

/// Accept the historical `-g:` spelling of the height flag.
pub fn rewrite_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-g:") => OsString::from("-g"),
            Some(s) if s.starts_with("-g:=") => OsString::from(format!("--height={}", &s[4..])),
            _ => arg,
        })
        .collect()
}
