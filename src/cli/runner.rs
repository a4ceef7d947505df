use tracing::info;

use jpg2raw::api::convert_directory;
use jpg2raw::{ConversionParams, NormalizeParams, ResizeParams};

use super::args::CliArgs;

fn conversion_params(args: &CliArgs) -> jpg2raw::Result<ConversionParams> {
    let normalize = match &args.norm_config {
        Some(path) => {
            info!("Loading normalization settings from {:?}", path);
            NormalizeParams::from_json_file(path)?
        }
        None => NormalizeParams::default(),
    };

    let params = ConversionParams {
        resize: ResizeParams {
            width: args.width,
            height: args.height,
            method: args.resize_type,
            anchor: args.pad_anchor,
            jpeg_quality: args.jpeg_quality,
        },
        normalize,
    };
    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let level = if args.log {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let params = conversion_params(&args)?;

    let src = std::path::absolute(&args.img_folder)?;
    let dest = std::path::absolute(&args.dest)?;

    let report = convert_directory(&src, &dest, &params)?;

    info!("Conversion complete!");
    info!("Resized: {}", report.resized);
    info!("Raw files: {}", report.normalized);
    Ok(())
}
