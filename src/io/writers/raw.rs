use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::processing::normalize::NormalizedTensor;
use crate::error::Result;

/// `<image path without its last extension>.raw`
pub fn raw_path_for(image_path: &Path) -> PathBuf {
    image_path.with_extension("raw")
}

/// Dump a tensor as a flat, header-less row-major file.
pub fn write_raw(output: &Path, tensor: &NormalizedTensor) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&tensor.to_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_path_replaces_last_extension_only() {
        assert_eq!(
            raw_path_for(Path::new("/out/cat.jpg")),
            PathBuf::from("/out/cat.raw")
        );
        assert_eq!(
            raw_path_for(Path::new("/out/a.jpg.bak")),
            PathBuf::from("/out/a.jpg.raw")
        );
        assert_eq!(
            raw_path_for(Path::new("/out/x.jpg.d/photo")),
            PathBuf::from("/out/x.jpg.d/photo.raw")
        );
    }
}
