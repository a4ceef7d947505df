use tracing::debug;

use crate::types::PadAnchor;

const CHANNELS: usize = 3;

/// Border widths, in pixels, added around a scaled image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Padding {
    /// Padding that grows a `cols` x `rows` image to `target_cols` x `target_rows`.
    ///
    /// When the scaled width already equals the target width only the vertical
    /// axis is padded, otherwise only the horizontal one. The anchor decides
    /// which side of that axis takes the fill.
    pub fn for_fit(
        cols: usize,
        rows: usize,
        target_cols: usize,
        target_rows: usize,
        anchor: PadAnchor,
    ) -> Self {
        let mut padding = Padding::default();
        if cols == target_cols {
            let fill = target_rows.saturating_sub(rows);
            match anchor {
                PadAnchor::TopRight | PadAnchor::TopLeft => padding.bottom = fill,
                PadAnchor::BottomRight => padding.top = fill,
            }
        } else {
            let fill = target_cols.saturating_sub(cols);
            match anchor {
                PadAnchor::TopLeft => padding.right = fill,
                PadAnchor::TopRight | PadAnchor::BottomRight => padding.left = fill,
            }
        }
        padding
    }
}

/// Copy interleaved RGB8 data into a black canvas grown by `padding`.
///
/// Returns `(final_cols, final_rows, data)`.
pub fn add_padding(
    data: &[u8],
    cols: usize,
    rows: usize,
    padding: Padding,
) -> (usize, usize, Vec<u8>) {
    let final_cols = padding.left + cols + padding.right;
    let final_rows = padding.top + rows + padding.bottom;

    debug!(
        "Adding padding: left={}, top={}, right={}, bottom={}; final dimensions {}x{}",
        padding.left, padding.top, padding.right, padding.bottom, final_cols, final_rows
    );

    let row_len = cols * CHANNELS;
    let mut padded = vec![0u8; final_cols * final_rows * CHANNELS];
    for row in 0..rows {
        let src_offset = row * row_len;
        let dst_offset = ((row + padding.top) * final_cols + padding.left) * CHANNELS;
        padded[dst_offset..dst_offset + row_len]
            .copy_from_slice(&data[src_offset..src_offset + row_len]);
    }
    (final_cols, final_rows, padded)
}
