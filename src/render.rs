//! グレースケール行列のカラー化とハイライト描画
//!
//! 画像座標は x = 列, y = 行。

use crate::error::{CostViewError, Result};
use costview_common::{GrayMatrix, HighlightEntry};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// グレー値を3チャンネルに複製したRGB画像を作る
pub fn gray_to_rgb(gray: &GrayMatrix) -> RgbImage {
    let size = gray.size() as u32;
    let values = gray.as_slice();
    RgbImage::from_fn(size, size, |x, y| {
        let v = values[y as usize * gray.size() + x as usize];
        Rgb([v, v, v])
    })
}

/// 類似地点ペアの画素をハイライト色で上書き
///
/// 同じ座標が重複しても結果は変わらない。書き込んだ画素数を返す。
pub fn overlay_highlights(
    image: &mut RgbImage,
    highlights: &[HighlightEntry],
    color: [u8; 3],
) -> Result<usize> {
    let (width, height) = image.dimensions();
    for entry in highlights {
        let in_range = entry.row >= 0
            && entry.col >= 0
            && entry.row < i64::from(height)
            && entry.col < i64::from(width);
        if !in_range {
            return Err(CostViewError::HighlightOutOfRange {
                row: entry.row,
                col: entry.col,
                width,
                height,
            });
        }
        image.put_pixel(entry.col as u32, entry.row as u32, Rgb(color));
    }
    Ok(highlights.len())
}

/// PNGとして保存
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
