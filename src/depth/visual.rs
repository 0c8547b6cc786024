use std::path::Path;

use anyhow::Context as _;
use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::depth::plane::DepthMap;
use crate::foundation::error::{PanoResult, ensure_parent_dir};

/// Matplotlib-style `jet` colormap for `t` in `[0, 1]`.
pub fn jet(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let channel = |offset: f32| {
        let v = (1.5 - (4.0 * t - offset).abs()).clamp(0.0, 1.0);
        (v * 255.0).round() as u8
    };
    [channel(3.0), channel(2.0), channel(1.0)]
}

/// Colorize a depth map with `jet`, normalized to its own finite min/max.
///
/// Non-finite samples render black.
pub fn depth_to_color(depth: &DepthMap) -> RgbImage {
    let (lo, hi) = depth.min_max_by(f32::is_finite).unwrap_or((0.0, 0.0));
    let span = hi - lo;
    RgbImage::from_fn(depth.width() as u32, depth.height() as u32, |x, y| {
        let v = depth
            .get(x as usize, y as usize)
            .copied()
            .unwrap_or(f32::NAN);
        if !v.is_finite() {
            return Rgb([0, 0, 0]);
        }
        let t = if span > 0.0 { (v - lo) / span } else { 0.0 };
        Rgb(jet(t))
    })
}

/// Save the colorized depth map; format follows the file extension (`.png`, `.jpg`).
pub fn save_depth_visual(depth: &DepthMap, path: impl AsRef<Path>) -> PanoResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    depth_to_color(depth)
        .save(path)
        .with_context(|| format!("write depth visualization '{}'", path.display()))?;
    Ok(())
}

/// Mask of unavailable pixels: 255 where depth is exactly zero, 0 elsewhere.
pub fn depth_mask(depth: &DepthMap) -> GrayImage {
    GrayImage::from_fn(depth.width() as u32, depth.height() as u32, |x, y| {
        let unavailable = depth.get(x as usize, y as usize) == Some(&0.0);
        Luma([if unavailable { 255 } else { 0 }])
    })
}

/// Save [`depth_mask`] as an image file.
pub fn save_depth_mask(depth: &DepthMap, path: impl AsRef<Path>) -> PanoResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    depth_mask(depth)
        .save(path)
        .with_context(|| format!("write depth mask '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/depth/visual.rs"]
mod tests;
