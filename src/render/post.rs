use std::path::Path;

use crate::config::env::RenderEnv;
use crate::depth::dpt::read_dpt;
use crate::depth::visual::{save_depth_mask, save_depth_visual};
use crate::foundation::error::PanoResult;
use crate::render::layout::PanoLayout;

/// Write an unavailable-pixel mask next to every pano depth map.
pub fn mask_folder(pano_dir: &Path, frame_count: usize) -> PanoResult<()> {
    let pano = PanoLayout::new(pano_dir);
    for frame in 0..frame_count {
        if frame % 10 == 0 {
            tracing::info!(frame, frame_count, "writing depth masks");
        }
        let depth = read_dpt(pano.depth(frame))?;
        save_depth_mask(&depth, pano.mask(frame))?;
    }
    Ok(())
}

/// Write a colour-mapped image next to every pano depth map.
pub fn visualize_depth_folder(pano_dir: &Path, frame_count: usize) -> PanoResult<()> {
    let pano = PanoLayout::new(pano_dir);
    for frame in 0..frame_count {
        if frame % 10 == 0 {
            tracing::info!(frame, frame_count, "writing depth visualizations");
        }
        let depth = read_dpt(pano.depth(frame))?;
        save_depth_visual(&depth, pano.depth_visual(frame))?;
    }
    Ok(())
}

/// Masks and visualisations for one scene's panoramas, as enabled in `env`.
#[tracing::instrument(skip(env))]
pub fn post_process(env: &RenderEnv, pano_dir: &Path, frame_count: usize) -> PanoResult<()> {
    if env.render_unavailable_mask && env.render_depth {
        mask_folder(pano_dir, frame_count)?;
    }
    if env.visualize {
        if env.render_depth {
            visualize_depth_folder(pano_dir, frame_count)?;
        }
        if env.render_motion_vector {
            tracing::warn!("optical flow visualization is not available, skipping");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/post.rs"]
mod tests;
