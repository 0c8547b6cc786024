//! Cubemap-to-panorama stitching seam.
//!
//! The projection itself lives behind [`CubemapStitcher`]; the folder drivers here only read
//! six faces per frame, hand them over, and write the panorama.

use std::path::Path;

use anyhow::Context as _;
use image::RgbImage;

use crate::config::env::RenderEnv;
use crate::depth::dpt::{read_dpt, write_dpt};
use crate::depth::flo::{FlowField, read_flo, write_flo};
use crate::depth::plane::DepthMap;
use crate::foundation::error::{PanoError, PanoResult, ensure_parent_dir};
use crate::render::layout::{CubeFace, CubemapLayout, FlowDirection, PanoLayout};

/// Six cube faces in [`CubeFace::ALL`] order.
pub type Faces<T> = [T; 6];

/// Projects six cube faces onto one equirectangular image.
pub trait CubemapStitcher {
    /// Stitch RGB faces.
    fn stitch_rgb(&self, faces: &Faces<RgbImage>) -> PanoResult<RgbImage>;
    /// Stitch depth faces. Depth is distance along the face normal in, radial distance out.
    fn stitch_depth(&self, faces: &Faces<DepthMap>) -> PanoResult<DepthMap>;
    /// Stitch motion-vector faces into panorama optical flow.
    fn stitch_flow(&self, faces: &Faces<FlowField>) -> PanoResult<FlowField>;
}

fn read_faces<T>(mut read: impl FnMut(CubeFace) -> PanoResult<T>) -> PanoResult<Faces<T>> {
    let faces = CubeFace::ALL
        .iter()
        .map(|&f| read(f))
        .collect::<PanoResult<Vec<T>>>()?;
    match faces.try_into() {
        Ok(faces) => Ok(faces),
        Err(_) => Err(PanoError::format("cubemap frame does not have six faces")),
    }
}

fn read_rgb(path: &Path) -> PanoResult<RgbImage> {
    let img = image::open(path).with_context(|| format!("read image '{}'", path.display()))?;
    Ok(img.to_rgb8())
}

fn log_progress(what: &str, frame: usize, frame_count: usize) {
    if frame % 10 == 0 {
        tracing::info!(frame, frame_count, "stitching {what}");
    }
}

/// Stitch `frame_count` RGB frames from `cubemap_dir` into `pano_dir`.
pub fn stitch_rgb_folder(
    stitcher: &dyn CubemapStitcher,
    cubemap_dir: &Path,
    pano_dir: &Path,
    frame_count: usize,
) -> PanoResult<()> {
    let cube = CubemapLayout::new(cubemap_dir);
    let pano = PanoLayout::new(pano_dir);
    for frame in 0..frame_count {
        log_progress("rgb", frame, frame_count);
        let faces = read_faces(|f| read_rgb(&cube.rgb(frame, f)))?;
        let out = pano.rgb(frame);
        ensure_parent_dir(&out)?;
        stitcher
            .stitch_rgb(&faces)?
            .save(&out)
            .with_context(|| format!("write panorama '{}'", out.display()))?;
    }
    Ok(())
}

/// Stitch `frame_count` depth frames from `cubemap_dir` into `pano_dir`.
pub fn stitch_depth_folder(
    stitcher: &dyn CubemapStitcher,
    cubemap_dir: &Path,
    pano_dir: &Path,
    frame_count: usize,
) -> PanoResult<()> {
    let cube = CubemapLayout::new(cubemap_dir);
    let pano = PanoLayout::new(pano_dir);
    for frame in 0..frame_count {
        log_progress("depth", frame, frame_count);
        let faces = read_faces(|f| read_dpt(cube.depth(frame, f)))?;
        write_dpt(&stitcher.stitch_depth(&faces)?, pano.depth(frame))?;
    }
    Ok(())
}

/// Stitch `frame_count` optical-flow frames of one direction.
pub fn stitch_flow_folder(
    stitcher: &dyn CubemapStitcher,
    cubemap_dir: &Path,
    pano_dir: &Path,
    frame_count: usize,
    direction: FlowDirection,
) -> PanoResult<()> {
    let cube = CubemapLayout::new(cubemap_dir);
    let pano = PanoLayout::new(pano_dir);
    for frame in 0..frame_count {
        log_progress("optical flow", frame, frame_count);
        let faces = read_faces(|f| read_flo(cube.flow(frame, f, direction)))?;
        write_flo(&stitcher.stitch_flow(&faces)?, pano.flow(frame, direction))?;
    }
    Ok(())
}

/// Stitch every enabled output of one rendered scene.
#[tracing::instrument(skip(stitcher, env))]
pub fn stitch_scene(
    stitcher: &dyn CubemapStitcher,
    env: &RenderEnv,
    cubemap_dir: &Path,
    pano_dir: &Path,
    frame_count: usize,
) -> PanoResult<()> {
    if env.render_rgb {
        stitch_rgb_folder(stitcher, cubemap_dir, pano_dir, frame_count)?;
    }
    if env.render_depth {
        stitch_depth_folder(stitcher, cubemap_dir, pano_dir, frame_count)?;
    }
    if env.render_motion_vector {
        for dir in [FlowDirection::Forward, FlowDirection::Backward] {
            stitch_flow_folder(stitcher, cubemap_dir, pano_dir, frame_count, dir)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/stitch.rs"]
mod tests;
