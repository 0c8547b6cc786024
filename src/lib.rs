//! cubepano turns cubemap renders of indoor scenes into equirectangular panorama datasets.
//!
//! The crate covers the pieces around an external native renderer:
//!
//! 1. **Camera paths**: circle, grid, line and random-walk trajectories, written as the pose
//!    list the renderer reads plus a center record and an OBJ preview mesh.
//! 2. **Depth codecs**: `.dpt` and `.pfm` depth maps, `.flo` optical flow, depth/disparity
//!    conversion, colour-mapped previews and unavailable-pixel masks.
//! 3. **Render glue**: renderer command lines, a stitching seam for the cubemap projection,
//!    post-processing and release collection, all driven by explicit [`RenderEnv`] and
//!    [`SceneConfig`] values.
//!
//! Everything is synchronous and single-threaded.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod camera_path;
mod config;
mod depth;
mod foundation;
mod render;

#[cfg(test)]
mod test_utils;

pub use camera_path::circle::{CenterSource, CircleParams, SAMPLED_CENTER_LIFT, generate_circle};
pub use camera_path::emit::{
    TrajectoryFiles, format_center, format_preview_mesh, format_trajectory, mesh_path_for,
    read_trajectory, write_trajectory_files,
};
pub use camera_path::grid::{GridParams, generate_grid};
pub use camera_path::line::{LineParams, generate_line};
pub use camera_path::pose::{CameraPose, Trajectory};
pub use camera_path::random::{
    DEFAULT_MAX_ATTEMPTS_PER_POSE, MIN_BASELINE, RandomParams, generate_random,
    generate_random_with_rng,
};
pub use camera_path::{GeneratedPath, PathKind, PathSpec, generate_path};
pub use config::env::RenderEnv;
pub use config::scene::{CameraTrajConfig, RenderParams, RenderType, RenderView, SceneConfig};
pub use depth::disparity::{depth_to_disparity, disparity_to_depth};
pub use depth::dpt::{read_dpt, write_dpt};
pub use depth::flo::{FlowField, read_flo, write_flo};
pub use depth::pfm::{PfmChannels, PfmImage, PfmSample, read_pfm, write_pfm, write_pfm_depth};
pub use depth::plane::{DepthMap, DisparityMap, Plane};
pub use depth::tagged::{MAX_DIM, TAG_FLOAT};
pub use depth::visual::{depth_mask, depth_to_color, jet, save_depth_mask, save_depth_visual};
pub use foundation::core::{AxisRange, DVec3, ImageSize, Xyz};
pub use foundation::error::{PanoError, PanoResult};
pub use render::layout::{CubeFace, CubemapLayout, FlowDirection, PanoLayout};
pub use render::pipeline::{
    CollectedScene, RenderOptions, SceneOverrides, ScenePlan, SceneReport, collect_release,
    discover_scenes, prepare_camera_path, render_dataset, render_scene,
};
pub use render::post::{mask_folder, post_process, visualize_depth_folder};
pub use render::renderer::{RendererCommand, cubemap_command, panorama_command};
pub use render::stitch::{
    CubemapStitcher, Faces, stitch_depth_folder, stitch_flow_folder, stitch_rgb_folder,
    stitch_scene,
};
