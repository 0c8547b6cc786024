use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{AxisRange, ImageSize, Xyz};
use crate::foundation::error::{PanoError, PanoResult};

/// Which native renderer produces the scene's frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    /// Six cube faces per frame, stitched afterwards.
    Cubemap,
    /// Equirectangular frames straight from the renderer.
    Panorama,
}

/// Texture adjustments forwarded to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Exposure multiplier.
    pub texture_exposure: f64,
    /// Gamma.
    pub texture_gamma: f64,
    /// Saturation.
    pub texture_saturation: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            texture_exposure: 1.0,
            texture_gamma: 1.0,
            texture_saturation: 1.0,
        }
    }
}

/// Which viewpoints to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderView {
    /// Render the trajectory center as an extra view (unused by the panorama pipeline).
    pub center_view: bool,
    /// Render the trajectory poses.
    pub traj_view: bool,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            center_view: false,
            traj_view: true,
        }
    }
}

/// Camera trajectory section of a scene config.
///
/// Field names follow the JSON files already in use. The line pattern reads `segment_count` and
/// `line_length`, falling back to `grid_size` and `radius`; the random pattern reads
/// `pose_count`, falling back to `grid_size`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraTrajConfig {
    /// `circle`, `grid`, `line` or `random`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Pattern center, meters. Circle may take it from a sample file instead.
    #[serde(default)]
    pub center_position: Option<Xyz>,
    /// Base camera rotation, degrees.
    #[serde(default)]
    pub start_orientations: Xyz,
    /// Face each camera along the pattern (circle only).
    #[serde(default)]
    pub lock_direction: bool,
    /// Circle/grid radius, or legacy line length.
    #[serde(default)]
    pub radius: Option<f64>,
    /// Number of poses on the circle.
    #[serde(default)]
    pub circle_step_number: Option<usize>,
    /// Grid spacing, or legacy line segment / random pose count.
    #[serde(default)]
    pub grid_size: Option<f64>,
    /// Number of poses on the line.
    #[serde(default)]
    pub segment_count: Option<usize>,
    /// Line length in meters.
    #[serde(default)]
    pub line_length: Option<f64>,
    /// Number of random poses.
    #[serde(default)]
    pub pose_count: Option<usize>,
    /// Per-axis `[min, max]` position offsets for the random pattern, meters.
    #[serde(default)]
    pub random_position_offset_range: Option<[AxisRange; 3]>,
    /// Per-axis `[min, max]` rotation offsets for the random pattern, degrees.
    #[serde(default)]
    pub random_rotation_offset_range: Option<[AxisRange; 3]>,
    /// Random pattern seed.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Random pattern rejection cap per pose.
    #[serde(default)]
    pub max_attempts_per_pose: Option<usize>,
    /// Navigable-position sample file used when the circle has no `center_position`.
    #[serde(default)]
    pub center_sample_file: Option<PathBuf>,
    /// Record of `center_sample_file` to use.
    #[serde(default)]
    pub center_sample_index: Option<usize>,
}

/// Per-scene render configuration (`config.json`).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    /// Dataset scene folder name, e.g. `room_0`.
    pub scene_name: String,
    /// Renderer to use.
    #[serde(default = "default_render_type")]
    pub render_type: RenderType,
    /// Output image size. Cubemap faces are `height x height`.
    pub image: ImageSize,
    /// Texture adjustments.
    #[serde(default)]
    pub render_params: RenderParams,
    /// Viewpoint selection.
    #[serde(default)]
    pub render_view: RenderView,
    /// Trajectory generation.
    pub camera_traj: CameraTrajConfig,
}

fn default_render_type() -> RenderType {
    RenderType::Panorama
}

impl SceneConfig {
    /// Parse a scene config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PanoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PanoError::serde(format!("parse scene config JSON: {e}")))
    }

    /// Parse a scene config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PanoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| PanoError::io(path, e))?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            PanoError::serde(format!("parse scene config '{}': {e}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene.rs"]
mod tests;
