//! Camera trajectory generation for the native renderers.

pub(crate) mod circle;
pub(crate) mod emit;
pub(crate) mod grid;
pub(crate) mod line;
pub(crate) mod pose;
pub(crate) mod random;

use std::path::Path;
use std::str::FromStr;

use crate::camera_path::circle::{CenterSource, CircleParams, generate_circle};
use crate::camera_path::emit::{TrajectoryFiles, write_trajectory_files};
use crate::camera_path::grid::{GridParams, generate_grid};
use crate::camera_path::line::{LineParams, generate_line};
use crate::camera_path::pose::Trajectory;
use crate::camera_path::random::{DEFAULT_MAX_ATTEMPTS_PER_POSE, RandomParams, generate_random};
use crate::config::env::RenderEnv;
use crate::config::scene::CameraTrajConfig;
use crate::foundation::core::{AxisRange, DVec3};
use crate::foundation::error::{PanoError, PanoResult};

/// Height of the preview mesh anchor above the center for grid, line and random paths.
pub(crate) const PREVIEW_ANCHOR_LIFT: f64 = 0.07;

/// Trajectory pattern named by a config's `camera_traj.type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// Poses on a horizontal circle.
    Circle,
    /// Lattice points inside a horizontal disc.
    Grid,
    /// Evenly spaced poses along the x axis.
    Line,
    /// Rejection-sampled random walk inside a box.
    Random,
}

impl PathKind {
    /// Config spelling of the pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Grid => "grid",
            Self::Line => "line",
            Self::Random => "random",
        }
    }
}

impl FromStr for PathKind {
    type Err = PanoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Self::Circle),
            "grid" => Ok(Self::Grid),
            "line" => Ok(Self::Line),
            "random" => Ok(Self::Random),
            other => Err(PanoError::configuration(format!(
                "unsupported camera path type '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully parameterised trajectory pattern.
#[derive(Clone, Debug, PartialEq)]
pub enum PathSpec {
    /// See [`generate_circle`].
    Circle(CircleParams),
    /// See [`generate_grid`].
    Grid(GridParams),
    /// See [`generate_line`].
    Line(LineParams),
    /// See [`generate_random`].
    Random(RandomParams),
}

impl PathSpec {
    /// Pattern kind.
    pub fn kind(&self) -> PathKind {
        match self {
            Self::Circle(_) => PathKind::Circle,
            Self::Grid(_) => PathKind::Grid,
            Self::Line(_) => PathKind::Line,
            Self::Random(_) => PathKind::Random,
        }
    }

    /// Generate the poses.
    pub fn generate(&self) -> PanoResult<Trajectory> {
        match self {
            Self::Circle(p) => generate_circle(p),
            Self::Grid(p) => generate_grid(p),
            Self::Line(p) => generate_line(p),
            Self::Random(p) => generate_random(p),
        }
    }

    /// Build a pattern from the `camera_traj` section of a scene config.
    pub fn from_config(cfg: &CameraTrajConfig) -> PanoResult<Self> {
        let kind: PathKind = cfg.kind.parse()?;
        let rotation = DVec3::from(cfg.start_orientations);

        let spec = match kind {
            PathKind::Circle => {
                let center = match (cfg.center_position, &cfg.center_sample_file) {
                    (Some(c), _) => CenterSource::Fixed(c.into()),
                    (None, Some(path)) => CenterSource::SampleFile {
                        path: path.clone(),
                        record: cfg.center_sample_index.ok_or_else(|| {
                            PanoError::configuration(
                                "circle path: center_sample_file needs center_sample_index",
                            )
                        })?,
                    },
                    (None, None) => {
                        return Err(PanoError::configuration(
                            "circle path needs center_position or center_sample_file",
                        ));
                    }
                };
                Self::Circle(CircleParams {
                    steps: required(cfg.circle_step_number, kind, "circle_step_number")?,
                    radius: required(cfg.radius, kind, "radius")?,
                    center,
                    initial_rotation: rotation,
                    lock_direction: cfg.lock_direction,
                })
            }
            PathKind::Grid => Self::Grid(GridParams {
                grid_size: required(cfg.grid_size, kind, "grid_size")?,
                radius: required(cfg.radius, kind, "radius")?,
                center: center_point(cfg, kind)?,
                lock_direction: cfg.lock_direction,
            }),
            PathKind::Line => {
                let segment_count = match cfg.segment_count {
                    Some(n) => n,
                    None => count_from_legacy(cfg.grid_size, kind, "segment_count")?,
                };
                Self::Line(LineParams {
                    segment_count,
                    line_length: required(cfg.line_length.or(cfg.radius), kind, "line_length")?,
                    center: center_point(cfg, kind)?,
                    rotation,
                })
            }
            PathKind::Random => {
                let pose_count = match cfg.pose_count {
                    Some(n) => n,
                    None => count_from_legacy(cfg.grid_size, kind, "pose_count")?,
                };
                Self::Random(RandomParams {
                    pose_count,
                    position_range: cfg
                        .random_position_offset_range
                        .unwrap_or([AxisRange { min: 0.0, max: 0.0 }; 3]),
                    rotation_range: cfg
                        .random_rotation_offset_range
                        .unwrap_or([AxisRange { min: 0.0, max: 0.0 }; 3]),
                    center: center_point(cfg, kind)?,
                    center_rotation: rotation,
                    seed: cfg.seed,
                    max_attempts_per_pose: cfg
                        .max_attempts_per_pose
                        .unwrap_or(DEFAULT_MAX_ATTEMPTS_PER_POSE),
                })
            }
        };
        Ok(spec)
    }
}

fn required<T>(v: Option<T>, kind: PathKind, key: &str) -> PanoResult<T> {
    v.ok_or_else(|| PanoError::configuration(format!("{kind} path needs camera_traj.{key}")))
}

fn center_point(cfg: &CameraTrajConfig, kind: PathKind) -> PanoResult<DVec3> {
    required(cfg.center_position, kind, "center_position").map(DVec3::from)
}

/// Older configs reuse `grid_size` as the pose count of line and random paths.
fn count_from_legacy(grid_size: Option<f64>, kind: PathKind, key: &str) -> PanoResult<usize> {
    let v = required(grid_size, kind, key)?;
    if v.fract() != 0.0 || !(0.0..=u32::MAX as f64).contains(&v) {
        return Err(PanoError::configuration(format!(
            "{kind} path: grid_size {v} is not a pose count; set camera_traj.{key}"
        )));
    }
    Ok(v as usize)
}

/// Files written for one scene and the number of frames the renderer will produce.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedPath {
    /// Trajectory, center and preview files.
    pub files: TrajectoryFiles,
    /// Number of poses in the trajectory.
    pub frame_count: usize,
}

/// Generate the trajectory described by `cfg` and write its files into `out_dir`.
///
/// File names come from `env` (`camera_traj.csv`, `camera_traj_center.csv` and the
/// `camera_traj.csv.obj` preview by default).
#[tracing::instrument(skip(cfg, env), fields(path_type = %cfg.kind))]
pub fn generate_path(
    out_dir: &Path,
    cfg: &CameraTrajConfig,
    env: &RenderEnv,
) -> PanoResult<GeneratedPath> {
    let spec = PathSpec::from_config(cfg)?;
    let traj = spec.generate()?;
    tracing::info!(
        kind = %spec.kind(),
        center = ?traj.center,
        poses = traj.len(),
        "generated camera path"
    );

    let files = write_trajectory_files(
        &traj,
        out_dir.join(&env.camera_path_filename),
        out_dir.join(&env.camera_path_center_filename),
    )?;
    Ok(GeneratedPath {
        files,
        frame_count: traj.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/mod.rs"]
mod tests;
