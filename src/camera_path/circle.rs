use std::path::{Path, PathBuf};

use crate::camera_path::pose::Trajectory;
use crate::foundation::core::DVec3;
use crate::foundation::error::{PanoError, PanoResult};

/// Height added to a sampled floor position so the camera sits at eye level.
pub const SAMPLED_CENTER_LIFT: f64 = 0.5;

/// Where the circle center comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum CenterSource {
    /// Explicit center point.
    Fixed(DVec3),
    /// Record `record` of a scene sample file with one `x y z ...` line per navigable position.
    SampleFile {
        /// Sample file path.
        path: PathBuf,
        /// 0-based line to use.
        record: usize,
    },
}

impl CenterSource {
    /// Resolve to a concrete center point.
    pub fn resolve(&self) -> PanoResult<DVec3> {
        match self {
            Self::Fixed(c) => Ok(*c),
            Self::SampleFile { path, record } => {
                let p = read_sample_record(path, *record)?;
                let center = p + DVec3::new(0.0, 0.0, SAMPLED_CENTER_LIFT);
                tracing::info!(path = %path.display(), record, ?center, "sampled circle center");
                Ok(center)
            }
        }
    }
}

fn read_sample_record(path: &Path, record: usize) -> PanoResult<DVec3> {
    let text = std::fs::read_to_string(path).map_err(|e| PanoError::io(path, e))?;
    let records: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let line = records.get(record).ok_or_else(|| {
        PanoError::configuration(format!(
            "center sample record {record} out of range, '{}' has {} records",
            path.display(),
            records.len()
        ))
    })?;

    let values = line
        .split_whitespace()
        .take(3)
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            PanoError::format(format!(
                "'{}' record {record}: bad number: {e}",
                path.display()
            ))
        })?;
    match values[..] {
        [x, y, z] => Ok(DVec3::new(x, y, z)),
        _ => Err(PanoError::format(format!(
            "'{}' record {record}: expected at least 3 values",
            path.display()
        ))),
    }
}

/// Parameters of the circle pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleParams {
    /// Number of poses around the circle.
    pub steps: usize,
    /// Circle radius in meters.
    pub radius: f64,
    /// Circle center.
    pub center: CenterSource,
    /// Rotation whose x and y components are kept when the direction is locked.
    pub initial_rotation: DVec3,
    /// Turn each camera to face along its angle on the circle.
    pub lock_direction: bool,
}

/// `steps` poses on a horizontal circle, pose `i` at angle `2*pi*i/steps`.
pub fn generate_circle(params: &CircleParams) -> PanoResult<Trajectory> {
    if params.steps == 0 {
        return Err(PanoError::configuration("circle steps must be > 0"));
    }
    if !params.radius.is_finite() || params.radius < 0.0 {
        return Err(PanoError::configuration(format!(
            "circle radius must be a non-negative number, got {}",
            params.radius
        )));
    }
    let center = params.center.resolve()?;

    let poses = (0..params.steps).map(|i| {
        let theta = i as f64 / params.steps as f64 * std::f64::consts::TAU;
        let position = center + params.radius * DVec3::new(theta.cos(), theta.sin(), 0.0);
        let rotation = if params.lock_direction {
            DVec3::new(
                params.initial_rotation.x,
                params.initial_rotation.y,
                theta.to_degrees(),
            )
        } else {
            DVec3::ZERO
        };
        (position, rotation)
    });
    Ok(Trajectory::from_parts(center, poses))
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/circle.rs"]
mod tests;
