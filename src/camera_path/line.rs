use crate::camera_path::pose::Trajectory;
use crate::foundation::core::DVec3;
use crate::foundation::error::{PanoError, PanoResult};

/// Parameters of the line pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct LineParams {
    /// Number of poses.
    pub segment_count: usize,
    /// Length of the line in meters.
    pub line_length: f64,
    /// Midpoint of the line.
    pub center: DVec3,
    /// Rotation shared by every pose, degrees.
    pub rotation: DVec3,
}

/// Evenly spaced poses along the x axis, starting at `cx - L/2` with step `L/segment_count`.
pub fn generate_line(params: &LineParams) -> PanoResult<Trajectory> {
    if params.segment_count == 0 {
        return Err(PanoError::configuration("line segment_count must be > 0"));
    }
    if !params.line_length.is_finite() {
        return Err(PanoError::configuration(format!(
            "line_length must be finite, got {}",
            params.line_length
        )));
    }

    let c = params.center;
    let step = params.line_length / params.segment_count as f64;
    let x_start = c.x - params.line_length / 2.0;
    let parts = (0..params.segment_count).map(|i| {
        (
            DVec3::new(x_start + step * i as f64, c.y, c.z),
            params.rotation,
        )
    });
    Ok(Trajectory::from_parts(c, parts).with_anchor_lift(super::PREVIEW_ANCHOR_LIFT))
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/line.rs"]
mod tests;
