use crate::camera_path::pose::Trajectory;
use crate::foundation::core::DVec3;
use crate::foundation::error::{PanoError, PanoResult};

/// Slack added to the radius so lattice points exactly on the circle are kept.
const BOUNDARY_EPS: f64 = f64::EPSILON * 10.0;

/// Parameters of the grid-circle pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams {
    /// Lattice spacing in meters.
    pub grid_size: f64,
    /// Keep lattice points within this planar distance of the center.
    pub radius: f64,
    /// Center point.
    pub center: DVec3,
    /// Not supported for this pattern; `true` is rejected.
    pub lock_direction: bool,
}

/// Square lattice points inside a horizontal disc, in x-major scan order.
pub fn generate_grid(params: &GridParams) -> PanoResult<Trajectory> {
    if params.lock_direction {
        return Err(PanoError::configuration(
            "lock_direction is not supported for the grid camera path",
        ));
    }
    if !(params.grid_size > 0.0 && params.grid_size.is_finite()) {
        return Err(PanoError::configuration(format!(
            "grid_size must be > 0, got {}",
            params.grid_size
        )));
    }
    if !params.radius.is_finite() || params.radius < 0.0 {
        return Err(PanoError::configuration(format!(
            "grid radius must be a non-negative number, got {}",
            params.radius
        )));
    }

    let c = params.center;
    let half = (params.radius / params.grid_size).ceil() as i64 + 1;

    let mut parts = Vec::new();
    for i in -half..=half {
        let x = c.x + i as f64 * params.grid_size;
        for j in -half..=half {
            let y = c.y + j as f64 * params.grid_size;
            let dist = (x - c.x).hypot(y - c.y);
            if dist - BOUNDARY_EPS > params.radius {
                continue;
            }
            parts.push((DVec3::new(x, y, c.z), DVec3::ZERO));
        }
    }
    tracing::debug!(kept = parts.len(), half, "grid lattice filtered");
    Ok(Trajectory::from_parts(c, parts).with_anchor_lift(super::PREVIEW_ANCHOR_LIFT))
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/grid.rs"]
mod tests;
