use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera_path::pose::Trajectory;
use crate::foundation::core::{AxisRange, DVec3};
use crate::foundation::error::{PanoError, PanoResult};

/// Minimum distance between consecutive accepted positions, in meters.
///
/// Consecutive frames closer than this give degenerate optical flow.
pub const MIN_BASELINE: f64 = 0.3;

/// Default cap on consecutive rejected draws for a single pose.
pub const DEFAULT_MAX_ATTEMPTS_PER_POSE: usize = 10_000;

/// Parameters of the random-walk pattern.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomParams {
    /// Number of poses to accept.
    pub pose_count: usize,
    /// Per-axis position offsets around `center`, meters.
    pub position_range: [AxisRange; 3],
    /// Per-axis rotation offsets around `center_rotation`, degrees.
    pub rotation_range: [AxisRange; 3],
    /// Center point of the sampling box.
    pub center: DVec3,
    /// Base rotation, degrees.
    pub center_rotation: DVec3,
    /// Seed for reproducible trajectories; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Give up after this many consecutive rejections for one pose.
    pub max_attempts_per_pose: usize,
}

impl RandomParams {
    fn validate(&self) -> PanoResult<()> {
        if self.pose_count == 0 {
            return Err(PanoError::configuration("random pose_count must be > 0"));
        }
        if self.max_attempts_per_pose == 0 {
            return Err(PanoError::configuration(
                "random max_attempts_per_pose must be > 0",
            ));
        }
        for r in self.position_range.iter().chain(&self.rotation_range) {
            r.validate()?;
        }
        Ok(())
    }

    /// Corners of the position sampling box, x-major then y then z.
    pub fn bounding_box_corners(&self) -> Vec<DVec3> {
        let [rx, ry, rz] = self.position_range;
        let mut corners = Vec::with_capacity(8);
        for dx in [rx.min, rx.max] {
            for dy in [ry.min, ry.max] {
                for dz in [rz.min, rz.max] {
                    corners.push(self.center + DVec3::new(dx, dy, dz));
                }
            }
        }
        corners
    }
}

/// Rejection-sample `pose_count` poses whose consecutive positions are more than
/// [`MIN_BASELINE`] apart. The first pose is compared against the center.
pub fn generate_random(params: &RandomParams) -> PanoResult<Trajectory> {
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    generate_random_with_rng(params, &mut rng)
}

/// [`generate_random`] with a caller-provided random source.
pub fn generate_random_with_rng<R: Rng>(
    params: &RandomParams,
    rng: &mut R,
) -> PanoResult<Trajectory> {
    params.validate()?;

    let mut parts = Vec::with_capacity(params.pose_count);
    let mut previous = params.center;
    while parts.len() < params.pose_count {
        let mut attempts = 0usize;
        let (position, rotation) = loop {
            if attempts == params.max_attempts_per_pose {
                return Err(PanoError::configuration(format!(
                    "random camera path: no position more than {MIN_BASELINE} m from the \
                     previous one after {attempts} draws for pose {}; position range {:?} is too small",
                    parts.len(),
                    params.position_range
                )));
            }
            attempts += 1;

            let position = params.center + sample_offset(rng, &params.position_range);
            let rotation = params.center_rotation + sample_offset(rng, &params.rotation_range);
            let dist = position.distance(previous);
            if dist > MIN_BASELINE {
                break (position, rotation);
            }
            tracing::debug!(dist, "random pose too close to previous, redrawing");
        };
        previous = position;
        parts.push((position, rotation));
    }

    let mut traj = Trajectory::from_parts(params.center, parts)
        .with_anchor_lift(super::PREVIEW_ANCHOR_LIFT);
    traj.preview_extra = params.bounding_box_corners();
    Ok(traj)
}

fn sample_offset<R: Rng>(rng: &mut R, ranges: &[AxisRange; 3]) -> DVec3 {
    let mut axis = |r: AxisRange| {
        if r.min == r.max {
            r.min
        } else {
            rng.random_range(r.min..r.max)
        }
    };
    let x = axis(ranges[0]);
    let y = axis(ranges[1]);
    let z = axis(ranges[2]);
    DVec3::new(x, y, z)
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/random.rs"]
mod tests;
