use crate::foundation::core::DVec3;

/// One renderer viewpoint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// 0-based position in the trajectory.
    pub index: usize,
    /// Camera position in meters.
    pub position: DVec3,
    /// Rotation about x, y, z in degrees; zero when the direction is not locked.
    pub rotation: DVec3,
}

/// Ordered camera poses sharing one frame anchored at `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Center point the pattern was generated around.
    pub center: DVec3,
    /// Poses with indices `0..len` in emission order.
    pub poses: Vec<CameraPose>,
    /// First vertex of the preview mesh.
    pub preview_anchor: DVec3,
    /// Extra preview vertices emitted before the poses (e.g. a sampling bounding box).
    pub preview_extra: Vec<DVec3>,
}

impl Trajectory {
    /// Build a trajectory from positions and rotations, numbering poses in order.
    pub(crate) fn from_parts(center: DVec3, parts: impl IntoIterator<Item = (DVec3, DVec3)>) -> Self {
        let poses = parts
            .into_iter()
            .enumerate()
            .map(|(index, (position, rotation))| CameraPose {
                index,
                position,
                rotation,
            })
            .collect();
        Self {
            center,
            poses,
            preview_anchor: center,
            preview_extra: Vec::new(),
        }
    }

    /// Lift the preview anchor above the center so it does not sit on a pose.
    pub(crate) fn with_anchor_lift(mut self, dz: f64) -> Self {
        self.preview_anchor = self.center + DVec3::new(0.0, 0.0, dz);
        self
    }

    /// Number of poses (rendered frames).
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Return `true` when the trajectory has no poses.
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Pose positions in order.
    pub fn positions(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.poses.iter().map(|p| p.position)
    }
}
