//! Text artifacts consumed by the renderer and by humans.
//!
//! - trajectory: `"<index> <px> <py> <pz> <rx> <ry> <rz>\n"` per pose
//! - center: `"0 <cx> <cy> <cz> 0.0 0.0 0.0 \n"`
//! - preview: Wavefront OBJ, vertex 1 is the anchor, triangle fan over the remaining vertices

use std::path::{Path, PathBuf};

use crate::camera_path::pose::{CameraPose, Trajectory};
use crate::foundation::core::DVec3;
use crate::foundation::error::{PanoError, PanoResult, ensure_parent_dir};

/// Paths of the three files written for one trajectory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrajectoryFiles {
    /// Pose list read by the renderer.
    pub path_file: PathBuf,
    /// Single-line center record.
    pub center_file: PathBuf,
    /// OBJ preview mesh, `<path_file>.obj`.
    pub mesh_file: PathBuf,
}

/// Preview mesh path for a trajectory file.
pub fn mesh_path_for(path_file: &Path) -> PathBuf {
    let mut s = path_file.as_os_str().to_owned();
    s.push(".obj");
    PathBuf::from(s)
}

/// Render the trajectory file contents.
pub fn format_trajectory(traj: &Trajectory) -> String {
    let mut out = String::new();
    for p in &traj.poses {
        out.push_str(&format!(
            "{} {:?} {:?} {:?} {:?} {:?} {:?}\n",
            p.index,
            p.position.x,
            p.position.y,
            p.position.z,
            p.rotation.x,
            p.rotation.y,
            p.rotation.z
        ));
    }
    out
}

/// Render the center file contents.
pub fn format_center(center: DVec3) -> String {
    format!(
        "0 {:?} {:?} {:?} {:?} {:?} {:?} \n",
        center.x, center.y, center.z, 0.0, 0.0, 0.0
    )
}

/// Render the OBJ preview: anchor, extras, then poses, fanned from vertex 1.
pub fn format_preview_mesh(traj: &Trajectory) -> String {
    let mut out = String::new();
    let vertices = std::iter::once(traj.preview_anchor)
        .chain(traj.preview_extra.iter().copied())
        .chain(traj.positions());
    for v in vertices {
        out.push_str(&format!("v {:?} {:?} {:?}\n", v.x, v.y, v.z));
    }

    let n = traj.preview_extra.len() + traj.poses.len();
    for idx in 1..n {
        out.push_str(&format!("f 1 {} {}\n", idx + 1, idx + 2));
    }
    out.push_str(&format!("f 1 {} 2\n", n + 1));
    out
}

/// Write trajectory, center and preview files, creating parent directories.
pub fn write_trajectory_files(
    traj: &Trajectory,
    path_file: impl AsRef<Path>,
    center_file: impl AsRef<Path>,
) -> PanoResult<TrajectoryFiles> {
    if traj.is_empty() {
        return Err(PanoError::configuration(
            "refusing to write an empty camera trajectory",
        ));
    }
    let files = TrajectoryFiles {
        path_file: path_file.as_ref().to_path_buf(),
        center_file: center_file.as_ref().to_path_buf(),
        mesh_file: mesh_path_for(path_file.as_ref()),
    };

    write_text(&files.path_file, &format_trajectory(traj))?;
    tracing::info!(path = %files.path_file.display(), poses = traj.len(), "wrote camera path");
    write_text(&files.center_file, &format_center(traj.center))?;
    tracing::info!(path = %files.center_file.display(), "wrote camera path center");
    write_text(&files.mesh_file, &format_preview_mesh(traj))?;
    tracing::info!(path = %files.mesh_file.display(), "wrote camera path preview mesh");

    Ok(files)
}

fn write_text(path: &Path, text: &str) -> PanoResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, text).map_err(|e| PanoError::io(path, e))
}

/// Parse a trajectory file written by [`write_trajectory_files`] (or by hand).
///
/// Blank lines are skipped; every other line needs an index and six numbers.
pub fn read_trajectory(path: impl AsRef<Path>) -> PanoResult<Vec<CameraPose>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PanoError::io(path, e))?;

    let mut poses = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let bad = |what: &str| {
            PanoError::format(format!(
                "'{}' line {}: {what}: '{line}'",
                path.display(),
                lineno + 1
            ))
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 7 {
            return Err(bad("expected 7 fields"));
        }
        let index: usize = fields[0].parse().map_err(|_| bad("bad pose index"))?;
        let mut v = [0.0f64; 6];
        for (slot, field) in v.iter_mut().zip(&fields[1..]) {
            *slot = field.parse().map_err(|_| bad("bad number"))?;
        }
        poses.push(CameraPose {
            index,
            position: DVec3::new(v[0], v[1], v[2]),
            rotation: DVec3::new(v[3], v[4], v[5]),
        });
    }
    Ok(poses)
}

#[cfg(test)]
#[path = "../../tests/unit/camera_path/emit.rs"]
mod tests;
