use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{PanoError, PanoResult};

/// Dataset locations, renderer programs and render toggles shared by every scene.
///
/// Missing keys take the values the Replica dataset tooling has always used. Loaded once and
/// passed explicitly to path generation and the render pipeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderEnv {
    /// Root of the dataset; one sub-folder per scene holding its mesh and textures.
    pub dataset_root: PathBuf,
    /// Root of the render output; one sub-folder per scene config.
    pub output_root: PathBuf,
    /// Cubemap renderer executable.
    pub cubemap_program: PathBuf,
    /// Panorama renderer executable.
    pub panorama_program: PathBuf,
    /// Mesh file name inside a scene folder.
    pub mesh_file: String,
    /// Texture atlas folder name inside a scene folder.
    pub atlas_folder: String,
    /// Mirror surface file name inside a scene folder.
    pub mirror_file: String,
    /// Scenes rendered without the mirror file.
    pub no_mirror_scenes: Vec<String>,
    /// Cubemap output sub-folder.
    pub cubemap_dir: String,
    /// Panorama output sub-folder.
    pub pano_dir: String,
    /// Trajectory file name.
    pub camera_path_filename: String,
    /// Trajectory center file name.
    pub camera_path_center_filename: String,
    /// Per-scene config file name.
    pub config_filename: String,
    /// Render RGB images.
    pub render_rgb: bool,
    /// Render depth maps.
    pub render_depth: bool,
    /// Render forward/backward motion vectors.
    pub render_motion_vector: bool,
    /// Write unavailable-pixel masks for pano depth maps.
    pub render_unavailable_mask: bool,
    /// Write depth visualisations for pano depth maps.
    pub visualize: bool,
}

impl Default for RenderEnv {
    fn default() -> Self {
        Self {
            dataset_root: PathBuf::from("Replica"),
            output_root: PathBuf::from("Replica_360"),
            cubemap_program: PathBuf::from("ReplicaRendererCubemap"),
            panorama_program: PathBuf::from("ReplicaRendererPanorama"),
            mesh_file: "mesh.ply".to_owned(),
            atlas_folder: "textures".to_owned(),
            mirror_file: "glass.sur".to_owned(),
            no_mirror_scenes: vec!["frl_apartment_1".to_owned()],
            cubemap_dir: "cubemap".to_owned(),
            pano_dir: "pano".to_owned(),
            camera_path_filename: "camera_traj.csv".to_owned(),
            camera_path_center_filename: "camera_traj_center.csv".to_owned(),
            config_filename: "config.json".to_owned(),
            render_rgb: true,
            render_depth: true,
            render_motion_vector: false,
            render_unavailable_mask: false,
            visualize: true,
        }
    }
}

impl RenderEnv {
    /// Parse an environment from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PanoResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PanoError::serde(format!("parse render env JSON: {e}")))
    }

    /// Parse an environment from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PanoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| PanoError::io(path, e))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| PanoError::serde(format!("parse render env '{}': {e}", path.display())))
    }

    /// Whether `scene_name` is rendered with the mirror file.
    pub fn uses_mirror(&self, scene_name: &str) -> bool {
        !self.no_mirror_scenes.iter().any(|s| s == scene_name)
    }

    /// Output folder of one scene config.
    pub fn scene_output_dir(&self, folder_name: &str) -> PathBuf {
        self.output_root.join(folder_name)
    }

    /// Cubemap output folder of one scene config.
    pub fn cubemap_output_dir(&self, folder_name: &str) -> PathBuf {
        self.scene_output_dir(folder_name).join(&self.cubemap_dir)
    }

    /// Panorama output folder of one scene config.
    pub fn pano_output_dir(&self, folder_name: &str) -> PathBuf {
        self.scene_output_dir(folder_name).join(&self.pano_dir)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/env.rs"]
mod tests;
