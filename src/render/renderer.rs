use std::ffi::{OsStr, OsString};
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::env::RenderEnv;
use crate::config::scene::SceneConfig;
use crate::foundation::error::{PanoError, PanoResult};

/// A native renderer invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RendererCommand {
    /// Executable.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<OsString>,
}

impl RendererCommand {
    fn new(program: &Path) -> Self {
        Self {
            program: program.to_path_buf(),
            args: Vec::new(),
        }
    }

    fn arg(&mut self, a: impl AsRef<OsStr>) -> &mut Self {
        self.args.push(a.as_ref().to_os_string());
        self
    }

    fn flag(&mut self, name: &str, value: impl AsRef<OsStr>) -> &mut Self {
        self.arg(name).arg(value)
    }

    /// Space-joined command line, for logs.
    pub fn display(&self) -> String {
        let mut s = self.program.display().to_string();
        for a in &self.args {
            s.push(' ');
            s.push_str(&a.to_string_lossy());
        }
        s
    }

    /// Run to completion. Renderer stdout is passed through; stderr is captured and
    /// reported when the process fails.
    pub fn run(&self) -> PanoResult<()> {
        tracing::info!(command = %self.display(), "running renderer");
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                PanoError::render(format!(
                    "failed to spawn renderer '{}': {e}",
                    self.program.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PanoError::render(format!(
                "renderer '{}' exited with status {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

/// Render toggles spelled the way the native renderers parse them.
fn bool_flag(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

fn scene_data_root(env: &RenderEnv, scene_name: &str) -> OsString {
    let mut root = env.dataset_root.join(scene_name).into_os_string();
    root.push(MAIN_SEPARATOR_STR);
    root
}

fn push_mesh_args(cmd: &mut RendererCommand, scene: &SceneConfig, env: &RenderEnv) {
    cmd.flag("--data_root", scene_data_root(env, &scene.scene_name))
        .flag("--meshFile", &env.mesh_file)
        .flag("--atlasFolder", &env.atlas_folder);
    if env.uses_mirror(&scene.scene_name) {
        cmd.flag("--mirrorFile", &env.mirror_file);
    }
}

fn push_texture_args(cmd: &mut RendererCommand, scene: &SceneConfig) {
    let p = scene.render_params;
    cmd.flag("--texture_exposure", format!("{:?}", p.texture_exposure))
        .flag("--texture_gamma", format!("{:?}", p.texture_gamma))
        .flag("--texture_saturation", format!("{:?}", p.texture_saturation));
}

fn push_toggle_args(cmd: &mut RendererCommand, env: &RenderEnv) {
    cmd.arg(format!("--renderRGBEnable={}", bool_flag(env.render_rgb)))
        .arg(format!("--renderDepthEnable={}", bool_flag(env.render_depth)))
        .arg(format!(
            "--renderMotionVectorEnable={}",
            bool_flag(env.render_motion_vector)
        ));
}

/// Cubemap renderer invocation; faces are `height x height`.
pub fn cubemap_command(
    scene: &SceneConfig,
    env: &RenderEnv,
    camera_path_file: &Path,
    output_dir: &Path,
) -> PanoResult<RendererCommand> {
    if scene.image.height == 0 {
        return Err(PanoError::configuration(format!(
            "scene '{}': image height must be > 0",
            scene.scene_name
        )));
    }
    if scene.render_view.center_view {
        tracing::warn!(scene = %scene.scene_name, "center view is not rendered");
    }

    let mut cmd = RendererCommand::new(&env.cubemap_program);
    cmd.flag("--imageSize", scene.image.height.to_string());
    push_mesh_args(&mut cmd, scene, env);
    cmd.flag("--cameraPoseFile", camera_path_file)
        .flag("--outputDir", output_dir);
    push_texture_args(&mut cmd, scene);
    push_toggle_args(&mut cmd, env);
    Ok(cmd)
}

/// Panorama renderer invocation. The image must be 2:1.
pub fn panorama_command(
    scene: &SceneConfig,
    env: &RenderEnv,
    camera_path_file: &Path,
    output_dir: &Path,
) -> PanoResult<RendererCommand> {
    if !scene.image.is_equirectangular() {
        return Err(PanoError::configuration(format!(
            "scene '{}': panorama width {} must be twice the height {}",
            scene.scene_name, scene.image.width, scene.image.height
        )));
    }
    if scene.render_view.center_view {
        tracing::warn!(scene = %scene.scene_name, "panoramas do not need the center view");
    }
    if !scene.render_view.traj_view {
        tracing::warn!(scene = %scene.scene_name, "trajectory view disabled, renderer still follows the camera path");
    }

    let mut cmd = RendererCommand::new(&env.panorama_program);
    push_mesh_args(&mut cmd, scene, env);
    cmd.flag("--imageHeight", scene.image.height.to_string());
    push_texture_args(&mut cmd, scene);
    push_toggle_args(&mut cmd, env);
    cmd.flag("--cameraPoseFile", camera_path_file)
        .flag("--outputDir", output_dir);
    Ok(cmd)
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
