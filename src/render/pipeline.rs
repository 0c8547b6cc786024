use std::path::{Path, PathBuf};

use crate::camera_path::emit::{TrajectoryFiles, mesh_path_for, read_trajectory};
use crate::camera_path::{GeneratedPath, generate_path};
use crate::config::env::RenderEnv;
use crate::config::scene::{RenderType, SceneConfig};
use crate::foundation::core::ImageSize;
use crate::foundation::error::{PanoError, PanoResult};
use crate::render::layout::{FlowDirection, PanoLayout};
use crate::render::post::post_process;
use crate::render::renderer::{cubemap_command, panorama_command};
use crate::render::stitch::{CubemapStitcher, stitch_scene};

/// One scene folder with its parsed config.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenePlan {
    /// Folder name under the config root; also the output folder name.
    pub folder_name: String,
    /// Parsed `config.json`.
    pub config: SceneConfig,
}

/// Command-line overrides applied to every discovered scene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneOverrides {
    /// Replace `render_type`.
    pub render_type: Option<RenderType>,
    /// Replace `image`.
    pub image: Option<ImageSize>,
}

impl SceneOverrides {
    fn apply(&self, cfg: &mut SceneConfig) {
        if let Some(t) = self.render_type {
            cfg.render_type = t;
        }
        if let Some(size) = self.image {
            cfg.image = size;
        }
    }
}

fn sorted_subdirs(root: &Path) -> PanoResult<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root).map_err(|e| PanoError::io(root, e))? {
        let entry = entry.map_err(|e| PanoError::io(root, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping folder with non UTF-8 name");
            continue;
        };
        dirs.push((name.to_owned(), path.clone()));
    }
    dirs.sort();
    Ok(dirs)
}

/// Collect every sub-folder of `config_root` that holds a scene config, sorted by name.
pub fn discover_scenes(
    config_root: &Path,
    env: &RenderEnv,
    overrides: &SceneOverrides,
) -> PanoResult<Vec<ScenePlan>> {
    let mut plans = Vec::new();
    for (folder_name, dir) in sorted_subdirs(config_root)? {
        let config_path = dir.join(&env.config_filename);
        if !config_path.is_file() {
            tracing::warn!(folder = %folder_name, "no {}, skipping", env.config_filename);
            continue;
        }
        let mut config = SceneConfig::from_path(&config_path)?;
        overrides.apply(&mut config);
        plans.push(ScenePlan {
            folder_name,
            config,
        });
    }
    Ok(plans)
}

/// Generate the scene's camera path, or reuse the existing file when `overwrite` is off.
pub fn prepare_camera_path(
    plan: &ScenePlan,
    env: &RenderEnv,
    overwrite: bool,
) -> PanoResult<GeneratedPath> {
    let out_dir = env.scene_output_dir(&plan.folder_name);
    let path_file = out_dir.join(&env.camera_path_filename);
    if !overwrite && path_file.is_file() {
        let frame_count = read_trajectory(&path_file)?.len();
        tracing::warn!(
            path = %path_file.display(),
            frame_count,
            "camera path exists, reusing it"
        );
        return Ok(GeneratedPath {
            files: TrajectoryFiles {
                mesh_file: mesh_path_for(&path_file),
                center_file: out_dir.join(&env.camera_path_center_filename),
                path_file,
            },
            frame_count,
        });
    }
    generate_path(&out_dir, &plan.config.camera_traj, env)
}

/// Knobs of a dataset render.
#[derive(Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Regenerate camera paths that already exist.
    pub overwrite_paths: bool,
    /// Log renderer commands instead of running them.
    pub dry_run: bool,
    /// Projection used for cubemap scenes; cubemaps stay unstitched without one.
    pub stitcher: Option<&'a dyn CubemapStitcher>,
}

/// What happened to one scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneReport {
    /// Scene folder name.
    pub folder_name: String,
    /// Camera path files.
    pub path: GeneratedPath,
    /// Panorama output folder.
    pub pano_dir: PathBuf,
    /// Whether panoramas (rendered or stitched) are in `pano_dir`.
    pub has_panoramas: bool,
}

/// Render one scene along a prepared camera path.
#[tracing::instrument(skip_all, fields(folder = %plan.folder_name))]
pub fn render_scene(
    plan: &ScenePlan,
    path: GeneratedPath,
    env: &RenderEnv,
    opts: &RenderOptions<'_>,
) -> PanoResult<SceneReport> {
    let cfg = &plan.config;
    let pano_dir = env.pano_output_dir(&plan.folder_name);
    let frame_count = path.frame_count;

    let has_panoramas = match cfg.render_type {
        RenderType::Cubemap => {
            let cubemap_dir = env.cubemap_output_dir(&plan.folder_name);
            let cmd = cubemap_command(cfg, env, &path.files.path_file, &cubemap_dir)?;
            if opts.dry_run {
                tracing::info!(command = %cmd.display(), "dry run");
                false
            } else {
                std::fs::create_dir_all(&cubemap_dir)
                    .map_err(|e| PanoError::io(&cubemap_dir, e))?;
                cmd.run()?;
                match opts.stitcher {
                    Some(stitcher) => {
                        stitch_scene(stitcher, env, &cubemap_dir, &pano_dir, frame_count)?;
                        true
                    }
                    None => {
                        tracing::warn!("no cubemap stitcher configured, leaving cube faces as rendered");
                        false
                    }
                }
            }
        }
        RenderType::Panorama => {
            let cmd = panorama_command(cfg, env, &path.files.path_file, &pano_dir)?;
            if opts.dry_run {
                tracing::info!(command = %cmd.display(), "dry run");
                false
            } else {
                std::fs::create_dir_all(&pano_dir).map_err(|e| PanoError::io(&pano_dir, e))?;
                cmd.run()?;
                true
            }
        }
    };

    if has_panoramas {
        post_process(env, &pano_dir, frame_count)?;
    }
    Ok(SceneReport {
        folder_name: plan.folder_name.clone(),
        path,
        pano_dir,
        has_panoramas,
    })
}

/// Generate camera paths for every scene under `config_root`, then render them in order.
#[tracing::instrument(skip(env, overrides, opts))]
pub fn render_dataset(
    config_root: &Path,
    env: &RenderEnv,
    overrides: &SceneOverrides,
    opts: &RenderOptions<'_>,
) -> PanoResult<Vec<SceneReport>> {
    let plans = discover_scenes(config_root, env, overrides)?;
    if plans.is_empty() {
        tracing::warn!("no scene configs found");
    }

    let paths = plans
        .iter()
        .map(|plan| prepare_camera_path(plan, env, opts.overwrite_paths))
        .collect::<PanoResult<Vec<_>>>()?;

    plans
        .iter()
        .zip(paths)
        .map(|(plan, path)| render_scene(plan, path, env, opts))
        .collect()
}

/// Frames copied for one scene by [`collect_release`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectedScene {
    /// Scene folder name.
    pub folder_name: String,
    /// Number of frames copied.
    pub frame_count: usize,
}

fn copy_file(src: &Path, dst: &Path) -> PanoResult<()> {
    std::fs::copy(src, dst).map_err(|e| PanoError::io(src, e))?;
    Ok(())
}

/// Copy finished panoramas from `render_root/<scene>/<pano_dir>` to `release_root/<scene>`.
///
/// Frames are copied in order until the first missing RGB panorama. Depth, mask and flow files
/// are copied when present.
#[tracing::instrument]
pub fn collect_release(
    render_root: &Path,
    release_root: &Path,
    pano_dir: &str,
) -> PanoResult<Vec<CollectedScene>> {
    let mut collected = Vec::new();
    for (folder_name, dir) in sorted_subdirs(render_root)? {
        let src_dir = dir.join(pano_dir);
        if !src_dir.is_dir() {
            tracing::info!(folder = %folder_name, "no panoramas, skipping");
            continue;
        }
        let dst_dir = release_root.join(&folder_name);
        std::fs::create_dir_all(&dst_dir).map_err(|e| PanoError::io(&dst_dir, e))?;

        let src = PanoLayout::new(&src_dir);
        let dst = PanoLayout::new(&dst_dir);
        let mut frame = 0;
        while src.rgb(frame).is_file() {
            copy_file(&src.rgb(frame), &dst.rgb(frame))?;
            let optional = [
                (src.depth(frame), dst.depth(frame)),
                (src.mask(frame), dst.mask(frame)),
                (
                    src.flow(frame, FlowDirection::Forward),
                    dst.flow(frame, FlowDirection::Forward),
                ),
                (
                    src.flow(frame, FlowDirection::Backward),
                    dst.flow(frame, FlowDirection::Backward),
                ),
            ];
            for (from, to) in optional {
                if from.is_file() {
                    copy_file(&from, &to)?;
                }
            }
            frame += 1;
            if frame % 10 == 0 {
                tracing::info!(folder = %folder_name, frame, "collecting");
            }
        }
        tracing::info!(folder = %folder_name, frame_count = frame, "collected panoramas");
        collected.push(CollectedScene {
            folder_name,
            frame_count: frame,
        });
    }
    Ok(collected)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
