use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "cubepano", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a camera path from a scene config.
    Path(PathArgs),
    /// Convert a depth map between `.dpt` and `.pfm`.
    Convert(ConvertArgs),
    /// Write a colour-mapped preview of a depth map.
    Visualize(DepthImageArgs),
    /// Write the unavailable-pixel mask of a depth map.
    Mask(DepthImageArgs),
    /// Generate camera paths and run the renderer for every scene folder.
    Render(RenderArgs),
    /// Copy finished panoramas into a release folder.
    Collect(CollectArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Scene config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output folder for the trajectory, center and preview files.
    #[arg(long)]
    out: PathBuf,

    /// Render environment JSON (file names); defaults when omitted.
    #[arg(long)]
    env: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input depth map (`.dpt` or `.pfm`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output depth map (`.dpt` or `.pfm`).
    #[arg(long)]
    out: PathBuf,

    /// PFM scale written to `.pfm` outputs; must be positive.
    #[arg(long, default_value_t = 1.0, value_parser = parse_pfm_scale)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct DepthImageArgs {
    /// Input depth map (`.dpt` or `.pfm`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; format follows the extension.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RenderTypeArg {
    Cubemap,
    Panorama,
}

impl From<RenderTypeArg> for cubepano::RenderType {
    fn from(v: RenderTypeArg) -> Self {
        match v {
            RenderTypeArg::Cubemap => cubepano::RenderType::Cubemap,
            RenderTypeArg::Panorama => cubepano::RenderType::Panorama,
        }
    }
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Folder with one sub-folder (and `config.json`) per scene.
    #[arg(long)]
    configs: PathBuf,

    /// Render environment JSON.
    #[arg(long)]
    env: Option<PathBuf>,

    /// Override every scene's render type.
    #[arg(long, value_enum)]
    render_type: Option<RenderTypeArg>,

    /// Override every scene's image width (requires --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Override every scene's image height (requires --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Regenerate camera paths that already exist.
    #[arg(long, default_value_t = false)]
    overwrite_paths: bool,

    /// Print renderer commands without running them.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct CollectArgs {
    /// Render output root.
    #[arg(long)]
    render_root: PathBuf,

    /// Release root.
    #[arg(long)]
    release_root: PathBuf,

    /// Panorama sub-folder name; taken from --env (or `pano`) when omitted.
    #[arg(long)]
    pano_dir: Option<String>,

    /// Render environment JSON.
    #[arg(long)]
    env: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Convert(args) => cmd_convert(args),
        Command::Visualize(args) => cmd_visualize(args),
        Command::Mask(args) => cmd_mask(args),
        Command::Render(args) => cmd_render(args),
        Command::Collect(args) => cmd_collect(args),
    }
}

fn load_env(path: Option<&Path>) -> anyhow::Result<cubepano::RenderEnv> {
    Ok(match path {
        Some(p) => cubepano::RenderEnv::from_path(p)?,
        None => cubepano::RenderEnv::default(),
    })
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
}

fn parse_pfm_scale(s: &str) -> Result<f32, String> {
    let scale: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("PFM scale must be a positive finite number, got {s}"))
    }
}

fn read_depth(path: &Path) -> anyhow::Result<cubepano::DepthMap> {
    let depth = match extension(path).as_str() {
        "dpt" => cubepano::read_dpt(path)?,
        "pfm" => {
            let (img, _scale) = cubepano::read_pfm(path)?;
            img.into_depth()?
        }
        other => anyhow::bail!(
            "unsupported depth format '{other}' for '{}' (expected .dpt or .pfm)",
            path.display()
        ),
    };
    Ok(depth)
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let scene = cubepano::SceneConfig::from_path(&args.config)?;
    let env = load_env(args.env.as_deref())?;
    let generated = cubepano::generate_path(&args.out, &scene.camera_traj, &env)
        .with_context(|| format!("generate camera path for '{}'", scene.scene_name))?;

    eprintln!(
        "wrote {} ({} poses)",
        generated.files.path_file.display(),
        generated.frame_count
    );
    eprintln!("wrote {}", generated.files.center_file.display());
    eprintln!("wrote {}", generated.files.mesh_file.display());
    Ok(())
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let depth = read_depth(&args.in_path)?;
    match extension(&args.out).as_str() {
        "dpt" => cubepano::write_dpt(&depth, &args.out)?,
        "pfm" => cubepano::write_pfm_depth(&depth, &args.out, args.scale)?,
        other => anyhow::bail!(
            "unsupported depth format '{other}' for '{}' (expected .dpt or .pfm)",
            args.out.display()
        ),
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_visualize(args: DepthImageArgs) -> anyhow::Result<()> {
    let depth = read_depth(&args.in_path)?;
    cubepano::save_depth_visual(&depth, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_mask(args: DepthImageArgs) -> anyhow::Result<()> {
    let depth = read_depth(&args.in_path)?;
    cubepano::save_depth_mask(&depth, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let env = load_env(args.env.as_deref())?;
    let overrides = cubepano::SceneOverrides {
        render_type: args.render_type.map(Into::into),
        image: match (args.width, args.height) {
            (Some(width), Some(height)) => Some(cubepano::ImageSize { width, height }),
            _ => None,
        },
    };
    let opts = cubepano::RenderOptions {
        overwrite_paths: args.overwrite_paths,
        dry_run: args.dry_run,
        stitcher: None,
    };

    let reports = cubepano::render_dataset(&args.configs, &env, &overrides, &opts)?;
    for r in &reports {
        eprintln!(
            "{}: {} frames, camera path {}",
            r.folder_name,
            r.path.frame_count,
            r.path.files.path_file.display()
        );
        if r.has_panoramas {
            eprintln!("wrote {}", r.pano_dir.display());
        }
    }
    Ok(())
}

fn cmd_collect(args: CollectArgs) -> anyhow::Result<()> {
    let pano_dir = match args.pano_dir {
        Some(d) => d,
        None => load_env(args.env.as_deref())?.pano_dir,
    };
    let collected = cubepano::collect_release(&args.render_root, &args.release_root, &pano_dir)?;
    for c in &collected {
        eprintln!(
            "wrote {} ({} frames)",
            args.release_root.join(&c.folder_name).display(),
            c.frame_count
        );
    }
    Ok(())
}
