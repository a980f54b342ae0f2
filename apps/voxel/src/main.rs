use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use voxel_model::{CameraFile, CameraParams};
use voxel_render::{paint_test_pattern, render_parallel, to_rgb_image, write_image, PixelBuffer};

mod logger;
#[cfg(feature = "window")]
mod viewer;

use logger::{init_logger, LogLevel};

#[derive(Parser)]
#[command(name = "voxel", version, about = "Orthographic unit-cube ray caster")]
struct Cli {
    #[arg(long, value_enum, default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the unit cube to an image file (.ppm or .png).
    Render(RenderArgs),
    /// Write a white image with a red rectangle.
    #[command(name = "test-ppm")]
    TestPpm(TestPpmArgs),
    /// Open a window that re-renders the cube on every resize.
    #[cfg(feature = "window")]
    Window(WindowArgs),
}

#[derive(Args)]
struct RenderArgs {
    #[arg(long, default_value = "voxel.ppm")]
    out: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// JSON camera file; the built-in camera looks at the cube from z = -50.
    #[arg(long)]
    camera: Option<PathBuf>,

    #[arg(long, default_value_t = 0)]
    threads: usize,
}

#[derive(Args)]
struct TestPpmArgs {
    #[arg(long, default_value = "voxel-test.ppm")]
    out: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,
}

#[cfg(feature = "window")]
#[derive(Args)]
struct WindowArgs {
    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    #[arg(long)]
    camera: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::TestPpm(args) => run_test_ppm(args),
        #[cfg(feature = "window")]
        Commands::Window(args) => {
            let camera = load_camera(args.camera.as_deref())?;
            viewer::run_viewer(&camera, args.width, args.height)
        }
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let camera = load_camera(args.camera.as_deref())?;
    let mut frame = PixelBuffer::new(args.width, args.height)?;
    render_parallel(&camera, &mut frame, args.threads)?;
    save_frame(&args.out, &frame)
}

fn run_test_ppm(args: TestPpmArgs) -> Result<()> {
    let mut frame = PixelBuffer::new(args.width, args.height)?;
    paint_test_pattern(&mut frame);
    save_frame(&args.out, &frame)
}

fn load_camera(path: Option<&Path>) -> Result<CameraParams> {
    let Some(path) = path else {
        return Ok(CameraParams::default());
    };

    let contents = fs::read_to_string(path)
        .map_err(|err| anyhow!("failed to read camera file {:?}: {}", path, err))?;
    let file: CameraFile = serde_json::from_str(&contents)
        .map_err(|err| anyhow!("failed to parse camera file {:?}: {}", path, err))?;
    if file.version != 1 {
        warn!("camera file {:?} has version {}, expected 1", path, file.version);
    }
    Ok(file.camera)
}

fn save_frame(path: &Path, frame: &PixelBuffer) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| anyhow!("failed to create output directory {:?}: {}", parent, err))?;
        }
    }

    write_image(path, &to_rgb_image(frame))
        .map_err(|err| anyhow!("failed to write image {:?}: {}", path, err))?;
    info!("wrote {:?}", path);
    Ok(())
}
