//! Command-line driver for the vantage showroom.

use std::path::{Path, PathBuf};

use glam::Vec3;
use vantage::scene::assets::{DeclaredBoundsLoader, FileCheckLoader};
use vantage::scene::AssetLoader;
use vantage::{Options, Showroom, VantageError};

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const FRAME_DT: f32 = 1.0 / 60.0;
/// Stop a runaway move after ten seconds of simulated frames.
const MAX_FRAMES: u32 = 600;

struct Args {
    options: Option<PathBuf>,
    assets: Option<PathBuf>,
    schema: Option<PathBuf>,
    target: String,
}

impl Args {
    fn parse() -> Result<Self, VantageError> {
        let mut args = Args {
            options: None,
            assets: None,
            schema: None,
            target: String::from("motorcycle"),
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--assets" => args.assets = iter.next().map(PathBuf::from),
                "--schema" => args.schema = iter.next().map(PathBuf::from),
                "--click" => {
                    if let Some(name) = iter.next() {
                        args.target = name;
                    }
                }
                _ if arg.starts_with("--") => {
                    return Err(VantageError::OptionsParse(format!(
                        "unknown flag {arg}"
                    )));
                }
                _ => args.options = Some(PathBuf::from(arg)),
            }
        }
        Ok(args)
    }
}

fn write_schema(path: &Path) -> Result<(), VantageError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
    std::fs::write(path, schema)?;
    log::info!("wrote options schema to {}", path.display());
    Ok(())
}

fn main() -> Result<(), VantageError> {
    env_logger::init();
    let args = Args::parse()?;

    if let Some(path) = &args.schema {
        return write_schema(path);
    }

    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut showroom = Showroom::new(options, WIDTH, HEIGHT)?;
    let loader: Box<dyn AssetLoader> = match &args.assets {
        Some(root) => Box::new(FileCheckLoader::new(root)),
        None => Box::new(DeclaredBoundsLoader),
    };
    let failed = showroom.resolve_assets(loader.as_ref());
    if failed > 0 {
        log::warn!("{failed} model(s) failed to load and will ignore clicks");
    }

    let node = showroom.scene().require(&args.target)?;
    let Some((center, _)) = showroom.scene().world_bounds(node) else {
        log::warn!("'{}' has no bounds to click on", args.target);
        return Ok(());
    };
    let Some(pixel) = showroom.viewport().to_screen(center) else {
        log::warn!("'{}' is not in view", args.target);
        return Ok(());
    };

    log::info!("clicking '{}' at ({:.1}, {:.1})", args.target, pixel.x, pixel.y);
    let outcome = showroom.click_at(pixel.x, pixel.y);
    log::info!(
        "click handled by {} node(s), focus = {:?}",
        outcome.handled_by.len(),
        outcome.focus
    );

    let mut frame = 0;
    while showroom.update(FRAME_DT) && frame < MAX_FRAMES {
        frame += 1;
        if frame % 15 == 0 {
            log_pose(frame, showroom.camera_position(), showroom.look_at());
        }
    }
    log_pose(frame, showroom.camera_position(), showroom.look_at());
    Ok(())
}

fn log_pose(frame: u32, eye: Vec3, look_at: Vec3) {
    log::info!(
        "frame {frame:>3}: eye ({:.3}, {:.3}, {:.3}) looking at ({:.3}, {:.3}, {:.3})",
        eye.x,
        eye.y,
        eye.z,
        look_at.x,
        look_at.y,
        look_at.z
    );
}
