// cli.rs - Command-line interface configuration
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::camera::{CameraFrame, CameraStyle};
use crate::config::CameraConfig;
use crate::core::{CameraRig, CameraSnapshot, InputEvent};
use crate::core::timer::MOTION_HZ;

/// Upper bound on ticks spent finishing one animated key command
const MAX_MOTION_TICKS: u32 = 10_000;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
    Orbit,
    Game,
}

impl From<StyleArg> for CameraStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Orbit => CameraStyle::Orbit,
            StyleArg::Game => CameraStyle::Game,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-toolkit")]
#[command(about = "Drive an orbit or first-person camera from scripted input", long_about = None)]
pub struct Cli {
    /// Camera style to start with
    #[arg(long, value_enum, default_value = "orbit")]
    pub style: StyleArg,

    /// JSON file with sensitivity settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file with a list of pointer events to replay
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Key commands to run in order, e.g. "xxjs"
    #[arg(long, default_value = "")]
    pub keys: String,

    /// Extra 60 Hz ticks to run after the keys
    #[arg(long, default_value_t = 0)]
    pub ticks: u32,

    /// Print the final camera as JSON
    #[arg(long = "json", default_value = "false")]
    pub json: bool,
}

/// Starting frame for `style`: the default pose, with the game camera looking
/// one unit ahead
pub fn initial_frame(style: CameraStyle) -> CameraFrame {
    let mut frame = CameraFrame::default();
    if style == CameraStyle::Game {
        frame.adapt_center_to_direction();
    }
    frame
}

pub fn load_script(path: &Path) -> Result<Vec<InputEvent>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input script {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid input script {}", path.display()))
}

/// Build a rig from the arguments, replay the script, then the keys, then the
/// extra ticks. Returns the final camera pose.
pub fn run(cli: &Cli) -> Result<CameraSnapshot> {
    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)?,
        None => CameraConfig::default(),
    };

    let style = CameraStyle::from(cli.style);
    let mut rig = CameraRig::with_camera(style, initial_frame(style), config);

    if let Some(path) = &cli.script {
        let events = load_script(path)?;
        log::info!("Replaying {} input events", events.len());
        for event in &events {
            rig.handle_input(event);
        }
    }

    let tick = 1.0 / MOTION_HZ;
    for key in cli.keys.chars() {
        if rig.handle_key(key).is_none() {
            log::warn!("Ignoring unbound key {:?}", key);
            continue;
        }
        let mut spent = 0;
        while rig.is_animating() && spent < MAX_MOTION_TICKS {
            spent += 1;
            rig.advance(tick * 1.001);
        }
    }

    for _ in 0..cli.ticks {
        rig.advance(tick * 1.001);
    }

    Ok(rig.snapshot())
}
