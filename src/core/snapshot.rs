use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraFrame, CameraStyle};
use crate::traits::Camera;

/// Saved camera pose, restorable as a new camera of the same style
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSnapshot {
    pub style: CameraStyle,
    #[serde(flatten)]
    pub frame: CameraFrame,
}

impl CameraSnapshot {
    pub fn capture(camera: &dyn Camera) -> Self {
        Self {
            style: camera.style(),
            frame: *camera.frame(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize camera snapshot")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json).context("Failed to parse camera snapshot")?;
        anyhow::ensure!(snapshot.frame.is_finite(), "Camera snapshot contains non-finite values");
        Ok(snapshot)
    }
}
