// config.rs - Camera sensitivity settings
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Sensitivity constants for the orbit camera. Every delta is `current - previous`
/// in whatever units the input layer supplies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub zoom_divisor: f32,
    pub pan_divisor: f32,
    /// Eye perturbation per unit of orbit radius for rotations
    pub rotate_radius_fraction: f32,
    pub rotate_divisor: f32,
    pub roll_divisor: f32,
    /// Zoom never brings the eye closer to the center than this
    pub min_radius: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            zoom_divisor: 20.0,
            pan_divisor: 300.0,
            rotate_radius_fraction: 1.0 / 30.0,
            rotate_divisor: 5.0,
            roll_divisor: 300.0,
            min_radius: 1e-4,
        }
    }
}

/// Sensitivity constants for the first-person camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub dolly_divisor: f32,
    pub strafe_divisor: f32,
    pub look_divisor: f32,
    pub roll_divisor: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            dolly_divisor: 20.0,
            strafe_divisor: 30.0,
            look_divisor: 500.0,
            roll_divisor: 300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub orbit: OrbitSettings,
    pub game: GameSettings,
}

impl CameraConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("Failed to parse camera config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read camera config {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid camera config {}", path.display()))
    }

    /// Reject settings that would divide by zero or feed NaN into the cameras
    pub fn validate(&self) -> Result<()> {
        let divisors = [
            ("orbit.zoom_divisor", self.orbit.zoom_divisor),
            ("orbit.pan_divisor", self.orbit.pan_divisor),
            ("orbit.rotate_radius_fraction", self.orbit.rotate_radius_fraction),
            ("orbit.rotate_divisor", self.orbit.rotate_divisor),
            ("orbit.roll_divisor", self.orbit.roll_divisor),
            ("game.dolly_divisor", self.game.dolly_divisor),
            ("game.strafe_divisor", self.game.strafe_divisor),
            ("game.look_divisor", self.game.look_divisor),
            ("game.roll_divisor", self.game.roll_divisor),
        ];

        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                bail!("{name} must be finite and positive, got {value}");
            }
        }

        if !self.orbit.min_radius.is_finite() || self.orbit.min_radius < 0.0 {
            bail!("orbit.min_radius must be finite and non-negative, got {}", self.orbit.min_radius);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CameraConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CameraConfig::from_json_str(r#"{ "game": { "look_divisor": 250.0 } }"#).unwrap();
        assert_eq!(config.game.look_divisor, 250.0);
        assert_eq!(config.game.strafe_divisor, 30.0);
        assert_eq!(config.orbit, OrbitSettings::default());
    }

    #[test]
    fn test_zero_divisor_rejected() {
        let err = CameraConfig::from_json_str(r#"{ "orbit": { "zoom_divisor": 0.0 } }"#).unwrap_err();
        assert!(err.to_string().contains("orbit.zoom_divisor"));
    }

    #[test]
    fn test_negative_min_radius_rejected() {
        let mut config = CameraConfig::default();
        config.orbit.min_radius = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(CameraConfig::from_json_str("{ not json").is_err());
    }
}
