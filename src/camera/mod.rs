mod frame;
mod game;
mod orbit;

pub use frame::{CameraFrame, CameraStyle};
pub use game::GameCamera;
pub use orbit::OrbitCamera;

use crate::config::CameraConfig;
use crate::traits::Camera;

pub(crate) use frame::orthogonal_up;

/// Construct the concrete camera for `style` around an already adapted frame
pub fn build_camera(style: CameraStyle, frame: CameraFrame, config: &CameraConfig) -> Box<dyn Camera> {
    match style {
        CameraStyle::Orbit => Box::new(OrbitCamera::with_settings(frame, config.orbit)),
        CameraStyle::Game => Box::new(GameCamera::with_settings(frame, config.game)),
    }
}

/// `(a - b) / divisor`, or `None` when the samples are equal or the result
/// is not finite
pub(crate) fn scaled_delta(a: f32, b: f32, divisor: f32) -> Option<f32> {
    if a == b {
        return None;
    }
    let delta = (a - b) / divisor;
    delta.is_finite().then_some(delta)
}
