pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod math;
pub mod traits;
pub mod types;

pub use camera::{build_camera, CameraFrame, CameraStyle, GameCamera, OrbitCamera};
pub use config::CameraConfig;
pub use core::{CameraRig, CameraSnapshot, InputEvent};
pub use math::Vector3;
pub use traits::Camera;
