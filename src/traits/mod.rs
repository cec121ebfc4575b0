pub mod camera;
pub mod controller;

pub use camera::*;
pub use controller::*;
