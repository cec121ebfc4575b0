mod angle;
mod ray;
mod vector3;

pub use angle::{deg_to_rad, rad_to_deg};
pub use ray::Ray;
pub use vector3::Vector3;
