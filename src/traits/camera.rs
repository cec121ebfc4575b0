use glam::Mat4;

use crate::camera::{CameraFrame, CameraStyle};
use crate::math::{Ray, Vector3};

/// Interactive camera driven by pairs of screen samples.
///
/// Every mutating method takes the same screen axis sampled twice (`current`,
/// `previous`). Equal samples leave the camera untouched, and no input can
/// push a non-finite value into eye, center or up.
pub trait Camera {
    /// Which concrete behavior this camera implements
    fn style(&self) -> CameraStyle;

    /// Current eye/center/up
    fn frame(&self) -> &CameraFrame;

    /// Move along the view axis
    fn zoom(&mut self, current: f32, previous: f32);

    /// Pan along the local right axis
    fn translate_x(&mut self, current: f32, previous: f32);

    /// Pan along the up axis
    fn translate_y(&mut self, current: f32, previous: f32);

    /// Pitch
    fn rotate_x(&mut self, current: f32, previous: f32);

    /// Yaw
    fn rotate_y(&mut self, current: f32, previous: f32);

    /// Roll
    fn rotate_z(&mut self, current: f32, previous: f32);

    /// Map an offset in the camera's image plane to the world point one unit
    /// in front of the eye
    fn picked_point(&self, screen_x: f32, screen_y: f32) -> Vector3;

    fn eye(&self) -> Vector3 {
        self.frame().eye
    }

    fn center(&self) -> Vector3 {
        self.frame().center
    }

    fn up(&self) -> Vector3 {
        self.frame().up
    }

    /// Ray from the eye through [`Camera::picked_point`]
    fn pick_ray(&self, screen_x: f32, screen_y: f32) -> Ray {
        Ray::through(self.eye(), self.picked_point(screen_x, screen_y))
    }

    /// Right-handed look-at view matrix
    fn view_matrix(&self) -> Mat4 {
        let frame = self.frame();
        Mat4::look_at_rh(frame.eye.into(), frame.center.into(), frame.up.into())
    }
}
