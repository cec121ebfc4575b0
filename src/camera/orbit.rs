use super::{orthogonal_up, scaled_delta, CameraFrame, CameraStyle};
use crate::config::OrbitSettings;
use crate::math::Vector3;
use crate::traits::Camera;

/// Camera orbiting a focus point (`center`) at a variable radius.
///
/// Rotations move the eye on the sphere around `center` and never change the
/// radius; zoom changes the radius but is rejected outright when the eye
/// would come within `min_radius` of the center.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    frame: CameraFrame,
    settings: OrbitSettings,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(CameraFrame::default())
    }
}

impl OrbitCamera {
    pub fn new(frame: CameraFrame) -> Self {
        Self::with_settings(frame, OrbitSettings::default())
    }

    pub fn with_settings(frame: CameraFrame, settings: OrbitSettings) -> Self {
        Self { frame, settings }
    }

    pub fn from_vectors(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        Self::new(CameraFrame::new(eye, center, up))
    }

    pub fn settings(&self) -> &OrbitSettings {
        &self.settings
    }

    /// Current orbit radius `|eye - center|`
    pub fn radius(&self) -> f32 {
        self.frame.radius()
    }

    fn commit(&mut self, frame: CameraFrame) {
        if frame.is_finite() {
            self.frame = frame;
        }
    }

    /// Nudge the eye by `offset`, then pull it back onto the sphere of the
    /// original radius. Returns the new frame and the new `eye - center`.
    fn orbit_by(&self, offset: Vector3, radius: f32) -> (CameraFrame, Vector3) {
        let mut frame = self.frame;
        let to_eye = (frame.eye + offset - frame.center).unit() * radius;
        frame.eye = frame.center + to_eye;
        (frame, to_eye)
    }
}

impl Camera for OrbitCamera {
    fn style(&self) -> CameraStyle {
        CameraStyle::Orbit
    }

    fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    fn zoom(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(current, previous, self.settings.zoom_divisor) else {
            return;
        };

        let dir = self.frame.view_vector().unit();
        let eye = self.frame.eye + dir * delta;

        // Hard floor: the move is dropped, never truncated
        if (self.frame.center - eye).dot(&dir) > self.settings.min_radius {
            let mut frame = self.frame;
            frame.eye = eye;
            self.commit(frame);
        }
    }

    fn translate_x(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.pan_divisor) else {
            return;
        };

        let view = self.frame.view_vector();
        let right = view.cross(&self.frame.up).unit();
        let displacement = right * (view.length() * delta);

        let mut frame = self.frame;
        frame.eye += displacement;
        frame.center += displacement;
        self.commit(frame);
    }

    fn translate_y(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.pan_divisor) else {
            return;
        };

        let displacement = self.frame.up * (self.frame.radius() * delta);

        let mut frame = self.frame;
        frame.eye -= displacement;
        frame.center -= displacement;
        self.commit(frame);
    }

    fn rotate_x(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(current, previous, self.settings.rotate_divisor) else {
            return;
        };

        let radius = self.frame.radius();
        if radius <= 0.0 {
            return;
        }

        let magnitude = self.settings.rotate_radius_fraction * radius * delta;
        let (mut frame, to_eye) = self.orbit_by(self.frame.up * magnitude, radius);

        let Some(up) = orthogonal_up(self.frame.up, to_eye) else {
            return;
        };
        frame.up = up;
        self.commit(frame);
    }

    fn rotate_y(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.rotate_divisor) else {
            return;
        };

        let radius = self.frame.radius();
        if radius <= 0.0 {
            return;
        }

        let to_eye = self.frame.eye - self.frame.center;
        let right = self.frame.up.cross(&to_eye).unit();
        // Yaw slows toward the poles and reverses when upside down
        let pole_factor = self.frame.up.dot(&Vector3::Y);
        let magnitude = self.settings.rotate_radius_fraction * radius * pole_factor * delta;
        let (mut frame, to_eye) = self.orbit_by(right * magnitude, radius);

        let world_up = if self.frame.up.y >= 0.0 { Vector3::Y } else { -Vector3::Y };
        let Some(up) = orthogonal_up(world_up, to_eye).or_else(|| orthogonal_up(self.frame.up, to_eye)) else {
            return;
        };
        frame.up = up;
        self.commit(frame);
    }

    fn rotate_z(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.roll_divisor) else {
            return;
        };

        let right = self.frame.view_vector().cross(&self.frame.up).unit();

        let mut frame = self.frame;
        frame.up = (frame.up + right * delta).unit();
        self.commit(frame);
    }

    fn picked_point(&self, screen_x: f32, screen_y: f32) -> Vector3 {
        let z_axis = (self.frame.eye - self.frame.center).unit();
        let x_axis = self.frame.up.cross(&z_axis).unit();

        self.frame.eye + x_axis * screen_x + self.frame.up * screen_y - z_axis
    }
}
