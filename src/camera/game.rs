use super::{orthogonal_up, scaled_delta, CameraFrame, CameraStyle};
use crate::config::GameSettings;
use crate::math::Vector3;
use crate::traits::Camera;

/// First-person camera. `center` is a direction marker kept one unit in
/// front of the eye; rotations pivot it around the eye while translations
/// carry eye and center together.
#[derive(Debug, Clone)]
pub struct GameCamera {
    frame: CameraFrame,
    settings: GameSettings,
}

impl Default for GameCamera {
    fn default() -> Self {
        let mut frame = CameraFrame::default();
        frame.center.z = frame.eye.z - 1.0;
        Self::new(frame)
    }
}

impl GameCamera {
    pub fn new(frame: CameraFrame) -> Self {
        Self::with_settings(frame, GameSettings::default())
    }

    pub fn with_settings(frame: CameraFrame, settings: GameSettings) -> Self {
        Self { frame, settings }
    }

    pub fn from_vectors(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        Self::new(CameraFrame::new(eye, center, up))
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Unit view direction
    pub fn forward(&self) -> Vector3 {
        self.frame.view_vector().unit()
    }

    fn commit(&mut self, frame: CameraFrame) {
        if frame.is_finite() {
            self.frame = frame;
        }
    }

    fn translate(&mut self, displacement: Vector3) {
        let mut frame = self.frame;
        frame.eye += displacement;
        frame.center += displacement;
        self.commit(frame);
    }

    /// Move the look target by `offset`, snap it back to one unit from the
    /// eye and rebuild `up` against `up_reference`
    fn look(&mut self, offset: Vector3, up_reference: impl Fn(&CameraFrame) -> Vector3) {
        let mut frame = self.frame;
        let forward = (frame.center + offset - frame.eye).unit();
        if forward == Vector3::ZERO {
            return;
        }
        frame.center = frame.eye + forward;

        let reference = up_reference(&self.frame);
        let Some(up) = orthogonal_up(reference, forward).or_else(|| orthogonal_up(self.frame.up, forward)) else {
            return;
        };
        frame.up = up;
        self.commit(frame);
    }
}

impl Camera for GameCamera {
    fn style(&self) -> CameraStyle {
        CameraStyle::Game
    }

    fn frame(&self) -> &CameraFrame {
        &self.frame
    }

    fn zoom(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(current, previous, self.settings.dolly_divisor) else {
            return;
        };
        self.translate(-(self.forward() * delta));
    }

    fn translate_x(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.strafe_divisor) else {
            return;
        };
        let right = self.forward().cross(&self.frame.up).unit();
        self.translate(-(right * delta));
    }

    fn translate_y(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.strafe_divisor) else {
            return;
        };
        self.translate(self.frame.up * delta);
    }

    fn rotate_x(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.look_divisor) else {
            return;
        };
        self.look(self.frame.up * delta, |frame| frame.up);
    }

    fn rotate_y(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.look_divisor) else {
            return;
        };
        let right = self.frame.view_vector().cross(&self.frame.up);
        self.look(-(right * delta), |frame| {
            if frame.up.y >= 0.0 { Vector3::Y } else { -Vector3::Y }
        });
    }

    fn rotate_z(&mut self, current: f32, previous: f32) {
        let Some(delta) = scaled_delta(previous, current, self.settings.roll_divisor) else {
            return;
        };

        let right = self.frame.view_vector().cross(&self.frame.up).unit();

        let mut frame = self.frame;
        frame.up = (frame.up - right * delta).unit();
        self.commit(frame);
    }

    fn picked_point(&self, screen_x: f32, screen_y: f32) -> Vector3 {
        let z_axis = (self.frame.eye - self.frame.center).unit();
        let x_axis = self.frame.up.cross(&z_axis).unit();

        self.frame.eye + x_axis * screen_x + self.frame.up * screen_y - z_axis
    }
}
