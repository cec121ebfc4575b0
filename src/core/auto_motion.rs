use serde::{Deserialize, Serialize};

use crate::traits::Camera;

/// Converts degrees into the raw screen delta that orbits roughly that many
/// degrees at the default orbit sensitivity
pub const ROTATION_FACTOR: f32 = 237.58 / 90.0;

/// Converts world units into the raw screen delta of an orbit zoom
pub const ZOOM_FACTOR: f32 = 20.0;

pub const DEFAULT_ITERATIONS: u32 = 10;

/// Closest the eye may already be to the center for an animated zoom-in to start
pub const MIN_ZOOM_IN_DISTANCE: f32 = 1.001;

/// Smallest `|up.y|` for which an animated yaw may start
pub const MIN_YAW_UP_Y: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionAxis {
    /// Pitch, value in degrees
    X,
    /// Yaw, value in degrees
    Y,
    /// Zoom, value in world units (negative zooms in)
    Z,
}

/// Camera move spread evenly over a fixed number of ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoMotion {
    axis: MotionAxis,
    value: f32,
    iterations: u32,
    counter: u32,
}

impl AutoMotion {
    /// Plan a move for `camera`, or `None` when the move is refused: zooming
    /// in from within [`MIN_ZOOM_IN_DISTANCE`] of the center, yawing while
    /// `up` lies almost flat, or a degenerate request
    pub fn start(axis: MotionAxis, value: f32, iterations: u32, camera: &dyn Camera) -> Option<Self> {
        if iterations == 0 || !value.is_finite() || value == 0.0 {
            return None;
        }

        let frame = camera.frame();
        match axis {
            MotionAxis::Z if value < 0.0 && frame.radius() <= MIN_ZOOM_IN_DISTANCE => {
                log::debug!("Auto zoom refused: eye already {:.3} from center", frame.radius());
                return None;
            }
            MotionAxis::Y if frame.up.y.abs() <= MIN_YAW_UP_Y => {
                log::debug!("Auto yaw refused: up.y = {:.3}", frame.up.y);
                return None;
            }
            _ => {}
        }

        Some(Self {
            axis,
            value,
            iterations,
            counter: 0,
        })
    }

    pub fn axis(&self) -> MotionAxis {
        self.axis
    }

    pub fn is_finished(&self) -> bool {
        self.counter >= self.iterations
    }

    pub fn remaining(&self) -> u32 {
        self.iterations - self.counter
    }

    /// Apply one tick to `camera`. Returns false once the move is complete.
    pub fn step(&mut self, camera: &mut dyn Camera) -> bool {
        if self.is_finished() {
            return false;
        }

        let share = self.value / self.iterations as f32;
        match self.axis {
            MotionAxis::X => camera.rotate_x(0.0, ROTATION_FACTOR * share),
            MotionAxis::Y => camera.rotate_y(0.0, ROTATION_FACTOR * share),
            MotionAxis::Z => camera.zoom(0.0, ZOOM_FACTOR * share),
        }
        self.counter += 1;
        true
    }
}
