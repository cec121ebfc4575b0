use serde::{Deserialize, Serialize};

use crate::math::Vector3;

/// Which concrete camera behavior is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStyle {
    Orbit,
    Game,
}

/// Eye, center and up of a camera.
///
/// For an orbit camera `center` is the focus point; for a game camera it is
/// the point one unit in front of the eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraFrame {
    pub eye: Vector3,
    pub center: Vector3,
    pub up: Vector3,
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self {
            eye: Vector3::new(0.0, 1.0, 10.0),
            center: Vector3::new(0.0, 1.0, 0.0),
            up: Vector3::Y,
        }
    }
}

impl CameraFrame {
    pub const fn new(eye: Vector3, center: Vector3, up: Vector3) -> Self {
        Self { eye, center, up }
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn from_scalars(
        ex: f32,
        ey: f32,
        ez: f32,
        cx: f32,
        cy: f32,
        cz: f32,
        ux: f32,
        uy: f32,
        uz: f32,
    ) -> Self {
        Self::new(
            Vector3::new(ex, ey, ez),
            Vector3::new(cx, cy, cz),
            Vector3::new(ux, uy, uz),
        )
    }

    /// `center - eye`
    pub fn view_vector(&self) -> Vector3 {
        self.center - self.eye
    }

    /// `|eye - center|`
    pub fn radius(&self) -> f32 {
        self.eye.distance_to(&self.center)
    }

    pub fn is_finite(&self) -> bool {
        self.eye.is_finite() && self.center.is_finite() && self.up.is_finite()
    }

    /// Move `center` to one unit from the eye along the current view direction.
    /// Used when leaving an orbit camera for a game camera.
    pub fn adapt_center_to_direction(&mut self) {
        self.center = self.eye + self.view_vector().unit();
    }

    /// Move `center` to `radius` units from the eye along the current view
    /// direction. Used when leaving a game camera for an orbit camera.
    pub fn adapt_center_to_distance(&mut self, radius: f32) {
        if !radius.is_finite() {
            return;
        }
        self.center = self.eye + self.view_vector().unit() * radius;
    }
}

/// Component of `up` perpendicular to `view`, normalized. `None` when the two
/// are parallel or either is degenerate. Only directions matter, so the
/// result does not depend on the length of either input.
pub(crate) fn orthogonal_up(up: Vector3, view: Vector3) -> Option<Vector3> {
    const EPSILON: f32 = 1e-12;

    let (up, view) = (up.unit(), view.unit());
    let up = view.cross(&up.cross(&view));
    (up.length_squared() > EPSILON && up.is_finite()).then(|| up.unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame() {
        let frame = CameraFrame::default();
        assert_eq!(frame.eye, Vector3::new(0.0, 1.0, 10.0));
        assert_eq!(frame.radius(), 10.0);
    }

    #[test]
    fn test_adapt_to_direction() {
        let mut frame = CameraFrame::default();
        frame.adapt_center_to_direction();
        assert_eq!(frame.center, Vector3::new(0.0, 1.0, 9.0));
    }

    #[test]
    fn test_adapt_with_coincident_points_is_noop() {
        let mut frame = CameraFrame::new(Vector3::Y, Vector3::Y, Vector3::Y);
        frame.adapt_center_to_direction();
        assert_eq!(frame.center, Vector3::Y);
        frame.adapt_center_to_distance(5.0);
        assert_eq!(frame.center, Vector3::Y);
    }

    #[test]
    fn test_orthogonal_up_removes_view_component() {
        let up = orthogonal_up(Vector3::new(0.0, 1.0, 1.0), Vector3::Z).unwrap();
        assert!((up.length() - 1.0).abs() < 1e-6);
        assert!(up.dot(&Vector3::Z).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_up_parallel() {
        assert_eq!(orthogonal_up(Vector3::Y, Vector3::Y * 3.0), None);
        assert_eq!(orthogonal_up(Vector3::Y, Vector3::ZERO), None);
    }

    #[test]
    fn test_orthogonal_up_short_view() {
        let up = orthogonal_up(Vector3::new(0.0, 1.0, 0.2), Vector3::new(0.0, 0.0, 5e-4)).unwrap();
        assert!((up - Vector3::Y).length() < 1e-6);
    }
}
