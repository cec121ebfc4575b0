use super::Vector3;

/// Half-line used for picking, usually from the camera eye through a picked point
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Ray from `origin` through `point`. The direction is unit length, or zero
    /// when both points coincide.
    pub fn through(origin: Vector3, point: Vector3) -> Self {
        Self {
            origin,
            direction: (point - origin).unit(),
        }
    }

    pub fn point_at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to the plane through `point` with `normal`.
    /// `None` when the ray is parallel to the plane or the hit lies behind the origin.
    pub fn intersect_plane(&self, point: Vector3, normal: Vector3) -> Option<f32> {
        const EPSILON: f32 = 1e-6;

        let denom = self.direction.dot(&normal);
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (point - self.origin).dot(&normal) / denom;
        (t >= 0.0 && t.is_finite()).then_some(t)
    }
}
