use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D vector value type used for every camera computation.
///
/// Zero-length inputs never produce NaN: `normalize` leaves a zero vector
/// untouched and `unit` returns the zero vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn set(&mut self, x: f32, y: f32, z: f32) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    fn vec3(&self) -> Vec3 {
        Vec3::from(*self)
    }

    pub fn length(&self) -> f32 {
        self.vec3().length()
    }

    /// Squared norm, for comparisons that don't need the sqrt
    pub fn length_squared(&self) -> f32 {
        self.vec3().length_squared()
    }

    /// Rescale in place to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) {
        let unit = self.vec3().normalize_or_zero();
        if unit != Vec3::ZERO {
            *self = unit.into();
        }
    }

    /// Unit-length copy, or the zero vector when `self` has no length.
    pub fn unit(&self) -> Self {
        self.vec3().normalize_or_zero().into()
    }

    pub fn add(&self, other: &Self) -> Self {
        (self.vec3() + other.vec3()).into()
    }

    pub fn subtract(&self, other: &Self) -> Self {
        (self.vec3() - other.vec3()).into()
    }

    pub fn multiply(&self, scalar: f32) -> Self {
        (self.vec3() * scalar).into()
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.vec3().dot(other.vec3())
    }

    /// Right-handed cross product: `X.cross(&Y) == Z`
    pub fn cross(&self, other: &Self) -> Self {
        self.vec3().cross(other.vec3()).into()
    }

    pub fn distance_to(&self, other: &Self) -> f32 {
        self.vec3().distance(other.vec3())
    }

    /// Projection of `self` onto `v`. Projecting onto a zero vector yields zero.
    pub fn project_onto(&self, v: &Self) -> Self {
        if v.length_squared() == 0.0 {
            return Self::ZERO;
        }
        self.vec3().project_onto(v.vec3()).into()
    }

    /// Divide by a scalar. Returns `None` for a zero divisor or a non-finite result.
    pub fn checked_div(&self, scalar: f32) -> Option<Self> {
        if scalar == 0.0 {
            return None;
        }
        let v = self.vec3() / scalar;
        v.is_finite().then(|| v.into())
    }

    pub fn is_finite(&self) -> bool {
        self.vec3().is_finite()
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(&self, &rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(&rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.multiply(rhs)
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.multiply(self)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        (-self.vec3()).into()
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vector3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_squared() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert_eq!(v, Vector3::ZERO);
        assert_eq!(Vector3::ZERO.unit(), Vector3::ZERO);
    }

    #[test]
    fn test_unit_does_not_mutate() {
        let v = Vector3::new(0.0, 0.0, -4.0);
        let u = v.unit();
        assert_eq!(u, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(v, Vector3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn test_cross_right_hand_rule() {
        assert_eq!(Vector3::X.cross(&Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(&Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Y.cross(&Vector3::X), -Vector3::Z);
    }

    #[test]
    fn test_project_onto_zero() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.project_onto(&Vector3::ZERO), Vector3::ZERO);
    }

    #[test]
    fn test_checked_div() {
        let v = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(v.checked_div(2.0), Some(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(v.checked_div(0.0), None);
    }

    #[test]
    fn test_algebra_agrees_with_glam() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-0.5, 3.0, 4.0);
        let (ga, gb) = (Vec3::from(a), Vec3::from(b));

        assert_eq!(a.dot(&b), ga.dot(gb));
        assert_eq!(Vec3::from(a.cross(&b)), ga.cross(gb));
        assert_eq!(a.distance_to(&b), ga.distance(gb));
        assert_eq!(Vec3::from(a.unit()), ga.normalize());
        assert_eq!(Vec3::from(a.project_onto(&b)), ga.project_onto(gb));
    }

    #[test]
    fn test_normalize_never_produces_nan() {
        let mut tiny = Vector3::new(1e-30, 0.0, 0.0);
        tiny.normalize();
        assert!(tiny.is_finite());
        assert!(Vector3::new(f32::MIN_POSITIVE, 0.0, 0.0).unit().is_finite());
    }

    #[test]
    fn test_glam_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let g: Vec3 = v.into();
        assert_eq!(Vector3::from(g), v);
    }
}
