//! Planar vector type and the scalar distance helpers used in hot loops.

use crate::float::Float;
use core::ops::{Add, AddAssign, Sub, SubAssign};

/// 2D vector in viewport space (x right, y down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }

    /// Squared distance to `other`.
    pub fn distance_sq(self, other: Self) -> F { distance_sq(self, other) }

    /// Distance to `other`.
    pub fn distance(self, other: Self) -> F { distance(self, other) }

    /// Component-wise clamp into the box `[min, max]`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Vec2 { x: self.x.clamp(min.x, max.x), y: self.y.clamp(min.y, max.y) }
    }

    /// Smaller of the two components.
    pub fn min_element(self) -> F { self.x.min(self.y) }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

/// Squared distance between two points. Prefer this for threshold tests.
pub fn distance_sq<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
pub fn distance<F: Float>(a: Vec2<F>, b: Vec2<F>) -> F {
    distance_sq(a, b).sqrt()
}

/// Point halfway between `a` and `b`.
pub fn midpoint<F: Float>(a: Vec2<F>, b: Vec2<F>) -> Vec2<F> {
    Vec2::new((a.x + b.x) * F::half(), (a.y + b.y) * F::half())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_calculation() {
        let a = Vec2::new(0.0f32, 0.0);
        let b = Vec2::new(3.0f32, 4.0);
        assert!((distance(a, b) - 5.0).abs() < 1e-6);
        assert!((distance_sq(a, b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn midpoint_is_halfway() {
        let m = midpoint(Vec2::new(2.0f64, -4.0), Vec2::new(6.0, 8.0));
        assert_eq!(m, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn clamp_into_box() {
        let v = Vec2::new(-5.0f32, 700.0).clamp(Vec2::zero(), Vec2::new(800.0, 600.0));
        assert_eq!(v, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::new(1.0f32, 1.0);
        v += Vec2::new(2.0, 3.0);
        v -= Vec2::new(0.5, 0.5);
        assert_eq!(v, Vec2::new(2.5, 3.5));
    }
}
