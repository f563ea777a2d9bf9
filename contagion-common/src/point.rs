use serde::{Serialize, Deserialize};

/// A 2D coordinate. Also used as a per-tick displacement vector.
#[derive(Copy, Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline(always)]
    pub fn new(x: f32, y: f32) -> Self { Self { x, y } }
    #[inline(always)]
    pub fn zero() -> Self { Self::new(0.0, 0.0) }

    /// Vector of length `magnitude` pointing at angle `theta` (radians).
    #[inline(always)]
    pub fn from_angle(theta: f32, magnitude: f32) -> Self {
        Self::new(magnitude * theta.cos(), magnitude * theta.sin())
    }

    /// Componentwise sum. Neither operand is modified.
    #[inline(always)]
    pub fn add(self, other: Self) -> Self { Self::new(self.x + other.x, self.y + other.y) }

    #[inline(always)]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x; let dy = self.y - other.y; dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[inline(always)]
    pub fn distance(self, other: Self) -> f32 { self.distance_squared(other).sqrt() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_of_three_four_five_triangle() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point::new(-3.5, 2.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn add_is_componentwise_and_pure() {
        let a = Point::new(2.0, 3.0);
        let b = Point::new(-1.0, 4.0);
        let sum = a.add(b);
        assert_eq!(sum, Point::new(1.0, 7.0));
        // Copy semantics: operands unchanged
        assert_eq!(a, Point::new(2.0, 3.0));
        assert_eq!(b, Point::new(-1.0, 4.0));
    }

    #[test]
    fn from_angle_has_requested_magnitude() {
        let v = Point::from_angle(1.234, 5.0);
        assert!((v.distance(Point::zero()) - 5.0).abs() < 1e-5);
        assert_eq!(Point::from_angle(0.7, 0.0), Point::zero());
    }
}
