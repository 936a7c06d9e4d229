//! A small 3D vector value type
//!
//! `Vector3` is `Copy` and every operation returns a new value, except
//! `add_assign` which mutates in place and returns nothing.
//!
//! Equality is exact: two vectors are equal only if every component
//! compares equal as an `f64`. No epsilon is applied.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::point::{Point3, SpaceId};
use crate::error::{DrawError, Result};

/// A vector (or position) in 3D space
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Create a vector from its components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Squared length (cheaper than `magnitude`, prefer it for comparisons)
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Multiply every component by `n`
    pub fn scale(&self, n: f64) -> Vector3 {
        Vector3::new(self.x * n, self.y * n, self.z * n)
    }

    /// Offset by individual component deltas
    pub fn add_xyz(&self, dx: f64, dy: f64, dz: f64) -> Vector3 {
        Vector3::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Unit vector pointing the same way
    ///
    /// # Errors
    /// `DrawError::DivideByZero` if the vector has zero length
    pub fn normalize(&self) -> Result<Vector3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(DrawError::DivideByZero);
        }
        Ok(Vector3::new(self.x / mag, self.y / mag, self.z / mag))
    }

    /// Bind this vector to a coordinate space
    pub fn at(self, space: SpaceId) -> Point3 {
        Point3::new(space, self)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, n: f64) -> Vector3 {
        self.scale(n)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_magnitude() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(v.magnitude_squared(), 169.0);
        assert_eq!(v.magnitude(), 13.0);
    }

    #[test]
    fn test_dot_and_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(&y), 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(0.0, 3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(v.magnitude(), 1.0);
        assert_relative_eq!(v.y, 0.6);
        assert_relative_eq!(v.z, 0.8);
    }

    #[test]
    fn test_normalize_zero() {
        assert_eq!(Vector3::ZERO.normalize(), Err(DrawError::DivideByZero));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vector3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vector3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a.add_xyz(1.0, 1.0, 1.0), Vector3::new(2.0, 3.0, 4.0));

        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
        // `a` is untouched: vectors are values
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_exact_equality() {
        let a = Vector3::new(0.1 + 0.2, 0.0, 0.0);
        assert_ne!(a, Vector3::new(0.3, 0.0, 0.0));
    }

    #[test]
    fn test_nalgebra_conversion() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let n: nalgebra::Vector3<f64> = v.into();
        assert_eq!(Vector3::from(n), v);
        let p: nalgebra::Point3<f64> = v.into();
        assert_eq!(Vector3::from(p), v);
    }
}
