//! 3D vector arithmetic for cell geometry
//!
//! [`Vector3D`] is the coordinate type every cell vertex is stored as. It is
//! an immutable value type: all operations return new vectors and none can
//! fail. NaN and infinity propagate per IEEE semantics rather than being
//! rejected.

use nalgebra::Point3;
use std::ops::{Add, Mul, Sub};

/// A 3D point or vector with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3D {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vector3D {
    /// Create a new vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Cross product `self × other`
    pub fn cross(self, other: Vector3D) -> Vector3D {
        Vector3D::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Dot product `self · other`
    pub fn dot(self, other: Vector3D) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean magnitude
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Add for Vector3D {
    type Output = Vector3D;

    fn add(self, other: Vector3D) -> Vector3D {
        Vector3D::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3D {
    type Output = Vector3D;

    fn sub(self, other: Vector3D) -> Vector3D {
        Vector3D::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Vector3D;

    fn mul(self, scale: f64) -> Vector3D {
        Vector3D::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl From<Vector3D> for Point3<f64> {
    fn from(v: Vector3D) -> Point3<f64> {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for nalgebra::Vector3<f64> {
    fn from(v: Vector3D) -> nalgebra::Vector3<f64> {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3D::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_scale() {
        let v = Vector3D::new(1.0, -2.0, 0.5);
        assert_eq!(v * 2.0, Vector3D::new(2.0, -4.0, 1.0));
    }

    #[test]
    fn test_cross_basis_vectors() {
        let x = Vector3D::new(1.0, 0.0, 0.0);
        let y = Vector3D::new(0.0, 1.0, 0.0);
        let z = Vector3D::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), z * -1.0);
    }

    #[test]
    fn test_cross_is_orthogonal() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(-4.0, 0.0, 5.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < 1e-12);
        assert!(c.dot(b).abs() < 1e-12);
    }

    #[test]
    fn test_dot_and_length() {
        let v = Vector3D::new(3.0, 4.0, 0.0);
        assert_eq!(v.dot(v), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_point3_conversion() {
        let p: Point3<f64> = Vector3D::new(1.0, 2.0, 3.0).into();
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }
}
