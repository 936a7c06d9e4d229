//! Points bound to a coordinate space

use std::fmt;

use serde::{Deserialize, Serialize};

use super::vector::Vector3;
use crate::error::{DrawError, Result};

/// Opaque handle identifying an independent coordinate space (a world)
///
/// The only thing the sampler ever does with it is compare for equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpaceId(pub u64);

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "space#{}", self.0)
    }
}

/// A resolved position inside a coordinate space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point3 {
    pub space: SpaceId,
    pub pos: Vector3,
}

impl Point3 {
    pub fn new(space: SpaceId, pos: Vector3) -> Self {
        Self { space, pos }
    }

    /// Shorthand for building a point from raw coordinates
    pub fn xyz(space: SpaceId, x: f64, y: f64, z: f64) -> Self {
        Self::new(space, Vector3::new(x, y, z))
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn z(&self) -> f64 {
        self.pos.z
    }

    /// Strip the space, keeping only the coordinates
    pub fn to_vector(&self) -> Vector3 {
        self.pos
    }

    /// Fail with `IncompatibleSpace` unless both points share a space
    pub fn ensure_same_space(&self, other: &Point3) -> Result<()> {
        if self.space != other.space {
            return Err(DrawError::IncompatibleSpace {
                left: self.space,
                right: other.space,
            });
        }
        Ok(())
    }

    /// Same point moved by `offset`
    pub fn offset(&self, offset: Vector3) -> Point3 {
        Point3::new(self.space, self.pos + offset)
    }

    /// Same point moved by individual component deltas
    pub fn offset_xyz(&self, dx: f64, dy: f64, dz: f64) -> Point3 {
        Point3::new(self.space, self.pos.add_xyz(dx, dy, dz))
    }

    /// Vector from `self` to `other`
    pub fn delta_to(&self, other: &Point3) -> Result<Vector3> {
        self.ensure_same_space(other)?;
        Ok(other.pos - self.pos)
    }

    /// Squared distance between two points in the same space
    pub fn distance_squared(&self, other: &Point3) -> Result<f64> {
        Ok(self.delta_to(other)?.magnitude_squared())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_space() {
        let a = Point3::xyz(SpaceId(1), 0.0, 0.0, 0.0);
        let b = Point3::xyz(SpaceId(1), 1.0, 2.0, 2.0);
        assert_eq!(a.distance_squared(&b), Ok(9.0));
        assert_eq!(a.delta_to(&b), Ok(Vector3::new(1.0, 2.0, 2.0)));
    }

    #[test]
    fn test_mismatched_space() {
        let a = Point3::xyz(SpaceId(1), 0.0, 0.0, 0.0);
        let b = Point3::xyz(SpaceId(2), 0.0, 0.0, 0.0);
        assert_eq!(
            a.delta_to(&b),
            Err(DrawError::IncompatibleSpace {
                left: SpaceId(1),
                right: SpaceId(2),
            })
        );
    }

    #[test]
    fn test_offset_keeps_space() {
        let a = Point3::xyz(SpaceId(7), 1.0, 1.0, 1.0);
        let b = a.offset_xyz(0.0, 1.0, 0.0);
        assert_eq!(b.space, SpaceId(7));
        assert_eq!(b.to_vector(), Vector3::new(1.0, 2.0, 1.0));
    }
}
