//! Axis-aligned corners of the box spanned by two points

use super::point::Point3;
use super::vector::Vector3;
use crate::error::Result;

/// Componentwise minimum of `a` and `b`
pub fn min_corner(a: &Point3, b: &Point3) -> Result<Point3> {
    a.ensure_same_space(b)?;
    Ok(Point3::new(
        a.space,
        Vector3::new(a.x().min(b.x()), a.y().min(b.y()), a.z().min(b.z())),
    ))
}

/// Componentwise maximum of `a` and `b`
pub fn max_corner(a: &Point3, b: &Point3) -> Result<Point3> {
    a.ensure_same_space(b)?;
    Ok(Point3::new(
        a.space,
        Vector3::new(a.x().max(b.x()), a.y().max(b.y()), a.z().max(b.z())),
    ))
}
