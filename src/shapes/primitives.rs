//! Primitive shapes - Point, Line, Sphere, Cuboid, Vector
//!
//! These are the basic building blocks for overlays. Each one stores its
//! parameters and hands them to the matching sampler function.

use super::sampler;
use super::traits::{PointConsumer, Shape};
use crate::error::Result;
use crate::geom::{Point3, SpaceId, Vector3};

/// A single point
#[derive(Clone, Debug)]
pub struct PointShape {
    pub at: Point3,
}

impl PointShape {
    pub fn new(at: Point3) -> Self {
        Self { at }
    }
}

impl Shape for PointShape {
    fn sample(&self, _step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::point(&self.at, out);
        Ok(())
    }

    fn name(&self) -> &str {
        "Point"
    }

    fn space(&self) -> SpaceId {
        self.at.space
    }
}

/// A line segment from `a` towards `b`
///
/// ## Sampling
/// ```text
/// p(i) = a + unit(b - a) * i * step,   while (i * step)² < |b - a|²
/// ```
#[derive(Clone, Debug)]
pub struct Line {
    pub a: Point3,
    pub b: Point3,
}

impl Line {
    /// Create a new line; order only affects where sampling starts
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Segment length, if both ends share a space
    pub fn length(&self) -> Result<f64> {
        Ok(self.a.distance_squared(&self.b)?.sqrt())
    }
}

impl Shape for Line {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::line(&self.a, &self.b, step, out)
    }

    fn validate(&self) -> Result<()> {
        self.a.ensure_same_space(&self.b)
    }

    fn name(&self) -> &str {
        "Line"
    }

    fn space(&self) -> SpaceId {
        self.a.space
    }
}

/// A sphere surface around `centre`
///
/// ## Parametric Equation
/// ```text
/// x = r * sin(phi) * cos(theta)
/// y = r * sin(phi) * sin(theta)
/// z = r * cos(phi)
/// ```
/// The step size is used as the angular increment for both angles.
#[derive(Clone, Debug)]
pub struct Sphere {
    pub centre: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(centre: Point3, radius: f64) -> Self {
        Self { centre, radius }
    }
}

impl Shape for Sphere {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::sphere(&self.centre, self.radius, step, out);
        Ok(())
    }

    fn name(&self) -> &str {
        "Sphere"
    }

    fn space(&self) -> SpaceId {
        self.centre.space
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// Wireframe of the axis-aligned box spanned by two opposite corners
#[derive(Clone, Debug)]
pub struct Cuboid {
    pub a: Point3,
    pub b: Point3,
}

impl Cuboid {
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Unit block whose minimum corner is `block`
    pub fn block(block: Point3) -> Self {
        Self::new(block, block.offset_xyz(1.0, 1.0, 1.0))
    }
}

impl Shape for Cuboid {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::cuboid(&self.a, &self.b, step, out)
    }

    fn validate(&self) -> Result<()> {
        self.a.ensure_same_space(&self.b)
    }

    fn name(&self) -> &str {
        "Cuboid"
    }

    fn space(&self) -> SpaceId {
        self.a.space
    }

    fn is_closed(&self) -> bool {
        true
    }
}

/// A vector drawn as a segment starting at `origin`
#[derive(Clone, Debug)]
pub struct VectorShape {
    pub origin: Point3,
    pub v: Vector3,
}

impl VectorShape {
    pub fn new(origin: Point3, v: Vector3) -> Self {
        Self { origin, v }
    }

    /// Where the drawn segment would end
    pub fn tip(&self) -> Point3 {
        self.origin.offset(self.v)
    }
}

impl Shape for VectorShape {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::vector(&self.origin, self.v, step, out)
    }

    fn name(&self) -> &str {
        "Vector"
    }

    fn space(&self) -> SpaceId {
        self.origin.space
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::sample_to_vec;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::xyz(SpaceId(0), x, y, z)
    }

    #[test]
    fn test_point() {
        let shape = PointShape::new(p(1.0, 2.0, 3.0));
        assert_eq!(sample_to_vec(&shape, 0.1).unwrap(), vec![p(1.0, 2.0, 3.0)]);
    }

    #[test]
    fn test_line() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        assert_eq!(line.length(), Ok(2.0));

        let points = sample_to_vec(&line, 0.5).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], p(0.0, 0.0, 1.5));
        assert!(!line.is_closed());
    }

    #[test]
    fn test_sphere() {
        let sphere = Sphere::new(p(0.0, 64.0, 0.0), 2.0);
        let points = sample_to_vec(&sphere, 0.5).unwrap();
        // phi: 0..=3.0 (7 values); theta: 0..=6.0 (13 values)
        assert_eq!(points.len(), 7 * 13);
        assert!(sphere.is_closed());
    }

    #[test]
    fn test_block_cuboid() {
        let cuboid = Cuboid::block(p(3.0, 3.0, 3.0));
        let points = sample_to_vec(&cuboid, 0.5).unwrap();
        // 12 unit edges, two points each
        assert_eq!(points.len(), 24);
        assert!(points.iter().all(|q| (3.0..=4.0).contains(&q.y())));
    }

    #[test]
    fn test_vector() {
        let shape = VectorShape::new(p(1.0, 0.0, 0.0), Vector3::new(-1.0, 0.0, 0.0));
        assert_eq!(shape.tip(), p(0.0, 0.0, 0.0));
        let points = sample_to_vec(&shape, 0.25).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], p(1.0, 0.0, 0.0));
    }
}
