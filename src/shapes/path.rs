//! Polyline - arbitrary sequences of points
//!
//! A Polyline connects its points in order with sampled lines. It can be
//! open (endpoints don't connect) or closed (last point connects back to
//! the first).

use std::f64::consts::TAU;

use super::sampler;
use super::traits::{PointConsumer, Shape};
use crate::error::Result;
use crate::geom::{Point3, SpaceId};

/// Options for drawing a sequence of points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineOptions {
    /// Connect the last point back to the first (needs more than two points)
    pub closed: bool,
}

impl LineOptions {
    pub fn closed() -> Self {
        Self { closed: true }
    }
}

/// A polyline defined by a sequence of points
#[derive(Clone, Debug)]
pub struct Polyline {
    /// Points along the polyline
    points: Vec<Point3>,
    /// Whether the polyline is closed
    closed: bool,
    /// Optional name for this polyline
    name: String,
}

impl Polyline {
    /// Create a new open polyline from points
    pub fn new(points: Vec<Point3>) -> Self {
        Self::with_options(points, LineOptions::default(), "Polyline".to_string())
    }

    /// Create a new closed polyline from points
    pub fn closed(points: Vec<Point3>) -> Self {
        Self::with_options(points, LineOptions::closed(), "Polyline".to_string())
    }

    /// Create a polyline with full options
    pub fn with_options(points: Vec<Point3>, options: LineOptions, name: String) -> Self {
        Self {
            points,
            closed: options.closed,
            name,
        }
    }

    /// Create a regular polygon lying flat (constant y) around `centre`
    ///
    /// # Arguments
    /// * `sides` - Number of sides (3 = triangle, 4 = square, etc.)
    /// * `radius` - Distance from centre to vertices
    pub fn regular(centre: Point3, radius: f64, sides: usize) -> Self {
        let points: Vec<Point3> = (0..sides)
            .map(|i| {
                let angle = i as f64 / sides as f64 * TAU;
                centre.offset_xyz(radius * angle.cos(), 0.0, radius * angle.sin())
            })
            .collect();

        Self::with_options(points, LineOptions::closed(), format!("Polygon{}", sides))
    }

    /// Get the number of points in the polyline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a reference to the points
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

impl Shape for Polyline {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::polyline(&self.points, self.closed, step, out)
    }

    fn validate(&self) -> Result<()> {
        match self.points.split_first() {
            Some((first, rest)) => rest.iter().try_for_each(|p| first.ensure_same_space(p)),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn space(&self) -> SpaceId {
        self.points.first().map(|p| p.space).unwrap_or_default()
    }

    /// Only reports closed when the closing segment is actually drawn
    fn is_closed(&self) -> bool {
        self.closed && self.points.len() > 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::sample_to_vec;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::xyz(SpaceId(0), x, y, z)
    }

    #[test]
    fn test_polyline_basic() {
        let path = Polyline::new(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)]);
        assert_eq!(path.len(), 3);
        assert!(!path.is_closed());

        let points = sample_to_vec(&path, 0.5).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[2], p(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_closed_pair_is_open() {
        let path = Polyline::closed(vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        assert!(!path.is_closed());
        assert_eq!(sample_to_vec(&path, 0.5).unwrap().len(), 2);
    }

    #[test]
    fn test_closed_square() {
        let path = Polyline::closed(vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 0.0, 1.0),
            p(0.0, 0.0, 1.0),
        ]);
        assert!(path.is_closed());
        let points = sample_to_vec(&path, 0.5).unwrap();
        assert_eq!(points.len(), 8);
        assert_eq!(points[6], p(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_regular_polygon() {
        let centre = p(5.0, 10.0, 5.0);
        let hexagon = Polyline::regular(centre, 2.0, 6);
        assert_eq!(hexagon.len(), 6);
        assert!(hexagon.is_closed());
        assert_eq!(hexagon.name(), "Polygon6");

        for v in hexagon.points() {
            assert_eq!(v.y(), 10.0);
            assert_relative_eq!((v.pos - centre.pos).magnitude(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_empty() {
        let path = Polyline::new(Vec::new());
        assert!(path.is_empty());
        assert_eq!(path.space(), SpaceId::default());
        assert!(sample_to_vec(&path, 0.1).unwrap().is_empty());
    }
}
