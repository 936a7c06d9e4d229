//! Point consumer and shape traits
//!
//! `PointConsumer` is the single seam between geometry and whatever
//! actually displays the points. `Shape` lets sampled shapes be stored
//! and composed without knowing their concrete type.
//!
//! ```rust
//! use shapedraw::{FnConsumer, Point3, PointConsumer, SpaceId};
//!
//! let mut count = 0;
//! let mut consumer = FnConsumer(|_p: Point3| count += 1);
//! consumer.consume(Point3::xyz(SpaceId(0), 1.0, 2.0, 3.0));
//! drop(consumer);
//! assert_eq!(count, 1);
//! ```

use crate::error::Result;
use crate::geom::{Point3, SpaceId};

/// Receives sampled points, one call per point, in emission order
///
/// Calls are synchronous and never batched. A sampling call that fails
/// validation fails before the first `consume`.
pub trait PointConsumer {
    fn consume(&mut self, point: Point3);
}

/// Collecting consumer, mostly for tests and offline processing
impl PointConsumer for Vec<Point3> {
    fn consume(&mut self, point: Point3) {
        self.push(point);
    }
}

impl<C: PointConsumer + ?Sized> PointConsumer for &mut C {
    fn consume(&mut self, point: Point3) {
        (**self).consume(point);
    }
}

/// Adapts any `FnMut(Point3)` closure into a consumer
pub struct FnConsumer<F>(pub F);

impl<F: FnMut(Point3)> PointConsumer for FnConsumer<F> {
    fn consume(&mut self, point: Point3) {
        (self.0)(point);
    }
}

/// A shape that can be sampled into points
///
/// ## Thread Safety
///
/// Shapes are plain data and must be `Send + Sync` so a scene can be
/// built on one thread and drawn on another.
pub trait Shape: Send + Sync {
    /// Emit the shape's points at the given step size
    ///
    /// `step` has already been validated as `> 0` by the caller.
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()>;

    /// Check the shape can be sampled without emitting anything
    ///
    /// Shapes built from a single point cannot mismatch spaces and keep
    /// the default.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Get the name of this shape (for logs)
    fn name(&self) -> &str;

    /// Coordinate space every point of this shape lives in
    fn space(&self) -> SpaceId;

    /// Whether the traced outline ends where it started
    fn is_closed(&self) -> bool {
        false
    }
}

/// A boxed shape for dynamic dispatch
pub type BoxedShape = Box<dyn Shape>;

/// Sample a shape into a fresh vector
pub fn sample_to_vec<S: Shape + ?Sized>(shape: &S, step: f64) -> Result<Vec<Point3>> {
    let mut points: Vec<Point3> = Vec::new();
    shape.sample(step, &mut points)?;
    Ok(points)
}
