//! Shape renderer - drives the sampler into a point consumer
//!
//! The renderer owns the configuration shared by every draw call (step
//! size, style, recipients) and the consumer the points go to. Draw
//! methods are thin wrappers over `shapes::sampler` that inject the
//! current step size.
//!
//! ## Example
//!
//! ```rust
//! use shapedraw::{Point3, ShapeRenderer, SpaceId};
//!
//! let world = SpaceId(0);
//! let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
//! renderer.set_step_size(0.5).unwrap();
//! renderer.set_color([0, 0, 255]);
//! renderer
//!     .draw_line(&Point3::xyz(world, 0.0, 0.0, 0.0), &Point3::xyz(world, 1.0, 0.0, 0.0))
//!     .unwrap();
//! assert_eq!(renderer.consumer().len(), 2);
//! ```
//!
//! Points are shown once per call; hosts that want a persistent overlay
//! redraw every tick.

use crate::error::{DrawError, Result};
use crate::geom::{Point3, Vector3};
use crate::shapes::{sampler, BlockFace, LineOptions, PointConsumer, Shape};

/// Default spacing between consecutive points
pub const DEFAULT_STEP_SIZE: f64 = 0.1;

/// Visual styling handed through to the host untouched
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Point colour (RGB); hosts may not reproduce it exactly
    pub color: [u8; 3],

    /// Size of each displayed point
    pub particle_size: f32,

    /// Ask the host to show points even beyond normal view distance
    pub force: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 0],
            particle_size: 0.5,
            force: false,
        }
    }
}

/// Who should see the points
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Receivers {
    /// Everyone in the point's space
    #[default]
    All,
    /// Only the named recipients
    Only(Vec<String>),
}

/// Counts points on their way to the real consumer
struct Counting<'a> {
    inner: &'a mut dyn PointConsumer,
    count: usize,
}

impl PointConsumer for Counting<'_> {
    fn consume(&mut self, point: Point3) {
        self.count += 1;
        self.inner.consume(point);
    }
}

/// Draws shapes by pushing sampled points into `C`
pub struct ShapeRenderer<C: PointConsumer> {
    consumer: C,
    step_size: f64,
    style: RenderStyle,
    receivers: Receivers,
}

impl<C: PointConsumer> ShapeRenderer<C> {
    /// Create a renderer with default step size and style
    pub fn new(consumer: C) -> Self {
        Self {
            consumer,
            step_size: DEFAULT_STEP_SIZE,
            style: RenderStyle::default(),
            receivers: Receivers::default(),
        }
    }

    /// Set the step size (builder pattern)
    pub fn with_step_size(mut self, step_size: f64) -> Result<Self> {
        self.set_step_size(step_size)?;
        Ok(self)
    }

    /// Set the spacing between points
    ///
    /// Smaller steps mean more points per shape, which costs the host
    /// more to display. For spheres the step is an angle in radians.
    ///
    /// # Errors
    /// `DrawError::InvalidConfiguration` unless `step_size` is finite and `> 0`
    pub fn set_step_size(&mut self, step_size: f64) -> Result<()> {
        if !(step_size.is_finite() && step_size > 0.0) {
            return Err(DrawError::InvalidConfiguration(step_size));
        }
        log::debug!("Step size {} -> {}", self.step_size, step_size);
        self.step_size = step_size;
        Ok(())
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn set_color(&mut self, color: [u8; 3]) {
        self.style.color = color;
    }

    pub fn set_particle_size(&mut self, size: f32) {
        self.style.particle_size = size;
    }

    pub fn set_force_show(&mut self, force: bool) {
        self.style.force = force;
    }

    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn set_receivers(&mut self, receivers: Receivers) {
        self.receivers = receivers;
    }

    pub fn receivers(&self) -> &Receivers {
        &self.receivers
    }

    /// Get a reference to the consumer
    pub fn consumer(&self) -> &C {
        &self.consumer
    }

    /// Get a mutable reference to the consumer
    pub fn consumer_mut(&mut self) -> &mut C {
        &mut self.consumer
    }

    /// Give back the consumer, dropping the renderer
    pub fn into_consumer(self) -> C {
        self.consumer
    }

    /// Run one sampler call, logging how many points it produced
    fn emit<F>(&mut self, shape: &str, draw: F) -> Result<()>
    where
        F: FnOnce(f64, &mut dyn PointConsumer) -> Result<()>,
    {
        let mut counting = Counting {
            inner: &mut self.consumer,
            count: 0,
        };
        draw(self.step_size, &mut counting)?;
        log::trace!("{}: {} points at step {}", shape, counting.count, self.step_size);
        Ok(())
    }

    /// Draw a single point
    pub fn draw_point(&mut self, point: &Point3) {
        sampler::point(point, &mut self.consumer);
    }

    /// Draw a line between `a` and `b`
    pub fn draw_line(&mut self, a: &Point3, b: &Point3) -> Result<()> {
        self.emit("line", |step, out| sampler::line(a, b, step, out))
    }

    /// Draw a sphere with the given radius
    pub fn draw_sphere(&mut self, centre: &Point3, radius: f64) -> Result<()> {
        self.emit("sphere", |step, out| {
            sampler::sphere(centre, radius, step, out);
            Ok(())
        })
    }

    /// Draw the wireframe of the box between two corners (order does not matter)
    pub fn draw_cuboid(&mut self, a: &Point3, b: &Point3) -> Result<()> {
        self.emit("cuboid", |step, out| sampler::cuboid(a, b, step, out))
    }

    /// Draw `v` as a segment starting at `origin`
    pub fn draw_vector(&mut self, origin: &Point3, v: Vector3) -> Result<()> {
        self.emit("vector", |step, out| sampler::vector(origin, v, step, out))
    }

    /// Draw lines through a sequence of points
    pub fn draw_polyline(&mut self, points: &[Point3], options: LineOptions) -> Result<()> {
        self.emit("polyline", |step, out| {
            sampler::polyline(points, options.closed, step, out)
        })
    }

    /// Outline one face of the block whose minimum corner is `block`
    pub fn draw_block_face(&mut self, block: &Point3, face: BlockFace) -> Result<()> {
        self.emit("block face", |step, out| {
            sampler::block_face(block, face, step, out)
        })
    }

    /// Draw any shape, including a whole `Scene`
    pub fn draw_shape(&mut self, shape: &dyn Shape) -> Result<()> {
        let name = shape.name().to_string();
        self.emit(&name, |step, out| shape.sample(step, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::SpaceId;
    use crate::shapes::{FnConsumer, Line, PointShape, Polyline, Scene, Sphere};

    const S: SpaceId = SpaceId(0);

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::xyz(S, x, y, z)
    }

    #[test]
    fn test_defaults() {
        let renderer = ShapeRenderer::new(Vec::<Point3>::new());
        assert_eq!(renderer.step_size(), DEFAULT_STEP_SIZE);
        assert_eq!(renderer.style(), &RenderStyle::default());
        assert_eq!(renderer.receivers(), &Receivers::All);
    }

    #[test]
    fn test_invalid_step_size() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
        for bad in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                renderer.set_step_size(bad),
                Err(DrawError::InvalidConfiguration(_))
            ));
        }
        // Rejected values leave the old one in place
        assert_eq!(renderer.step_size(), DEFAULT_STEP_SIZE);
        assert!(ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(0.0).is_err());
    }

    #[test]
    fn test_draw_line_uses_step() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(0.5).unwrap();
        renderer.draw_line(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(renderer.into_consumer(), vec![p(0.0, 0.0, 0.0), p(0.5, 0.0, 0.0)]);
    }

    #[test]
    fn test_default_step_line() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
        renderer.draw_line(&p(0.0, 0.0, 0.0), &p(0.0, 2.0, 0.0)).unwrap();
        assert_eq!(renderer.consumer().len(), 20);
    }

    #[test]
    fn test_errors_propagate_without_output() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
        let other = Point3::xyz(SpaceId(1), 1.0, 1.0, 1.0);

        assert!(renderer.draw_line(&p(0.0, 0.0, 0.0), &other).is_err());
        assert!(renderer.draw_cuboid(&p(0.0, 0.0, 0.0), &other).is_err());
        assert!(renderer
            .draw_polyline(&[p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), other], LineOptions::closed())
            .is_err());
        assert!(renderer.consumer().is_empty());
    }

    #[test]
    fn test_draw_polyline_options() {
        let pts = [p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0)];

        let mut open = ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(0.5).unwrap();
        open.draw_polyline(&pts, LineOptions::default()).unwrap();
        assert_eq!(open.consumer().len(), 4);

        let mut closed = ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(0.5).unwrap();
        closed.draw_polyline(&pts, LineOptions::closed()).unwrap();
        // Closing edge has length √2: three more points
        assert_eq!(closed.consumer().len(), 7);
    }

    #[test]
    fn test_draw_block_face() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(0.5).unwrap();
        renderer.draw_block_face(&p(0.0, 0.0, 0.0), BlockFace::Up).unwrap();
        let points = renderer.into_consumer();
        assert!(points.iter().all(|q| q.y() == 1.0));
        assert!(points.contains(&p(0.0, 1.0, 0.0)));
        assert!(points.contains(&p(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_draw_shapes_with_closure() {
        let mut seen = 0usize;
        {
            let mut renderer = ShapeRenderer::new(FnConsumer(|_p: Point3| seen += 1));
            renderer.set_step_size(1.0).unwrap();
            renderer.draw_point(&p(0.0, 0.0, 0.0));
            renderer.draw_vector(&p(0.0, 0.0, 0.0), Vector3::new(3.0, 0.0, 0.0)).unwrap();
            renderer.draw_sphere(&p(0.0, 0.0, 0.0), 1.0).unwrap();
        }
        // 1 point + 3 along the vector + 4 x 7 sphere grid
        assert_eq!(seen, 1 + 3 + 28);
    }

    #[test]
    fn test_draw_scene() {
        let mut scene = Scene::new("pair");
        scene
            .add(Sphere::new(p(0.0, 0.0, 0.0), 1.0))
            .add(Polyline::new(vec![p(5.0, 5.0, 5.0)]));

        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new()).with_step_size(1.0).unwrap();
        renderer.draw_shape(&scene).unwrap();
        let points = renderer.into_consumer();
        assert_eq!(points.len(), 28 + 1);
        assert_eq!(points.last(), Some(&p(5.0, 5.0, 5.0)));
    }

    #[test]
    fn test_draw_scene_fails_without_output() {
        let mut scene = Scene::new("mixed");
        scene
            .add(PointShape::new(p(0.0, 0.0, 0.0)))
            .add(Line::new(p(0.0, 0.0, 0.0), Point3::xyz(SpaceId(1), 1.0, 0.0, 0.0)));

        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
        assert!(matches!(
            renderer.draw_shape(&scene),
            Err(DrawError::IncompatibleSpace { .. })
        ));
        assert!(renderer.consumer().is_empty());
    }

    #[test]
    fn test_style_passthrough() {
        let mut renderer = ShapeRenderer::new(Vec::<Point3>::new());
        renderer.set_color([0, 128, 255]);
        renderer.set_particle_size(1.0);
        renderer.set_force_show(true);
        renderer.set_receivers(Receivers::Only(vec!["alex".to_string()]));

        assert_eq!(
            renderer.style(),
            &RenderStyle {
                color: [0, 128, 255],
                particle_size: 1.0,
                force: true,
            }
        );
        assert_eq!(renderer.receivers(), &Receivers::Only(vec!["alex".to_string()]));
    }
}
