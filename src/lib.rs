//! shapedraw - sample 3D shapes into point streams
//!
//! Shapes (points, lines, polylines, spheres, cuboids, block faces,
//! wireframes) are converted into evenly spaced, deterministic sequences
//! of points. Each point is pushed synchronously into a `PointConsumer`
//! supplied by the host, which decides how to display it.
//!
//! ## Modules
//! - `geom`: vector algebra, space-bound points, bounding corners
//! - `shapes`: sampling algorithms and shape types
//! - `render`: `ShapeRenderer`, holding step size and style
//! - `settings`: renderer settings persisted as JSON

pub mod error;
pub mod geom;
pub mod render;
pub mod settings;
pub mod shapes;

pub use error::{DrawError, Result};
pub use geom::{max_corner, min_corner, Point3, SpaceId, Vector3};
pub use render::{Receivers, RenderStyle, ShapeRenderer, DEFAULT_STEP_SIZE};
pub use settings::RendererSettings;
pub use shapes::{
    sample_to_vec, BlockFace, FnConsumer, LineOptions, PointConsumer, Scene, SceneDescription, SceneError,
    Shape,
};
