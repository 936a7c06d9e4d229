//! Shapes module - sampling algorithms and drawable shapes
//!
//! This module provides:
//! - `PointConsumer` trait, the sink every sampled point goes to
//! - `sampler` functions implementing each shape algorithm
//! - `Shape` trait and shape value types wrapping those functions
//! - `Scene` for drawing several shapes in sequence

mod face;
mod path;
mod primitives;
pub mod sampler;
mod scene;
mod traits;
mod wireframe;

pub use face::{BlockFace, BlockFaceRect};
pub use path::{LineOptions, Polyline};
pub use primitives::{Cuboid, Line, PointShape, Sphere, VectorShape};
pub use scene::{Scene, SceneDescription, SceneError, SceneShape, ShapeSpec};
pub use traits::{sample_to_vec, BoxedShape, FnConsumer, PointConsumer, Shape};
pub use wireframe::{Wireframe, WireframeError};
