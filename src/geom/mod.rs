//! Geometry module - vector algebra and space-bound points
//!
//! This module provides:
//! - `Vector3` value type with the arithmetic the samplers need
//! - `Point3` and `SpaceId` for points living in a coordinate space
//! - Bounding corner helpers used by the cuboid sampler

mod bounds;
mod point;
mod vector;

pub use bounds::{max_corner, min_corner};
pub use point::{Point3, SpaceId};
pub use vector::Vector3;
