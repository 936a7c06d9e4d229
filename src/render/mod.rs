//! Render module - turns shapes into point streams for a host
//!
//! This module provides:
//! - `ShapeRenderer`, one draw method per shape
//! - Style and recipient settings carried through to the host

mod renderer;

pub use renderer::{Receivers, RenderStyle, ShapeRenderer, DEFAULT_STEP_SIZE};
