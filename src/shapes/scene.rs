//! Scene - composition of multiple shapes
//!
//! A Scene draws its enabled shapes one after another, in insertion
//! order. `SceneDescription` is the serializable form used to load a
//! scene from JSON.

use std::path::PathBuf;

use nalgebra::{Matrix4, Translation3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::face::{BlockFace, BlockFaceRect};
use super::path::{LineOptions, Polyline};
use super::primitives::{Cuboid, Line, PointShape, Sphere, VectorShape};
use super::traits::{BoxedShape, PointConsumer, Shape};
use super::wireframe::{Wireframe, WireframeError};
use crate::error::{DrawError, Result};
use crate::geom::{Point3, SpaceId, Vector3};

/// A shape entry in the scene with its configuration
pub struct SceneShape {
    /// The shape (boxed for dynamic dispatch)
    shape: BoxedShape,
    /// Whether this shape is enabled
    enabled: bool,
}

impl SceneShape {
    /// Create a new scene shape entry
    pub fn new<S: Shape + 'static>(shape: S) -> Self {
        Self {
            shape: Box::new(shape),
            enabled: true,
        }
    }

    /// Get the shape's name
    pub fn name(&self) -> &str {
        self.shape.name()
    }

    /// Check if enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle enabled state
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// A scene containing multiple shapes
pub struct Scene {
    /// Shapes in the scene
    shapes: Vec<SceneShape>,
    /// Name of the scene
    name: String,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            shapes: Vec::new(),
            name: name.into(),
        }
    }

    /// Add a shape to the scene
    pub fn add<S: Shape + 'static>(&mut self, shape: S) -> &mut Self {
        self.shapes.push(SceneShape::new(shape));
        self
    }

    /// Add an already boxed shape
    pub fn add_boxed(&mut self, shape: BoxedShape) -> &mut Self {
        self.shapes.push(SceneShape {
            shape,
            enabled: true,
        });
        self
    }

    /// Remove a shape by index
    pub fn remove(&mut self, index: usize) -> Option<SceneShape> {
        if index < self.shapes.len() {
            Some(self.shapes.remove(index))
        } else {
            None
        }
    }

    /// Get the number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if scene is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Get a reference to a shape entry
    pub fn get(&self, index: usize) -> Option<&SceneShape> {
        self.shapes.get(index)
    }

    /// Get a mutable reference to a shape entry
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SceneShape> {
        self.shapes.get_mut(index)
    }

    /// Iterate over shape entries
    pub fn iter(&self) -> impl Iterator<Item = &SceneShape> {
        self.shapes.iter()
    }
}

impl Shape for Scene {
    /// Every enabled shape is validated before the first one is sampled
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        self.validate()?;
        for entry in self.iter().filter(|s| s.is_enabled()) {
            entry.shape.sample(step, out)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        self.iter()
            .filter(|s| s.is_enabled())
            .try_for_each(|s| s.shape.validate())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn space(&self) -> SpaceId {
        self.shapes
            .first()
            .map(|s| s.shape.space())
            .unwrap_or_default()
    }
}

/// Errors that can occur while building a scene from its description
#[derive(Error, Debug)]
pub enum SceneError {
    #[error(transparent)]
    Draw(#[from] DrawError),

    #[error("Failed to load wireframe: {0}")]
    Wireframe(#[from] WireframeError),
}

fn unit_scale() -> f64 {
    1.0
}

/// One shape in a scene description; coordinates are `[x, y, z]`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeSpec {
    Point {
        at: [f64; 3],
    },
    Line {
        from: [f64; 3],
        to: [f64; 3],
    },
    Polyline {
        points: Vec<[f64; 3]>,
        #[serde(default)]
        closed: bool,
    },
    Sphere {
        centre: [f64; 3],
        radius: f64,
    },
    Cuboid {
        from: [f64; 3],
        to: [f64; 3],
    },
    Vector {
        origin: [f64; 3],
        v: [f64; 3],
    },
    BlockFace {
        block: [f64; 3],
        face: String,
    },
    Octahedron {
        centre: [f64; 3],
    },
    Tetrahedron {
        centre: [f64; 3],
    },
    /// OBJ mesh edges, scaled about the model origin and then moved by `offset`
    Obj {
        path: PathBuf,
        #[serde(default)]
        offset: [f64; 3],
        #[serde(default = "unit_scale")]
        scale: f64,
    },
}

/// Serializable scene: a name, one space and a list of shapes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub name: String,
    pub space: SpaceId,
    pub shapes: Vec<ShapeSpec>,
}

impl SceneDescription {
    /// Parse a description from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Build the scene
    ///
    /// # Errors
    /// `SceneError::Draw` with `DrawError::InvalidFace` if a block face name
    /// is not recognised, `SceneError::Wireframe` if an OBJ file fails to load
    pub fn build(&self) -> std::result::Result<Scene, SceneError> {
        let space = self.space;
        let at = |c: &[f64; 3]| Vector3::from(*c).at(space);

        let mut scene = Scene::new(self.name.clone());
        for spec in &self.shapes {
            match spec {
                ShapeSpec::Point { at: p } => {
                    scene.add(PointShape::new(at(p)));
                }
                ShapeSpec::Line { from, to } => {
                    scene.add(Line::new(at(from), at(to)));
                }
                ShapeSpec::Polyline { points, closed } => {
                    let points: Vec<Point3> = points.iter().map(at).collect();
                    scene.add(Polyline::with_options(
                        points,
                        LineOptions { closed: *closed },
                        "Polyline".to_string(),
                    ));
                }
                ShapeSpec::Sphere { centre, radius } => {
                    scene.add(Sphere::new(at(centre), *radius));
                }
                ShapeSpec::Cuboid { from, to } => {
                    scene.add(Cuboid::new(at(from), at(to)));
                }
                ShapeSpec::Vector { origin, v } => {
                    scene.add(VectorShape::new(at(origin), Vector3::from(*v)));
                }
                ShapeSpec::BlockFace { block, face } => {
                    let face: BlockFace = face.parse()?;
                    scene.add(BlockFaceRect::new(at(block), face));
                }
                ShapeSpec::Octahedron { centre } => {
                    scene.add(Wireframe::octahedron(&at(centre)));
                }
                ShapeSpec::Tetrahedron { centre } => {
                    scene.add(Wireframe::tetrahedron(&at(centre)));
                }
                ShapeSpec::Obj {
                    path,
                    offset,
                    scale,
                } => {
                    let [x, y, z] = *offset;
                    let transform =
                        Translation3::new(x, y, z).to_homogeneous() * Matrix4::new_scaling(*scale);
                    let mesh = Wireframe::from_obj(path, space)?.transformed(&transform);
                    scene.add_boxed(Box::new(mesh));
                }
            }
        }

        Ok(scene)
    }
}
