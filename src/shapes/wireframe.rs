//! Wireframes - indexed vertex/edge meshes drawn as sampled lines
//!
//! This module handles:
//! - Built-in solids (box, tetrahedron, octahedron)
//! - Loading edge sets from OBJ files
//! - Applying nalgebra transforms before sampling
//!
//! Vertices are stored without a space; the wireframe as a whole is
//! placed in one coordinate space.

use std::path::Path as FilePath;

use nalgebra::Matrix4;
use thiserror::Error;

use super::sampler::{self, CUBOID_EDGES};
use super::traits::{PointConsumer, Shape};
use crate::error::Result;
use crate::geom::{Point3, SpaceId, Vector3};

/// Errors that can occur while loading a wireframe
#[derive(Error, Debug)]
pub enum WireframeError {
    #[error("Failed to parse OBJ file: {0}")]
    ParseError(String),

    #[error("No geometry found in file")]
    NoGeometry,

    #[error("Mesh has no edges")]
    NoEdges,
}

/// A set of vertices connected by straight edges
#[derive(Clone, Debug)]
pub struct Wireframe {
    /// Vertex positions
    pub vertices: Vec<Vector3>,
    /// Edges as pairs of vertex indices
    pub edges: Vec<(usize, usize)>,
    /// Space every vertex is placed in
    pub space: SpaceId,
    /// Name of the wireframe
    pub name: String,
}

impl Wireframe {
    /// Create a wireframe from vertices and edges
    pub fn from_data(
        vertices: Vec<Vector3>,
        edges: Vec<(usize, usize)>,
        space: SpaceId,
        name: impl Into<String>,
    ) -> Self {
        Self {
            vertices,
            edges,
            space,
            name: name.into(),
        }
    }

    /// Load the edges of every face in an OBJ file
    pub fn from_obj(path: impl AsRef<FilePath>, space: SpaceId) -> std::result::Result<Self, WireframeError> {
        let path = path.as_ref();
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: false,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|e| WireframeError::ParseError(e.to_string()))?;

        if models.is_empty() {
            return Err(WireframeError::NoGeometry);
        }

        let mut vertices = Vec::new();
        let mut edges = Vec::new();

        for model in &models {
            let mesh = &model.mesh;
            let vertex_offset = vertices.len();

            for xyz in mesh.positions.chunks_exact(3) {
                vertices.push(Vector3::new(xyz[0] as f64, xyz[1] as f64, xyz[2] as f64));
            }

            // tobj leaves face_arities empty when every face is a triangle
            let arities: Vec<usize> = if mesh.face_arities.is_empty() {
                vec![3; mesh.indices.len() / 3]
            } else {
                mesh.face_arities.iter().map(|&a| a as usize).collect()
            };

            let mut idx = 0;
            for arity in arities {
                for i in 0..arity {
                    let v1 = mesh.indices[idx + i] as usize + vertex_offset;
                    let v2 = mesh.indices[idx + (i + 1) % arity] as usize + vertex_offset;
                    if v1 != v2 {
                        edges.push((v1.min(v2), v1.max(v2)));
                    }
                }
                idx += arity;
            }
        }

        // Shared edges between faces are drawn once
        edges.sort_unstable();
        edges.dedup();

        if edges.is_empty() {
            return Err(WireframeError::NoEdges);
        }

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("mesh")
            .to_string();

        log::info!(
            "Loaded wireframe '{}' ({} vertices, {} edges)",
            name,
            vertices.len(),
            edges.len()
        );

        Ok(Self::from_data(vertices, edges, space, name))
    }

    /// Box spanned by two corners, same topology as the cuboid sampler
    pub fn cuboid(a: &Point3, b: &Point3) -> Result<Self> {
        let vertices = sampler::cuboid_vertices(a, b)?
            .iter()
            .map(Point3::to_vector)
            .collect();

        Ok(Self::from_data(vertices, CUBOID_EDGES.to_vec(), a.space, "Cuboid"))
    }

    /// Regular tetrahedron inscribed in the unit sphere around `centre`
    pub fn tetrahedron(centre: &Point3) -> Self {
        let a = 1.0 / 3.0_f64.sqrt();
        let vertices = vec![
            Vector3::new(a, a, a),
            Vector3::new(a, -a, -a),
            Vector3::new(-a, a, -a),
            Vector3::new(-a, -a, a),
        ]
        .into_iter()
        .map(|v| centre.pos + v)
        .collect();

        let edges = vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        Self::from_data(vertices, edges, centre.space, "Tetrahedron")
    }

    /// Octahedron with its six vertices on the unit axes around `centre`
    pub fn octahedron(centre: &Point3) -> Self {
        let vertices = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, -1.0),
        ]
        .into_iter()
        .map(|v| centre.pos + v)
        .collect();

        let edges = vec![
            (0, 2),
            (0, 3),
            (0, 4),
            (0, 5),
            (1, 2),
            (1, 3),
            (1, 4),
            (1, 5),
            (2, 4),
            (2, 5),
            (3, 4),
            (3, 5),
        ];

        Self::from_data(vertices, edges, centre.space, "Octahedron")
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounds(&self) -> (Vector3, Vector3) {
        let Some(&first) = self.vertices.first() else {
            return (Vector3::ZERO, Vector3::ZERO);
        };

        self.vertices.iter().fold((first, first), |(min, max), v| {
            (
                Vector3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z)),
                Vector3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z)),
            )
        })
    }

    /// Copy with every vertex mapped through a homogeneous transform
    pub fn transformed(&self, transform: &Matrix4<f64>) -> Self {
        let vertices = self
            .vertices
            .iter()
            .map(|&v| Vector3::from(transform.transform_point(&nalgebra::Point3::from(v))))
            .collect();

        Self {
            vertices,
            edges: self.edges.clone(),
            space: self.space,
            name: self.name.clone(),
        }
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Shape for Wireframe {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::wireframe(&self.vertices, &self.edges, self.space, step, out)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn space(&self) -> SpaceId {
        self.space
    }

    fn is_closed(&self) -> bool {
        true
    }
}
