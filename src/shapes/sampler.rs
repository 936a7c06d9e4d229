//! Sampling algorithms
//!
//! Stateless functions that turn shape parameters into an ordered stream
//! of points. Each one pushes straight into the consumer; nothing is
//! buffered or reordered.
//!
//! `step` is assumed to be `> 0`. It is validated once when a renderer
//! is configured (see `ShapeRenderer::set_step_size`), not here.
//!
//! All space checks happen before the first point is emitted, so a call
//! either fails without output or runs to completion.

use std::f64::consts::{PI, TAU};

use super::face::BlockFace;
use super::traits::PointConsumer;
use crate::error::Result;
use crate::geom::{max_corner, min_corner, Point3, SpaceId, Vector3};

/// Cuboid edges as pairs of vertex indices
///
/// Vertex `i` takes max x if bit 2 is set, max y for bit 1 and max z for
/// bit 0, so 0 is the min corner and 7 the max corner. Every vertex
/// appears in exactly three edges.
pub const CUBOID_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (3, 1),
    (3, 2),
    (3, 7),
    (5, 1),
    (5, 4),
    (5, 7),
    (6, 2),
    (6, 4),
    (6, 7),
];

/// Emit a single point
pub fn point(p: &Point3, out: &mut dyn PointConsumer) {
    out.consume(*p);
}

/// Walk from `a` towards `b`, one point every `step`
///
/// The first point is exactly `a`. `b` itself is never emitted; the last
/// point is the final multiple of `step` strictly short of it. A
/// zero-length segment emits `a` once.
pub fn line(a: &Point3, b: &Point3, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
    let delta = a.delta_to(b)?;
    let length_sq = delta.magnitude_squared();

    if length_sq == 0.0 {
        point(a, out);
        return Ok(());
    }

    let unit = delta.normalize()?;

    // Recomputed from the index so positions never accumulate error
    let mut i: u64 = 0;
    loop {
        let mag = i as f64 * step;
        if mag * mag >= length_sq {
            break;
        }
        out.consume(a.offset(unit * mag));
        i += 1;
    }

    Ok(())
}

/// Connect consecutive points with lines
///
/// `closed` only takes effect with more than two points; a closed pair
/// is drawn as a single open segment.
pub fn polyline(points: &[Point3], closed: bool, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
    let Some(first) = points.first() else {
        return Ok(());
    };

    for p in &points[1..] {
        first.ensure_same_space(p)?;
    }

    if points.len() == 1 {
        point(first, out);
        return Ok(());
    }

    for pair in points.windows(2) {
        line(&pair[0], &pair[1], step, out)?;
    }

    if closed && points.len() > 2 {
        line(&points[points.len() - 1], first, step, out)?;
    }

    Ok(())
}

/// Sample a sphere surface on a polar/azimuth grid
///
/// `step` is an angle in radians here. Both angles start at 0 and include
/// their upper bound (π for `phi`, 2π for `theta`) only when a step lands
/// on it exactly. Points bunch up near the poles.
pub fn sphere(centre: &Point3, radius: f64, step: f64, out: &mut dyn PointConsumer) {
    let mut i: u64 = 0;
    loop {
        let phi = i as f64 * step;
        if phi > PI {
            break;
        }

        let z = radius * phi.cos();
        let ring = radius * phi.sin();

        let mut j: u64 = 0;
        loop {
            let theta = j as f64 * step;
            if theta > TAU {
                break;
            }
            let x = ring * theta.cos();
            let y = ring * theta.sin();
            out.consume(centre.offset_xyz(x, y, z));
            j += 1;
        }

        i += 1;
    }
}

/// The eight vertices of the box spanned by `a` and `b`
///
/// Indexed as described on `CUBOID_EDGES`.
pub fn cuboid_vertices(a: &Point3, b: &Point3) -> Result<[Point3; 8]> {
    let min = min_corner(a, b)?;
    let max = max_corner(a, b)?;

    Ok(std::array::from_fn(|i| {
        Point3::xyz(
            a.space,
            if i & 0b100 != 0 { max.x() } else { min.x() },
            if i & 0b010 != 0 { max.y() } else { min.y() },
            if i & 0b001 != 0 { max.z() } else { min.z() },
        )
    }))
}

/// Draw the 12-edge wireframe of the box spanned by two corners
///
/// Corner order does not matter.
pub fn cuboid(a: &Point3, b: &Point3, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
    let vertices = cuboid_vertices(a, b)?;

    for &(from, to) in &CUBOID_EDGES {
        line(&vertices[from], &vertices[to], step, out)?;
    }

    Ok(())
}

/// Draw `v` as a segment anchored at `origin`
pub fn vector(origin: &Point3, v: Vector3, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
    line(origin, &origin.offset(v), step, out)
}

/// Outline one face of the unit block whose minimum corner is `block`
pub fn block_face(block: &Point3, face: BlockFace, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
    let (from, to) = face.corners(block);
    cuboid(&from, &to, step, out)
}

/// Draw every edge of an indexed wireframe
///
/// Edges that reference a missing vertex are skipped.
pub fn wireframe(
    vertices: &[Vector3],
    edges: &[(usize, usize)],
    space: SpaceId,
    step: f64,
    out: &mut dyn PointConsumer,
) -> Result<()> {
    for &(i1, i2) in edges {
        match (vertices.get(i1), vertices.get(i2)) {
            (Some(&v1), Some(&v2)) => {
                line(&v1.at(space), &v2.at(space), step, out)?;
            }
            _ => {
                log::warn!(
                    "Skipping edge ({}, {}): wireframe has {} vertices",
                    i1,
                    i2,
                    vertices.len()
                );
            }
        }
    }

    Ok(())
}
