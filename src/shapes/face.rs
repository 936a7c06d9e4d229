//! Block faces - outlines of one side of a unit block
//!
//! A block is the unit cube whose minimum corner sits at the block
//! position. Directions follow the usual voxel-world convention:
//! north is -Z, south is +Z, east is +X and west is -X.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::sampler;
use super::traits::{PointConsumer, Shape};
use crate::error::{DrawError, Result};
use crate::geom::{Point3, SpaceId};

/// One of the six axis-aligned faces of a block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BlockFace {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl BlockFace {
    pub fn all() -> &'static [BlockFace] {
        &[
            BlockFace::Up,
            BlockFace::Down,
            BlockFace::North,
            BlockFace::South,
            BlockFace::East,
            BlockFace::West,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockFace::Up => "up",
            BlockFace::Down => "down",
            BlockFace::North => "north",
            BlockFace::South => "south",
            BlockFace::East => "east",
            BlockFace::West => "west",
        }
    }

    /// Offsets of the face's two opposite corners from the block's min corner
    fn corner_offsets(&self) -> ([f64; 3], [f64; 3]) {
        match self {
            BlockFace::Up => ([0.0, 1.0, 0.0], [1.0, 1.0, 1.0]),
            BlockFace::Down => ([0.0, 0.0, 0.0], [1.0, 0.0, 1.0]),
            BlockFace::North => ([0.0, 0.0, 0.0], [1.0, 1.0, 0.0]),
            BlockFace::South => ([0.0, 0.0, 1.0], [1.0, 1.0, 1.0]),
            BlockFace::East => ([1.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
            BlockFace::West => ([0.0, 0.0, 0.0], [0.0, 1.0, 1.0]),
        }
    }

    /// Opposite corners of this face for the block at `block`
    ///
    /// One axis has zero extent, so the cuboid they span is flat.
    pub fn corners(&self, block: &Point3) -> (Point3, Point3) {
        let (from, to) = self.corner_offsets();
        (block.offset(from.into()), block.offset(to.into()))
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlockFace {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        BlockFace::all()
            .iter()
            .copied()
            .find(|face| face.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DrawError::InvalidFace(s.to_string()))
    }
}

impl TryFrom<String> for BlockFace {
    type Error = DrawError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BlockFace> for String {
    fn from(face: BlockFace) -> Self {
        face.name().to_string()
    }
}

/// The outline of one face of a block
#[derive(Clone, Debug)]
pub struct BlockFaceRect {
    /// Minimum corner of the block
    pub block: Point3,
    pub face: BlockFace,
}

impl BlockFaceRect {
    pub fn new(block: Point3, face: BlockFace) -> Self {
        Self { block, face }
    }
}

impl Shape for BlockFaceRect {
    fn sample(&self, step: f64, out: &mut dyn PointConsumer) -> Result<()> {
        sampler::block_face(&self.block, self.face, step, out)
    }

    fn name(&self) -> &str {
        "BlockFace"
    }

    fn space(&self) -> SpaceId {
        self.block.space
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::sample_to_vec;

    #[test]
    fn test_up_face_corners() {
        let block = Point3::xyz(SpaceId(0), 0.0, 0.0, 0.0);
        let (a, b) = BlockFace::Up.corners(&block);
        assert_eq!(a, Point3::xyz(SpaceId(0), 0.0, 1.0, 0.0));
        assert_eq!(b, Point3::xyz(SpaceId(0), 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_faces_are_flat() {
        let block = Point3::xyz(SpaceId(0), 4.0, 70.0, -3.0);
        for face in BlockFace::all() {
            let (a, b) = face.corners(&block);
            let d = b.pos - a.pos;
            let flat_axes = [d.x, d.y, d.z].iter().filter(|&&c| c == 0.0).count();
            assert_eq!(flat_axes, 1, "{} should be flat on one axis", face);
        }
    }

    #[test]
    fn test_face_points_stay_on_plane() {
        let block = Point3::xyz(SpaceId(0), 2.0, 5.0, 8.0);
        let rect = BlockFaceRect::new(block, BlockFace::East);
        let points = sample_to_vec(&rect, 0.25).unwrap();

        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.x() == 3.0));
        assert!(points.iter().all(|p| (5.0..=6.0).contains(&p.y())));
        assert!(points.iter().all(|p| (8.0..=9.0).contains(&p.z())));
    }

    #[test]
    fn test_parse_face() {
        assert_eq!("up".parse::<BlockFace>(), Ok(BlockFace::Up));
        assert_eq!("WEST".parse::<BlockFace>(), Ok(BlockFace::West));
        assert_eq!(
            "north_east".parse::<BlockFace>(),
            Err(DrawError::InvalidFace("north_east".to_string()))
        );
        assert!("self".parse::<BlockFace>().is_err());
    }

    #[test]
    fn test_face_serde() {
        let face: BlockFace = serde_json::from_str("\"south\"").unwrap();
        assert_eq!(face, BlockFace::South);
        assert_eq!(serde_json::to_string(&BlockFace::Down).unwrap(), "\"down\"");
        assert!(serde_json::from_str::<BlockFace>("\"sideways\"").is_err());
    }
}
