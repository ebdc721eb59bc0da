use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::{CHUNK_SIZE, ChunkCoord, ChunkOffset, Direction};

/// Global position of a single tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct TileCoord {
    pub ne: i32,
    pub se: i32,
}

/// Difference between two tile positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileDelta {
    pub ne: i32,
    pub se: i32,
}

impl TileDelta {
    #[inline]
    pub const fn new(ne: i32, se: i32) -> Self {
        Self { ne, se }
    }
}

impl TileCoord {
    #[inline]
    pub const fn new(ne: i32, se: i32) -> Self {
        Self { ne, se }
    }

    #[inline]
    pub fn offset(self, dne: i32, dse: i32) -> Self {
        Self {
            ne: self.ne + dne,
            se: self.se + dse,
        }
    }

    #[inline]
    pub fn neighbor(self, dir: Direction) -> Self {
        self + dir.offset()
    }

    /// Neighbor in `dir`, or `None` past the edge of the `i32` lattice.
    #[inline]
    pub fn checked_neighbor(self, dir: Direction) -> Option<Self> {
        let d = dir.offset();
        Some(Self::new(self.ne.checked_add(d.ne)?, self.se.checked_add(d.se)?))
    }

    /// Chunk that owns this tile. Floors towards negative infinity, so tile
    /// `-1` lives in chunk `-1`, not chunk `0`.
    #[inline]
    pub fn to_chunk(self) -> ChunkCoord {
        let size = CHUNK_SIZE as i32;
        ChunkCoord::new(self.ne.div_euclid(size), self.se.div_euclid(size))
    }

    /// Position of this tile inside its owning chunk.
    #[inline]
    pub fn chunk_offset(self) -> ChunkOffset {
        let size = CHUNK_SIZE as i32;
        ChunkOffset::new(
            self.ne.rem_euclid(size) as usize,
            self.se.rem_euclid(size) as usize,
        )
    }
}

impl Add<TileDelta> for TileCoord {
    type Output = TileCoord;
    #[inline]
    fn add(self, rhs: TileDelta) -> TileCoord {
        TileCoord::new(self.ne + rhs.ne, self.se + rhs.se)
    }
}

impl Sub for TileCoord {
    type Output = TileDelta;
    #[inline]
    fn sub(self, rhs: TileCoord) -> TileDelta {
        TileDelta::new(self.ne - rhs.ne, self.se - rhs.se)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl From<TileCoord> for (i32, i32) {
    fn from(value: TileCoord) -> Self {
        (value.ne, value.se)
    }
}
