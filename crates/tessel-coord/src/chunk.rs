use serde::{Deserialize, Serialize};

use crate::{CHUNK_SIZE, Direction, TileCoord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub ne: i32,
    pub se: i32,
}

impl ChunkCoord {
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
        let d = dir.offset();
        self.offset(d.ne, d.se)
    }

    /// Neighbor in `dir`, or `None` past the edge of the `i32` lattice.
    #[inline]
    pub fn checked_neighbor(self, dir: Direction) -> Option<Self> {
        let d = dir.offset();
        Some(Self::new(self.ne.checked_add(d.ne)?, self.se.checked_add(d.se)?))
    }

    /// First tile (lowest ne and se) covered by this chunk.
    #[inline]
    pub fn tile_origin(self) -> TileCoord {
        let size = CHUNK_SIZE as i32;
        TileCoord::new(self.ne * size, self.se * size)
    }

    #[inline]
    pub fn tile(self, offset: ChunkOffset) -> TileCoord {
        self.tile_origin()
            .offset(offset.ne as i32, offset.se as i32)
    }
}

impl From<(i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Tile position relative to the chunk origin, both axes in `0..CHUNK_SIZE`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkOffset {
    pub ne: usize,
    pub se: usize,
}

impl ChunkOffset {
    #[inline]
    pub const fn new(ne: usize, se: usize) -> Self {
        Self { ne, se }
    }

    /// Index into a dense `CHUNK_SIZE * CHUNK_SIZE` tile array.
    #[inline]
    pub const fn index(self) -> usize {
        self.ne * CHUNK_SIZE + self.se
    }
}
