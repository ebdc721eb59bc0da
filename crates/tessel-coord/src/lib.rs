//! Tile and chunk coordinates on the (ne, se) terrain lattice.
#![forbid(unsafe_code)]

mod chunk;
mod direction;
mod tile;

pub use chunk::{ChunkCoord, ChunkOffset};
pub use direction::Direction;
pub use tile::{TileCoord, TileDelta};

/// Edge length of a chunk in tiles. Chunks are square in (ne, se).
pub const CHUNK_SIZE: usize = 16;

/// Number of tiles stored by one chunk.
pub const TILES_PER_CHUNK: usize = CHUNK_SIZE * CHUNK_SIZE;
