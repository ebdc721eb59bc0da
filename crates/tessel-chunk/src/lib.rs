//! Chunked tile storage with neighbor links between chunks.
#![forbid(unsafe_code)]

mod chunk;
mod store;

pub use chunk::{ObjectId, TerrainChunk, TileContent};
pub use store::{ChunkId, ChunkStore, ReleasedChunks};
