//! Terrain facade: tile access over chunks, bounds policy, and per-frame
//! draw advice for the visible area.
#![forbid(unsafe_code)]

mod advice;
pub mod config;
mod error;
mod terrain;
mod view;

pub use advice::TerrainRenderData;
pub use config::{TerrainConfig, TerrainSettings};
pub use error::TerrainError;
pub use terrain::{Terrain, TileState};
pub use view::{CoordinateMapper, ScreenCorners, WindowSize};

pub use tessel_blend::{MaskOverlay, TileDrawData, TileLayer};
pub use tessel_catalog::{TerrainCatalog, TerrainId};
pub use tessel_chunk::{ObjectId, ReleasedChunks, TerrainChunk, TileContent};
pub use tessel_coord::{ChunkCoord, TileCoord, TileDelta};
