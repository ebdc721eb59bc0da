//! Blend overlay selection: which neighboring terrains draw over a tile and
//! with which pre-rendered mask shapes.
#![forbid(unsafe_code)]

mod advice;
mod influence;
pub mod masks;

pub use advice::{MaskOverlay, TileDrawData, TileLayer, build_tile_layers};
pub use influence::{DirectionSet, Influence, NeighborTile, resolve_influences};
