//! Terrain type catalog: priorities, blend modes, and texture handles.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod texture;
pub mod types;

pub use catalog::{TerrainCatalog, subtexture_index};
pub use config::{BlendModeDef, CatalogConfig, TerrainTypeDef};
pub use error::CatalogError;
pub use texture::{AssetProvider, BlendFlag, TerrainTexture, TextureRef};
pub use types::TerrainId;
