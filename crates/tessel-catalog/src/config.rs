use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::TerrainId;

/// One terrain type row.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct TerrainTypeDef {
    pub id: TerrainId,
    pub priority: i32,
    pub blend_mode: i32,
    // Base texture number; resolved through `terrain_texture_path`.
    pub texture: i32,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct BlendModeDef {
    pub id: i32,
    // Mask texture number; resolved through `blend_mask_path`.
    pub mask: i32,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub terrain: Vec<TerrainTypeDef>,
    #[serde(default)]
    pub blend_mode: Vec<BlendModeDef>,
}

impl CatalogConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
