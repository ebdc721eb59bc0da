use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tessel_catalog::CatalogConfig;
use tessel_coord::TileCoord;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TerrainSettings {
    /// Unbounded terrain accepts every tile position.
    pub infinite: bool,
    /// Inclusive lower tile bound for finite terrain.
    pub limit_negative: TileCoord,
    /// Inclusive upper tile bound for finite terrain.
    pub limit_positive: TileCoord,
    pub blending: bool,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            infinite: true,
            limit_negative: TileCoord::new(0, 0),
            limit_positive: TileCoord::new(0, 0),
            blending: true,
        }
    }
}

impl TerrainSettings {
    pub fn finite(limit_negative: TileCoord, limit_positive: TileCoord) -> Self {
        Self {
            infinite: false,
            limit_negative,
            limit_positive,
            ..Self::default()
        }
    }
}

/// Everything needed to build a `Terrain`: `[settings]` plus the catalog
/// tables (`[[terrain]]`, `[[blend_mode]]`) at the top level.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TerrainConfig {
    #[serde(default)]
    pub settings: TerrainSettings,
    #[serde(flatten)]
    pub catalog: CatalogConfig,
}

impl TerrainConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}
