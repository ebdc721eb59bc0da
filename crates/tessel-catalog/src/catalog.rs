use tessel_coord::TileCoord;

use crate::config::{BlendModeDef, CatalogConfig, TerrainTypeDef};
use crate::texture::{blend_mask_path, terrain_texture_path};
use crate::{AssetProvider, CatalogError, TerrainId, TextureRef};

/// Per-terrain render metadata, fixed after construction.
///
/// Every lookup validates its id first; an id past the configured count is an
/// error rather than a clamp, so a bad map can never render the wrong texture.
pub struct TerrainCatalog {
    priorities: Vec<i32>,
    blend_modes: Vec<i32>,
    textures: Vec<TextureRef>,
    masks: Vec<TextureRef>,
}

impl TerrainCatalog {
    pub fn new(
        terrain: &[TerrainTypeDef],
        blending: &[BlendModeDef],
        assets: &mut dyn AssetProvider,
    ) -> Result<Self, CatalogError> {
        let terrain_count = terrain.len();
        let blend_count = blending.len();
        log::debug!(
            "terrain catalog: tiletypes={}, blendmodes={}",
            terrain_count,
            blend_count
        );

        let mut seen = vec![false; terrain_count];
        for def in terrain {
            let idx = checked_index(def.id.0, terrain_count).ok_or(
                CatalogError::TerrainIdOutOfRange {
                    id: def.id,
                    count: terrain_count,
                },
            )?;
            if std::mem::replace(&mut seen[idx], true) {
                return Err(CatalogError::DuplicateTerrainId(def.id));
            }
            if checked_index(def.blend_mode, blend_count).is_none() {
                return Err(CatalogError::BlendModeOutOfRange {
                    id: def.blend_mode,
                    count: blend_count,
                });
            }
        }
        let mut seen = vec![false; blend_count];
        for def in blending {
            let idx = checked_index(def.id, blend_count).ok_or(
                CatalogError::BlendModeOutOfRange {
                    id: def.id,
                    count: blend_count,
                },
            )?;
            if std::mem::replace(&mut seen[idx], true) {
                return Err(CatalogError::DuplicateBlendMode(def.id));
            }
        }

        // Ids are now known to be a permutation of 0..count.
        let mut terrain: Vec<&TerrainTypeDef> = terrain.iter().collect();
        terrain.sort_by_key(|d| d.id);
        let mut blending: Vec<&BlendModeDef> = blending.iter().collect();
        blending.sort_by_key(|d| d.id);

        let mut textures = Vec::with_capacity(terrain_count);
        for def in &terrain {
            textures.push(load(assets, terrain_texture_path(def.texture))?);
        }
        let mut masks = Vec::with_capacity(blend_count);
        for def in &blending {
            masks.push(load(assets, blend_mask_path(def.mask))?);
        }

        Ok(Self {
            priorities: terrain.iter().map(|d| d.priority).collect(),
            blend_modes: terrain.iter().map(|d| d.blend_mode).collect(),
            textures,
            masks,
        })
    }

    pub fn from_config(
        cfg: &CatalogConfig,
        assets: &mut dyn AssetProvider,
    ) -> Result<Self, CatalogError> {
        Self::new(&cfg.terrain, &cfg.blend_mode, assets)
    }

    #[inline]
    pub fn terrain_count(&self) -> usize {
        self.priorities.len()
    }

    #[inline]
    pub fn blend_mode_count(&self) -> usize {
        self.masks.len()
    }

    pub fn validate_terrain(&self, id: TerrainId) -> Result<usize, CatalogError> {
        checked_index(id.0, self.terrain_count()).ok_or(CatalogError::TerrainIdOutOfRange {
            id,
            count: self.terrain_count(),
        })
    }

    pub fn validate_mask(&self, blend_mode: i32) -> Result<usize, CatalogError> {
        checked_index(blend_mode, self.blend_mode_count()).ok_or(
            CatalogError::BlendModeOutOfRange {
                id: blend_mode,
                count: self.blend_mode_count(),
            },
        )
    }

    pub fn priority(&self, id: TerrainId) -> Result<i32, CatalogError> {
        Ok(self.priorities[self.validate_terrain(id)?])
    }

    pub fn blend_mode(&self, id: TerrainId) -> Result<i32, CatalogError> {
        Ok(self.blend_modes[self.validate_terrain(id)?])
    }

    pub fn texture(&self, id: TerrainId) -> Result<&TextureRef, CatalogError> {
        Ok(&self.textures[self.validate_terrain(id)?])
    }

    pub fn blending_mask(&self, blend_mode: i32) -> Result<&TextureRef, CatalogError> {
        Ok(&self.masks[self.validate_mask(blend_mode)?])
    }

    /// Blend mode used where `neighbor` draws over `base`.
    ///
    /// Empirical rule: the larger of the two blend mode values wins. The mode
    /// numbers carry no documented meaning beyond this ordering.
    pub fn resolve_blend_mode(
        &self,
        base: TerrainId,
        neighbor: TerrainId,
    ) -> Result<i32, CatalogError> {
        let base_mode = self.blend_mode(base)?;
        let neighbor_mode = self.blend_mode(neighbor)?;
        Ok(base_mode.max(neighbor_mode))
    }
}

/// Which sub-image of a square atlas to use at `pos`.
///
/// Repeats every `atlas_size` tiles on both axes and stays within
/// `0..atlas_size²` for negative coordinates as well.
pub fn subtexture_index(pos: TileCoord, atlas_size: u32) -> u32 {
    if atlas_size == 0 {
        return 0;
    }
    let size = i64::from(atlas_size);
    let se = i64::from(pos.se).rem_euclid(size);
    let ne = i64::from(pos.ne).rem_euclid(size);
    (se * size + ne) as u32
}

#[inline]
fn checked_index(id: i32, count: usize) -> Option<usize> {
    usize::try_from(id).ok().filter(|&i| i < count)
}

fn load(assets: &mut dyn AssetProvider, path: String) -> Result<TextureRef, CatalogError> {
    assets.texture(&path).map_err(|e| CatalogError::Asset {
        message: e.to_string(),
        path,
    })
}
