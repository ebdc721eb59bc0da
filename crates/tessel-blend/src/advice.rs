use std::fmt;

use tessel_catalog::{CatalogError, TerrainCatalog, TerrainId, TextureRef, subtexture_index};
use tessel_coord::TileCoord;

use crate::masks::{adjacent_mask, diagonal_masks};
use crate::{NeighborTile, resolve_influences};

/// Mask applied to an overlay layer.
#[derive(Clone)]
pub struct MaskOverlay {
    pub blend_mode: i32,
    pub mask_id: u8,
    pub mask_texture: TextureRef,
}

/// One textured quad to draw at a tile. Base layers carry no mask.
#[derive(Clone)]
pub struct TileLayer {
    pub position: TileCoord,
    pub terrain_id: TerrainId,
    pub texture: TextureRef,
    pub subtexture: u32,
    pub mask: Option<MaskOverlay>,
}

impl fmt::Debug for TileLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("TileLayer");
        s.field("position", &self.position)
            .field("terrain_id", &self.terrain_id)
            .field("subtexture", &self.subtexture);
        if let Some(m) = &self.mask {
            s.field("blend_mode", &m.blend_mode).field("mask_id", &m.mask_id);
        }
        s.finish()
    }
}

/// Layers for one tile in paint order: base first, overlays after it in
/// ascending influence priority, edge mask before corner masks per terrain.
#[derive(Clone, Debug, Default)]
pub struct TileDrawData {
    pub position: TileCoord,
    pub layers: Vec<TileLayer>,
}

impl TileDrawData {
    pub fn empty(position: TileCoord) -> Self {
        Self {
            position,
            layers: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn base(&self) -> Option<&TileLayer> {
        self.layers.first()
    }

    pub fn overlays(&self) -> &[TileLayer] {
        self.layers.get(1..).unwrap_or(&[])
    }
}

/// Builds the layer list for a tile of terrain `base` at `position`.
///
/// `neighbors` is indexed by `Direction`. With `blending` off only the base
/// layer is produced. An empty `base` yields an empty list.
pub fn build_tile_layers(
    position: TileCoord,
    base: TerrainId,
    neighbors: &[NeighborTile; 8],
    catalog: &TerrainCatalog,
    blending: bool,
) -> Result<TileDrawData, CatalogError> {
    let mut tile = TileDrawData::empty(position);
    if base.is_empty() {
        return Ok(tile);
    }

    let base_priority = catalog.priority(base)?;
    tile.layers.push(layer(catalog, position, base, None)?);
    if !blending {
        return Ok(tile);
    }

    for influence in resolve_influences(base_priority, neighbors) {
        let neighbor = influence.terrain_id;
        let blend_mode = catalog.resolve_blend_mode(base, neighbor)?;
        let masks = adjacent_mask(influence.directions, position)
            .into_iter()
            .chain(diagonal_masks(influence.directions));
        for mask_id in masks {
            tile.layers
                .push(layer(catalog, position, neighbor, Some((blend_mode, mask_id)))?);
        }
    }
    Ok(tile)
}

fn layer(
    catalog: &TerrainCatalog,
    position: TileCoord,
    terrain_id: TerrainId,
    mask: Option<(i32, u8)>,
) -> Result<TileLayer, CatalogError> {
    let texture = catalog.texture(terrain_id)?.clone();
    let subtexture = subtexture_index(position, texture.atlas_dimensions());
    let mask = match mask {
        Some((blend_mode, mask_id)) => Some(MaskOverlay {
            blend_mode,
            mask_id,
            mask_texture: catalog.blending_mask(blend_mode)?.clone(),
        }),
        None => None,
    };
    Ok(TileLayer {
        position,
        terrain_id,
        texture,
        subtexture,
        mask,
    })
}
