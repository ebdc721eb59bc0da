use hashbrown::HashSet;
use tessel_blend::{TileDrawData, build_tile_layers};
use tessel_catalog::BlendFlag;
use tessel_chunk::ObjectId;
use tessel_coord::TileCoord;

use crate::{CoordinateMapper, ScreenCorners, Terrain, TerrainError, WindowSize};

const MAX_RESERVED_TILES: u64 = 1 << 16;

/// Everything to draw for one frame.
#[derive(Clone, Debug, Default)]
pub struct TerrainRenderData {
    /// One entry per swept tile, row by row in `ne`, `se` fastest.
    pub tiles: Vec<TileDrawData>,
    /// Objects standing on swept tiles, each once, in first-seen order.
    pub objects: Vec<ObjectId>,
}

impl Terrain {
    /// Layers to draw at `position`. Missing chunks and empty tiles give an
    /// empty list. Never creates chunks.
    pub fn create_tile_advice(&self, position: TileCoord) -> Result<TileDrawData, TerrainError> {
        let Some(home) = self.chunks.chunk_id(position.to_chunk()) else {
            return Ok(TileDrawData::empty(position));
        };
        let Some(base) = self.get_data(position).map(|c| c.terrain_id) else {
            return Ok(TileDrawData::empty(position));
        };
        if base.is_empty() {
            return Ok(TileDrawData::empty(position));
        }
        let neighbors = self.neighbor_tiles(home, position)?;
        Ok(build_tile_layers(
            position,
            base,
            &neighbors,
            &self.catalog,
            self.settings.blending,
        )?)
    }

    /// Sweeps the tile rhombus enclosing `corners` and collects tile layers
    /// and the objects standing on those tiles.
    pub fn create_draw_advice(
        &self,
        corners: ScreenCorners,
    ) -> Result<TerrainRenderData, TerrainError> {
        let (min, max) = corners.bounding_rhombus();
        let span_ne = (i64::from(max.ne) - i64::from(min.ne) + 1).max(0) as u64;
        let span_se = (i64::from(max.se) - i64::from(min.se) + 1).max(0) as u64;
        let area = span_ne.saturating_mul(span_se);
        log::trace!(
            "draw advice sweep ({}, {})..=({}, {}): {} tiles",
            min.ne,
            min.se,
            max.ne,
            max.se,
            area
        );

        let mut data = TerrainRenderData {
            // Reserve hint only; larger sweeps grow the Vec as they go.
            tiles: Vec::with_capacity(area.min(MAX_RESERVED_TILES) as usize),
            objects: Vec::new(),
        };
        let mut seen: HashSet<ObjectId> = HashSet::new();
        for ne in min.ne..=max.ne {
            for se in min.se..=max.se {
                let pos = TileCoord::new(ne, se);
                data.tiles.push(self.create_tile_advice(pos)?);
                if let Some(cell) = self.get_data(pos) {
                    for obj in &cell.objects {
                        if seen.insert(*obj) {
                            data.objects.push(*obj);
                        }
                    }
                }
            }
        }
        Ok(data)
    }

    /// Projects the window corners, computes the draw advice and submits
    /// every tile layer to its texture. Objects are left to the caller.
    pub fn draw(
        &self,
        mapper: &dyn CoordinateMapper,
        window: WindowSize,
    ) -> Result<TerrainRenderData, TerrainError> {
        let data = self.create_draw_advice(mapper.screen_corners(window))?;
        for tile in &data.tiles {
            for layer in &tile.layers {
                match &layer.mask {
                    Some(m) => layer.texture.draw(
                        layer.position,
                        BlendFlag::AlphaMasked,
                        layer.subtexture,
                        Some(&*m.mask_texture),
                        Some(m.mask_id),
                    ),
                    None => layer.texture.draw(
                        layer.position,
                        BlendFlag::Opaque,
                        layer.subtexture,
                        None,
                        None,
                    ),
                }
            }
        }
        Ok(data)
    }
}
