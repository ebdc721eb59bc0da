use std::error::Error;
use std::sync::Arc;

use proptest::prelude::*;
use tessel_blend::{NeighborTile, TileDrawData, build_tile_layers};
use tessel_catalog::config::{BlendModeDef, TerrainTypeDef};
use tessel_catalog::{AssetProvider, BlendFlag, TerrainTexture, TextureRef};
use tessel_coord::Direction;
use tessel_terrain::{
    ScreenCorners, Terrain, TerrainCatalog, TerrainId, TerrainSettings, TileCoord, TileDelta,
};

struct Atlas;

impl TerrainTexture for Atlas {
    fn atlas_dimensions(&self) -> u32 {
        3
    }

    fn draw(&self, _: TileCoord, _: BlendFlag, _: u32, _: Option<&dyn TerrainTexture>, _: Option<u8>) {}
}

struct Assets;

impl AssetProvider for Assets {
    fn texture(&mut self, _path: &str) -> Result<TextureRef, Box<dyn Error>> {
        Ok(Arc::new(Atlas))
    }
}

fn terrain() -> Terrain {
    let types = [(0, 3, 0), (1, 1, 1), (2, 4, 2), (3, 2, 1)].map(
        |(id, priority, blend_mode)| TerrainTypeDef {
            id: TerrainId(id),
            priority,
            blend_mode,
            texture: id,
        },
    );
    let modes = [0, 1, 2].map(|id| BlendModeDef { id, mask: id });
    let catalog = TerrainCatalog::new(&types, &modes, &mut Assets).unwrap();
    Terrain::new(catalog, TerrainSettings::default())
}

// Tiles around the corner shared by chunks (-1,-1), (-1,0), (0,-1), (0,0).
fn edits() -> impl Strategy<Value = Vec<((i32, i32), i32)>> {
    prop::collection::vec(((-3i32..3, -3i32..3), -1i32..4), 1..60)
}

fn summary(tile: &TileDrawData) -> Vec<(TerrainId, u32, Option<u8>)> {
    tile.layers
        .iter()
        .map(|l| (l.terrain_id, l.subtexture, l.mask.as_ref().map(|m| m.mask_id)))
        .collect()
}

proptest! {
    // Neighbor reads through chunk links agree with plain tile lookups
    #[test]
    fn tile_advice_matches_direct_lookup(seq in edits()) {
        let mut t = terrain();
        for ((ne, se), id) in &seq {
            t.set_terrain(TileCoord::new(*ne, *se), TerrainId(*id)).unwrap();
        }
        for ne in -3..3 {
            for se in -3..3 {
                let pos = TileCoord::new(ne, se);
                let mut neighbors = [NeighborTile::Missing; 8];
                for dir in Direction::ALL {
                    if let Some(id) = t.terrain_at(pos.neighbor(dir)).filter(|id| !id.is_empty()) {
                        neighbors[dir.index()] = NeighborTile::Existing {
                            terrain_id: id,
                            priority: t.catalog().priority(id).unwrap(),
                        };
                    }
                }
                let base = t.terrain_at(pos).unwrap_or(TerrainId::EMPTY);
                let expect = build_tile_layers(pos, base, &neighbors, t.catalog(), true).unwrap();
                let got = t.create_tile_advice(pos).unwrap();
                prop_assert_eq!(summary(&got), summary(&expect));
            }
        }
    }

    // Overlays never come from a terrain with lower or equal priority
    #[test]
    fn overlays_outrank_the_base(data in prop::collection::vec(-1i32..4, 36)) {
        let mut t = terrain();
        t.fill(&data, TileDelta::new(6, 6)).unwrap();
        let corners = ScreenCorners {
            top_left: TileCoord::new(0, 0),
            top_right: TileCoord::new(5, 0),
            bottom_right: TileCoord::new(5, 5),
            bottom_left: TileCoord::new(0, 5),
        };
        let frame = t.create_draw_advice(corners).unwrap();
        prop_assert_eq!(frame.tiles.len(), 36);
        for (tile, raw) in frame.tiles.iter().zip(&data) {
            prop_assert_eq!(tile.is_empty(), *raw < 0);
            let Some(base) = tile.base() else { continue };
            let base_priority = t.catalog().priority(base.terrain_id).unwrap();
            let mut last = base_priority;
            for layer in tile.overlays() {
                let p = t.catalog().priority(layer.terrain_id).unwrap();
                prop_assert!(p > base_priority);
                prop_assert!(p >= last);
                last = p;
            }
        }
    }
}
