use tessel_blend::NeighborTile;
use tessel_catalog::{AssetProvider, CatalogError, TerrainCatalog, TerrainId};
use tessel_chunk::{
    ChunkId, ChunkStore, ObjectId, ReleasedChunks, TerrainChunk, TileContent,
};
use tessel_coord::{ChunkCoord, Direction, TileCoord, TileDelta};

use crate::{TerrainConfig, TerrainError, TerrainSettings};

/// Result of checking a tile position against the terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    /// Outside the limits of a finite terrain.
    Invalid,
    /// Allowed, but no chunk holds it yet.
    Creatable,
    Existing,
}

/// An open grid of terrain tiles stored in chunks.
///
/// Single-threaded: edits may touch several chunks when neighbor links are
/// updated, so sharing a `Terrain` across threads needs a lock around the
/// whole value.
pub struct Terrain {
    pub(crate) catalog: TerrainCatalog,
    pub(crate) chunks: ChunkStore,
    pub(crate) settings: TerrainSettings,
}

impl Terrain {
    pub fn new(catalog: TerrainCatalog, settings: TerrainSettings) -> Self {
        log::debug!(
            "terrain created: infinite={} blending={}",
            settings.infinite,
            settings.blending
        );
        Self {
            catalog,
            chunks: ChunkStore::new(),
            settings,
        }
    }

    pub fn from_config(
        cfg: &TerrainConfig,
        assets: &mut dyn AssetProvider,
    ) -> Result<Self, TerrainError> {
        let catalog = TerrainCatalog::from_config(&cfg.catalog, assets)?;
        Ok(Self::new(catalog, cfg.settings))
    }

    #[inline]
    pub fn catalog(&self) -> &TerrainCatalog {
        &self.catalog
    }

    #[inline]
    pub fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    #[inline]
    pub fn blending_enabled(&self) -> bool {
        self.settings.blending
    }

    pub fn set_blending(&mut self, enabled: bool) {
        self.settings.blending = enabled;
    }

    /// See `ChunkStore::attach_chunk`.
    pub fn attach_chunk(
        &mut self,
        chunk: TerrainChunk,
        position: ChunkCoord,
        manually_created: bool,
    ) -> Option<TerrainChunk> {
        self.chunks.attach_chunk(chunk, position, manually_created)
    }

    pub fn get_chunk(&self, position: ChunkCoord) -> Option<&TerrainChunk> {
        self.chunks.get_chunk(position)
    }

    pub fn chunk_at_tile(&self, tile: TileCoord) -> Option<&TerrainChunk> {
        self.chunks.get_chunk(tile.to_chunk())
    }

    pub fn get_or_create_chunk(&mut self, position: ChunkCoord) -> &mut TerrainChunk {
        self.chunks.get_or_create_chunk(position)
    }

    pub fn used_chunks(&self) -> Vec<ChunkCoord> {
        self.chunks.used_chunks()
    }

    /// Cell of `tile`, or `None` while its chunk does not exist.
    pub fn get_data(&self, tile: TileCoord) -> Option<&TileContent> {
        self.chunk_at_tile(tile).map(|c| c.get(tile.chunk_offset()))
    }

    pub fn get_data_mut(&mut self, tile: TileCoord) -> Option<&mut TileContent> {
        self.chunks
            .get_chunk_mut(tile.to_chunk())
            .map(|c| c.get_mut(tile.chunk_offset()))
    }

    pub fn terrain_at(&self, tile: TileCoord) -> Option<TerrainId> {
        self.get_data(tile).map(|t| t.terrain_id)
    }

    pub fn check_tile_position(&self, tile: TileCoord) -> bool {
        if self.settings.infinite {
            return true;
        }
        let lo = self.settings.limit_negative;
        let hi = self.settings.limit_positive;
        tile.ne >= lo.ne && tile.se >= lo.se && tile.ne <= hi.ne && tile.se <= hi.se
    }

    pub fn check_tile(&self, tile: TileCoord) -> TileState {
        if !self.check_tile_position(tile) {
            TileState::Invalid
        } else if self.chunk_at_tile(tile).is_some() {
            TileState::Existing
        } else {
            TileState::Creatable
        }
    }

    /// Cell of `tile`, creating its chunk if the bounds allow it.
    fn creatable_data_mut(&mut self, tile: TileCoord) -> Option<&mut TileContent> {
        if !self.check_tile_position(tile) {
            return None;
        }
        let chunk = self.chunks.get_or_create_chunk(tile.to_chunk());
        Some(chunk.get_mut(tile.chunk_offset()))
    }

    /// Writes a single tile. Returns the state the position had before the
    /// write; nothing is written for `Invalid`.
    pub fn set_terrain(
        &mut self,
        tile: TileCoord,
        id: TerrainId,
    ) -> Result<TileState, TerrainError> {
        self.validate_fill_id(id)?;
        let state = self.check_tile(tile);
        if let Some(cell) = self.creatable_data_mut(tile) {
            cell.terrain_id = id;
        }
        Ok(state)
    }

    /// Loads a `size.ne` x `size.se` block of raw ids starting at tile (0, 0).
    /// `data` is row-major with `se` varying fastest. Negative ids leave the
    /// tile empty.
    ///
    /// Returns whether some positions fell outside a finite terrain and were
    /// skipped. All ids are validated before anything is written.
    pub fn fill(&mut self, data: &[i32], size: TileDelta) -> Result<bool, TerrainError> {
        let rows = size.ne.max(0) as usize;
        let cols = size.se.max(0) as usize;
        let expected = rows * cols;
        if data.len() < expected {
            return Err(TerrainError::FillSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        for &raw in &data[..expected] {
            self.validate_fill_id(TerrainId(raw))?;
        }

        let mut was_cut = false;
        for ne in 0..size.ne {
            for se in 0..size.se {
                let pos = TileCoord::new(ne, se);
                let id = TerrainId(data[ne as usize * cols + se as usize]);
                match self.creatable_data_mut(pos) {
                    Some(cell) => cell.terrain_id = id,
                    None => was_cut = true,
                }
            }
        }
        if was_cut {
            log::warn!(
                "fill of {}x{} tiles was cut at the terrain limits",
                size.ne,
                size.se
            );
        }
        Ok(was_cut)
    }

    fn validate_fill_id(&self, id: TerrainId) -> Result<(), CatalogError> {
        if id.is_empty() {
            return Ok(());
        }
        self.catalog.validate_terrain(id).map(|_| ())
    }

    /// Registers an object as standing on `tile`. The terrain keeps only the
    /// handle.
    pub fn place_object(&mut self, tile: TileCoord, obj: ObjectId) -> TileState {
        let state = self.check_tile(tile);
        if let Some(cell) = self.creatable_data_mut(tile) {
            cell.add_object(obj);
        }
        state
    }

    pub fn remove_object(&mut self, tile: TileCoord, obj: ObjectId) -> bool {
        self.get_data_mut(tile)
            .map(|cell| cell.remove_object(obj))
            .unwrap_or(false)
    }

    /// The eight neighbors of `tile`, read through the chunk links of its
    /// owning chunk `home`.
    pub(crate) fn neighbor_tiles(
        &self,
        home: ChunkId,
        tile: TileCoord,
    ) -> Result<[NeighborTile; 8], CatalogError> {
        let mut out = [NeighborTile::Missing; 8];
        let home_pos = tile.to_chunk();
        let Some(home_chunk) = self.chunks.get(home) else {
            return Ok(out);
        };
        for dir in Direction::ALL {
            let Some(pos) = tile.checked_neighbor(dir) else {
                continue;
            };
            let chunk_pos = pos.to_chunk();
            let chunk = if chunk_pos == home_pos {
                Some(home_chunk)
            } else {
                let delta = TileDelta::new(chunk_pos.ne - home_pos.ne, chunk_pos.se - home_pos.se);
                Direction::from_offset(delta)
                    .and_then(|d| home_chunk.neighbor(d))
                    .and_then(|id| self.chunks.get(id))
            };
            let Some(chunk) = chunk else {
                continue;
            };
            let terrain_id = chunk.get(pos.chunk_offset()).terrain_id;
            if terrain_id.is_empty() {
                continue;
            }
            out[dir.index()] = NeighborTile::Existing {
                terrain_id,
                priority: self.catalog.priority(terrain_id)?,
            };
        }
        Ok(out)
    }

    /// Tears the terrain down: store-owned chunks are dropped, manually
    /// created ones are handed back.
    pub fn release(self) -> ReleasedChunks {
        let released = self.chunks.release();
        log::debug!(
            "cleanup terrain: dropped {} chunk(s), returned {} manual chunk(s)",
            released.dropped,
            released.manual.len()
        );
        released
    }
}
