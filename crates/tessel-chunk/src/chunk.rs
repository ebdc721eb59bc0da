use tessel_catalog::TerrainId;
use tessel_coord::{ChunkOffset, Direction, TILES_PER_CHUNK};

use crate::ChunkId;

/// Handle of an object standing on the terrain. The terrain only keeps these
/// as references; the objects themselves live elsewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileContent {
    pub terrain_id: TerrainId,
    pub objects: Vec<ObjectId>,
}

impl TileContent {
    /// Returns false if the object was already registered here.
    pub fn add_object(&mut self, obj: ObjectId) -> bool {
        if self.objects.contains(&obj) {
            return false;
        }
        self.objects.push(obj);
        true
    }

    pub fn remove_object(&mut self, obj: ObjectId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| *o != obj);
        self.objects.len() != before
    }
}

/// A square block of tiles.
#[derive(Clone, Debug)]
pub struct TerrainChunk {
    tiles: Vec<TileContent>,
    pub(crate) neighbors: [Option<ChunkId>; 8],
    pub(crate) manually_created: bool,
}

impl Default for TerrainChunk {
    fn default() -> Self {
        Self::new()
    }
}

impl TerrainChunk {
    pub fn new() -> Self {
        Self {
            tiles: vec![TileContent::default(); TILES_PER_CHUNK],
            neighbors: [None; 8],
            manually_created: false,
        }
    }

    /// Builds a chunk from ids in `ChunkOffset::index` order. Short input is
    /// padded with empty tiles, extra ids are ignored.
    pub fn from_terrain_ids(ids: &[TerrainId]) -> Self {
        let mut chunk = Self::new();
        for (tile, id) in chunk.tiles.iter_mut().zip(ids) {
            tile.terrain_id = *id;
        }
        chunk
    }

    #[inline]
    pub fn get(&self, offset: ChunkOffset) -> &TileContent {
        &self.tiles[offset.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, offset: ChunkOffset) -> &mut TileContent {
        &mut self.tiles[offset.index()]
    }

    #[inline]
    pub fn tiles(&self) -> &[TileContent] {
        &self.tiles
    }

    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<ChunkId> {
        self.neighbors[dir.index()]
    }

    #[inline]
    pub fn neighbors(&self) -> &[Option<ChunkId>; 8] {
        &self.neighbors
    }

    #[inline]
    pub fn is_manually_created(&self) -> bool {
        self.manually_created
    }
}
