use hashbrown::HashMap;
use tessel_coord::{ChunkCoord, Direction};

use crate::TerrainChunk;

/// Index of a chunk inside its `ChunkStore`. Stable for the store's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChunkId(usize);

impl ChunkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Result of tearing down a store.
#[derive(Debug, Default)]
pub struct ReleasedChunks {
    /// Chunks attached with `manually_created`, handed back to the caller.
    pub manual: Vec<(ChunkCoord, TerrainChunk)>,
    /// Number of store-owned chunks that were dropped.
    pub dropped: usize,
}

/// Sparse map from chunk position to chunk.
///
/// Chunks live in an arena and refer to their neighbors by `ChunkId`, so the
/// mutual links between neighbors never own each other.
#[derive(Default)]
pub struct ChunkStore {
    chunks: Vec<TerrainChunk>,
    positions: Vec<ChunkCoord>,
    by_coord: HashMap<ChunkCoord, ChunkId>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Stores `chunk` at `position` and links it with the chunks already
    /// present around it, in both directions.
    ///
    /// If another chunk already sits at `position` it is displaced: the new
    /// chunk takes over its slot and the old one is returned with its neighbor
    /// links cleared.
    pub fn attach_chunk(
        &mut self,
        mut chunk: TerrainChunk,
        position: ChunkCoord,
        manually_created: bool,
    ) -> Option<TerrainChunk> {
        chunk.manually_created = manually_created;
        chunk.neighbors = [None; 8];
        log::debug!(
            "inserting chunk at ({}, {}) manual={}",
            position.ne,
            position.se,
            manually_created
        );

        let (id, displaced) = match self.chunk_id(position) {
            Some(id) => {
                log::warn!(
                    "chunk at ({}, {}) replaced by a newly attached chunk",
                    position.ne,
                    position.se
                );
                let mut old = std::mem::replace(&mut self.chunks[id.0], chunk);
                old.neighbors = [None; 8];
                (id, Some(old))
            }
            None => {
                let id = ChunkId(self.chunks.len());
                self.chunks.push(chunk);
                self.positions.push(position);
                self.by_coord.insert(position, id);
                (id, None)
            }
        };

        let neighbors = self.neighbors_of(position);
        for dir in Direction::ALL {
            match neighbors[dir.index()] {
                Some(nid) => {
                    self.chunks[id.0].neighbors[dir.index()] = Some(nid);
                    self.chunks[nid.0].neighbors[dir.opposite().index()] = Some(id);
                    log::trace!("neighbor {:?} gets notified of new neighbor", dir);
                }
                None => log::trace!("neighbor {:?} not found", dir),
            }
        }
        displaced
    }

    #[inline]
    pub fn chunk_id(&self, position: ChunkCoord) -> Option<ChunkId> {
        self.by_coord.get(&position).copied()
    }

    #[inline]
    pub fn get(&self, id: ChunkId) -> Option<&TerrainChunk> {
        self.chunks.get(id.0)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ChunkId) -> Option<&mut TerrainChunk> {
        self.chunks.get_mut(id.0)
    }

    pub fn get_chunk(&self, position: ChunkCoord) -> Option<&TerrainChunk> {
        self.chunk_id(position).and_then(|id| self.get(id))
    }

    pub fn get_chunk_mut(&mut self, position: ChunkCoord) -> Option<&mut TerrainChunk> {
        let id = self.chunk_id(position)?;
        self.get_mut(id)
    }

    /// Looks up the chunk at `position`, attaching a fresh store-owned one if
    /// there is none yet.
    pub fn get_or_create_id(&mut self, position: ChunkCoord) -> ChunkId {
        if let Some(id) = self.chunk_id(position) {
            return id;
        }
        self.attach_chunk(TerrainChunk::new(), position, false);
        ChunkId(self.chunks.len() - 1)
    }

    pub fn get_or_create_chunk(&mut self, position: ChunkCoord) -> &mut TerrainChunk {
        let id = self.get_or_create_id(position);
        &mut self.chunks[id.0]
    }

    /// Chunks currently stored around `position`, indexed by `Direction`.
    pub fn neighbors_of(&self, position: ChunkCoord) -> [Option<ChunkId>; 8] {
        let mut out = [None; 8];
        for dir in Direction::ALL {
            out[dir.index()] = position
                .checked_neighbor(dir)
                .and_then(|pos| self.chunk_id(pos));
        }
        out
    }

    /// Positions of all stored chunks, in no particular order.
    pub fn used_chunks(&self) -> Vec<ChunkCoord> {
        self.by_coord.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChunkCoord, &TerrainChunk)> {
        self.positions.iter().copied().zip(self.chunks.iter())
    }

    /// Drops every store-owned chunk and hands manually created ones back.
    pub fn release(self) -> ReleasedChunks {
        let mut out = ReleasedChunks::default();
        for (pos, mut chunk) in self.positions.into_iter().zip(self.chunks) {
            if chunk.manually_created {
                chunk.neighbors = [None; 8];
                out.manual.push((pos, chunk));
            } else {
                out.dropped += 1;
            }
        }
        out
    }
}
