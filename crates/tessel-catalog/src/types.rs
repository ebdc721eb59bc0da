use serde::{Deserialize, Serialize};

/// Dense terrain type id. Negative values mark a tile without terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerrainId(pub i32);

impl TerrainId {
    pub const EMPTY: TerrainId = TerrainId(-1);

    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 < 0
    }
}

impl Default for TerrainId {
    fn default() -> Self {
        TerrainId::EMPTY
    }
}

impl From<i32> for TerrainId {
    fn from(value: i32) -> Self {
        TerrainId(value)
    }
}
