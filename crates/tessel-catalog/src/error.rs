use crate::TerrainId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    TerrainIdOutOfRange { id: TerrainId, count: usize },
    BlendModeOutOfRange { id: i32, count: usize },
    DuplicateTerrainId(TerrainId),
    DuplicateBlendMode(i32),
    Asset { path: String, message: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::TerrainIdOutOfRange { id, count } => write!(
                f,
                "requested terrain id is out of range: {} (terrain types: {})",
                id.0, count
            ),
            CatalogError::BlendModeOutOfRange { id, count } => write!(
                f,
                "requested blend mode is out of range: {} (blend modes: {})",
                id, count
            ),
            CatalogError::DuplicateTerrainId(id) => {
                write!(f, "terrain id {} defined more than once", id.0)
            }
            CatalogError::DuplicateBlendMode(id) => {
                write!(f, "blend mode {} defined more than once", id)
            }
            CatalogError::Asset { path, message } => {
                write!(f, "failed to load texture {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for CatalogError {}
