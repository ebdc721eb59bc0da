use tessel_catalog::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    Catalog(CatalogError),
    FillSizeMismatch { expected: usize, actual: usize },
}

impl From<CatalogError> for TerrainError {
    fn from(value: CatalogError) -> Self {
        TerrainError::Catalog(value)
    }
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::Catalog(e) => write!(f, "{}", e),
            TerrainError::FillSizeMismatch { expected, actual } => write!(
                f,
                "fill data has {} ids, region needs {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for TerrainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerrainError::Catalog(e) => Some(e),
            _ => None,
        }
    }
}
