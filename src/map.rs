use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

use tessel_terrain::TileDelta;

/// Raw terrain ids in `Terrain::fill` layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapData {
    pub ids: Vec<i32>,
    pub size: TileDelta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    BadToken { line: usize, token: String },
    RaggedRow { line: usize, expected: usize, actual: usize },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::BadToken { line, token } => {
                write!(f, "line {}: not a terrain id: {:?}", line, token)
            }
            MapError::RaggedRow {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {}: row has {} tiles, expected {}",
                line, actual, expected
            ),
        }
    }
}

impl Error for MapError {}

/// Parses a text map: one `ne` row per line, ids along `se` separated by
/// whitespace. `.` marks an empty tile, `#` starts a comment.
pub fn parse_map(text: &str) -> Result<MapData, MapError> {
    let mut ids = Vec::new();
    let mut rows = 0usize;
    let mut cols: Option<usize> = None;
    for (n, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut count = 0usize;
        for token in line.split_whitespace() {
            let id = if token == "." {
                -1
            } else {
                token.parse::<i32>().map_err(|_| MapError::BadToken {
                    line: n + 1,
                    token: token.to_string(),
                })?
            };
            ids.push(id);
            count += 1;
        }
        match cols {
            None => cols = Some(count),
            Some(expected) if expected != count => {
                return Err(MapError::RaggedRow {
                    line: n + 1,
                    expected,
                    actual: count,
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }
    Ok(MapData {
        ids,
        size: TileDelta::new(rows as i32, cols.unwrap_or(0) as i32),
    })
}

pub fn load_map(path: impl AsRef<Path>) -> Result<MapData, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_map(&text)?)
}
