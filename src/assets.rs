use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tessel_catalog::{AssetProvider, BlendFlag, TerrainTexture, TextureRef};
use tessel_terrain::TileCoord;

/// Assets root: `--assets`, then `TESSEL_ASSETS`, then the nearest ancestor
/// of the working directory holding both the config and the map, then the
/// package directory.
pub fn resolve_assets_root(cli: Option<PathBuf>) -> PathBuf {
    let explicit = cli.or_else(|| std::env::var_os("TESSEL_ASSETS").map(PathBuf::from));
    if let Some(root) = explicit.filter(|p| p.exists()) {
        return root;
    }
    std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.ancestors().find(|dir| is_assets_root(dir)).map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}

fn is_assets_root(dir: &Path) -> bool {
    terrain_config_path(dir).is_file() && demo_map_path(dir).is_file()
}

pub fn terrain_config_path(root: &Path) -> PathBuf {
    root.join("assets/terrain.toml")
}

pub fn demo_map_path(root: &Path) -> PathBuf {
    root.join("assets/demo.map")
}

/// Texture stand-in for headless runs: remembers its file and logs every
/// submitted quad.
pub struct ConsoleTexture {
    pub path: PathBuf,
    pub atlas: u32,
}

impl TerrainTexture for ConsoleTexture {
    fn atlas_dimensions(&self) -> u32 {
        self.atlas
    }

    fn draw(
        &self,
        pos: TileCoord,
        flag: BlendFlag,
        subtexture: u32,
        _mask: Option<&dyn TerrainTexture>,
        mask_id: Option<u8>,
    ) {
        log::trace!(
            "draw {} at ({}, {}) sub={} {:?} mask={:?}",
            self.path.display(),
            pos.ne,
            pos.se,
            subtexture,
            flag,
            mask_id
        );
    }
}

/// Resolves texture paths under the assets root. Missing files are only
/// reported; the headless renderer never reads pixels.
pub struct ConsoleAssets {
    root: PathBuf,
    atlas: u32,
}

impl ConsoleAssets {
    pub fn new(root: PathBuf, atlas: u32) -> Self {
        Self { root, atlas }
    }
}

impl AssetProvider for ConsoleAssets {
    fn texture(&mut self, path: &str) -> Result<TextureRef, Box<dyn Error>> {
        let full = self.root.join(path);
        if !full.exists() {
            log::debug!("texture {} not found, using placeholder", full.display());
        }
        Ok(Arc::new(ConsoleTexture {
            path: full,
            atlas: self.atlas,
        }))
    }
}
