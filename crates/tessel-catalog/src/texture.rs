use std::error::Error;
use std::sync::Arc;

use tessel_coord::TileCoord;

/// How a layer is composited onto what is already drawn at its tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendFlag {
    Opaque,
    AlphaMasked,
}

/// A loaded terrain or mask texture. Implemented by the renderer; this crate
/// only reads the atlas layout and forwards draw calls.
pub trait TerrainTexture: Send + Sync {
    /// Number of sub-images per atlas row (the atlas is square).
    fn atlas_dimensions(&self) -> u32;

    fn draw(
        &self,
        pos: TileCoord,
        flag: BlendFlag,
        subtexture: u32,
        mask: Option<&dyn TerrainTexture>,
        mask_id: Option<u8>,
    );
}

pub type TextureRef = Arc<dyn TerrainTexture>;

/// Resolves texture files to handles.
pub trait AssetProvider {
    fn texture(&mut self, path: &str) -> Result<TextureRef, Box<dyn Error>>;
}

pub fn terrain_texture_path(texture: i32) -> String {
    format!("converted/terrain/{}.slp.png", texture)
}

pub fn blend_mask_path(mask: i32) -> String {
    format!("converted/blendomatic/mode{:02}.png", mask)
}
