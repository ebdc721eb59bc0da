mod assets;
mod camera;
mod map;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tessel_terrain::{Terrain, TerrainConfig, TerrainRenderData, TileCoord, WindowSize};

use crate::assets::ConsoleAssets;
use crate::camera::IsoCamera;

#[derive(Parser, Debug)]
#[command(name = "tessel", about = "Headless terrain blending preview")]
struct Args {
    /// Assets root (defaults to TESSEL_ASSETS or a nearby `assets/` dir)
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Terrain config TOML (defaults to assets/terrain.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text map to fill the terrain with (defaults to assets/demo.map)
    #[arg(long)]
    map: Option<PathBuf>,
    /// Camera center tile, as `ne,se`
    #[arg(long, value_parser = parse_tile, default_value = "4,4")]
    center: TileCoord,
    #[arg(long, default_value_t = 640)]
    width: i32,
    #[arg(long, default_value_t = 480)]
    height: i32,
    /// Tile width in pixels
    #[arg(long, default_value_t = 96.0)]
    tile_width: f32,
    /// Subtextures per atlas side for the placeholder textures
    #[arg(long, default_value_t = 4)]
    atlas: u32,
    /// Draw every tile with its base texture only
    #[arg(long)]
    no_blend: bool,
}

fn parse_tile(s: &str) -> Result<TileCoord, String> {
    let (ne, se) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `ne,se`, got {:?}", s))?;
    let ne = ne.trim().parse::<i32>().map_err(|e| e.to_string())?;
    let se = se.trim().parse::<i32>().map_err(|e| e.to_string())?;
    Ok(TileCoord::new(ne, se))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let root = assets::resolve_assets_root(args.assets);
    let config_path = args
        .config
        .unwrap_or_else(|| assets::terrain_config_path(&root));
    let map_path = args.map.unwrap_or_else(|| assets::demo_map_path(&root));
    log::info!("assets root {}", root.display());

    let mut cfg = TerrainConfig::from_path(&config_path)?;
    if args.no_blend {
        cfg.settings.blending = false;
    }
    let mut provider = ConsoleAssets::new(root, args.atlas);
    let mut terrain = Terrain::from_config(&cfg, &mut provider)?;

    let map = map::load_map(&map_path)?;
    if terrain.fill(&map.ids, map.size)? {
        log::warn!("map {} exceeds the terrain limits", map_path.display());
    }
    log::info!(
        "loaded {}x{} map into {} chunk(s)",
        map.size.ne,
        map.size.se,
        terrain.used_chunks().len()
    );

    let camera = IsoCamera::new(args.center, args.tile_width, args.width, args.height);
    let frame = terrain.draw(
        &camera,
        WindowSize {
            width: args.width,
            height: args.height,
        },
    )?;
    print_frame(&frame);

    let released = terrain.release();
    log::debug!("released {} manual chunk(s)", released.manual.len());
    Ok(())
}

fn print_frame(frame: &TerrainRenderData) {
    let layers: usize = frame.tiles.iter().map(|t| t.layers.len()).sum();
    println!(
        "{} tiles swept, {} layers, {} objects",
        frame.tiles.len(),
        layers,
        frame.objects.len()
    );
    for tile in frame.tiles.iter().filter(|t| !t.is_empty()) {
        let mut line = format!("({:>3},{:>3})", tile.position.ne, tile.position.se);
        for layer in &tile.layers {
            match &layer.mask {
                Some(m) => line.push_str(&format!(
                    " +{}[mode {} mask {}]",
                    layer.terrain_id.0, m.blend_mode, m.mask_id
                )),
                None => line.push_str(&format!(
                    " {}[sub {}]",
                    layer.terrain_id.0, layer.subtexture
                )),
            }
        }
        println!("{}", line);
    }
}
