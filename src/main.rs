// External crates
use anyhow::{Context, Result};

// Internal modules
mod geometry;
mod obj;
mod point2d;
mod point3d;
mod render;
mod screen;
mod texture;
mod triangle;

// Internal imports
use crate::texture::Texture;

// Default render resolution
const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mesh_path = args.next().unwrap_or_else(|| "soldier.obj".to_string());
    let texture_path = args.next();
    let out_path = args.next().unwrap_or_else(|| "frame.bmp".to_string());

    let mesh = match obj::parse_obj(&mesh_path) {
        Ok(mesh) => mesh,
        Err(err) => {
            // Fatal: there is nothing to render without a mesh.
            log::error!("failed to load {mesh_path}: {err:#}");
            return Err(err);
        }
    };
    log::info!(
        "loaded {mesh_path}: {} vertices, {} triangles",
        mesh.positions.len(),
        mesh.indices.len() / 3
    );

    // The texture is decoded up front but the flat-shaded pipeline never
    // samples it.
    if let Some(path) = texture_path {
        let tex = Texture::load(&path).with_context(|| format!("failed to load texture {path}"))?;
        log::info!("loaded {path}: {}x{}", tex.width, tex.height);
    }

    let frame = render::render(&mesh, WIDTH, HEIGHT);
    frame.write_bmp(&out_path)?;
    log::info!("wrote {out_path} ({WIDTH}x{HEIGHT})");
    Ok(())
}
