use std::collections::HashMap;

use image::{imageops, RgbaImage};
use indexmap::IndexMap;
use tracing::warn;

use crate::error::{Error, Result};
use crate::save::registry;
use crate::save::TileGrid;

use super::sprites::SpriteLookup;

/// Pixel edge length of one tile cell in the preview raster.
pub const TILE_PIXELS: u32 = 16;

/// What to do with a floor id the tile table does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTilePolicy {
    /// Fail the decode with [`Error::UnknownTileId`].
    Strict,
    /// Render the registry's placeholder sprite instead, keeping a
    /// best-effort preview of partially understood files.
    Placeholder,
}

/// Render the floor layer of a grid into a `(width*16) x (height*16)` RGBA
/// raster.
///
/// Sprites are resolved and loaded once per distinct floor id (the set the
/// map reader collected), then pasted per cell in the same row-major order
/// the grid was decoded in.
pub fn compose(
    grid: &TileGrid,
    seen_floors: &IndexMap<i16, usize>,
    sprites: &mut SpriteLookup,
    policy: UnknownTilePolicy,
) -> Result<RgbaImage> {
    let mut names: HashMap<i16, &'static str> = HashMap::new();
    for (&id, &offset) in seen_floors {
        let name = match registry::resolve(id) {
            Ok(name) => name,
            Err(err) => match policy {
                UnknownTilePolicy::Strict => return Err(err),
                UnknownTilePolicy::Placeholder => {
                    warn!(id, offset, "floor id not in tile table, substituting placeholder");
                    registry::placeholder()
                }
            },
        };
        sprites.preload(name)?;
        names.insert(id, name);
    }

    let mut canvas = RgbaImage::new(
        grid.width() as u32 * TILE_PIXELS,
        grid.height() as u32 * TILE_PIXELS,
    );
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let id = grid.floor(x, y);
            let name = names.get(&id).copied().ok_or(Error::UnknownTileId { id })?;
            let sprite = sprites.get(name).ok_or_else(|| Error::SpriteNotFound {
                name: name.to_string(),
            })?;
            imageops::replace(
                &mut canvas,
                sprite,
                x as i64 * TILE_PIXELS as i64,
                y as i64 * TILE_PIXELS as i64,
            );
        }
    }
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::BinaryReader;
    use crate::save::tiles;
    use image::Rgba;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_sprite(dir: &Path, name: &str, size: u32, color: [u8; 4]) {
        fs::create_dir_all(dir).unwrap();
        let img = RgbaImage::from_pixel(size, size, Rgba(color));
        img.save(dir.join(format!("{name}.png"))).unwrap();
    }

    fn read_region(width: u16, height: u16, runs: &[(i16, i16, u8)]) -> tiles::MapRegion {
        let mut bytes = vec![0, 0, 0, 0];
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        for &(floor, ore, run) in runs {
            bytes.extend_from_slice(&floor.to_be_bytes());
            bytes.extend_from_slice(&ore.to_be_bytes());
            bytes.push(run);
        }
        tiles::read_map(&mut BinaryReader::new(&bytes)).unwrap()
    }

    #[test]
    fn test_compose_pastes_by_cell() {
        let root = TempDir::new().unwrap();
        let blocks = root.path().join("blocks");
        // 32px sources, halved to the 16px cell size. Ids 6 and 9 are
        // "stone1" and "sand1" in the registry.
        write_sprite(&blocks, "stone1", 32, [100, 100, 100, 255]);
        write_sprite(&blocks, "sand1", 32, [200, 180, 50, 255]);

        let region = read_region(2, 1, &[(6, 0, 0), (9, 0, 0)]);
        let mut sprites = SpriteLookup::new(root.path());
        let raster = compose(
            &region.grid,
            &region.seen_floors,
            &mut sprites,
            UnknownTilePolicy::Strict,
        )
        .unwrap();

        assert_eq!(raster.dimensions(), (32, 16));
        assert_eq!(raster.get_pixel(0, 0).0, [100, 100, 100, 255]);
        assert_eq!(raster.get_pixel(15, 15).0, [100, 100, 100, 255]);
        assert_eq!(raster.get_pixel(16, 0).0, [200, 180, 50, 255]);
        assert_eq!(raster.get_pixel(31, 15).0, [200, 180, 50, 255]);
    }

    #[test]
    fn test_strict_fails_on_unknown_id() {
        let root = TempDir::new().unwrap();
        let region = read_region(1, 1, &[(-4, 0, 0)]);
        let mut sprites = SpriteLookup::new(root.path());

        assert!(matches!(
            compose(
                &region.grid,
                &region.seen_floors,
                &mut sprites,
                UnknownTilePolicy::Strict
            ),
            Err(Error::UnknownTileId { id: -4 })
        ));
    }

    #[test]
    fn test_placeholder_substitutes_unknown_id() {
        let root = TempDir::new().unwrap();
        // Registry entry 0 is "titanium2".
        write_sprite(&root.path().join("blocks"), "titanium2", 32, [50, 60, 70, 255]);

        let region = read_region(1, 1, &[(-4, 0, 0)]);
        let mut sprites = SpriteLookup::new(root.path());
        let raster = compose(
            &region.grid,
            &region.seen_floors,
            &mut sprites,
            UnknownTilePolicy::Placeholder,
        )
        .unwrap();

        assert_eq!(raster.dimensions(), (16, 16));
        assert_eq!(raster.get_pixel(8, 8).0, [50, 60, 70, 255]);
    }

    #[test]
    fn test_missing_sprite_fails() {
        let root = TempDir::new().unwrap();
        let region = read_region(1, 1, &[(6, 0, 0)]);
        let mut sprites = SpriteLookup::new(root.path());

        assert!(matches!(
            compose(
                &region.grid,
                &region.seen_floors,
                &mut sprites,
                UnknownTilePolicy::Strict
            ),
            Err(Error::SpriteNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_grid_composes_empty_raster() {
        let root = TempDir::new().unwrap();
        let region = read_region(0, 0, &[]);
        let mut sprites = SpriteLookup::new(root.path());
        let raster = compose(
            &region.grid,
            &region.seen_floors,
            &mut sprites,
            UnknownTilePolicy::Strict,
        )
        .unwrap();
        assert_eq!(raster.dimensions(), (0, 0));
    }
}
