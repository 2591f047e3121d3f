use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::error::Result;
use crate::renderer::{self, SpriteLookup, UnknownTilePolicy};
use crate::save;

/// Decoded save plus its rendered preview.
#[derive(Debug, Clone)]
pub struct MapPreview {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Declared map name from the save metadata.
    pub name: String,
    /// Floor-layer raster, 16x16 pixels per tile.
    pub image: RgbaImage,
}

/// Decode one `.msav` file into its tile grid and rendered preview.
///
/// This is the single entry point the surrounding pipeline calls: it
/// decompresses the file, parses every region through the tile map, and
/// composites the raster from sprites under the lookup's root. Any stage
/// failure aborts the whole decode; batch callers skip that file and move
/// on.
pub fn decode(
    path: impl AsRef<Path>,
    sprites: &mut SpriteLookup,
    policy: UnknownTilePolicy,
) -> Result<MapPreview> {
    let path = path.as_ref();
    debug!(path = %path.display(), "decoding save");

    let data = std::fs::read(path)?;
    let save = save::parse_save(&data)?;
    let image = renderer::compose(&save.grid, &save.seen_floors, sprites, policy)?;

    Ok(MapPreview {
        width: save.grid.width() as u32,
        height: save.grid.height() as u32,
        name: save.name,
        image,
    })
}
