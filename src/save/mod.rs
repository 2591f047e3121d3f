//! Parsing of the `.msav` save container: a zlib stream holding, in order,
//! the magic, format version, metadata region, content remapping region and
//! the run-length encoded tile map. The block/entity layer after the tiles
//! is deliberately never read.

pub mod registry;
pub mod regions;
pub mod tiles;

use std::io::Read;

use flate2::read::ZlibDecoder;
use indexmap::IndexMap;
use tracing::debug;

use crate::codec::BinaryReader;
use crate::error::{Error, Result};

pub use tiles::{MapRegion, TileGrid};

/// A fully parsed save map, before any rendering.
#[derive(Debug, Clone)]
pub struct SaveMap {
    /// Declared map name, `"unknown"` if the metadata carries none.
    pub name: String,
    pub metadata: IndexMap<String, String>,
    pub grid: TileGrid,
    /// Distinct floor ids with the byte offset of their first run.
    pub seen_floors: IndexMap<i16, usize>,
}

/// Inflate the raw save file contents.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| Error::Decompression(e.to_string()))?;
    Ok(decompressed)
}

/// Parse raw (still compressed) save file bytes into a [`SaveMap`].
///
/// Regions are read strictly in stream order; any failure aborts the whole
/// parse, no partial grid is ever returned.
pub fn parse_save(data: &[u8]) -> Result<SaveMap> {
    let decompressed = decompress(data)?;
    let mut reader = BinaryReader::new(&decompressed);

    regions::read_header(&mut reader)?;
    let version = regions::read_version(&mut reader)?;
    debug!(version, "save header ok");

    let metadata = regions::read_metadata(&mut reader)?;
    debug!(entries = metadata.len(), "metadata region read");

    regions::read_content(&mut reader)?;

    let MapRegion { grid, seen_floors } = tiles::read_map(&mut reader)?;
    debug!(
        width = grid.width(),
        height = grid.height(),
        distinct_floors = seen_floors.len(),
        trailing = reader.remaining(),
        "map region read"
    );

    let name = metadata
        .get("name")
        .cloned()
        .unwrap_or_else(|| "unknown".to_string());

    Ok(SaveMap {
        name,
        metadata,
        grid,
        seen_floors,
    })
}
