use indexmap::IndexMap;

use crate::codec::BinaryReader;
use crate::error::Result;

/// Decoded map grid: one floor id and one ore id per tile.
///
/// Both layers are flat row-major buffers, x fastest, matching the stream's
/// run-length traversal order.
#[derive(Debug, Clone)]
pub struct TileGrid {
    width: usize,
    height: usize,
    floor: Vec<i16>,
    ore: Vec<i16>,
}

impl TileGrid {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            floor: vec![0; width * height],
            ore: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn floor(&self, x: usize, y: usize) -> i16 {
        self.floor[y * self.width + x]
    }

    pub fn ore(&self, x: usize, y: usize) -> i16 {
        self.ore[y * self.width + x]
    }
}

/// Result of reading the map region: the grid plus each distinct floor id
/// seen, mapped to the byte offset of the run that first carried it. The id
/// set lets the renderer load only the sprites a map actually uses; the
/// offsets give diagnostics something concrete to point at when an id turns
/// out not to resolve.
#[derive(Debug, Clone)]
pub struct MapRegion {
    pub grid: TileGrid,
    pub seen_floors: IndexMap<i16, usize>,
}

/// Read the map region: declared length, dimensions, then run-length
/// `(floor, ore, count)` triplets until `width * height` cells are filled.
///
/// The declared region length is discarded without validation here, unlike
/// the other regions: it covers the block/entity layer that follows the tile
/// runs, which this decoder deliberately leaves unread, so consumption can
/// never be compared against it. The cursor is left at the first byte of
/// that unparsed layer.
pub fn read_map(reader: &mut BinaryReader) -> Result<MapRegion> {
    reader.skip(4)?;
    let width = reader.read_u16_be()? as usize;
    let height = reader.read_u16_be()? as usize;

    let total = width * height;
    let mut grid = TileGrid::new(width, height);
    let mut seen_floors = IndexMap::new();
    let mut filled = 0usize;

    while filled < total {
        let offset = reader.position();
        let floor = reader.read_i16_be()?;
        let ore = reader.read_i16_be()?;
        let run = reader.read_u8()? as usize;

        seen_floors.entry(floor).or_insert(offset);

        // A run of n writes n + 1 cells, the current one included. The last
        // run in a file may extend into the following block layer; clip at
        // the grid instead of erroring.
        let writes = (run + 1).min(total - filled);
        grid.floor[filled..filled + writes].fill(floor);
        grid.ore[filled..filled + writes].fill(ore);
        filled += writes;
    }

    Ok(MapRegion { grid, seen_floors })
}
