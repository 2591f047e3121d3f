//! Decoder and map preview renderer for Mindustry `.msav` save files.
//!
//! A save is a zlib stream containing, in order: the `MSAV` magic, a format
//! version, a metadata region, a content remapping region, and the
//! run-length encoded tile map. This crate parses those regions, resolves
//! floor ids through a fixed positional sprite table, and composites a
//! 16 px-per-tile RGBA preview from sprite assets on disk. The block/entity
//! layer that follows the tile map in the stream is out of scope and is
//! left unread.
//!
//! ```no_run
//! use msav::{decode, SpriteLookup, UnknownTilePolicy};
//!
//! let mut sprites = SpriteLookup::new("Mindustry/core/assets-raw/sprites");
//! let preview = decode("fortress.msav", &mut sprites, UnknownTilePolicy::Placeholder)?;
//! println!("{}: {}x{} tiles", preview.name, preview.width, preview.height);
//! preview.image.save("fortress-map.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod decode;
pub mod error;
pub mod renderer;
pub mod save;

pub use codec::BinaryReader;
pub use decode::{decode, MapPreview};
pub use error::{Error, Result};
pub use renderer::{SpriteLookup, UnknownTilePolicy, TILE_PIXELS};
pub use save::{parse_save, SaveMap, TileGrid};
