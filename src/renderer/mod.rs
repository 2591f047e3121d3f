pub mod compositor;
pub mod sprites;

pub use compositor::{compose, UnknownTilePolicy, TILE_PIXELS};
pub use sprites::SpriteLookup;
