#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to decompress save data: {0}")]
    Decompression(String),

    #[error("invalid magic bytes: {found:02x?} (expected \"MSAV\")")]
    InvalidMagic { found: [u8; 4] },

    #[error("unsupported save version: {found} (only version 2 is supported)")]
    UnsupportedVersion { found: u32 },

    #[error("unexpected end of buffer")]
    UnexpectedEof,

    #[error("malformed modified UTF-8 string")]
    InvalidStringEncoding,

    #[error("{region} region declared {declared} bytes but {consumed} were consumed")]
    RegionLengthMismatch {
        region: &'static str,
        declared: u32,
        consumed: usize,
    },

    #[error("unknown tile id: {id}")]
    UnknownTileId { id: i16 },

    #[error("no sprite named {name:?} under the sprite root")]
    SpriteNotFound { name: String },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
