pub mod mutf8;
pub mod reader;

pub use reader::BinaryReader;
