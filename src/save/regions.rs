use indexmap::IndexMap;

use crate::codec::BinaryReader;
use crate::error::{Error, Result};

/// File magic at offset 0.
pub const MAGIC: [u8; 4] = *b"MSAV";

/// The only save revision this decoder understands. Region layouts differ
/// across revisions, so any other value is fatal.
pub const SUPPORTED_VERSION: u32 = 2;

/// Read and check the 4-byte file magic.
pub fn read_header(reader: &mut BinaryReader) -> Result<()> {
    let bytes = reader.read_bytes(4)?;
    if bytes != MAGIC {
        return Err(Error::InvalidMagic {
            found: [bytes[0], bytes[1], bytes[2], bytes[3]],
        });
    }
    Ok(())
}

/// Read and check the 4-byte format version.
pub fn read_version(reader: &mut BinaryReader) -> Result<u32> {
    let version = reader.read_u32_be()?;
    if version != SUPPORTED_VERSION {
        return Err(Error::UnsupportedVersion { found: version });
    }
    Ok(version)
}

/// Read the metadata region into an ordered map.
///
/// Keys need not be unique in the stream; the last value wins while the key
/// keeps the position of its first occurrence. The declared region length is
/// checked against actual consumption afterwards: the on-disk field is
/// redundant for a well-formed file, but a corrupt count silently
/// desynchronizes every region that follows.
pub fn read_metadata(reader: &mut BinaryReader) -> Result<IndexMap<String, String>> {
    let declared = reader.read_u32_be()?;
    let start = reader.position();

    let entries = reader.read_i16_be()?;
    let mut metadata = IndexMap::new();
    for _ in 0..entries {
        let key = reader.read_string()?;
        let value = reader.read_string()?;
        metadata.insert(key, value);
    }

    check_region_length("metadata", declared, reader.position() - start)?;
    Ok(metadata)
}

/// Walk the content remapping region.
///
/// Nothing downstream needs the name tables, but every byte must be consumed
/// or the cursor lands mid-region when the map reader starts.
pub fn read_content(reader: &mut BinaryReader) -> Result<()> {
    let declared = reader.read_u32_be()?;
    let start = reader.position();

    let mapped = reader.read_u8()?;
    for _ in 0..mapped {
        let _type_id = reader.read_u8()?;
        let total = reader.read_i16_be()?;
        for _ in 0..total {
            reader.read_string()?;
        }
    }

    check_region_length("content", declared, reader.position() - start)
}

fn check_region_length(region: &'static str, declared: u32, consumed: usize) -> Result<()> {
    if consumed != declared as usize {
        return Err(Error::RegionLengthMismatch {
            region,
            declared,
            consumed,
        });
    }
    Ok(())
}
