//! Java "modified UTF-8" decoding, the string format `DataOutput.writeUTF`
//! emits. It differs from standard UTF-8 in two ways: U+0000 is written as
//! the two-byte sequence `C0 80` (a literal `0x00` never appears), and code
//! points above U+FFFF are written as a UTF-16 surrogate pair with each
//! surrogate encoded as its own three-byte sequence. There are no four-byte
//! sequences.

use crate::error::{Error, Result};

/// Decode a modified-UTF-8 byte slice into a string.
///
/// The bytes are first expanded to UTF-16 code units; surrogate pairs are
/// recombined by the final UTF-16 conversion, which also rejects lone
/// surrogates. Any malformed sequence yields [`Error::InvalidStringEncoding`].
pub fn decode(bytes: &[u8]) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        match b {
            // A raw zero byte never occurs in this encoding; seeing one
            // means the cursor has drifted into non-string data.
            0x00 => return Err(Error::InvalidStringEncoding),
            0x01..=0x7F => {
                units.push(b as u16);
                i += 1;
            }
            _ if b & 0xE0 == 0xC0 => {
                let b2 = continuation(bytes, i + 1)?;
                units.push(((b as u16 & 0x1F) << 6) | (b2 as u16 & 0x3F));
                i += 2;
            }
            _ if b & 0xF0 == 0xE0 => {
                let b2 = continuation(bytes, i + 1)?;
                let b3 = continuation(bytes, i + 2)?;
                units.push(
                    ((b as u16 & 0x0F) << 12) | ((b2 as u16 & 0x3F) << 6) | (b3 as u16 & 0x3F),
                );
                i += 3;
            }
            // Stray continuation byte or a (nonexistent here) 4-byte leader.
            _ => return Err(Error::InvalidStringEncoding),
        }
    }

    String::from_utf16(&units).map_err(|_| Error::InvalidStringEncoding)
}

fn continuation(bytes: &[u8], index: usize) -> Result<u8> {
    match bytes.get(index) {
        Some(&b) if b & 0xC0 == 0x80 => Ok(b),
        _ => Err(Error::InvalidStringEncoding),
    }
}
