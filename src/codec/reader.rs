use crate::error::{Error, Result};

use super::mutf8;

/// Binary reader for the big-endian `.msav` save stream.
///
/// The cursor only ever moves forward; every read either consumes exactly
/// the requested width or fails with [`Error::UnexpectedEof`] and leaves
/// the position untouched.
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn skip(&mut self, n: usize) -> Result<()> {
        if self.remaining() < n {
            return Err(Error::UnexpectedEof);
        }
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        if self.remaining() < 1 {
            return Err(Error::UnexpectedEof);
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u16_be(&mut self) -> Result<u16> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16_be(&mut self) -> Result<i16> {
        Ok(self.read_u16_be()? as i16)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a modified-UTF-8 string prefixed with its byte length as a
    /// big-endian u16, the layout `DataOutput.writeUTF` produces.
    pub fn read_string(&mut self) -> Result<String> {
        let len = self.read_u16_be()? as usize;
        let bytes = self.read_bytes(len)?;
        mutf8::decode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16_be().unwrap(), 0x0203);
        assert_eq!(reader.read_u32_be().unwrap(), 0x04050607);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_signed() {
        let data = [0xFF, 0xFF, 0x80, 0x00];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_i16_be().unwrap(), -1);
        assert_eq!(reader.read_i16_be().unwrap(), i16::MIN);
    }

    #[test]
    fn test_eof_leaves_position() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);
        assert!(matches!(reader.read_u32_be(), Err(Error::UnexpectedEof)));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read_u16_be().unwrap(), 0x0102);
        assert!(matches!(reader.read_u8(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_read_string() {
        let data = [0x00, 0x05, b'h', b'e', b'l', b'l', b'o', 0xAA];
        let mut reader = BinaryReader::new(&data);
        assert_eq!(reader.read_string().unwrap(), "hello");
        assert_eq!(reader.read_u8().unwrap(), 0xAA);
    }

    #[test]
    fn test_read_string_truncated() {
        let data = [0x00, 0x05, b'h', b'i'];
        let mut reader = BinaryReader::new(&data);
        assert!(matches!(reader.read_string(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_skip() {
        let data = [0u8; 4];
        let mut reader = BinaryReader::new(&data);
        reader.skip(3).unwrap();
        assert_eq!(reader.position(), 3);
        assert!(matches!(reader.skip(2), Err(Error::UnexpectedEof)));
    }
}
