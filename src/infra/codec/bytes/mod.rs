//! Low-level components dedicated to byte access on CAN payloads.
//! Every multi-byte integer on the rig bus is big-endian; the reader/writer
//! below enforce bounds so the engine never indexes past a short frame.
use crate::core::WireType;
use crate::error::{ByteReaderError, ByteWriterError};

/// Reader that extracts big-endian integers from a `&[u8]`
/// without extra allocation or copies.
pub struct ByteReader<'a> {
    /// Shared source buffer (typically the received CAN payload).
    buffer: &'a [u8],
    /// Current index expressed in bytes read from the beginning.
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of the provided buffer.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Bytes left between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Move the cursor to an absolute byte offset.
    pub fn seek(&mut self, position: usize) -> Result<(), ByteReaderError> {
        if position > self.buffer.len() {
            return Err(ByteReaderError::OutOfBounds {
                asked: position,
                available: self.buffer.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    /// Take the next `N` bytes and advance the cursor.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], ByteReaderError> {
        let end = self.cursor + N;
        if end > self.buffer.len() {
            return Err(ByteReaderError::OutOfBounds {
                asked: N,
                available: self.remaining(),
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buffer[self.cursor..end]);
        self.cursor = end;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ByteReaderError> {
        self.take::<1>().map(|b| b[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, ByteReaderError> {
        self.take::<1>().map(i8::from_be_bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16, ByteReaderError> {
        self.take::<2>().map(u16::from_be_bytes)
    }

    pub fn read_i16(&mut self) -> Result<i16, ByteReaderError> {
        self.take::<2>().map(i16::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32, ByteReaderError> {
        self.take::<4>().map(u32::from_be_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32, ByteReaderError> {
        self.take::<4>().map(i32::from_be_bytes)
    }

    /// Read one integer of the given wire type, widened to `i64` so signed and
    /// unsigned fields share the scaling path.
    pub fn read_raw(&mut self, wire: WireType) -> Result<i64, ByteReaderError> {
        Ok(match wire {
            WireType::U8 => self.read_u8()? as i64,
            WireType::I8 => self.read_i8()? as i64,
            WireType::U16 => self.read_u16()? as i64,
            WireType::I16 => self.read_i16()? as i64,
            WireType::U32 => self.read_u32()? as i64,
            WireType::I32 => self.read_i32()? as i64,
        })
    }
}
//==================================================================================BYTEWRITER

/// Writer laying big-endian integers into a `&mut [u8]`. Used by the
/// encoding path to rebuild payloads field by field.
pub struct ByteWriter<'a> {
    /// Target buffer (typically the CAN frame under construction).
    buffer: &'a mut [u8],
    /// Current position expressed in bytes written.
    cursor: usize,
}

impl<'a> ByteWriter<'a> {
    /// Create a writer positioned at the start of the buffer.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Move the cursor to an absolute byte offset.
    pub fn seek(&mut self, position: usize) -> Result<(), ByteWriterError> {
        if position > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: position,
                available: self.buffer.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    fn put(&mut self, bytes: &[u8]) -> Result<(), ByteWriterError> {
        let end = self.cursor + bytes.len();
        if end > self.buffer.len() {
            return Err(ByteWriterError::OutOfBounds {
                asked: bytes.len(),
                available: self.buffer.len() - self.cursor,
            });
        }
        self.buffer[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), ByteWriterError> {
        self.put(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), ByteWriterError> {
        self.put(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), ByteWriterError> {
        self.put(&value.to_be_bytes())
    }

    /// Write the low bytes of `raw` for the given wire type. Range checking
    /// is the caller's job; out-of-range values are truncated.
    pub fn write_raw(&mut self, wire: WireType, raw: i64) -> Result<(), ByteWriterError> {
        match wire {
            WireType::U8 | WireType::I8 => self.write_u8(raw as u8),
            WireType::U16 | WireType::I16 => self.write_u16(raw as u16),
            WireType::U32 | WireType::I32 => self.write_u32(raw as u32),
        }
    }
}
