//! Reader Module
//!
//! Cursor-based byte reader over a borrowed slice. All multi-byte fields
//! are read big-endian, mirroring [`crate::writer::ByteWriter`].

use std::fmt;
use std::io::{Cursor, Read};

/// Reader error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// Read past the end of the buffer
    UnexpectedEof,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::UnexpectedEof => write!(f, "Unexpected end of data"),
        }
    }
}

impl std::error::Error for ReadError {}

/// Big-endian byte reader over a borrowed slice.
#[derive(Debug)]
pub struct ByteReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> ByteReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        let total = self.cursor.get_ref().len();
        total.saturating_sub(self.cursor.position() as usize)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let mut buf = [0u8; 1];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(buf[0])
    }

    /// Read an unsigned 16-bit value, big-endian.
    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        let mut buf = [0u8; 2];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Read an unsigned 32-bit value, big-endian.
    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        let mut buf = [0u8; 4];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(u32::from_be_bytes(buf))
    }

    /// Read a signed 8-bit value (two's complement byte).
    pub fn read_i8(&mut self) -> Result<i8, ReadError> {
        Ok(self.read_u8()? as i8)
    }

    /// Read a signed 32-bit value, big-endian.
    pub fn read_i32(&mut self) -> Result<i32, ReadError> {
        let mut buf = [0u8; 4];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(i32::from_be_bytes(buf))
    }

    /// Read an IEEE754 double, big-endian.
    pub fn read_f64(&mut self) -> Result<f64, ReadError> {
        let mut buf = [0u8; 8];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(f64::from_be_bytes(buf))
    }

    /// Read `len` raw bytes.
    ///
    /// The length is validated against the remaining input before
    /// allocating, so a corrupt length field cannot trigger a huge
    /// allocation.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, ReadError> {
        if len > self.remaining() {
            return Err(ReadError::UnexpectedEof);
        }
        let mut buf = vec![0u8; len];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| ReadError::UnexpectedEof)?;
        Ok(buf)
    }
}
