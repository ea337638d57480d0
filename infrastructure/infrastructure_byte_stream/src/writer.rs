//! Writer Module
//!
//! Append-only byte writer. All multi-byte fields are written big-endian,
//! matching the external term format's network byte order.

/// Append-only big-endian byte writer.
#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create a writer with preallocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Write an unsigned 16-bit value, big-endian.
    pub fn write_u16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write an unsigned 32-bit value, big-endian.
    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write a signed 8-bit value (two's complement byte).
    pub fn write_i8(&mut self, value: i8) {
        self.buf.push(value as u8);
    }

    /// Write a signed 32-bit value, big-endian.
    pub fn write_i32(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write an IEEE754 double, big-endian.
    pub fn write_f64(&mut self, value: f64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Write raw bytes verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer and return the final byte snapshot.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_u8() {
        let mut writer = ByteWriter::new();
        writer.write_u8(131);
        assert_eq!(writer.into_bytes(), vec![131]);
    }

    #[test]
    fn test_write_u16_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u16(0x0102);
        assert_eq!(writer.into_bytes(), vec![1, 2]);
    }

    #[test]
    fn test_write_u32_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_u32(1000);
        assert_eq!(writer.into_bytes(), vec![0, 0, 3, 232]);
    }

    #[test]
    fn test_write_i8_twos_complement() {
        let mut writer = ByteWriter::new();
        writer.write_i8(-5);
        assert_eq!(writer.into_bytes(), vec![251]);
    }

    #[test]
    fn test_write_i32_negative() {
        let mut writer = ByteWriter::new();
        writer.write_i32(-1);
        assert_eq!(writer.into_bytes(), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_write_f64_big_endian() {
        let mut writer = ByteWriter::new();
        writer.write_f64(1.0);
        assert_eq!(writer.into_bytes(), vec![63, 240, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_write_bytes_and_len() {
        let mut writer = ByteWriter::new();
        assert!(writer.is_empty());
        writer.write_bytes(b"foo");
        assert_eq!(writer.len(), 3);
        assert_eq!(writer.as_slice(), b"foo");
    }

    #[test]
    fn test_mixed_fields_append_in_order() {
        let mut writer = ByteWriter::with_capacity(8);
        writer.write_u8(104);
        writer.write_u8(2);
        writer.write_u16(7);
        assert_eq!(writer.into_bytes(), vec![104, 2, 0, 7]);
    }
}
