//! Infrastructure Layer: Byte Stream
//!
//! Provides the byte-cursor collaborators used by the term codec: a
//! [`ByteWriter`] that appends fixed-width big-endian fields to a growing
//! buffer and yields an immutable snapshot, and a [`ByteReader`] that reads
//! the same fields back from a borrowed slice.
//!
//! ## Modules
//!
//! - **[`writer`](writer/index.html)**: append-only big-endian writer
//! - **[`reader`](reader/index.html)**: cursor-based big-endian reader
//!
//! Both sides are deliberately codec-agnostic; they know byte widths and
//! byte order, never tags.

pub mod reader;
pub mod writer;

pub use reader::{ByteReader, ReadError};
pub use writer::ByteWriter;
