//! Decoding Module
//!
//! Recursive tag-dispatch decoder from external term format bytes back to
//! [`Term`]. The tag set mirrors the encoder's; an unrecognized tag is an
//! explicit error, never an undefined result.

use std::fmt;

use entities_terms::Term;
use infrastructure_byte_stream::{ByteReader, ReadError};
use malachite::base::num::basic::traits::Zero;
use malachite::{Integer, Natural};

use crate::constants::{
    ERL_ATOM_EXT, ERL_ATOM_UTF8_EXT, ERL_BINARY_EXT, ERL_FLOAT_EXT, ERL_FLOAT_EXT_LEN,
    ERL_INTEGER_EXT, ERL_LARGE_BIG_EXT, ERL_LARGE_TUPLE_EXT, ERL_LIST_EXT, ERL_MAP_EXT,
    ERL_NIL_EXT, ERL_SMALL_ATOM_EXT, ERL_SMALL_ATOM_UTF8_EXT, ERL_SMALL_BIG_EXT,
    ERL_SMALL_INTEGER_EXT, ERL_SMALL_TUPLE_EXT, ERL_STRING_EXT, NEW_FLOAT_EXT,
};
use crate::{DEFAULT_MAX_DEPTH, VERSION_MAGIC};

/// Preallocation cap for length-prefixed collections; a corrupt count
/// field must not reserve gigabytes before the reads start failing.
const MAX_PREALLOC: usize = 4096;

/// Decoding error types
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Leading byte is not the version magic byte (131)
    InvalidEnvelope(u8),
    /// Unrecognized term tag
    UnknownTag(u8),
    /// Input ended inside a term
    BufferTooShort,
    /// Text payload is not valid UTF-8
    InvalidUtf8(String),
    /// Nesting depth exceeded the configured bound
    DepthExceeded,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidEnvelope(byte) => {
                write!(f, "Invalid envelope byte {} (expected 131)", byte)
            }
            DecodeError::UnknownTag(tag) => write!(f, "Unknown term tag {}", tag),
            DecodeError::BufferTooShort => write!(f, "Buffer too short"),
            DecodeError::InvalidUtf8(msg) => write!(f, "Invalid UTF-8 payload: {}", msg),
            DecodeError::DepthExceeded => write!(f, "Maximum nesting depth exceeded"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<ReadError> for DecodeError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::UnexpectedEof => DecodeError::BufferTooShort,
        }
    }
}

/// Decode a term from external format.
///
/// Checks the version magic byte (131), then decodes exactly one term with
/// the default nesting bound. Bytes after the decoded term are ignored.
///
/// # Arguments
/// * `data` - Encoded message
///
/// # Returns
/// * `Ok(Term)` - Decoded term
/// * `Err(DecodeError)` - Decoding error; terminal for this call
pub fn decode_term(data: &[u8]) -> Result<Term, DecodeError> {
    decode_term_bounded(data, DEFAULT_MAX_DEPTH)
}

/// Decode a term from external format with an explicit nesting bound.
pub fn decode_term_bounded(data: &[u8], max_depth: usize) -> Result<Term, DecodeError> {
    let mut reader = ByteReader::new(data);
    let envelope = reader.read_u8()?;
    if envelope != VERSION_MAGIC {
        return Err(DecodeError::InvalidEnvelope(envelope));
    }
    dec_term(&mut reader, max_depth)
}

/// Internal recursive decoder (version magic byte already consumed).
fn dec_term(reader: &mut ByteReader, depth: usize) -> Result<Term, DecodeError> {
    if depth == 0 {
        return Err(DecodeError::DepthExceeded);
    }
    let tag = reader.read_u8()?;
    match tag {
        ERL_SMALL_INTEGER_EXT => Ok(Term::Integer(reader.read_i8()? as i64)),
        ERL_INTEGER_EXT => Ok(Term::Integer(reader.read_i32()? as i64)),
        NEW_FLOAT_EXT => Ok(Term::Float(reader.read_f64()?)),
        ERL_FLOAT_EXT => {
            // Legacy string-formatted float: consume the fixed payload and
            // return a zero placeholder, tolerated for backward
            // compatibility only.
            reader.read_bytes(ERL_FLOAT_EXT_LEN)?;
            Ok(Term::Float(0.0))
        }
        ERL_ATOM_EXT | ERL_ATOM_UTF8_EXT => {
            let len = reader.read_u16()? as usize;
            Ok(Term::Atom(dec_utf8(reader, len)?))
        }
        ERL_SMALL_ATOM_EXT | ERL_SMALL_ATOM_UTF8_EXT => {
            let len = reader.read_u8()? as usize;
            Ok(Term::Atom(dec_utf8(reader, len)?))
        }
        ERL_BINARY_EXT => {
            let len = reader.read_u32()? as usize;
            Ok(Term::Binary(dec_utf8(reader, len)?))
        }
        ERL_STRING_EXT => {
            let len = reader.read_u16()? as usize;
            Ok(Term::CharList(dec_utf8(reader, len)?))
        }
        ERL_SMALL_TUPLE_EXT => {
            let arity = reader.read_u8()? as usize;
            dec_tuple(reader, arity, depth)
        }
        ERL_LARGE_TUPLE_EXT => {
            let arity = reader.read_u32()? as usize;
            dec_tuple(reader, arity, depth)
        }
        ERL_NIL_EXT => Ok(Term::List(Vec::new())),
        ERL_LIST_EXT => dec_list(reader, depth),
        ERL_MAP_EXT => dec_map(reader, depth),
        ERL_SMALL_BIG_EXT => {
            let digit_count = reader.read_u8()? as usize;
            dec_bignum(reader, digit_count)
        }
        ERL_LARGE_BIG_EXT => {
            let digit_count = reader.read_u32()? as usize;
            dec_bignum(reader, digit_count)
        }
        other => Err(DecodeError::UnknownTag(other)),
    }
}

/// Read `len` bytes and decode them as UTF-8 text.
fn dec_utf8(reader: &mut ByteReader, len: usize) -> Result<String, DecodeError> {
    let bytes = reader.read_bytes(len)?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
}

/// Decode `arity` elements into a tuple.
fn dec_tuple(reader: &mut ByteReader, arity: usize, depth: usize) -> Result<Term, DecodeError> {
    let mut elements = Vec::with_capacity(arity.min(MAX_PREALLOC));
    for _ in 0..arity {
        elements.push(dec_term(reader, depth - 1)?);
    }
    Ok(Term::Tuple(elements))
}

/// Decode a list: `count` elements followed by a tail term.
///
/// A nil tail marks a proper list and is discarded; any other tail is
/// appended as an ordinary trailing element, so the proper/improper
/// distinction is not preserved.
fn dec_list(reader: &mut ByteReader, depth: usize) -> Result<Term, DecodeError> {
    let count = reader.read_u32()? as usize;
    let mut elements = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        elements.push(dec_term(reader, depth - 1)?);
    }
    let tail = dec_term(reader, depth - 1)?;
    if !tail.is_nil() {
        elements.push(tail);
    }
    Ok(Term::List(elements))
}

/// Decode a map; later duplicate keys overwrite earlier ones.
fn dec_map(reader: &mut ByteReader, depth: usize) -> Result<Term, DecodeError> {
    let count = reader.read_u32()? as usize;
    let mut pairs = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        let key = dec_term(reader, depth - 1)?;
        let value = dec_term(reader, depth - 1)?;
        pairs.push((key, value));
    }
    Ok(Term::map_from_pairs(pairs))
}

/// Decode sign byte + little-endian base-256 digits.
///
/// Reconstruction goes through `malachite::Integer`, so any magnitude is
/// exact; values fitting `i64` collapse to `Term::Integer`.
fn dec_bignum(reader: &mut ByteReader, digit_count: usize) -> Result<Term, DecodeError> {
    let sign = reader.read_u8()?;
    let digits = reader.read_bytes(digit_count)?;
    let mut magnitude = Natural::ZERO;
    let base = Natural::from(256u32);
    for &digit in digits.iter().rev() {
        magnitude = magnitude * base.clone() + Natural::from(digit);
    }
    let mut value = Integer::from(magnitude);
    if sign != 0 {
        value = -value;
    }
    Ok(Term::integer_from_big(value))
}
