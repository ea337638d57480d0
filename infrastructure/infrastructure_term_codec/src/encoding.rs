//! Encoding Module
//!
//! Recursive tag-dispatch encoder from [`Term`] to external term format
//! bytes. The dispatch is an exhaustive match, so every term kind either
//! encodes or fails with an explicit error; nothing is silently dropped.

use std::fmt;

use entities_terms::Term;
use infrastructure_byte_stream::ByteWriter;
use malachite::base::num::arithmetic::traits::{DivRem, UnsignedAbs};
use malachite::base::num::basic::traits::Zero;
use malachite::{Integer, Natural};

use crate::constants::{
    ERL_BINARY_EXT, ERL_INTEGER_EXT, ERL_LARGE_BIG_EXT, ERL_LARGE_TUPLE_EXT, ERL_LIST_EXT,
    ERL_MAP_EXT, ERL_NIL_EXT, ERL_SMALL_ATOM_EXT, ERL_SMALL_ATOM_UTF8_EXT, ERL_SMALL_BIG_EXT,
    ERL_SMALL_INTEGER_EXT, ERL_SMALL_TUPLE_EXT, ERL_STRING_EXT, ERL_ATOM_EXT, ERL_ATOM_UTF8_EXT,
    NEW_FLOAT_EXT,
};
use crate::{DEFAULT_MAX_DEPTH, VERSION_MAGIC};

/// Encoding error types
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// Term has no external format representation
    UnencodableTerm(String),
    /// Nesting depth exceeded the configured bound
    DepthExceeded,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::UnencodableTerm(msg) => write!(f, "Unencodable term: {}", msg),
            EncodeError::DepthExceeded => write!(f, "Maximum nesting depth exceeded"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// Encode a term to external format.
///
/// Writes the version magic byte (131) followed by the recursively encoded
/// term, with the default nesting bound.
///
/// # Arguments
/// * `term` - The term to encode
///
/// # Returns
/// * `Ok(Vec<u8>)` - Encoded message
/// * `Err(EncodeError)` - Encoding error; no partial bytes are surfaced
pub fn encode_term(term: &Term) -> Result<Vec<u8>, EncodeError> {
    encode_term_bounded(term, DEFAULT_MAX_DEPTH)
}

/// Encode a term to external format with an explicit nesting bound.
///
/// # Arguments
/// * `term` - The term to encode
/// * `max_depth` - Maximum nesting depth before `DepthExceeded`
pub fn encode_term_bounded(term: &Term, max_depth: usize) -> Result<Vec<u8>, EncodeError> {
    let mut writer = ByteWriter::new();
    writer.write_u8(VERSION_MAGIC);
    enc_term(&mut writer, term, max_depth)?;
    Ok(writer.into_bytes())
}

/// Internal recursive encoder (no version magic byte).
fn enc_term(writer: &mut ByteWriter, term: &Term, depth: usize) -> Result<(), EncodeError> {
    if depth == 0 {
        return Err(EncodeError::DepthExceeded);
    }
    match term {
        Term::Atom(name) => enc_atom(writer, name),
        Term::Binary(data) => {
            let bytes = data.as_bytes();
            let len = u32::try_from(bytes.len()).map_err(|_| {
                EncodeError::UnencodableTerm("binary longer than 4-byte length field".to_string())
            })?;
            writer.write_u8(ERL_BINARY_EXT);
            writer.write_u32(len);
            writer.write_bytes(bytes);
            Ok(())
        }
        Term::CharList(chars) => {
            let bytes = chars.as_bytes();
            let len = u16::try_from(bytes.len()).map_err(|_| {
                EncodeError::UnencodableTerm("character list longer than 65535 bytes".to_string())
            })?;
            writer.write_u8(ERL_STRING_EXT);
            writer.write_u16(len);
            writer.write_bytes(bytes);
            Ok(())
        }
        Term::Integer(value) => {
            enc_integer(writer, *value);
            Ok(())
        }
        Term::BigInt(value) => {
            enc_bignum(writer, value);
            Ok(())
        }
        Term::Float(value) => {
            if !value.is_finite() {
                return Err(EncodeError::UnencodableTerm(format!(
                    "non-finite float {}",
                    value
                )));
            }
            writer.write_u8(NEW_FLOAT_EXT);
            writer.write_f64(*value);
            Ok(())
        }
        Term::Tuple(elements) => {
            if elements.len() < 256 {
                writer.write_u8(ERL_SMALL_TUPLE_EXT);
                writer.write_u8(elements.len() as u8);
            } else {
                let arity = u32::try_from(elements.len()).map_err(|_| {
                    EncodeError::UnencodableTerm("tuple arity exceeds 4-byte field".to_string())
                })?;
                writer.write_u8(ERL_LARGE_TUPLE_EXT);
                writer.write_u32(arity);
            }
            for element in elements {
                enc_term(writer, element, depth - 1)?;
            }
            Ok(())
        }
        Term::List(elements) => {
            // The empty list is just the nil terminator.
            if !elements.is_empty() {
                let count = u32::try_from(elements.len()).map_err(|_| {
                    EncodeError::UnencodableTerm("list length exceeds 4-byte field".to_string())
                })?;
                writer.write_u8(ERL_LIST_EXT);
                writer.write_u32(count);
                for element in elements {
                    enc_term(writer, element, depth - 1)?;
                }
            }
            writer.write_u8(ERL_NIL_EXT);
            Ok(())
        }
        Term::Map(pairs) => {
            let count = u32::try_from(pairs.len()).map_err(|_| {
                EncodeError::UnencodableTerm("map size exceeds 4-byte field".to_string())
            })?;
            writer.write_u8(ERL_MAP_EXT);
            writer.write_u32(count);
            for (key, value) in pairs {
                enc_term(writer, key, depth - 1)?;
                enc_term(writer, value, depth - 1)?;
            }
            Ok(())
        }
    }
}

/// Encode an atom.
///
/// Length width (1 or 2 bytes) is chosen by byte length; the Latin-1 tags
/// are used when the name is pure ASCII, the UTF-8 tags otherwise.
fn enc_atom(writer: &mut ByteWriter, name: &str) -> Result<(), EncodeError> {
    let bytes = name.as_bytes();
    // One UTF-8 byte per char means the name is ASCII.
    let ascii = bytes.len() == name.chars().count();
    if bytes.len() < 256 {
        writer.write_u8(if ascii {
            ERL_SMALL_ATOM_EXT
        } else {
            ERL_SMALL_ATOM_UTF8_EXT
        });
        writer.write_u8(bytes.len() as u8);
    } else if bytes.len() <= u16::MAX as usize {
        writer.write_u8(if ascii { ERL_ATOM_EXT } else { ERL_ATOM_UTF8_EXT });
        writer.write_u16(bytes.len() as u16);
    } else {
        return Err(EncodeError::UnencodableTerm(
            "atom longer than 65535 bytes".to_string(),
        ));
    }
    writer.write_bytes(bytes);
    Ok(())
}

/// Encode an `i64` with canonical smallest width: 8-bit, 32-bit, or bignum.
fn enc_integer(writer: &mut ByteWriter, value: i64) {
    if let Ok(small) = i8::try_from(value) {
        writer.write_u8(ERL_SMALL_INTEGER_EXT);
        writer.write_i8(small);
    } else if let Ok(word) = i32::try_from(value) {
        writer.write_u8(ERL_INTEGER_EXT);
        writer.write_i32(word);
    } else {
        enc_bignum_digits(writer, value < 0, i64_magnitude_digits(value));
    }
}

/// Little-endian base-256 digits of an `i64` magnitude.
fn i64_magnitude_digits(value: i64) -> Vec<u8> {
    let mut digits = Vec::new();
    let mut quot = value.unsigned_abs();
    while quot != 0 {
        digits.push((quot & 0xff) as u8);
        quot >>= 8;
    }
    digits
}

/// Encode an arbitrary-precision integer on the bignum path.
fn enc_bignum(writer: &mut ByteWriter, value: &Integer) {
    let negative = *value < Integer::ZERO;
    let mut magnitude: Natural = value.clone().unsigned_abs();
    let mut digits = Vec::new();
    let base = Natural::from(256u32);
    while magnitude != Natural::ZERO {
        let (quot, rem) = magnitude.div_rem(base.clone());
        digits.push(u8::try_from(&rem).unwrap_or(0));
        magnitude = quot;
    }
    enc_bignum_digits(writer, negative, digits);
}

/// Write sign + little-endian digits under the small/large bignum tag.
fn enc_bignum_digits(writer: &mut ByteWriter, negative: bool, digits: Vec<u8>) {
    if digits.len() < 256 {
        writer.write_u8(ERL_SMALL_BIG_EXT);
        writer.write_u8(digits.len() as u8);
    } else {
        writer.write_u8(ERL_LARGE_BIG_EXT);
        writer.write_u32(digits.len() as u32);
    }
    writer.write_u8(u8::from(negative));
    writer.write_bytes(&digits);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_atom() {
        let term = Term::Atom("foo".to_string());
        let encoded = encode_term(&term).unwrap();
        assert_eq!(encoded, vec![131, 115, 3, b'f', b'o', b'o']);
    }

    #[test]
    fn test_encode_atom_utf8() {
        // "héllo" has 6 UTF-8 bytes but 5 chars, so the UTF-8 tag is used.
        let term = Term::Atom("héllo".to_string());
        let encoded = encode_term(&term).unwrap();
        assert_eq!(encoded[1], 119); // SMALL_ATOM_UTF8_EXT
        assert_eq!(encoded[2], 6); // byte length
    }

    #[test]
    fn test_encode_long_atom_uses_two_byte_length() {
        let name = "a".repeat(300);
        let encoded = encode_term(&Term::Atom(name)).unwrap();
        assert_eq!(encoded[1], 100); // ATOM_EXT
        assert_eq!(&encoded[2..4], &[1, 44]); // 300 big-endian
    }

    #[test]
    fn test_encode_zero() {
        let encoded = encode_term(&Term::Integer(0)).unwrap();
        assert_eq!(encoded, vec![131, 97, 0]);
    }

    #[test]
    fn test_encode_negative_small_integer() {
        let encoded = encode_term(&Term::Integer(-5)).unwrap();
        assert_eq!(encoded, vec![131, 97, 251]); // -5 as two's complement
    }

    #[test]
    fn test_encode_1000_uses_32_bit_path() {
        let encoded = encode_term(&Term::Integer(1000)).unwrap();
        assert_eq!(encoded, vec![131, 98, 0, 0, 3, 232]);
    }

    #[test]
    fn test_encode_beyond_32_bit_uses_bignum_path() {
        let encoded = encode_term(&Term::Integer(1 << 40)).unwrap();
        assert_eq!(encoded[1], 110); // SMALL_BIG_EXT
        assert_eq!(encoded[2], 6); // digit count
        assert_eq!(encoded[3], 0); // sign
        assert_eq!(&encoded[4..], &[0, 0, 0, 0, 0, 1]); // little-endian digits
    }

    #[test]
    fn test_bignum_digits_of_256() {
        let encoded = encode_term(&Term::BigInt(Integer::from(256))).unwrap();
        // sign 0, digits [0, 1] little-endian
        assert_eq!(encoded, vec![131, 110, 2, 0, 0, 1]);
    }

    #[test]
    fn test_encode_negative_bignum() {
        let value = -(Integer::from(i64::MAX) + Integer::from(1));
        let encoded = encode_term(&Term::BigInt(value)).unwrap();
        assert_eq!(encoded[1], 110);
        assert_eq!(encoded[2], 8); // digit count for 2^63
        assert_eq!(encoded[3], 1); // negative
        assert_eq!(&encoded[4..], &[0, 0, 0, 0, 0, 0, 0, 128]);
    }

    #[test]
    fn test_encode_float_carries_tag() {
        let encoded = encode_term(&Term::Float(1.5)).unwrap();
        assert_eq!(encoded[1], 70); // NEW_FLOAT_EXT
        assert_eq!(&encoded[2..], &1.5f64.to_be_bytes());
    }

    #[test]
    fn test_encode_nan_fails() {
        let result = encode_term(&Term::Float(f64::NAN));
        assert!(matches!(result, Err(EncodeError::UnencodableTerm(_))));
    }

    #[test]
    fn test_encode_infinity_fails() {
        let result = encode_term(&Term::Float(f64::INFINITY));
        assert!(matches!(result, Err(EncodeError::UnencodableTerm(_))));
    }

    #[test]
    fn test_encode_empty_list_is_nil_only() {
        let encoded = encode_term(&Term::List(vec![])).unwrap();
        assert_eq!(encoded, vec![131, 106]);
    }

    #[test]
    fn test_encode_list_has_count_and_terminator() {
        let term = Term::List(vec![Term::Integer(1), Term::Integer(2)]);
        let encoded = encode_term(&term).unwrap();
        assert_eq!(
            encoded,
            vec![131, 108, 0, 0, 0, 2, 97, 1, 97, 2, 106]
        );
    }

    #[test]
    fn test_encode_small_tuple() {
        let term = Term::Tuple(vec![Term::Atom("ok".to_string()), Term::Integer(1)]);
        let encoded = encode_term(&term).unwrap();
        assert_eq!(
            encoded,
            vec![131, 104, 2, 115, 2, b'o', b'k', 97, 1]
        );
    }

    #[test]
    fn test_encode_large_tuple() {
        let term = Term::Tuple(vec![Term::Integer(0); 256]);
        let encoded = encode_term(&term).unwrap();
        assert_eq!(encoded[1], 105); // LARGE_TUPLE_EXT
        assert_eq!(&encoded[2..6], &[0, 0, 1, 0]); // arity 256
    }

    #[test]
    fn test_encode_binary() {
        let encoded = encode_term(&Term::Binary("hi".to_string())).unwrap();
        assert_eq!(encoded, vec![131, 109, 0, 0, 0, 2, b'h', b'i']);
    }

    #[test]
    fn test_encode_char_list() {
        let encoded = encode_term(&Term::CharList("hi".to_string())).unwrap();
        assert_eq!(encoded, vec![131, 107, 0, 2, b'h', b'i']);
    }

    #[test]
    fn test_encode_map() {
        let term = Term::Map(vec![(Term::Atom("a".to_string()), Term::Integer(1))]);
        let encoded = encode_term(&term).unwrap();
        assert_eq!(
            encoded,
            vec![131, 116, 0, 0, 0, 1, 115, 1, b'a', 97, 1]
        );
    }

    #[test]
    fn test_depth_bound() {
        let mut term = Term::Integer(0);
        for _ in 0..10 {
            term = Term::List(vec![term]);
        }
        assert!(encode_term_bounded(&term, 5).is_err());
        assert!(encode_term_bounded(&term, 20).is_ok());
    }

    #[test]
    fn test_failed_encode_surfaces_no_bytes() {
        let term = Term::Tuple(vec![Term::Integer(1), Term::Float(f64::NAN)]);
        let result = encode_term(&term);
        assert!(matches!(result, Err(EncodeError::UnencodableTerm(_))));
    }
}
