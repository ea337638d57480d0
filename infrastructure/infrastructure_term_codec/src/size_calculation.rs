//! Size Calculation Module
//!
//! Computes the exact encoded size of a term without encoding it, for
//! callers that preallocate buffers. Width decisions mirror the encoder,
//! so `encoded_size(t)` always equals `encode_term(t)?.len()`.

use std::fmt;

use entities_terms::Term;
use malachite::base::num::logic::traits::SignificantBits;

use crate::DEFAULT_MAX_DEPTH;

/// Size calculation error types
#[derive(Debug, Clone, PartialEq)]
pub enum SizeCalculationError {
    /// Term has no external format representation
    UnencodableTerm(String),
    /// Nesting depth exceeded the configured bound
    DepthExceeded,
}

impl fmt::Display for SizeCalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeCalculationError::UnencodableTerm(msg) => {
                write!(f, "Unencodable term: {}", msg)
            }
            SizeCalculationError::DepthExceeded => {
                write!(f, "Maximum nesting depth exceeded")
            }
        }
    }
}

impl std::error::Error for SizeCalculationError {}

/// Exact encoded byte count of a term, version magic byte included.
///
/// # Arguments
/// * `term` - The term to measure
///
/// # Returns
/// * `Ok(size)` - Byte count `encode_term` would produce
/// * `Err(SizeCalculationError)` - Term is not encodable
pub fn encoded_size(term: &Term) -> Result<usize, SizeCalculationError> {
    Ok(1 + term_size(term, DEFAULT_MAX_DEPTH)?)
}

fn term_size(term: &Term, depth: usize) -> Result<usize, SizeCalculationError> {
    if depth == 0 {
        return Err(SizeCalculationError::DepthExceeded);
    }
    match term {
        Term::Atom(name) => {
            let len = name.len();
            if len < 256 {
                Ok(2 + len)
            } else if len <= u16::MAX as usize {
                Ok(3 + len)
            } else {
                Err(SizeCalculationError::UnencodableTerm(
                    "atom longer than 65535 bytes".to_string(),
                ))
            }
        }
        Term::Binary(data) => {
            if u32::try_from(data.len()).is_err() {
                return Err(SizeCalculationError::UnencodableTerm(
                    "binary longer than 4-byte length field".to_string(),
                ));
            }
            Ok(5 + data.len())
        }
        Term::CharList(chars) => {
            if u16::try_from(chars.len()).is_err() {
                return Err(SizeCalculationError::UnencodableTerm(
                    "character list longer than 65535 bytes".to_string(),
                ));
            }
            Ok(3 + chars.len())
        }
        Term::Integer(value) => {
            if i8::try_from(*value).is_ok() {
                Ok(2)
            } else if i32::try_from(*value).is_ok() {
                Ok(5)
            } else {
                let digit_count = (64 - value.unsigned_abs().leading_zeros() as usize + 7) / 8;
                Ok(3 + digit_count)
            }
        }
        Term::BigInt(value) => {
            let bits = value.significant_bits() as usize;
            let digit_count = (bits + 7) / 8;
            if digit_count < 256 {
                Ok(3 + digit_count)
            } else {
                Ok(6 + digit_count)
            }
        }
        Term::Float(value) => {
            if !value.is_finite() {
                return Err(SizeCalculationError::UnencodableTerm(format!(
                    "non-finite float {}",
                    value
                )));
            }
            Ok(9)
        }
        Term::Tuple(elements) => {
            let header = if elements.len() < 256 { 2 } else { 5 };
            sum_sizes(elements.iter(), depth).map(|total| header + total)
        }
        Term::List(elements) => {
            if elements.is_empty() {
                return Ok(1);
            }
            // list tag + count + elements + nil terminator
            sum_sizes(elements.iter(), depth).map(|total| 5 + total + 1)
        }
        Term::Map(pairs) => {
            let mut total = 5;
            for (key, value) in pairs {
                total += term_size(key, depth - 1)?;
                total += term_size(value, depth - 1)?;
            }
            Ok(total)
        }
    }
}

fn sum_sizes<'a, I>(terms: I, depth: usize) -> Result<usize, SizeCalculationError>
where
    I: Iterator<Item = &'a Term>,
{
    let mut total = 0;
    for term in terms {
        total += term_size(term, depth - 1)?;
    }
    Ok(total)
}
