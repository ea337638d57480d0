//! Infrastructure Layer: Term Codec
//!
//! Provides external term format (BERT) encoding/decoding for the term
//! model in `entities_terms`. The format is the tagged binary encoding used
//! by `erlang:term_to_binary/1` and `erlang:binary_to_term/1`: every
//! message starts with a version magic byte (131), and every term on the
//! wire is self-delimiting behind a one-byte tag.
//!
//! ## Modules
//!
//! - **[`encoding`](encoding/index.html)**: recursive tag-dispatch encoder
//!   (`encode_term`, `encode_term_bounded`)
//!
//! - **[`decoding`](decoding/index.html)**: the mirror-image decoder
//!   (`decode_term`, `decode_term_bounded`)
//!
//! - **[`size_calculation`](size_calculation/index.html)**: exact encoded
//!   size without encoding (`encoded_size`)
//!
//! - **[`constants`](constants/index.html)**: wire tag constants
//!
//! Both directions are pure and reentrant; each call owns its byte buffer
//! and recursion depth is bounded explicitly, so adversarially nested input
//! fails with a depth error instead of exhausting the stack.

pub mod constants;
pub mod decoding;
pub mod encoding;
pub mod size_calculation;

pub use decoding::{decode_term, decode_term_bounded, DecodeError};
pub use encoding::{encode_term, encode_term_bounded, EncodeError};
pub use size_calculation::{encoded_size, SizeCalculationError};

/// External term format version magic byte (131), the message envelope tag.
pub const VERSION_MAGIC: u8 = 131;

/// Default bound on term nesting depth for both encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 1000;
