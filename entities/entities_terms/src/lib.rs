//! Entities Layer: BERT Term Model
//!
//! Provides the value model for the BERT (Binary ERlang Term) codec. A
//! [`Term`] is a host-side representation of an Erlang term, rich enough to
//! round-trip through the external term format without ambiguity.
//!
//! ## Overview
//!
//! Erlang distinguishes term kinds (atoms, binaries, character lists, ...)
//! that collapse onto the same host types in dynamically-typed peers. This
//! crate resolves that ambiguity with an explicit discriminated type instead
//! of convention-only tagging:
//!
//! - **[`term`](term/index.html)**: the [`Term`] enum, normalizing
//!   constructors, map lookup, and Erlang-flavored display
//!
//! - **[`sigil`](sigil/index.html)**: the string-sigil convention
//!   (`:atom`, `.binary`, `$charlist`) used when terms arrive as tagged
//!   host strings
//!
//! Arbitrary-precision integers use `malachite::Integer`, so bignum values
//! beyond the `i64` range are represented exactly.

pub mod sigil;
pub mod term;

pub use sigil::{SIGIL_ATOM, SIGIL_BINARY, SIGIL_CHAR_LIST};
pub use term::Term;
