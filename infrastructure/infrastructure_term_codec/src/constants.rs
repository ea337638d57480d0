//! Wire Format Constants
//!
//! Defines the tag constants of the external term format, matching the
//! values in `lib/erl_interface/src/eidef.h` of the Erlang/OTP
//! distribution.

/// Small integer, signed 8-bit (SMALL_INTEGER_EXT)
pub const ERL_SMALL_INTEGER_EXT: u8 = 97;

/// Integer, signed 32-bit big-endian (INTEGER_EXT)
pub const ERL_INTEGER_EXT: u8 = 98;

/// Legacy string-formatted float (FLOAT_EXT); tolerated on decode only
pub const ERL_FLOAT_EXT: u8 = 99;

/// IEEE754 double, big-endian (NEW_FLOAT_EXT)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Atom with 2-byte length, Latin-1/ASCII (ATOM_EXT)
pub const ERL_ATOM_EXT: u8 = 100;

/// Atom with 2-byte length, UTF-8 (ATOM_UTF8_EXT)
pub const ERL_ATOM_UTF8_EXT: u8 = 118;

/// Atom with 1-byte length, Latin-1/ASCII (SMALL_ATOM_EXT)
pub const ERL_SMALL_ATOM_EXT: u8 = 115;

/// Atom with 1-byte length, UTF-8 (SMALL_ATOM_UTF8_EXT)
pub const ERL_SMALL_ATOM_UTF8_EXT: u8 = 119;

/// Binary with 4-byte length (BINARY_EXT)
pub const ERL_BINARY_EXT: u8 = 109;

/// Character list with 2-byte length (STRING_EXT)
pub const ERL_STRING_EXT: u8 = 107;

/// Tuple with 1-byte arity (SMALL_TUPLE_EXT)
pub const ERL_SMALL_TUPLE_EXT: u8 = 104;

/// Tuple with 4-byte arity (LARGE_TUPLE_EXT)
pub const ERL_LARGE_TUPLE_EXT: u8 = 105;

/// The empty list (NIL_EXT)
pub const ERL_NIL_EXT: u8 = 106;

/// List with 4-byte element count, followed by a tail term (LIST_EXT)
pub const ERL_LIST_EXT: u8 = 108;

/// Map with 4-byte pair count (MAP_EXT)
pub const ERL_MAP_EXT: u8 = 116;

/// Bignum with 1-byte digit count (SMALL_BIG_EXT)
pub const ERL_SMALL_BIG_EXT: u8 = 110;

/// Bignum with 4-byte digit count (LARGE_BIG_EXT)
pub const ERL_LARGE_BIG_EXT: u8 = 111;

/// Payload length of the legacy string-formatted float
pub const ERL_FLOAT_EXT_LEN: usize = 31;
