//! Term Module
//!
//! Defines the [`Term`] enum, the host-side representation of an Erlang term.
//! Each variant corresponds to one family of external term format tags, so
//! encoding and decoding are exhaustive matches rather than type inspection.

use std::fmt;

use malachite::Integer;

/// A single Erlang term.
///
/// String-like kinds keep their text as UTF-8 `String`s; the wire carries
/// the raw UTF-8 bytes with a kind-specific tag and length width. Integers
/// that fit `i64` use [`Term::Integer`]; anything larger is an exact
/// [`Term::BigInt`]. The empty list `[]` (the nil term) is
/// `Term::List(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Atom (symbolic constant), e.g. `ok`
    Atom(String),
    /// Binary (byte string), 4-byte length on the wire
    Binary(String),
    /// Character list (Erlang "string"), 2-byte length on the wire
    CharList(String),
    /// Integer within the `i64` range
    Integer(i64),
    /// Arbitrary-precision integer outside the `i64` range
    BigInt(Integer),
    /// IEEE754 double-precision float
    Float(f64),
    /// Tuple with fixed arity
    Tuple(Vec<Term>),
    /// Proper list; improper tails are folded in as a trailing element
    List(Vec<Term>),
    /// Map as key/value pairs in enumeration (encode) or wire (decode) order
    Map(Vec<(Term, Term)>),
}

impl Term {
    /// Build an integer term from an arbitrary-precision value.
    ///
    /// Values that fit `i64` collapse to [`Term::Integer`], so a term
    /// compares equal after a round trip no matter which wire width
    /// carried it.
    pub fn integer_from_big(value: Integer) -> Term {
        match i64::try_from(&value) {
            Ok(small) => Term::Integer(small),
            Err(_) => Term::BigInt(value),
        }
    }

    /// Build a map term from decoded key/value pairs.
    ///
    /// Later duplicate keys overwrite earlier ones; first-occurrence
    /// position is kept.
    pub fn map_from_pairs(pairs: Vec<(Term, Term)>) -> Term {
        let mut entries: Vec<(Term, Term)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }
        Term::Map(entries)
    }

    /// Look up a key in a map term.
    ///
    /// Returns `None` for non-map terms and for absent keys.
    pub fn map_get(&self, key: &Term) -> Option<&Term> {
        match self {
            Term::Map(pairs) => pairs
                .iter()
                .find(|(entry_key, _)| entry_key == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// True for the nil term (the empty list).
    pub fn is_nil(&self) -> bool {
        matches!(self, Term::List(elements) if elements.is_empty())
    }
}

impl fmt::Display for Term {
    /// Erlang-flavored rendering: `foo`, `<<"bytes">>`, `"chars"`,
    /// `{a, b}`, `[1, 2]`, `#{k => v}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write!(f, "{}", name),
            Term::Binary(data) => write!(f, "<<\"{}\">>", data),
            Term::CharList(chars) => write!(f, "\"{}\"", chars),
            Term::Integer(value) => write!(f, "{}", value),
            Term::BigInt(value) => write!(f, "{}", value),
            Term::Float(value) => write!(f, "{}", value),
            Term::Tuple(elements) => {
                write!(f, "{{")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "}}")
            }
            Term::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", element)?;
                }
                write!(f, "]")
            }
            Term::Map(pairs) => {
                write!(f, "#{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{} => {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_from_big_collapses_small_values() {
        let term = Term::integer_from_big(Integer::from(42));
        assert_eq!(term, Term::Integer(42));
    }

    #[test]
    fn test_integer_from_big_keeps_large_values() {
        let value = Integer::from(i64::MAX) * Integer::from(2);
        let term = Term::integer_from_big(value.clone());
        assert_eq!(term, Term::BigInt(value));
    }

    #[test]
    fn test_integer_from_big_i64_boundaries() {
        assert_eq!(
            Term::integer_from_big(Integer::from(i64::MAX)),
            Term::Integer(i64::MAX)
        );
        assert_eq!(
            Term::integer_from_big(Integer::from(i64::MIN)),
            Term::Integer(i64::MIN)
        );
    }

    #[test]
    fn test_map_from_pairs_overwrites_duplicates() {
        let term = Term::map_from_pairs(vec![
            (Term::Atom("a".to_string()), Term::Integer(1)),
            (Term::Atom("b".to_string()), Term::Integer(2)),
            (Term::Atom("a".to_string()), Term::Integer(3)),
        ]);
        match &term {
            Term::Map(pairs) => assert_eq!(pairs.len(), 2),
            _ => panic!("Expected Map"),
        }
        assert_eq!(
            term.map_get(&Term::Atom("a".to_string())),
            Some(&Term::Integer(3))
        );
        assert_eq!(
            term.map_get(&Term::Atom("b".to_string())),
            Some(&Term::Integer(2))
        );
    }

    #[test]
    fn test_map_get_absent_key() {
        let term = Term::Map(vec![(Term::Atom("a".to_string()), Term::Integer(1))]);
        assert_eq!(term.map_get(&Term::Atom("zzz".to_string())), None);
    }

    #[test]
    fn test_map_get_on_non_map() {
        let term = Term::Integer(7);
        assert_eq!(term.map_get(&Term::Atom("a".to_string())), None);
    }

    #[test]
    fn test_is_nil() {
        assert!(Term::List(vec![]).is_nil());
        assert!(!Term::List(vec![Term::Integer(1)]).is_nil());
        assert!(!Term::Tuple(vec![]).is_nil());
    }

    #[test]
    fn test_display_atom() {
        assert_eq!(Term::Atom("ok".to_string()).to_string(), "ok");
    }

    #[test]
    fn test_display_tuple() {
        let term = Term::Tuple(vec![
            Term::Atom("reply".to_string()),
            Term::Integer(200),
        ]);
        assert_eq!(term.to_string(), "{reply, 200}");
    }

    #[test]
    fn test_display_list_and_map() {
        let list = Term::List(vec![Term::Integer(1), Term::Integer(2)]);
        assert_eq!(list.to_string(), "[1, 2]");

        let map = Term::Map(vec![(
            Term::Atom("count".to_string()),
            Term::Integer(3),
        )]);
        assert_eq!(map.to_string(), "#{count => 3}");
    }

    #[test]
    fn test_display_binary_and_char_list() {
        assert_eq!(Term::Binary("raw".to_string()).to_string(), "<<\"raw\">>");
        assert_eq!(Term::CharList("abc".to_string()).to_string(), "\"abc\"");
    }
}
