//! Sigil Module
//!
//! Implements the string-sigil convention used when terms arrive as tagged
//! host strings: a one-character prefix selects the term kind, and an
//! unprefixed string defaults to an atom.
//!
//! | Prefix | Kind           |
//! |--------|----------------|
//! | `:`    | atom           |
//! | `.`    | binary         |
//! | `$`    | character list |

use crate::term::Term;

/// Atom sigil prefix
pub const SIGIL_ATOM: char = ':';

/// Binary sigil prefix
pub const SIGIL_BINARY: char = '.';

/// Character-list sigil prefix
pub const SIGIL_CHAR_LIST: char = '$';

impl Term {
    /// Parse a sigil-tagged host string into a term.
    ///
    /// The sigil is stripped; a string with no sigil becomes an atom.
    pub fn from_tagged_str(tagged: &str) -> Term {
        match tagged.as_bytes().first() {
            Some(b':') => Term::Atom(tagged[1..].to_string()),
            Some(b'.') => Term::Binary(tagged[1..].to_string()),
            Some(b'$') => Term::CharList(tagged[1..].to_string()),
            _ => Term::Atom(tagged.to_string()),
        }
    }

    /// Render a string-like term back to its sigil-tagged form.
    ///
    /// Returns `None` for non-string kinds. Atoms are always tagged with
    /// `:` so the result parses back to the same term even when the atom
    /// text itself starts with `.` or `$`.
    pub fn to_tagged_string(&self) -> Option<String> {
        match self {
            Term::Atom(name) => Some(format!("{}{}", SIGIL_ATOM, name)),
            Term::Binary(data) => Some(format!("{}{}", SIGIL_BINARY, data)),
            Term::CharList(chars) => Some(format!("{}{}", SIGIL_CHAR_LIST, chars)),
            _ => None,
        }
    }
}
