//! # regen
//!
//! Enumerates every string of a finite regular language.
//!
//! Given a pattern with no unbounded repetition and no context-dependent
//! assertions, [`enumerate`] returns the exhaustive list of strings the
//! pattern matches:
//!
//! ```rust
//! let mut strings = regen::enumerate("r(8|9|1[0-5])(b|w|d)?").unwrap();
//! strings.sort();
//! assert_eq!(strings.len(), 32);
//! assert!(strings.contains(&"r8".to_string()));
//! assert!(strings.contains(&"r15w".to_string()));
//! ```
//!
//! Patterns whose language is infinite (`*`, `+`, `{n,}`) or dependent on
//! surrounding text (`.`, `^`, `$`, `\b`) are rejected with an error naming
//! the offending construct; see [`GenerateError`].
//!
//! The library neither sorts nor deduplicates: the returned order is the
//! deterministic construction order (child order for alternation, Cartesian
//! order for concatenation, ascending counts for repetition), and duplicate
//! strings are kept. Both are choices the caller owns.

pub mod generate;
pub mod parse;
pub mod syntax;

pub use generate::{generate, merge, GenerateError};
pub use parse::{parse, ParseError};
pub use syntax::{Node, Op};

use std::fmt;

/// Error that can occur while enumerating a pattern's language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The pattern failed to parse or uses untranslatable syntax.
    Parse(ParseError),
    /// The pattern parsed but its language is not finite and context-free.
    Generate(GenerateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Generate(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Generate(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<GenerateError> for Error {
    fn from(err: GenerateError) -> Self {
        Error::Generate(err)
    }
}

/// Parses `pattern` and generates every string it matches.
///
/// Unsorted, undeduplicated; see the crate docs for the ordering contract.
pub fn enumerate(pattern: &str) -> Result<Vec<String>, Error> {
    let tree = parse::parse(pattern)?;
    let strings = generate::generate(&tree)?;
    Ok(strings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_wraps_parse_errors() {
        let err = enumerate("(ab").unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::Syntax(_))));
    }

    #[test]
    fn test_enumerate_wraps_generate_errors() {
        let err = enumerate(".*").unwrap_err();
        assert!(matches!(
            err,
            Error::Generate(GenerateError::UnsupportedConstruct { .. })
        ));
    }

    #[test]
    fn test_enumerate_happy_path() {
        assert_eq!(enumerate("a|b").unwrap(), vec!["a", "b"]);
    }
}
