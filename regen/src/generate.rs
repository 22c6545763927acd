//! String set generation from a syntax tree
//!
//! This is the heart of regen: a depth-first walk that turns a parsed tree
//! into the complete, finite set of strings it matches. Concatenation is the
//! Cartesian product of its children's sets, alternation is their union,
//! bounded repetition is self-concatenation across the bound range, and an
//! optional node is its child's set plus the empty string.
//!
//! The result is a plain `Vec<String>` in deterministic construction order.
//! Duplicates are kept and nothing is sorted; both are caller decisions.
//!
//! Node kinds whose expansion is infinite (`*`, `+`, `{n,}`) or dependent on
//! surrounding text (`.`, anchors, word boundaries) abort the whole walk
//! with a typed error naming the construct and its sub-pattern. There are no
//! partial results: the tree either expands completely or not at all.

use std::fmt;

use crate::syntax::{Node, Op};

/// Error that can occur while expanding a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The tree contains a construct with no finite, context-free expansion.
    UnsupportedConstruct { op: Op, pattern: String },
    /// A repetition has no upper limit, so the language is infinite.
    UnboundedRepetition { pattern: String },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnsupportedConstruct { op, pattern } => {
                write!(
                    f,
                    "invalid regular expression \"{}\": {} is not supported in a finite language",
                    pattern,
                    op.name()
                )
            }
            GenerateError::UnboundedRepetition { pattern } => {
                write!(
                    f,
                    "invalid regular expression \"{}\": repetition with no upper limit makes the language infinite",
                    pattern
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates every string matched by the tree rooted at `node`.
///
/// The output order is deterministic: child order for alternation,
/// left-to-right Cartesian order for concatenation, ascending count order
/// for repetition. Duplicates are not removed.
///
/// Result sizes are combinatorial in the pattern: repetition bounds multiply
/// with alternation and class widths. That is the cost of the domain, not a
/// condition this function guards against.
pub fn generate(node: &Node) -> Result<Vec<String>, GenerateError> {
    match node.op {
        Op::NoMatch
        | Op::AnyCharNotNl
        | Op::AnyChar
        | Op::BeginLine
        | Op::EndLine
        | Op::BeginText
        | Op::EndText
        | Op::WordBoundary
        | Op::NoWordBoundary
        | Op::Star
        | Op::Plus => Err(GenerateError::UnsupportedConstruct {
            op: node.op,
            pattern: node.to_string(),
        }),
        Op::EmptyMatch => Ok(vec![String::new()]),
        Op::Literal => Ok(vec![node.runes.iter().collect()]),
        Op::CharClass => {
            let mut strings = Vec::new();
            for &(lo, hi) in &node.ranges {
                for c in lo..=hi {
                    strings.push(c.to_string());
                }
            }
            Ok(strings)
        }
        Op::Capture => generate(&node.children[0]),
        Op::Quest => {
            let mut strings = generate(&node.children[0])?;
            strings.push(String::new());
            Ok(strings)
        }
        Op::Repeat => {
            let max = match node.max {
                Some(max) => max,
                None => {
                    return Err(GenerateError::UnboundedRepetition {
                        pattern: node.to_string(),
                    })
                }
            };
            let mut strings = Vec::new();
            for s in generate(&node.children[0])? {
                for i in node.min..=max {
                    strings.push(s.repeat(i as usize));
                }
            }
            Ok(strings)
        }
        Op::Concat => {
            let mut children = node.children.iter();
            let mut strings = match children.next() {
                Some(first) => generate(first)?,
                None => vec![String::new()],
            };
            for sub in children {
                strings = merge(&strings, &generate(sub)?);
            }
            Ok(strings)
        }
        Op::Alternate => {
            let mut strings = Vec::new();
            for sub in &node.children {
                strings.extend(generate(sub)?);
            }
            Ok(strings)
        }
    }
}

/// Returns all combinations of the provided prefixes and suffixes, outer
/// loop over prefixes, inner loop over suffixes.
pub fn merge(prefixes: &[String], suffixes: &[String]) -> Vec<String> {
    let mut strings = Vec::with_capacity(prefixes.len() * suffixes.len());
    for prefix in prefixes {
        for suffix in suffixes {
            strings.push(format!("{}{}", prefix, suffix));
        }
    }
    strings
}
