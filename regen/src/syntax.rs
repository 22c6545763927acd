//! Syntax tree node definitions for finite-language regular expressions
//!
//! The tree consumed by the generator is a flat, owned structure: every node
//! carries an operator kind plus whichever payload that kind uses (literal
//! runes, character ranges, repetition bounds, children). The parser adapter
//! in [`parse`](crate::parse) builds these nodes; the generator in
//! [`generate`](crate::generate) walks them.
//!
//! The operator enumeration is deliberately wider than what the generator
//! accepts: constructs that make the language infinite or context-dependent
//! (`*`, `+`, `.`, anchors, word boundaries) are still representable, so the
//! generator can detect them and report exactly which construct was found,
//! rather than the parser silently dropping them.

use std::fmt;

/// Operator kind of a syntax tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Matches no strings.
    NoMatch,
    /// Matches the empty string.
    EmptyMatch,
    /// Matches the node's runes as a fixed string.
    Literal,
    /// Matches any single code point covered by the node's ranges.
    CharClass,
    /// `.` — any character except newline. Rejected by the generator.
    AnyCharNotNl,
    /// `(?s:.)` — any character. Rejected by the generator.
    AnyChar,
    /// `^` — beginning of line. Rejected by the generator.
    BeginLine,
    /// `$` — end of line. Rejected by the generator.
    EndLine,
    /// `\A` — beginning of text. Rejected by the generator.
    BeginText,
    /// `\z` — end of text. Rejected by the generator.
    EndText,
    /// `\b` — word boundary. Rejected by the generator.
    WordBoundary,
    /// `\B` — non-word-boundary. Rejected by the generator.
    NoWordBoundary,
    /// Capture group around a single child. Transparent for generation.
    Capture,
    /// `*` — zero or more. Rejected by the generator.
    Star,
    /// `+` — one or more. Rejected by the generator.
    Plus,
    /// `?` — the child or the empty string.
    Quest,
    /// `{min,max}` — bounded repetition of a single child.
    Repeat,
    /// Concatenation of the children in order.
    Concat,
    /// Alternation between the children in order.
    Alternate,
}

impl Op {
    /// Human-readable name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Op::NoMatch => "no-match",
            Op::EmptyMatch => "empty match",
            Op::Literal => "literal",
            Op::CharClass => "character class",
            Op::AnyCharNotNl => "any character (.)",
            Op::AnyChar => "any character including newline",
            Op::BeginLine => "beginning of line (^)",
            Op::EndLine => "end of line ($)",
            Op::BeginText => "beginning of text (\\A)",
            Op::EndText => "end of text (\\z)",
            Op::WordBoundary => "word boundary (\\b)",
            Op::NoWordBoundary => "non-word-boundary (\\B)",
            Op::Capture => "capture group",
            Op::Star => "unbounded repetition (*)",
            Op::Plus => "unbounded repetition (+)",
            Op::Quest => "optional (?)",
            Op::Repeat => "bounded repetition",
            Op::Concat => "concatenation",
            Op::Alternate => "alternation",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the parsed representation of a regular expression.
///
/// Payload fields are only meaningful for the kinds that use them: `runes`
/// for [`Op::Literal`], `ranges` for [`Op::CharClass`], `min`/`max` for
/// [`Op::Repeat`], `children` for the composite kinds. `max == None` is the
/// "no upper limit" sentinel and is rejected by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub op: Op,
    pub children: Vec<Node>,
    pub runes: Vec<char>,
    pub ranges: Vec<(char, char)>,
    pub min: u32,
    pub max: Option<u32>,
}

impl Node {
    fn new(op: Op) -> Self {
        Node {
            op,
            children: Vec::new(),
            runes: Vec::new(),
            ranges: Vec::new(),
            min: 0,
            max: None,
        }
    }

    /// A leaf node with no payload (empty match, anchors, `.`, …).
    pub fn leaf(op: Op) -> Self {
        Node::new(op)
    }

    /// A node matching exactly the empty string.
    pub fn empty_match() -> Self {
        Node::new(Op::EmptyMatch)
    }

    /// A literal node matching exactly `text`.
    pub fn literal(text: &str) -> Self {
        let mut node = Node::new(Op::Literal);
        node.runes = text.chars().collect();
        node
    }

    /// A character class over the given inclusive range pairs.
    pub fn class(ranges: &[(char, char)]) -> Self {
        let mut node = Node::new(Op::CharClass);
        node.ranges = ranges.to_vec();
        node
    }

    /// A unary node (capture, quest, star, plus) around `child`.
    pub fn unary(op: Op, child: Node) -> Self {
        let mut node = Node::new(op);
        node.children = vec![child];
        node
    }

    /// A capture group around `child`.
    pub fn capture(child: Node) -> Self {
        Node::unary(Op::Capture, child)
    }

    /// `child?` — the child or the empty string.
    pub fn quest(child: Node) -> Self {
        Node::unary(Op::Quest, child)
    }

    /// `child{min,max}`; `max == None` means no upper limit.
    pub fn repeat(child: Node, min: u32, max: Option<u32>) -> Self {
        let mut node = Node::unary(Op::Repeat, child);
        node.min = min;
        node.max = max;
        node
    }

    /// Concatenation of `children` in order.
    pub fn concat(children: Vec<Node>) -> Self {
        let mut node = Node::new(Op::Concat);
        node.children = children;
        node
    }

    /// Alternation between `children` in order.
    pub fn alternate(children: Vec<Node>) -> Self {
        let mut node = Node::new(Op::Alternate);
        node.children = children;
        node
    }

    /// Whether this node needs a non-capturing group when a postfix
    /// operator or a surrounding concatenation is printed around it.
    fn needs_group(&self) -> bool {
        match self.op {
            Op::Concat | Op::Alternate => true,
            Op::Literal => self.runes.len() != 1,
            _ => false,
        }
    }

    fn fmt_postfix(&self, f: &mut fmt::Formatter<'_>, suffix: &str) -> fmt::Result {
        let child = match self.children.first() {
            Some(child) => child,
            None => return f.write_str(suffix),
        };
        if child.needs_group() {
            write!(f, "(?:{}){}", child, suffix)
        } else {
            write!(f, "{}{}", child, suffix)
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if "\\.+*?()|[]{}^$".contains(c) {
        write!(f, "\\{}", c)
    } else {
        write!(f, "{}", c)
    }
}

fn write_class_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if "\\]^-".contains(c) {
        write!(f, "\\{}", c)
    } else {
        write!(f, "{}", c)
    }
}

/// Reconstitutes the (sub-)pattern this node was parsed from, so error
/// messages can point at the exact unsupported construct.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            Op::NoMatch => f.write_str("[^\\x00-\\x{10FFFF}]"),
            Op::EmptyMatch => f.write_str("(?:)"),
            Op::Literal => {
                for &c in &self.runes {
                    write_escaped(f, c)?;
                }
                Ok(())
            }
            Op::CharClass => {
                f.write_str("[")?;
                for &(lo, hi) in &self.ranges {
                    write_class_char(f, lo)?;
                    if hi != lo {
                        f.write_str("-")?;
                        write_class_char(f, hi)?;
                    }
                }
                f.write_str("]")
            }
            Op::AnyCharNotNl => f.write_str("."),
            Op::AnyChar => f.write_str("(?s:.)"),
            Op::BeginLine => f.write_str("^"),
            Op::EndLine => f.write_str("$"),
            Op::BeginText => f.write_str("\\A"),
            Op::EndText => f.write_str("\\z"),
            Op::WordBoundary => f.write_str("\\b"),
            Op::NoWordBoundary => f.write_str("\\B"),
            Op::Capture => {
                f.write_str("(")?;
                for child in &self.children {
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
            Op::Star => self.fmt_postfix(f, "*"),
            Op::Plus => self.fmt_postfix(f, "+"),
            Op::Quest => self.fmt_postfix(f, "?"),
            Op::Repeat => {
                let suffix = match self.max {
                    Some(max) if max == self.min => format!("{{{}}}", self.min),
                    Some(max) => format!("{{{},{}}}", self.min, max),
                    None => format!("{{{},}}", self.min),
                };
                self.fmt_postfix(f, &suffix)
            }
            Op::Concat => {
                for child in &self.children {
                    if child.op == Op::Alternate {
                        write!(f, "(?:{})", child)?;
                    } else {
                        write!(f, "{}", child)?;
                    }
                }
                Ok(())
            }
            Op::Alternate => {
                for (i, child) in self.children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_display_escapes_metacharacters() {
        let node = Node::literal("a.b+c");
        assert_eq!(node.to_string(), "a\\.b\\+c");
    }

    #[test]
    fn test_class_display_single_and_range() {
        let node = Node::class(&[('a', 'a'), ('c', 'f')]);
        assert_eq!(node.to_string(), "[ac-f]");
    }

    #[test]
    fn test_quest_wraps_multichar_literal() {
        let node = Node::quest(Node::literal("ab"));
        assert_eq!(node.to_string(), "(?:ab)?");
    }

    #[test]
    fn test_quest_does_not_wrap_single_char() {
        let node = Node::quest(Node::literal("a"));
        assert_eq!(node.to_string(), "a?");
    }

    #[test]
    fn test_repeat_display_bounds() {
        assert_eq!(
            Node::repeat(Node::literal("a"), 2, Some(4)).to_string(),
            "a{2,4}"
        );
        assert_eq!(
            Node::repeat(Node::literal("a"), 3, Some(3)).to_string(),
            "a{3}"
        );
        assert_eq!(Node::repeat(Node::literal("a"), 2, None).to_string(), "a{2,}");
    }

    #[test]
    fn test_concat_wraps_alternation() {
        let node = Node::concat(vec![
            Node::literal("r"),
            Node::alternate(vec![Node::literal("8"), Node::literal("9")]),
        ]);
        assert_eq!(node.to_string(), "r(?:8|9)");
    }

    #[test]
    fn test_star_display() {
        let node = Node::unary(Op::Star, Node::leaf(Op::AnyCharNotNl));
        assert_eq!(node.to_string(), ".*");
    }

    #[test]
    fn test_op_names_are_descriptive() {
        assert_eq!(Op::Star.name(), "unbounded repetition (*)");
        assert_eq!(Op::WordBoundary.name(), "word boundary (\\b)");
    }
}
