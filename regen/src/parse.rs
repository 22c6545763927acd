//! Pattern parsing boundary
//!
//! Parsing proper is delegated to `regex-syntax`; this module translates its
//! AST into the [`Node`](crate::syntax::Node) tree the generator consumes.
//! The AST (rather than the HIR) is the right level: the HIR normalizes `.`
//! into an ordinary character class, which would make it impossible to
//! reject the any-character construct instead of enumerating a million code
//! points.
//!
//! The translation is shape-only. Constructs that make the language infinite
//! or context-dependent (`*`, `+`, `{n,}`, anchors, word boundaries, `.`)
//! still translate, into their rejected node kinds; deciding their fate is
//! the generator's job. Constructs the closed node set cannot express at all
//! (inline flags, Perl and Unicode class escapes, negated classes, class set
//! operations) are reported here as [`ParseError::UnsupportedSyntax`].

use std::fmt;

use regex_syntax::ast::{
    self, Ast, ClassSet, ClassSetItem, GroupKind, RepetitionKind, RepetitionRange,
};

use crate::syntax::{Node, Op};

/// Error that can occur while turning a pattern string into a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The pattern is not a syntactically valid regular expression. Carries
    /// the underlying `regex-syntax` diagnostic unchanged.
    Syntax(String),
    /// The pattern is valid but uses syntax that has no counterpart in the
    /// finite-language node set.
    UnsupportedSyntax {
        construct: &'static str,
        pattern: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(msg) => write!(f, "{}", msg),
            ParseError::UnsupportedSyntax { construct, pattern } => {
                write!(
                    f,
                    "unsupported syntax in \"{}\": {} cannot be expressed as a finite-language syntax tree",
                    pattern, construct
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `pattern` into a syntax tree.
///
/// The returned tree may still contain rejected node kinds (`.`, `^`, `*`,
/// …); those are surfaced as errors by the generator, which can name the
/// offending construct together with its sub-pattern.
pub fn parse(pattern: &str) -> Result<Node, ParseError> {
    let ast = ast::parse::Parser::new()
        .parse(pattern)
        .map_err(|err| ParseError::Syntax(err.to_string()))?;
    Translator { pattern }.translate(&ast)
}

struct Translator<'p> {
    pattern: &'p str,
}

impl Translator<'_> {
    fn unsupported(&self, construct: &'static str) -> ParseError {
        ParseError::UnsupportedSyntax {
            construct,
            pattern: self.pattern.to_string(),
        }
    }

    fn translate(&self, ast: &Ast) -> Result<Node, ParseError> {
        match ast {
            Ast::Empty(_) => Ok(Node::empty_match()),
            Ast::Flags(_) => Err(self.unsupported("inline flags")),
            Ast::Literal(lit) => Ok(Node::literal(&lit.c.to_string())),
            Ast::Dot(_) => Ok(Node::leaf(Op::AnyCharNotNl)),
            Ast::Assertion(assertion) => Ok(Node::leaf(assertion_op(&assertion.kind))),
            Ast::ClassUnicode(_) => Err(self.unsupported("Unicode class escape")),
            Ast::ClassPerl(_) => Err(self.unsupported("Perl class escape")),
            Ast::ClassBracketed(class) => {
                if class.negated {
                    return Err(self.unsupported("negated character class"));
                }
                let mut ranges = Vec::new();
                self.class_set(&class.kind, &mut ranges)?;
                Ok(Node::class(&normalize_ranges(ranges)))
            }
            Ast::Repetition(rep) => {
                let child = self.translate(&rep.ast)?;
                Ok(match rep.op.kind {
                    RepetitionKind::ZeroOrOne => Node::quest(child),
                    RepetitionKind::ZeroOrMore => Node::unary(Op::Star, child),
                    RepetitionKind::OneOrMore => Node::unary(Op::Plus, child),
                    RepetitionKind::Range(RepetitionRange::Exactly(n)) => {
                        Node::repeat(child, n, Some(n))
                    }
                    RepetitionKind::Range(RepetitionRange::AtLeast(min)) => {
                        Node::repeat(child, min, None)
                    }
                    RepetitionKind::Range(RepetitionRange::Bounded(min, max)) => {
                        Node::repeat(child, min, Some(max))
                    }
                })
            }
            Ast::Group(group) => {
                let child = self.translate(&group.ast)?;
                match &group.kind {
                    GroupKind::CaptureIndex(_) | GroupKind::CaptureName { .. } => {
                        Ok(Node::capture(child))
                    }
                    // A plain (?:...) is pure syntax; the child stands on
                    // its own in the tree. A flagged group like (?i:...)
                    // changes the language and must not pass through.
                    GroupKind::NonCapturing(flags) if flags.items.is_empty() => Ok(child),
                    GroupKind::NonCapturing(_) => Err(self.unsupported("inline flags")),
                }
            }
            Ast::Alternation(alt) => {
                let mut children = Vec::with_capacity(alt.asts.len());
                for sub in &alt.asts {
                    children.push(self.translate(sub)?);
                }
                Ok(Node::alternate(children))
            }
            Ast::Concat(concat) => {
                let mut children: Vec<Node> = Vec::with_capacity(concat.asts.len());
                for sub in &concat.asts {
                    let node = self.translate(sub)?;
                    // Adjacent literals collapse into a single multi-rune
                    // literal node, the shape the generator expects.
                    match children.last_mut() {
                        Some(last) if last.op == Op::Literal && node.op == Op::Literal => {
                            last.runes.extend(node.runes);
                        }
                        _ => children.push(node),
                    }
                }
                match children.len() {
                    0 => Ok(Node::empty_match()),
                    1 => Ok(children.remove(0)),
                    _ => Ok(Node::concat(children)),
                }
            }
        }
    }

    fn class_set(&self, set: &ClassSet, out: &mut Vec<(char, char)>) -> Result<(), ParseError> {
        match set {
            ClassSet::Item(item) => self.class_item(item, out),
            ClassSet::BinaryOp(_) => Err(self.unsupported("character class set operation")),
        }
    }

    fn class_item(
        &self,
        item: &ClassSetItem,
        out: &mut Vec<(char, char)>,
    ) -> Result<(), ParseError> {
        match item {
            ClassSetItem::Empty(_) => Ok(()),
            ClassSetItem::Literal(lit) => {
                out.push((lit.c, lit.c));
                Ok(())
            }
            ClassSetItem::Range(range) => {
                out.push((range.start.c, range.end.c));
                Ok(())
            }
            ClassSetItem::Ascii(_) => Err(self.unsupported("ASCII class escape")),
            ClassSetItem::Unicode(_) => Err(self.unsupported("Unicode class escape")),
            ClassSetItem::Perl(_) => Err(self.unsupported("Perl class escape")),
            ClassSetItem::Bracketed(class) => {
                if class.negated {
                    return Err(self.unsupported("negated character class"));
                }
                self.class_set(&class.kind, out)
            }
            ClassSetItem::Union(union) => {
                for item in &union.items {
                    self.class_item(item, out)?;
                }
                Ok(())
            }
        }
    }
}

fn assertion_op(kind: &ast::AssertionKind) -> Op {
    match kind {
        ast::AssertionKind::StartLine => Op::BeginLine,
        ast::AssertionKind::EndLine => Op::EndLine,
        ast::AssertionKind::StartText => Op::BeginText,
        ast::AssertionKind::EndText => Op::EndText,
        ast::AssertionKind::NotWordBoundary => Op::NoWordBoundary,
        // WordBoundary plus the \b{start}/\b{end} family.
        _ => Op::WordBoundary,
    }
}

/// Sorts and merges range pairs so equivalent class encodings produce the
/// same pair list and no code point appears twice.
fn normalize_ranges(mut ranges: Vec<(char, char)>) -> Vec<(char, char)> {
    ranges.sort();
    let mut merged: Vec<(char, char)> = Vec::with_capacity(ranges.len());
    for (lo, hi) in ranges {
        if let Some(last) = merged.last_mut() {
            if lo as u32 <= last.1 as u32 + 1 {
                if hi > last.1 {
                    last.1 = hi;
                }
                continue;
            }
        }
        merged.push((lo, hi));
    }
    merged
}
