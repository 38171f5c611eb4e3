//! Filter expressions parsed from free text
//!
//! A model describes filters as short comparison strings such as
//! `"year >= 2020"` or `"(region != 'North')"`. `Filter::from_text` turns one
//! such string into a structured predicate.
//!
//! Operator detection is substring based, not tokenized: an operator symbol
//! inside a quoted literal is treated like any other occurrence.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::vocabulary::{vocabulary_impls, Vocabulary};
use crate::{ChatplotError, Result};

/// Delimiter marking the left-hand side as a raw identifier
const IDENTIFIER_QUOTE: char = '`';

/// Supported comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Ge,
    Le,
    Gt,
    Lt,
}

impl ComparisonOp {
    /// Operators in matching priority order
    ///
    /// Two-character operators come before their one-character prefixes so
    /// `>=` is never split as `>`.
    pub const ALL: [ComparisonOp; 6] = [
        ComparisonOp::Eq,
        ComparisonOp::Ne,
        ComparisonOp::Ge,
        ComparisonOp::Le,
        ComparisonOp::Gt,
        ComparisonOp::Lt,
    ];
}

impl Vocabulary for ComparisonOp {
    const NAME: &'static str = "comparison operator";
    const VARIANTS: &'static [Self] = &Self::ALL;

    fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

vocabulary_impls!(ComparisonOp);

/// One `^(.*)OP(.*?)$` pattern per operator, in priority order.
///
/// The greedy left group makes the right-most occurrence of the operator the
/// split point.
static OPERATOR_PATTERNS: LazyLock<Vec<(ComparisonOp, std::result::Result<Regex, regex::Error>)>> =
    LazyLock::new(|| {
        ComparisonOp::ALL
            .iter()
            .map(|op| {
                let pattern = format!(r"^(.*){}(.*?)$", regex::escape(op.as_str()));
                (*op, Regex::new(&pattern))
            })
            .collect()
    });

/// A single comparison predicate: `lhs op rhs`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Filter {
    lhs: String,
    rhs: String,
    op: ComparisonOp,
}

impl Filter {
    /// Create a filter, quoting `lhs` unless it is already quoted
    pub fn new(lhs: impl Into<String>, op: ComparisonOp, rhs: impl Into<String>) -> Self {
        Self {
            lhs: quote_identifier(lhs.into()),
            rhs: rhs.into(),
            op,
        }
    }

    /// Parse a comparison expression
    ///
    /// One surrounding pair of parentheses is stripped. Operators are tried
    /// in `ComparisonOp::ALL` order and the first one present wins.
    pub fn from_text(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let expr = strip_parentheses(trimmed);

        for (op, pattern) in OPERATOR_PATTERNS.iter() {
            let pattern = pattern
                .as_ref()
                .map_err(|e| ChatplotError::InternalError(format!("Regex error: {}", e)))?;

            let Some(caps) = pattern.captures(expr) else {
                continue;
            };

            let lhs = caps.get(1).map_or("", |m| m.as_str()).trim();
            let rhs = caps.get(2).map_or("", |m| m.as_str()).trim();
            if lhs.is_empty() {
                break;
            }

            tracing::trace!(filter = trimmed, op = op.as_str(), "split filter expression");
            return Ok(Self::new(lhs, *op, rhs));
        }

        Err(ChatplotError::UnparsableFilter(trimmed.to_string()))
    }

    /// Left-hand side, always backtick-delimited
    pub fn lhs(&self) -> &str {
        &self.lhs
    }

    /// Right-hand side, verbatim
    pub fn rhs(&self) -> &str {
        &self.rhs
    }

    pub fn op(&self) -> ComparisonOp {
        self.op
    }
}

/// Strip exactly one layer of wrapping parentheses
fn strip_parentheses(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('(') && text.ends_with(')') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

fn quote_identifier(lhs: String) -> String {
    if lhs.starts_with(IDENTIFIER_QUOTE) {
        lhs
    } else {
        format!("{q}{lhs}{q}", q = IDENTIFIER_QUOTE)
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
    }
}

impl std::str::FromStr for Filter {
    type Err = ChatplotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl TryFrom<String> for Filter {
    type Error = ChatplotError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_text(&value)
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.to_string()
    }
}
