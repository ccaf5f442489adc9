//! Parser for host-style parameter formulas.
//!
//! Formulas are the strings stored on named document parameters, for example
//! `max(3; ceil(floor(lid_adjusted_length / lid_default_width) / 2) * 2 - 1)`.
//! Built on `nom`; the output is a [`tabgen_core::Expression`] tree.

mod grammar;
mod lexer;

pub use grammar::parse;

use tabgen_core::{Expression, ParseError};

/// Parse a formula from source text.
///
/// # Example
///
/// ```
/// use tabgen_parser::parse_expression;
///
/// let expr = parse_expression("(face_length - margin * 2) / fingers").unwrap();
/// assert_eq!(expr.references().as_slice(), &["face_length", "margin", "fingers"]);
/// ```
pub fn parse_expression(source: &str) -> Result<Expression, ParseError> {
    parse(source)
}
