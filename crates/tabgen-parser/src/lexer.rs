//! Token-level parsers for formulas.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace0, satisfy},
    combinator::{map_opt, map_res, not, opt, recognize},
    sequence::{delimited, pair, terminated},
    IResult,
};
use tabgen_core::LengthUnit;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Parse a parameter or function name.
pub fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(take_while1(is_ident_start), take_while(is_ident_char)))(input)
}

/// Parse an unsigned decimal number. Negation is handled by the grammar.
pub fn number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse a unit suffix. The suffix must not run into a longer identifier,
/// so `2 mm` has a unit but `2 margin` does not.
pub fn unit(input: &str) -> IResult<&str, LengthUnit> {
    map_opt(
        terminated(
            alt((tag("mm"), tag("cm"), tag("in"), tag("m"))),
            not(satisfy(is_ident_char)),
        ),
        LengthUnit::from_suffix,
    )(input)
}

/// Wrap a parser so it skips surrounding whitespace.
pub fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    delimited(multispace0, inner, multispace0)
}
