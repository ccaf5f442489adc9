//! Grammar rules for formulas.
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := unary (('*' | '/') unary)*
//! unary      := '-' unary | atom
//! atom       := number unit? | ident '(' args ')' | ident | '(' expression ')'
//! args       := (expression ((';' | ',') expression)*)?
//! ```

use nom::{
    branch::alt,
    character::complete::{char, multispace0, one_of},
    combinator::{map, opt},
    multi::{fold_many0, separated_list0},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use tabgen_core::{BinaryOp, Expression, Length, ParseError};

use crate::lexer::*;

/// Parse a complete formula. Trailing input is an error.
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::UnexpectedEof);
    }

    match expression(input) {
        Ok((rest, expr)) if rest.trim().is_empty() => Ok(expr),
        Ok((rest, _)) => Err(unexpected(input, rest)),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(unexpected(input, e.input)),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::UnexpectedEof),
    }
}

fn unexpected(input: &str, rest: &str) -> ParseError {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return ParseError::UnexpectedEof;
    }
    ParseError::UnexpectedInput {
        offset: input.len() - rest.len(),
        found: rest.chars().take(16).collect(),
    }
}

fn expression(input: &str) -> IResult<&str, Expression> {
    let (input, first) = term(input)?;
    fold_many0(
        pair(ws(one_of("+-")), term),
        move || first.clone(),
        |acc, (op, rhs)| {
            let op = if op == '+' { BinaryOp::Add } else { BinaryOp::Sub };
            Expression::binary(acc, op, rhs)
        },
    )(input)
}

fn term(input: &str) -> IResult<&str, Expression> {
    let (input, first) = unary(input)?;
    fold_many0(
        pair(ws(one_of("*/")), unary),
        move || first.clone(),
        |acc, (op, rhs)| {
            let op = if op == '*' { BinaryOp::Mul } else { BinaryOp::Div };
            Expression::binary(acc, op, rhs)
        },
    )(input)
}

fn unary(input: &str) -> IResult<&str, Expression> {
    alt((map(preceded(ws(char('-')), unary), negate), ws(atom)))(input)
}

/// Negative literals stay literals so `-2` reads back as it was written.
/// A second minus (`--2`) stays a negation.
fn negate(inner: Expression) -> Expression {
    match inner {
        Expression::Literal(value) if value.is_sign_positive() => Expression::Literal(-value),
        Expression::Length(len) if len.value.is_sign_positive() => {
            Expression::Length(Length::new(-len.value, len.unit))
        }
        other => -other,
    }
}

fn atom(input: &str) -> IResult<&str, Expression> {
    alt((
        quantity,
        call,
        map(identifier, Expression::reference),
        delimited(char('('), expression, ws(char(')'))),
    ))(input)
}

fn quantity(input: &str) -> IResult<&str, Expression> {
    let (input, value) = number(input)?;
    let (input, unit) = opt(preceded(multispace0, unit))(input)?;
    let expr = match unit {
        Some(unit) => Expression::Length(Length::new(value, unit)),
        None => Expression::Literal(value),
    };
    Ok((input, expr))
}

fn call(input: &str) -> IResult<&str, Expression> {
    let (input, name) = terminated(identifier, ws(char('(')))(input)?;
    let (input, args) = separated_list0(one_of(";,"), expression)(input)?;
    let (input, _) = char(')')(input)?;
    Ok((input, Expression::call(name, args)))
}
