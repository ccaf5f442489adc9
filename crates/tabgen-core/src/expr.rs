//! Expression trees for host-style parameter formulas.
//!
//! Every computed quantity carries a formula such as
//! `max(3; ceil(floor(adjusted_length / default_width) / 2) * 2 - 1)`.
//! The tree form is built by the layout policies and rendered with
//! [`fmt::Display`]; `tabgen-parser` turns the rendered text back into a tree.

use crate::types::Length;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A formula expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    Literal(f64),
    Length(Length),
    /// Reference to another named parameter.
    Reference(String),
    Negate(Box<Expression>),
    BinaryOp { left: Box<Expression>, op: BinaryOp, right: Box<Expression> },
    Function { name: String, args: Vec<Expression> },
}

/// Binary operators for expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// Whether `a op (b op c)` differs from `(a op b) op c`.
    fn is_left_associative_only(&self) -> bool {
        matches!(self, BinaryOp::Sub | BinaryOp::Div)
    }
}

const UNARY_PRECEDENCE: u8 = 3;
const ATOM_PRECEDENCE: u8 = 4;

impl Expression {
    pub fn literal(value: f64) -> Self {
        Expression::Literal(value)
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Expression::Reference(name.into())
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn call(name: &str, args: Vec<Expression>) -> Self {
        Expression::Function {
            name: name.to_string(),
            args,
        }
    }

    /// `abs(expr)`, the formula wrapped around every leaf input.
    pub fn abs(self) -> Self {
        Expression::call("abs", vec![self])
    }

    pub fn floor(self) -> Self {
        Expression::call("floor", vec![self])
    }

    pub fn ceil(self) -> Self {
        Expression::call("ceil", vec![self])
    }

    pub fn max(self, other: Expression) -> Self {
        Expression::call("max", vec![self, other])
    }

    /// Names of all referenced parameters, in first-occurrence order.
    pub fn references(&self) -> SmallVec<[&str; 4]> {
        let mut refs = SmallVec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, out: &mut SmallVec<[&'a str; 4]>) {
        match self {
            Expression::Reference(name) => {
                if !out.contains(&name.as_str()) {
                    out.push(name.as_str());
                }
            }
            Expression::Negate(inner) => inner.collect_references(out),
            Expression::BinaryOp { left, right, .. } => {
                left.collect_references(out);
                right.collect_references(out);
            }
            Expression::Function { args, .. } => {
                for arg in args {
                    arg.collect_references(out);
                }
            }
            Expression::Literal(_) | Expression::Length(_) => {}
        }
    }

    /// True when the expression references no other parameter.
    pub fn is_leaf(&self) -> bool {
        self.references().is_empty()
    }

    /// Rebuild the expression with every reference renamed.
    pub fn rename_references<F>(&self, rename: &F) -> Expression
    where
        F: Fn(&str) -> String,
    {
        match self {
            Expression::Reference(name) => Expression::Reference(rename(name)),
            Expression::Negate(inner) => Expression::Negate(Box::new(inner.rename_references(rename))),
            Expression::BinaryOp { left, op, right } => Expression::BinaryOp {
                left: Box::new(left.rename_references(rename)),
                op: *op,
                right: Box::new(right.rename_references(rename)),
            },
            Expression::Function { name, args } => Expression::Function {
                name: name.clone(),
                args: args.iter().map(|a| a.rename_references(rename)).collect(),
            },
            Expression::Literal(_) | Expression::Length(_) => self.clone(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expression::BinaryOp { op, .. } => op.precedence(),
            Expression::Negate(_) => UNARY_PRECEDENCE,
            Expression::Literal(v) if v.is_sign_negative() => UNARY_PRECEDENCE,
            Expression::Length(len) if len.value.is_sign_negative() => UNARY_PRECEDENCE,
            _ => ATOM_PRECEDENCE,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, parens: bool) -> fmt::Result {
        if parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Length(len) => {
                if len.unit.suffix().is_empty() {
                    write!(f, "{}", len.value)
                } else {
                    write!(f, "{} {}", len.value, len.unit)
                }
            }
            Expression::Reference(name) => f.write_str(name),
            Expression::Negate(inner) => {
                f.write_str("-")?;
                inner.fmt_operand(f, inner.precedence() < UNARY_PRECEDENCE)
            }
            Expression::BinaryOp { left, op, right } => {
                let prec = op.precedence();
                left.fmt_operand(f, left.precedence() < prec)?;
                write!(f, " {} ", op.symbol())?;
                let right_parens = right.precedence() < prec
                    || (right.precedence() == prec && op.is_left_associative_only());
                right.fmt_operand(f, right_parens)
            }
            Expression::Function { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        // Host formulas separate arguments with semicolons
                        f.write_str("; ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        Expression::Literal(value)
    }
}

impl From<Length> for Expression {
    fn from(len: Length) -> Self {
        Expression::Length(len)
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait for Expression {
            type Output = Expression;

            fn $method(self, rhs: Expression) -> Expression {
                Expression::binary(self, $op, rhs)
            }
        }

        impl $trait<f64> for Expression {
            type Output = Expression;

            fn $method(self, rhs: f64) -> Expression {
                Expression::binary(self, $op, Expression::Literal(rhs))
            }
        }
    };
}

impl_binary_operator!(Add, add, BinaryOp::Add);
impl_binary_operator!(Sub, sub, BinaryOp::Sub);
impl_binary_operator!(Mul, mul, BinaryOp::Mul);
impl_binary_operator!(Div, div, BinaryOp::Div);

impl Neg for Expression {
    type Output = Expression;

    fn neg(self) -> Expression {
        Expression::Negate(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(name: &str) -> Expression {
        Expression::reference(name)
    }

    #[test]
    fn test_display_minimal_parentheses() {
        let expr = r("face_length") - r("margin") * 2.0;
        assert_eq!(expr.to_string(), "face_length - margin * 2");

        let expr = (r("a") - r("b")) / 2.0;
        assert_eq!(expr.to_string(), "(a - b) / 2");

        let expr = r("a") - (r("b") - r("c"));
        assert_eq!(expr.to_string(), "a - (b - c)");

        let expr = r("a") + (r("b") + r("c"));
        assert_eq!(expr.to_string(), "a + b + c");
    }

    #[test]
    fn test_display_functions_use_semicolons() {
        let expr = Expression::literal(3.0).max((r("x") / 2.0).ceil() * 2.0 - 1.0);
        assert_eq!(expr.to_string(), "max(3; ceil(x / 2) * 2 - 1)");
    }

    #[test]
    fn test_display_lengths_and_negation() {
        assert_eq!(Expression::from(Length::mm(3.2)).abs().to_string(), "abs(3.2 mm)");
        assert_eq!((-(r("a") + r("b"))).to_string(), "-(a + b)");
        assert_eq!((r("a") * Expression::literal(-2.0)).to_string(), "a * -2");
    }

    #[test]
    fn test_references_are_unique_and_ordered() {
        let expr = r("b") * r("a") + r("b");
        assert_eq!(expr.references().as_slice(), &["b", "a"]);
        assert!(Expression::literal(4.0).abs().is_leaf());
    }

    #[test]
    fn test_rename_references() {
        let expr = r("fingers") / 2.0;
        let renamed = expr.rename_references(&|name: &str| format!("lid_x1_{}", name));
        assert_eq!(renamed.to_string(), "lid_x1_fingers / 2");
    }
}
