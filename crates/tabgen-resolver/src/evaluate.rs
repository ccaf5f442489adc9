//! Numeric evaluation of expression trees.
//!
//! Evaluation is unit-agnostic: a `3.2 mm` atom evaluates to `3.2`. All
//! lengths of one computation share the unit of its inputs.

use tabgen_core::{BinaryOp, Expression, ParamMap, ResolveError};

/// Evaluate an expression against named bindings.
///
/// The result must be finite; division by zero is reported as
/// [`ResolveError::NonFinite`].
pub fn evaluate(expr: &Expression, bindings: &ParamMap) -> Result<f64, ResolveError> {
    let value = eval(expr, bindings)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ResolveError::NonFinite {
            expression: expr.to_string(),
        })
    }
}

fn eval(expr: &Expression, bindings: &ParamMap) -> Result<f64, ResolveError> {
    match expr {
        Expression::Literal(value) => Ok(*value),
        Expression::Length(len) => Ok(len.value),
        Expression::Reference(name) => {
            bindings
                .get(name)
                .ok_or_else(|| ResolveError::UndefinedParameter { name: name.clone() })
        }
        Expression::Negate(inner) => Ok(-eval(inner, bindings)?),
        Expression::BinaryOp { left, op, right } => {
            let l = eval(left, bindings)?;
            let r = eval(right, bindings)?;
            Ok(match op {
                BinaryOp::Add => l + r,
                BinaryOp::Sub => l - r,
                BinaryOp::Mul => l * r,
                BinaryOp::Div => l / r,
            })
        }
        Expression::Function { name, args } => {
            let values = args
                .iter()
                .map(|a| eval(a, bindings))
                .collect::<Result<Vec<_>, _>>()?;
            call(name, &values)
        }
    }
}

fn call(name: &str, args: &[f64]) -> Result<f64, ResolveError> {
    match name {
        "abs" => unary(name, args, f64::abs),
        "floor" => unary(name, args, f64::floor),
        "ceil" => unary(name, args, f64::ceil),
        "round" => unary(name, args, f64::round),
        "min" => variadic(name, args, f64::min),
        "max" => variadic(name, args, f64::max),
        _ => Err(ResolveError::UnknownFunction { name: name.to_string() }),
    }
}

fn unary(name: &str, args: &[f64], f: fn(f64) -> f64) -> Result<f64, ResolveError> {
    match args {
        [x] => Ok(f(*x)),
        _ => Err(ResolveError::ArgumentCount {
            function: name.to_string(),
            expected: "1".to_string(),
            found: args.len(),
        }),
    }
}

fn variadic(name: &str, args: &[f64], f: fn(f64, f64) -> f64) -> Result<f64, ResolveError> {
    let (first, rest) = args.split_first().ok_or_else(|| ResolveError::ArgumentCount {
        function: name.to_string(),
        expected: "at least 1".to_string(),
        found: 0,
    })?;
    Ok(rest.iter().fold(*first, |acc, x| f(acc, *x)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabgen_parser::parse_expression;

    fn eval_str(source: &str, bindings: &ParamMap) -> Result<f64, ResolveError> {
        evaluate(&parse_expression(source).unwrap(), bindings)
    }

    #[test]
    fn test_evaluate_arithmetic() {
        let bindings: ParamMap = [("face_length", 280.0), ("margin", 10.0)].into_iter().collect();
        assert_eq!(eval_str("face_length - margin * 2", &bindings), Ok(260.0));
        assert_eq!(eval_str("-(margin + 2) / 4", &bindings), Ok(-3.0));
    }

    #[test]
    fn test_evaluate_functions() {
        let bindings: ParamMap = [("raw", 14.0)].into_iter().collect();
        assert_eq!(eval_str("max(3; ceil(raw / 2) * 2 - 1)", &bindings), Ok(13.0));
        assert_eq!(eval_str("min(4, 2, 9)", &bindings), Ok(2.0));
        assert_eq!(eval_str("abs(-3.2 mm)", &bindings), Ok(3.2));
        assert_eq!(eval_str("floor(7 / 2) + round(2.5)", &bindings), Ok(6.0));
    }

    #[test]
    fn test_evaluate_errors() {
        let empty = ParamMap::new();
        assert_eq!(
            eval_str("fingers + 1", &empty),
            Err(ResolveError::UndefinedParameter { name: "fingers".into() })
        );
        assert!(matches!(eval_str("sqrt(4)", &empty), Err(ResolveError::UnknownFunction { .. })));
        assert!(matches!(
            eval_str("abs(1; 2)", &empty),
            Err(ResolveError::ArgumentCount { found: 2, .. })
        ));
        assert!(matches!(eval_str("max()", &empty), Err(ResolveError::ArgumentCount { found: 0, .. })));
        assert!(matches!(eval_str("1 / 0", &empty), Err(ResolveError::NonFinite { .. })));
    }
}
