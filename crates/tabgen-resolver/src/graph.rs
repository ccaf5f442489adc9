//! Dependency ordering of named formulas.

use std::collections::HashSet;

use indexmap::IndexMap;
use tabgen_core::{Expression, ParamMap, ResolveError};

use crate::evaluate::evaluate;

/// Order formulas so every definition comes after the definitions it
/// references. Ties keep definition order.
///
/// References must resolve to another definition or to a name in `known`.
pub fn resolve_order<'a>(
    definitions: &'a IndexMap<String, Expression>,
    known: &ParamMap,
) -> Result<Vec<&'a str>, ResolveError> {
    let mut sorter = Sorter::new(definitions, known);
    for name in definitions.keys() {
        sorter.visit(name)?;
    }
    Ok(sorter.order)
}

/// Evaluate every formula in dependency order.
///
/// Returns `known` extended with one binding per definition.
pub fn resolve_all(
    definitions: &IndexMap<String, Expression>,
    known: &ParamMap,
) -> Result<ParamMap, ResolveError> {
    let order = resolve_order(definitions, known)?;
    let mut bindings = known.clone();
    for name in order {
        if let Some(expr) = definitions.get(name) {
            let value = evaluate(expr, &bindings)?;
            bindings.insert(name, value);
        }
    }
    Ok(bindings)
}

struct Sorter<'a, 'k> {
    definitions: &'a IndexMap<String, Expression>,
    known: &'k ParamMap,
    visited: HashSet<&'a str>,
    order: Vec<&'a str>,
    /// Track the current resolution path for circular reference detection.
    resolution_stack: Vec<&'a str>,
}

impl<'a, 'k> Sorter<'a, 'k> {
    fn new(definitions: &'a IndexMap<String, Expression>, known: &'k ParamMap) -> Self {
        Self {
            definitions,
            known,
            visited: HashSet::new(),
            order: Vec::with_capacity(definitions.len()),
            resolution_stack: Vec::new(),
        }
    }

    fn visit(&mut self, name: &'a str) -> Result<(), ResolveError> {
        if self.visited.contains(name) {
            return Ok(());
        }

        if let Some(pos) = self.resolution_stack.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> =
                self.resolution_stack[pos..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(ResolveError::CircularReference { cycle });
        }

        let definitions = self.definitions;
        let Some((key, expr)) = definitions.get_key_value(name) else {
            if self.known.contains(name) {
                return Ok(());
            }
            return Err(ResolveError::UndefinedParameter { name: name.to_string() });
        };

        self.resolution_stack.push(key);
        for dep in expr.references() {
            self.visit(dep)?;
        }
        self.resolution_stack.pop();

        self.visited.insert(key);
        self.order.push(key);
        Ok(())
    }
}
