//! Round-trip verification of computed properties.

use indexmap::IndexMap;
use tabgen_core::{approx_eq, Expression, ParamMap, Property, ResolveError};
use tabgen_parser::parse_expression;

use crate::graph::resolve_all;

/// Re-derive every property from its formula alone and compare with its
/// stored value.
///
/// Leaf formulas carry their literal inputs, so a consistent property set
/// needs no outside bindings. Returns the re-derived bindings.
pub fn verify_properties(properties: &[Property]) -> Result<ParamMap, ResolveError> {
    let mut definitions: IndexMap<String, Expression> = IndexMap::with_capacity(properties.len());

    for property in properties {
        let expr = parse_expression(&property.expression).map_err(|source| ResolveError::Malformed {
            name: property.name.clone(),
            source,
        })?;
        if definitions.insert(property.name.clone(), expr).is_some() {
            return Err(ResolveError::DuplicateDefinition {
                name: property.name.clone(),
            });
        }
    }

    let bindings = resolve_all(&definitions, &ParamMap::new())?;

    for property in properties {
        let evaluated = bindings
            .get(&property.name)
            .ok_or_else(|| ResolveError::UndefinedParameter {
                name: property.name.clone(),
            })?;
        if !approx_eq(evaluated, property.value) {
            return Err(ResolveError::Mismatch {
                name: property.name.clone(),
                value: property.value,
                evaluated,
            });
        }
    }

    Ok(bindings)
}
