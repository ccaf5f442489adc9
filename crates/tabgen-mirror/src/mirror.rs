//! Generation and materialization of mirrored parameters.

use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};
use tabgen_core::{Alias, Expression, LengthUnit, MirrorError, Property};
use tabgen_parser::parse_expression;

use crate::report::{MaterializeOutcome, MaterializedParameter, MirrorReport};
use crate::store::ParameterStore;

/// A property rewritten as a document parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct MirroredParameter {
    /// Unqualified property name
    pub property: String,
    /// Qualified parameter name, `{alias}_{property}`
    pub name: String,
    pub expression: String,
    pub unit: LengthUnit,
    pub comment: String,
}

/// Builds named parameters for the properties of one jointed face.
///
/// Names and formulas depend only on the alias and the properties, so
/// mirroring the same layout twice yields identical parameters.
#[derive(Debug, Clone)]
pub struct ExpressionMirror {
    alias: Alias,
    /// Leaf property -> document parameter the user typed in its place
    external: IndexMap<String, String>,
}

impl ExpressionMirror {
    pub fn new(alias: Alias) -> Self {
        Self {
            alias,
            external: IndexMap::new(),
        }
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    /// Mirror the input `property` as `abs(<parameter>)` instead of its
    /// literal value, provided the store holds `parameter`.
    pub fn bind_external(&mut self, property: &str, parameter: &str) -> &mut Self {
        self.external.insert(property.to_string(), parameter.to_string());
        self
    }

    /// The qualified parameter name of a property.
    pub fn parameter_name(&self, property: &str) -> String {
        self.alias.qualify(property)
    }

    /// Mirror properties without consulting a store. External bindings are
    /// not applied.
    pub fn mirror<'a, I>(&self, properties: I) -> Result<Vec<MirroredParameter>, MirrorError>
    where
        I: IntoIterator<Item = &'a Property>,
    {
        self.build(properties, |_| false)
    }

    /// Mirror properties, applying external bindings the store can satisfy.
    pub fn plan<'a, I, S>(&self, properties: I, store: &S) -> Result<Vec<MirroredParameter>, MirrorError>
    where
        I: IntoIterator<Item = &'a Property>,
        S: ParameterStore + ?Sized,
    {
        self.build(properties, |name| store.find_by_name(name).is_some())
    }

    fn build<'a, I, F>(&self, properties: I, has_parameter: F) -> Result<Vec<MirroredParameter>, MirrorError>
    where
        I: IntoIterator<Item = &'a Property>,
        F: Fn(&str) -> bool,
    {
        let mut mirrored = Vec::new();
        let mut defined: HashSet<&str> = HashSet::new();

        for property in properties {
            let parsed = parse_expression(&property.expression)?;

            let formula = match self.external.get(&property.name) {
                Some(parameter) if parsed.is_leaf() && has_parameter(parameter) => {
                    Expression::reference(parameter.as_str()).abs()
                }
                _ => {
                    if let Some(missing) = parsed.references().into_iter().find(|r| !defined.contains(r)) {
                        return Err(MirrorError::UnmaterializedReference {
                            property: property.name.clone(),
                            reference: missing.to_string(),
                        });
                    }
                    parsed.rename_references(&|name: &str| self.alias.qualify(name))
                }
            };

            mirrored.push(MirroredParameter {
                property: property.name.clone(),
                name: self.parameter_name(&property.name),
                expression: formula.to_string(),
                unit: property.unit,
                comment: format!("TabGen: {}", property.comment),
            });
            defined.insert(property.name.as_str());
        }

        Ok(mirrored)
    }

    /// Persist mirrored parameters, in order, through `store`.
    ///
    /// Existing parameters are never modified. One with the expected name
    /// but a different formula is used as found and reported as a
    /// [`MirrorError::ParameterNameCollision`] warning.
    pub fn materialize<'a, I, S>(&self, properties: I, store: &mut S) -> Result<MirrorReport, MirrorError>
    where
        I: IntoIterator<Item = &'a Property>,
        S: ParameterStore + ?Sized,
    {
        let plan = self.plan(properties, &*store)?;
        let mut report = MirrorReport::default();

        for parameter in plan {
            let (expression, outcome) = match store.find_by_name(&parameter.name) {
                Some(existing) if existing.expression == parameter.expression => {
                    (existing.expression, MaterializeOutcome::Reused)
                }
                Some(existing) => {
                    warn!(
                        target: "tabgen::mirror",
                        "parameter {} exists as '{}', expected '{}'; using existing",
                        parameter.name, existing.expression, parameter.expression
                    );
                    report.warn(MirrorError::ParameterNameCollision {
                        name: parameter.name.clone(),
                        existing: existing.expression.clone(),
                        expected: parameter.expression.clone(),
                    });
                    (existing.expression, MaterializeOutcome::Found)
                }
                None => {
                    let created = store.create(
                        &parameter.name,
                        &parameter.expression,
                        parameter.unit,
                        &parameter.comment,
                    )?;
                    debug!(target: "tabgen::mirror", "created {} = {}", created.name, created.expression);
                    (created.expression, MaterializeOutcome::Created)
                }
            };

            report.record(MaterializedParameter {
                property: parameter.property,
                name: parameter.name,
                expression,
                outcome,
            });
        }

        Ok(report)
    }
}
