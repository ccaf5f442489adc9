//! Property sheets: properties defined by formula, valued by evaluation.
//!
//! A derived property is never given a number directly. The sheet
//! evaluates its formula against the properties registered so far, so
//! the stored value and the stored formula come from the same tree.

use indexmap::IndexMap;
use tabgen_core::{
    Expression, Length, LengthUnit, LayoutError, ParamMap, Property, ResolveError,
};
use tabgen_resolver::evaluate;

/// An ordered, append-only set of properties under construction.
#[derive(Debug, Clone)]
pub struct PropertySheet {
    unit: LengthUnit,
    properties: IndexMap<String, Property>,
    bindings: ParamMap,
}

impl PropertySheet {
    /// Create an empty sheet whose lengths are expressed in `unit`.
    pub fn new(unit: LengthUnit) -> Self {
        Self {
            unit,
            properties: IndexMap::new(),
            bindings: ParamMap::new(),
        }
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Register a length input. Its formula is the literal `abs(<value> <unit>)`.
    pub fn length_input(
        &mut self,
        name: &str,
        value: f64,
        comment: &str,
    ) -> Result<Expression, LayoutError> {
        let literal = match self.unit {
            LengthUnit::Unitless => Expression::Literal(value),
            unit => Expression::Length(Length::new(value, unit)),
        };
        self.define(name, value, literal.abs(), self.unit, comment)
    }

    /// Register a count input. Its formula is the literal `abs(<value>)`.
    pub fn count_input(
        &mut self,
        name: &str,
        value: u32,
        comment: &str,
    ) -> Result<Expression, LayoutError> {
        let value = f64::from(value);
        self.define(name, value, Expression::Literal(value).abs(), LengthUnit::Unitless, comment)
    }

    /// Define a derived length by formula.
    pub fn length(
        &mut self,
        name: &str,
        formula: Expression,
        comment: &str,
    ) -> Result<Expression, LayoutError> {
        let value = evaluate(&formula, &self.bindings)?;
        self.define(name, value, formula, self.unit, comment)
    }

    /// Define a derived count by formula.
    pub fn count(
        &mut self,
        name: &str,
        formula: Expression,
        comment: &str,
    ) -> Result<Expression, LayoutError> {
        let value = evaluate(&formula, &self.bindings)?;
        self.define(name, value, formula, LengthUnit::Unitless, comment)
    }

    fn define(
        &mut self,
        name: &str,
        value: f64,
        formula: Expression,
        unit: LengthUnit,
        comment: &str,
    ) -> Result<Expression, LayoutError> {
        if self.properties.contains_key(name) {
            return Err(ResolveError::DuplicateDefinition { name: name.to_string() }.into());
        }

        let property = Property::new(name, value, formula.to_string(), comment, unit);
        self.bindings.insert(name, value);
        self.properties.insert(name.to_string(), property);
        Ok(Expression::reference(name))
    }

    /// Value of a property registered so far.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.bindings.get(name)
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub(crate) fn into_properties(self) -> IndexMap<String, Property> {
        self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_use_literal_formulas() {
        let mut sheet = PropertySheet::new(LengthUnit::Mm);
        sheet.length_input("depth", 3.2, "depth of the notches to cut").unwrap();
        sheet.count_input("interior_walls", 2, "number of interior walls").unwrap();

        let depth = sheet.get("depth").unwrap();
        assert_eq!(depth.expression, "abs(3.2 mm)");
        assert_eq!(depth.unit, LengthUnit::Mm);

        let walls = sheet.get("interior_walls").unwrap();
        assert_eq!(walls.expression, "abs(2)");
        assert_eq!(walls.unit, LengthUnit::Unitless);
    }

    #[test]
    fn test_derived_value_comes_from_formula() {
        let mut sheet = PropertySheet::new(LengthUnit::Mm);
        let face = sheet.length_input("face_length", 100.0, "").unwrap();
        let margin = sheet.length_input("margin", 5.0, "").unwrap();
        sheet.length("adjusted_length", face - margin * 2.0, "").unwrap();

        let adjusted = sheet.get("adjusted_length").unwrap();
        assert_eq!(adjusted.value, 90.0);
        assert_eq!(adjusted.expression, "face_length - margin * 2");
    }

    #[test]
    fn test_forward_reference_is_rejected() {
        let mut sheet = PropertySheet::new(LengthUnit::Mm);
        let result = sheet.length("offset", Expression::reference("margin"), "");
        assert_eq!(
            result,
            Err(LayoutError::Resolve(ResolveError::UndefinedParameter { name: "margin".into() }))
        );
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_duplicate_definition_is_rejected() {
        let mut sheet = PropertySheet::new(LengthUnit::Mm);
        sheet.length_input("kerf", 0.2, "").unwrap();
        assert!(matches!(
            sheet.length_input("kerf", 0.3, ""),
            Err(LayoutError::Resolve(ResolveError::DuplicateDefinition { .. }))
        ));
        assert_eq!(sheet.value("kerf"), Some(0.2));
    }
}
