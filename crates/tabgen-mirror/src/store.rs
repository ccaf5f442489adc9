//! Parameter store interface and an in-memory implementation.

use indexmap::IndexMap;
use tabgen_core::{LengthUnit, MirrorError};

/// A named, formula-backed parameter of a host document.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub expression: String,
    pub unit: LengthUnit,
    pub comment: String,
}

/// Where mirrored parameters are persisted.
pub trait ParameterStore {
    /// Look up a parameter by exact name.
    fn find_by_name(&self, name: &str) -> Option<Parameter>;

    /// Create a new parameter. Fails if the name is taken.
    fn create(
        &mut self,
        name: &str,
        expression: &str,
        unit: LengthUnit,
        comment: &str,
    ) -> Result<Parameter, MirrorError>;
}

/// Insertion-ordered parameter store kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryParameterStore {
    parameters: IndexMap<String, Parameter>,
}

impl InMemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter the document already owns.
    pub fn with_parameter(mut self, name: &str, expression: &str, unit: LengthUnit) -> Self {
        self.parameters.insert(
            name.to_string(),
            Parameter {
                name: name.to_string(),
                expression: expression.to_string(),
                unit,
                comment: String::new(),
            },
        );
        self
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl ParameterStore for InMemoryParameterStore {
    fn find_by_name(&self, name: &str) -> Option<Parameter> {
        self.parameters.get(name).cloned()
    }

    fn create(
        &mut self,
        name: &str,
        expression: &str,
        unit: LengthUnit,
        comment: &str,
    ) -> Result<Parameter, MirrorError> {
        if self.parameters.contains_key(name) {
            return Err(MirrorError::NameTaken { name: name.to_string() });
        }
        let parameter = Parameter {
            name: name.to_string(),
            expression: expression.to_string(),
            unit,
            comment: comment.to_string(),
        };
        self.parameters.insert(name.to_string(), parameter.clone());
        Ok(parameter)
    }
}
