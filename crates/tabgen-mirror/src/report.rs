//! Results of materializing a mirrored layout.

use tabgen_core::MirrorError;

/// What happened to one mirrored parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterializeOutcome {
    /// A new parameter was created.
    Created,
    /// A parameter with the same name and formula already existed.
    Reused,
    /// A parameter with the same name but another formula already existed
    /// and was used in place of the mirrored one.
    Found,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedParameter {
    pub property: String,
    pub name: String,
    /// Formula of the parameter as it exists in the store.
    pub expression: String,
    pub outcome: MaterializeOutcome,
}

/// Per-parameter outcomes of a materialization, plus collision warnings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MirrorReport {
    parameters: Vec<MaterializedParameter>,
    warnings: Vec<MirrorError>,
}

impl MirrorReport {
    pub(crate) fn record(&mut self, parameter: MaterializedParameter) {
        self.parameters.push(parameter);
    }

    pub(crate) fn warn(&mut self, warning: MirrorError) {
        self.warnings.push(warning);
    }

    pub fn parameters(&self) -> &[MaterializedParameter] {
        &self.parameters
    }

    pub fn get(&self, property: &str) -> Option<&MaterializedParameter> {
        self.parameters.iter().find(|p| p.property == property)
    }

    /// Name collisions resolved in favour of the existing parameter.
    pub fn warnings(&self) -> &[MirrorError] {
        &self.warnings
    }

    pub fn has_collisions(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn count(&self, outcome: MaterializeOutcome) -> usize {
        self.parameters.iter().filter(|p| p.outcome == outcome).count()
    }
}
