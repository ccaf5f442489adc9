//! Error types for the TabGen engine.

use thiserror::Error;

/// Errors while parsing a formula.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected input at offset {offset}: {found:?}")]
    UnexpectedInput { offset: usize, found: String },

    #[error("Unexpected end of formula")]
    UnexpectedEof,
}

/// Errors while evaluating formulas against named parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ResolveError {
    #[error("Undefined parameter: {name}")]
    UndefinedParameter { name: String },

    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("{function}() expects {expected} argument(s), found {found}")]
    ArgumentCount {
        function: String,
        expected: String,
        found: usize,
    },

    #[error("Formula '{expression}' does not evaluate to a finite number")]
    NonFinite { expression: String },

    #[error("Circular parameter reference: {}", .cycle.join(" -> "))]
    CircularReference { cycle: Vec<String> },

    #[error("Duplicate parameter definition: {name}")]
    DuplicateDefinition { name: String },

    #[error("Formula of {name} evaluates to {evaluated}, but its value is {value}")]
    Mismatch { name: String, value: f64, evaluated: f64 },

    #[error("Formula of {name} is malformed: {source}")]
    Malformed {
        name: String,
        #[source]
        source: ParseError,
    },
}

/// Errors during layout computation. Always caused by caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid inputs: {reason}")]
    InvalidInputs { reason: String },

    #[error("Invalid finger count {count}: must be odd, at least 3 and at most {max}", max = crate::MAX_FINGERS)]
    InvalidFingerCount { count: u32 },

    #[error("Formula error: {0}")]
    Resolve(#[from] ResolveError),
}

impl LayoutError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        LayoutError::InvalidInputs { reason: reason.into() }
    }
}

/// Errors while mirroring properties into named document parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MirrorError {
    /// An existing parameter already owns the expected name. Reported as a
    /// warning: the existing parameter is used instead of a duplicate.
    #[error("Parameter {name} already exists as '{existing}' (expected '{expected}'); using the existing parameter")]
    ParameterNameCollision {
        name: String,
        existing: String,
        expected: String,
    },

    #[error("Property {property} references {reference} before it is defined")]
    UnmaterializedReference { property: String, reference: String },

    #[error("Parameter store already holds a parameter named {name}")]
    NameTaken { name: String },

    #[error("Parameter store rejected {name}: {reason}")]
    StoreRejected { name: String, reason: String },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors from the face/geometry boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FaceError {
    #[error("Face {id} not found")]
    FaceNotFound { id: u64 },

    #[error("Face {id} is not an edge face of its body")]
    NotAnEdgeFace { id: u64 },

    #[error("Reference face {id} is not parallel to the selected face")]
    ReferenceNotParallel { id: u64 },

    #[error("Dual edge placement requires a reference face")]
    MissingReference,
}

/// Errors at the placement boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlacementError {
    #[error("No valid primary axis to place notches along")]
    PrimaryAxisMissing,

    #[error("Layout has no notches to place")]
    NothingToPlace,
}
