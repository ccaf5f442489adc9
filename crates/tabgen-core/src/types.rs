//! Core value types.

use std::fmt;

/// Relative tolerance used when comparing a property value against its
/// re-evaluated formula.
pub const TOLERANCE: f64 = 1e-6;

/// Compare two floats within [`TOLERANCE`], relative to the larger magnitude
/// (or absolute for values below 1).
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// A length value with unit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    pub fn mm(value: f64) -> Self {
        Self { value, unit: LengthUnit::Mm }
    }

    pub fn cm(value: f64) -> Self {
        Self { value, unit: LengthUnit::Cm }
    }

    /// Convert to millimeters. Unitless values have no physical size.
    pub fn to_mm(&self) -> Option<f64> {
        self.unit.mm_per_unit().map(|scale| self.value * scale)
    }

    /// Convert to another physical unit.
    pub fn convert(&self, unit: LengthUnit) -> Option<Length> {
        let mm = self.to_mm()?;
        let scale = unit.mm_per_unit()?;
        Some(Length::new(mm / scale, unit))
    }
}

/// Length units understood by the host formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// Millimeters
    #[default]
    Mm,
    /// Centimeters (the host's internal unit)
    Cm,
    /// Meters
    M,
    /// Inches
    In,
    /// Counts and ratios
    Unitless,
}

impl LengthUnit {
    /// Suffix used when rendering a length literal, empty for unitless values.
    pub fn suffix(&self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::In => "in",
            LengthUnit::Unitless => "",
        }
    }

    /// Parse a unit suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "mm" => Some(LengthUnit::Mm),
            "cm" => Some(LengthUnit::Cm),
            "m" => Some(LengthUnit::M),
            "in" => Some(LengthUnit::In),
            _ => None,
        }
    }

    fn mm_per_unit(&self) -> Option<f64> {
        match self {
            LengthUnit::Mm => Some(1.0),
            LengthUnit::Cm => Some(10.0),
            LengthUnit::M => Some(1000.0),
            LengthUnit::In => Some(25.4),
            LengthUnit::Unitless => None,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// A cleaned, parameter-safe prefix identifying one jointed face.
///
/// Parameter names are generated as `{alias}_{property}`, so the alias only
/// ever contains lowercase characters, digits and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias(String);

impl Alias {
    /// Clean an arbitrary display name into an alias: spaces, hyphens and
    /// parentheses become underscores and the result is lowercased.
    pub fn clean(raw: &str) -> Self {
        let cleaned = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' | '(' | ')' => '_',
                other => other,
            })
            .collect::<String>()
            .to_lowercase();
        Alias(cleaned)
    }

    /// The fully qualified parameter name for a property of this face.
    pub fn qualify(&self, name: &str) -> String {
        format!("{}_{}", self.0, name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Alias {
    fn from(s: &str) -> Self {
        Alias::clean(s)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_cleaning() {
        let alias = Alias::clean("Box Body (1) XY-2");
        assert_eq!(alias.as_str(), "box_body__1__xy_2");
        assert_eq!(alias.qualify("fingers"), "box_body__1__xy_2_fingers");
    }

    #[test]
    fn test_length_conversion() {
        let len = Length::cm(2.5);
        assert!(approx_eq(len.to_mm().unwrap(), 25.0));
        let inches = Length::mm(25.4).convert(LengthUnit::In).unwrap();
        assert!(approx_eq(inches.value, 1.0));
        assert!(Length::new(3.0, LengthUnit::Unitless).to_mm().is_none());
    }

    #[test]
    fn test_approx_eq_is_relative() {
        assert!(approx_eq(1_000_000.0, 1_000_000.5));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(0.0, 1e-9));
    }
}
