//! Operating-point (OP) reports.
//!
//! Every device reports its operating point as a fixed-order list of
//! labelled values. The reporting collaborator prints or plots them without
//! knowing which device produced them.

use std::fmt;

use crate::units::format_value;

/// A single value in an operating-point report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum OpValue {
    /// Free text, e.g. the part identifier.
    Text(String),
    /// A numeric quantity in SI units.
    Number(f64),
}

impl OpValue {
    /// Numeric value, if any.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OpValue::Number(v) => Some(*v),
            OpValue::Text(_) => None,
        }
    }

    /// Text value, if any.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OpValue::Text(s) => Some(s),
            OpValue::Number(_) => None,
        }
    }
}

impl From<f64> for OpValue {
    fn from(v: f64) -> Self {
        OpValue::Number(v)
    }
}

impl From<String> for OpValue {
    fn from(s: String) -> Self {
        OpValue::Text(s)
    }
}

impl fmt::Display for OpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpValue::Text(s) => f.write_str(s),
            OpValue::Number(v) => f.write_str(&format_value(*v)),
        }
    }
}

/// Operating-point report: labels and values in a fixed order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OpInfo {
    labels: Vec<&'static str>,
    values: Vec<OpValue>,
}

impl OpInfo {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a labelled entry.
    pub fn push(&mut self, label: &'static str, value: impl Into<OpValue>) {
        self.labels.push(label);
        self.values.push(value.into());
    }

    /// Builder form of [`OpInfo::push`].
    pub fn with(mut self, label: &'static str, value: impl Into<OpValue>) -> Self {
        self.push(label, value);
        self
    }

    /// Labels, in report order.
    pub fn labels(&self) -> &[&'static str] {
        &self.labels
    }

    /// Values, in report order.
    pub fn values(&self) -> &[OpValue] {
        &self.values
    }

    /// Look up a value by its label.
    pub fn get(&self, label: &str) -> Option<&OpValue> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .map(|idx| &self.values[idx])
    }

    /// Iterate over `(label, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &OpValue)> {
        self.labels.iter().copied().zip(self.values.iter())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl fmt::Display for OpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.iter() {
            writeln!(f, "{label:<16} = {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_keeps_insertion_order() {
        let info = OpInfo::new()
            .with("Part ID", "R1".to_string())
            .with("R [Ω]", 1000.0)
            .with("P [W]", 0.004);

        assert_eq!(info.len(), 3);
        assert_eq!(info.labels(), &["Part ID", "R [Ω]", "P [W]"]);
        assert_eq!(info.values()[0].as_str(), Some("R1"));
        assert_eq!(info.get("P [W]").and_then(OpValue::as_f64), Some(0.004));
        assert!(info.get("missing").is_none());
    }

    #[test]
    fn test_display_uses_engineering_notation() {
        let info = OpInfo::new()
            .with("Part ID", "M1".to_string())
            .with("I(n1->n2) [A]", 0.002);
        let text = info.to_string();

        assert!(text.contains("M1"));
        assert!(text.contains("2.0000m"));
        assert_eq!(text.lines().count(), 2);
    }
}
