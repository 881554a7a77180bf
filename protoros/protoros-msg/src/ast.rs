//! Parsed `.msg` records.
//!
//! A [`RecordDef`] is built once by [`crate::parse_record`] and never
//! mutated afterwards.  Its [`fmt::Display`] output is valid `.msg` text that
//! parses back to an equal record.

use std::fmt;

/// Array suffix of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayLen {
    /// `T[]`
    Unbounded,
    /// `T[N]`
    Fixed(usize),
}

/// A single field (or constant) declaration of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Resolved type name: a primitive or a `package/Name` reference.
    pub type_name: String,
    /// `None` for scalar fields.
    pub array: Option<ArrayLen>,
    pub name: String,
    /// Raw literal after `=` for constants, or a ROS 2 style default.
    pub default: Option<String>,
}

impl FieldSpec {
    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    /// Fixed element count, `None` for scalars and unbounded arrays.
    pub fn arity(&self) -> Option<usize> {
        match self.array {
            Some(ArrayLen::Fixed(n)) => Some(n),
            _ => None,
        }
    }

    /// Whether two fields have the same shape, ignoring name and default.
    pub fn same_shape(&self, other: &FieldSpec) -> bool {
        self.type_name == other.type_name && self.is_array() == other.is_array()
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)?;
        match self.array {
            Some(ArrayLen::Unbounded) => f.write_str("[]")?,
            Some(ArrayLen::Fixed(n)) => write!(f, "[{n}]")?,
            None => {}
        }
        write!(f, " {}", self.name)?;
        if let Some(default) = &self.default {
            write!(f, "={default}")?;
        }
        Ok(())
    }
}

/// A named, package-qualified record definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDef {
    /// `package/Name`
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl RecordDef {
    pub fn package(&self) -> &str {
        self.name.split_once('/').map_or("", |(pkg, _)| pkg)
    }

    pub fn short_name(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Element-wise shape equality of the field sequences.
    ///
    /// Record names, field names and defaults do not take part; order does.
    pub fn structurally_eq(&self, other: &RecordDef) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .zip(&other.fields)
                .all(|(a, b)| a.same_shape(b))
    }
}

impl fmt::Display for RecordDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in &self.fields {
            writeln!(f, "{field}")?;
        }
        Ok(())
    }
}
