//! Protobuf type → `.msg` type bindings.

use std::collections::BTreeMap;

/// Scalar and well-known protobuf types with a direct `.msg` counterpart.
///
/// `bytes` maps to the element type; fields of that type are emitted as
/// `uint8[]`.
pub const SCALAR_EQUIVALENCES: &[(&str, &str)] = &[
    ("double", "float64"),
    ("float", "float32"),
    ("int64", "int64"),
    ("uint64", "uint64"),
    ("int32", "int32"),
    ("fixed64", "uint64"),
    ("fixed32", "uint32"),
    ("bool", "bool"),
    ("string", "string"),
    ("bytes", "uint8"),
    ("uint32", "uint32"),
    ("sfixed32", "int32"),
    ("sfixed64", "int64"),
    ("sint32", "int32"),
    ("sint64", "int64"),
    (".google.protobuf.Timestamp", "time"),
    (".google.protobuf.Duration", "duration"),
];

/// Target of one registry entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEquivalence {
    pub target: String,
    /// The source type is generated for this run, not merely referenced.
    pub is_root: bool,
}

/// Mapping from fully qualified protobuf type names (or scalar keywords) to
/// `.msg` type names.  Scoped to a single translation run.
///
/// [`put`](Self::put) overwrites, so a binding found by structural matching
/// replaces the provisional one.
#[derive(Debug, Clone)]
pub struct EquivalenceRegistry {
    entries: BTreeMap<String, TypeEquivalence>,
}

impl EquivalenceRegistry {
    /// Registry seeded with [`SCALAR_EQUIVALENCES`].
    pub fn new() -> Self {
        let mut registry = Self {
            entries: BTreeMap::new(),
        };
        for (source, target) in SCALAR_EQUIVALENCES {
            registry.put(*source, *target, false);
        }
        registry
    }

    pub fn put(&mut self, source: impl Into<String>, target: impl Into<String>, is_root: bool) {
        self.entries.insert(
            source.into(),
            TypeEquivalence {
                target: target.into(),
                is_root,
            },
        );
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(|e| e.target.as_str())
    }

    pub fn entry(&self, source: &str) -> Option<&TypeEquivalence> {
        self.entries.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    /// Entries generated for this run, in source-name order.
    pub fn roots(&self) -> impl Iterator<Item = (&str, &TypeEquivalence)> {
        self.entries
            .iter()
            .filter(|(_, e)| e.is_root)
            .map(|(s, e)| (s.as_str(), e))
    }
}

impl Default for EquivalenceRegistry {
    fn default() -> Self {
        Self::new()
    }
}
