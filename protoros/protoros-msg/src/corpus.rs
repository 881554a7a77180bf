//! Corpus validation and structural matching over a set of records.
//!
//! Loading is two-pass:
//!
//! 1. Every file under the root is scanned.  Files that do not follow the
//!    `<package>/msg/<Name>.msg` layout, cannot be read, or fail to parse are
//!    skipped; everything else is accepted and its name joins the type
//!    universe.
//! 2. Every field of every accepted record must name a type in the universe.
//!    The first miss aborts the whole load.
//!
//! Because the universe is complete before pass 2 starts, forward references
//! between records are legal regardless of scan order.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::{
    ast::RecordDef,
    error::{MsgError, PathLayoutError},
    layout::RecordPath,
    parser::parse_record,
    primitive::Primitive,
};

/// Why a scanned path did not yield a record.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Layout(#[from] PathLayoutError),

    #[error("unreadable: {0}")]
    Read(#[source] std::io::Error),

    #[error(transparent)]
    Parse(MsgError),
}

/// Result of scanning one path during pass 1.
#[derive(Debug)]
pub enum ScanOutcome {
    Accepted(RecordDef),
    Skipped { path: PathBuf, reason: SkipReason },
}

impl ScanOutcome {
    /// Decompose, read and parse a single record file.
    pub fn scan(path: &Path) -> Self {
        let skipped = |reason| Self::Skipped {
            path: path.to_path_buf(),
            reason,
        };

        let record_path = match RecordPath::from_path(path) {
            Ok(rp) => rp,
            Err(e) => return skipped(SkipReason::Layout(e)),
        };
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => return skipped(SkipReason::Read(e)),
        };
        match parse_record(&record_path.package, &record_path.name, &text) {
            Ok(record) => Self::Accepted(record),
            Err(e) => skipped(SkipReason::Parse(e)),
        }
    }
}

/// Records known so far plus the universe of resolvable type names.
///
/// Records keep insertion order, which is the tie-break order of
/// [`Corpus::find_match`].
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<RecordDef>,
    universe: HashSet<String>,
}

impl Corpus {
    /// Empty corpus whose universe holds only the primitives.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            universe: Primitive::ALL
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        }
    }

    /// Scan `root` recursively and verify that the accepted records are closed
    /// under type references.
    pub fn load_dir(root: impl AsRef<Path>) -> Result<Self, MsgError> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(MsgError::CorpusRoot {
                path: root.to_path_buf(),
            });
        }

        let mut corpus = Self::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match ScanOutcome::scan(entry.path()) {
                ScanOutcome::Accepted(record) => corpus.insert(record),
                ScanOutcome::Skipped { path, reason } => {
                    debug!(path = %path.display(), %reason, "skipping file");
                }
            }
        }

        corpus.validate()?;
        info!(
            root = %root.display(),
            records = corpus.records.len(),
            "verified all records in corpus"
        );
        Ok(corpus)
    }

    /// Accept `record` without checking its references.
    pub fn insert(&mut self, record: RecordDef) {
        self.universe.insert(record.name.clone());
        self.records.push(record);
    }

    /// Pass 2: every field of every record resolves.
    pub fn validate(&self) -> Result<(), MsgError> {
        self.records
            .iter()
            .try_for_each(|record| self.check_resolvable(record))
    }

    /// Check `record`'s field types against the universe.  A record may refer
    /// to itself even before it is inserted.
    pub fn check_resolvable(&self, record: &RecordDef) -> Result<(), MsgError> {
        match record
            .fields
            .iter()
            .find(|f| f.type_name != record.name && !self.universe.contains(&f.type_name))
        {
            Some(field) => Err(MsgError::UnresolvedType {
                record: record.name.clone(),
                missing_type: field.type_name.clone(),
            }),
            None => Ok(()),
        }
    }

    /// First record (in insertion order) with the same field shape as
    /// `candidate`.
    pub fn find_match(&self, candidate: &RecordDef) -> Option<&RecordDef> {
        self.records.iter().find(|r| r.structurally_eq(candidate))
    }

    pub fn contains_type(&self, name: &str) -> bool {
        self.universe.contains(name)
    }

    pub fn records(&self) -> &[RecordDef] {
        &self.records
    }

    pub fn universe(&self) -> &HashSet<String> {
        &self.universe
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}
