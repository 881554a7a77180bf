//! On-disk layout of record definitions: `<package>/msg/<Name>.msg`.

use std::path::Path;

use crate::error::PathLayoutError;

/// Directory that must directly contain every record file.
pub const MSG_DIR: &str = "msg";
/// Record file extension, without the dot.
pub const MSG_EXTENSION: &str = "msg";

/// Package and record name decoded from a record file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordPath {
    pub package: String,
    pub name: String,
}

impl RecordPath {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Decompose `.../<package>/msg/<Name>.msg`.
    pub fn from_path(path: &Path) -> Result<Self, PathLayoutError> {
        let owned = || path.to_path_buf();

        if path.extension().and_then(|e| e.to_str()) != Some(MSG_EXTENSION) {
            return Err(PathLayoutError::Extension { path: owned() });
        }
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PathLayoutError::Extension { path: owned() })?;

        let parent = path.parent();
        if parent.and_then(Path::file_name).and_then(|s| s.to_str()) != Some(MSG_DIR) {
            return Err(PathLayoutError::NotInMsgDir { path: owned() });
        }

        let package = parent
            .and_then(Path::parent)
            .and_then(Path::file_name)
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PathLayoutError::NoPackage { path: owned() })?;

        Ok(Self::new(package, name))
    }

    /// `package/Name`
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.package, self.name)
    }

    /// `package/msg/Name.msg`, always `/`-separated.
    pub fn file_name(&self) -> String {
        format!("{}/{MSG_DIR}/{}.{MSG_EXTENSION}", self.package, self.name)
    }
}
