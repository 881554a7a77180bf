//! Walk protobuf descriptors and emit one `.msg` record per message or enum.
//!
//! For every message, in declaration order:
//!
//! 1. qualify its name with the enclosing scope (`.pkg.Msg`),
//! 2. register a provisional binding `root/Msg` unless one exists,
//! 3. translate nested enums, so fields can refer to them,
//! 4. map every field through the [`EquivalenceRegistry`],
//! 5. parse the generated text back and look for a structurally identical
//!    record in the [`Corpus`].  A match rebinds the source type to the
//!    existing record and nothing is emitted; otherwise the new record is
//!    emitted and joins the corpus.
//!
//! Nested messages are not translated.

use prost_types::{
    DescriptorProto, EnumDescriptorProto, FieldDescriptorProto, FileDescriptorProto,
    field_descriptor_proto::Label,
};
use protoros_msg::{Corpus, Primitive, RecordPath, parse_record};
use tracing::debug;

use crate::{
    error::TranslateError,
    plugin::{WELL_KNOWN_PACKAGE, msg_package_name},
    registry::EquivalenceRegistry,
    scalar::source_type,
};

/// One output file of the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `root/msg/Name.msg`
    pub name: String,
    pub content: String,
}

/// `.`-join `scope` and `name`, always with a leading `.`.
pub fn qualify(scope: &str, name: &str) -> String {
    let joined = format!("{scope}.{name}");
    if joined.starts_with('.') {
        joined
    } else {
        format!(".{joined}")
    }
}

/// Translator for one root package.
///
/// Borrows the run-scoped registry and corpus so that several files (or
/// several root packages) can share them.
pub struct Translator<'a> {
    registry: &'a mut EquivalenceRegistry,
    corpus: &'a mut Corpus,
    root_package: String,
    files: Vec<GeneratedFile>,
}

impl<'a> Translator<'a> {
    pub fn new(
        registry: &'a mut EquivalenceRegistry,
        corpus: &'a mut Corpus,
        root_package: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            corpus,
            root_package: root_package.into(),
            files: Vec::new(),
        }
    }

    /// Translate the top-level messages and enums of `file`.
    pub fn translate_file(&mut self, file: &FileDescriptorProto) -> Result<(), TranslateError> {
        let package = file.package();
        if package == WELL_KNOWN_PACKAGE {
            debug!(file = file.name(), "skipping well-known types");
            return Ok(());
        }
        debug!(file = file.name(), package, "translating proto file");

        let is_root = package.is_empty()
            || package == self.root_package
            || msg_package_name(package) == self.root_package;
        for message in &file.message_type {
            self.translate_message(message, package, is_root)?;
        }
        for enumeration in &file.enum_type {
            self.translate_enum(enumeration, package, is_root)?;
        }
        for service in &file.service {
            debug!(service = service.name(), "services are not translated");
        }
        Ok(())
    }

    /// Translate `message` declared in `scope` (a package or a qualified
    /// message name).
    pub fn translate_message(
        &mut self,
        message: &DescriptorProto,
        scope: &str,
        is_root: bool,
    ) -> Result<(), TranslateError> {
        let source = qualify(scope, message.name());
        debug!(message = %source, "translating message");
        self.bind_provisional(&source, message.name(), is_root);

        for enumeration in &message.enum_type {
            self.translate_enum(enumeration, &source, is_root)?;
        }
        for nested in &message.nested_type {
            debug!(
                message = %source,
                nested = nested.name(),
                "nested messages are not translated"
            );
        }

        let lines = message
            .field
            .iter()
            .map(|field| self.field_line(&source, field))
            .collect::<Result<Vec<_>, _>>()?;
        self.finalize(&source, message.name(), &lines, is_root)
    }

    /// Translate `enumeration` as a record of `int32` constants.
    pub fn translate_enum(
        &mut self,
        enumeration: &EnumDescriptorProto,
        scope: &str,
        is_root: bool,
    ) -> Result<(), TranslateError> {
        let source = qualify(scope, enumeration.name());
        debug!(enumeration = %source, "translating enum");
        self.bind_provisional(&source, enumeration.name(), is_root);

        let lines: Vec<String> = enumeration
            .value
            .iter()
            .map(|v| format!("{} {}={}", Primitive::Int32, v.name(), v.number()))
            .collect();
        self.finalize(&source, enumeration.name(), &lines, is_root)
    }

    /// Files emitted so far.
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.files
    }

    fn bind_provisional(&mut self, source: &str, bare: &str, is_root: bool) {
        if !self.registry.contains(source) {
            let target = format!("{}/{bare}", self.root_package);
            self.registry.put(source, target, is_root);
        }
    }

    fn field_line(
        &self,
        record: &str,
        field: &FieldDescriptorProto,
    ) -> Result<String, TranslateError> {
        let source = source_type(record, field)?;
        let target =
            self.registry
                .get(source.name)
                .ok_or_else(|| TranslateError::UnmappedFieldType {
                    record: record.to_string(),
                    field: field.name().to_string(),
                    type_name: source.name.to_string(),
                })?;

        let repeated = field.label() == Label::Repeated;
        if repeated && source.implicit_array {
            return Err(TranslateError::UnsupportedField {
                record: record.to_string(),
                field: field.name().to_string(),
                detail: format!("repeated `{}` has no .msg form", source.name),
            });
        }
        let suffix = if repeated || source.implicit_array {
            "[]"
        } else {
            ""
        };
        Ok(format!("{target}{suffix} {}", field.name()))
    }

    fn finalize(
        &mut self,
        source: &str,
        bare: &str,
        lines: &[String],
        is_root: bool,
    ) -> Result<(), TranslateError> {
        let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
        let record = parse_record(&self.root_package, bare, &content)?;

        if let Some(canonical) = self.corpus.find_match(&record) {
            debug!(source, canonical = %canonical.name, "reusing structurally identical record");
            let target = canonical.name.clone();
            self.registry.put(source, target, is_root);
            return Ok(());
        }

        if self.corpus.contains_type(&record.name) {
            return Err(TranslateError::NameCollision { name: record.name });
        }
        self.corpus.check_resolvable(&record)?;

        self.registry.put(source, record.name.clone(), is_root);
        self.files.push(GeneratedFile {
            name: RecordPath::new(&self.root_package, bare).file_name(),
            content,
        });
        self.corpus.insert(record);
        Ok(())
    }
}
