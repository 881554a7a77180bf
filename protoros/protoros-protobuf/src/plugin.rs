//! Request-level driver: one `CodeGeneratorRequest` in, one
//! `CodeGeneratorResponse` out.

use prost_types::{
    FileDescriptorProto,
    compiler::{CodeGeneratorRequest, CodeGeneratorResponse, code_generator_response},
};
use protoros_msg::Corpus;

use crate::{
    error::TranslateError,
    registry::EquivalenceRegistry,
    translate::{GeneratedFile, Translator},
};

/// Package whose files are never translated; its message types that matter
/// are seeded in the registry.
pub const WELL_KNOWN_PACKAGE: &str = "google.protobuf";

/// `.msg` package name of a protobuf package: `.` replaced by `_`.
pub fn msg_package_name(package: &str) -> String {
    package.replace('.', "_")
}

/// Root package used when none is configured: see [`msg_package_name`].
pub fn default_root_package(file: &FileDescriptorProto) -> Result<String, TranslateError> {
    let package = file.package();
    if package.is_empty() {
        return Err(TranslateError::MissingRootPackage {
            file: file.name().to_string(),
        });
    }
    Ok(msg_package_name(package))
}

/// Translate every file of `request`, in request order, into `.msg` files.
pub fn translate_request(
    request: &CodeGeneratorRequest,
    root_package: Option<&str>,
    registry: &mut EquivalenceRegistry,
    corpus: &mut Corpus,
) -> Result<Vec<GeneratedFile>, TranslateError> {
    let mut files = Vec::new();
    for file in &request.proto_file {
        let root = match root_package {
            Some(root) => root.to_string(),
            None if file.package() == WELL_KNOWN_PACKAGE => continue,
            None => default_root_package(file)?,
        };
        let mut translator = Translator::new(registry, corpus, root);
        translator.translate_file(file)?;
        files.extend(translator.into_files());
    }
    Ok(files)
}

/// Collect generated files into a response.
pub fn assemble_response(files: Vec<GeneratedFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        file: files
            .into_iter()
            .map(|f| code_generator_response::File {
                name: Some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Run a whole request against `corpus` with a fresh registry.
pub fn generate(
    request: &CodeGeneratorRequest,
    root_package: Option<&str>,
    mut corpus: Corpus,
) -> Result<CodeGeneratorResponse, TranslateError> {
    let mut registry = EquivalenceRegistry::new();
    let files = translate_request(request, root_package, &mut registry, &mut corpus)?;
    Ok(assemble_response(files))
}
