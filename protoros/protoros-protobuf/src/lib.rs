//! Protobuf descriptor → ROS `.msg` translation for `protoros`.
//!
//! This crate turns the message and enum declarations of a protoc
//! `CodeGeneratorRequest` into `.msg` records.  Along the way it keeps an
//! [`EquivalenceRegistry`] of protobuf type → `.msg` type bindings and reuses
//! an existing record whenever a freshly generated one has the same field
//! shape (see [`protoros_msg::Corpus::find_match`]).
//!
//! # Pipeline
//!
//! ```text
//! CodeGeneratorRequest
//!   └─ Translator::translate_file   – messages, nested enums, top-level enums
//!       └─ parse_record             – self-check of the generated text
//!           └─ Corpus::find_match   – alias to a canonical record, or emit
//!               └─ assemble_response – GeneratedFile list → CodeGeneratorResponse
//! ```

mod error;
mod plugin;
mod registry;
mod scalar;
mod translate;

pub use error::TranslateError;
pub use plugin::{
    WELL_KNOWN_PACKAGE, assemble_response, default_root_package, generate, msg_package_name,
    translate_request,
};
pub use registry::{EquivalenceRegistry, SCALAR_EQUIVALENCES, TypeEquivalence};
pub use scalar::{SourceType, source_type};
pub use translate::{GeneratedFile, Translator, qualify};
