//! Error types for descriptor translation.

use protoros_msg::MsgError;

/// Error returned while translating protobuf descriptors.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A field refers to a type that has not been translated (or seeded) yet.
    #[error("field '{field}' of '{record}' references unmapped type '{type_name}'")]
    UnmappedFieldType {
        record: String,
        field: String,
        type_name: String,
    },

    /// The raw type tag is not a known `FieldDescriptorProto.Type` value.
    #[error("field '{field}' of '{record}' has unknown type tag {tag}")]
    UnknownTypeTag {
        record: String,
        field: String,
        tag: i32,
    },

    #[error("field '{field}' of '{record}' is not supported: {detail}")]
    UnsupportedField {
        record: String,
        field: String,
        detail: String,
    },

    /// A generated record would replace a different record of the same name.
    #[error("generated record '{name}' collides with an existing record of a different shape")]
    NameCollision { name: String },

    #[error("no root package for '{file}': pass --package or declare a protobuf package")]
    MissingRootPackage { file: String },

    /// The generated text failed to parse or resolve.
    #[error(transparent)]
    Msg(#[from] MsgError),
}
