//! Protobuf field type tags → registry keys.

use prost_types::{FieldDescriptorProto, field_descriptor_proto::Type};

use crate::error::TranslateError;

/// Registry key of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceType<'a> {
    /// Scalar keyword (`"double"`) or fully qualified name (`".pkg.Msg"`).
    pub name: &'a str,
    /// The `.msg` form is an array even for a singular field (`bytes`).
    pub implicit_array: bool,
}

impl<'a> SourceType<'a> {
    fn scalar(name: &'static str) -> Self {
        Self {
            name,
            implicit_array: false,
        }
    }
}

/// Resolve the declared type of `field`, a member of `record`.
pub fn source_type<'a>(
    record: &str,
    field: &'a FieldDescriptorProto,
) -> Result<SourceType<'a>, TranslateError> {
    let unsupported = |detail: &str| TranslateError::UnsupportedField {
        record: record.to_string(),
        field: field.name().to_string(),
        detail: detail.to_string(),
    };

    let Some(tag) = field.r#type else {
        // Unresolved descriptors may omit the tag and carry only a name.
        return named(field).ok_or_else(|| unsupported("missing type"));
    };
    let ty = Type::try_from(tag).map_err(|_| TranslateError::UnknownTypeTag {
        record: record.to_string(),
        field: field.name().to_string(),
        tag,
    })?;

    let source = match ty {
        Type::Double => SourceType::scalar("double"),
        Type::Float => SourceType::scalar("float"),
        Type::Int64 => SourceType::scalar("int64"),
        Type::Uint64 => SourceType::scalar("uint64"),
        Type::Int32 => SourceType::scalar("int32"),
        Type::Fixed64 => SourceType::scalar("fixed64"),
        Type::Fixed32 => SourceType::scalar("fixed32"),
        Type::Bool => SourceType::scalar("bool"),
        Type::String => SourceType::scalar("string"),
        Type::Group => return Err(unsupported("groups are not supported")),
        Type::Message | Type::Enum => {
            return named(field).ok_or_else(|| unsupported("missing type name"));
        }
        Type::Bytes => SourceType {
            name: "bytes",
            implicit_array: true,
        },
        Type::Uint32 => SourceType::scalar("uint32"),
        Type::Sfixed32 => SourceType::scalar("sfixed32"),
        Type::Sfixed64 => SourceType::scalar("sfixed64"),
        Type::Sint32 => SourceType::scalar("sint32"),
        Type::Sint64 => SourceType::scalar("sint64"),
    };
    Ok(source)
}

fn named(field: &FieldDescriptorProto) -> Option<SourceType<'_>> {
    let name = field.type_name();
    (!name.is_empty()).then_some(SourceType {
        name,
        implicit_array: false,
    })
}
