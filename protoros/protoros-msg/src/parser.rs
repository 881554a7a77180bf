//! `.msg` text → [`RecordDef`].

use crate::{
    ast::{ArrayLen, FieldSpec, RecordDef},
    error::MsgError,
    lex::{FieldTokens, Literal, field_tokens, strip_comment},
    primitive::is_primitive,
};

/// Qualified type an unqualified `Header header` field refers to.
pub const HEADER_TYPE: &str = "std_msgs/Header";

/// Parse the text of record `package/name`.
///
/// Blank and comment-only lines are ignored.  Unqualified, non-primitive
/// type names are qualified with `package`.
pub fn parse_record(package: &str, name: &str, text: &str) -> Result<RecordDef, MsgError> {
    let record = format!("{package}/{name}");
    let fields = text
        .lines()
        .map(|raw| strip_comment(raw).trim())
        .filter(|line| !line.is_empty())
        .map(|line| parse_field(package, &record, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RecordDef {
        name: record,
        fields,
    })
}

fn parse_field(package: &str, record: &str, line: &str) -> Result<FieldSpec, MsgError> {
    let malformed = |detail: String| MsgError::MalformedField {
        record: record.to_string(),
        line: line.to_string(),
        detail,
    };

    let (_, FieldTokens {
        ty,
        array,
        name,
        default,
    }) = field_tokens(line).map_err(|_| malformed("expected `type name`".to_string()))?;

    let array = array
        .map(|inner| {
            parse_array_len(inner)
                .ok_or_else(|| malformed(format!("invalid array size `[{inner}]`")))
        })
        .transpose()?;

    let default = match default {
        Some(Literal::Assigned("")) => {
            return Err(malformed("empty literal after `=`".to_string()));
        }
        Some(Literal::Assigned(v)) | Some(Literal::Trailing(v)) => Some(v.to_string()),
        None => None,
    };

    Ok(FieldSpec {
        type_name: resolve_type(package, ty, name, array.is_some()),
        array,
        name: name.to_string(),
        default,
    })
}

fn parse_array_len(inner: &str) -> Option<ArrayLen> {
    if inner.is_empty() {
        return Some(ArrayLen::Unbounded);
    }
    if !inner.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    inner.parse().ok().map(ArrayLen::Fixed)
}

// `Header header` must be checked before generic qualification, otherwise it
// would land in the current package.
fn resolve_type(package: &str, ty: &str, name: &str, is_array: bool) -> String {
    if ty == "Header" && name == "header" && !is_array {
        HEADER_TYPE.to_string()
    } else if ty.contains('/') || is_primitive(ty) {
        ty.to_string()
    } else {
        format!("{package}/{ty}")
    }
}
