//! Tokenizer for a single `.msg` field line.
//!
//! ```text
//! <type><array-suffix>? <name>(=<literal>)? <# comment>?
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, space0, space1},
    combinator::{map, opt, rest},
    sequence::{delimited, preceded, tuple},
};

/// Raw tokens of one field declaration, before name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldTokens<'a> {
    pub ty: &'a str,
    /// Content between the brackets; `Some("")` for `[]`.
    pub array: Option<&'a str>,
    pub name: &'a str,
    pub default: Option<Literal<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Literal<'a> {
    /// `NAME=value`
    Assigned(&'a str),
    /// `name value` (ROS 2 field default)
    Trailing(&'a str),
}

/// Drop everything from the first `#`.
pub(crate) fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code)
}

fn type_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '[')(input)
}

fn array_suffix(input: &str) -> IResult<&str, &str> {
    delimited(char('['), take_while(|c: char| c != ']'), char(']'))(input)
}

fn name_token(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '=')(input)
}

fn assigned(input: &str) -> IResult<&str, Literal<'_>> {
    map(preceded(tuple((space0, char('='), space0)), rest), |v: &str| {
        Literal::Assigned(v.trim())
    })(input)
}

fn trailing(input: &str) -> IResult<&str, Literal<'_>> {
    map(preceded(space1, rest), |v: &str| Literal::Trailing(v.trim()))(input)
}

fn literal(input: &str) -> IResult<&str, Literal<'_>> {
    alt((assigned, trailing))(input)
}

/// Split a comment-free, trimmed line into its tokens.
pub(crate) fn field_tokens(line: &str) -> IResult<&str, FieldTokens<'_>> {
    let (input, ty) = type_token(line)?;
    let (input, array) = opt(array_suffix)(input)?;
    let (input, _) = space1(input)?;
    let (input, name) = name_token(input)?;
    let (input, default) = opt(literal)(input)?;
    Ok((
        input,
        FieldTokens {
            ty,
            array,
            name,
            default,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_is_stripped() {
        assert_eq!(strip_comment("int32 x # the x"), "int32 x ");
        assert_eq!(strip_comment("# only"), "");
        assert_eq!(strip_comment("int32 x"), "int32 x");
    }

    #[test]
    fn plain_field() {
        let (rest, tokens) = field_tokens("float64 y").unwrap();
        assert!(rest.is_empty());
        assert_eq!(tokens.ty, "float64");
        assert_eq!(tokens.array, None);
        assert_eq!(tokens.name, "y");
        assert_eq!(tokens.default, None);
    }

    #[test]
    fn array_suffixes() {
        let (_, unbounded) = field_tokens("uint8[] data").unwrap();
        assert_eq!(unbounded.array, Some(""));
        let (_, fixed) = field_tokens("float64[36] covariance").unwrap();
        assert_eq!(fixed.array, Some("36"));
    }

    #[test]
    fn constant_with_spaces_around_equals() {
        let (_, tokens) = field_tokens("int32 MODE = 3").unwrap();
        assert_eq!(tokens.name, "MODE");
        assert_eq!(tokens.default, Some(Literal::Assigned("3")));
    }

    #[test]
    fn trailing_default() {
        let (_, tokens) = field_tokens("string frame \"map\"").unwrap();
        assert_eq!(tokens.default, Some(Literal::Trailing("\"map\"")));
    }

    #[test]
    fn missing_name_is_an_error() {
        assert!(field_tokens("int32").is_err());
        assert!(field_tokens("int32[]").is_err());
    }
}
