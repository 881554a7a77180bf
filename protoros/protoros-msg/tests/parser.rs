use protoros_msg::{ArrayLen, FieldSpec, HEADER_TYPE, MsgError, parse_record};

#[test]
fn parse_basic_primitives() {
    let msg = r#"
int32 x
float64 y
string name
"#;
    let record = parse_record("test_msgs", "Basic", msg).unwrap();
    assert_eq!(record.name, "test_msgs/Basic");
    assert_eq!(record.package(), "test_msgs");
    assert_eq!(record.short_name(), "Basic");
    let types: Vec<_> = record.fields.iter().map(|f| f.type_name.as_str()).collect();
    assert_eq!(types, vec!["int32", "float64", "string"]);
    assert!(record.fields.iter().all(|f| !f.is_array()));
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let msg = "# leading comment\n\n   \nint32 x # trailing comment\n  # indented comment\n";
    let record = parse_record("pkg", "Commented", msg).unwrap();
    assert_eq!(record.fields.len(), 1);
    assert_eq!(record.fields[0].name, "x");
}

#[test]
fn parse_unbounded_and_fixed_arrays() {
    let msg = "uint8[] data\nfloat64[36] covariance\nfloat64[0] empty";
    let record = parse_record("sensor_msgs", "Arrays", msg).unwrap();
    assert_eq!(record.fields[0].array, Some(ArrayLen::Unbounded));
    assert_eq!(record.fields[0].arity(), None);
    assert_eq!(record.fields[1].array, Some(ArrayLen::Fixed(36)));
    assert_eq!(record.fields[1].arity(), Some(36));
    assert_eq!(record.fields[2].array, Some(ArrayLen::Fixed(0)));
}

#[test]
fn non_numeric_arity_is_malformed() {
    for line in ["float64[x] data", "float64[-1] data", "float64[<=3] data"] {
        let err = parse_record("pkg", "Bad", line).unwrap_err();
        match err {
            MsgError::MalformedField { record, line: l, .. } => {
                assert_eq!(record, "pkg/Bad");
                assert_eq!(l, line);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn missing_name_is_malformed() {
    let err = parse_record("pkg", "Bad", "int32 x\nint32\n").unwrap_err();
    assert!(
        format!("{err}").contains("malformed field in 'pkg/Bad': `int32`"),
        "unexpected error: {err}"
    );
}

#[test]
fn unqualified_types_take_the_record_package() {
    let record = parse_record("geom", "Polygon", "Point[] points\nother_pkg/Thing thing").unwrap();
    assert_eq!(record.fields[0].type_name, "geom/Point");
    assert_eq!(record.fields[1].type_name, "other_pkg/Thing");
}

#[test]
fn header_special_case() {
    let record = parse_record("geom", "Stamped", "Header header").unwrap();
    assert_eq!(record.fields[0].type_name, HEADER_TYPE);
    assert_eq!(record.fields[0].type_name, "std_msgs/Header");
}

#[test]
fn header_special_case_needs_exact_name_and_scalar() {
    let record = parse_record("geom", "NotStamped", "Header hdr\nHeader[] header").unwrap();
    assert_eq!(record.fields[0].type_name, "geom/Header");
    assert_eq!(record.fields[1].type_name, "geom/Header");
}

#[test]
fn constants_keep_their_literal() {
    let msg = "int32 STATUS_OK=0\nint32 STATUS_ERR = 1\nstring MODE=\"auto\"";
    let record = parse_record("pkg", "Const", msg).unwrap();
    let defaults: Vec<_> = record
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.default.as_deref()))
        .collect();
    assert_eq!(
        defaults,
        vec![
            ("STATUS_OK", Some("0")),
            ("STATUS_ERR", Some("1")),
            ("MODE", Some("\"auto\"")),
        ]
    );
}

#[test]
fn empty_literal_is_malformed() {
    let err = parse_record("pkg", "Const", "int32 X=").unwrap_err();
    assert!(matches!(err, MsgError::MalformedField { .. }));
}

#[test]
fn display_renders_msg_text() {
    let field = FieldSpec {
        type_name: "float64".to_string(),
        array: Some(ArrayLen::Fixed(3)),
        name: "v".to_string(),
        default: None,
    };
    assert_eq!(field.to_string(), "float64[3] v");

    let text = "int32 RED=0\ngeom/Point[] points\nuint8[4] raw\n";
    let record = parse_record("geom", "Mixed", text).unwrap();
    assert_eq!(record.to_string(), text);
    assert_eq!(parse_record("geom", "Mixed", &record.to_string()).unwrap(), record);
}
