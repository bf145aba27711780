use jsonc_core::{read, JsonError, Value, ValueKind};

fn read_object(text: &str) -> jsonc_core::JsonObject {
    match read(text).unwrap() {
        Value::Object(object) => object,
        other => panic!("expected object, got {other:?}"),
    }
}

fn read_array(text: &str) -> jsonc_core::JsonArray {
    match read(text).unwrap() {
        Value::Array(array) => array,
        other => panic!("expected array, got {other:?}"),
    }
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn read_null() {
    assert_eq!(read("null").unwrap(), Value::Null);
}

#[test]
fn read_true() {
    assert_eq!(read("true").unwrap(), Value::Boolean(true));
}

#[test]
fn read_false() {
    assert_eq!(read("false").unwrap(), Value::Boolean(false));
}

#[test]
fn read_bare_integer() {
    assert_eq!(read("42").unwrap(), Value::number("42"));
}

#[test]
fn read_negative_number() {
    assert_eq!(read("-7").unwrap(), Value::number("-7"));
}

#[test]
fn read_fractional_number() {
    assert_eq!(read("10.01234").unwrap(), Value::number("10.01234"));
}

#[test]
fn read_number_with_exponent() {
    assert_eq!(read("15.5e+10").unwrap(), Value::number("15.5e+10"));
    assert_eq!(read("2E-3").unwrap(), Value::number("2E-3"));
}

#[test]
fn read_number_raw_is_matched_span_without_normalization() {
    assert_eq!(read("1.0").unwrap(), Value::number("1.0"));
    assert_ne!(read("1.0").unwrap(), Value::number("1"));
}

#[test]
fn read_bare_string() {
    assert_eq!(read(r#""x""#).unwrap(), Value::from("x"));
}

#[test]
fn read_empty_string() {
    assert_eq!(read(r#""""#).unwrap(), Value::from(""));
}

#[test]
fn read_string_with_escapes() {
    let value = read(r#""hello \"world\"\\\/\b\f\n\r\t""#).unwrap();
    assert_eq!(value.as_str().unwrap(), "hello \"world\"\\/\u{8}\u{c}\n\r\t");
}

#[test]
fn read_string_with_unicode_escape() {
    assert_eq!(read(r#""\u0061""#).unwrap(), Value::from("a"));
    assert_eq!(read(r#""\u3042""#).unwrap(), Value::from("あ"));
}

#[test]
fn read_leading_and_trailing_whitespace() {
    assert_eq!(read("  \n 42 \t ").unwrap(), Value::number("42"));
}

// ============================================================================
// Objects
// ============================================================================

#[test]
fn read_empty_object() {
    assert!(read_object("{}").is_empty());
}

#[test]
fn read_empty_object_with_interior_whitespace() {
    assert!(read_object("{   }").is_empty());
}

#[test]
fn read_empty_object_with_interior_comment() {
    assert!(read_object("{ /* c */ }").is_empty());
}

#[test]
fn read_object_members() {
    let object = read_object(r#"{ "key1" : "value1" , "key2" : 2 }"#);
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("key1"), Some(Value::from("value1")));
    assert_eq!(object.get("key2"), Some(Value::number("2")));
}

#[test]
fn read_object_preserves_key_order() {
    let object = read_object(r#"{"b":1,"a":2,"c":3}"#);
    let keys: Vec<String> = object.entries().keys().cloned().collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn read_object_duplicate_key_overwrites() {
    let object = read_object(r#"{"a":1,"b":2,"a":3}"#);
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("a"), Some(Value::number("3")));
}

#[test]
fn read_nested_object() {
    let object = read_object(r#"{"outer":{"inner":null}}"#);
    let outer = object.get("outer").unwrap();
    let inner = outer.as_object().unwrap().get("inner").unwrap();
    assert!(inner.is_null());
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn read_empty_array() {
    assert!(read_array("[]").is_empty());
}

#[test]
fn read_empty_array_with_interior_whitespace() {
    assert!(read_array("[ ]").is_empty());
}

#[test]
fn read_empty_array_with_interior_comment() {
    assert!(read_array("[ /* c */ ]").is_empty());
}

#[test]
fn read_array_elements() {
    let array = read_array("[true, false, null]");
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(0), Some(Value::Boolean(true)));
    assert_eq!(array.get(1), Some(Value::Boolean(false)));
    assert_eq!(array.get(2), Some(Value::Null));
}

#[test]
fn read_nested_arrays() {
    let array = read_array("[[[]]]");
    let inner = array.get(0).unwrap();
    let innermost = inner.as_array().unwrap().get(0).unwrap();
    assert!(innermost.as_array().unwrap().is_empty());
}

#[test]
fn read_mixed_document() {
    let object = read_object(r#"{"a":1,"b":[true,false,null]}"#);
    assert_eq!(object.get("a"), Some(Value::number("1")));

    let b = object.get("b").unwrap();
    let b = b.as_array().unwrap();
    assert_eq!(b.get(0), Some(Value::Boolean(true)));
    assert_eq!(b.get(1), Some(Value::Boolean(false)));
    assert_eq!(b.get(2), Some(Value::Null));
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn read_skips_line_comment() {
    let object = read_object("{ // note\n \"k\": 1 }");
    assert_eq!(object.get("k"), Some(Value::number("1")));
}

#[test]
fn read_skips_block_comment() {
    let object = read_object("{ /* note */ \"k\": /* v */ 1 }");
    assert_eq!(object.get("k"), Some(Value::number("1")));
}

#[test]
fn read_skips_comments_between_members() {
    let object = read_object("{\"a\":1, // first\n /* second */ \"b\":2}");
    assert_eq!(object.len(), 2);
    assert_eq!(object.get("b"), Some(Value::number("2")));
}

#[test]
fn read_skips_leading_comment() {
    assert_eq!(read("// doc\n42").unwrap(), Value::number("42"));
    assert_eq!(read("/* doc */42").unwrap(), Value::number("42"));
}

#[test]
fn read_comment_slash_inside_string_is_not_a_comment() {
    let object = read_object(r#"{"url":"http://example.com"}"#);
    assert_eq!(object.get("url"), Some(Value::from("http://example.com")));
}

#[test]
fn read_unterminated_block_comment_fails() {
    assert_eq!(
        read("{ /* note").unwrap_err(),
        JsonError::UnterminatedComment
    );
}

#[test]
fn read_bad_comment_start_fails() {
    assert_eq!(
        read("/ 1").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'/' or '*' after starting comment".to_string(),
            found: Some(' '),
            position: 1,
        }
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn read_empty_input_fails() {
    assert_eq!(
        read("").unwrap_err(),
        JsonError::UnexpectedEndOfInput { position: 0 }
    );
    assert_eq!(
        read("   \n ").unwrap_err(),
        JsonError::UnexpectedEndOfInput { position: 5 }
    );
}

#[test]
fn read_unexpected_leading_symbol_fails() {
    assert_eq!(
        read("x").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'{', '[', '\"', 'n', 't', 'f', '-' or '0-9' digit".to_string(),
            found: Some('x'),
            position: 0,
        }
    );
}

#[test]
fn read_literal_mismatch_names_full_literal() {
    assert_eq!(
        read("trye").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'true' literal".to_string(),
            found: Some('y'),
            position: 2,
        }
    );
}

#[test]
fn read_truncated_literal_fails() {
    assert_eq!(
        read("nul").unwrap_err(),
        JsonError::UnexpectedEndOfInput { position: 3 }
    );
}

#[test]
fn read_number_missing_fraction_digit_fails() {
    // Digit required immediately after the decimal separator.
    assert_eq!(
        read("1.").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'0-9' digit after '.' decimal separator".to_string(),
            found: None,
            position: 2,
        }
    );
    assert_eq!(
        read("1.e5").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'0-9' digit after '.' decimal separator".to_string(),
            found: Some('e'),
            position: 2,
        }
    );
}

#[test]
fn read_number_missing_integer_digit_fails() {
    assert_eq!(
        read("-x").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'0-9' digit after '-' sign at the beginning of the number".to_string(),
            found: Some('x'),
            position: 1,
        }
    );
}

#[test]
fn read_number_exponent_requires_sign() {
    assert_eq!(
        read("10e3").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'-' or '+' after exponent symbol".to_string(),
            found: Some('3'),
            position: 3,
        }
    );
}

#[test]
fn read_number_exponent_requires_digit_after_sign() {
    assert_eq!(
        read("10e+").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'0-9' digit after exponent sign".to_string(),
            found: None,
            position: 4,
        }
    );
}

#[test]
fn read_unterminated_string_fails() {
    assert_eq!(
        read(r#""abc"#).unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "'\"' at the end of the string".to_string(),
            found: None,
            position: 4,
        }
    );
}

#[test]
fn read_string_with_invalid_escape_fails() {
    let err = read(r#""a\x""#).unwrap_err();
    assert!(
        matches!(err, JsonError::UnexpectedSymbol { found: Some('x'), .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn read_string_with_invalid_unicode_hex_fails() {
    let err = read(r#""\u12G4""#).unwrap_err();
    assert!(
        matches!(err, JsonError::UnexpectedSymbol { found: Some('G'), .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn read_object_missing_colon_fails() {
    assert_eq!(
        read(r#"{"key" 1}"#).unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "':'".to_string(),
            found: Some('1'),
            position: 7,
        }
    );
}

#[test]
fn read_object_bad_separator_fails() {
    assert_eq!(
        read(r#"{"a":1;"b":2}"#).unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "',' or '}' after object member".to_string(),
            found: Some(';'),
            position: 6,
        }
    );
}

#[test]
fn read_array_bad_separator_fails() {
    assert_eq!(
        read("[1 2]").unwrap_err(),
        JsonError::UnexpectedSymbol {
            expected: "',' or ']' after array element".to_string(),
            found: Some('2'),
            position: 3,
        }
    );
}

#[test]
fn read_ignores_trailing_text_after_root() {
    // The reader stops at the end of the root value.
    assert_eq!(read("{} extra").unwrap().kind(), ValueKind::Object);
}
