// @awa-component: PRS-ParserTests

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::parsers::{self, ParseError, ParserType, resolve_parser};

    fn proper_object() -> Value {
        json!({
            "stringParam": "first",
            "numberParam": 123,
            "arrayParam": [1, 2, 3, 4],
            "objectParam": { "test": "param" }
        })
    }

    // --- object ---

    #[test]
    fn object_returns_argument_for_object() {
        let raw = proper_object();
        assert_eq!(Value::Object(parsers::object(&raw).unwrap()), raw);
    }

    #[test]
    fn object_parses_json_string() {
        let raw = json!(
            r#"{"stringParam":"first","numberParam":123,"arrayParam":[1,2,3,4],"objectParam":{"test":"param"}}"#
        );
        assert_eq!(Value::Object(parsers::object(&raw).unwrap()), proper_object());
    }

    #[test]
    fn object_rejects_malformed_json() {
        let err = parsers::object(&json!("{\"name:}\"")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Couldn't parse provided value as object: {\"name:}\""
        );
    }

    #[test]
    fn object_rejects_json_that_is_not_an_object() {
        let err = parsers::object(&json!("string-value")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Couldn't parse provided value as object: string-value"
        );
        assert!(matches!(
            parsers::object(&json!("[1, 2]")),
            Err(ParseError::MalformedObject(_))
        ));
    }

    #[test]
    fn object_rejects_other_types() {
        let err = parsers::object(&json!(123)).unwrap_err();
        assert_eq!(err.to_string(), "123 is not a valid object");
    }

    // --- number ---

    #[test]
    fn number_returns_argument_for_number() {
        assert_eq!(parsers::number(&json!(123)).unwrap(), serde_json::Number::from(123));
    }

    #[test]
    fn number_parses_integer_string() {
        assert_eq!(parsers::number(&json!("123")).unwrap().as_i64(), Some(123));
        assert_eq!(parsers::number(&json!(" -7 ")).unwrap().as_i64(), Some(-7));
    }

    #[test]
    fn number_reads_leading_integer_of_string() {
        assert_eq!(parsers::number(&json!("3.7")).unwrap().as_i64(), Some(3));
        assert_eq!(parsers::number(&json!("123.123")).unwrap().as_i64(), Some(123));
        assert_eq!(parsers::number(&json!("12abc")).unwrap().as_i64(), Some(12));
        assert_eq!(parsers::number(&json!("+8 apples")).unwrap().as_i64(), Some(8));
    }

    #[test]
    fn number_keeps_large_integers() {
        let parsed = parsers::number(&json!("99999999999999999999")).unwrap();
        assert_eq!(parsed.as_f64(), Some(1e20));
    }

    #[test]
    fn number_passes_floats_through() {
        assert_eq!(parsers::number(&json!(4.5)).unwrap().as_f64(), Some(4.5));
    }

    #[test]
    fn number_rejects_infinity_and_nan() {
        let err = parsers::number(&json!("Infinity")).unwrap_err();
        assert_eq!(err.to_string(), "Value Infinity is not a valid number");
        let err = parsers::number(&json!("NaN")).unwrap_err();
        assert_eq!(err.to_string(), "Value NaN is not a valid number");
    }

    #[test]
    fn number_rejects_non_numeric_values() {
        assert!(matches!(
            parsers::number(&json!("abc")),
            Err(ParseError::NotANumber(_))
        ));
        for raw in ["", "   ", "-", "abc12", ".5"] {
            assert!(
                matches!(parsers::number(&json!(raw)), Err(ParseError::NotANumber(_))),
                "{raw:?}"
            );
        }
        let err = parsers::number(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Value {} is not a valid number");
    }

    // --- boolean ---

    #[test]
    fn boolean_returns_argument_for_boolean() {
        assert!(parsers::boolean(&json!(true)).unwrap());
        assert!(!parsers::boolean(&json!(false)).unwrap());
    }

    #[test]
    fn boolean_treats_empty_string_as_false() {
        assert!(!parsers::boolean(&json!("")).unwrap());
        assert!(!parsers::boolean(&json!("  ")).unwrap());
    }

    #[test]
    fn boolean_rejects_nil() {
        let err = parsers::boolean(&Value::Null).unwrap_err();
        assert_eq!(err, ParseError::NotABoolean("null".to_string()));
    }

    #[test]
    fn boolean_parses_strings_case_insensitively() {
        for raw in ["true", "TRUE", "True", " true "] {
            assert!(parsers::boolean(&json!(raw)).unwrap(), "{raw}");
        }
        for raw in ["false", "FaLsE", "FALSE"] {
            assert!(!parsers::boolean(&json!(raw)).unwrap(), "{raw}");
        }
    }

    #[test]
    fn boolean_rejects_other_values() {
        let err = parsers::boolean(&json!(123)).unwrap_err();
        assert_eq!(err.to_string(), "Value 123 is not of type boolean");
        assert!(matches!(
            parsers::boolean(&json!("yes")),
            Err(ParseError::NotABoolean(_))
        ));
    }

    // --- string ---

    #[test]
    fn string_returns_argument_for_string() {
        assert_eq!(parsers::string(&json!("hello")).unwrap(), "hello");
    }

    #[test]
    fn string_maps_nil_and_empty_to_empty() {
        assert_eq!(parsers::string(&Value::Null).unwrap(), "");
        assert_eq!(parsers::string(&json!("")).unwrap(), "");
    }

    #[test]
    fn string_rejects_other_values() {
        let err = parsers::string(&json!(123)).unwrap_err();
        assert_eq!(err.to_string(), "Value 123 is not a valid string");
    }

    // --- autocomplete ---

    #[test]
    fn autocomplete_returns_item_id() {
        assert_eq!(
            parsers::autocomplete(&json!({"id": "Test value", "value": "Test label"})).unwrap(),
            json!("Test value")
        );
        assert_eq!(
            parsers::autocomplete(&json!({"id": 123, "value": "Test label"})).unwrap(),
            json!(123)
        );
    }

    #[test]
    fn autocomplete_maps_nil_to_empty_string() {
        assert_eq!(parsers::autocomplete(&Value::Null).unwrap(), json!(""));
    }

    #[test]
    fn autocomplete_returns_string_argument() {
        assert_eq!(
            parsers::autocomplete(&json!("Test value")).unwrap(),
            json!("Test value")
        );
    }

    #[test]
    fn autocomplete_rejects_object_without_id() {
        let err = parsers::autocomplete(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value \"{}\" is not a valid autocomplete result nor string."
        );
    }

    // --- array ---

    #[test]
    fn array_returns_argument_for_array() {
        assert_eq!(
            parsers::array(&json!([1, 2, 3, 4])).unwrap(),
            vec![json!(1), json!(2), json!(3), json!(4)]
        );
    }

    #[test]
    fn array_maps_nil_to_empty() {
        assert!(parsers::array(&Value::Null).unwrap().is_empty());
    }

    #[test]
    fn array_splits_strings_by_line() {
        assert!(parsers::array(&json!("")).unwrap().is_empty());
        assert_eq!(
            parsers::array(&json!("single line")).unwrap(),
            vec![json!("single line")]
        );

        let lines = parsers::array(&json!("line one\n\n  line two  \nline three\n")).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], json!("line one"));
        assert_eq!(lines[1], json!("line two"));
    }

    #[test]
    fn array_rejects_other_values() {
        let err = parsers::array(&json!(123)).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported array format");
    }

    // --- resolution ---

    #[test]
    fn string_aliases_resolve_to_string_parser() {
        for tag in ["string", "text", "options", "vault"] {
            assert_eq!(resolve_parser(tag).unwrap(), ParserType::String);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_with_its_name() {
        let err = resolve_parser("no_such_type").unwrap_err();
        assert_eq!(err.to_string(), "Can't resolve parser of type \"no_such_type\"");
    }

    #[test]
    fn parser_type_deserialises_from_tag() {
        let parser: ParserType = serde_json::from_value(json!("vault")).unwrap();
        assert_eq!(parser, ParserType::String);
        assert_eq!(serde_json::to_value(parser).unwrap(), json!("string"));
        assert!(serde_json::from_value::<ParserType>(json!("integer")).is_err());
    }

    #[test]
    fn coercion_is_idempotent_on_typed_input() {
        let cases = [
            (ParserType::Object, json!("{\"a\": [1, 2]}")),
            (ParserType::Number, json!("42")),
            (ParserType::Number, json!("4.5")),
            (ParserType::Boolean, json!("TRUE")),
            (ParserType::String, Value::Null),
            (ParserType::Autocomplete, json!({"id": "i-123", "value": "my instance"})),
            (ParserType::Autocomplete, json!({"id": 7, "value": "seven"})),
            (ParserType::Array, json!("a\nb\n\nc")),
        ];
        for (parser, raw) in cases {
            let once = parser.coerce(&raw).unwrap();
            let twice = parser.coerce(&once).unwrap();
            assert_eq!(once, twice, "{parser} is not idempotent for {raw}");
        }
    }
}
