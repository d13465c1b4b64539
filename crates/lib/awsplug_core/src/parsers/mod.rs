// @awa-component: PRS-ValueParsers
//
//! Value coercion: turns raw host values into the type a parameter declares.
//!
//! Each parser is a pure function over a raw JSON value. [`ParserType`] is the
//! closed set of type tags the host may declare; every tag maps onto exactly
//! one parser through [`ParserType::coerce`].

pub mod tags;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

/// Coercion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Can't resolve parser of type \"{0}\"")]
    UnresolvableType(String),

    #[error("Couldn't parse provided value as object: {0}")]
    MalformedObject(String),

    #[error("{0} is not a valid object")]
    NotAnObject(String),

    #[error("Value {0} is not a valid number")]
    NotANumber(String),

    #[error("Value {0} is not of type boolean")]
    NotABoolean(String),

    #[error("Value {0} is not a valid string")]
    NotAString(String),

    #[error("Value \"{0}\" is not a valid autocomplete result nor string.")]
    NotAnAutocompleteValue(String),

    #[error("Unsupported array format")]
    UnsupportedArray,

    #[error("Incorrectly formatted tag string: {0}")]
    MalformedTagString(String),

    #[error("Unsupported tags format!")]
    UnsupportedTags,
}

/// Parser kinds, one per coercion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ParserType {
    Object,
    Number,
    Boolean,
    /// Also declared as `text`, `options` or `vault`.
    String,
    Autocomplete,
    Array,
}

impl ParserType {
    /// Canonical tag for this parser.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParserType::Object => "object",
            ParserType::Number => "number",
            ParserType::Boolean => "boolean",
            ParserType::String => "string",
            ParserType::Autocomplete => "autocomplete",
            ParserType::Array => "array",
        }
    }

    /// Coerce a raw value into this parser's type.
    pub fn coerce(&self, value: &Value) -> Result<Value, ParseError> {
        match self {
            ParserType::Object => object(value).map(Value::Object),
            ParserType::Number => number(value).map(Value::Number),
            ParserType::Boolean => boolean(value).map(Value::Bool),
            ParserType::String => string(value).map(Value::String),
            ParserType::Autocomplete => autocomplete(value),
            ParserType::Array => array(value).map(Value::Array),
        }
    }
}

impl FromStr for ParserType {
    type Err = ParseError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "object" => Ok(ParserType::Object),
            "number" => Ok(ParserType::Number),
            "boolean" => Ok(ParserType::Boolean),
            "string" | "text" | "options" | "vault" => Ok(ParserType::String),
            "autocomplete" => Ok(ParserType::Autocomplete),
            "array" => Ok(ParserType::Array),
            other => Err(ParseError::UnresolvableType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ParserType {
    type Error = ParseError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<ParserType> for String {
    fn from(parser: ParserType) -> Self {
        parser.as_str().to_string()
    }
}

impl fmt::Display for ParserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the parser for a type tag.
pub fn resolve_parser(type_tag: &str) -> Result<ParserType, ParseError> {
    type_tag.parse()
}

/// Object parser: objects pass through, strings are decoded as JSON objects.
pub fn object(value: &Value) -> Result<Map<String, Value>, ParseError> {
    match value {
        Value::Object(map) => Ok(map.clone()),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => Err(ParseError::MalformedObject(raw.clone())),
        },
        other => Err(ParseError::NotAnObject(display(other))),
    }
}

/// Number parser: numbers pass through, strings are read like `parseInt`
/// in base 10: an optional sign and the leading digits, the rest ignored.
pub fn number(value: &Value) -> Result<Number, ParseError> {
    match value {
        Value::Number(n) => Ok(n.clone()),
        Value::String(raw) => {
            parse_leading_integer(raw).ok_or_else(|| ParseError::NotANumber(raw.clone()))
        }
        other => Err(ParseError::NotANumber(display(other))),
    }
}

fn parse_leading_integer(raw: &str) -> Option<Number> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let literal = &trimmed[..trimmed.len() - unsigned.len() + digits];
    literal
        .parse::<i64>()
        .ok()
        .map(Number::from)
        .or_else(|| literal.parse::<f64>().ok().and_then(Number::from_f64))
}

/// Boolean parser: `"true"`/`"false"` in any case, blank strings are `false`.
pub fn boolean(value: &Value) -> Result<bool, ParseError> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(raw) => match raw.trim().to_lowercase().as_str() {
            "" | "false" => Ok(false),
            "true" => Ok(true),
            _ => Err(ParseError::NotABoolean(raw.clone())),
        },
        other => Err(ParseError::NotABoolean(display(other))),
    }
}

/// String parser: strings pass through, nil becomes `""`.
pub fn string(value: &Value) -> Result<String, ParseError> {
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        other => Err(ParseError::NotAString(display(other))),
    }
}

/// Autocomplete parser: a selected `{id, value}` item yields its `id`.
///
/// Strings and other primitives are already ids and pass through.
pub fn autocomplete(value: &Value) -> Result<Value, ParseError> {
    match value {
        Value::Null => Ok(Value::String(String::new())),
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(value.clone()),
        Value::Object(map) => map
            .get("id")
            .filter(|id| !id.is_null())
            .cloned()
            .ok_or_else(|| ParseError::NotAnAutocompleteValue(display(value))),
        Value::Array(_) => Err(ParseError::NotAnAutocompleteValue(display(value))),
    }
}

/// Array parser: one entry per non-blank line of a string, nil is empty.
pub fn array(value: &Value) -> Result<Vec<Value>, ParseError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.clone()),
        Value::String(raw) => Ok(raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| Value::String(line.to_string()))
            .collect()),
        _ => Err(ParseError::UnsupportedArray),
    }
}

/// Render a value for an error message; strings are shown without quotes.
pub(crate) fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests;
