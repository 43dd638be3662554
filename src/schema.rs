//! Closed classification of raw schema nodes.
//!
//! JSON-Schema lets `type` be a string, an array of strings or be absent, and
//! lets `$ref` sit next to anything. [`NodeShape::of`] turns that loose grammar
//! into one variant per case we treat differently; everything we do not
//! handle lands in a variant that still carries the raw value for logging.
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Integer,
    Number,
    Boolean,
    Any,
}

impl Primitive {
    pub fn from_type_keyword(s: &str) -> Option<Self> {
        match s {
            "string" => Some(Primitive::String),
            "integer" => Some(Primitive::Integer),
            "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            "any" => Some(Primitive::Any),
            _ => None,
        }
    }

    /// Swift spelling of the primitive.
    pub fn type_name(self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::Integer => "Int",
            Primitive::Number => "Double",
            Primitive::Boolean => "Bool",
            Primitive::Any => "Any",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeShape<'a> {
    /// `{"$ref": "..."}`; wins over `type`
    Reference(&'a str),
    /// `$ref` present but not a string
    BadReference(&'a Value),
    Object,
    Array { items: Option<&'a Value> },
    Primitive(Primitive),
    /// no `type` and no `$ref`
    Untyped,
    /// `type` is a string we do not map (e.g. `"null"`)
    UnknownType(&'a str),
    /// `type` is not a string (type unions, numbers, ...)
    NonStringType(&'a Value),
    /// the node itself is not a JSON object
    NotAnObject(&'a Value),
}

impl<'a> NodeShape<'a> {
    pub fn of(node: &'a Value) -> Self {
        let Some(map) = node.as_object() else {
            return NodeShape::NotAnObject(node);
        };
        if let Some(reference) = map.get("$ref") {
            return match reference.as_str() {
                Some(path) => NodeShape::Reference(path),
                None => NodeShape::BadReference(reference),
            };
        }
        match map.get("type") {
            None => NodeShape::Untyped,
            Some(Value::String(keyword)) => match keyword.as_str() {
                "object" => NodeShape::Object,
                "array" => NodeShape::Array { items: map.get("items") },
                other => match Primitive::from_type_keyword(other) {
                    Some(primitive) => NodeShape::Primitive(primitive),
                    None => NodeShape::UnknownType(other),
                },
            },
            Some(other) => NodeShape::NonStringType(other),
        }
    }
}

/// JSON type name of a value, for messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
