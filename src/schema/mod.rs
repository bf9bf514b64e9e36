/// Declarative response schemas and the validator that interprets them
mod resources;

pub use resources::{LAUNCH, PAYLOAD, ROCKET, STARLINK};

use crate::errors::SchemaValidationError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Write;

/// Expected kind of a JSON value
#[derive(Debug)]
pub enum Shape {
    String,
    /// Any JSON number
    Number,
    /// A JSON number without a fractional part
    Integer,
    Bool,
    /// Closed set of string values
    Enum(&'static [&'static str]),
    Nullable(&'static Shape),
    Array(&'static Shape),
    Object(&'static [Field]),
}

/// Declared object member: name and shape
#[derive(Debug)]
pub struct Field(pub &'static str, pub Shape);

/// Record type with a declared response schema
pub trait Validated: DeserializeOwned {
    /// Resource name used in validation errors
    const NAME: &'static str;
    const SHAPE: &'static Shape;
}

enum Segment {
    Field(&'static str),
    Index(usize),
}

struct Mismatch {
    path: String,
    expected: String,
    actual: String,
}

/// Check `value` against `shape`, reporting the first structural mismatch.
///
/// Declared object fields are required; absence is reported as `undefined`
/// and explicit `null` only passes through [`Shape::Nullable`]. Undeclared
/// fields are ignored.
pub fn validate(resource: &str, shape: &Shape, value: &Value) -> Result<(), SchemaValidationError> {
    let mut path = Vec::new();
    check(shape, Some(value), &mut path).map_err(|m| SchemaValidationError {
        resource: resource.to_string(),
        path: m.path,
        expected: m.expected,
        actual: m.actual,
    })
}

/// Validate a single record and decode it
pub fn parse_one<T: Validated>(value: Value) -> Result<T, SchemaValidationError> {
    validate(T::NAME, T::SHAPE, &value)?;
    decode(T::NAME, value)
}

/// Validate an array of records and decode it
pub fn parse_many<T: Validated>(value: Value) -> Result<Vec<T>, SchemaValidationError> {
    let shape = Shape::Array(T::SHAPE);
    validate(T::NAME, &shape, &value)?;
    decode(T::NAME, value)
}

fn decode<T: DeserializeOwned>(resource: &str, value: Value) -> Result<T, SchemaValidationError> {
    // Only reachable when a record type drifts from its declared shape
    serde_json::from_value(value).map_err(|e| SchemaValidationError {
        resource: resource.to_string(),
        path: "$".to_string(),
        expected: "declared record".to_string(),
        actual: e.to_string(),
    })
}

fn check(shape: &Shape, value: Option<&Value>, path: &mut Vec<Segment>) -> Result<(), Mismatch> {
    let Some(value) = value else {
        return Err(mismatch(path, shape, "undefined".to_string()));
    };

    match (shape, value) {
        (Shape::Nullable(_), Value::Null) => Ok(()),
        (Shape::Nullable(inner), _) => check(inner, Some(value), path).map_err(|mut m| {
            // Report the nullable form when the value itself is the offender
            if m.path == render_path(path) {
                m.expected = describe(shape);
            }
            m
        }),
        (Shape::String, Value::String(_)) => Ok(()),
        (Shape::Number, Value::Number(_)) => Ok(()),
        (Shape::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(()),
        (Shape::Bool, Value::Bool(_)) => Ok(()),
        (Shape::Enum(allowed), Value::String(s)) => {
            if allowed.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(mismatch(path, shape, format!("{:?}", s)))
            }
        }
        (Shape::Array(item), Value::Array(items)) => {
            for (i, v) in items.iter().enumerate() {
                path.push(Segment::Index(i));
                check(item, Some(v), path)?;
                path.pop();
            }
            Ok(())
        }
        (Shape::Object(fields), Value::Object(map)) => {
            for Field(name, field_shape) in fields.iter() {
                path.push(Segment::Field(*name));
                check(field_shape, map.get(*name), path)?;
                path.pop();
            }
            Ok(())
        }
        _ => Err(mismatch(path, shape, kind_of(value).to_string())),
    }
}

fn mismatch(path: &[Segment], shape: &Shape, actual: String) -> Mismatch {
    Mismatch {
        path: render_path(path),
        expected: describe(shape),
        actual,
    }
}

fn render_path(path: &[Segment]) -> String {
    let mut out = String::from("$");
    for segment in path {
        match segment {
            Segment::Field(name) => {
                let _ = write!(out, ".{}", name);
            }
            Segment::Index(i) => {
                let _ = write!(out, "[{}]", i);
            }
        }
    }
    out
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::String => "string".to_string(),
        Shape::Number => "number".to_string(),
        Shape::Integer => "integer".to_string(),
        Shape::Bool => "boolean".to_string(),
        Shape::Enum(allowed) => format!("one of {}", allowed.join("|")),
        Shape::Nullable(inner) => format!("{} | null", describe(inner)),
        Shape::Array(_) => "array".to_string(),
        Shape::Object(_) => "object".to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
