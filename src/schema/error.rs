use std::fmt;

use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
enum PathSegment {
    Field(String),
    Key(String),
    Index(usize),
}

/// Location of a value inside an encoded document, e.g. `people_index["Palo Alto"][0].zipcode`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A named field of a record
    pub fn field(&self, name: &str) -> Self {
        self.push(PathSegment::Field(name.to_string()))
    }

    /// A user supplied key of a map, such as a city name
    pub fn key(&self, key: &str) -> Self {
        self.push(PathSegment::Key(key.to_string()))
    }

    pub fn index(&self, index: usize) -> Self {
        self.push(PathSegment::Index(index))
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    fn push(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }

        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if position == 0 => write!(f, "{}", name)?,
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Key(key) => write!(f, "[{:?}]", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }

        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaValidationError {
    #[error("Missing data for required field: {0}")]
    MissingField(FieldPath),

    #[error("Invalid type at {path}: expected {expected}, found {found}")]
    WrongType {
        path: FieldPath,
        expected: &'static str,
        found: &'static str,
    },
}

impl SchemaValidationError {
    pub fn path(&self) -> &FieldPath {
        match self {
            SchemaValidationError::MissingField(path) => path,
            SchemaValidationError::WrongType { path, .. } => path,
        }
    }

    pub fn wrong_type(path: &FieldPath, expected: &'static str, found: &Value) -> Self {
        SchemaValidationError::WrongType {
            path: path.clone(),
            expected,
            found: value_kind(found),
        }
    }
}

/// Errors from the text level `dumps` / `loads` helpers
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Schema validation failed: {0}")]
    Validation(#[from] SchemaValidationError),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
