//! The single error type shared by [`ObjectView`](crate::ObjectView) and
//! [`ArrayView`](crate::ArrayView).
//!
//! Every failed read or failed construction ends up here. Writes never fail.

use std::fmt;

use thiserror::Error;

use crate::tag::Tag;

pub type Result<T, E = JsonError> = std::result::Result<T, E>;

/// Raised when a JSON document cannot be read as expected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonError {
    /// The input is not syntactically valid JSON.
    #[error("cannot parse JSON: {message}")]
    Parse { message: String },

    /// The root value is valid JSON but not the container the view wraps.
    #[error("expected {expected}, found {found}")]
    ShapeMismatch { expected: Tag, found: Tag },

    #[error("expected value for {key}")]
    MissingKey { key: String },

    #[error("expected {expected} for {at}, found {found}")]
    TypeMismatch { expected: Expected, at: Location, found: Tag },

    #[error("array index {index} out of range (size {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Typed decoding of a whole document failed; `path` points at the field.
    #[error("at JSON path {path} → {message}")]
    Decode { path: String, message: String },
}

impl JsonError {
    pub fn is_parse(&self) -> bool { matches!(self, JsonError::Parse { .. }) }
    pub fn is_shape_mismatch(&self) -> bool { matches!(self, JsonError::ShapeMismatch { .. }) }
    pub fn is_missing_key(&self) -> bool { matches!(self, JsonError::MissingKey { .. }) }
    pub fn is_type_mismatch(&self) -> bool { matches!(self, JsonError::TypeMismatch { .. }) }
    pub fn is_index_out_of_range(&self) -> bool { matches!(self, JsonError::IndexOutOfRange { .. }) }

    pub(crate) fn parse(err: serde_json::Error) -> Self {
        JsonError::Parse { message: err.to_string() }
    }
}

/// The logical type a read accessor asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Expected::String  => "string",
            Expected::Number  => "number",
            Expected::Integer => "integer",
            Expected::Boolean => "'true' or 'false'",
            Expected::Object  => "object",
            Expected::Array   => "array",
        })
    }
}

/// Where in the enclosing container a value was read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Key(String),
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Key(key) => write!(f, "{key}"),
            Location::Index(i) => write!(f, "array element {i}"),
        }
    }
}
