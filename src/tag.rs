//! The six JSON type tags.

use std::fmt;

use serde_json::Value;

/// Which of the six JSON shapes a value has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Tag {
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Null      => Tag::Null,
            Value::Bool(_)   => Tag::Boolean,
            Value::Number(_) => Tag::Number,
            Value::String(_) => Tag::String,
            Value::Array(_)  => Tag::Array,
            Value::Object(_) => Tag::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Null    => "null",
            Tag::Boolean => "boolean",
            Tag::Number  => "number",
            Tag::String  => "string",
            Tag::Array   => "array",
            Tag::Object  => "object",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
