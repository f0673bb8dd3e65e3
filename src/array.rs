//! [`ArrayView`]: typed access to a JSON array by position.
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::datetime::DateTime;
use crate::error::{JsonError, Location, Result};
use crate::narrow;
use crate::object::ObjectView;
use crate::tag::Tag;

/// Wrapper around a JSON array that makes it easier to read and write.
///
/// Same rules as [`ObjectView`], indexed by position and append-only.
/// Reading past the end fails with [`JsonError::IndexOutOfRange`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayView {
    a: Vec<Value>,
}

impl ArrayView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON text whose root must be an array.
    pub fn parse(json: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice::<Value>(json).map_err(JsonError::parse)?;
        Self::try_from(value)
    }

    pub fn parse_str(json: &str) -> Result<Self> {
        Self::parse(json.as_bytes())
    }

    pub fn from_vec(a: Vec<Value>) -> Self {
        Self { a }
    }

    pub fn get(&self) -> &Vec<Value> {
        &self.a
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.a
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = serde_json::to_vec_pretty(&self.a).unwrap_or_default();
        out.push(b'\n');
        out
    }

    pub fn to_text(&self) -> String {
        String::from_utf8(self.to_bytes()).unwrap_or_default()
    }

    pub fn to_compact_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.a).unwrap_or_default()
    }

    pub fn to_compact_text(&self) -> String {
        String::from_utf8(self.to_compact_bytes()).unwrap_or_default()
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        crate::path_de::from_value_with_path(Value::Array(self.a.clone()))
    }

    pub fn size(&self) -> usize {
        self.a.len()
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// The raw tagged elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.a.iter()
    }
}

// -------------------------------- Read ----------------------------------- //

impl ArrayView {
    fn value(&self, i: usize) -> Result<&Value> {
        self.a.get(i).ok_or(JsonError::IndexOutOfRange { index: i, len: self.a.len() })
    }

    fn read<'a, T>(
        &'a self,
        i: usize,
        narrow: impl FnOnce(&'a Value, &Location) -> Result<T>,
    ) -> Result<T> {
        narrow(self.value(i)?, &Location::Index(i))
    }

    pub fn string(&self, i: usize) -> Result<String> {
        self.read(i, narrow::string).map(str::to_owned)
    }

    pub fn number(&self, i: usize) -> Result<f64> {
        self.read(i, narrow::number)
    }

    pub fn object(&self, i: usize) -> Result<ObjectView> {
        self.read(i, narrow::object).map(|o| ObjectView::from_map(o.clone()))
    }

    pub fn array(&self, i: usize) -> Result<ArrayView> {
        self.read(i, narrow::array).map(|a| ArrayView::from_vec(a.clone()))
    }

    pub fn boolean(&self, i: usize) -> Result<bool> {
        self.read(i, narrow::boolean)
    }

    pub fn is_null(&self, i: usize) -> Result<bool> {
        self.value(i).map(Value::is_null)
    }

    pub fn n_string(&self, i: usize) -> Result<Option<String>> {
        self.read(i, narrow::n_string).map(|s| s.map(str::to_owned))
    }

    pub fn integer(&self, i: usize) -> Result<i64> {
        self.read(i, narrow::integer)
    }

    pub fn date_time(&self, i: usize) -> Result<Option<DateTime>> {
        self.read(i, narrow::date_time)
    }

    pub fn n_date_time(&self, i: usize) -> Result<Option<DateTime>> {
        self.read(i, narrow::n_date_time)
    }
}

// ------------------------------- Append ---------------------------------- //

impl ArrayView {
    pub fn append_string(&mut self, s: &str) {
        self.a.push(Value::String(s.to_owned()));
    }

    pub fn append_number(&mut self, d: f64) {
        self.a.push(narrow::number_value(d));
    }

    pub fn append_object(&mut self, o: &ObjectView) {
        self.a.push(Value::Object(o.get().clone()));
    }

    pub fn append_array(&mut self, array: &ArrayView) {
        self.a.push(Value::Array(array.a.clone()));
    }

    pub fn append_boolean(&mut self, b: bool) {
        self.a.push(Value::Bool(b));
    }

    pub fn append_null(&mut self) {
        self.a.push(Value::Null);
    }

    pub fn append_n_string(&mut self, s: Option<&str>) {
        self.a.push(narrow::n_string_value(s));
    }

    pub fn append_integer(&mut self, integer: i64) {
        self.a.push(Value::from(integer));
    }

    pub fn append_date_time(&mut self, d: &DateTime) {
        self.a.push(narrow::date_time_value(d));
    }

    pub fn append_n_date_time(&mut self, d: Option<&DateTime>) {
        self.a.push(narrow::n_date_time_value(d));
    }
}

// ----------------------------- Conversions ------------------------------- //

impl TryFrom<Value> for ArrayView {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(a) => Ok(Self { a }),
            other => Err(JsonError::ShapeMismatch { expected: Tag::Array, found: Tag::of(&other) }),
        }
    }
}

impl From<Vec<Value>> for ArrayView {
    fn from(a: Vec<Value>) -> Self {
        Self { a }
    }
}

impl From<ArrayView> for Value {
    fn from(view: ArrayView) -> Self {
        Value::Array(view.a)
    }
}

impl FromStr for ArrayView {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl<'a> IntoIterator for &'a ArrayView {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.a.iter()
    }
}

impl fmt::Display for ArrayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.a).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for ArrayView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.a.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ArrayView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<Value>::deserialize(deserializer).map(Self::from_vec)
    }
}
