//! [`ObjectView`]: typed access to a JSON object by key.
use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::array::ArrayView;
use crate::datetime::DateTime;
use crate::error::{JsonError, Location, Result};
use crate::narrow;
use crate::tag::Tag;

/// Wrapper around a JSON object that makes it easier to read and write.
///
/// Reads fail with [`JsonError`] when a key is missing or holds the wrong
/// type. The `n_*` accessors additionally let JSON `null` through as `None`.
///
/// The view owns its map; cloning it, or pulling a nested object out with
/// [`ObjectView::object`], produces an independent copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectView {
    o: Map<String, Value>,
}

// ————————————————————————————————————————————————————————————————————————————
// CONSTRUCTION & SERIALIZATION
// ————————————————————————————————————————————————————————————————————————————

impl ObjectView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON text whose root must be an object.
    pub fn parse(json: &[u8]) -> Result<Self> {
        let value = serde_json::from_slice::<Value>(json).map_err(JsonError::parse)?;
        Self::try_from(value)
    }

    pub fn parse_str(json: &str) -> Result<Self> {
        Self::parse(json.as_bytes())
    }

    pub fn from_map(o: Map<String, Value>) -> Self {
        Self { o }
    }

    /// The underlying map.
    pub fn get(&self) -> &Map<String, Value> {
        &self.o
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.o
    }

    /// Indented JSON, UTF-8.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = serde_json::to_vec_pretty(&self.o).unwrap_or_default();
        out.push(b'\n');
        out
    }

    pub fn to_text(&self) -> String {
        String::from_utf8(self.to_bytes()).unwrap_or_default()
    }

    pub fn to_compact_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(&self.o).unwrap_or_default()
    }

    pub fn to_compact_text(&self) -> String {
        String::from_utf8(self.to_compact_bytes()).unwrap_or_default()
    }

    /// Decode the whole document into `T`; errors name the failing field's path.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        crate::path_de::from_value_with_path(Value::Object(self.o.clone()))
    }

    pub fn len(&self) -> usize {
        self.o.len()
    }

    pub fn is_empty(&self) -> bool {
        self.o.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.o.keys().map(String::as_str)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// READ PATH
// ————————————————————————————————————————————————————————————————————————————

impl ObjectView {
    pub fn contains(&self, key: &str) -> bool {
        self.o.contains_key(key)
    }

    /// Fail with [`JsonError::MissingKey`] unless `key` is present.
    pub fn check_contains(&self, key: &str) -> Result<()> {
        self.value(key).map(|_| ())
    }

    fn value(&self, key: &str) -> Result<&Value> {
        self.o.get(key).ok_or_else(|| JsonError::MissingKey { key: key.to_owned() })
    }

    fn read<'a, T>(
        &'a self,
        key: &str,
        narrow: impl FnOnce(&'a Value, &Location) -> Result<T>,
    ) -> Result<T> {
        let value = self.value(key)?;
        narrow(value, &Location::Key(key.to_owned()))
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.read(key, narrow::string).map(str::to_owned)
    }

    pub fn number(&self, key: &str) -> Result<f64> {
        self.read(key, narrow::number)
    }

    pub fn object(&self, key: &str) -> Result<ObjectView> {
        self.read(key, narrow::object).map(|o| ObjectView::from_map(o.clone()))
    }

    pub fn array(&self, key: &str) -> Result<ArrayView> {
        self.read(key, narrow::array).map(|a| ArrayView::from_vec(a.clone()))
    }

    pub fn boolean(&self, key: &str) -> Result<bool> {
        self.read(key, narrow::boolean)
    }

    /// Existence is checked first, so a missing key is an error, not `false`.
    pub fn is_null(&self, key: &str) -> Result<bool> {
        self.value(key).map(Value::is_null)
    }

    pub fn n_string(&self, key: &str) -> Result<Option<String>> {
        self.read(key, narrow::n_string).map(|s| s.map(str::to_owned))
    }

    pub fn integer(&self, key: &str) -> Result<i64> {
        self.read(key, narrow::integer)
    }

    /// `Ok(None)` if the string is not a valid ISO-8601 timestamp.
    pub fn date_time(&self, key: &str) -> Result<Option<DateTime>> {
        self.read(key, narrow::date_time)
    }

    pub fn n_date_time(&self, key: &str) -> Result<Option<DateTime>> {
        self.read(key, narrow::n_date_time)
    }
}

// ————————————————————————————————————————————————————————————————————————————
// WRITE PATH
// ————————————————————————————————————————————————————————————————————————————

impl ObjectView {
    fn put(&mut self, key: impl Into<String>, value: Value) {
        self.o.insert(key.into(), value);
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: &str) {
        self.put(key, Value::String(value.to_owned()));
    }

    pub fn put_number(&mut self, key: impl Into<String>, value: f64) {
        self.put(key, narrow::number_value(value));
    }

    pub fn put_object(&mut self, key: impl Into<String>, value: &ObjectView) {
        self.put(key, Value::Object(value.o.clone()));
    }

    pub fn put_array(&mut self, key: impl Into<String>, value: &ArrayView) {
        self.put(key, Value::Array(value.get().clone()));
    }

    pub fn put_boolean(&mut self, key: impl Into<String>, value: bool) {
        self.put(key, Value::Bool(value));
    }

    pub fn put_null(&mut self, key: impl Into<String>) {
        self.put(key, Value::Null);
    }

    pub fn put_n_string(&mut self, key: impl Into<String>, value: Option<&str>) {
        self.put(key, narrow::n_string_value(value));
    }

    pub fn put_integer(&mut self, key: impl Into<String>, value: i64) {
        self.put(key, Value::from(value));
    }

    pub fn put_date_time(&mut self, key: impl Into<String>, value: &DateTime) {
        self.put(key, narrow::date_time_value(value));
    }

    pub fn put_n_date_time(&mut self, key: impl Into<String>, value: Option<&DateTime>) {
        self.put(key, narrow::n_date_time_value(value));
    }
}

// ————————————————————————————————————————————————————————————————————————————
// CONVERSIONS
// ————————————————————————————————————————————————————————————————————————————

impl TryFrom<Value> for ObjectView {
    type Error = JsonError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(o) => Ok(Self { o }),
            other => Err(JsonError::ShapeMismatch { expected: Tag::Object, found: Tag::of(&other) }),
        }
    }
}

impl From<Map<String, Value>> for ObjectView {
    fn from(o: Map<String, Value>) -> Self {
        Self { o }
    }
}

impl From<ObjectView> for Value {
    fn from(view: ObjectView) -> Self {
        Value::Object(view.o)
    }
}

impl FromStr for ObjectView {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl fmt::Display for ObjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.o).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl Serialize for ObjectView {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.o.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ObjectView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(Self::from_map)
    }
}
