use std::collections::{BTreeMap, btree_map::Entry};
use std::fmt;

use crate::{bytes_str::BytesStr, encode};

/// A single query value. Repeated values for one key follow the
/// `key[]=v1&key[]=v2` array convention on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    One(String),
    Many(Vec<String>),
}

/// Key-sorted mapping behind a query string. Serializing the same
/// mapping always yields the same canonical string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    inner: BTreeMap<String, Value>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.inner.insert(key.into(), Value::One(value.into()));
        self
    }

    /// Pushes onto the key's array, promoting an existing scalar.
    pub fn append(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let value = value.into();
        match self.inner.entry(key.into()) {
            Entry::Vacant(entry) => {
                entry.insert(Value::Many(vec![value]));
            }
            Entry::Occupied(mut entry) => match entry.get_mut() {
                Value::One(prev) => {
                    let prev = std::mem::take(prev);
                    *entry.get_mut() = Value::Many(vec![prev, value]);
                }
                Value::Many(list) => list.push(value),
            },
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Inverse of serialization: `key[]` entries accumulate into an
    /// array, a repeated plain key keeps its last value.
    pub fn parse(input: &str) -> QueryMap {
        let mut map = QueryMap::new();
        for (key, value) in form_urlencoded::parse(input.as_bytes()) {
            match key.strip_suffix("[]") {
                Some(key) => {
                    map.append(key, value.into_owned());
                }
                None => {
                    map.insert(key.into_owned(), value.into_owned());
                }
            }
        }
        map
    }

    fn serialize(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.inner {
            match value {
                Value::One(v) => {
                    out.append_pair(key, v);
                }
                Value::Many(list) => {
                    let key = format!("{key}[]");
                    for v in list {
                        out.append_pair(&key, v);
                    }
                }
            }
        }
        out.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// A query in canonical percent-encoded form, no leading "?". All ways
/// in are filtering conversions, so the stored value is always safe to
/// splice into a url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryString(BytesStr);

impl QueryString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_map(&self) -> QueryMap {
        QueryMap::parse(self.as_str())
    }
}

impl Default for QueryString {
    fn default() -> Self {
        QueryString(BytesStr::new())
    }
}

impl From<&str> for QueryString {
    fn from(value: &str) -> Self {
        QueryString(encode::query(value))
    }
}

impl From<String> for QueryString {
    fn from(value: String) -> Self {
        QueryString::from(value.as_str())
    }
}

impl From<&QueryMap> for QueryString {
    fn from(value: &QueryMap) -> Self {
        QueryString(encode::query(&value.serialize()))
    }
}

impl From<QueryMap> for QueryString {
    fn from(value: QueryMap) -> Self {
        QueryString::from(&value)
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for QueryString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for QueryString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
