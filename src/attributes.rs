//! Attribute values and key normalization

use indexmap::map::Iter;
use indexmap::IndexMap;
use tracing::trace;

/// Raw keys that are rewritten before any other processing.
///
/// These let callers name attributes whose HTML spelling is awkward as an
/// identifier (`class`, `for`, `async`).
pub const RESERVED_ATTRS: [(&str, &str); 5] = [
    ("cls", "class"),
    ("class_", "class"),
    ("fr", "for"),
    ("for_", "for"),
    ("async_", "async"),
];

/// Normalize a raw attribute key.
///
/// The remap table is checked against the raw key first, then every
/// remaining underscore becomes a hyphen.
pub fn normalize_key(raw: &str) -> String {
    let key = RESERVED_ATTRS
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to);
    key.replace('_', "-")
}

/// Attribute value as supplied by a caller, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// `true` becomes a valueless attribute, `false` drops the attribute
    Bool(bool),
    /// Stored verbatim
    Text(String),
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for RawValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for RawValue {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

/// `None` is the valueless marker: it renders as the bare key.
/// `Some(value)` converts like `value` itself.
impl<T: Into<Self>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Bool(true), Into::into)
    }
}

macro_rules! raw_value_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    Self::Text(value.to_string())
                }
            }
        )*
    };
}

raw_value_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Stored attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Rendered as `key="value"`
    Text(String),
    /// Rendered as the bare key
    Flag,
}

impl AttrValue {
    /// Returns the text if this is a valued attribute, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Flag => None,
        }
    }

    /// Returns true if this is a valueless attribute
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

/// Normalized attributes of a node, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `key` and store `value`.
    ///
    /// A key that normalizes to an existing entry replaces its value in
    /// place. `RawValue::Bool(false)` stores nothing and leaves any existing
    /// entry untouched.
    pub fn insert_raw(&mut self, key: &str, value: impl Into<RawValue>) {
        let normalized = normalize_key(key);
        match value.into() {
            RawValue::Bool(false) => {
                trace!(raw = key, key = %normalized, "dropping false attribute");
            }
            RawValue::Bool(true) => {
                self.entries.insert(normalized, AttrValue::Flag);
            }
            RawValue::Text(text) => {
                self.entries.insert(normalized, AttrValue::Text(text));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, AttrValue> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: AsRef<str>,
    V: Into<RawValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K, V> Extend<(K, V)> for Attributes
where
    K: AsRef<str>,
    V: Into<RawValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert_raw(key.as_ref(), value);
        }
    }
}
