//! Case-insensitive, multi-valued header field storage.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use super::name::{canonical_header_key, lower_key};

/// A single stored field: the spelling it was created with and its values.
#[derive(Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

/// Multi-valued header container keyed by case-insensitive field name.
///
/// Each distinct name (compared ignoring ASCII case) owns exactly one entry.
/// The entry keeps the spelling it was created with: [`add`](Self::add) and
/// [`set`](Self::set) store the canonical form, [`insert_raw`](Self::insert_raw)
/// stores the caller's spelling verbatim. Values keep insertion order and may
/// repeat or be empty.
///
/// Iteration order across names is unspecified. Wire order is produced by the
/// sorter from a [`HeaderOrder`](super::HeaderOrder).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: HashMap<String, HeaderEntry>,
}

/// Borrowed view of one field: its stored name and all of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderField<'a> {
    pub(crate) key: &'a str,
    name: &'a str,
    values: &'a [String],
}

impl<'a> HeaderField<'a> {
    pub(crate) fn new(key: &'a str, name: &'a str, values: &'a [String]) -> Self {
        Self { key, name, values }
    }

    /// The field name as stored.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// All values in insertion order.
    #[inline]
    pub fn values(&self) -> &'a [String] {
        self.values
    }
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: HashMap::with_capacity(capacity) }
    }

    /// Number of distinct field names, including fields with zero values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends `value` to the field `name`, creating it in canonical form if absent.
    pub fn add<V: Into<String>>(&mut self, name: &str, value: V) {
        let value = value.into();
        match self.entries.entry(lower_key(name).into_owned()) {
            Entry::Occupied(mut occupied) => occupied.get_mut().values.push(value),
            Entry::Vacant(vacant) => {
                vacant.insert(HeaderEntry { name: canonical_header_key(name).into_owned(), values: vec![value] });
            }
        }
    }

    /// Replaces every value of `name` with the single `value`.
    pub fn set<V: Into<String>>(&mut self, name: &str, value: V) {
        self.set_values(name, [value]);
    }

    /// Replaces every value of `name` with `values`, which may be empty.
    ///
    /// A field set to zero values is still present but produces no output.
    pub fn set_values<I, V>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let entry = HeaderEntry {
            name: canonical_header_key(name).into_owned(),
            values: values.into_iter().map(Into::into).collect(),
        };
        self.entries.insert(lower_key(name).into_owned(), entry);
    }

    /// Stores `values` under `name` without canonicalizing the spelling.
    ///
    /// Replaces any existing entry whose name matches ignoring case.
    pub fn insert_raw<N: Into<String>>(&mut self, name: N, values: Vec<String>) {
        let name = name.into();
        let key = lower_key(&name).into_owned();
        self.entries.insert(key, HeaderEntry { name, values });
    }

    /// Returns the first value of `name`, or `""` when absent or empty.
    pub fn get(&self, name: &str) -> &str {
        self.values(name).first().map_or("", String::as_str)
    }

    /// Returns every value of `name` in insertion order, or an empty slice.
    pub fn values(&self, name: &str) -> &[String] {
        self.entries.get(&*lower_key(name)).map(|entry| entry.values.as_slice()).unwrap_or_default()
    }

    /// Reports whether `name` is present, even with zero values.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&*lower_key(name))
    }

    /// Deletes `name`, returning its values if it was present.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.remove(&*lower_key(name)).map(|entry| entry.values)
    }

    /// Returns the stored view of `name`.
    pub fn field(&self, name: &str) -> Option<HeaderField<'_>> {
        self.entries
            .get_key_value(&*lower_key(name))
            .map(|(key, entry)| HeaderField::new(key, &entry.name, &entry.values))
    }

    /// Iterates over all fields in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = HeaderField<'_>> {
        self.entries.iter().map(|(key, entry)| HeaderField::new(key, &entry.name, &entry.values))
    }
}

impl fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<_> = self.iter().collect();
        fields.sort_unstable_by(|a, b| a.name.cmp(b.name));
        f.debug_map().entries(fields.iter().map(|field| (field.name, field.values))).finish()
    }
}

impl<N: AsRef<str>, V: Into<String>> Extend<(N, V)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (N, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.add(name.as_ref(), value);
        }
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = HeaderMap::new();
        headers.extend(iter);
        headers
    }
}

/// Converts an `http` crate header map, keeping every value.
///
/// `http` stores names lower-cased, so the converted names are canonicalized.
/// Values that are not valid UTF-8 are converted lossily.
impl From<&http::HeaderMap> for HeaderMap {
    fn from(headers: &http::HeaderMap) -> Self {
        let mut converted = HeaderMap::with_capacity(headers.keys_len());
        for (name, value) in headers {
            converted.add(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
        }
        converted
    }
}
