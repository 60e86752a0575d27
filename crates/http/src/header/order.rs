//! Order directives: which field names go first, and in which order the
//! HTTP/2 pseudo-headers are emitted.
//!
//! A [`HeaderOrder`] is passed next to the [`HeaderMap`] it orders. For callers
//! that still put the directive inside the map, the reserved keys
//! [`HEADER_ORDER_KEY`] and [`PSEUDO_HEADER_ORDER_KEY`] are read when the typed
//! directive is absent. Both forms are resolved fresh on every write.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::map::HeaderMap;
use super::name::{HEADER_ORDER_KEY, PSEUDO_HEADER_ORDER_KEY, lower_key};
use super::pseudo::PseudoOrder;

/// Caller-supplied ordering for one request.
///
/// `None` means "no directive": regular fields sort lexicographically and
/// pseudo-headers use [`PseudoOrder::DEFAULT`]. `Some(vec![])` is an empty
/// directive, which for regular fields also yields lexicographic order.
///
/// Loadable from configuration:
///
/// ```
/// use ordered_http::header::HeaderOrder;
///
/// let order: HeaderOrder = serde_json::from_str(r#"{
///     "fields": ["user-agent", "accept", "accept-encoding"],
///     "pseudo": [":method", ":authority", ":scheme", ":path"]
/// }"#).unwrap();
/// assert_eq!(order.fields().unwrap().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderOrder {
    fields: Option<Vec<String>>,
    pseudo: Option<Vec<String>>,
}

impl HeaderOrder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order of ordinary field names, matched ignoring case.
    #[must_use]
    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the HTTP/2 pseudo-header order. Unknown names are ignored when writing.
    #[must_use]
    pub fn with_pseudo<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pseudo = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the pseudo-header order from a resolved order such as [`PseudoOrder::chrome`].
    #[must_use]
    pub fn with_pseudo_order(self, order: PseudoOrder) -> Self {
        self.with_pseudo(order.iter().map(|pseudo| pseudo.as_str()))
    }

    pub fn fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    pub fn pseudo(&self) -> Option<&[String]> {
        self.pseudo.as_deref()
    }

    /// Reads the directives carried by the reserved keys of `headers`.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            fields: headers.field(HEADER_ORDER_KEY).map(|field| field.values().to_vec()),
            pseudo: headers.field(PSEUDO_HEADER_ORDER_KEY).map(|field| field.values().to_vec()),
        }
    }

    /// Resolves the field directive: the typed one, else the reserved entry of `headers`.
    pub fn field_ranks(&self, headers: &HeaderMap) -> Option<FieldRanks> {
        match &self.fields {
            Some(names) => Some(FieldRanks::new(names)),
            None => headers.field(HEADER_ORDER_KEY).map(|field| FieldRanks::new(field.values())),
        }
    }

    /// Resolves the pseudo-header directive the same way, falling back to the default order.
    pub fn pseudo_order(&self, headers: &HeaderMap) -> PseudoOrder {
        match &self.pseudo {
            Some(names) => PseudoOrder::from_names(names),
            None => headers.field(PSEUDO_HEADER_ORDER_KEY).map_or(PseudoOrder::DEFAULT, |field| PseudoOrder::from_names(field.values())),
        }
    }
}

/// Rank of each directive entry, keyed by lower-cased name.
///
/// Built per write and dropped afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRanks {
    ranks: HashMap<String, usize>,
}

impl FieldRanks {
    /// Assigns each name its position; a repeated name takes its last position.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let mut ranks = HashMap::with_capacity(names.len());
        for (rank, name) in names.iter().enumerate() {
            ranks.insert(lower_key(name.as_ref()).into_owned(), rank);
        }
        Self { ranks }
    }

    /// Rank of a lower-cased field name.
    #[inline]
    pub(crate) fn rank_of_key(&self, key: &str) -> Option<usize> {
        self.ranks.get(key).copied()
    }

    /// Rank of `name`, compared ignoring case.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.rank_of_key(&lower_key(name))
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
