//! Stable ordering of header fields.
//!
//! Without a directive, fields sort byte-wise by stored name. With one, every
//! ranked field comes before every unranked field; ranked fields follow their
//! rank and unranked fields keep lexicographic order among themselves.

use std::cmp::Ordering;

use tracing::trace;

use super::exclude::ExclusionSet;
use super::map::{HeaderField, HeaderMap};
use super::order::FieldRanks;

/// Comparator over [`HeaderField`]s for one write.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderSorter<'r> {
    ranks: Option<&'r FieldRanks>,
}

impl<'r> HeaderSorter<'r> {
    /// A sorter for the given directive, or lexicographic when `None`.
    pub fn new(ranks: Option<&'r FieldRanks>) -> Self {
        Self { ranks }
    }

    pub fn compare(&self, a: &HeaderField<'_>, b: &HeaderField<'_>) -> Ordering {
        let Some(ranks) = self.ranks else {
            return a.name().cmp(b.name());
        };

        match (ranks.rank_of_key(a.key), ranks.rank_of_key(b.key)) {
            (Some(rank_a), Some(rank_b)) => rank_a.cmp(&rank_b).then_with(|| a.name().cmp(b.name())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.name().cmp(b.name()),
        }
    }

    /// Sorts `fields` in place. The sort is stable and `O(n log n)`.
    pub fn sort(&self, fields: &mut [HeaderField<'_>]) {
        fields.sort_by(|a, b| self.compare(a, b));
    }
}

impl HeaderMap {
    /// Returns the fields not in `exclude`, ordered by `ranks`.
    ///
    /// The reserved directive keys are always left out.
    pub fn sorted_fields(&self, ranks: Option<&FieldRanks>, exclude: &ExclusionSet) -> Vec<HeaderField<'_>> {
        sorted_with(self, None, HeaderSorter::new(ranks), exclude)
    }
}

/// Collects the fields of `headers` not in `exclude`, adds `extra`, and sorts them.
pub(crate) fn sorted_with<'a>(
    headers: &'a HeaderMap,
    extra: Option<HeaderField<'a>>,
    sorter: HeaderSorter<'_>,
    exclude: &ExclusionSet,
) -> Vec<HeaderField<'a>> {
    let mut fields: Vec<HeaderField<'a>> = headers.iter().filter(|field| !exclude.contains_key(field.key)).collect();
    fields.extend(extra);
    sorter.sort(&mut fields);
    trace!(field_count = fields.len(), ordered = sorter.ranks.is_some(), "sorted header fields");
    fields
}
