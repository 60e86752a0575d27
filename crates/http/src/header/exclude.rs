//! Field names left out of a write.

use std::collections::HashSet;

use super::name::{is_reserved, lower_key};

/// Names to omit from output, compared ignoring case.
///
/// The reserved directive keys are always excluded, whether or not they are
/// listed. A set is meant to be built on the stack for one write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// A set that only excludes the reserved directive keys.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<S: AsRef<str>>(mut self, name: S) -> Self {
        self.insert(name);
        self
    }

    pub fn insert<S: AsRef<str>>(&mut self, name: S) {
        self.names.insert(lower_key(name.as_ref()).into_owned());
    }

    /// Checks a lower-cased field name.
    #[inline]
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        is_reserved(key) || self.names.contains(key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contains_key(&lower_key(name))
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = ExclusionSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_ORDER_KEY, PSEUDO_HEADER_ORDER_KEY};

    #[test]
    fn always_excludes_reserved_keys() {
        let set = ExclusionSet::new();
        assert!(set.contains(HEADER_ORDER_KEY));
        assert!(set.contains(PSEUDO_HEADER_ORDER_KEY));
        assert!(!set.contains("Accept"));
    }

    #[test]
    fn matches_ignoring_case() {
        let set: ExclusionSet = ["Content-Length", "expires"].into_iter().collect();
        assert!(set.contains("content-length"));
        assert!(set.contains("EXPIRES"));
        assert!(!set.contains("Content-Encoding"));
    }
}
