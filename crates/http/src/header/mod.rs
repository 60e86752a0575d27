//! Header storage and ordering.
//!
//! This module owns everything that decides *which* fields are written and in
//! *what order*. The codecs in [`crate::codec`] consume its output.
//!
//! # Components
//!
//! - [`HeaderMap`]: case-insensitive multi-valued field storage
//!   - Canonicalizes names on [`add`](HeaderMap::add) and [`set`](HeaderMap::set)
//!   - Keeps caller spelling through [`insert_raw`](HeaderMap::insert_raw)
//!   - Deep, independent [`Clone`]
//!
//! - [`HeaderOrder`]: the caller's order directive
//!   - Field order, resolved into [`FieldRanks`]
//!   - HTTP/2 pseudo-header order, resolved into [`PseudoOrder`]
//!
//! - [`ExclusionSet`]: names left out of a write
//!
//! - [`HeaderSorter`]: stable comparator producing the wire order
//!
//! - [`FieldTrace`]: observer notified after each field is written
//!
//! # Example
//!
//! ```
//! use ordered_http::header::{ExclusionSet, HeaderMap, HeaderOrder};
//!
//! let mut headers = HeaderMap::new();
//! headers.add("X-B", "2");
//! headers.add("X-A", "1");
//! headers.add("X-C", "3");
//!
//! let order = HeaderOrder::new().with_fields(["X-A", "X-B"]);
//! let mut wire = Vec::new();
//! headers.write_subset(&mut wire, &order, &ExclusionSet::new()).unwrap();
//!
//! assert_eq!(wire, b"X-A: 1\r\nX-B: 2\r\nX-C: 3\r\n");
//! ```

mod exclude;
mod map;
mod name;
mod order;
mod pseudo;
mod sorter;
mod trace;

pub use exclude::ExclusionSet;
pub use map::{HeaderField, HeaderMap};
pub use name::{HEADER_ORDER_KEY, PSEUDO_HEADER_ORDER_KEY, canonical_header_key};
pub use order::{FieldRanks, HeaderOrder};
pub use pseudo::{PseudoHeader, PseudoOrder};
pub use sorter::HeaderSorter;
pub use trace::{FieldTrace, NoTrace};

pub(crate) use sorter::sorted_with;
