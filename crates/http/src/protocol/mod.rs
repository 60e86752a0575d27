//! Request-level types shared by the codecs.
//!
//! - [`RequestHead`]: method, target, version, header fields and their order
//!   directive, everything needed to produce a request head on the wire
//! - [`SendError`]: failures while writing a request head or field block
//!
//! Ordering itself lives in [`crate::header`]; this module only bundles the
//! pieces a transport hands to a codec.

mod request;
pub use request::RequestHead;

mod error;
pub use error::SendError;
