//! Transport-facing writers
//!
//! - [`RequestWriter`]: encodes [`RequestHead`](crate::protocol::RequestHead)s
//!   into an internal buffer and flushes them to any `AsyncWrite`
//!
//! Connection setup, TLS and pooling are left to the client that owns the
//! transport; this module only turns ordered heads into bytes on it.

mod request_writer;

pub use request_writer::RequestWriter;
