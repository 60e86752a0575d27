//! HTTP/1.1 request head serialization
//!
//! - [`write_fields`]: writes already ordered fields as `Name: value\r\n` lines
//! - [`RequestHeadEncoder`]: encodes a whole [`RequestHead`](crate::protocol::RequestHead)
//!   (request line, ordered fields, terminating blank line) into a `BytesMut`
//!
//! Field order comes from [`HeaderOrder`](crate::header::HeaderOrder); the
//! encoders never reorder what the sorter produced.

mod field_writer;
mod request_head_encoder;

pub(crate) use field_writer::sanitize_value;
pub use field_writer::write_fields;
pub use request_head_encoder::RequestHeadEncoder;
