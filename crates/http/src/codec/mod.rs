//! Wire codecs for ordered request heads
//!
//! Both codecs consume the same sorted field sequence from [`crate::header`]
//! and differ only in what they do with it.
//!
//! # Architecture
//!
//! - HTTP/1.1 ([`header`]):
//!   - [`RequestHeadEncoder`]: request line, ordered field lines, blank line
//!   - [`write_fields`]: field lines only, for callers that own the rest of the message
//!
//! - HTTP/2 ([`h2`]):
//!   - [`FieldBlock`]: pseudo-headers followed by ordered regular fields
//!   - [`FieldBlockSink`]: the order-preserving compression stage
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use http::Method;
//! use ordered_http::codec::RequestHeadEncoder;
//! use ordered_http::header::HeaderOrder;
//! use ordered_http::protocol::RequestHead;
//! use tokio_util::codec::Encoder;
//!
//! let mut head = RequestHead::new(Method::GET, "http://example.com/".parse().unwrap())
//!     .with_order(HeaderOrder::new().with_fields(["host", "accept"]));
//! head.headers_mut().add("Accept", "*/*");
//!
//! let mut buf = BytesMut::new();
//! RequestHeadEncoder.encode(&head, &mut buf).unwrap();
//! assert_eq!(&buf[..], b"GET / HTTP/1.1\r\nHost: example.com\r\nAccept: */*\r\n\r\n");
//! ```

pub mod h2;
pub mod header;

pub use h2::{FieldBlock, FieldBlockSink, PseudoHeaderValues};
pub use header::{RequestHeadEncoder, write_fields};
