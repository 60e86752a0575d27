//! Deterministic header ordering for outbound HTTP requests
//!
//! HTTP clients are often fingerprinted by the order in which they send header
//! fields. A plain key-value map gives no control over that order, so a client
//! built on one cannot reproduce another client's wire image. This crate keeps
//! header storage and header *order* separate and serializes fields in exactly
//! the order the caller asks for, for both HTTP/1.1 textual framing and the
//! HTTP/2 field block (including pseudo-header order).
//!
//! # Features
//!
//! - Case-insensitive, multi-valued header storage with canonical names
//! - Typed order directives for regular fields and HTTP/2 pseudo-headers
//! - Partial directives: unlisted fields follow, sorted lexicographically
//! - Value sanitization against header injection
//! - Pseudo-header presets matching common browsers
//! - Async buffered request head writer on top of tokio
//!
//! # Example
//!
//! ```
//! use ordered_http::codec::{FieldBlock, PseudoHeaderValues};
//! use ordered_http::header::{ExclusionSet, HeaderMap, HeaderOrder, PseudoOrder};
//!
//! let mut headers = HeaderMap::new();
//! headers.add("accept", "*/*");
//! headers.add("user-agent", "Mozilla/5.0");
//! headers.add("sec-ch-ua-mobile", "?0");
//!
//! let order = HeaderOrder::new()
//!     .with_fields(["sec-ch-ua-mobile", "user-agent"])
//!     .with_pseudo_order(PseudoOrder::chrome());
//!
//! // HTTP/1.1
//! let mut wire = Vec::new();
//! headers.write(&mut wire, &order).unwrap();
//! assert_eq!(wire, b"Sec-Ch-Ua-Mobile: ?0\r\nUser-Agent: Mozilla/5.0\r\nAccept: */*\r\n");
//!
//! // HTTP/2
//! let pseudo = PseudoHeaderValues::new("GET", "example.com", "https", "/");
//! let block = FieldBlock::build(&pseudo, &headers, &order, &ExclusionSet::new());
//! let names: Vec<&str> = block.iter().map(|(name, _)| name).collect();
//! assert_eq!(names, [":method", ":scheme", ":authority", ":path", "sec-ch-ua-mobile", "user-agent", "accept"]);
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`header`]: storage, order directives, exclusions and the sorter
//! - [`codec`]: the HTTP/1.1 writer and the HTTP/2 field block sequencer
//! - [`protocol`]: the request head handed to the codecs, and errors
//! - [`connection`]: an async writer that flushes encoded heads to a transport
//!
//! # Ordering rules
//!
//! Without a directive, fields are written in byte-wise order of their stored
//! names. With one, every listed field comes first in listed order (matched
//! ignoring case), followed by the unlisted fields in byte-wise order. The
//! reserved keys [`header::HEADER_ORDER_KEY`] and
//! [`header::PSEUDO_HEADER_ORDER_KEY`] are never written.
//!
//! # Concurrency
//!
//! Every write resolves its directive, exclusions and sort buffer locally, so
//! independent requests never contend on shared state. A [`header::HeaderMap`]
//! must not be mutated while it is being written; clone it to fork a request.
//!
//! # Limitations
//!
//! - No HPACK: the HTTP/2 field block is handed to a [`codec::FieldBlockSink`]
//! - No connection management, TLS or response parsing

pub mod codec;
pub mod connection;
pub mod header;
pub mod protocol;
