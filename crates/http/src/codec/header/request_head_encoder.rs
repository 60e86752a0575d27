//! HTTP request head encoder for serializing outbound request heads
//!
//! This module encodes a [`RequestHead`] into raw bytes: the request line, the
//! header fields in the order chosen by the request's
//! [`HeaderOrder`](crate::header::HeaderOrder), and the blank line ending the head.
//!
//! # Features
//!
//! - Deterministic, caller-controlled field order
//! - Line-break sanitization of field values
//! - `Host` derived from the URI authority when the request carries none
//! - HTTP/1.0 and HTTP/1.1 request lines

use crate::codec::header::write_fields;
use crate::header::{ExclusionSet, HeaderField, HeaderSorter, NoTrace, sorted_with};
use crate::protocol::{RequestHead, SendError};

use bytes::{BufMut, BytesMut};

use http::Version;
use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;
use tracing::{error, trace};

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Encoder for HTTP request heads implementing the [`Encoder`] trait.
///
/// The encoder is stateless: every call resolves the order directive, sorts
/// and writes the fields from scratch, so a retried request is simply encoded
/// again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestHeadEncoder;

impl Encoder<&RequestHead> for RequestHeadEncoder {
    type Error = SendError;

    /// Encodes a request head into the provided bytes buffer.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - HTTP version is neither HTTP/1.0 nor HTTP/1.1
    /// - Writing to buffer fails
    fn encode(&mut self, head: &RequestHead, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let version = match head.version() {
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_11 => "HTTP/1.1",
            v => {
                error!(http_version = ?v, "unsupported http version");
                return Err(SendError::UnsupportedVersion(v));
            }
        };

        dst.reserve(INIT_HEADER_SIZE);
        write!(FastWrite(dst), "{} {} {}\r\n", head.method(), head.request_target(), version)?;

        let headers = head.headers();
        let host_values: Vec<String> = match head.uri().authority() {
            Some(authority) if !headers.contains("Host") => vec![authority.to_string()],
            _ => Vec::new(),
        };
        let host = if host_values.is_empty() { None } else { Some(HeaderField::new("host", "Host", &host_values)) };

        let ranks = head.order().field_ranks(headers);
        let fields = sorted_with(headers, host, HeaderSorter::new(ranks.as_ref()), &ExclusionSet::new());
        trace!(method = %head.method(), field_count = fields.len(), "encoding request head");

        write_fields(&mut FastWrite(dst), &fields, &mut NoTrace)?;
        dst.put_slice(b"\r\n");
        Ok(())
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// This is an optimization to avoid unnecessary bounds checking when writing
/// to the bytes buffer, since we've already reserved enough space.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
