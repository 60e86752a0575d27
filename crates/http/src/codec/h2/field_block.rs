//! HTTP/2 field block sequencing.
//!
//! A request's field block starts with the four pseudo-headers, in the order
//! given by [`PseudoOrder`], followed by the regular fields in the order
//! produced by [`HeaderSorter`]. Regular names are lower-cased, and fields that
//! HTTP/2 forbids (RFC 9113 section 8.2.2) are left out.

use std::borrow::Cow;

use http::Method;
use tracing::trace;

use super::sink::FieldBlockSink;
use crate::codec::header::sanitize_value;
use crate::header::{
    ExclusionSet, FieldTrace, HeaderField, HeaderMap, HeaderOrder, HeaderSorter, NoTrace, PseudoHeader, PseudoOrder,
    sorted_with,
};
use crate::protocol::{RequestHead, SendError};

/// Connection-specific fields never sent over HTTP/2. `host` travels as `:authority`.
const CONNECTION_SPECIFIC: [&str; 6] = ["connection", "keep-alive", "proxy-connection", "transfer-encoding", "upgrade", "host"];

/// Values of the request pseudo-headers.
///
/// A `CONNECT` request carries only `:method` and `:authority` (RFC 9113
/// section 8.5); its `:scheme` and `:path` are absent and never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoHeaderValues<'a> {
    method: &'a str,
    authority: &'a str,
    scheme: Option<&'a str>,
    path: Option<&'a str>,
}

impl<'a> PseudoHeaderValues<'a> {
    pub fn new(method: &'a str, authority: &'a str, scheme: &'a str, path: &'a str) -> Self {
        Self { method, authority, scheme: Some(scheme), path: Some(path) }
    }

    /// Values of a `CONNECT` request: `:method` and `:authority` only.
    pub fn connect(authority: &'a str) -> Self {
        Self { method: "CONNECT", authority, scheme: None, path: None }
    }

    /// Takes the values from a request head.
    ///
    /// `:authority` falls back to the `Host` field when the URI has none.
    /// A `CONNECT` head yields [`connect`](Self::connect) values.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::MissingPseudoHeader`] when no authority can be
    /// determined, or when a request other than `CONNECT` has no scheme.
    pub fn from_request(head: &'a RequestHead) -> Result<Self, SendError> {
        let authority = head.host().ok_or_else(|| SendError::missing_pseudo_header(PseudoHeader::Authority))?;
        if *head.method() == Method::CONNECT {
            return Ok(Self::connect(authority));
        }
        let scheme = head.uri().scheme_str().ok_or_else(|| SendError::missing_pseudo_header(PseudoHeader::Scheme))?;
        Ok(Self::new(head.method().as_str(), authority, scheme, head.request_target()))
    }

    /// The value of `pseudo`, or `None` when the request does not carry it.
    pub fn get(&self, pseudo: PseudoHeader) -> Option<&'a str> {
        match pseudo {
            PseudoHeader::Method => Some(self.method),
            PseudoHeader::Authority => Some(self.authority),
            PseudoHeader::Scheme => self.scheme,
            PseudoHeader::Path => self.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockField<'a> {
    name: Cow<'a, str>,
    values: Vec<Cow<'a, str>>,
}

/// The ordered, uncompressed field block of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBlock<'a> {
    fields: Vec<BlockField<'a>>,
}

impl<'a> FieldBlock<'a> {
    /// Sequences pseudo-headers and the regular fields of `headers`.
    ///
    /// Fields in `exclude`, the reserved directive keys, names starting with
    /// `:` and connection-specific fields are left out. `te` is only kept
    /// with the value `trailers`.
    pub fn build(
        pseudo: &PseudoHeaderValues<'a>,
        headers: &'a HeaderMap,
        order: &HeaderOrder,
        exclude: &ExclusionSet,
    ) -> Self {
        let pseudo_order = order.pseudo_order(headers);
        let ranks = order.field_ranks(headers);
        Self::sequence(pseudo, pseudo_order, sorted_with(headers, None, HeaderSorter::new(ranks.as_ref()), exclude))
    }

    /// Builds the block for a request head, with its own order directive.
    ///
    /// # Errors
    ///
    /// See [`PseudoHeaderValues::from_request`].
    pub fn for_request(head: &'a RequestHead) -> Result<Self, SendError> {
        let pseudo = PseudoHeaderValues::from_request(head)?;
        Ok(Self::build(&pseudo, head.headers(), head.order(), &ExclusionSet::new()))
    }

    fn sequence(pseudo: &PseudoHeaderValues<'a>, pseudo_order: PseudoOrder, regular: Vec<HeaderField<'a>>) -> Self {
        let mut fields = Vec::with_capacity(PseudoHeader::ALL.len() + regular.len());

        for name in pseudo_order.iter() {
            if let Some(value) = pseudo.get(name) {
                fields.push(BlockField { name: Cow::Borrowed(name.as_str()), values: vec![Cow::Borrowed(value)] });
            }
        }

        for field in regular {
            let name = field.key;
            if name.starts_with(':') || CONNECTION_SPECIFIC.contains(&name) {
                continue;
            }

            let mut values: Vec<Cow<'a, str>> = field.values().iter().map(|value| sanitize_value(value)).collect();
            if name == "te" {
                values.retain(|value| value.eq_ignore_ascii_case("trailers"));
            }
            if !values.is_empty() {
                fields.push(BlockField { name: Cow::Borrowed(name), values });
            }
        }

        trace!(pseudo_order = %pseudo_order.akamai_string(), field_count = fields.len(), "sequenced http2 field block");
        Self { fields }
    }

    /// Iterates `(name, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields.iter().flat_map(|field| field.values.iter().map(move |value| (&*field.name, &**value)))
    }

    /// Number of `(name, value)` pairs.
    pub fn len(&self) -> usize {
        self.fields.iter().map(|field| field.values.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Hands every pair to `sink`, in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error of `sink`.
    pub fn write_to<S: FieldBlockSink + ?Sized>(&self, sink: &mut S) -> Result<(), SendError> {
        self.write_to_traced(sink, &mut NoTrace)
    }

    /// Like [`write_to`](Self::write_to), reporting each field to `trace` once all its values are encoded.
    pub fn write_to_traced<S, T>(&self, sink: &mut S, trace: &mut T) -> Result<(), SendError>
    where
        S: FieldBlockSink + ?Sized,
        T: FieldTrace + ?Sized,
    {
        for field in &self.fields {
            for value in &field.values {
                sink.encode_field(&field.name, value)?;
            }
            if trace.enabled() {
                let values: Vec<&str> = field.values.iter().map(|value| &**value).collect();
                trace.wrote_field(&field.name, &values);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_ORDER_KEY, PSEUDO_HEADER_ORDER_KEY};

    const PSEUDO: PseudoHeaderValues<'static> = PseudoHeaderValues {
        method: "GET",
        authority: "httpbin.org",
        scheme: Some("https"),
        path: Some("/headers"),
    };

    fn names<'b>(block: &'b FieldBlock<'_>) -> Vec<&'b str> {
        block.iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn pseudo_directive_then_lexicographic_fields() {
        let mut headers = HeaderMap::new();
        headers.set("accept", "*/*");
        let order = HeaderOrder::new().with_pseudo([":method", ":authority", ":scheme", ":path"]);

        let block = FieldBlock::build(&PSEUDO, &headers, &order, &ExclusionSet::new());
        assert_eq!(
            block.iter().collect::<Vec<_>>(),
            [(":method", "GET"), (":authority", "httpbin.org"), (":scheme", "https"), (":path", "/headers"), ("accept", "*/*")]
        );
    }

    #[test]
    fn default_pseudo_order_without_directive() {
        let headers = HeaderMap::new();
        let block = FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new(), &ExclusionSet::new());
        assert_eq!(names(&block), [":authority", ":method", ":path", ":scheme"]);
        assert_eq!(block.len(), 4);
    }

    #[test]
    fn reserved_keys_drive_order_and_stay_out_of_the_block() {
        let mut headers = HeaderMap::new();
        headers.add("experience", "pain");
        headers.add("grind", "harder");
        headers.add("live", "mas");
        headers.add("user-agent", "test");
        headers.add("accept-encoding", "gzip");
        headers.insert_raw(HEADER_ORDER_KEY, ["grind", "experience", "live"].map(String::from).to_vec());
        headers.insert_raw(PSEUDO_HEADER_ORDER_KEY, [":method", ":authority", ":scheme", ":path"].map(String::from).to_vec());

        let block = FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new(), &ExclusionSet::new());
        assert_eq!(
            names(&block),
            [":method", ":authority", ":scheme", ":path", "grind", "experience", "live", "accept-encoding", "user-agent"]
        );
    }

    #[test]
    fn drops_connection_specific_fields() {
        let mut headers = HeaderMap::new();
        headers.set("Connection", "keep-alive");
        headers.set("Keep-Alive", "timeout=5");
        headers.set("Transfer-Encoding", "chunked");
        headers.set("Host", "httpbin.org");
        headers.insert_raw(":protocol", vec!["websocket".to_string()]);
        headers.set_values("TE", ["gzip", "trailers"]);
        headers.set("User-Agent", "test");

        let block = FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new().with_pseudo_order(PseudoOrder::chrome()), &ExclusionSet::new());
        assert_eq!(
            block.iter().skip(4).collect::<Vec<_>>(),
            [("te", "trailers"), ("user-agent", "test")]
        );
    }

    #[test]
    fn multi_values_stay_in_insertion_order() {
        let mut headers = HeaderMap::new();
        headers.set_values("Cookie", ["a=1", "b=2\r\n"]);

        let mut sink: Vec<(String, String)> = Vec::new();
        FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new(), &ExclusionSet::new()).write_to(&mut sink).unwrap();

        let cookies: Vec<_> = sink.iter().filter(|(name, _)| name == "cookie").map(|(_, value)| value.as_str()).collect();
        assert_eq!(cookies, ["a=1", "b=2"]);
    }

    #[test]
    fn trace_reports_fields_in_emission_order() {
        let mut headers = HeaderMap::new();
        headers.set("b", "2");
        headers.set("a", "1");

        let mut seen = String::new();
        let mut trace = |name: &str, _values: &[&str]| {
            seen.push_str(name);
            seen.push(' ');
        };
        let block = FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new().with_fields(["b"]), &ExclusionSet::new());
        block.write_to_traced(&mut Vec::<(String, String)>::new(), &mut trace).unwrap();

        assert_eq!(seen, ":authority :method :path :scheme b a ");
    }

    #[test]
    fn sink_errors_are_propagated() {
        struct Broken;

        impl FieldBlockSink for Broken {
            fn encode_field(&mut self, _name: &str, _value: &str) -> Result<(), SendError> {
                Err(SendError::io(std::io::Error::from(std::io::ErrorKind::BrokenPipe)))
            }
        }

        let headers = HeaderMap::new();
        let block = FieldBlock::build(&PSEUDO, &headers, &HeaderOrder::new(), &ExclusionSet::new());
        assert!(matches!(block.write_to(&mut Broken), Err(SendError::Io { .. })));
    }

    #[test]
    fn builds_from_request_head() {
        let mut head = RequestHead::new(Method::POST, "https://www.httpbin.org/headers?x=1".parse().unwrap())
            .with_order(HeaderOrder::new().with_pseudo_order(PseudoOrder::firefox()));
        head.headers_mut().set("content-type", "application/json");

        let block = FieldBlock::for_request(&head).unwrap();
        assert_eq!(
            block.iter().collect::<Vec<_>>(),
            [
                (":method", "POST"),
                (":path", "/headers?x=1"),
                (":authority", "www.httpbin.org"),
                (":scheme", "https"),
                ("content-type", "application/json"),
            ]
        );
    }

    #[test]
    fn connect_carries_method_and_authority_only() {
        let mut head = RequestHead::new(Method::CONNECT, "proxy.example:443".parse().unwrap())
            .with_order(HeaderOrder::new().with_pseudo_order(PseudoOrder::chrome()));
        head.headers_mut().set("Proxy-Authorization", "Basic dXNlcjpwYXNz");

        let block = FieldBlock::for_request(&head).unwrap();
        assert_eq!(
            block.iter().collect::<Vec<_>>(),
            [(":method", "CONNECT"), (":authority", "proxy.example:443"), ("proxy-authorization", "Basic dXNlcjpwYXNz")]
        );
        assert_eq!(block.len(), 3);
    }

    #[test]
    fn missing_scheme_is_an_error() {
        let mut head = RequestHead::new(Method::GET, "/relative".parse().unwrap());
        let err = FieldBlock::for_request(&head).unwrap_err();
        assert!(matches!(err, SendError::MissingPseudoHeader { name: PseudoHeader::Authority }));

        head.headers_mut().set("Host", "example.com");
        let err = FieldBlock::for_request(&head).unwrap_err();
        assert!(matches!(err, SendError::MissingPseudoHeader { name: PseudoHeader::Scheme }));
    }
}
