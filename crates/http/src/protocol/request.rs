//! The head of an outbound request.
//!
//! A [`RequestHead`] bundles the request line, the [`HeaderMap`] and the
//! [`HeaderOrder`] that decides how those fields are laid out on the wire.
//! It is built by the client and handed to either codec.

use http::request::Parts;
use http::{Method, Request, Uri, Version};

use crate::header::{HeaderMap, HeaderOrder};

/// Everything needed to write a request head, without its body.
#[derive(Debug, Clone)]
pub struct RequestHead {
    method: Method,
    uri: Uri,
    version: Version,
    headers: HeaderMap,
    order: HeaderOrder,
}

impl RequestHead {
    /// Creates an HTTP/1.1 request head with no fields.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self { method, uri, version: Version::HTTP_11, headers: HeaderMap::new(), order: HeaderOrder::new() }
    }

    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: HeaderOrder) -> Self {
        self.order = order;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn order(&self) -> &HeaderOrder {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut HeaderOrder {
        &mut self.order
    }

    /// The request-target of the request line.
    ///
    /// `CONNECT` uses authority-form, everything else origin-form with `/`
    /// standing in for an empty path.
    pub fn request_target(&self) -> &str {
        if self.method == Method::CONNECT
            && let Some(authority) = self.uri.authority()
        {
            return authority.as_str();
        }

        match self.uri.path_and_query() {
            Some(path_and_query) if !path_and_query.as_str().is_empty() => path_and_query.as_str(),
            _ => "/",
        }
    }

    /// The target host: a non-empty `Host` field, else the URI authority.
    pub fn host(&self) -> Option<&str> {
        let host = self.headers.get("Host");
        if !host.is_empty() {
            return Some(host);
        }
        self.uri.authority().map(http::uri::Authority::as_str)
    }
}

/// Converts `http` request parts, keeping all header values.
impl From<Parts> for RequestHead {
    fn from(parts: Parts) -> Self {
        let headers = HeaderMap::from(&parts.headers);
        Self { method: parts.method, uri: parts.uri, version: parts.version, headers, order: HeaderOrder::new() }
    }
}

impl From<Request<()>> for RequestHead {
    #[inline]
    fn from(request: Request<()>) -> Self {
        let (parts, ()) = request.into_parts();
        Self::from(parts)
    }
}
