//! HTTP/2 request pseudo-header names and their emission order.
//!
//! Different clients send pseudo-headers in different orders, and that order
//! is visible to anyone fingerprinting the connection (the Akamai HTTP/2
//! fingerprint records it as a string such as `m,s,a,p`).

use std::fmt;

use tracing::debug;

/// One of the four request pseudo-headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoHeader {
    Method,
    Authority,
    Scheme,
    Path,
}

impl PseudoHeader {
    pub const ALL: [PseudoHeader; 4] = [Self::Method, Self::Authority, Self::Scheme, Self::Path];

    /// The on-wire field name, including the leading colon.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => ":method",
            Self::Authority => ":authority",
            Self::Scheme => ":scheme",
            Self::Path => ":path",
        }
    }

    /// Parses a pseudo-header name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pseudo| pseudo.as_str().eq_ignore_ascii_case(name))
    }

    fn letter(self) -> char {
        match self {
            Self::Method => 'm',
            Self::Authority => 'a',
            Self::Scheme => 's',
            Self::Path => 'p',
        }
    }
}

impl fmt::Display for PseudoHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete emission order over the four pseudo-headers.
///
/// Always holds each pseudo-header exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PseudoOrder([PseudoHeader; 4]);

impl PseudoOrder {
    /// Order used when no directive is supplied: `:authority, :method, :path, :scheme`.
    pub const DEFAULT: PseudoOrder =
        PseudoOrder([PseudoHeader::Authority, PseudoHeader::Method, PseudoHeader::Path, PseudoHeader::Scheme]);

    /// Chrome: `:method, :scheme, :authority, :path`.
    pub const fn chrome() -> Self {
        Self([PseudoHeader::Method, PseudoHeader::Scheme, PseudoHeader::Authority, PseudoHeader::Path])
    }

    /// Firefox: `:method, :path, :authority, :scheme`.
    pub const fn firefox() -> Self {
        Self([PseudoHeader::Method, PseudoHeader::Path, PseudoHeader::Authority, PseudoHeader::Scheme])
    }

    /// Safari: `:method, :scheme, :path, :authority`.
    pub const fn safari() -> Self {
        Self([PseudoHeader::Method, PseudoHeader::Scheme, PseudoHeader::Path, PseudoHeader::Authority])
    }

    /// Builds an order from directive entries.
    ///
    /// Valid names are taken in listed order, first occurrence wins. Unknown
    /// names are ignored. Pseudo-headers the directive leaves out follow in
    /// [`DEFAULT`](Self::DEFAULT) order so the result is always complete.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut order = Vec::with_capacity(4);
        for name in names {
            let name = name.as_ref();
            match PseudoHeader::from_name(name) {
                Some(pseudo) if !order.contains(&pseudo) => order.push(pseudo),
                Some(_) => {}
                None => debug!(name, "ignoring unknown pseudo-header in order directive"),
            }
        }
        for pseudo in Self::DEFAULT.0 {
            if !order.contains(&pseudo) {
                order.push(pseudo);
            }
        }
        Self([order[0], order[1], order[2], order[3]])
    }

    /// Iterates the pseudo-headers in emission order.
    pub fn iter(&self) -> impl Iterator<Item = PseudoHeader> + '_ {
        self.0.iter().copied()
    }

    /// Fingerprint notation, e.g. `m,s,a,p` for Chrome.
    pub fn akamai_string(&self) -> String {
        let letters: Vec<String> = self.iter().map(|pseudo| pseudo.letter().to_string()).collect();
        letters.join(",")
    }
}

impl Default for PseudoOrder {
    fn default() -> Self {
        Self::DEFAULT
    }
}
