//! Field name canonicalization and the reserved directive keys.
//!
//! Canonical names follow the MIME convention: the first letter and every
//! letter following a hyphen are upper-cased, all other letters lower-cased,
//! so `accept-encoding` becomes `Accept-Encoding`. Names containing a byte
//! that is not a valid token character are returned untouched.

use std::borrow::Cow;

/// Reserved key carrying the serialization order of ordinary field names.
///
/// When present inside a [`HeaderMap`](super::HeaderMap) and no typed order is
/// given, its values act as the field order directive. It is never written.
pub const HEADER_ORDER_KEY: &str = "Header-Order:";

/// Reserved key carrying the HTTP/2 pseudo-header order.
///
/// Valid entries are `:method`, `:authority`, `:scheme` and `:path`. It is
/// never written.
pub const PSEUDO_HEADER_ORDER_KEY: &str = "PHeader-Order:";

/// Lower-cased forms of the reserved keys, as stored in the map index.
pub(crate) const RESERVED_KEYS: [&str; 2] = ["header-order:", "pheader-order:"];

/// Returns true if `lower` is one of the reserved directive keys.
#[inline]
pub(crate) fn is_reserved(lower: &str) -> bool {
    RESERVED_KEYS.contains(&lower)
}

/// Table of bytes allowed in a field name token (RFC 9110 section 5.6.2).
const TOKEN_TABLE: [bool; 128] = {
    let mut table = [false; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = b.is_ascii_alphanumeric()
            || matches!(b, b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~');
        i += 1;
    }
    table
};

#[inline]
pub(crate) fn is_token_byte(b: u8) -> bool {
    (b as usize) < TOKEN_TABLE.len() && TOKEN_TABLE[b as usize]
}

/// Returns the canonical form of a field name.
///
/// Borrows when `name` is already canonical or cannot be canonicalized
/// because it holds a non-token byte, so the call is idempotent and cheap
/// on the common path.
pub fn canonical_header_key(name: &str) -> Cow<'_, str> {
    let bytes = name.as_bytes();
    let mut upper = true;
    let mut needs_change = false;

    for &b in bytes {
        if !is_token_byte(b) {
            return Cow::Borrowed(name);
        }
        if (upper && b.is_ascii_lowercase()) || (!upper && b.is_ascii_uppercase()) {
            needs_change = true;
        }
        upper = b == b'-';
    }

    if !needs_change {
        return Cow::Borrowed(name);
    }

    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;
    for &b in bytes {
        let c = if upper { b.to_ascii_uppercase() } else { b.to_ascii_lowercase() };
        canonical.push(c as char);
        upper = b == b'-';
    }
    Cow::Owned(canonical)
}

/// Lower-cases a field name for case-insensitive lookups.
#[inline]
pub(crate) fn lower_key(name: &str) -> Cow<'_, str> {
    if name.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(name.to_ascii_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}
