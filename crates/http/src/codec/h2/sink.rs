//! The contract with the header compression stage.

use crate::protocol::SendError;

/// Consumer of an HTTP/2 field block, typically an HPACK encoder.
///
/// Fields arrive one at a time in their final order: pseudo-headers first,
/// then regular fields. An implementation must encode them in exactly the
/// order received. Reordering, even for better table reuse, breaks the order
/// the caller asked for and with it the client fingerprint.
pub trait FieldBlockSink {
    fn encode_field(&mut self, name: &str, value: &str) -> Result<(), SendError>;
}

impl<S: FieldBlockSink + ?Sized> FieldBlockSink for &mut S {
    fn encode_field(&mut self, name: &str, value: &str) -> Result<(), SendError> {
        (**self).encode_field(name, value)
    }
}

/// Collects the block as owned pairs, e.g. to hand to an encoder later.
impl FieldBlockSink for Vec<(String, String)> {
    fn encode_field(&mut self, name: &str, value: &str) -> Result<(), SendError> {
        self.push((name.to_string(), value.to_string()));
        Ok(())
    }
}
