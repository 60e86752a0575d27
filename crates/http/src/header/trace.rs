//! Observation of fields as they are written.

/// Receives each field after all of its values have been written.
///
/// `values` are the sanitized values exactly as emitted. Closures of the form
/// `FnMut(&str, &[&str])` implement this trait.
pub trait FieldTrace {
    fn wrote_field(&mut self, name: &str, values: &[&str]);

    /// When false, writers skip collecting values for this observer.
    fn enabled(&self) -> bool {
        true
    }
}

impl<F> FieldTrace for F
where
    F: FnMut(&str, &[&str]),
{
    fn wrote_field(&mut self, name: &str, values: &[&str]) {
        self(name, values);
    }
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl FieldTrace for NoTrace {
    fn wrote_field(&mut self, _name: &str, _values: &[&str]) {}

    fn enabled(&self) -> bool {
        false
    }
}
