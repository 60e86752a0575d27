//! HTTP/1.1 field line serialization.
//!
//! Every value of every field becomes one `Name: value\r\n` line. Values of a
//! multi-valued field stay in insertion order. The blank line ending the head
//! is written by the caller that owns the whole message.

use std::borrow::Cow;
use std::io;

use crate::header::{ExclusionSet, FieldTrace, HeaderField, HeaderMap, HeaderOrder, NoTrace};
use crate::protocol::SendError;

/// Makes a value safe to place on a single field line.
///
/// Each run of `\r`/`\n` becomes one space and surrounding whitespace is
/// trimmed, so a value can never start a new line.
pub(crate) fn sanitize_value(value: &str) -> Cow<'_, str> {
    let trimmed = value.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    if !trimmed.contains(['\r', '\n']) {
        return Cow::Borrowed(trimmed);
    }

    let mut sanitized = String::with_capacity(trimmed.len());
    let mut in_break = false;
    for c in trimmed.chars() {
        if c == '\r' || c == '\n' {
            if !in_break {
                sanitized.push(' ');
                in_break = true;
            }
        } else {
            sanitized.push(c);
            in_break = false;
        }
    }
    Cow::Owned(sanitized)
}

/// Writes `fields` as field lines in the given order.
///
/// Stops at the first failed write; lines already written stay written.
pub fn write_fields<W, T>(dst: &mut W, fields: &[HeaderField<'_>], trace: &mut T) -> io::Result<()>
where
    W: io::Write + ?Sized,
    T: FieldTrace + ?Sized,
{
    let mut written: Vec<Cow<'_, str>> = Vec::new();

    for field in fields {
        for value in field.values() {
            let value = sanitize_value(value);
            dst.write_all(field.name().as_bytes())?;
            dst.write_all(b": ")?;
            dst.write_all(value.as_bytes())?;
            dst.write_all(b"\r\n")?;
            if trace.enabled() {
                written.push(value);
            }
        }

        if trace.enabled() {
            let values: Vec<&str> = written.iter().map(|value| &**value).collect();
            trace.wrote_field(field.name(), &values);
            written.clear();
        }
    }
    Ok(())
}

impl HeaderMap {
    /// Writes all fields in wire format, ordered by `order`.
    pub fn write<W: io::Write + ?Sized>(&self, dst: &mut W, order: &HeaderOrder) -> Result<(), SendError> {
        self.write_subset(dst, order, &ExclusionSet::new())
    }

    /// Writes the fields not in `exclude`, ordered by `order`.
    ///
    /// The reserved directive keys are never written.
    pub fn write_subset<W: io::Write + ?Sized>(
        &self,
        dst: &mut W,
        order: &HeaderOrder,
        exclude: &ExclusionSet,
    ) -> Result<(), SendError> {
        self.write_subset_traced(dst, order, exclude, &mut NoTrace)
    }

    /// Like [`write_subset`](Self::write_subset), reporting each written field to `trace`.
    pub fn write_subset_traced<W, T>(
        &self,
        dst: &mut W,
        order: &HeaderOrder,
        exclude: &ExclusionSet,
        trace: &mut T,
    ) -> Result<(), SendError>
    where
        W: io::Write + ?Sized,
        T: FieldTrace + ?Sized,
    {
        let ranks = order.field_ranks(self);
        let fields = self.sorted_fields(ranks.as_ref(), exclude);
        write_fields(dst, &fields, trace)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::{HEADER_ORDER_KEY, PSEUDO_HEADER_ORDER_KEY};

    fn written(headers: &HeaderMap, order: &HeaderOrder, exclude: &ExclusionSet) -> String {
        let mut buf = Vec::new();
        headers.write_subset(&mut buf, order, exclude).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sanitizes_line_breaks_and_whitespace() {
        assert_eq!(sanitize_value("a\r\nb"), "a b");
        assert_eq!(sanitize_value("a\nb\rc"), "a b c");
        assert_eq!(sanitize_value("  padded\t"), "padded");
        assert_eq!(sanitize_value("\r\nlead"), "lead");
        assert!(matches!(sanitize_value("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn empty_collection_writes_nothing() {
        assert_eq!(written(&HeaderMap::new(), &HeaderOrder::new(), &ExclusionSet::new()), "");
    }

    #[test]
    fn multi_valued_fields_write_one_line_per_value() {
        let mut headers = HeaderMap::new();
        headers.set_values("Content-Length", ["0", "1", "2"]);
        assert_eq!(
            written(&headers, &HeaderOrder::new(), &ExclusionSet::new()),
            "Content-Length: 0\r\nContent-Length: 1\r\nContent-Length: 2\r\n"
        );
    }

    #[test]
    fn blank_and_zero_valued_fields() {
        let mut headers = HeaderMap::new();
        headers.insert_raw("Nil", Vec::new());
        headers.set_values("Empty", Vec::<String>::new());
        headers.set("Blank", "");
        headers.set_values("Double-Blank", ["", ""]);
        assert_eq!(
            written(&headers, &HeaderOrder::new(), &ExclusionSet::new()),
            "Blank: \r\nDouble-Blank: \r\nDouble-Blank: \r\n"
        );
    }

    #[test]
    fn excluded_fields_are_skipped() {
        let mut headers = HeaderMap::new();
        headers.set("Expires", "-1");
        headers.set_values("Content-Length", ["0", "1", "2"]);
        headers.set("Content-Encoding", "gzip");

        let exclude = ExclusionSet::new().with("Content-Length");
        assert_eq!(written(&headers, &HeaderOrder::new(), &exclude), "Content-Encoding: gzip\r\nExpires: -1\r\n");

        let all: ExclusionSet = ["Content-Length", "Expires", "Content-Encoding"].into_iter().collect();
        assert_eq!(written(&headers, &HeaderOrder::new(), &all), "");
    }

    #[test]
    fn reserved_directive_keys_order_but_never_print() {
        let mut headers = HeaderMap::new();
        for (name, value) in [("a", "2"), ("b", "3"), ("e", "1"), ("c", "5"), ("d", "4")] {
            headers.insert_raw(name, vec![value.to_string()]);
        }
        headers.insert_raw(HEADER_ORDER_KEY, ["e", "a", "b", "d", "c"].map(String::from).to_vec());
        headers.insert_raw(PSEUDO_HEADER_ORDER_KEY, vec![":method".to_string()]);

        // excluding the keys explicitly changes nothing
        let exclude = ExclusionSet::new().with(HEADER_ORDER_KEY);
        assert_eq!(written(&headers, &HeaderOrder::new(), &exclude), "e: 1\r\na: 2\r\nb: 3\r\nd: 4\r\nc: 5\r\n");
    }

    #[test]
    fn trace_sees_emitted_values() {
        let mut headers = HeaderMap::new();
        headers.set_values("X-Multi", ["one\r\ntwo", " three "]);
        headers.set("Accept", "*/*");

        let mut seen: Vec<(String, Vec<String>)> = Vec::new();
        let mut trace = |name: &str, values: &[&str]| {
            seen.push((name.to_string(), values.iter().map(ToString::to_string).collect()));
        };
        let mut buf = Vec::new();
        headers.write_subset_traced(&mut buf, &HeaderOrder::new(), &ExclusionSet::new(), &mut trace).unwrap();

        assert_eq!(
            seen,
            vec![
                ("Accept".to_string(), vec!["*/*".to_string()]),
                ("X-Multi".to_string(), vec!["one two".to_string(), "three".to_string()]),
            ]
        );
    }

    struct FailAfter(usize);

    impl io::Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.0 == 0 {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            self.0 -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_aborts_immediately() {
        let headers: HeaderMap = [("a", "1"), ("b", "2")].into_iter().collect();
        let mut sink = FailAfter(5);

        let err = headers.write(&mut sink, &HeaderOrder::new()).unwrap_err();
        assert!(matches!(err, SendError::Io { ref source } if source.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(sink.0, 0);
    }
}
