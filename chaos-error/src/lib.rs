//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors in this workspace do not come from a parser, so there is no user-typed source code to
//! point at. Instead, every [`Error`] carries the markup of the expression it originated from,
//! and its spans index into that markup.

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;

    /// A short, single-line description of the error.
    fn message(&self) -> String;

    /// Returns `self` as [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;
}

/// An error associated with regions of an expression's markup that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The markup of the expression this error originated from.
    pub src: String,

    /// The regions of [`Error::src`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source, spans and kind.
    pub fn new(
        src: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { src: src.into(), spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns the kind of this error as the concrete type `K`, if it is one.
    pub fn kind<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str) -> std::io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(&self.src)))
    }

    /// Writes the report for this error into a string.
    ///
    /// The string keeps ariadne's ANSI color codes, exactly as [`Error::report_to_stderr`] would
    /// print them. Strip them before comparing against plain text.
    pub fn report_to_string(&self, src_id: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(&self.src)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind};
    use super::*;

    #[derive(Debug)]
    struct Oops;

    impl ErrorKind for Oops {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(self.message())
                .with_label(Label::new((src_id, spans[0].clone())).with_message("here"))
                .finish()
        }

        fn message(&self) -> String {
            "oops".to_string()
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new("\\lg{2}", vec![0..3], Oops);
        assert!(err.kind::<Oops>().is_some());
        assert_eq!(err.to_string(), "oops");
    }

    #[test]
    fn report_mentions_message() {
        let err = Error::new("\\lg{2}", vec![0..3], Oops);
        let report = strip_ansi_escapes::strip_str(err.report_to_string("expr"));
        assert!(report.contains("oops"));
        assert!(report.contains("here"));
        assert!(report.contains("\\lg{2}"));
    }

    #[test]
    fn report_string_strips_to_plain_text() {
        let err = Error::new("\\lg{2}", vec![0..3], Oops);
        let raw = err.report_to_string("expr");
        let plain = strip_ansi_escapes::strip_str(&raw);
        assert!(plain.len() <= raw.len());
        assert!(plain.contains("oops"));
    }
}
