use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use rustyline::error::ReadlineError;
use std::{fmt, io, ops::Range};

/// Utility enum to package errors that can occur while generating exercises.
#[derive(Debug)]
pub enum Error {
    /// An expression could not be built or evaluated.
    Expr(chaos_expr::Error),

    /// A line typed in interactive mode is not of the form `BASE EXPONENT`.
    Request {
        /// The line that was typed.
        line: String,

        /// The region of the line to highlight.
        span: Range<usize>,

        /// What is wrong with it.
        message: String,
    },

    /// Reading input from the terminal failed.
    Readline(ReadlineError),

    /// Writing output failed.
    Io(io::Error),
}

impl Error {
    /// Report the error to stderr.
    pub fn report_to_stderr(&self) {
        let result = match self {
            Self::Expr(err) => err.report_to_stderr("input"),
            Self::Request { line, span, message } => {
                Report::build(ReportKind::Error, "input", span.start)
                    .with_message(message)
                    .with_label(Label::new(("input", span.clone())).with_color(Color::Red))
                    .with_help(format!(
                        "type {} for log_2(2^3), or press enter for a random exercise",
                        "2 3".fg(chaos_error::EXPR),
                    ))
                    .finish()
                    .eprint(("input", Source::from(line)))
            },
            Self::Readline(err) => {
                eprintln!("{}", err);
                Ok(())
            },
            Self::Io(err) => {
                eprintln!("{}", err);
                Ok(())
            },
        };

        if let Err(err) = result {
            eprintln!("could not report error: {}", err);
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expr(err) => write!(f, "{}", err),
            Self::Request { message, .. } => f.write_str(message),
            Self::Readline(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "{}", err),
        }
    }
}

impl From<chaos_expr::Error> for Error {
    fn from(err: chaos_expr::Error) -> Self {
        Self::Expr(err)
    }
}

impl From<ReadlineError> for Error {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
