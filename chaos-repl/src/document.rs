//! Wraps exercise lines in a standalone LaTeX document.

use std::io::{self, Write};

/// Written before the first exercise.
pub const PREAMBLE: &str = "\\documentclass{article}
\\usepackage{amsmath}
\\begin{document}
";

/// Written after the last exercise.
pub const POSTAMBLE: &str = "\\end{document}
";

/// Writes the given lines, one per line, optionally wrapped in [`PREAMBLE`] and [`POSTAMBLE`].
pub fn write_lines<'a>(
    out: &mut impl Write,
    lines: impl IntoIterator<Item = &'a String>,
    document: bool,
) -> io::Result<()> {
    if document {
        out.write_all(PREAMBLE.as_bytes())?;
    }
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    if document {
        out.write_all(POSTAMBLE.as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn bare_lines() {
        let lines = vec!["$$ a $$".to_string(), "$$ b $$".to_string()];
        let mut out = Vec::new();
        write_lines(&mut out, &lines, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "$$ a $$\n$$ b $$\n");
    }

    #[test]
    fn full_document() {
        let lines = vec!["$$ a $$".to_string()];
        let mut out = Vec::new();
        write_lines(&mut out, &lines, true).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\\documentclass{article}\n\\usepackage{amsmath}\n\\begin{document}\n$$ a $$\n\\end{document}\n",
        );
    }
}
