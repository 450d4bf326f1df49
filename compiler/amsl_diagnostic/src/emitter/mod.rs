//! Human-readable rendering of diagnostics.
//!
//! ```text
//! error[E2001]: unresolved variable `y`
//!   --> main.amsl:1:3
//!    |
//!  1 | { y }
//!    |   ^ not declared in any enclosing scope
//!    = note: ...
//! ```

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

/// Writes diagnostics to any `Write` sink, with source snippets when the
/// source text is known.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    source: Option<String>,
    path: Option<String>,
    table: LineOffsetTable,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            source: None,
            path: None,
            table: LineOffsetTable::default(),
        }
    }

    /// Attach the source text so labels render with snippets.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let source = source.into();
        self.table = LineOffsetTable::build(&source);
        self.source = Some(source);
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Render one diagnostic. Write failures are ignored: there is nowhere
    /// left to report them.
    pub fn emit(&mut self, diagnostic: &Diagnostic) {
        let rendered = self.render(diagnostic);
        let _ = self.writer.write_all(rendered.as_bytes());
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut out = format!("error[{}]: {}\n", diagnostic.code, diagnostic.message);
        let path = self.path.as_deref().unwrap_or("<input>");

        for label in &diagnostic.labels {
            let Some(source) = self.source.as_deref() else {
                out.push_str(&format!("  --> {path}@{}: {}\n", label.span, label.message));
                continue;
            };
            let start = label.span.start as usize;
            let (line, col) = self.table.offset_to_line_col(source, start);
            let text = self.table.line_text(source, line);
            let gutter = line.to_string().len();
            let width = source
                .get(label.span.to_range())
                .map_or(1, |s| s.chars().count().max(1));

            out.push_str(&format!("{:gutter$}--> {path}:{line}:{col}\n", ""));
            out.push_str(&format!("{:gutter$} |\n", ""));
            out.push_str(&format!("{line} | {text}\n"));
            out.push_str(&format!(
                "{:gutter$} | {:pad$}{} {}\n",
                "",
                "",
                "^".repeat(width),
                label.message,
                pad = col - 1,
            ));
        }

        for note in &diagnostic.notes {
            out.push_str(&format!("  = note: {note}\n"));
        }
        out
    }
}
