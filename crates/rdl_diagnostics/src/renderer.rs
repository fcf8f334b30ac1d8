//! Human-readable rendering of diagnostics.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use rdl_source::SourceDb;

/// Formats a [`Diagnostic`] against the sources it points into.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// Renders diagnostics in a rustc-like layout:
///
/// ```text
/// error[E001]: expected one of `,`, `}`, found `;`
///   --> regs.rdl:1:9
///    |
///  1 | {a, b, c;
///    |         ^ unexpected token
/// ```
///
/// Spans that are dummy, detached, or belong to another database render the
/// header and footers only.
pub struct TerminalRenderer {
    /// Whether ANSI colour codes are emitted around the header.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let head = format!("{}[{}]", diag.severity, diag.code);
        if self.color {
            let colour = if diag.severity.is_error() { 31 } else { 33 };
            format!("\x1b[1;{colour}m{head}\x1b[0m: {}\n", diag.message)
        } else {
            format!("{head}: {}\n", diag.message)
        }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = self.header(diag);

        let span = diag.primary_span;
        let file = if span.is_dummy() {
            None
        } else {
            source_db.try_get_file(span.file)
        };

        if let Some(file) = file {
            let resolved = source_db.resolve_span(span);
            out.push_str(&format!("  --> {resolved}\n"));

            let (line, col) = file.line_col(span.start);
            let line_num = line.to_string();
            let padding = " ".repeat(line_num.len());
            let line_content = source_line(&file.content, span.start);

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));

            let width = file
                .snippet(span.start, span.end)
                .lines()
                .next()
                .map_or(0, |l| l.chars().count())
                .max(1);
            let carets = "^".repeat(width);
            let col_padding = " ".repeat((col as usize).saturating_sub(1));
            let primary_msg = diag
                .labels
                .iter()
                .find(|l| l.style == LabelStyle::Primary)
                .map(|l| format!(" {}", l.message))
                .unwrap_or_default();

            out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
        }

        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

fn source_line(content: &str, byte_offset: u32) -> &str {
    let offset = (byte_offset as usize).min(content.len());
    let start = content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |pos| offset + pos);
    &content[start..end]
}
