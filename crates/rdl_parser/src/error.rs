//! Parse error types and their conversion into diagnostics.

use crate::keywords::ReservedClass;
use rdl_diagnostics::code::{Category, DiagnosticCode};
use rdl_diagnostics::{Diagnostic, Label};
use rdl_source::Span;

/// Code for [`ParseError::Syntax`].
pub const SYNTAX_ERROR: DiagnosticCode = DiagnosticCode::new(Category::Error, 1);
/// Code for [`ParseError::InvalidIdentifier`].
pub const INVALID_IDENTIFIER: DiagnosticCode = DiagnosticCode::new(Category::Error, 2);

/// Why a parse failed. Parsing stops at the first error; no partial AST is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A non-escaped identifier spelled like a keyword or reserved word.
    #[error("{class} cannot be used for identifiers: {text}")]
    InvalidIdentifier {
        /// The offending identifier.
        text: String,
        /// Which table it was found in.
        class: ReservedClass,
        /// Where it appears.
        span: Span,
    },
}

/// A grammar mismatch at a single position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SyntaxError {
    /// Full message, e.g. ``expected one of `,`, `}`, found `;` ``.
    pub message: String,
    /// Descriptions of the tokens that would have let parsing continue.
    pub expected: Vec<String>,
    /// Description of what was found instead.
    pub found: String,
    /// Position of the failure.
    pub span: Span,
}

impl ParseError {
    /// Position of the failure.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Syntax(err) => err.span,
            ParseError::InvalidIdentifier { span, .. } => *span,
        }
    }

    /// Converts the error into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Syntax(err) => {
                let label = if err.expected.is_empty() {
                    "here".to_string()
                } else {
                    format!("unexpected {}", err.found)
                };
                Diagnostic::error(SYNTAX_ERROR, &err.message, err.span)
                    .with_label(Label::primary(err.span, label))
            }
            ParseError::InvalidIdentifier { text, class, span } => {
                let what = match class {
                    ReservedClass::Keyword => "keyword",
                    ReservedClass::ReservedWord => "reserved word",
                };
                Diagnostic::error(INVALID_IDENTIFIER, self.to_string(), *span)
                    .with_label(Label::primary(*span, format!("`{text}` is a {what}")))
                    .with_help(format!("escape it as `\\{text}` to use it as a name"))
            }
        }
    }
}
