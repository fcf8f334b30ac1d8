//! Structured diagnostics for the SystemRDL front end.
//!
//! Parse failures are converted into [`Diagnostic`] values (code, severity,
//! primary span, labels, notes). A [`DiagnosticSink`] collects them across many
//! parse calls and a [`DiagnosticRenderer`] formats them against a
//! [`SourceDb`](rdl_source::SourceDb).

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod label;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use label::{Label, LabelStyle};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
