//! Source text bookkeeping for the SystemRDL front end.
//!
//! Every AST node and every parse error carries a [`Span`]: a byte range tagged
//! with the [`FileId`] it was cut from. The [`SourceDb`] owns the text of each
//! file and turns spans back into `path:line:col` locations ([`ResolvedSpan`])
//! when diagnostics are rendered.

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
