//! Hand-rolled recursive descent parser for SystemRDL constant expressions.
//!
//! The crate recognizes the literal, identifier, reference and expression
//! sub-grammar of SystemRDL 2.0 and builds a position-tagged AST. Any named
//! production can be used as the start symbol ([`EntryRule`]); the whole input
//! must match it. The main entry point is [`parse`].
//!
//! # Architecture
//!
//! - **Lexer** ([`lexer`]): converts text to tokens with max-munch operators,
//!   skipping whitespace and comments.
//! - **Parser** ([`parser`]): recursive descent for literals and references,
//!   precedence climbing for binary operators. Stops at the first error.
//! - **AST** ([`ast`]): node types with spans and serde support. Equality
//!   ignores spans.
//! - **Errors** ([`error`]): [`ParseError`] and its conversion into
//!   [`rdl_diagnostics::Diagnostic`].

#![warn(missing_docs)]

/// AST node types for SystemRDL constant expressions.
pub mod ast;
/// Parse errors and diagnostic codes.
pub mod error;
mod expr;
/// Keyword, reserved-word and property-keyword tables.
pub mod keywords;
/// Lexical analyzer for SystemRDL constant expressions.
pub mod lexer;
/// Number and string literal decoding.
pub mod literal;
/// Recursive descent parser and entry-rule dispatch.
pub mod parser;
mod reference;
/// Grammar entry points.
pub mod rule;
/// Token types for the SystemRDL lexer.
pub mod token;

pub use ast::{Identifier, Node};
pub use error::{ParseError, SyntaxError};
pub use rule::EntryRule;
pub use token::{RdlToken, Token};

use rdl_config::ParserConfig;
use rdl_diagnostics::DiagnosticSink;
use rdl_source::{FileId, SourceDb, Span};
use tracing::debug;

/// Parses `text` as `rule` with the default configuration.
///
/// Spans in the result and in errors refer to [`FileId::DETACHED`].
pub fn parse(rule: EntryRule, text: &str) -> Result<Node, ParseError> {
    parse_with_config(rule, text, FileId::DETACHED, &ParserConfig::default())
}

/// Parses `text` as a `constant_expression`.
pub fn parse_expression(text: &str) -> Result<Node, ParseError> {
    parse(EntryRule::default(), text)
}

/// Parses `text` as `rule`, tagging spans with `file`.
#[tracing::instrument(level = "debug", skip_all, fields(rule = %rule, len = text.len()))]
pub fn parse_with_config(
    rule: EntryRule,
    text: &str,
    file: FileId,
    config: &ParserConfig,
) -> Result<Node, ParseError> {
    let tokens = lexer::lex(text, file)?;
    let mut parser = parser::RdlParser::new(tokens, text, file, config);
    let result = parser.parse_rule(rule);
    match &result {
        Ok(_) => debug!("parsed"),
        Err(err) => debug!(error = %err, "parse failed"),
    }
    result
}

/// Parses a file registered in `source_db`.
///
/// A `file_id` the database did not issue is reported as a syntax error.
pub fn parse_file(
    rule: EntryRule,
    file_id: FileId,
    source_db: &SourceDb,
    config: &ParserConfig,
) -> Result<Node, ParseError> {
    let Some(file) = source_db.try_get_file(file_id) else {
        return Err(ParseError::Syntax(SyntaxError {
            message: format!("unknown file id {}", file_id.as_raw()),
            expected: Vec::new(),
            found: "unregistered file".to_string(),
            span: Span::point(file_id, 0),
        }));
    };
    parse_with_config(rule, &file.content, file_id, config)
}

/// Parses a file and reports a failure to `sink` instead of returning it.
pub fn parse_file_reporting(
    rule: EntryRule,
    file_id: FileId,
    source_db: &SourceDb,
    config: &ParserConfig,
    sink: &DiagnosticSink,
) -> Option<Node> {
    match parse_file(rule, file_id, source_db, config) {
        Ok(node) => Some(node),
        Err(err) => {
            sink.emit(err.to_diagnostic());
            None
        }
    }
}
