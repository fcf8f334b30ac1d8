//! Core parser infrastructure and entry-rule dispatch.
//!
//! The [`RdlParser`] struct provides the primitive operations (advance, eat,
//! expect) shared by the literal, expression and reference grammars, tracks
//! which tokens would have been accepted at the current position for error
//! messages, and bounds the nesting depth of sub-expressions.

use crate::ast::{Identifier, LiteralType, Node};
use crate::error::{ParseError, SyntaxError};
use crate::rule::EntryRule;
use crate::token::{RdlToken, Token};
use rdl_config::ParserConfig;
use rdl_source::{FileId, Span};
use tracing::trace;

/// A recursive descent parser over a lexed token stream.
///
/// Parsing stops at the first error. Every `parse_*` method either consumes
/// the production it names or returns the error that ends the parse.
pub struct RdlParser<'src> {
    tokens: Vec<Token>,
    pos: usize,
    source: &'src str,
    file: FileId,
    pub(crate) config: &'src ParserConfig,
    depth: usize,
    expected: Vec<&'static str>,
}

impl<'src> RdlParser<'src> {
    /// Creates a parser over `tokens`, which must have been lexed from
    /// `source` and end with [`RdlToken::Eof`].
    pub fn new(
        tokens: Vec<Token>,
        source: &'src str,
        file: FileId,
        config: &'src ParserConfig,
    ) -> Self {
        Self {
            tokens,
            pos: 0,
            source,
            file,
            config,
            depth: 0,
            expected: Vec::new(),
        }
    }

    // ========================================================================
    // Primitive operations
    // ========================================================================

    fn token(&self, idx: usize) -> Option<&Token> {
        self.tokens.get(idx)
    }

    /// Returns the kind of the current token.
    pub(crate) fn current(&self) -> RdlToken {
        self.peek_kind(0)
    }

    /// Returns the span of the current token.
    pub(crate) fn current_span(&self) -> Span {
        match self.token(self.pos).or_else(|| self.tokens.last()) {
            Some(token) => token.span,
            None => Span::point(self.file, self.source.len() as u32),
        }
    }

    /// Returns the source text of the current token.
    pub(crate) fn current_text(&self) -> &'src str {
        let span = self.current_span();
        &self.source[span.start as usize..span.end as usize]
    }

    /// Returns `true` if the current token matches the given kind.
    pub(crate) fn at(&self, kind: RdlToken) -> bool {
        self.current() == kind
    }

    /// Returns `true` if the current token is an identifier spelled `word`.
    pub(crate) fn at_word(&self, word: &str) -> bool {
        self.at(RdlToken::Identifier) && self.current_text() == word
    }

    /// Returns the kind of the token at `pos + offset`.
    pub(crate) fn peek_kind(&self, offset: usize) -> RdlToken {
        self.token(self.pos + offset)
            .map_or(RdlToken::Eof, |token| token.kind)
    }

    /// Returns `true` if the token after the current one matches `kind`.
    pub(crate) fn peek_is(&self, kind: RdlToken) -> bool {
        self.peek_kind(1) == kind
    }

    /// Advances past the current token.
    pub(crate) fn advance(&mut self) {
        if !self.at(RdlToken::Eof) {
            self.pos += 1;
        }
        self.expected.clear();
    }

    /// Returns `true` if the current token matches `kind`; otherwise records
    /// `kind` as an acceptable token for the error message.
    pub(crate) fn check(&mut self, kind: RdlToken) -> bool {
        if self.at(kind) {
            true
        } else {
            self.expecting(kind.describe());
            false
        }
    }

    /// Records `what` as acceptable at the current position.
    pub(crate) fn expecting(&mut self, what: &'static str) {
        if !self.expected.contains(&what) {
            self.expected.push(what);
        }
    }

    /// Consumes the current token if it matches the given kind. Returns `true` if consumed.
    pub(crate) fn eat(&mut self, kind: RdlToken) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the given kind and returns its span, or fails.
    pub(crate) fn expect(&mut self, kind: RdlToken) -> Result<Span, ParseError> {
        let span = self.current_span();
        if self.eat(kind) {
            Ok(span)
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes an identifier token and validates it.
    pub(crate) fn expect_id(&mut self) -> Result<Identifier, ParseError> {
        if self.current().is_word() {
            let id = Identifier::new(self.current_text(), self.current_span())?;
            self.advance();
            Ok(id)
        } else {
            self.expecting("identifier");
            Err(self.unexpected())
        }
    }

    // ========================================================================
    // Errors and nesting
    // ========================================================================

    fn describe_current(&self) -> String {
        match self.current() {
            RdlToken::Eof => RdlToken::Eof.describe().to_string(),
            RdlToken::StringLiteral => "string literal".to_string(),
            _ => format!("`{}`", self.current_text()),
        }
    }

    /// Builds a syntax error at the current token listing every expectation
    /// recorded since the last advance.
    pub(crate) fn unexpected(&self) -> ParseError {
        let found = self.describe_current();
        let message = match self.expected.as_slice() {
            [] => format!("unexpected {found}"),
            [one] => format!("expected {one}, found {found}"),
            many => format!("expected one of {}, found {found}", many.join(", ")),
        };
        ParseError::Syntax(SyntaxError {
            message,
            expected: self.expected.iter().map(|e| e.to_string()).collect(),
            found,
            span: self.current_span(),
        })
    }

    /// Builds a syntax error with a custom message at `span`.
    pub(crate) fn error_at(&self, span: Span, message: String, found: String) -> ParseError {
        ParseError::Syntax(SyntaxError {
            message,
            expected: Vec::new(),
            found,
            span,
        })
    }

    /// Runs `f` one nesting level deeper, failing once the configured depth
    /// is exceeded. The stack is grown before each level, so the limit is
    /// the only bound on nesting.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(self.error_at(
                self.current_span(),
                format!(
                    "expression nesting exceeds the limit of {}",
                    self.config.max_nesting_depth
                ),
                self.describe_current(),
            ));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| f(self));
        self.depth -= 1;
        result
    }

    // ========================================================================
    // Entry rules
    // ========================================================================

    /// Parses the whole token stream as `rule`.
    pub fn parse_rule(&mut self, rule: EntryRule) -> Result<Node, ParseError> {
        trace!(rule = rule.name(), "dispatching entry rule");
        let node = match rule {
            EntryRule::Id => self.expect_id().map(Node::Identifier)?,
            EntryRule::BooleanLiteral => self.parse_keyword_literal(LiteralType::Boolean)?,
            EntryRule::StringLiteral => self.parse_string_literal()?,
            EntryRule::NumberLiteral => self.parse_number_literal()?,
            EntryRule::AccesstypeLiteral => self.parse_keyword_literal(LiteralType::AccessType)?,
            EntryRule::OnreadtypeLiteral => self.parse_keyword_literal(LiteralType::OnReadType)?,
            EntryRule::OnwritetypeLiteral => {
                self.parse_keyword_literal(LiteralType::OnWriteType)?
            }
            EntryRule::AddressingtypeLiteral => {
                self.parse_keyword_literal(LiteralType::AddressingType)?
            }
            EntryRule::PrecedencetypeLiteral => {
                self.parse_keyword_literal(LiteralType::PrecedenceType)?
            }
            EntryRule::EnumeratorLiteral => self.parse_enumerator_literal()?,
            EntryRule::ConstantLiteral => self.parse_constant_literal()?,
            EntryRule::ConstantPrimary => self.parse_primary()?,
            EntryRule::ConstantExpression => self.parse_constant_expression()?,
            EntryRule::ConstantConcatenation => {
                Node::Concatenation(self.parse_concatenation()?)
            }
            EntryRule::ConstantMultipleConcatenation => {
                self.parse_multiple_concatenation()?
            }
            EntryRule::ConstantCast => self.parse_constant_cast()?,
            EntryRule::StructLiteral => self.parse_struct_literal()?,
            EntryRule::ArrayLiteral => self.parse_array_literal()?,
            EntryRule::InstanceRef => Node::InstanceRef(self.parse_instance_ref()?),
            EntryRule::PropertyRef => self.parse_property_ref()?,
        };
        self.expect(RdlToken::Eof)?;
        Ok(node)
    }
}

/// Stack that must remain before descending one more nesting level.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 256 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const STACK_PER_SEGMENT: usize = 2 * 1024 * 1024;

#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_SEGMENT, f)
}

#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
