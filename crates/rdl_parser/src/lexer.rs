//! Lexical analyzer for SystemRDL constant expressions.
//!
//! Produces [`Token`]s with max-munch operator recognition. Whitespace and
//! `//`, `/* */` comments are skipped. Number tokens are cut generously
//! (`[0-9][0-9a-zA-Z_]*`, optionally followed by `'` + radix + digits) so that
//! malformed literals such as `010` or `3'b_1` reach the grammar as one token
//! and are rejected there with a precise message.

use crate::error::{ParseError, SyntaxError};
use crate::token::{RdlToken, Token};
use rdl_source::{FileId, Span};
use tracing::trace;

/// Lexes `source` into tokens ending with [`RdlToken::Eof`].
///
/// Fails on the first character that cannot start a token, on an unterminated
/// string or block comment, on a `\` not followed by an identifier, and on
/// text too long for 32-bit span offsets.
pub fn lex(source: &str, file: FileId) -> Result<Vec<Token>, ParseError> {
    check_addressable(source.len(), file)?;
    let mut lexer = Lexer {
        source,
        bytes: source.as_bytes(),
        pos: 0,
        file,
    };
    let tokens = lexer.lex_all()?;
    trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}

/// Spans store byte offsets as `u32`; longer text cannot be addressed.
fn check_addressable(len: usize, file: FileId) -> Result<(), ParseError> {
    if u32::try_from(len).is_ok() {
        return Ok(());
    }
    Err(ParseError::Syntax(SyntaxError {
        message: format!("source text is {len} bytes, more than the 4 GiB a span can address"),
        expected: Vec::new(),
        found: "end of input".to_string(),
        span: Span::point(file, u32::MAX),
    }))
}

struct Lexer<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    file: FileId,
}

impl Lexer<'_> {
    fn lex_all(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments()?;
            if self.pos >= self.bytes.len() {
                tokens.push(Token {
                    kind: RdlToken::Eof,
                    span: Span::point(self.file, self.pos as u32),
                });
                return Ok(tokens);
            }
            tokens.push(self.next_token()?);
        }
    }

    fn peek(&self) -> u8 {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(self.file, start as u32, self.pos as u32)
    }

    fn error(&self, message: impl Into<String>, found: String, span: Span) -> ParseError {
        ParseError::Syntax(SyntaxError {
            message: message.into(),
            expected: Vec::new(),
            found,
            span,
        })
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_ascii_whitespace() && self.pos < self.bytes.len() {
                self.pos += 1;
            }
            if self.peek() == b'/' && self.peek_at(1) == b'/' {
                while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
                    self.pos += 1;
                }
                continue;
            }
            if self.peek() == b'/' && self.peek_at(1) == b'*' {
                let start = self.pos;
                self.pos += 2;
                loop {
                    if self.pos >= self.bytes.len() {
                        return Err(self.error(
                            "unterminated block comment",
                            "end of input".to_string(),
                            self.span_from(start),
                        ));
                    }
                    if self.bytes[self.pos] == b'*' && self.peek_at(1) == b'/' {
                        self.pos += 2;
                        break;
                    }
                    self.pos += 1;
                }
                continue;
            }
            return Ok(());
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        let b = self.peek();

        let kind = if is_ident_start(b) {
            self.eat_word();
            RdlToken::Identifier
        } else if b == b'\\' {
            self.pos += 1;
            if !is_ident_start(self.peek()) {
                return Err(self.error(
                    "expected identifier after `\\`",
                    self.describe_char_at(self.pos),
                    Span::point(self.file, self.pos as u32),
                ));
            }
            self.eat_word();
            RdlToken::EscapedIdentifier
        } else if b.is_ascii_digit() {
            self.lex_number();
            RdlToken::Number
        } else if b == b'"' {
            self.lex_string(start)?
        } else {
            self.lex_operator(start)?
        };

        Ok(Token {
            kind,
            span: self.span_from(start),
        })
    }

    fn eat_word(&mut self) {
        while is_ident_char(self.peek()) && self.pos < self.bytes.len() {
            self.pos += 1;
        }
    }

    fn lex_number(&mut self) {
        self.eat_word();
        if self.peek() == b'\'' && matches!(self.peek_at(1), b'b' | b'B' | b'd' | b'D' | b'h' | b'H')
        {
            self.pos += 2;
            self.eat_word();
        }
    }

    fn lex_string(&mut self, start: usize) -> Result<RdlToken, ParseError> {
        self.pos += 1;
        loop {
            if self.pos >= self.bytes.len() {
                return Err(self.error(
                    "unterminated string literal",
                    "end of input".to_string(),
                    self.span_from(start),
                ));
            }
            match self.bytes[self.pos] {
                b'\\' if self.peek_at(1) == b'"' => self.pos += 2,
                b'"' => {
                    self.pos += 1;
                    return Ok(RdlToken::StringLiteral);
                }
                _ => self.pos += 1,
            }
        }
    }

    fn lex_operator(&mut self, start: usize) -> Result<RdlToken, ParseError> {
        let (kind, len) = match (self.peek(), self.peek_at(1)) {
            (b'-', b'>') => (RdlToken::Arrow, 2),
            (b':', b':') => (RdlToken::DoubleColon, 2),
            (b'!', b'=') => (RdlToken::BangEquals, 2),
            (b'=', b'=') => (RdlToken::DoubleEquals, 2),
            (b'<', b'=') => (RdlToken::LessEquals, 2),
            (b'<', b'<') => (RdlToken::DoubleLess, 2),
            (b'>', b'=') => (RdlToken::GreaterEquals, 2),
            (b'>', b'>') => (RdlToken::DoubleGreater, 2),
            (b'*', b'*') => (RdlToken::DoubleStar, 2),
            (b'&', b'&') => (RdlToken::DoubleAmpersand, 2),
            (b'|', b'|') => (RdlToken::DoublePipe, 2),
            (b'~', b'&') => (RdlToken::TildeAmpersand, 2),
            (b'~', b'|') => (RdlToken::TildePipe, 2),
            (b'~', b'^') => (RdlToken::TildeCaret, 2),
            (b'^', b'~') => (RdlToken::CaretTilde, 2),
            (b'(', _) => (RdlToken::LeftParen, 1),
            (b')', _) => (RdlToken::RightParen, 1),
            (b'[', _) => (RdlToken::LeftBracket, 1),
            (b']', _) => (RdlToken::RightBracket, 1),
            (b'{', _) => (RdlToken::LeftBrace, 1),
            (b'}', _) => (RdlToken::RightBrace, 1),
            (b',', _) => (RdlToken::Comma, 1),
            (b'.', _) => (RdlToken::Dot, 1),
            (b':', _) => (RdlToken::Colon, 1),
            (b'?', _) => (RdlToken::Question, 1),
            (b'\'', _) => (RdlToken::Tick, 1),
            (b'!', _) => (RdlToken::Bang, 1),
            (b'<', _) => (RdlToken::LessThan, 1),
            (b'>', _) => (RdlToken::GreaterThan, 1),
            (b'+', _) => (RdlToken::Plus, 1),
            (b'-', _) => (RdlToken::Minus, 1),
            (b'*', _) => (RdlToken::Star, 1),
            (b'/', _) => (RdlToken::Slash, 1),
            (b'%', _) => (RdlToken::Percent, 1),
            (b'&', _) => (RdlToken::Ampersand, 1),
            (b'|', _) => (RdlToken::Pipe, 1),
            (b'^', _) => (RdlToken::Caret, 1),
            (b'~', _) => (RdlToken::Tilde, 1),
            _ => {
                let found = self.describe_char_at(start);
                let width = found_len(self.source, start);
                return Err(self.error(
                    format!("unexpected character {found}"),
                    found,
                    Span::new(self.file, start as u32, (start + width) as u32),
                ));
            }
        };
        self.pos += len;
        Ok(kind)
    }

    fn describe_char_at(&self, offset: usize) -> String {
        match self.source.get(offset..).and_then(|rest| rest.chars().next()) {
            Some(ch) if ch.is_whitespace() => format!("{ch:?}"),
            Some(ch) => format!("`{ch}`"),
            None => "end of input".to_string(),
        }
    }
}

fn found_len(source: &str, offset: usize) -> usize {
    source
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(1, char::len_utf8)
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
