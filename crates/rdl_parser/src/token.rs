//! Token types for the SystemRDL constant-expression lexer.
//!
//! Words are not split into keyword kinds here: the same spelling can be an
//! enumerated literal (`rw`), a property name (`sw`) or an illegal identifier
//! (`reg`) depending on where it appears, so the grammar inspects the text.

use rdl_source::Span;
use serde::{Deserialize, Serialize};

/// A SystemRDL token kind.
///
/// Literal values are not stored in the token; they are read back from the
/// source text through the token's span.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum RdlToken {
    // === Words and literals ===
    /// `[_a-zA-Z][_a-zA-Z0-9]*`, keywords included.
    Identifier,
    /// `\` followed by a simple identifier.
    EscapedIdentifier,
    /// Simple (`42`, `0x2A`) or sized (`8'h2A`) number, validated by the grammar.
    Number,
    /// Double-quoted string, quotes included.
    StringLiteral,

    // === Punctuation ===
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `:`
    Colon,
    /// `::`
    DoubleColon,
    /// `?`
    Question,
    /// `'` not introducing a sized number
    Tick,
    /// `->`
    Arrow,

    // === Operators ===
    /// `!`
    Bang,
    /// `!=`
    BangEquals,
    /// `==`
    DoubleEquals,
    /// `<`
    LessThan,
    /// `<=`
    LessEquals,
    /// `<<`
    DoubleLess,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEquals,
    /// `>>`
    DoubleGreater,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `**`
    DoubleStar,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `&&`
    DoubleAmpersand,
    /// `~&`
    TildeAmpersand,
    /// `|`
    Pipe,
    /// `||`
    DoublePipe,
    /// `~|`
    TildePipe,
    /// `^`
    Caret,
    /// `~^`
    TildeCaret,
    /// `^~`
    CaretTilde,
    /// `~`
    Tilde,

    /// End of input.
    Eof,
}

impl RdlToken {
    /// Human-readable description used in "expected ..." messages.
    pub fn describe(self) -> &'static str {
        match self {
            RdlToken::Identifier => "identifier",
            RdlToken::EscapedIdentifier => "escaped identifier",
            RdlToken::Number => "number",
            RdlToken::StringLiteral => "string",
            RdlToken::LeftParen => "`(`",
            RdlToken::RightParen => "`)`",
            RdlToken::LeftBracket => "`[`",
            RdlToken::RightBracket => "`]`",
            RdlToken::LeftBrace => "`{`",
            RdlToken::RightBrace => "`}`",
            RdlToken::Comma => "`,`",
            RdlToken::Dot => "`.`",
            RdlToken::Colon => "`:`",
            RdlToken::DoubleColon => "`::`",
            RdlToken::Question => "`?`",
            RdlToken::Tick => "`'`",
            RdlToken::Arrow => "`->`",
            RdlToken::Bang => "`!`",
            RdlToken::BangEquals => "`!=`",
            RdlToken::DoubleEquals => "`==`",
            RdlToken::LessThan => "`<`",
            RdlToken::LessEquals => "`<=`",
            RdlToken::DoubleLess => "`<<`",
            RdlToken::GreaterThan => "`>`",
            RdlToken::GreaterEquals => "`>=`",
            RdlToken::DoubleGreater => "`>>`",
            RdlToken::Plus => "`+`",
            RdlToken::Minus => "`-`",
            RdlToken::Star => "`*`",
            RdlToken::DoubleStar => "`**`",
            RdlToken::Slash => "`/`",
            RdlToken::Percent => "`%`",
            RdlToken::Ampersand => "`&`",
            RdlToken::DoubleAmpersand => "`&&`",
            RdlToken::TildeAmpersand => "`~&`",
            RdlToken::Pipe => "`|`",
            RdlToken::DoublePipe => "`||`",
            RdlToken::TildePipe => "`~|`",
            RdlToken::Caret => "`^`",
            RdlToken::TildeCaret => "`~^`",
            RdlToken::CaretTilde => "`^~`",
            RdlToken::Tilde => "`~`",
            RdlToken::Eof => "end of input",
        }
    }

    /// Returns `true` for plain and escaped identifiers.
    pub fn is_word(self) -> bool {
        matches!(self, RdlToken::Identifier | RdlToken::EscapedIdentifier)
    }
}

/// A token kind paired with the span of its source text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Token {
    /// What kind of token this is.
    pub kind: RdlToken,
    /// Where the token's text sits in the source.
    pub span: Span,
}
