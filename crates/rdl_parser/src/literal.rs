//! Literal productions: booleans, strings, keyword literals, numbers and
//! enumerator literals.
//!
//! Number tokens arrive from the lexer unvalidated; [`parse_number_text`]
//! applies the digit, underscore and leading-zero rules and computes the
//! arbitrary-precision value.

use crate::ast::{
    EnumeratorLiteral, Identifier, Literal, LiteralType, LiteralValue, Node, NumberLiteral,
};
use crate::error::ParseError;
use crate::parser::RdlParser;
use crate::token::RdlToken;
use num_bigint::BigUint;
use num_traits::Num;

impl RdlParser<'_> {
    /// `constant_literal`: number, string, enumerator, `this`, or a boolean /
    /// enumerated-keyword literal.
    pub(crate) fn parse_constant_literal(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            RdlToken::Number => self.parse_number_literal(),
            RdlToken::StringLiteral => self.parse_string_literal(),
            kind if kind.is_word() && self.peek_is(RdlToken::DoubleColon) => {
                self.parse_enumerator_literal()
            }
            RdlToken::Identifier if self.current_text() == "this" => {
                let id = Identifier::keyword("this", self.current_span());
                self.advance();
                Ok(Node::Identifier(id))
            }
            RdlToken::Identifier => match LiteralValue::from_keyword(self.current_text()) {
                Some(value) => {
                    let span = self.current_span();
                    self.advance();
                    Ok(Node::Literal(Literal::new(value, span)))
                }
                None => {
                    self.expecting("literal");
                    Err(self.unexpected())
                }
            },
            _ => {
                self.expecting("literal");
                Err(self.unexpected())
            }
        }
    }

    /// `boolean_literal` and the five enumerated-keyword literal rules.
    pub(crate) fn parse_keyword_literal(&mut self, ty: LiteralType) -> Result<Node, ParseError> {
        if self.at(RdlToken::Identifier) {
            if let Some(value) = LiteralValue::from_keyword(self.current_text()) {
                if value.literal_type() == ty {
                    let span = self.current_span();
                    self.advance();
                    return Ok(Node::Literal(Literal::new(value, span)));
                }
            }
        }
        self.expecting(describe_literal(ty));
        Err(self.unexpected())
    }

    /// `string_literal`: `"..."` with `\"` unescaped.
    pub(crate) fn parse_string_literal(&mut self) -> Result<Node, ParseError> {
        let span = self.current_span();
        if !self.check(RdlToken::StringLiteral) {
            return Err(self.unexpected());
        }
        let value = unescape_string(self.current_text());
        self.advance();
        Ok(Node::Literal(Literal::new(LiteralValue::String(value), span)))
    }

    /// `number_literal`: simple decimal or hexadecimal, or sized
    /// `<width>'<radix><digits>`.
    pub(crate) fn parse_number_literal(&mut self) -> Result<Node, ParseError> {
        let span = self.current_span();
        if !self.check(RdlToken::Number) {
            return Err(self.unexpected());
        }
        let text = self.current_text();
        let (value, width) = parse_number_text(text).map_err(|reason| {
            self.error_at(
                span,
                format!("invalid number literal `{text}`: {reason}"),
                format!("`{text}`"),
            )
        })?;
        self.advance();
        Ok(Node::Number(NumberLiteral::new(value, width, span)))
    }

    /// `enumerator_literal`: `Type::Mnemonic`, both names validated.
    pub(crate) fn parse_enumerator_literal(&mut self) -> Result<Node, ParseError> {
        let type_name = self.expect_id()?;
        self.expect(RdlToken::DoubleColon)?;
        let mnemonic_name = self.expect_id()?;
        Ok(Node::Enumerator(EnumeratorLiteral {
            type_name,
            mnemonic_name,
        }))
    }
}

fn describe_literal(ty: LiteralType) -> &'static str {
    match ty {
        LiteralType::Boolean => "boolean literal",
        LiteralType::String => "string literal",
        LiteralType::AccessType => "accesstype literal",
        LiteralType::OnReadType => "onreadtype literal",
        LiteralType::OnWriteType => "onwritetype literal",
        LiteralType::AddressingType => "addressingtype literal",
        LiteralType::PrecedenceType => "precedencetype literal",
        LiteralType::Enumerator => "enumerator literal",
        LiteralType::Number => "number",
    }
}

/// Strips the quotes from a string token and unescapes `\"`. Every other
/// byte, backslashes included, is kept as written.
pub fn unescape_string(token_text: &str) -> String {
    let inner = token_text
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(token_text);
    inner.replace("\\\"", "\"")
}

/// Validates a number token and returns its value and optional width.
///
/// The error is a short reason suitable for appending to a message.
pub fn parse_number_text(text: &str) -> Result<(BigUint, Option<u32>), String> {
    if let Some((width, rest)) = text.split_once('\'') {
        let width = parse_width(width)?;
        let mut chars = rest.chars();
        let radix = match chars.next() {
            Some('b' | 'B') => 2,
            Some('d' | 'D') => 10,
            Some('h' | 'H') => 16,
            _ => return Err("expected radix `b`, `d` or `h` after `'`".to_string()),
        };
        let value = parse_digits(chars.as_str(), radix)?;
        Ok((value, Some(width)))
    } else if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Ok((parse_digits(hex, 16)?, None))
    } else {
        Ok((parse_digits(text, 10)?, None))
    }
}

fn parse_width(width: &str) -> Result<u32, String> {
    let well_formed = width.starts_with(|c: char| matches!(c, '1'..='9'))
        && width.chars().all(|c| c.is_ascii_digit());
    if !well_formed {
        return Err(
            "width must be a decimal number without leading zeros or underscores".to_string(),
        );
    }
    width
        .parse::<u32>()
        .map_err(|_| format!("width {width} does not fit in 32 bits"))
}

fn radix_name(radix: u32) -> &'static str {
    match radix {
        2 => "binary",
        16 => "hexadecimal",
        _ => "decimal",
    }
}

fn parse_digits(digits: &str, radix: u32) -> Result<BigUint, String> {
    if digits.is_empty() {
        return Err(format!("missing {} digits", radix_name(radix)));
    }
    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err("underscores are only allowed between digits".to_string());
    }
    if let Some(bad) = digits.chars().find(|&c| c != '_' && !c.is_digit(radix)) {
        return Err(format!("`{bad}` is not a {} digit", radix_name(radix)));
    }
    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if radix == 10 && cleaned.len() > 1 && digits.starts_with('0') {
        return Err("decimal numbers other than 0 cannot start with 0".to_string());
    }
    BigUint::from_str_radix(&cleaned, radix).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::ToPrimitive;

    fn value(text: &str) -> (u64, Option<u32>) {
        let (value, width) = parse_number_text(text).unwrap();
        (value.to_u64().unwrap(), width)
    }

    #[test]
    fn simple_numbers() {
        assert_eq!(value("0"), (0, None));
        assert_eq!(value("7"), (7, None));
        assert_eq!(value("1_234_567"), (1_234_567, None));
        assert_eq!(value("0x45"), (0x45, None));
        assert_eq!(value("0XdeAD_beaf"), (0xdead_beaf, None));
    }

    #[test]
    fn sized_numbers() {
        assert_eq!(value("4'b1010"), (10, Some(4)));
        assert_eq!(value("4'B1_0_1_0"), (10, Some(4)));
        assert_eq!(value("7'd123"), (123, Some(7)));
        assert_eq!(value("4'd0"), (0, Some(4)));
        assert_eq!(value("16'hABCD"), (0xabcd, Some(16)));
        assert_eq!(value("32'HDEADBEAF"), (0xdead_beaf, Some(32)));
    }

    #[test]
    fn values_beyond_u64() {
        let (value, width) = parse_number_text("128'hffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff").unwrap();
        assert_eq!(width, Some(128));
        assert_eq!(value, (BigUint::from(1u8) << 128usize) - 1u8);
    }

    #[test]
    fn underscore_rules() {
        for text in ["0x_abcd", "3'b_101", "10'd_123", "32'h_deadbeaf", "1__0", "12_", "0x1_"] {
            let err = parse_number_text(text).unwrap_err();
            assert!(err.contains("underscores"), "{text}: {err}");
        }
        for text in ["1_0'b0000000000", "1_0'd123", "3_2'hdeadbeaf"] {
            let err = parse_number_text(text).unwrap_err();
            assert!(err.starts_with("width"), "{text}: {err}");
        }
    }

    #[test]
    fn leading_zero_rules() {
        assert!(parse_number_text("010").is_err());
        assert!(parse_number_text("10'd0123").is_err());
        assert!(parse_number_text("0_1").is_err());
        assert!(parse_number_text("04'b1").is_err());
        assert!(parse_number_text("4'b0001").is_ok());
        assert!(parse_number_text("8'h00").is_ok());
    }

    #[test]
    fn bad_digits_and_radixes() {
        assert_eq!(
            parse_number_text("4'b1012").unwrap_err(),
            "`2` is not a binary digit"
        );
        assert_eq!(
            parse_number_text("12ab").unwrap_err(),
            "`a` is not a decimal digit"
        );
        assert_eq!(parse_number_text("4'h").unwrap_err(), "missing hexadecimal digits");
        assert_eq!(parse_number_text("0x").unwrap_err(), "missing hexadecimal digits");
    }

    #[test]
    fn oversized_width() {
        let err = parse_number_text("99999999999'd1").unwrap_err();
        assert_eq!(err, "width 99999999999 does not fit in 32 bits");
    }

    #[test]
    fn unescape() {
        assert_eq!(unescape_string(r#""a\"b""#), "a\"b");
        assert_eq!(unescape_string(r#""a\nb""#), "a\\nb");
        assert_eq!(unescape_string("\"\""), "");
    }
}
