//! Constant-expression grammar.
//!
//! Binary operators are parsed by precedence climbing over the IEEE 1800-2012
//! Table 11-2 levels. Every operator is left-associative, `**` included:
//!
//! | Level | Operators |
//! |-------|-----------|
//! | 11    | `**` |
//! | 10    | `*` `/` `%` |
//! | 9     | `+` `-` |
//! | 8     | `<<` `>>` |
//! | 7     | `<` `<=` `>` `>=` |
//! | 6     | `==` `!=` |
//! | 5     | `&` |
//! | 4     | `^` `~^` `^~` |
//! | 3     | `|` |
//! | 2     | `&&` |
//! | 1     | `||` |
//!
//! A single optional prefix operator binds tighter than any binary operator.
//! The conditional `? :` sits above level 1 and is right-associative.

use crate::ast::*;
use crate::error::ParseError;
use crate::keywords::is_simple_type;
use crate::parser::RdlParser;
use crate::token::RdlToken;
use std::collections::BTreeMap;
use tracing::debug;

impl RdlParser<'_> {
    /// `constant_expression`: a conditional expression one nesting level down.
    pub(crate) fn parse_constant_expression(&mut self) -> Result<Node, ParseError> {
        self.nested(Self::parse_conditional)
    }

    fn parse_conditional(&mut self) -> Result<Node, ParseError> {
        let condition = self.parse_binary(1)?;
        let span = self.current_span();
        if !self.eat(RdlToken::Question) {
            return Ok(condition);
        }
        let if_value = self.parse_constant_expression()?;
        self.expect(RdlToken::Colon)?;
        let else_value = self.parse_constant_expression()?;
        Ok(Node::Ternary(TernaryOperation {
            condition: Box::new(condition),
            if_value: Box::new(if_value),
            else_value: Box::new(else_value),
            span,
        }))
    }

    /// Parses operators binding at least as tightly as `min_level`.
    fn parse_binary(&mut self, min_level: u8) -> Result<Node, ParseError> {
        let mut lhs = self.parse_unary()?;
        loop {
            let op = match self.current_as_binary_op() {
                Some(op) => op,
                None => {
                    self.expecting("binary operator");
                    break;
                }
            };
            let level = op.precedence();
            if level < min_level {
                break;
            }
            let span = self.current_span();
            self.advance();
            let rhs = self.parse_binary(level + 1)?;
            lhs = Node::Binary(BinaryOperation {
                op,
                left: Box::new(lhs),
                right: Box::new(rhs),
                span,
            });
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        let Some(op) = self.current_as_unary_op() else {
            return self.parse_primary();
        };
        let span = self.current_span();
        self.advance();
        let operand = self.parse_primary()?;
        Ok(Node::Unary(UnaryOperation {
            op,
            operand: Box::new(operand),
            span,
        }))
    }

    /// `constant_primary`, including any trailing width casts.
    pub(crate) fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_primary_base()?;
        self.parse_width_casts(base)
    }

    fn parse_primary_base(&mut self) -> Result<Node, ParseError> {
        match self.current() {
            RdlToken::Number => self.parse_number_literal(),
            RdlToken::StringLiteral => self.parse_string_literal(),
            RdlToken::LeftParen => {
                self.advance();
                let inner = self.parse_constant_expression()?;
                self.expect(RdlToken::RightParen)?;
                Ok(inner)
            }
            RdlToken::LeftBrace => self.parse_brace_primary(),
            RdlToken::Tick => self.parse_array_literal(),
            RdlToken::Identifier => self.parse_word_primary(),
            RdlToken::EscapedIdentifier => self.parse_name_primary(),
            _ => {
                self.expecting("expression");
                Err(self.unexpected())
            }
        }
    }

    fn parse_word_primary(&mut self) -> Result<Node, ParseError> {
        let text = self.current_text();
        let span = self.current_span();

        if self.peek_is(RdlToken::DoubleColon) {
            return self.parse_enumerator_literal();
        }
        if self.at_word("this") {
            self.advance();
            return Ok(Node::Identifier(Identifier::keyword(text, span)));
        }
        if is_simple_type(text)
            && self.peek_is(RdlToken::Tick)
            && self.peek_kind(2) == RdlToken::LeftParen
        {
            self.advance();
            let casting_type = Node::Identifier(Identifier::keyword(text, span));
            return self.parse_cast_suffix(casting_type);
        }
        if let Some(value) = LiteralValue::from_keyword(text) {
            self.advance();
            return Ok(Node::Literal(Literal::new(value, span)));
        }
        self.parse_name_primary()
    }

    /// Primaries that start with a user name: enumerator, struct literal,
    /// or instance/property reference.
    fn parse_name_primary(&mut self) -> Result<Node, ParseError> {
        if self.peek_is(RdlToken::DoubleColon) {
            self.parse_enumerator_literal()
        } else if self.peek_is(RdlToken::Tick) && self.peek_kind(2) == RdlToken::LeftBrace {
            self.parse_struct_literal()
        } else {
            self.parse_reference()
        }
    }

    // ========================================================================
    // Casts
    // ========================================================================

    fn parse_width_casts(&mut self, mut node: Node) -> Result<Node, ParseError> {
        while self.at(RdlToken::Tick) && self.peek_is(RdlToken::LeftParen) {
            node = self.parse_cast_suffix(node)?;
        }
        Ok(node)
    }

    fn parse_cast_suffix(&mut self, casting_type: Node) -> Result<Node, ParseError> {
        self.expect(RdlToken::Tick)?;
        self.expect(RdlToken::LeftParen)?;
        let expr = self.parse_constant_expression()?;
        self.expect(RdlToken::RightParen)?;
        Ok(Node::Cast(Cast {
            casting_type: Box::new(casting_type),
            expr: Box::new(expr),
        }))
    }

    /// `constant_cast`: a type cast or at least one width cast.
    pub(crate) fn parse_constant_cast(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_primary_base()?;
        let cast = if matches!(base, Node::Cast(_)) {
            base
        } else {
            self.parse_cast_suffix(base)?
        };
        self.parse_width_casts(cast)
    }

    // ========================================================================
    // Concatenations and aggregate literals
    // ========================================================================

    fn parse_brace_primary(&mut self) -> Result<Node, ParseError> {
        let span = self.expect(RdlToken::LeftBrace)?;
        let first = self.parse_constant_expression()?;
        if self.check(RdlToken::LeftBrace) {
            let concatenation = self.parse_concatenation()?;
            self.expect(RdlToken::RightBrace)?;
            return Ok(Node::MultipleConcatenation(MultipleConcatenation {
                multiplier: Box::new(first),
                concatenation,
                span,
            }));
        }
        let elements = self.parse_element_tail(first)?;
        Ok(Node::Concatenation(Concatenation { elements, span }))
    }

    /// Parses `, e2, ... }` after a first element.
    fn parse_element_tail(&mut self, first: Node) -> Result<Vec<Node>, ParseError> {
        let mut elements = vec![first];
        while self.eat(RdlToken::Comma) {
            elements.push(self.parse_constant_expression()?);
        }
        self.expect(RdlToken::RightBrace)?;
        Ok(elements)
    }

    /// `constant_concatenation`: `{e1, e2, ...}`.
    pub(crate) fn parse_concatenation(&mut self) -> Result<Concatenation, ParseError> {
        let span = self.expect(RdlToken::LeftBrace)?;
        let first = self.parse_constant_expression()?;
        let elements = self.parse_element_tail(first)?;
        Ok(Concatenation { elements, span })
    }

    /// `constant_multiple_concatenation`: `{n{e1, e2, ...}}`.
    pub(crate) fn parse_multiple_concatenation(&mut self) -> Result<Node, ParseError> {
        let span = self.expect(RdlToken::LeftBrace)?;
        let multiplier = self.parse_constant_expression()?;
        let concatenation = self.parse_concatenation()?;
        self.expect(RdlToken::RightBrace)?;
        Ok(Node::MultipleConcatenation(MultipleConcatenation {
            multiplier: Box::new(multiplier),
            concatenation,
            span,
        }))
    }

    /// `struct_literal`: `Type'{name: value, ...}`; the body may be empty.
    pub(crate) fn parse_struct_literal(&mut self) -> Result<Node, ParseError> {
        let type_name = self.expect_id()?;
        self.expect(RdlToken::Tick)?;
        self.expect(RdlToken::LeftBrace)?;

        let mut members = BTreeMap::new();
        let mut member_names = Vec::new();
        if !self.eat(RdlToken::RightBrace) {
            loop {
                let name = self.expect_id()?;
                self.expect(RdlToken::Colon)?;
                let value = self.parse_constant_expression()?;
                if members.contains_key(&name.text) {
                    if self.config.reject_duplicate_struct_members {
                        return Err(self.error_at(
                            name.span,
                            format!("duplicate struct member `{}`", name.text),
                            format!("`{}`", name.text),
                        ));
                    }
                    debug!(member = %name.text, "duplicate struct member, keeping the last value");
                }
                members.insert(name.text.clone(), value);
                member_names.push(name);
                if !self.eat(RdlToken::Comma) {
                    break;
                }
            }
            self.expect(RdlToken::RightBrace)?;
        }

        Ok(Node::Struct(StructLiteral {
            type_name,
            members,
            member_names,
        }))
    }

    /// `array_literal`: `'{e1, e2, ...}` with at least one element.
    pub(crate) fn parse_array_literal(&mut self) -> Result<Node, ParseError> {
        let span = self.expect(RdlToken::Tick)?;
        self.expect(RdlToken::LeftBrace)?;
        let first = self.parse_constant_expression()?;
        let elements = self.parse_element_tail(first)?;
        Ok(Node::Array(ArrayLiteral { elements, span }))
    }

    // ========================================================================
    // Operator tokens
    // ========================================================================

    /// Maps the current token to a binary operator, if applicable.
    fn current_as_binary_op(&self) -> Option<BinaryOp> {
        match self.current() {
            RdlToken::DoubleStar => Some(BinaryOp::Pow),
            RdlToken::Star => Some(BinaryOp::Mul),
            RdlToken::Slash => Some(BinaryOp::Div),
            RdlToken::Percent => Some(BinaryOp::Mod),
            RdlToken::Plus => Some(BinaryOp::Add),
            RdlToken::Minus => Some(BinaryOp::Sub),
            RdlToken::DoubleLess => Some(BinaryOp::Shl),
            RdlToken::DoubleGreater => Some(BinaryOp::Shr),
            RdlToken::LessThan => Some(BinaryOp::Lt),
            RdlToken::LessEquals => Some(BinaryOp::Le),
            RdlToken::GreaterThan => Some(BinaryOp::Gt),
            RdlToken::GreaterEquals => Some(BinaryOp::Ge),
            RdlToken::DoubleEquals => Some(BinaryOp::Eq),
            RdlToken::BangEquals => Some(BinaryOp::Neq),
            RdlToken::Ampersand => Some(BinaryOp::BitAnd),
            RdlToken::Caret => Some(BinaryOp::BitXor),
            RdlToken::TildeCaret => Some(BinaryOp::BitXnor),
            RdlToken::CaretTilde => Some(BinaryOp::BitXnorAlt),
            RdlToken::Pipe => Some(BinaryOp::BitOr),
            RdlToken::DoubleAmpersand => Some(BinaryOp::LogAnd),
            RdlToken::DoublePipe => Some(BinaryOp::LogOr),
            _ => None,
        }
    }

    /// Maps the current token to a unary operator, if applicable.
    fn current_as_unary_op(&self) -> Option<UnaryOp> {
        match self.current() {
            RdlToken::Bang => Some(UnaryOp::LogNot),
            RdlToken::Plus => Some(UnaryOp::Plus),
            RdlToken::Minus => Some(UnaryOp::Minus),
            RdlToken::Ampersand => Some(UnaryOp::RedAnd),
            RdlToken::TildeAmpersand => Some(UnaryOp::RedNand),
            RdlToken::Pipe => Some(UnaryOp::RedOr),
            RdlToken::TildePipe => Some(UnaryOp::RedNor),
            RdlToken::TildeCaret => Some(UnaryOp::RedXnor),
            RdlToken::CaretTilde => Some(UnaryOp::RedXnorAlt),
            RdlToken::Tilde => Some(UnaryOp::BitNot),
            RdlToken::Caret => Some(UnaryOp::RedXor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer;
    use rdl_config::ParserConfig;
    use rdl_source::{FileId, Span};

    fn parse_expr_str(source: &str) -> Node {
        let config = ParserConfig::default();
        let tokens = lexer::lex(source, FileId::DETACHED).unwrap();
        let mut parser = RdlParser::new(tokens, source, FileId::DETACHED, &config);
        parser
            .parse_rule(crate::EntryRule::ConstantExpression)
            .unwrap_or_else(|e| panic!("failed to parse {source:?}: {e}"))
    }

    fn binary(node: &Node) -> &BinaryOperation {
        match node {
            Node::Binary(b) => b,
            other => panic!("expected binary, got {other:?}"),
        }
    }

    #[test]
    fn precedence_add_mul() {
        let expr = parse_expr_str("1 + 2 * 3");
        let add = binary(&expr);
        assert_eq!(add.op, BinaryOp::Add);
        assert_eq!(binary(&add.right).op, BinaryOp::Mul);
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse_expr_str("(1 + 2) * 3");
        let mul = binary(&expr);
        assert_eq!(mul.op, BinaryOp::Mul);
        assert_eq!(binary(&mul.left).op, BinaryOp::Add);
    }

    #[test]
    fn power_is_left_associative() {
        let expr = parse_expr_str("2 ** 3 ** 2");
        let outer = binary(&expr);
        assert_eq!(outer.op, BinaryOp::Pow);
        assert_eq!(binary(&outer.left).op, BinaryOp::Pow);
        assert!(matches!(*outer.right, Node::Number(_)));
    }

    #[test]
    fn every_level_nests_under_the_looser_one() {
        let expr = parse_expr_str("a || b && c | d ^ e & f == g < h << i + j * k ** l");
        let mut node = &expr;
        let mut levels = Vec::new();
        while let Node::Binary(b) = node {
            levels.push(b.op.precedence());
            node = &b.right;
        }
        assert_eq!(levels, (1..=11).collect::<Vec<u8>>());
    }

    #[test]
    fn operator_span_is_recorded() {
        let expr = parse_expr_str("a  <= b");
        assert_eq!(expr.span(), Span::new(FileId::DETACHED, 3, 5));
    }

    #[test]
    fn single_unary_operator() {
        let expr = parse_expr_str("~&a");
        match expr {
            Node::Unary(u) => {
                assert_eq!(u.op, UnaryOp::RedNand);
                assert!(matches!(*u.operand, Node::InstanceRef(_)));
            }
            other => panic!("expected unary, got {other:?}"),
        }
    }

    #[test]
    fn unary_binds_tighter_than_binary() {
        let expr = parse_expr_str("-a * b");
        let mul = binary(&expr);
        assert!(matches!(*mul.left, Node::Unary(_)));
    }

    #[test]
    fn ternary_is_right_associative() {
        let expr = parse_expr_str("a ? b : c ? d : e");
        match expr {
            Node::Ternary(t) => {
                assert_eq!(t.operator(), "?");
                assert!(matches!(*t.else_value, Node::Ternary(_)));
                assert!(matches!(*t.condition, Node::InstanceRef(_)));
            }
            other => panic!("expected ternary, got {other:?}"),
        }
    }

    #[test]
    fn type_cast_uses_keyword_identifier() {
        let expr = parse_expr_str("longint'(x)");
        match expr {
            Node::Cast(cast) => match *cast.casting_type {
                Node::Identifier(ref id) => {
                    assert!(id.is_keyword());
                    assert_eq!(id.text, "longint");
                }
                ref other => panic!("expected identifier, got {other:?}"),
            },
            other => panic!("expected cast, got {other:?}"),
        }
    }

    #[test]
    fn width_casts_fold_left() {
        let expr = parse_expr_str("8'(a)'(b)");
        match expr {
            Node::Cast(outer) => {
                assert!(matches!(*outer.casting_type, Node::Cast(_)));
                assert!(matches!(*outer.expr, Node::InstanceRef(_)));
            }
            other => panic!("expected cast, got {other:?}"),
        }
    }

    #[test]
    fn struct_duplicates_collapse() {
        let expr = parse_expr_str("pair'{a: 1, a: 2}");
        match expr {
            Node::Struct(s) => {
                assert_eq!(s.members.len(), 1);
                assert_eq!(s.member_names.len(), 2);
                assert_eq!(
                    s.member("a"),
                    Some(&Node::Number(NumberLiteral::new(2u32, None, Span::DUMMY)))
                );
            }
            other => panic!("expected struct, got {other:?}"),
        }
    }

    #[test]
    fn struct_duplicates_rejected_when_configured() {
        let config = ParserConfig {
            reject_duplicate_struct_members: true,
            ..ParserConfig::default()
        };
        let source = "pair'{a: 1, a: 2}";
        let tokens = lexer::lex(source, FileId::DETACHED).unwrap();
        let mut parser = RdlParser::new(tokens, source, FileId::DETACHED, &config);
        let err = parser
            .parse_rule(crate::EntryRule::ConstantExpression)
            .unwrap_err();
        assert_eq!(err.to_string(), "duplicate struct member `a`");
        assert_eq!(err.span(), Span::new(FileId::DETACHED, 12, 13));
    }

    #[test]
    fn missing_operand_reports_expression() {
        let config = ParserConfig::default();
        let source = "1 +";
        let tokens = lexer::lex(source, FileId::DETACHED).unwrap();
        let mut parser = RdlParser::new(tokens, source, FileId::DETACHED, &config);
        let err = parser
            .parse_rule(crate::EntryRule::ConstantExpression)
            .unwrap_err();
        assert_eq!(err.to_string(), "expected expression, found end of input");
    }
}
