//! Node builders for integration tests.
//!
//! Every builder uses [`Span::DUMMY`]; parsed trees compare equal because
//! node equality ignores spans.

#![allow(dead_code)]

use rdl_parser::ast::*;
use rdl_parser::{parse, EntryRule, ParseError};
use rdl_source::Span;

pub fn ok(rule: EntryRule, text: &str) -> Node {
    parse(rule, text).unwrap_or_else(|e| panic!("{rule} failed on {text:?}: {e}"))
}

pub fn expr(text: &str) -> Node {
    ok(EntryRule::ConstantExpression, text)
}

/// Asserts that `text` fails with a syntax error and returns its message.
pub fn syntax_error(rule: EntryRule, text: &str) -> String {
    match parse(rule, text) {
        Err(ParseError::Syntax(err)) => err.message,
        other => panic!("{rule} on {text:?}: expected syntax error, got {other:?}"),
    }
}

pub fn id(text: &str) -> Identifier {
    Identifier::new(text, Span::DUMMY).unwrap()
}

pub fn num(value: u64) -> Node {
    Node::Number(NumberLiteral::new(value, None, Span::DUMMY))
}

pub fn sized(value: u64, width: u32) -> Node {
    Node::Number(NumberLiteral::new(value, Some(width), Span::DUMMY))
}

pub fn string(value: &str) -> Node {
    Node::Literal(Literal::new(LiteralValue::String(value.to_string()), Span::DUMMY))
}

pub fn literal(value: LiteralValue) -> Node {
    Node::Literal(Literal::new(value, Span::DUMMY))
}

pub fn unary(op: UnaryOp, operand: Node) -> Node {
    Node::Unary(UnaryOperation {
        op,
        operand: Box::new(operand),
        span: Span::DUMMY,
    })
}

pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
    Node::Binary(BinaryOperation {
        op,
        left: Box::new(left),
        right: Box::new(right),
        span: Span::DUMMY,
    })
}

pub fn ternary(condition: Node, if_value: Node, else_value: Node) -> Node {
    Node::Ternary(TernaryOperation {
        condition: Box::new(condition),
        if_value: Box::new(if_value),
        else_value: Box::new(else_value),
        span: Span::DUMMY,
    })
}

pub fn concat(elements: Vec<Node>) -> Concatenation {
    Concatenation {
        elements,
        span: Span::DUMMY,
    }
}

pub fn instance_ref(path: Vec<(&str, Option<Node>)>) -> InstanceRef {
    InstanceRef {
        elements: path
            .into_iter()
            .map(|(name, index)| InstanceRefElement {
                id: id(name),
                array: index.map(Box::new),
            })
            .collect(),
        span: Span::DUMMY,
    }
}

/// A single-name reference, as produced for a bare identifier in an
/// expression.
pub fn name(text: &str) -> Node {
    Node::InstanceRef(instance_ref(vec![(text, None)]))
}
