mod common;

use common::*;
use pretty_assertions::assert_eq;
use rdl_parser::ast::*;
use rdl_parser::{parse, EntryRule, ParseError};
use rdl_source::{FileId, Span};

fn property_ref(path: Vec<(&str, Option<Node>)>, property: Identifier) -> Node {
    Node::PropertyRef(PropertyRef {
        instance_ref: instance_ref(path),
        property,
    })
}

#[test]
fn instance_ref_with_subscript() {
    let node = ok(EntryRule::InstanceRef, "regFA[0].regA.a");
    assert_eq!(
        node,
        Node::InstanceRef(instance_ref(vec![
            ("regFA", Some(num(0))),
            ("regA", None),
            ("a", None),
        ]))
    );
    assert_eq!(node.span(), Span::new(FileId::DETACHED, 0, 5));
}

#[test]
fn subscript_is_an_expression() {
    assert_eq!(
        ok(EntryRule::InstanceRef, "mem[i * 2 + 1]"),
        Node::InstanceRef(instance_ref(vec![(
            "mem",
            Some(binary(
                BinaryOp::Add,
                binary(BinaryOp::Mul, name("i"), num(2)),
                num(1),
            )),
        )]))
    );
}

#[test]
fn property_keyword() {
    let node = ok(EntryRule::PropertyRef, "a->sw");
    let Node::PropertyRef(p) = &node else {
        panic!("expected property ref, got {node:?}");
    };
    assert!(p.property.is_keyword());
    // Compares equal to a plain identifier spelled the same.
    let plain = Identifier {
        text: "sw".to_string(),
        kind: IdentifierKind::Plain,
        span: Span::DUMMY,
    };
    assert_eq!(node, property_ref(vec![("a", None)], plain));
}

#[test]
fn every_property_keyword() {
    for word in ["sw", "hw", "rclr", "rset", "woclr", "woset"] {
        let text = format!("blk.reg1->{word}");
        assert!(parse(EntryRule::PropertyRef, &text).is_ok(), "{text}");
    }
}

#[test]
fn user_defined_property() {
    assert_eq!(
        ok(EntryRule::PropertyRef, "top.r0[3]->my_flag"),
        property_ref(vec![("top", None), ("r0", Some(num(3)))], id("my_flag"))
    );
    assert!(matches!(
        parse(EntryRule::PropertyRef, "a->field"),
        Err(ParseError::InvalidIdentifier { .. })
    ));
}

#[test]
fn malformed_arrows() {
    for text in ["a-b", "a- >b", "a<-b", "a-<b", "a->", "->sw"] {
        let err = parse(EntryRule::PropertyRef, text).unwrap_err();
        assert!(matches!(err, ParseError::Syntax(_)), "{text}: {err:?}");
    }
}

#[test]
fn only_dots_separate_elements() {
    for sep in [",", ":", ";", "/", "\\", " "] {
        let text = format!("regFA[0]{sep}regA{sep}a");
        assert!(parse(EntryRule::InstanceRef, &text).is_err(), "{text}");
    }
}

#[test]
fn keywords_in_paths_are_rejected() {
    for text in ["reg.a", "a.field", "a[0].addrmap"] {
        assert!(matches!(
            parse(EntryRule::InstanceRef, text),
            Err(ParseError::InvalidIdentifier { .. })
        ));
    }
    assert!(parse(EntryRule::InstanceRef, "\\reg.\\field").is_ok());
}

#[test]
fn this_in_expressions() {
    let node = expr("this");
    assert!(matches!(node, Node::Identifier(ref i) if i.is_keyword()));
}
