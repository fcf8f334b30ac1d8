mod common;

use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rdl_parser::ast::IdentifierKind;
use rdl_parser::keywords::{ReservedClass, KEYWORDS, RESERVED_WORDS};
use rdl_parser::{parse, EntryRule, Node, ParseError};

fn parse_id(text: &str) -> Result<Node, ParseError> {
    parse(EntryRule::Id, text)
}

#[test]
fn every_keyword_is_rejected() {
    for &word in KEYWORDS {
        match parse_id(word) {
            Err(ParseError::InvalidIdentifier { text, class, .. }) => {
                assert_eq!(text, word);
                assert_eq!(class, ReservedClass::Keyword);
            }
            other => panic!("{word}: {other:?}"),
        }
    }
}

#[test]
fn every_reserved_word_is_rejected() {
    for &word in RESERVED_WORDS {
        let err = parse_id(word).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("reserved words cannot be used for identifiers: {word}")
        );
    }
}

#[test]
fn keyword_check_is_case_sensitive() {
    assert_eq!(ok(EntryRule::Id, "Reg"), Node::Identifier(id("Reg")));
    assert_eq!(ok(EntryRule::Id, "TRUE"), Node::Identifier(id("TRUE")));
}

#[test]
fn escaped_keyword_keeps_backslash() {
    let Node::Identifier(ident) = ok(EntryRule::Id, "\\addrmap") else {
        panic!("expected identifier");
    };
    assert_eq!(ident.text, "\\addrmap");
    assert_eq!(ident.name(), "addrmap");
    assert_eq!(ident.kind, IdentifierKind::Escaped);
}

#[test]
fn malformed_identifiers_are_syntax_errors() {
    assert_eq!(
        syntax_error(EntryRule::Id, "1abc"),
        "expected identifier, found `1abc`"
    );
    assert_eq!(
        syntax_error(EntryRule::Id, "a b"),
        "expected end of input, found `b`"
    );
    assert_eq!(syntax_error(EntryRule::Id, ""), "expected identifier, found end of input");
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(
        ok(EntryRule::Id, "  /* lead */ my_reg // trailing"),
        Node::Identifier(id("my_reg"))
    );
}

fn reserved_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(KEYWORDS.iter().chain(RESERVED_WORDS).copied().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn keyword_with_trailing_underscore_is_legal(word in reserved_word()) {
        let text = format!("{word}_");
        prop_assert_eq!(parse_id(&text).unwrap(), Node::Identifier(id(&text)));
    }

    #[test]
    fn keyword_with_leading_underscore_is_legal(word in reserved_word()) {
        let text = format!("_{word}");
        prop_assert_eq!(parse_id(&text).unwrap(), Node::Identifier(id(&text)));
    }

    #[test]
    fn escaped_keyword_is_legal(word in reserved_word()) {
        let text = format!("\\{word}");
        match parse_id(&text).unwrap() {
            Node::Identifier(ident) => {
                prop_assert!(ident.text.starts_with('\\'));
                prop_assert_eq!(ident.name(), word);
            }
            other => prop_assert!(false, "expected identifier, got {:?}", other),
        }
    }

    #[test]
    fn simple_names_parse(name in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        let result = parse_id(&name);
        if KEYWORDS.contains(&name.as_str()) || RESERVED_WORDS.contains(&name.as_str()) {
            let is_invalid = matches!(result, Err(ParseError::InvalidIdentifier { .. }));
            prop_assert!(is_invalid);
        } else {
            prop_assert_eq!(result.unwrap(), Node::Identifier(id(&name)));
        }
    }
}
