//! SystemRDL word tables.
//!
//! All lookups are case-sensitive: `Reg` is a legal identifier, `reg` is not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Words that cannot be used as non-escaped identifiers.
pub const KEYWORDS: &[&str] = &[
    "abstract",
    "accesstype",
    "addressingtype",
    "addrmap",
    "alias",
    "all",
    "bit",
    "boolean",
    "bothedge",
    "compact",
    "component",
    "componentwidth",
    "constraint",
    "default",
    "encode",
    "enum",
    "external",
    "false",
    "field",
    "fullalign",
    "hw",
    "inside",
    "internal",
    "level",
    "longint",
    "mem",
    "na",
    "negedge",
    "nonsticky",
    "number",
    "onreadtype",
    "onwritetype",
    "posedge",
    "property",
    "r",
    "rclr",
    "ref",
    "reg",
    "regalign",
    "regfile",
    "rset",
    "ruser",
    "rw",
    "rw1",
    "signal",
    "string",
    "struct",
    "sw",
    "this",
    "true",
    "type",
    "unsigned",
    "w",
    "w1",
    "wclr",
    "woclr",
    "woset",
    "wot",
    "wr",
    "wset",
    "wuser",
    "wzc",
    "wzs",
    "wzt",
];

/// Words reserved for future versions of the language.
pub const RESERVED_WORDS: &[&str] = &[
    "alternate",
    "byte",
    "int",
    "precedencetype",
    "real",
    "shortint",
    "shortreal",
    "signed",
    "with",
    "within",
];

/// Keywords accepted as the property of a property reference (`a->sw`).
pub const PROPERTY_KEYWORDS: &[&str] = &["sw", "hw", "rclr", "rset", "woclr", "woset"];

/// Scalar types usable in a type cast (`longint'(x)`).
pub const SIMPLE_TYPES: &[&str] = &["longint", "bit"];

/// Which table rejected an identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ReservedClass {
    /// Listed in [`KEYWORDS`].
    Keyword,
    /// Listed in [`RESERVED_WORDS`].
    ReservedWord,
}

impl fmt::Display for ReservedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReservedClass::Keyword => "keywords",
            ReservedClass::ReservedWord => "reserved words",
        })
    }
}

/// Returns the table `word` belongs to, if any.
pub fn reserved_class(word: &str) -> Option<ReservedClass> {
    if KEYWORDS.contains(&word) {
        Some(ReservedClass::Keyword)
    } else if RESERVED_WORDS.contains(&word) {
        Some(ReservedClass::ReservedWord)
    } else {
        None
    }
}

/// Returns `true` if `word` may follow `->` without being a valid identifier.
pub fn is_property_keyword(word: &str) -> bool {
    PROPERTY_KEYWORDS.contains(&word)
}

/// Returns `true` if `word` names a type-cast target.
pub fn is_simple_type(word: &str) -> bool {
    SIMPLE_TYPES.contains(&word)
}
