//! Grammar entry points selectable by callers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A production the parser can start from. The whole input must match it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryRule {
    /// `id`
    Id,
    /// `boolean_literal`
    BooleanLiteral,
    /// `string_literal`
    StringLiteral,
    /// `number_literal`
    NumberLiteral,
    /// `accesstype_literal`
    AccesstypeLiteral,
    /// `onreadtype_literal`
    OnreadtypeLiteral,
    /// `onwritetype_literal`
    OnwritetypeLiteral,
    /// `addressingtype_literal`
    AddressingtypeLiteral,
    /// `precedencetype_literal`
    PrecedencetypeLiteral,
    /// `enumerator_literal`
    EnumeratorLiteral,
    /// `constant_literal`
    ConstantLiteral,
    /// `constant_primary`
    ConstantPrimary,
    /// `constant_expression`
    #[default]
    ConstantExpression,
    /// `constant_concatenation`
    ConstantConcatenation,
    /// `constant_multiple_concatenation`
    ConstantMultipleConcatenation,
    /// `constant_cast`
    ConstantCast,
    /// `struct_literal`
    StructLiteral,
    /// `array_literal`
    ArrayLiteral,
    /// `instance_ref`
    InstanceRef,
    /// `property_ref`
    PropertyRef,
}

impl EntryRule {
    /// Every entry rule.
    pub const ALL: &'static [EntryRule] = &[
        EntryRule::Id,
        EntryRule::BooleanLiteral,
        EntryRule::StringLiteral,
        EntryRule::NumberLiteral,
        EntryRule::AccesstypeLiteral,
        EntryRule::OnreadtypeLiteral,
        EntryRule::OnwritetypeLiteral,
        EntryRule::AddressingtypeLiteral,
        EntryRule::PrecedencetypeLiteral,
        EntryRule::EnumeratorLiteral,
        EntryRule::ConstantLiteral,
        EntryRule::ConstantPrimary,
        EntryRule::ConstantExpression,
        EntryRule::ConstantConcatenation,
        EntryRule::ConstantMultipleConcatenation,
        EntryRule::ConstantCast,
        EntryRule::StructLiteral,
        EntryRule::ArrayLiteral,
        EntryRule::InstanceRef,
        EntryRule::PropertyRef,
    ];

    /// The production name.
    pub fn name(self) -> &'static str {
        match self {
            EntryRule::Id => "id",
            EntryRule::BooleanLiteral => "boolean_literal",
            EntryRule::StringLiteral => "string_literal",
            EntryRule::NumberLiteral => "number_literal",
            EntryRule::AccesstypeLiteral => "accesstype_literal",
            EntryRule::OnreadtypeLiteral => "onreadtype_literal",
            EntryRule::OnwritetypeLiteral => "onwritetype_literal",
            EntryRule::AddressingtypeLiteral => "addressingtype_literal",
            EntryRule::PrecedencetypeLiteral => "precedencetype_literal",
            EntryRule::EnumeratorLiteral => "enumerator_literal",
            EntryRule::ConstantLiteral => "constant_literal",
            EntryRule::ConstantPrimary => "constant_primary",
            EntryRule::ConstantExpression => "constant_expression",
            EntryRule::ConstantConcatenation => "constant_concatenation",
            EntryRule::ConstantMultipleConcatenation => "constant_multiple_concatenation",
            EntryRule::ConstantCast => "constant_cast",
            EntryRule::StructLiteral => "struct_literal",
            EntryRule::ArrayLiteral => "array_literal",
            EntryRule::InstanceRef => "instance_ref",
            EntryRule::PropertyRef => "property_ref",
        }
    }
}

impl fmt::Display for EntryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no entry rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown entry rule '{0}'")]
pub struct UnknownEntryRule(pub String);

impl FromStr for EntryRule {
    type Err = UnknownEntryRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntryRule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownEntryRule(s.to_string()))
    }
}
