//! AST node types for SystemRDL constant expressions and references.
//!
//! Every node records the [`Span`] of the token that introduced it. Equality
//! is structural and ignores spans, so a parsed `8'hab` equals a
//! `NumberLiteral` built by hand with [`Span::DUMMY`].

use crate::error::ParseError;
use crate::keywords::reserved_class;
use num_bigint::BigUint;
use rdl_source::Span;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A node of the constant-expression AST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A name: plain, escaped, or a keyword used in a name position (`this`).
    Identifier(Identifier),
    /// Boolean, string, or enumerated-keyword literal.
    Literal(Literal),
    /// Simple or sized number.
    Number(NumberLiteral),
    /// `Type::Mnemonic`.
    Enumerator(EnumeratorLiteral),
    /// Prefix operator applied to a primary.
    Unary(UnaryOperation),
    /// Infix operator.
    Binary(BinaryOperation),
    /// `cond ? a : b`.
    Ternary(TernaryOperation),
    /// `type'(expr)` or `width'(expr)`.
    Cast(Cast),
    /// `{a, b, ...}`.
    Concatenation(Concatenation),
    /// `{n{a, b, ...}}`.
    MultipleConcatenation(MultipleConcatenation),
    /// `Type'{member: value, ...}`.
    Struct(StructLiteral),
    /// `'{a, b, ...}`.
    Array(ArrayLiteral),
    /// `a.b[i].c`.
    InstanceRef(InstanceRef),
    /// `a.b->prop`.
    PropertyRef(PropertyRef),
}

impl Node {
    /// Position of the token that introduced this node.
    pub fn span(&self) -> Span {
        match self {
            Node::Identifier(n) => n.span,
            Node::Literal(n) => n.span,
            Node::Number(n) => n.span,
            Node::Enumerator(n) => n.span(),
            Node::Unary(n) => n.span,
            Node::Binary(n) => n.span,
            Node::Ternary(n) => n.span,
            Node::Cast(n) => n.span(),
            Node::Concatenation(n) => n.span,
            Node::MultipleConcatenation(n) => n.span,
            Node::Struct(n) => n.span(),
            Node::Array(n) => n.span,
            Node::InstanceRef(n) => n.span,
            Node::PropertyRef(n) => n.span(),
        }
    }

    /// Type tag of literal nodes; `None` for everything else.
    pub fn literal_type(&self) -> Option<LiteralType> {
        match self {
            Node::Literal(lit) => Some(lit.value.literal_type()),
            Node::Number(_) => Some(LiteralType::Number),
            Node::Enumerator(_) => Some(LiteralType::Enumerator),
            _ => None,
        }
    }
}

// ============================================================================
// Identifiers
// ============================================================================

/// How an identifier was written.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// `name`
    Plain,
    /// `\name`
    Escaped,
    /// A keyword the grammar admits in a name position: `this`, a cast type,
    /// or a property keyword after `->`.
    Keyword,
}

/// A validated identifier.
///
/// Escaped identifiers keep their leading `\` in `text`. Two identifiers are
/// equal when their text is equal, regardless of kind or position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Identifier {
    /// Source spelling.
    pub text: String,
    /// How it was written.
    pub kind: IdentifierKind,
    /// Where it appears.
    pub span: Span,
}

impl Identifier {
    /// Builds a plain or escaped identifier, rejecting keywords and reserved
    /// words unless the text starts with `\`.
    pub fn new(text: impl Into<String>, span: Span) -> Result<Self, ParseError> {
        let text = text.into();
        if text.starts_with('\\') {
            return Ok(Self {
                text,
                kind: IdentifierKind::Escaped,
                span,
            });
        }
        if let Some(class) = reserved_class(&text) {
            return Err(ParseError::InvalidIdentifier { text, class, span });
        }
        Ok(Self {
            text,
            kind: IdentifierKind::Plain,
            span,
        })
    }

    /// Builds an identifier for a keyword used in a name position. No
    /// validation is done.
    pub fn keyword(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            kind: IdentifierKind::Keyword,
            span,
        }
    }

    /// Returns `true` for `\name` identifiers.
    pub fn is_escaped(&self) -> bool {
        self.kind == IdentifierKind::Escaped
    }

    /// Returns `true` for keywords admitted in name positions.
    pub fn is_keyword(&self) -> bool {
        self.kind == IdentifierKind::Keyword
    }

    /// The name with any leading `\` removed.
    pub fn name(&self) -> &str {
        self.text.strip_prefix('\\').unwrap_or(&self.text)
    }

    /// The source spelling.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Identifier {}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

// ============================================================================
// Literals
// ============================================================================

/// Type tag shared by all literal nodes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum LiteralType {
    /// `true` / `false`
    Boolean,
    /// `"..."`
    String,
    /// [`AccessType`]
    AccessType,
    /// [`OnReadType`]
    OnReadType,
    /// [`OnWriteType`]
    OnWriteType,
    /// [`AddressingType`]
    AddressingType,
    /// [`PrecedenceType`]
    PrecedenceType,
    /// `Type::Mnemonic`
    Enumerator,
    /// Simple or sized number.
    Number,
}

macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $word:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $word, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Looks up a value by its keyword spelling.
            pub fn from_keyword(word: &str) -> Option<Self> {
                match word {
                    $($word => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// The keyword spelling.
            pub fn keyword(self) -> &'static str {
                match self {
                    $($name::$variant => $word,)+
                }
            }
        }
    };
}

keyword_enum!(
    /// Software/hardware access mode (`accesstype` literal).
    AccessType {
        Na => "na",
        Rw => "rw",
        Wr => "wr",
        R => "r",
        W => "w",
        Rw1 => "rw1",
        W1 => "w1",
    }
);

keyword_enum!(
    /// Side effect of a read (`onreadtype` literal).
    OnReadType {
        Rclr => "rclr",
        Rset => "rset",
        Ruser => "ruser",
    }
);

keyword_enum!(
    /// Side effect of a write (`onwritetype` literal).
    OnWriteType {
        Woset => "woset",
        Woclr => "woclr",
        Wot => "wot",
        Wzs => "wzs",
        Wzc => "wzc",
        Wzt => "wzt",
        Wclr => "wclr",
        Wset => "wset",
        Wuser => "wuser",
    }
);

keyword_enum!(
    /// Register packing rule (`addressingtype` literal).
    AddressingType {
        Compact => "compact",
        Regalign => "regalign",
        Fullalign => "fullalign",
    }
);

keyword_enum!(
    /// Which side wins on a simultaneous access (`precedencetype` literal).
    PrecedenceType {
        Hw => "hw",
        Sw => "sw",
    }
);

/// Value carried by a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralValue {
    /// `true` / `false`
    Boolean(bool),
    /// String contents with `\"` already unescaped.
    String(String),
    /// An `accesstype` keyword.
    AccessType(AccessType),
    /// An `onreadtype` keyword.
    OnReadType(OnReadType),
    /// An `onwritetype` keyword.
    OnWriteType(OnWriteType),
    /// An `addressingtype` keyword.
    AddressingType(AddressingType),
    /// A `precedencetype` keyword.
    PrecedenceType(PrecedenceType),
}

impl LiteralValue {
    /// The type tag of this value.
    pub fn literal_type(&self) -> LiteralType {
        match self {
            LiteralValue::Boolean(_) => LiteralType::Boolean,
            LiteralValue::String(_) => LiteralType::String,
            LiteralValue::AccessType(_) => LiteralType::AccessType,
            LiteralValue::OnReadType(_) => LiteralType::OnReadType,
            LiteralValue::OnWriteType(_) => LiteralType::OnWriteType,
            LiteralValue::AddressingType(_) => LiteralType::AddressingType,
            LiteralValue::PrecedenceType(_) => LiteralType::PrecedenceType,
        }
    }

    /// Classifies a bare word as a boolean or enumerated-keyword literal.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "true" => Some(LiteralValue::Boolean(true)),
            "false" => Some(LiteralValue::Boolean(false)),
            _ => AccessType::from_keyword(word)
                .map(LiteralValue::AccessType)
                .or_else(|| OnReadType::from_keyword(word).map(LiteralValue::OnReadType))
                .or_else(|| OnWriteType::from_keyword(word).map(LiteralValue::OnWriteType))
                .or_else(|| AddressingType::from_keyword(word).map(LiteralValue::AddressingType))
                .or_else(|| PrecedenceType::from_keyword(word).map(LiteralValue::PrecedenceType)),
        }
    }
}

/// A boolean, string, or enumerated-keyword literal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Literal {
    /// Tagged value.
    pub value: LiteralValue,
    /// Where it appears.
    pub span: Span,
}

impl Literal {
    /// Creates a literal.
    pub fn new(value: LiteralValue, span: Span) -> Self {
        Self { value, span }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Literal {}

/// A number literal. Simple forms (`42`, `0x2A`) have no width; sized forms
/// (`8'h2A`) carry the width written before the tick.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NumberLiteral {
    /// Magnitude.
    pub value: BigUint,
    /// Bit width of a sized literal.
    pub width: Option<u32>,
    /// The whole literal token.
    pub span: Span,
}

impl NumberLiteral {
    /// Creates a number literal.
    pub fn new(value: impl Into<BigUint>, width: Option<u32>, span: Span) -> Self {
        Self {
            value: value.into(),
            width,
            span,
        }
    }

    /// Magnitude.
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Bit width, if sized.
    pub fn width(&self) -> Option<u32> {
        self.width
    }
}

impl PartialEq for NumberLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.width == other.width
    }
}

impl Eq for NumberLiteral {}

/// `Type::Mnemonic`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumeratorLiteral {
    /// The enum type name.
    pub type_name: Identifier,
    /// The enumerator name.
    pub mnemonic_name: Identifier,
}

impl EnumeratorLiteral {
    /// Position of the type name.
    pub fn span(&self) -> Span {
        self.type_name.span
    }
}

// ============================================================================
// Operators
// ============================================================================

/// Prefix operators. At most one applies to a primary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `!`
    LogNot,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `&`
    RedAnd,
    /// `~&`
    RedNand,
    /// `|`
    RedOr,
    /// `~|`
    RedNor,
    /// `~^`
    RedXnor,
    /// `^~`
    RedXnorAlt,
    /// `~`
    BitNot,
    /// `^`
    RedXor,
}

impl UnaryOp {
    /// Source spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::LogNot => "!",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::RedAnd => "&",
            UnaryOp::RedNand => "~&",
            UnaryOp::RedOr => "|",
            UnaryOp::RedNor => "~|",
            UnaryOp::RedXnor => "~^",
            UnaryOp::RedXnorAlt => "^~",
            UnaryOp::BitNot => "~",
            UnaryOp::RedXor => "^",
        }
    }
}

/// Infix operators, all left-associative.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `**`
    Pow,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Neq,
    /// `&`
    BitAnd,
    /// `^`
    BitXor,
    /// `~^`
    BitXnor,
    /// `^~`
    BitXnorAlt,
    /// `|`
    BitOr,
    /// `&&`
    LogAnd,
    /// `||`
    LogOr,
}

impl BinaryOp {
    /// Binding strength from 1 (`||`, loosest) to 11 (`**`, tightest).
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Pow => 11,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 10,
            BinaryOp::Add | BinaryOp::Sub => 9,
            BinaryOp::Shl | BinaryOp::Shr => 8,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 7,
            BinaryOp::Eq | BinaryOp::Neq => 6,
            BinaryOp::BitAnd => 5,
            BinaryOp::BitXor | BinaryOp::BitXnor | BinaryOp::BitXnorAlt => 4,
            BinaryOp::BitOr => 3,
            BinaryOp::LogAnd => 2,
            BinaryOp::LogOr => 1,
        }
    }

    /// Source spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Pow => "**",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Neq => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitXnor => "~^",
            BinaryOp::BitXnorAlt => "^~",
            BinaryOp::BitOr => "|",
            BinaryOp::LogAnd => "&&",
            BinaryOp::LogOr => "||",
        }
    }
}

/// A prefix operator and its operand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UnaryOperation {
    /// The operator.
    pub op: UnaryOp,
    /// The operand.
    pub operand: Box<Node>,
    /// Position of the operator.
    pub span: Span,
}

impl PartialEq for UnaryOperation {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.operand == other.operand
    }
}

impl Eq for UnaryOperation {}

/// An infix operator and its operands.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryOperation {
    /// The operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Box<Node>,
    /// Right operand.
    pub right: Box<Node>,
    /// Position of the operator.
    pub span: Span,
}

impl PartialEq for BinaryOperation {
    fn eq(&self, other: &Self) -> bool {
        self.op == other.op && self.left == other.left && self.right == other.right
    }
}

impl Eq for BinaryOperation {}

/// `condition ? if_value : else_value`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TernaryOperation {
    /// Tested expression.
    pub condition: Box<Node>,
    /// Value when true.
    pub if_value: Box<Node>,
    /// Value when false.
    pub else_value: Box<Node>,
    /// Position of `?`.
    pub span: Span,
}

impl TernaryOperation {
    /// The operator spelling, always `?`.
    pub fn operator(&self) -> &'static str {
        "?"
    }
}

impl PartialEq for TernaryOperation {
    fn eq(&self, other: &Self) -> bool {
        self.condition == other.condition
            && self.if_value == other.if_value
            && self.else_value == other.else_value
    }
}

impl Eq for TernaryOperation {}

// ============================================================================
// Composite primaries
// ============================================================================

/// `casting_type'(expr)`. The casting type is a keyword identifier for type
/// casts and an arbitrary primary for width casts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    /// Type keyword or width expression.
    pub casting_type: Box<Node>,
    /// Expression being cast.
    pub expr: Box<Node>,
}

impl Cast {
    /// Position of the casting type.
    pub fn span(&self) -> Span {
        self.casting_type.span()
    }
}

/// `{a, b, ...}` with at least one element.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Concatenation {
    /// Elements in source order.
    pub elements: Vec<Node>,
    /// Position of `{`.
    pub span: Span,
}

impl PartialEq for Concatenation {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for Concatenation {}

/// `{multiplier{a, b, ...}}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MultipleConcatenation {
    /// Replication count.
    pub multiplier: Box<Node>,
    /// Replicated concatenation.
    pub concatenation: Concatenation,
    /// Position of the outer `{`.
    pub span: Span,
}

impl PartialEq for MultipleConcatenation {
    fn eq(&self, other: &Self) -> bool {
        self.multiplier == other.multiplier && self.concatenation == other.concatenation
    }
}

impl Eq for MultipleConcatenation {}

/// `Type'{member: value, ...}`.
///
/// `members` maps member text to value; when a name repeats, the last value
/// wins while `member_names` still lists every occurrence.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StructLiteral {
    /// The struct type.
    pub type_name: Identifier,
    /// Member values keyed by member text.
    pub members: BTreeMap<String, Node>,
    /// Member names as written, in order.
    pub member_names: Vec<Identifier>,
}

impl StructLiteral {
    /// Position of the type name.
    pub fn span(&self) -> Span {
        self.type_name.span
    }

    /// Value assigned to `name`.
    pub fn member(&self, name: &str) -> Option<&Node> {
        self.members.get(name)
    }
}

impl PartialEq for StructLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.type_name == other.type_name && self.members == other.members
    }
}

impl Eq for StructLiteral {}

/// `'{a, b, ...}` with at least one element.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayLiteral {
    /// Elements in source order.
    pub elements: Vec<Node>,
    /// Position of `'`.
    pub span: Span,
}

impl PartialEq for ArrayLiteral {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for ArrayLiteral {}

// ============================================================================
// References
// ============================================================================

/// One `name[index]` step of an instance reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRefElement {
    /// Instance name.
    pub id: Identifier,
    /// Array subscript.
    pub array: Option<Box<Node>>,
}

/// `a.b[i].c`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InstanceRef {
    /// Path elements, never empty.
    pub elements: Vec<InstanceRefElement>,
    /// Position of the first identifier.
    pub span: Span,
}

impl PartialEq for InstanceRef {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl Eq for InstanceRef {}

/// `instance_ref->property`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRef {
    /// The referenced instance.
    pub instance_ref: InstanceRef,
    /// Property keyword or user property name.
    pub property: Identifier,
}

impl PropertyRef {
    /// Position of the instance reference.
    pub fn span(&self) -> Span {
        self.instance_ref.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{KEYWORDS, RESERVED_WORDS};
    use rdl_source::FileId;

    fn span(start: u32, end: u32) -> Span {
        Span::new(FileId::from_raw(0), start, end)
    }

    #[test]
    fn identifier_rejects_every_keyword_and_reserved_word() {
        for word in KEYWORDS.iter().chain(RESERVED_WORDS) {
            assert!(Identifier::new(*word, Span::DUMMY).is_err(), "{word}");
            assert!(Identifier::new(format!("\\{word}"), Span::DUMMY).is_ok());
        }
    }

    #[test]
    fn identifier_kinds_and_name() {
        let plain = Identifier::new("regA", Span::DUMMY).unwrap();
        assert_eq!(plain.kind, IdentifierKind::Plain);
        assert_eq!(plain.name(), "regA");

        let escaped = Identifier::new("\\reg", Span::DUMMY).unwrap();
        assert!(escaped.is_escaped());
        assert_eq!(escaped.as_str(), "\\reg");
        assert_eq!(escaped.name(), "reg");

        let this = Identifier::keyword("this", Span::DUMMY);
        assert!(this.is_keyword());
        assert_eq!(this, "this");
    }

    #[test]
    fn identifier_equality_ignores_span_and_kind() {
        let a = Identifier::new("sw_ctrl", span(0, 7)).unwrap();
        let b = Identifier::new("sw_ctrl", span(10, 17)).unwrap();
        assert_eq!(a, b);
        assert_eq!(Identifier::keyword("sw", span(0, 2)).text, "sw");
        assert_ne!(
            Identifier::new("reg_", Span::DUMMY).unwrap(),
            Identifier::new("\\reg_", Span::DUMMY).unwrap()
        );
    }

    #[test]
    fn keyword_enums_round_trip_through_spelling() {
        for value in AccessType::ALL {
            assert_eq!(AccessType::from_keyword(value.keyword()), Some(*value));
        }
        for value in OnWriteType::ALL {
            assert_eq!(OnWriteType::from_keyword(value.keyword()), Some(*value));
        }
        assert_eq!(AccessType::ALL.len(), 7);
        assert_eq!(OnReadType::ALL.len(), 3);
        assert_eq!(OnWriteType::ALL.len(), 9);
        assert_eq!(AddressingType::ALL.len(), 3);
        assert_eq!(PrecedenceType::ALL.len(), 2);
        assert_eq!(AccessType::from_keyword("RW"), None);
    }

    #[test]
    fn literal_value_classification() {
        assert_eq!(
            LiteralValue::from_keyword("true"),
            Some(LiteralValue::Boolean(true))
        );
        assert_eq!(
            LiteralValue::from_keyword("rw1"),
            Some(LiteralValue::AccessType(AccessType::Rw1))
        );
        assert_eq!(
            LiteralValue::from_keyword("ruser").map(|v| v.literal_type()),
            Some(LiteralType::OnReadType)
        );
        assert_eq!(
            LiteralValue::from_keyword("regalign"),
            Some(LiteralValue::AddressingType(AddressingType::Regalign))
        );
        assert_eq!(
            LiteralValue::from_keyword("hw"),
            Some(LiteralValue::PrecedenceType(PrecedenceType::Hw))
        );
        assert_eq!(LiteralValue::from_keyword("reg"), None);
    }

    #[test]
    fn number_equality_ignores_span() {
        let parsed = NumberLiteral::new(171u32, Some(8), span(4, 9));
        let built = NumberLiteral::new(171u32, Some(8), Span::DUMMY);
        assert_eq!(parsed, built);
        assert_ne!(parsed, NumberLiteral::new(171u32, None, Span::DUMMY));
        assert_eq!(built.value(), &BigUint::from(171u32));
        assert_eq!(built.width(), Some(8));
    }

    #[test]
    fn node_span_and_literal_type() {
        let number = Node::Number(NumberLiteral::new(1u32, None, span(3, 4)));
        assert_eq!(number.span(), span(3, 4));
        assert_eq!(number.literal_type(), Some(LiteralType::Number));

        let enumerator = Node::Enumerator(EnumeratorLiteral {
            type_name: Identifier::new("Color", span(0, 5)).unwrap(),
            mnemonic_name: Identifier::new("RED", span(7, 10)).unwrap(),
        });
        assert_eq!(enumerator.span(), span(0, 5));
        assert_eq!(enumerator.literal_type(), Some(LiteralType::Enumerator));

        let string = Node::Literal(Literal::new(
            LiteralValue::String("x".to_string()),
            span(0, 3),
        ));
        assert_eq!(string.literal_type(), Some(LiteralType::String));

        let id = Node::Identifier(Identifier::keyword("this", span(0, 4)));
        assert_eq!(id.literal_type(), None);
    }

    #[test]
    fn operator_tables() {
        assert_eq!(BinaryOp::Pow.precedence(), 11);
        assert_eq!(BinaryOp::LogOr.precedence(), 1);
        assert_eq!(BinaryOp::BitXnorAlt.symbol(), "^~");
        assert_eq!(UnaryOp::RedNor.symbol(), "~|");
    }

    #[test]
    fn struct_literal_equality_uses_member_map() {
        let member = |name: &str| Identifier::new(name, Span::DUMMY).unwrap();
        let one = Node::Number(NumberLiteral::new(1u32, None, Span::DUMMY));
        let two = Node::Number(NumberLiteral::new(2u32, None, Span::DUMMY));

        let collapsed = StructLiteral {
            type_name: member("pair"),
            members: BTreeMap::from([("a".to_string(), two.clone())]),
            member_names: vec![member("a"), member("a")],
        };
        let single = StructLiteral {
            type_name: member("pair"),
            members: BTreeMap::from([("a".to_string(), two)]),
            member_names: vec![member("a")],
        };
        assert_eq!(collapsed, single);
        assert_eq!(collapsed.member("a").and_then(Node::literal_type), Some(LiteralType::Number));
        assert!(collapsed.member("b").is_none());
        assert_ne!(collapsed.member("a"), Some(&one));
    }

    #[test]
    fn serde_roundtrip() {
        let node = Node::Binary(BinaryOperation {
            op: BinaryOp::Add,
            left: Box::new(Node::Number(NumberLiteral::new(1u32, None, span(0, 1)))),
            right: Box::new(Node::Identifier(
                Identifier::new("\\reg", span(4, 8)).unwrap(),
            )),
            span: span(2, 3),
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
        assert_eq!(back.span(), span(2, 3));
    }
}
