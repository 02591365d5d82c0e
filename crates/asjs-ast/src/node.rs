//! AST node definitions.
//!
//! `Node` covers every statement, expression, operator and literal form the
//! emitter supports. Declarations (classes, interfaces, members, parameters,
//! metadata) are separate structs because they never appear in expression
//! position; `MemberNode` ties them into a class body.
//!
//! Trees are immutable during emission. Every node owns its children.

use asjs_common::SourceLocation;
use bitflags::bitflags;

bitflags! {
    /// Declaration modifier set, already resolved by the front-end.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const STATIC = 1 << 0;
        const OVERRIDE = 1 << 1;
        const FINAL = 1 << 2;
        const DYNAMIC = 1 << 3;
        const CONST = 1 << 4;
    }
}

/// A metadata annotation attached to a declaration: `[Name(key="value")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl MetaTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }
}

/// Non-numeric literal forms. The `value` on [`Node::Literal`] holds the
/// exact target text, quotes included for strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Boolean,
    Null,
    Undefined,
    RegExp,
}

/// Identifiers with language-level meaning rather than a symbol binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageId {
    This,
    Super,
    /// The `*` any-type annotation.
    AnyType,
    Void,
    /// The `...rest` construct in argument position.
    Rest,
}

/// Unary operator forms, prefix and postfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Negate,
    Plus,
    BitNot,
    PreIncrement,
    PreDecrement,
    PostIncrement,
    PostDecrement,
    Typeof,
    Delete,
    Void,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Negate => "-",
            UnaryOp::Plus => "+",
            UnaryOp::BitNot => "~",
            UnaryOp::PreIncrement | UnaryOp::PostIncrement => "++",
            UnaryOp::PreDecrement | UnaryOp::PostDecrement => "--",
            UnaryOp::Typeof => "typeof",
            UnaryOp::Delete => "delete",
            UnaryOp::Void => "void",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostIncrement | UnaryOp::PostDecrement)
    }

    /// Word operators need a separating space before the operand.
    pub fn is_keyword(self) -> bool {
        matches!(self, UnaryOp::Typeof | UnaryOp::Delete | UnaryOp::Void)
    }
}

/// Binary operator forms.
///
/// `Is` and `As` are distinguished members of this set: they are binary in
/// the source language but have no infix equivalent in the target, so
/// [`BinaryOp::infix_str`] returns `None` for them and the emitter rewrites
/// them as runtime calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    LogicalAnd,
    LogicalOr,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    In,
    InstanceOf,
    Is,
    As,
}

impl BinaryOp {
    /// Target-language infix text, or `None` for the operators that must be
    /// rewritten as runtime calls.
    pub fn infix_str(self) -> Option<&'static str> {
        Some(match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubtractAssign => "-=",
            BinaryOp::MultiplyAssign => "*=",
            BinaryOp::DivideAssign => "/=",
            BinaryOp::ModuloAssign => "%=",
            BinaryOp::Equal => "==",
            BinaryOp::StrictEqual => "===",
            BinaryOp::NotEqual => "!=",
            BinaryOp::StrictNotEqual => "!==",
            BinaryOp::LessThan => "<",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LessThanEqual => "<=",
            BinaryOp::GreaterThanEqual => ">=",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::ShiftRightUnsigned => ">>>",
            BinaryOp::In => "in",
            BinaryOp::InstanceOf => "instanceof",
            BinaryOp::Is | BinaryOp::As => return None,
        })
    }
}

/// One `var` binding: `name:Type = initializer`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    pub name: String,
    pub type_name: String,
    pub initializer: Option<Node>,
}

impl VariableDecl {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, init: Node) -> Self {
        self.initializer = Some(init);
        self
    }
}

/// One branch of an `if`/`else if` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalBranch {
    pub condition: Node,
    pub body: Vec<Node>,
}

/// One `case`/`default` clause. `test` is `None` for `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Option<Node>,
    pub body: Vec<Node>,
}

/// The single typed catch clause of a `try`.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub name: String,
    pub type_name: String,
    pub body: Vec<Node>,
}

/// Function parameter: `name:Type = default` or `...rest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterNode {
    pub name: String,
    pub type_name: String,
    pub default_value: Option<Node>,
    pub rest: bool,
}

impl ParameterNode {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default_value: None,
            rest: false,
        }
    }

    pub fn rest(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: String::new(),
            default_value: None,
            rest: true,
        }
    }

    pub fn with_default(mut self, default: Node) -> Self {
        self.default_value = Some(default);
        self
    }
}

/// Getter/setter discriminator on [`FunctionNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// A method, accessor, constructor, or anonymous function body.
///
/// A constructor is a method whose name equals the owning class's local name.
/// Anonymous function objects leave `name` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: String,
    pub parameters: Vec<ParameterNode>,
    pub return_type: String,
    pub body: Vec<Node>,
    pub accessor: Option<AccessorKind>,
    pub modifiers: Modifiers,
    pub meta_tags: Vec<MetaTag>,
    pub doc_comment: Option<String>,
    pub location: SourceLocation,
}

impl FunctionNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: String::new(),
            body: Vec::new(),
            accessor: None,
            modifiers: Modifiers::empty(),
            meta_tags: Vec::new(),
            doc_comment: None,
            location: SourceLocation::UNKNOWN,
        }
    }

    pub fn getter(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        let mut node = Self::new(name);
        node.return_type = return_type.into();
        node.accessor = Some(AccessorKind::Getter);
        node
    }

    pub fn setter(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        let mut node = Self::new(name);
        node.parameters = vec![ParameterNode::new("value", value_type)];
        node.accessor = Some(AccessorKind::Setter);
        node
    }

    pub fn with_parameters(mut self, parameters: Vec<ParameterNode>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn with_body(mut self, body: Vec<Node>) -> Self {
        self.body = body;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }
}

/// A class field or constant.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNode {
    pub name: String,
    pub type_name: String,
    pub initializer: Option<Node>,
    pub modifiers: Modifiers,
    pub meta_tags: Vec<MetaTag>,
    pub doc_comment: Option<String>,
    pub location: SourceLocation,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            initializer: None,
            modifiers: Modifiers::empty(),
            meta_tags: Vec::new(),
            doc_comment: None,
            location: SourceLocation::UNKNOWN,
        }
    }

    pub fn with_initializer(mut self, init: Node) -> Self {
        self.initializer = Some(init);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }
}

/// A namespace member declaration: `public namespace my_ns = "uri";`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceNode {
    pub name: String,
    pub uri: Option<String>,
    pub modifiers: Modifiers,
    pub location: SourceLocation,
}

impl NamespaceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: None,
            modifiers: Modifiers::empty(),
            location: SourceLocation::UNKNOWN,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }
}

/// A member of a class body, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberNode {
    Field(FieldNode),
    Method(FunctionNode),
    Namespace(NamespaceNode),
}

/// A class declaration with its resolved inheritance chain.
///
/// `superclass` and `interfaces` are fully qualified names; `None` means the
/// class extends the implicit root object.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub name: String,
    pub superclass: Option<String>,
    pub interfaces: Vec<String>,
    pub members: Vec<MemberNode>,
    pub modifiers: Modifiers,
    pub meta_tags: Vec<MetaTag>,
    pub doc_comment: Option<String>,
    pub location: SourceLocation,
}

impl ClassNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            modifiers: Modifiers::empty(),
            meta_tags: Vec::new(),
            doc_comment: None,
            location: SourceLocation::UNKNOWN,
        }
    }

    pub fn extending(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn with_members(mut self, members: Vec<MemberNode>) -> Self {
        self.members = members;
        self
    }

    /// The explicit constructor, if the source declared one.
    pub fn constructor(&self) -> Option<&FunctionNode> {
        self.members.iter().find_map(|member| match member {
            MemberNode::Method(method) if method.name == self.name && method.accessor.is_none() => {
                Some(method)
            }
            _ => None,
        })
    }
}

/// An interface declaration. Interfaces have no runtime body in the target;
/// only the name survives emission.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceNode {
    pub name: String,
    pub extends: Vec<String>,
    pub methods: Vec<FunctionNode>,
    pub meta_tags: Vec<MetaTag>,
    pub doc_comment: Option<String>,
    pub location: SourceLocation,
}

impl InterfaceNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            methods: Vec::new(),
            meta_tags: Vec::new(),
            doc_comment: None,
            location: SourceLocation::UNKNOWN,
        }
    }
}

/// The statement/expression tree.
///
/// Variants group into statements, expressions, operators and literals; the
/// classifier in [`crate::kind`] reports which. Expression nodes may appear
/// in statement position (the emitter terminates them with `;`).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // =========================================================================
    // Identifiers, keywords, literals
    // =========================================================================
    /// Resolved identifier reference.
    Identifier(String),

    /// `this`, `super`, `*`, `void`, rest.
    LanguageIdentifier(LanguageId),

    /// A bare keyword token in expression position.
    Keyword(String),

    /// Non-numeric literal; `value` is the exact target text.
    Literal { kind: LiteralKind, value: String },

    /// Numeric literal, kept as written.
    NumericLiteral(String),

    /// `[a, b, c]`
    ArrayLiteral(Vec<Node>),

    /// `{a: 1, b: 2}` — children are [`Node::ObjectLiteralValuePair`]s.
    ObjectLiteral(Vec<Node>),

    /// One `name: value` pair inside an object literal.
    ObjectLiteralValuePair { name: Box<Node>, value: Box<Node> },

    // =========================================================================
    // Access and call expressions
    // =========================================================================
    /// `object.member`
    MemberAccess { object: Box<Node>, member: Box<Node> },

    /// `object[index]`
    DynamicAccess { object: Box<Node>, index: Box<Node> },

    /// `ns::name` — no target-language equivalent.
    NamespaceAccess { namespace: Box<Node>, name: Box<Node> },

    /// `target(args)` or `new target(args)`.
    FunctionCall {
        target: Box<Node>,
        arguments: Vec<Node>,
        is_new: bool,
    },

    /// `Vector.<T>` — a typed collection expression.
    TypedExpression {
        collection: Box<Node>,
        type_name: String,
    },

    /// `(expr)`
    Parenthesized(Box<Node>),

    // =========================================================================
    // Operators
    // =========================================================================
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },

    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// `cond ? a : b`
    Ternary {
        condition: Box<Node>,
        when_true: Box<Node>,
        when_false: Box<Node>,
    },

    /// Anonymous function literal in expression position.
    FunctionObject(Box<FunctionNode>),

    // =========================================================================
    // Statements
    // =========================================================================
    /// `{ ... }` in statement position.
    Block(Vec<Node>),

    /// `var a:T = 1, b:U;`
    VarDeclList(Vec<VariableDecl>),

    /// `if`/`else if`/`else` chain; the chain structure is preserved as built
    /// by the front-end, never re-associated.
    If {
        branches: Vec<ConditionalBranch>,
        else_body: Option<Vec<Node>>,
    },

    /// `for (init; cond; step) { ... }`
    For {
        init: Option<Box<Node>>,
        condition: Option<Box<Node>>,
        step: Option<Box<Node>>,
        body: Vec<Node>,
    },

    /// `for (var k in coll) { ... }`
    ForIn {
        iterator: Box<Node>,
        collection: Box<Node>,
        body: Vec<Node>,
    },

    /// `for each (var v in coll) { ... }` — desugared by the emitter.
    ForEach {
        iterator: Box<Node>,
        collection: Box<Node>,
        body: Vec<Node>,
    },

    While {
        condition: Box<Node>,
        body: Vec<Node>,
    },

    DoWhile {
        body: Vec<Node>,
        condition: Box<Node>,
    },

    With {
        subject: Box<Node>,
        body: Vec<Node>,
    },

    Switch {
        discriminant: Box<Node>,
        cases: Vec<SwitchCase>,
    },

    Try {
        body: Vec<Node>,
        catch: Option<CatchClause>,
        finally_body: Option<Vec<Node>>,
    },

    Throw(Box<Node>),

    Return(Option<Box<Node>>),

    /// `label: statement`
    Labeled { label: String, body: Box<Node> },

    /// `break;` / `break label;`
    Break(Option<String>),

    /// `continue;` / `continue label;`
    Continue(Option<String>),
}

// =========================================================================
// Builder helpers for tree construction
// =========================================================================

impl Node {
    /// Create an identifier node.
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Create a string literal; `s` is the unquoted text.
    pub fn string(s: impl Into<String>) -> Self {
        Self::Literal {
            kind: LiteralKind::String,
            value: format!("\"{}\"", s.into()),
        }
    }

    /// Create a numeric literal.
    pub fn number(n: impl Into<String>) -> Self {
        Self::NumericLiteral(n.into())
    }

    pub const fn null() -> Self {
        Self::Literal {
            kind: LiteralKind::Null,
            value: String::new(),
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Literal {
            kind: LiteralKind::Boolean,
            value: if value { "true".into() } else { "false".into() },
        }
    }

    pub const fn this() -> Self {
        Self::LanguageIdentifier(LanguageId::This)
    }

    pub const fn super_() -> Self {
        Self::LanguageIdentifier(LanguageId::Super)
    }

    /// Create a member access: `object.member`.
    pub fn prop(object: Self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            object: Box::new(object),
            member: Box::new(Self::Identifier(member.into())),
        }
    }

    /// Create a dynamic access: `object[index]`.
    pub fn elem(object: Self, index: Self) -> Self {
        Self::DynamicAccess {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    /// Create a call expression.
    pub fn call(target: Self, arguments: Vec<Self>) -> Self {
        Self::FunctionCall {
            target: Box::new(target),
            arguments,
            is_new: false,
        }
    }

    /// Create a `new` expression.
    pub fn new_call(target: Self, arguments: Vec<Self>) -> Self {
        Self::FunctionCall {
            target: Box::new(target),
            arguments,
            is_new: true,
        }
    }

    /// Create a binary expression.
    pub fn binary(left: Self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create an assignment: `target = value`.
    pub fn assign(target: Self, value: Self) -> Self {
        Self::binary(target, BinaryOp::Assign, value)
    }

    /// Create a return statement.
    pub fn ret(expr: Option<Self>) -> Self {
        Self::Return(expr.map(Box::new))
    }

    /// Create a single-binding `var` statement.
    pub fn var(name: impl Into<String>, type_name: impl Into<String>, init: Option<Self>) -> Self {
        let mut decl = VariableDecl::new(name, type_name);
        decl.initializer = init;
        Self::VarDeclList(vec![decl])
    }
}
