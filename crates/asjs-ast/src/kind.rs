//! Node classification.
//!
//! `NodeKind` is the closed set of syntactic/semantic kinds the emitter
//! dispatches on. Classification is pure: it reads the node and nothing else.
//! Because `Node` itself is a closed enum, every node maps to exactly one
//! kind and an unclassifiable node cannot be constructed.

use crate::node::{MemberNode, Node};
use crate::unit::TypeNode;

/// Broad syntactic category of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Declaration,
    Statement,
    Expression,
    Operator,
    Literal,
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    // Declarations
    Class,
    Interface,
    Field,
    Method,
    Accessor,
    Namespace,
    Parameter,
    MetaTag,

    // Statements
    Block,
    VariableDeclaration,
    If,
    For,
    ForIn,
    ForEach,
    While,
    DoWhile,
    With,
    Switch,
    Try,
    Throw,
    Return,
    LabeledStatement,
    IterationFlow,

    // Expressions
    Identifier,
    LanguageIdentifier,
    Keyword,
    MemberAccess,
    DynamicAccess,
    NamespaceAccess,
    FunctionCall,
    TypedExpression,
    Parenthesized,
    FunctionObject,
    ObjectLiteralValuePair,

    // Operators
    UnaryOperator,
    BinaryOperator,
    TernaryOperator,

    // Literals
    Literal,
    NumericLiteral,
    ArrayLiteral,
    ObjectLiteral,
}

impl NodeKind {
    pub fn category(self) -> NodeCategory {
        match self {
            NodeKind::Class
            | NodeKind::Interface
            | NodeKind::Field
            | NodeKind::Method
            | NodeKind::Accessor
            | NodeKind::Namespace
            | NodeKind::Parameter
            | NodeKind::MetaTag => NodeCategory::Declaration,

            NodeKind::Block
            | NodeKind::VariableDeclaration
            | NodeKind::If
            | NodeKind::For
            | NodeKind::ForIn
            | NodeKind::ForEach
            | NodeKind::While
            | NodeKind::DoWhile
            | NodeKind::With
            | NodeKind::Switch
            | NodeKind::Try
            | NodeKind::Throw
            | NodeKind::Return
            | NodeKind::LabeledStatement
            | NodeKind::IterationFlow => NodeCategory::Statement,

            NodeKind::Identifier
            | NodeKind::LanguageIdentifier
            | NodeKind::Keyword
            | NodeKind::MemberAccess
            | NodeKind::DynamicAccess
            | NodeKind::NamespaceAccess
            | NodeKind::FunctionCall
            | NodeKind::TypedExpression
            | NodeKind::Parenthesized
            | NodeKind::FunctionObject
            | NodeKind::ObjectLiteralValuePair => NodeCategory::Expression,

            NodeKind::UnaryOperator | NodeKind::BinaryOperator | NodeKind::TernaryOperator => {
                NodeCategory::Operator
            }

            NodeKind::Literal
            | NodeKind::NumericLiteral
            | NodeKind::ArrayLiteral
            | NodeKind::ObjectLiteral => NodeCategory::Literal,
        }
    }
}

impl Node {
    /// Classify this node. Total over the node set; pure.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Identifier(_) => NodeKind::Identifier,
            Node::LanguageIdentifier(_) => NodeKind::LanguageIdentifier,
            Node::Keyword(_) => NodeKind::Keyword,
            Node::Literal { .. } => NodeKind::Literal,
            Node::NumericLiteral(_) => NodeKind::NumericLiteral,
            Node::ArrayLiteral(_) => NodeKind::ArrayLiteral,
            Node::ObjectLiteral(_) => NodeKind::ObjectLiteral,
            Node::ObjectLiteralValuePair { .. } => NodeKind::ObjectLiteralValuePair,
            Node::MemberAccess { .. } => NodeKind::MemberAccess,
            Node::DynamicAccess { .. } => NodeKind::DynamicAccess,
            Node::NamespaceAccess { .. } => NodeKind::NamespaceAccess,
            Node::FunctionCall { .. } => NodeKind::FunctionCall,
            Node::TypedExpression { .. } => NodeKind::TypedExpression,
            Node::Parenthesized(_) => NodeKind::Parenthesized,
            Node::Unary { .. } => NodeKind::UnaryOperator,
            Node::Binary { .. } => NodeKind::BinaryOperator,
            Node::Ternary { .. } => NodeKind::TernaryOperator,
            Node::FunctionObject(_) => NodeKind::FunctionObject,
            Node::Block(_) => NodeKind::Block,
            Node::VarDeclList(_) => NodeKind::VariableDeclaration,
            Node::If { .. } => NodeKind::If,
            Node::For { .. } => NodeKind::For,
            Node::ForIn { .. } => NodeKind::ForIn,
            Node::ForEach { .. } => NodeKind::ForEach,
            Node::While { .. } => NodeKind::While,
            Node::DoWhile { .. } => NodeKind::DoWhile,
            Node::With { .. } => NodeKind::With,
            Node::Switch { .. } => NodeKind::Switch,
            Node::Try { .. } => NodeKind::Try,
            Node::Throw(_) => NodeKind::Throw,
            Node::Return(_) => NodeKind::Return,
            Node::Labeled { .. } => NodeKind::LabeledStatement,
            Node::Break(_) | Node::Continue(_) => NodeKind::IterationFlow,
        }
    }

    /// Whether this node is a statement form. Expression nodes may still sit
    /// in statement position; the emitter terminates those with `;`.
    pub fn is_statement(&self) -> bool {
        self.kind().category() == NodeCategory::Statement
    }

    /// Whether this node is simple enough to re-evaluate without side
    /// effects (used when a desugaring would otherwise duplicate it).
    pub fn is_side_effect_free(&self) -> bool {
        matches!(
            self.kind(),
            NodeKind::Identifier
                | NodeKind::LanguageIdentifier
                | NodeKind::Literal
                | NodeKind::NumericLiteral
        )
    }
}

impl MemberNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            MemberNode::Field(_) => NodeKind::Field,
            MemberNode::Method(method) if method.accessor.is_some() => NodeKind::Accessor,
            MemberNode::Method(_) => NodeKind::Method,
            MemberNode::Namespace(_) => NodeKind::Namespace,
        }
    }
}

impl TypeNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            TypeNode::Class(_) => NodeKind::Class,
            TypeNode::Interface(_) => NodeKind::Interface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BinaryOp, FunctionNode};

    #[test]
    fn classification_is_total_and_stable() {
        assert_eq!(Node::id("x").kind(), NodeKind::Identifier);
        assert_eq!(Node::null().kind(), NodeKind::Literal);
        assert_eq!(
            Node::binary(Node::id("a"), BinaryOp::Is, Node::id("B")).kind(),
            NodeKind::BinaryOperator
        );
        assert_eq!(Node::Break(None).kind(), NodeKind::IterationFlow);
        assert_eq!(Node::Continue(Some("outer".into())).kind(), NodeKind::IterationFlow);
    }

    #[test]
    fn categories_partition_the_kind_set() {
        assert_eq!(NodeKind::If.category(), NodeCategory::Statement);
        assert_eq!(NodeKind::TernaryOperator.category(), NodeCategory::Operator);
        assert_eq!(NodeKind::ObjectLiteral.category(), NodeCategory::Literal);
        assert_eq!(NodeKind::Accessor.category(), NodeCategory::Declaration);
        assert_eq!(NodeKind::FunctionCall.category(), NodeCategory::Expression);
    }

    #[test]
    fn member_kind_distinguishes_accessors() {
        let method = MemberNode::Method(FunctionNode::new("run"));
        assert_eq!(method.kind(), NodeKind::Method);

        let getter = MemberNode::Method(FunctionNode::getter("label", "String"));
        assert_eq!(getter.kind(), NodeKind::Accessor);
    }
}
