//! Fully-resolved ActionScript AST consumed by the asjs emitter.
//!
//! The front-end (parser + symbol resolution) lives outside this workspace;
//! it hands over trees built from these types with every type annotation and
//! symbol reference already resolved. The emitter only reads them.
//!
//! The node set is closed: `Node` is one tagged-variant enum and every
//! consumer matches on it exhaustively, so a construct outside the supported
//! set simply cannot be represented.

pub mod kind;
pub mod node;
pub mod unit;

pub use kind::{NodeCategory, NodeKind};
pub use node::{
    AccessorKind, BinaryOp, CatchClause, ClassNode, ConditionalBranch, FieldNode, FunctionNode,
    InterfaceNode, LanguageId, LiteralKind, MemberNode, MetaTag, Modifiers, NamespaceNode, Node,
    ParameterNode, SwitchCase, UnaryOp, VariableDecl,
};
pub use unit::{CompilationUnit, QualifiedName, TypeNode};
