//! The tree-walking code generator.
//!
//! `JsEmitter` dispatches on [`NodeKind`] through one exhaustive match; each
//! node kind has exactly one emission rule. The per-kind rules live in the
//! submodules as `impl` blocks on the emitter:
//!
//! - `declarations` — packages, classes, interfaces, members, documentation
//! - `statements` — control flow, variable declarations, blocks
//! - `expressions` — accesses, calls, literals, function objects
//! - `operators` — unary/binary/ternary, including the `is`/`as` rewrites

mod declarations;
mod expressions;
mod operators;
mod statements;

use asjs_ast::{CompilationUnit, Node, NodeKind, TypeNode};
use asjs_common::ProblemSink;

use crate::context::EmitContext;

/// Root namespace of the emitted runtime support library. Synthesized calls
/// (`provide`, `inherit`, `is`, `as`) resolve against it, and the driver
/// excludes compilation units under it from re-emission.
pub const RUNTIME_NAMESPACE: &str = "as3";

/// Scope of the type currently being emitted.
pub(crate) struct TypeScope {
    /// Fully qualified name of the type, e.g. `behaviors.EchoBehavior`.
    pub qualified_name: String,
    /// Fully qualified superclass name, when the class extends one.
    pub superclass: Option<String>,
}

/// The emitter core. One instance serves one unit at a time; `emit_unit`
/// resets all per-unit state before walking.
pub struct JsEmitter<'a> {
    pub ctx: EmitContext<'a>,
    pub(crate) type_scope: Option<TypeScope>,
}

impl<'a> JsEmitter<'a> {
    pub fn new(problems: &'a ProblemSink) -> Self {
        Self {
            ctx: EmitContext::new(problems),
            type_scope: None,
        }
    }

    /// Emit one compilation unit and return its target text.
    pub fn emit_unit(&mut self, unit: &CompilationUnit) -> String {
        tracing::debug!(unit = %unit.qualified_name, "emitting unit");
        self.ctx.reset(&unit.source_file);
        self.type_scope = None;

        self.emit_package_header(unit);
        self.emit_package_contents(unit);
        self.emit_package_footer(unit);

        self.type_scope = None;
        self.ctx.take_output()
    }

    /// Enter a type scope without emitting a whole unit. Fragment emission
    /// (single members, single expressions) resolves `this`/`super` and
    /// member targets against this scope.
    pub fn set_type_scope(&mut self, qualified_name: &str, superclass: Option<&str>) {
        self.type_scope = Some(TypeScope {
            qualified_name: qualified_name.to_string(),
            superclass: superclass.map(str::to_string),
        });
    }

    /// Emit any statement/expression node. The dispatch is total over the
    /// closed node-kind set; there is deliberately no fallback arm.
    pub fn emit(&mut self, node: &Node) {
        match node.kind() {
            NodeKind::Identifier => self.emit_identifier(node),
            NodeKind::LanguageIdentifier => self.emit_language_identifier(node),
            NodeKind::Keyword => self.emit_keyword(node),
            NodeKind::Literal => self.emit_literal(node),
            NodeKind::NumericLiteral => self.emit_numeric_literal(node),
            NodeKind::ArrayLiteral => self.emit_array_literal(node),
            NodeKind::ObjectLiteral => self.emit_object_literal(node),
            NodeKind::ObjectLiteralValuePair => self.emit_object_literal_value_pair(node),
            NodeKind::MemberAccess => self.emit_member_access(node),
            NodeKind::DynamicAccess => self.emit_dynamic_access(node),
            NodeKind::NamespaceAccess => self.emit_namespace_access(node),
            NodeKind::FunctionCall => self.emit_function_call(node),
            NodeKind::TypedExpression => self.emit_typed_expression(node),
            NodeKind::Parenthesized => self.emit_parenthesized(node),
            NodeKind::FunctionObject => self.emit_function_object(node),
            NodeKind::UnaryOperator => self.emit_unary_operator(node),
            NodeKind::BinaryOperator => self.emit_binary_operator(node),
            NodeKind::TernaryOperator => self.emit_ternary_operator(node),
            NodeKind::Block => self.emit_block_statement(node),
            NodeKind::VariableDeclaration => self.emit_var_declaration(node),
            NodeKind::If => self.emit_if(node),
            NodeKind::For => self.emit_for_loop(node),
            NodeKind::ForIn => self.emit_for_in_loop(node),
            NodeKind::ForEach => self.emit_for_each_loop(node),
            NodeKind::While => self.emit_while_loop(node),
            NodeKind::DoWhile => self.emit_do_loop(node),
            NodeKind::With => self.emit_with(node),
            NodeKind::Switch => self.emit_switch(node),
            NodeKind::Try => self.emit_try(node),
            NodeKind::Throw => self.emit_throw(node),
            NodeKind::Return => self.emit_return(node),
            NodeKind::LabeledStatement => self.emit_label_statement(node),
            NodeKind::IterationFlow => self.emit_iteration_flow(node),
            // Declaration kinds never reach statement/expression dispatch;
            // they are emitted through the member walk in `declarations`.
            NodeKind::Class
            | NodeKind::Interface
            | NodeKind::Field
            | NodeKind::Method
            | NodeKind::Accessor
            | NodeKind::Namespace
            | NodeKind::Parameter
            | NodeKind::MetaTag => {
                self.ctx
                    .missing_child("declaration kind in expression position");
            }
        }
    }

    /// Swap the active sink for a fresh capture buffer, walk `node`, restore
    /// the sink, and return the captured text instead of writing it.
    /// Re-entrant; nested calls are legal.
    pub fn stringify(&mut self, node: &Node) -> String {
        self.ctx.push_capture();
        self.emit(node);
        self.ctx.pop_capture()
    }

    // =========================================================================
    // Package-level emission
    // =========================================================================

    pub fn emit_package_header(&mut self, unit: &CompilationUnit) {
        let package = unit.qualified_name.package();
        if package.is_empty() {
            return;
        }
        self.ctx
            .write(&format!("{RUNTIME_NAMESPACE}.provide(\"{package}\");"));
        self.ctx.write_line();
        self.ctx.write_line();
    }

    pub fn emit_package_contents(&mut self, unit: &CompilationUnit) {
        self.type_scope = Some(TypeScope {
            qualified_name: unit.qualified_name.as_str().to_string(),
            superclass: match &unit.type_node {
                TypeNode::Class(class) => class.superclass.clone(),
                TypeNode::Interface(_) => None,
            },
        });

        match &unit.type_node {
            TypeNode::Class(class) => self.emit_class(class),
            TypeNode::Interface(interface) => self.emit_interface(interface),
        }
    }

    pub fn emit_package_footer(&mut self, _unit: &CompilationUnit) {
        // Unit text always ends with exactly one newline.
        let mut text = self.ctx.take_output();
        while text.ends_with('\n') {
            text.pop();
        }
        text.push('\n');
        self.ctx.write(&text);
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// The qualified name of the type being emitted, used as the member
    /// assignment target. Empty (with a recorded problem) outside a type.
    pub(crate) fn type_qname(&self) -> String {
        match &self.type_scope {
            Some(scope) => scope.qualified_name.clone(),
            None => {
                self.ctx.missing_child("member emitted outside a type scope");
                String::new()
            }
        }
    }

    pub(crate) fn superclass_qname(&self) -> Option<String> {
        self.type_scope
            .as_ref()
            .and_then(|scope| scope.superclass.clone())
    }

    /// Emit `{`, the statements one per line at +1 indent, then `}`.
    pub(crate) fn emit_scoped_block(&mut self, statements: &[Node]) {
        self.ctx.write("{");
        self.ctx.write_line();
        self.ctx.increase_indent();
        for statement in statements {
            self.emit_statement(statement);
        }
        self.ctx.decrease_indent();
        self.ctx.write("}");
    }

    /// Emit a node in statement position: terminate expression forms (and
    /// the statement forms that require it) with `;`, then end the line.
    pub fn emit_statement(&mut self, node: &Node) {
        self.emit(node);
        if Self::needs_semicolon(node.kind()) {
            self.ctx.write(";");
        }
        self.ctx.write_line();
    }

    fn needs_semicolon(kind: NodeKind) -> bool {
        !matches!(
            kind,
            NodeKind::Block
                | NodeKind::If
                | NodeKind::For
                | NodeKind::ForIn
                | NodeKind::ForEach
                | NodeKind::While
                | NodeKind::With
                | NodeKind::Switch
                | NodeKind::Try
                | NodeKind::LabeledStatement
        )
    }

    pub(crate) fn emit_comma_separated(&mut self, nodes: &[Node]) {
        let mut first = true;
        for node in nodes {
            if !first {
                self.ctx.write(", ");
            }
            first = false;
            self.emit(node);
        }
    }
}
