//! Expression and literal emission. Most forms map structurally; `super`
//! references and typed collection expressions are the notable rewrites.

use asjs_ast::{LanguageId, LiteralKind, Node};

use super::JsEmitter;

impl<'a> JsEmitter<'a> {
    pub(super) fn emit_identifier(&mut self, node: &Node) {
        let Node::Identifier(name) = node else {
            return;
        };
        self.ctx.write(name);
    }

    pub(super) fn emit_language_identifier(&mut self, node: &Node) {
        let Node::LanguageIdentifier(id) = node else {
            return;
        };
        match id {
            LanguageId::This => self.ctx.write("this"),
            // A bare `super` only makes sense where the call/access rules
            // rewrote it already; standing alone it degrades to the
            // superclass reference itself.
            LanguageId::Super => match self.superclass_qname() {
                Some(superclass) => self.ctx.write(&superclass),
                None => self
                    .ctx
                    .missing_child("super reference without a superclass"),
            },
            LanguageId::Void => self.ctx.write("void 0"),
            LanguageId::Rest => self.ctx.write("arguments"),
            LanguageId::AnyType => {
                self.ctx
                    .translation_gap("any-type annotation in expression position");
            }
        }
    }

    pub(super) fn emit_keyword(&mut self, node: &Node) {
        let Node::Keyword(text) = node else {
            return;
        };
        self.ctx.write(text);
    }

    pub(super) fn emit_literal(&mut self, node: &Node) {
        let Node::Literal { kind, value } = node else {
            return;
        };
        match kind {
            LiteralKind::Null => self.ctx.write("null"),
            LiteralKind::Undefined => self.ctx.write("undefined"),
            LiteralKind::String | LiteralKind::Boolean | LiteralKind::RegExp => {
                self.ctx.write(value)
            }
        }
    }

    pub(super) fn emit_numeric_literal(&mut self, node: &Node) {
        let Node::NumericLiteral(text) = node else {
            return;
        };
        self.ctx.write(text);
    }

    pub(super) fn emit_array_literal(&mut self, node: &Node) {
        let Node::ArrayLiteral(elements) = node else {
            return;
        };
        self.ctx.write("[");
        self.emit_comma_separated(elements);
        self.ctx.write("]");
    }

    pub(super) fn emit_object_literal(&mut self, node: &Node) {
        let Node::ObjectLiteral(pairs) = node else {
            return;
        };
        if pairs.is_empty() {
            self.ctx.write("{}");
            return;
        }
        self.ctx.write("{");
        self.emit_comma_separated(pairs);
        self.ctx.write("}");
    }

    pub(super) fn emit_object_literal_value_pair(&mut self, node: &Node) {
        let Node::ObjectLiteralValuePair { name, value } = node else {
            return;
        };
        self.emit(name);
        self.ctx.write(":");
        self.emit(value);
    }

    pub(super) fn emit_member_access(&mut self, node: &Node) {
        let Node::MemberAccess { object, member } = node else {
            return;
        };

        // `super.member` resolves through the superclass prototype.
        if matches!(**object, Node::LanguageIdentifier(LanguageId::Super)) {
            match self.superclass_qname() {
                Some(superclass) => {
                    self.ctx.write(&superclass);
                    self.ctx.write(".prototype.");
                    self.emit(member);
                }
                None => {
                    self.ctx
                        .missing_child("super member access without a superclass");
                }
            }
            return;
        }

        self.emit(object);
        self.ctx.write(".");
        self.emit(member);
    }

    pub(super) fn emit_dynamic_access(&mut self, node: &Node) {
        let Node::DynamicAccess { object, index } = node else {
            return;
        };
        self.emit(object);
        self.ctx.write("[");
        self.emit(index);
        self.ctx.write("]");
    }

    /// `ns::name` has no target form; emit the member name alone and record
    /// the gap.
    pub(super) fn emit_namespace_access(&mut self, node: &Node) {
        let Node::NamespaceAccess { namespace: _, name } = node else {
            return;
        };
        self.ctx
            .translation_gap("namespace-qualified access has no target equivalent");
        self.emit(name);
    }

    pub(super) fn emit_function_call(&mut self, node: &Node) {
        let Node::FunctionCall {
            target,
            arguments,
            is_new,
        } = node
        else {
            return;
        };

        if !is_new {
            // `super(...)` becomes an explicit constructor-function call.
            if matches!(**target, Node::LanguageIdentifier(LanguageId::Super)) {
                self.emit_super_constructor_call(arguments);
                return;
            }
            // `super.m(...)` calls through the prototype with `this` bound.
            if let Node::MemberAccess { object, member } = target.as_ref()
                && matches!(**object, Node::LanguageIdentifier(LanguageId::Super))
            {
                match self.superclass_qname() {
                    Some(superclass) => {
                        self.ctx.write(&superclass);
                        self.ctx.write(".prototype.");
                        self.emit(member);
                        self.ctx.write(".call(this");
                        for argument in arguments {
                            self.ctx.write(", ");
                            self.emit(argument);
                        }
                        self.ctx.write(")");
                    }
                    None => {
                        self.ctx
                            .missing_child("super method call without a superclass");
                    }
                }
                return;
            }
        }

        if *is_new {
            self.ctx.write("new ");
        }
        self.emit(target);
        self.ctx.write("(");
        self.emit_comma_separated(arguments);
        self.ctx.write(")");
    }

    /// Shared by explicit `super(...)` rewriting and the synthesized call at
    /// the top of generated constructors.
    pub(super) fn emit_super_constructor_call(&mut self, arguments: &[Node]) {
        let Some(superclass) = self.superclass_qname() else {
            self.ctx
                .missing_child("super constructor call without a superclass");
            return;
        };
        self.ctx.write(&superclass);
        self.ctx.write(".call(this");
        for argument in arguments {
            self.ctx.write(", ");
            self.emit(argument);
        }
        self.ctx.write(")");
    }

    /// Typed collection expressions (`Vector.<T>`) erase to the target's
    /// plain array type.
    pub(super) fn emit_typed_expression(&mut self, node: &Node) {
        let Node::TypedExpression { .. } = node else {
            return;
        };
        self.ctx.write("Array");
    }

    pub(super) fn emit_parenthesized(&mut self, node: &Node) {
        let Node::Parenthesized(inner) = node else {
            return;
        };
        self.ctx.write("(");
        self.emit(inner);
        self.ctx.write(")");
    }

    /// Anonymous function literal in expression position.
    pub(super) fn emit_function_object(&mut self, node: &Node) {
        let Node::FunctionObject(function) = node else {
            return;
        };
        self.ctx.write("function(");
        self.emit_parameters(&function.parameters);
        self.ctx.write(") ");
        self.emit_method_scope(function);
    }
}
