//! Statement emission. Each rule reproduces the source control-flow
//! semantics exactly; only `for each` needs real desugaring because the
//! target's iteration primitive is key-based.

use asjs_ast::{Node, VariableDecl};

use super::JsEmitter;

impl<'a> JsEmitter<'a> {
    pub(super) fn emit_block_statement(&mut self, node: &Node) {
        let Node::Block(statements) = node else {
            return;
        };
        self.emit_scoped_block(statements);
    }

    pub(super) fn emit_var_declaration(&mut self, node: &Node) {
        let Node::VarDeclList(decls) = node else {
            return;
        };
        if decls.is_empty() {
            self.ctx.missing_child("variable declaration with no bindings");
            return;
        }
        self.ctx.write("var ");
        let mut first = true;
        for decl in decls {
            if !first {
                self.ctx.write(", ");
            }
            first = false;
            self.emit_var_binding(decl);
        }
    }

    fn emit_var_binding(&mut self, decl: &VariableDecl) {
        self.ctx.write(&decl.name);
        if let Some(init) = &decl.initializer {
            self.ctx.write(" = ");
            self.emit(init);
        }
    }

    /// `if`/`else if`/`else` chains keep the chain structure the front-end
    /// built; branches are never re-associated.
    pub(super) fn emit_if(&mut self, node: &Node) {
        let Node::If {
            branches,
            else_body,
        } = node
        else {
            return;
        };
        if branches.is_empty() {
            self.ctx.missing_child("if statement with no condition branch");
            return;
        }

        let mut first = true;
        for branch in branches {
            if first {
                self.ctx.write("if (");
            } else {
                self.ctx.write(" else if (");
            }
            first = false;
            self.emit(&branch.condition);
            self.ctx.write(") ");
            self.emit_scoped_block(&branch.body);
        }
        if let Some(else_body) = else_body {
            self.ctx.write(" else ");
            self.emit_scoped_block(else_body);
        }
    }

    pub(super) fn emit_for_loop(&mut self, node: &Node) {
        let Node::For {
            init,
            condition,
            step,
            body,
        } = node
        else {
            return;
        };

        self.ctx.write("for (");
        if let Some(init) = init {
            self.emit(init);
        }
        self.ctx.write(";");
        if let Some(condition) = condition {
            self.ctx.write(" ");
            self.emit(condition);
        }
        self.ctx.write(";");
        if let Some(step) = step {
            self.ctx.write(" ");
            self.emit(step);
        }
        self.ctx.write(") ");
        self.emit_scoped_block(body);
    }

    pub(super) fn emit_for_in_loop(&mut self, node: &Node) {
        let Node::ForIn {
            iterator,
            collection,
            body,
        } = node
        else {
            return;
        };

        self.ctx.write("for (");
        self.emit(iterator);
        self.ctx.write(" in ");
        self.emit(collection);
        self.ctx.write(") ");
        self.emit_scoped_block(body);
    }

    /// `for each` has no target equivalent; desugar into a key-based loop:
    ///
    /// ```text
    /// var _a = <collection>;
    /// for (var _b in _a) {
    ///     var item = _a[_b];
    ///     ...
    /// }
    /// ```
    ///
    /// The collection capture is skipped when re-evaluating it is free of
    /// side effects.
    pub(super) fn emit_for_each_loop(&mut self, node: &Node) {
        let Node::ForEach {
            iterator,
            collection,
            body,
        } = node
        else {
            return;
        };

        let (target_name, declares_var) = match iterator.as_ref() {
            Node::VarDeclList(decls) if decls.len() == 1 => (decls[0].name.clone(), true),
            Node::Identifier(name) => (name.clone(), false),
            _ => {
                self.ctx
                    .translation_gap("unsupported for-each iterator shape");
                return;
            }
        };

        let collection_text = if collection.is_side_effect_free() {
            self.stringify(collection)
        } else {
            let temp = self.ctx.next_temp_name();
            self.ctx.write(&format!("var {temp} = "));
            self.emit(collection);
            self.ctx.write(";");
            self.ctx.write_line();
            temp
        };

        let key = self.ctx.next_temp_name();
        self.ctx
            .write(&format!("for (var {key} in {collection_text}) "));
        self.ctx.write("{");
        self.ctx.write_line();
        self.ctx.increase_indent();
        if declares_var {
            self.ctx.write("var ");
        }
        self.ctx
            .write(&format!("{target_name} = {collection_text}[{key}];"));
        self.ctx.write_line();
        for statement in body {
            self.emit_statement(statement);
        }
        self.ctx.decrease_indent();
        self.ctx.write("}");
    }

    pub(super) fn emit_while_loop(&mut self, node: &Node) {
        let Node::While { condition, body } = node else {
            return;
        };
        self.ctx.write("while (");
        self.emit(condition);
        self.ctx.write(") ");
        self.emit_scoped_block(body);
    }

    pub(super) fn emit_do_loop(&mut self, node: &Node) {
        let Node::DoWhile { body, condition } = node else {
            return;
        };
        self.ctx.write("do ");
        self.emit_scoped_block(body);
        self.ctx.write(" while (");
        self.emit(condition);
        self.ctx.write(")");
    }

    /// The target supports an equivalent dynamic-scope construct, so `with`
    /// passes through structurally.
    pub(super) fn emit_with(&mut self, node: &Node) {
        let Node::With { subject, body } = node else {
            return;
        };
        self.ctx.write("with (");
        self.emit(subject);
        self.ctx.write(") ");
        self.emit_scoped_block(body);
    }

    /// Case fallthrough is preserved; clauses emit without braces.
    pub(super) fn emit_switch(&mut self, node: &Node) {
        let Node::Switch {
            discriminant,
            cases,
        } = node
        else {
            return;
        };

        self.ctx.write("switch (");
        self.emit(discriminant);
        self.ctx.write(") {");
        self.ctx.write_line();
        self.ctx.increase_indent();
        for case in cases {
            match &case.test {
                Some(test) => {
                    self.ctx.write("case ");
                    self.emit(test);
                    self.ctx.write(":");
                }
                None => self.ctx.write("default:"),
            }
            self.ctx.write_line();
            self.ctx.increase_indent();
            for statement in &case.body {
                self.emit_statement(statement);
            }
            self.ctx.decrease_indent();
        }
        self.ctx.decrease_indent();
        self.ctx.write("}");
    }

    /// One typed catch clause; the type annotation is dropped since the
    /// target's catch parameter is untyped. Multiple catch clauses are a
    /// front-end concern and not re-validated here.
    pub(super) fn emit_try(&mut self, node: &Node) {
        let Node::Try {
            body,
            catch,
            finally_body,
        } = node
        else {
            return;
        };

        self.ctx.write("try ");
        self.emit_scoped_block(body);
        if let Some(catch) = catch {
            self.ctx.write(&format!(" catch ({}) ", catch.name));
            self.emit_scoped_block(&catch.body);
        }
        if let Some(finally_body) = finally_body {
            self.ctx.write(" finally ");
            self.emit_scoped_block(finally_body);
        }
    }

    pub(super) fn emit_throw(&mut self, node: &Node) {
        let Node::Throw(value) = node else {
            return;
        };
        self.ctx.write("throw ");
        self.emit(value);
    }

    pub(super) fn emit_return(&mut self, node: &Node) {
        let Node::Return(value) = node else {
            return;
        };
        self.ctx.write("return");
        if let Some(value) = value {
            self.ctx.write(" ");
            self.emit(value);
        }
    }

    /// The label attaches verbatim to the enclosing loop/block.
    pub(super) fn emit_label_statement(&mut self, node: &Node) {
        let Node::Labeled { label, body } = node else {
            return;
        };
        self.ctx.write(&format!("{label}: "));
        self.emit(body);
    }

    pub(super) fn emit_iteration_flow(&mut self, node: &Node) {
        let (keyword, label) = match node {
            Node::Break(label) => ("break", label),
            Node::Continue(label) => ("continue", label),
            _ => return,
        };
        self.ctx.write(keyword);
        if let Some(label) = label {
            self.ctx.write(&format!(" {label}"));
        }
    }
}
