//! Operator emission.
//!
//! Binary operators map 1:1 onto the target except `is` and `as`, which have
//! no infix form there and are rewritten as runtime calls.

use asjs_ast::{BinaryOp, Node};

use super::{JsEmitter, RUNTIME_NAMESPACE};

impl<'a> JsEmitter<'a> {
    pub(super) fn emit_unary_operator(&mut self, node: &Node) {
        let Node::Unary { op, operand } = node else {
            return;
        };
        if op.is_postfix() {
            self.emit(operand);
            self.ctx.write(op.as_str());
            return;
        }
        self.ctx.write(op.as_str());
        if op.is_keyword() {
            self.ctx.write(" ");
        }
        self.emit(operand);
    }

    pub(super) fn emit_binary_operator(&mut self, node: &Node) {
        let Node::Binary { op, left, right } = node else {
            return;
        };
        match op {
            BinaryOp::Is => self.emit_is_operator(left, right),
            BinaryOp::As => self.emit_as_operator(left, right),
            _ => {
                let Some(text) = op.infix_str() else {
                    return;
                };
                self.emit(left);
                self.ctx.write(" ");
                self.ctx.write(text);
                self.ctx.write(" ");
                self.emit(right);
            }
        }
    }

    /// `value is Type` -> `as3.is(value, Type)`: a runtime instanceof-style
    /// check that also understands interfaces.
    pub(super) fn emit_is_operator(&mut self, left: &Node, right: &Node) {
        self.emit_runtime_binary_call("is", left, right);
    }

    /// `value as Type` -> `as3.as(value, Type)`: a safe cast that yields the
    /// value on success and `null` on mismatch.
    pub(super) fn emit_as_operator(&mut self, left: &Node, right: &Node) {
        self.emit_runtime_binary_call("as", left, right);
    }

    fn emit_runtime_binary_call(&mut self, function: &str, left: &Node, right: &Node) {
        self.ctx.write(RUNTIME_NAMESPACE);
        self.ctx.write(".");
        self.ctx.write(function);
        self.ctx.write("(");
        self.emit(left);
        self.ctx.write(", ");
        self.emit(right);
        self.ctx.write(")");
    }

    pub(super) fn emit_ternary_operator(&mut self, node: &Node) {
        let Node::Ternary {
            condition,
            when_true,
            when_false,
        } = node
        else {
            return;
        };
        self.emit(condition);
        self.ctx.write(" ? ");
        self.emit(when_true);
        self.ctx.write(" : ");
        self.emit(when_false);
    }
}
