//! Statement emission tests: control flow, desugaring, punctuation.

use asjs_ast::{
    BinaryOp, CatchClause, ConditionalBranch, Node, SwitchCase, UnaryOp, VariableDecl,
};
use asjs_common::ProblemSink;
use asjs_emitter::JsEmitter;

fn emit_statement(node: &Node) -> String {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);
    emitter.emit_statement(node);
    emitter.ctx.take_output()
}

fn call(name: &str, args: Vec<Node>) -> Node {
    Node::call(Node::id(name), args)
}

#[test]
fn if_else_chain_structure_is_preserved() {
    let node = Node::If {
        branches: vec![
            ConditionalBranch {
                condition: Node::binary(Node::id("a"), BinaryOp::LessThan, Node::id("b")),
                body: vec![call("low", vec![])],
            },
            ConditionalBranch {
                condition: Node::binary(Node::id("a"), BinaryOp::GreaterThan, Node::id("b")),
                body: vec![call("high", vec![])],
            },
        ],
        else_body: Some(vec![call("equal", vec![])]),
    };

    assert_eq!(
        emit_statement(&node),
        "if (a < b) {\n\tlow();\n} else if (a > b) {\n\thigh();\n} else {\n\tequal();\n}\n"
    );
}

#[test]
fn for_loop_maps_structurally() {
    let node = Node::For {
        init: Some(Box::new(Node::var(
            "i",
            "int",
            Some(Node::number("0")),
        ))),
        condition: Some(Box::new(Node::binary(
            Node::id("i"),
            BinaryOp::LessThan,
            Node::number("10"),
        ))),
        step: Some(Box::new(Node::Unary {
            op: UnaryOp::PostIncrement,
            operand: Box::new(Node::id("i")),
        })),
        body: vec![call("step", vec![Node::id("i")])],
    };

    assert_eq!(
        emit_statement(&node),
        "for (var i = 0; i < 10; i++) {\n\tstep(i);\n}\n"
    );
}

#[test]
fn for_each_desugars_to_key_loop() {
    let node = Node::ForEach {
        iterator: Box::new(Node::var("item", "String", None)),
        collection: Box::new(Node::id("items")),
        body: vec![call("trace", vec![Node::id("item")])],
    };

    assert_eq!(
        emit_statement(&node),
        "for (var _a in items) {\n\tvar item = items[_a];\n\ttrace(item);\n}\n"
    );
}

#[test]
fn for_each_captures_side_effecting_collection() {
    let node = Node::ForEach {
        iterator: Box::new(Node::var("item", "String", None)),
        collection: Box::new(Node::prop(Node::this(), "items")),
        body: vec![call("trace", vec![Node::id("item")])],
    };

    assert_eq!(
        emit_statement(&node),
        "var _a = this.items;\n\
         for (var _b in _a) {\n\tvar item = _a[_b];\n\ttrace(item);\n}\n"
    );
}

#[test]
fn for_in_passes_through() {
    let node = Node::ForIn {
        iterator: Box::new(Node::var("key", "String", None)),
        collection: Box::new(Node::id("table")),
        body: vec![call("visit", vec![Node::id("key")])],
    };

    assert_eq!(
        emit_statement(&node),
        "for (var key in table) {\n\tvisit(key);\n}\n"
    );
}

#[test]
fn switch_preserves_fallthrough() {
    let node = Node::Switch {
        discriminant: Box::new(Node::id("code")),
        cases: vec![
            SwitchCase {
                test: Some(Node::number("1")),
                body: vec![],
            },
            SwitchCase {
                test: Some(Node::number("2")),
                body: vec![call("handle", vec![]), Node::Break(None)],
            },
            SwitchCase {
                test: None,
                body: vec![call("reject", vec![])],
            },
        ],
    };

    assert_eq!(
        emit_statement(&node),
        "switch (code) {\n\
         \tcase 1:\n\
         \tcase 2:\n\
         \t\thandle();\n\
         \t\tbreak;\n\
         \tdefault:\n\
         \t\treject();\n\
         }\n"
    );
}

#[test]
fn try_catch_finally_drops_catch_type_only() {
    let node = Node::Try {
        body: vec![call("risky", vec![])],
        catch: Some(CatchClause {
            name: "e".into(),
            type_name: "Error".into(),
            body: vec![call("report", vec![Node::id("e")])],
        }),
        finally_body: Some(vec![call("cleanup", vec![])]),
    };

    assert_eq!(
        emit_statement(&node),
        "try {\n\trisky();\n} catch (e) {\n\treport(e);\n} finally {\n\tcleanup();\n}\n"
    );
}

#[test]
fn do_while_terminates_with_semicolon() {
    let node = Node::DoWhile {
        body: vec![call("work", vec![])],
        condition: Box::new(Node::id("busy")),
    };

    assert_eq!(emit_statement(&node), "do {\n\twork();\n} while (busy);\n");
}

#[test]
fn while_loop_maps_structurally() {
    let node = Node::While {
        condition: Box::new(Node::id("running")),
        body: vec![call("tick", vec![])],
    };

    assert_eq!(emit_statement(&node), "while (running) {\n\ttick();\n}\n");
}

#[test]
fn with_statement_passes_through() {
    let node = Node::With {
        subject: Box::new(Node::id("config")),
        body: vec![call("load", vec![])],
    };

    assert_eq!(emit_statement(&node), "with (config) {\n\tload();\n}\n");
}

#[test]
fn label_attaches_to_enclosing_loop() {
    let node = Node::Labeled {
        label: "outer".into(),
        body: Box::new(Node::For {
            init: None,
            condition: None,
            step: None,
            body: vec![Node::Break(Some("outer".into()))],
        }),
    };

    assert_eq!(emit_statement(&node), "outer: for (;;) {\n\tbreak outer;\n}\n");
}

#[test]
fn continue_with_label() {
    assert_eq!(emit_statement(&Node::Continue(Some("scan".into()))), "continue scan;\n");
    assert_eq!(emit_statement(&Node::Break(None)), "break;\n");
}

#[test]
fn var_declaration_chains_bindings() {
    let node = Node::VarDeclList(vec![
        VariableDecl::new("a", "int").with_initializer(Node::number("1")),
        VariableDecl::new("b", "String"),
    ]);

    assert_eq!(emit_statement(&node), "var a = 1, b;\n");
}

#[test]
fn throw_and_return_statements() {
    let throw = Node::Throw(Box::new(Node::new_call(
        Node::id("Error"),
        vec![Node::string("bad state")],
    )));
    assert_eq!(emit_statement(&throw), "throw new Error(\"bad state\");\n");

    assert_eq!(emit_statement(&Node::ret(None)), "return;\n");
    assert_eq!(
        emit_statement(&Node::ret(Some(Node::boolean(true)))),
        "return true;\n"
    );
}

#[test]
fn nested_block_statement() {
    let node = Node::Block(vec![call("inner", vec![])]);
    assert_eq!(emit_statement(&node), "{\n\tinner();\n}\n");
}
