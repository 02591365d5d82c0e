//! Expression emission tests: type operator rewrites, `super` lowering,
//! parameter materialization, and sub-emission capture.

use asjs_ast::{BinaryOp, FunctionNode, Node, ParameterNode, UnaryOp};
use asjs_common::{ProblemSeverity, ProblemSink};
use asjs_emitter::JsEmitter;

fn emit_expression(node: &Node) -> String {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);
    emitter.emit(node);
    emitter.ctx.take_output()
}

#[test]
fn is_operator_becomes_runtime_call() {
    let node = Node::binary(
        Node::id("x"),
        BinaryOp::Is,
        Node::prop(Node::id("controls"), "Widget"),
    );
    let output = emit_expression(&node);

    assert_eq!(output, "as3.is(x, controls.Widget)");
    assert!(!output.contains(" is "));
}

#[test]
fn as_operator_becomes_runtime_call() {
    let node = Node::binary(
        Node::id("x"),
        BinaryOp::As,
        Node::prop(Node::id("controls"), "Widget"),
    );
    let output = emit_expression(&node);

    assert_eq!(output, "as3.as(x, controls.Widget)");
    assert!(!output.contains(" as "));
}

#[test]
fn type_operators_nest_inside_larger_expressions() {
    let node = Node::Ternary {
        condition: Box::new(Node::binary(
            Node::id("v"),
            BinaryOp::Is,
            Node::id("Sprite"),
        )),
        when_true: Box::new(Node::binary(Node::id("v"), BinaryOp::As, Node::id("Sprite"))),
        when_false: Box::new(Node::null()),
    };

    assert_eq!(
        emit_expression(&node),
        "as3.is(v, Sprite) ? as3.as(v, Sprite) : null"
    );
}

#[test]
fn super_method_call_goes_through_the_prototype() {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Child", Some("support.Base"));

    let node = Node::call(
        Node::prop(Node::super_(), "update"),
        vec![Node::id("delta")],
    );
    emitter.emit(&node);

    assert_eq!(
        emitter.ctx.take_output(),
        "support.Base.prototype.update.call(this, delta)"
    );
    assert!(problems.is_empty());
}

#[test]
fn super_member_access_goes_through_the_prototype() {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Child", Some("support.Base"));

    emitter.emit(&Node::prop(Node::super_(), "label"));

    assert_eq!(emitter.ctx.take_output(), "support.Base.prototype.label");
}

#[test]
fn super_call_without_superclass_records_an_error() {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Orphan", None);

    emitter.emit(&Node::call(Node::super_(), vec![]));

    assert_eq!(emitter.ctx.take_output(), "");
    let recorded = problems.collect();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, ProblemSeverity::Error);
}

#[test]
fn namespace_access_degrades_to_the_bare_name() {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);

    emitter.emit(&Node::NamespaceAccess {
        namespace: Box::new(Node::id("mx_internal")),
        name: Box::new(Node::id("secret")),
    });

    assert_eq!(emitter.ctx.take_output(), "secret");
    let recorded = problems.collect();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].severity, ProblemSeverity::Warning);
}

#[test]
fn typed_collection_erases_to_array() {
    let node = Node::new_call(
        Node::TypedExpression {
            collection: Box::new(Node::id("Vector")),
            type_name: "String".into(),
        },
        vec![],
    );

    assert_eq!(emit_expression(&node), "new Array()");
}

#[test]
fn stringify_leaves_the_outer_stream_untouched() {
    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);

    emitter.ctx.write("before");
    let captured = emitter.stringify(&Node::binary(
        Node::id("a"),
        BinaryOp::Add,
        Node::number("1"),
    ));
    emitter.ctx.write("after");

    assert_eq!(captured, "a + 1");
    assert_eq!(emitter.ctx.take_output(), "beforeafter");
}

#[test]
fn stringify_matches_direct_emission() {
    let node = Node::call(
        Node::prop(Node::this(), "lookup"),
        vec![Node::string("key"), Node::number("2")],
    );

    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);
    let captured = emitter.stringify(&node);

    assert_eq!(captured, emit_expression(&node));
    assert_eq!(captured, "this.lookup(\"key\", 2)");
}

#[test]
fn default_parameter_materializes_as_an_arity_guard() {
    let method = FunctionNode::new("configure").with_parameters(vec![
        ParameterNode::new("host", "String"),
        ParameterNode::new("port", "int").with_default(Node::number("8080")),
    ]);

    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Server", None);
    emitter.emit_method(&method);

    assert_eq!(
        emitter.ctx.take_output(),
        "app.Server.prototype.configure = function(host, port) {\n\
         \tif (arguments.length < 2) {\n\
         \t\tport = 8080;\n\
         \t}\n\
         }"
    );
}

#[test]
fn rest_parameter_slices_the_arguments_object() {
    let method = FunctionNode::new("log").with_parameters(vec![
        ParameterNode::new("tag", "String"),
        ParameterNode::rest("extras"),
    ]);

    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Logger", None);
    emitter.emit_method(&method);

    assert_eq!(
        emitter.ctx.take_output(),
        "app.Logger.prototype.log = function(tag) {\n\
         \tvar extras = Array.prototype.slice.call(arguments, 1);\n\
         }"
    );
}

#[test]
fn keyword_unary_operators_keep_a_separating_space() {
    let typeof_node = Node::Unary {
        op: UnaryOp::Typeof,
        operand: Box::new(Node::id("value")),
    };
    assert_eq!(emit_expression(&typeof_node), "typeof value");

    let delete_node = Node::Unary {
        op: UnaryOp::Delete,
        operand: Box::new(Node::prop(Node::id("cache"), "entry")),
    };
    assert_eq!(emit_expression(&delete_node), "delete cache.entry");

    let postfix = Node::Unary {
        op: UnaryOp::PostDecrement,
        operand: Box::new(Node::id("n")),
    };
    assert_eq!(emit_expression(&postfix), "n--");
}

#[test]
fn object_literal_pairs_are_unspaced() {
    let node = Node::ObjectLiteral(vec![
        Node::ObjectLiteralValuePair {
            name: Box::new(Node::id("a")),
            value: Box::new(Node::number("1")),
        },
        Node::ObjectLiteralValuePair {
            name: Box::new(Node::id("b")),
            value: Box::new(Node::string("two")),
        },
    ]);

    assert_eq!(emit_expression(&node), "{a:1, b:\"two\"}");
    assert_eq!(emit_expression(&Node::ObjectLiteral(vec![])), "{}");
}

#[test]
fn function_object_in_a_var_statement() {
    let function = FunctionNode::new("")
        .with_parameters(vec![ParameterNode::new("event", "Event")])
        .with_body(vec![Node::call(
            Node::prop(Node::this(), "handle"),
            vec![Node::id("event")],
        )]);
    let node = Node::var(
        "handler",
        "Function",
        Some(Node::FunctionObject(Box::new(function))),
    );

    let problems = ProblemSink::new();
    let mut emitter = JsEmitter::new(&problems);
    emitter.set_type_scope("app.Test", None);
    emitter.emit_statement(&node);

    assert_eq!(
        emitter.ctx.take_output(),
        "var handler = function(event) {\n\tthis.handle(event);\n};\n"
    );
}

#[test]
fn void_language_identifier_and_rest_alias() {
    assert_eq!(
        emit_expression(&Node::LanguageIdentifier(asjs_ast::LanguageId::Void)),
        "void 0"
    );
    assert_eq!(
        emit_expression(&Node::LanguageIdentifier(asjs_ast::LanguageId::Rest)),
        "arguments"
    );
}
