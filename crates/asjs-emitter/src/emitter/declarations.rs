//! Declaration emission: classes, interfaces, fields, methods, accessors,
//! namespaces and documentation blocks.
//!
//! Classes lower to the constructor-function idiom: the constructor is
//! assigned to the type's qualified name, methods hang off `.prototype`, and
//! accessors install through `Object.defineProperty` descriptors. The
//! source's implicit superclass construction has no target equivalent, so a
//! call into the superclass constructor is synthesized at the top of every
//! generated constructor.

use asjs_ast::{
    AccessorKind, ClassNode, FieldNode, FunctionNode, InterfaceNode, MemberNode, MetaTag,
    NamespaceNode, Node, ParameterNode,
};
use rustc_hash::FxHashSet;

use super::{JsEmitter, RUNTIME_NAMESPACE};

impl<'a> JsEmitter<'a> {
    // =========================================================================
    // Types
    // =========================================================================

    pub fn emit_class(&mut self, class: &ClassNode) {
        self.emit_documentation(class.doc_comment.as_deref(), &class.meta_tags);
        self.emit_constructor(class);
        self.ctx.write(";");
        self.ctx.write_line();

        if let Some(superclass) = self.superclass_qname() {
            self.ctx.write_line();
            self.ctx.write(&format!(
                "{RUNTIME_NAMESPACE}.inherit({}, {superclass});",
                self.type_qname()
            ));
            self.ctx.write_line();
        }

        // Accessor pairs fold into one descriptor, emitted where the first
        // half of the pair appears in declaration order.
        let mut emitted_accessors: FxHashSet<(String, bool)> = FxHashSet::default();

        for member in &class.members {
            match member {
                MemberNode::Field(field) => {
                    // Instance fields were folded into the constructor body.
                    if field.is_static() {
                        self.ctx.write_line();
                        self.emit_field(field);
                        self.ctx.write(";");
                        self.ctx.write_line();
                    }
                }
                MemberNode::Method(method) => {
                    if method.name == class.name && method.accessor.is_none() {
                        continue; // the constructor, already emitted
                    }
                    if method.accessor.is_some() {
                        let key = (method.name.clone(), method.is_static());
                        if !emitted_accessors.insert(key) {
                            continue;
                        }
                        let (getter, setter) =
                            find_accessor_pair(class, &method.name, method.is_static());
                        self.ctx.write_line();
                        self.emit_accessor_pair(&method.name, method.is_static(), getter, setter);
                        self.ctx.write(";");
                        self.ctx.write_line();
                    } else {
                        self.ctx.write_line();
                        self.emit_method(method);
                        self.ctx.write(";");
                        self.ctx.write_line();
                    }
                }
                MemberNode::Namespace(namespace) => {
                    self.ctx.write_line();
                    self.emit_namespace(namespace);
                    self.ctx.write(";");
                    self.ctx.write_line();
                }
            }
        }
    }

    /// Interfaces keep only their name at runtime: an empty constructor
    /// function other types can be checked against.
    pub fn emit_interface(&mut self, interface: &InterfaceNode) {
        self.emit_documentation(interface.doc_comment.as_deref(), &interface.meta_tags);
        self.ctx.write(&format!("{} = function() {{", self.type_qname()));
        self.ctx.write_line();
        self.ctx.write("};");
        self.ctx.write_line();
    }

    // =========================================================================
    // Constructor
    // =========================================================================

    /// Emit the generated constructor: instance-field initializers first so
    /// each instance gets its own properties, then the superclass
    /// constructor call (synthesized when the source body has none), then
    /// the explicit constructor body.
    fn emit_constructor(&mut self, class: &ClassNode) {
        let explicit = class.constructor();
        let parameters = explicit.map(|ctor| ctor.parameters.as_slice()).unwrap_or(&[]);
        let body = explicit.map(|ctor| ctor.body.as_slice()).unwrap_or(&[]);

        if let Some(ctor) = explicit {
            self.emit_method_documentation(ctor);
        }
        self.ctx.write(&format!("{} = function(", self.type_qname()));
        self.emit_parameters(parameters);
        self.ctx.write(") {");
        self.ctx.write_line();
        self.ctx.increase_indent();

        self.emit_function_block_header(parameters);

        for member in &class.members {
            if let MemberNode::Field(field) = member
                && !field.is_static()
            {
                self.emit_field_documentation(field);
                self.ctx.write(&format!("this.{} = ", field.name));
                self.emit_field_initializer(field);
                self.ctx.write(";");
                self.ctx.write_line();
            }
        }

        if class.superclass.is_some() && !has_explicit_super_call(body) {
            self.emit_super_constructor_call(&[]);
            self.ctx.write(";");
            self.ctx.write_line();
        }

        for statement in body {
            self.emit_statement(statement);
        }

        self.ctx.decrease_indent();
        self.ctx.write("}");
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// A static field becomes a property assignment on the constructor
    /// function itself.
    pub fn emit_field(&mut self, field: &FieldNode) {
        self.emit_field_documentation(field);
        self.ctx
            .write(&format!("{}.{} = ", self.type_qname(), field.name));
        self.emit_field_initializer(field);
    }

    pub fn emit_field_documentation(&mut self, field: &FieldNode) {
        self.emit_documentation(field.doc_comment.as_deref(), &field.meta_tags);
    }

    fn emit_field_initializer(&mut self, field: &FieldNode) {
        match &field.initializer {
            Some(init) => self.emit(init),
            None => self.ctx.write(default_value_for_type(&field.type_name)),
        }
    }

    pub fn emit_method(&mut self, method: &FunctionNode) {
        self.emit_method_documentation(method);
        let qname = self.type_qname();
        if method.is_static() {
            self.ctx.write(&format!("{qname}.{} = function(", method.name));
        } else {
            self.ctx
                .write(&format!("{qname}.prototype.{} = function(", method.name));
        }
        self.emit_parameters(&method.parameters);
        self.ctx.write(") ");
        self.emit_method_scope(method);
    }

    pub fn emit_method_documentation(&mut self, method: &FunctionNode) {
        self.emit_documentation(method.doc_comment.as_deref(), &method.meta_tags);
    }

    /// Emit a method scope with braces: the function block header, then the
    /// body statements.
    pub fn emit_method_scope(&mut self, method: &FunctionNode) {
        self.ctx.write("{");
        self.ctx.write_line();
        self.ctx.increase_indent();
        self.emit_function_block_header(&method.parameters);
        for statement in &method.body {
            self.emit_statement(statement);
        }
        self.ctx.decrease_indent();
        self.ctx.write("}");
    }

    /// Getters/setters have no syntactic form on the target; a pair for one
    /// property emits as a single combined property descriptor installed on
    /// the prototype (or the constructor, for statics).
    pub fn emit_accessor_pair(
        &mut self,
        name: &str,
        is_static: bool,
        getter: Option<&FunctionNode>,
        setter: Option<&FunctionNode>,
    ) {
        if let Some(getter) = getter {
            self.emit_get_accessor_documentation(getter);
        }
        if let Some(setter) = setter {
            self.emit_set_accessor_documentation(setter);
        }

        let qname = self.type_qname();
        let target = if is_static {
            qname
        } else {
            format!("{qname}.prototype")
        };
        self.ctx
            .write(&format!("Object.defineProperty({target}, \"{name}\", {{"));
        self.ctx.write_line();
        self.ctx.increase_indent();

        if let Some(getter) = getter {
            self.ctx.write("get: function() ");
            self.emit_method_scope(getter);
            if setter.is_some() {
                self.ctx.write(",");
            }
            self.ctx.write_line();
        }
        if let Some(setter) = setter {
            self.ctx.write("set: function(");
            self.emit_parameters(&setter.parameters);
            self.ctx.write(") ");
            self.emit_method_scope(setter);
            self.ctx.write_line();
        }

        self.ctx.decrease_indent();
        self.ctx.write("})");
    }

    pub fn emit_get_accessor_documentation(&mut self, getter: &FunctionNode) {
        self.emit_documentation(getter.doc_comment.as_deref(), &getter.meta_tags);
    }

    pub fn emit_set_accessor_documentation(&mut self, setter: &FunctionNode) {
        self.emit_documentation(setter.doc_comment.as_deref(), &setter.meta_tags);
    }

    /// Namespaces are structural values on the target: the declaration
    /// becomes a string property holding the namespace URI (defaulting to
    /// the qualified member name).
    pub fn emit_namespace(&mut self, namespace: &NamespaceNode) {
        let qname = self.type_qname();
        let uri = match &namespace.uri {
            Some(uri) => uri.clone(),
            None => format!("{qname}.{}", namespace.name),
        };
        self.ctx
            .write(&format!("{qname}.{} = \"{uri}\"", namespace.name));
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    /// Emit a parameter list. Rest parameters are dropped here; they are
    /// materialized from `arguments` in the function block header.
    pub fn emit_parameters(&mut self, parameters: &[ParameterNode]) {
        let mut first = true;
        for parameter in parameters {
            if parameter.rest {
                continue;
            }
            if !first {
                self.ctx.write(", ");
            }
            first = false;
            self.emit_parameter(parameter);
        }
    }

    pub fn emit_parameter(&mut self, parameter: &ParameterNode) {
        self.ctx.write(&parameter.name);
    }

    /// Emit the header lines of a function block: default-value guards and
    /// the rest-parameter slice. Default values are captured through
    /// stringify sub-emission so they can be embedded in the guard line.
    pub fn emit_function_block_header(&mut self, parameters: &[ParameterNode]) {
        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.rest {
                self.ctx.write(&format!(
                    "var {} = Array.prototype.slice.call(arguments, {index});",
                    parameter.name
                ));
                self.ctx.write_line();
                continue;
            }
            if let Some(default) = &parameter.default_value {
                let default_text = self.stringify(default);
                self.ctx
                    .write(&format!("if (arguments.length < {}) {{", index + 1));
                self.ctx.write_line();
                self.ctx.increase_indent();
                self.ctx
                    .write(&format!("{} = {default_text};", parameter.name));
                self.ctx.write_line();
                self.ctx.decrease_indent();
                self.ctx.write("}");
                self.ctx.write_line();
            }
        }
    }

    // =========================================================================
    // Documentation
    // =========================================================================

    /// Emit a documentation block when the declaration carries a doc comment
    /// or metadata tags; metadata renders inside the block.
    pub fn emit_documentation(&mut self, doc: Option<&str>, tags: &[MetaTag]) {
        if doc.is_none() && tags.is_empty() {
            return;
        }
        self.ctx.write("/**");
        self.ctx.write_line();
        if let Some(doc) = doc {
            for line in doc.lines() {
                self.ctx.write(&format!(" * {line}"));
                self.ctx.write_line();
            }
        }
        for tag in tags {
            self.ctx.write(" * ");
            self.emit_meta_tag(tag);
            self.ctx.write_line();
        }
        self.ctx.write(" */");
        self.ctx.write_line();
    }

    pub fn emit_meta_tag(&mut self, tag: &MetaTag) {
        self.ctx.write(&format!("[{}", tag.name));
        if !tag.attributes.is_empty() {
            self.ctx.write("(");
            let mut first = true;
            for (key, value) in &tag.attributes {
                if !first {
                    self.ctx.write(", ");
                }
                first = false;
                self.ctx.write(&format!("{key}=\"{value}\""));
            }
            self.ctx.write(")");
        }
        self.ctx.write("]");
    }
}

/// Default initializer text by declared type, mirroring the source
/// language's default-value rules.
fn default_value_for_type(type_name: &str) -> &'static str {
    match type_name {
        "int" | "uint" | "Number" => "0",
        "Boolean" => "false",
        _ => "null",
    }
}

fn has_explicit_super_call(body: &[Node]) -> bool {
    body.iter().any(|statement| {
        matches!(
            statement,
            Node::FunctionCall {
                target,
                is_new: false,
                ..
            } if matches!(**target, Node::LanguageIdentifier(asjs_ast::LanguageId::Super))
        )
    })
}

/// Locate both halves of an accessor pair for `name`.
fn find_accessor_pair<'c>(
    class: &'c ClassNode,
    name: &str,
    is_static: bool,
) -> (Option<&'c FunctionNode>, Option<&'c FunctionNode>) {
    let mut getter = None;
    let mut setter = None;
    for member in &class.members {
        if let MemberNode::Method(method) = member
            && method.name == name
            && method.is_static() == is_static
        {
            match method.accessor {
                Some(AccessorKind::Getter) if getter.is_none() => getter = Some(method),
                Some(AccessorKind::Setter) if setter.is_none() => setter = Some(method),
                _ => {}
            }
        }
    }
    (getter, setter)
}
