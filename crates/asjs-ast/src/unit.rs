//! Compilation units and qualified names.

use std::path::PathBuf;

use crate::node::{ClassNode, InterfaceNode};

/// A dotted qualified name: `behaviors.EchoBehavior`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName(String);

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The package portion, empty for top-level types.
    pub fn package(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[..dot],
            None => "",
        }
    }

    /// The unqualified type name.
    pub fn local_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Output path relative to the base path: dots become path separators,
    /// plus the target extension.
    pub fn to_output_path(&self, extension: &str) -> PathBuf {
        let mut path: PathBuf = self.0.split('.').collect();
        path.set_extension(extension);
        path
    }
}

impl std::fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The single top-level type a unit owns.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Class(ClassNode),
    Interface(InterfaceNode),
}

impl TypeNode {
    pub fn name(&self) -> &str {
        match self {
            TypeNode::Class(class) => &class.name,
            TypeNode::Interface(interface) => &interface.name,
        }
    }
}

/// One logical source file after parsing and resolution.
///
/// Units arrive as an ordered collection; that order is preserved through
/// emission and determines concatenation order in bundle mode.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    pub qualified_name: QualifiedName,
    pub source_file: String,
    pub type_node: TypeNode,
}

impl CompilationUnit {
    pub fn new(qualified_name: impl Into<String>, type_node: TypeNode) -> Self {
        let qualified_name = QualifiedName::new(qualified_name);
        Self {
            source_file: format!("{}.as", qualified_name.local_name()),
            qualified_name,
            type_node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_splits_package_and_local() {
        let name = QualifiedName::new("behaviors.EchoBehavior");
        assert_eq!(name.package(), "behaviors");
        assert_eq!(name.local_name(), "EchoBehavior");

        let top = QualifiedName::new("Main");
        assert_eq!(top.package(), "");
        assert_eq!(top.local_name(), "Main");
    }

    #[test]
    fn output_path_replaces_dots() {
        let name = QualifiedName::new("a.b.Foo");
        assert_eq!(name.to_output_path("js"), PathBuf::from("a/b/Foo.js"));
    }

    #[test]
    fn unit_defaults_source_file_from_local_name() {
        let unit = CompilationUnit::new(
            "mediators.LabsMediator",
            TypeNode::Class(ClassNode::new("LabsMediator")),
        );
        assert_eq!(unit.source_file, "LabsMediator.as");
    }
}
