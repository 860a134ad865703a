// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Document outline.
//!
//! Returns the types of a program with their members nested inside,
//! the way an editor's outline view presents them.

use ecow::EcoString;

use crate::ast::{
    ClassDeclaration, Declaration, InterfaceDeclaration, Member, Parameter, Program,
};
use crate::source_analysis::Position;

/// What kind of declaration a symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSymbolKind {
    Class,
    Interface,
    Field,
    Constructor,
    Method,
}

impl DocumentSymbolKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
        }
    }
}

/// One entry in the outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSymbol {
    pub name: EcoString,
    pub kind: DocumentSymbolKind,
    /// A one-line signature, e.g. `int add(int a, int b)`.
    pub detail: String,
    /// Where the declaration's name is.
    pub position: Position,
    pub children: Vec<DocumentSymbol>,
}

/// Computes the outline of `program`.
///
/// Package and import declarations are not part of the outline. A field
/// declaring several variables yields one symbol per variable.
#[must_use]
pub fn document_symbols(program: &Program) -> Vec<DocumentSymbol> {
    program
        .declarations
        .iter()
        .filter_map(|declaration| match declaration {
            Declaration::Class(class) => Some(class_symbol(class)),
            Declaration::Interface(interface) => Some(interface_symbol(interface)),
            Declaration::Package(_) | Declaration::Import(_) => None,
        })
        .collect()
}

fn class_symbol(class: &ClassDeclaration) -> DocumentSymbol {
    let mut detail = format!("class {}", class.name);
    if let Some(superclass) = &class.superclass {
        detail.push_str(" extends ");
        detail.push_str(superclass);
    }
    if !class.interfaces.is_empty() {
        detail.push_str(" implements ");
        detail.push_str(&join(&class.interfaces));
    }
    DocumentSymbol {
        name: class.name.clone(),
        kind: DocumentSymbolKind::Class,
        detail,
        position: class.position,
        children: member_symbols(&class.members),
    }
}

fn interface_symbol(interface: &InterfaceDeclaration) -> DocumentSymbol {
    let mut detail = format!("interface {}", interface.name);
    if !interface.extends.is_empty() {
        detail.push_str(" extends ");
        detail.push_str(&join(&interface.extends));
    }
    DocumentSymbol {
        name: interface.name.clone(),
        kind: DocumentSymbolKind::Interface,
        detail,
        position: interface.position,
        children: member_symbols(&interface.members),
    }
}

fn member_symbols(members: &[Member]) -> Vec<DocumentSymbol> {
    let mut symbols = Vec::new();
    for member in members {
        match member {
            Member::Field(field) => {
                for declarator in &field.declarators {
                    symbols.push(DocumentSymbol {
                        name: declarator.name.clone(),
                        kind: DocumentSymbolKind::Field,
                        detail: format!("{} {}", declarator.ty, declarator.name),
                        position: field.position,
                        children: Vec::new(),
                    });
                }
            }
            Member::Constructor(constructor) => symbols.push(DocumentSymbol {
                name: constructor.name.clone(),
                kind: DocumentSymbolKind::Constructor,
                detail: format!("{}({})", constructor.name, parameters(&constructor.parameters)),
                position: constructor.position,
                children: Vec::new(),
            }),
            Member::Method(method) => symbols.push(DocumentSymbol {
                name: method.name.clone(),
                kind: DocumentSymbolKind::Method,
                detail: format!(
                    "{} {}({})",
                    method.return_type,
                    method.name,
                    parameters(&method.parameters)
                ),
                position: method.position,
                children: Vec::new(),
            }),
            Member::Class(class) => symbols.push(class_symbol(class)),
            Member::Interface(interface) => symbols.push(interface_symbol(interface)),
        }
    }
    symbols
}

fn parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join(names: &[EcoString]) -> String {
    names
        .iter()
        .map(EcoString::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::parse_source;

    fn outline(source: &str) -> Vec<DocumentSymbol> {
        document_symbols(&parse_source(source).unwrap())
    }

    #[test]
    fn empty_program_has_no_symbols() {
        assert!(outline("").is_empty());
        assert!(outline("package a.b;\nimport java.util.List;").is_empty());
    }

    #[test]
    fn class_with_members() {
        let symbols = outline(
            "public class Point extends Shape implements Named, Movable {\n  int x, y;\n  Point(int x, int y) { }\n  double length() { return 0.0; }\n}",
        );
        assert_eq!(symbols.len(), 1);
        let class = &symbols[0];
        assert_eq!(class.name.as_str(), "Point");
        assert_eq!(class.kind, DocumentSymbolKind::Class);
        assert_eq!(
            class.detail,
            "class Point extends Shape implements Named, Movable"
        );
        assert_eq!(class.position, Position::new(1, 14));

        let children: Vec<_> = class
            .children
            .iter()
            .map(|c| (c.name.as_str(), c.kind, c.detail.as_str()))
            .collect();
        assert_eq!(
            children,
            vec![
                ("x", DocumentSymbolKind::Field, "int x"),
                ("y", DocumentSymbolKind::Field, "int y"),
                (
                    "Point",
                    DocumentSymbolKind::Constructor,
                    "Point(int x, int y)"
                ),
                ("length", DocumentSymbolKind::Method, "double length()"),
            ]
        );
    }

    #[test]
    fn field_detail_includes_name_array_suffix() {
        let symbols = outline("class T { int xs[], n; }");
        let details: Vec<_> = symbols[0]
            .children
            .iter()
            .map(|c| c.detail.as_str())
            .collect();
        assert_eq!(details, vec!["int[] xs", "int n"]);
    }

    #[test]
    fn nested_types_nest() {
        let symbols = outline(
            "class Outer {\n  static class Inner { void f() {} }\n  interface Api { String[] names(); }\n}\ninterface Top extends A, B { }",
        );
        assert_eq!(symbols.len(), 2);
        let outer = &symbols[0];
        assert_eq!(outer.children.len(), 2);
        assert_eq!(outer.children[0].kind, DocumentSymbolKind::Class);
        assert_eq!(outer.children[0].children[0].name.as_str(), "f");
        assert_eq!(outer.children[1].kind, DocumentSymbolKind::Interface);
        assert_eq!(outer.children[1].children[0].detail, "String[] names()");
        assert_eq!(symbols[1].detail, "interface Top extends A, B");
    }
}
