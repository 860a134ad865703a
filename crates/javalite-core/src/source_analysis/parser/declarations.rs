// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Declaration parsing for Javalite.
//!
//! Covers the top level (`package`, `import`, classes, interfaces) and
//! class or interface bodies (fields, constructors, methods, nested types).
//! Within a body, a constructor is told apart from a method or field by
//! looking one token past its leading identifier for `(`.

use ecow::EcoString;

use crate::ast::{
    ClassDeclaration, ConstructorDeclaration, Declaration, Expression, FieldDeclaration,
    ImportDeclaration, InterfaceDeclaration, Member, MethodDeclaration, Modifier,
    PackageDeclaration, Parameter, Program, TypeRef, VariableDeclarator,
};
use crate::source_analysis::{ParseError, TokenKind};

use super::{PRIMITIVE_TYPES, ParseResult, Parser};

impl Parser {
    /// Parses declarations until end of input.
    pub(super) fn parse_program(&mut self) -> ParseResult<Program> {
        let mut declarations = Vec::new();
        while !self.is_at_end() {
            if self.match_delimiter(";") {
                continue;
            }
            declarations.push(self.parse_declaration()?);
        }
        Ok(Program::new(declarations))
    }

    fn parse_declaration(&mut self) -> ParseResult<Declaration> {
        if self.check_keyword("package") {
            return self.parse_package().map(Declaration::Package);
        }
        if self.check_keyword("import") {
            return self.parse_import().map(Declaration::Import);
        }

        let modifiers = self.parse_modifiers();
        if self.check_keyword("class") {
            self.parse_class(modifiers).map(Declaration::Class)
        } else if self.check_keyword("interface") {
            self.parse_interface(modifiers).map(Declaration::Interface)
        } else {
            Err(self.error("expected class or interface declaration"))
        }
    }

    /// `package a.b.c;`
    fn parse_package(&mut self) -> ParseResult<PackageDeclaration> {
        self.expect_keyword("package")?;
        let position = self.current_token().position();
        let name = self.parse_qualified_name("package name")?;
        self.expect_delimiter(";")?;
        Ok(PackageDeclaration { name, position })
    }

    /// `import [static] a.b.C;` or `import a.b.*;`
    fn parse_import(&mut self) -> ParseResult<ImportDeclaration> {
        self.expect_keyword("import")?;
        let is_static = self.match_keyword("static");
        let position = self.current_token().position();
        let name = self.parse_qualified_name("import name")?;
        let is_wildcard = if self.match_delimiter(".") {
            self.expect_operator("*")?;
            true
        } else {
            false
        };
        self.expect_delimiter(";")?;
        Ok(ImportDeclaration {
            name,
            is_static,
            is_wildcard,
            position,
        })
    }

    /// Consumes any run of modifier keywords.
    pub(super) fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers = Vec::new();
        while self.check_kind(TokenKind::Keyword) {
            let Some(modifier) = Modifier::from_keyword(self.current_token().value()) else {
                break;
            };
            self.advance();
            modifiers.push(modifier);
        }
        modifiers
    }

    /// `class Name [extends T] [implements A, B] { ... }`
    fn parse_class(&mut self, modifiers: Vec<Modifier>) -> ParseResult<ClassDeclaration> {
        self.expect_keyword("class")?;
        let name_token = self.expect_identifier("class name")?;
        let superclass = if self.match_keyword("extends") {
            Some(self.parse_qualified_name("superclass name")?)
        } else {
            None
        };
        let interfaces = if self.match_keyword("implements") {
            self.parse_name_list("interface name")?
        } else {
            Vec::new()
        };
        let members = self.parse_type_body(name_token.value())?;
        Ok(ClassDeclaration {
            modifiers,
            name: name_token.value().into(),
            superclass,
            interfaces,
            members,
            position: name_token.position(),
        })
    }

    /// `interface Name [extends A, B] { ... }`
    fn parse_interface(&mut self, modifiers: Vec<Modifier>) -> ParseResult<InterfaceDeclaration> {
        self.expect_keyword("interface")?;
        let name_token = self.expect_identifier("interface name")?;
        let extends = if self.match_keyword("extends") {
            self.parse_name_list("interface name")?
        } else {
            Vec::new()
        };
        let members = self.parse_type_body(name_token.value())?;
        Ok(InterfaceDeclaration {
            modifiers,
            name: name_token.value().into(),
            extends,
            members,
            position: name_token.position(),
        })
    }

    /// Comma-separated qualified names.
    fn parse_name_list(&mut self, what: &str) -> ParseResult<Vec<EcoString>> {
        let mut names = vec![self.parse_qualified_name(what)?];
        while self.match_delimiter(",") {
            names.push(self.parse_qualified_name(what)?);
        }
        Ok(names)
    }

    /// `{ member* }` for a class or interface named `owner`.
    fn parse_type_body(&mut self, owner: &str) -> ParseResult<Vec<Member>> {
        self.expect_delimiter("{")?;
        let mut members = Vec::new();
        while !self.check_delimiter("}") {
            if self.is_at_end() {
                return Err(self.error("expected '}'"));
            }
            if self.match_delimiter(";") {
                continue;
            }
            members.push(self.nested(|p| p.parse_member(owner))?);
        }
        self.expect_delimiter("}")?;
        Ok(members)
    }

    fn parse_member(&mut self, owner: &str) -> ParseResult<Member> {
        let modifiers = self.parse_modifiers();

        if self.check_keyword("class") {
            return self.parse_class(modifiers).map(Member::Class);
        }
        if self.check_keyword("interface") {
            return self.parse_interface(modifiers).map(Member::Interface);
        }

        if self.check_kind(TokenKind::Identifier) && self.peek_at(1).is_delimiter("(") {
            let name_token = self.advance();
            if name_token.value() != owner {
                return Err(ParseError::new(
                    name_token,
                    format!("constructor name must match '{owner}'"),
                ));
            }
            let parameters = self.parse_parameters()?;
            let throws = self.parse_throws()?;
            let body = self.parse_block()?;
            return Ok(Member::Constructor(ConstructorDeclaration {
                modifiers,
                name: name_token.value().into(),
                parameters,
                throws,
                body,
                position: name_token.position(),
            }));
        }

        let ty = self.parse_type(true)?;
        let name_token = self.expect_identifier("member name")?;

        if self.check_delimiter("(") {
            let parameters = self.parse_parameters()?;
            let throws = self.parse_throws()?;
            let body = if self.match_delimiter(";") {
                None
            } else {
                Some(self.parse_block()?)
            };
            return Ok(Member::Method(MethodDeclaration {
                modifiers,
                return_type: ty,
                name: name_token.value().into(),
                parameters,
                throws,
                body,
                position: name_token.position(),
            }));
        }

        if ty.is_void() {
            return Err(ParseError::new(name_token, "field cannot have type 'void'"));
        }
        let position = name_token.position();
        let first = self.parse_declarator_rest(name_token.value().into(), &ty)?;
        let declarators = self.parse_more_declarators(first, &ty)?;
        self.expect_delimiter(";")?;
        Ok(Member::Field(FieldDeclaration {
            modifiers,
            ty,
            declarators,
            position,
        }))
    }

    /// `( [param (, param)*] )`
    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        self.expect_delimiter("(")?;
        let mut parameters = Vec::new();
        if !self.check_delimiter(")") {
            loop {
                let modifiers = self.parse_modifiers();
                let ty = self.parse_type(false)?;
                let name = self.expect_identifier("parameter name")?;
                let ty = self.parse_array_suffix(ty)?;
                parameters.push(Parameter {
                    modifiers,
                    ty,
                    name: name.value().into(),
                });
                if !self.match_delimiter(",") {
                    break;
                }
            }
        }
        self.expect_delimiter(")")?;
        Ok(parameters)
    }

    /// `[throws A, B]`
    fn parse_throws(&mut self) -> ParseResult<Vec<EcoString>> {
        if self.match_keyword("throws") {
            self.parse_name_list("exception type")
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses a type. `void` is only accepted when `allow_void` is set.
    pub(super) fn parse_type(&mut self, allow_void: bool) -> ParseResult<TypeRef> {
        if self.check_keyword("void") {
            if !allow_void {
                return Err(self.error("'void' is only allowed as a return type"));
            }
            self.advance();
            return Ok(TypeRef::Void);
        }
        let element = self.parse_element_type()?;
        self.parse_array_suffix(element)
    }

    /// A primitive or qualified class name without array brackets.
    pub(super) fn parse_element_type(&mut self) -> ParseResult<TypeRef> {
        let token = self.current_token();
        if token.kind() == TokenKind::Keyword && PRIMITIVE_TYPES.contains(&token.value()) {
            let name = self.advance();
            return Ok(TypeRef::named(name.value()));
        }
        if token.kind() == TokenKind::Identifier {
            return Ok(TypeRef::Named(self.parse_qualified_name("type name")?));
        }
        Err(self.error("expected type"))
    }

    /// Wraps `ty` once per trailing `[]` pair.
    pub(super) fn parse_array_suffix(&mut self, mut ty: TypeRef) -> ParseResult<TypeRef> {
        while self.check_delimiter("[") && self.peek_at(1).is_delimiter("]") {
            self.advance();
            self.advance();
            ty = TypeRef::array_of(ty);
        }
        Ok(ty)
    }

    /// Parses the rest of a declarator after its name: `[]* [= init]`.
    pub(super) fn parse_declarator_rest(
        &mut self,
        name: EcoString,
        ty: &TypeRef,
    ) -> ParseResult<VariableDeclarator> {
        let ty = self.parse_array_suffix(ty.clone())?;
        let initializer = if self.match_operator("=") {
            Some(self.parse_variable_initializer(&ty)?)
        } else {
            None
        };
        Ok(VariableDeclarator {
            name,
            ty,
            initializer,
        })
    }

    /// Parses `, name [= init]` repeatedly after the first declarator.
    pub(super) fn parse_more_declarators(
        &mut self,
        first: VariableDeclarator,
        ty: &TypeRef,
    ) -> ParseResult<Vec<VariableDeclarator>> {
        let mut declarators = vec![first];
        while self.match_delimiter(",") {
            let name = self.expect_identifier("variable name")?;
            declarators.push(self.parse_declarator_rest(name.value().into(), ty)?);
        }
        Ok(declarators)
    }

    /// An initializer, which for array types may be a bare `{ ... }`.
    fn parse_variable_initializer(&mut self, ty: &TypeRef) -> ParseResult<Expression> {
        if self.check_delimiter("{") {
            let element_type = match ty {
                TypeRef::Array(element) => (**element).clone(),
                other => other.clone(),
            };
            let initializer = self.parse_array_initializer(&element_type)?;
            return Ok(Expression::ArrayCreation {
                element_type,
                dimensions: vec![None],
                initializer: Some(initializer),
            });
        }
        self.parse_expression()
    }
}
