// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement parsing for Javalite.
//!
//! Dispatch is keyword-driven, with two lookahead heuristics for the cases
//! Java leaves ambiguous:
//!
//! - A statement starting with a plain identifier is a local variable
//!   declaration when the identifier is followed by optional `[]` pairs and
//!   another identifier (`Foo x`, `Foo[] xs`). Qualified type names such as
//!   `java.util.List xs` are not recognised and parse as expressions.
//! - A `for` header is a for-each loop when an optional `final`, a type,
//!   optional `[]` pairs and a name are followed by `:`.

use crate::ast::{Block, CatchClause, Expression, Statement, SwitchCase};
use crate::source_analysis::TokenKind;

use super::{PRIMITIVE_TYPES, ParseResult, Parser};

impl Parser {
    /// `{ statement* }`
    pub(super) fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect_delimiter("{")?;
        let mut statements = Vec::new();
        while !self.check_delimiter("}") {
            if self.is_at_end() {
                return Err(self.error("expected '}'"));
            }
            statements.push(self.parse_statement()?);
        }
        self.expect_delimiter("}")?;
        Ok(Block::new(statements))
    }

    /// Parses any statement.
    pub(super) fn parse_statement(&mut self) -> ParseResult<Statement> {
        self.nested(Self::parse_statement_inner)
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Statement> {
        if self.check_delimiter("{") {
            return self.parse_block().map(Statement::Block);
        }
        if self.match_delimiter(";") {
            return Ok(Statement::Empty);
        }

        if self.check_kind(TokenKind::Keyword) {
            match self.current_token().value() {
                "if" => return self.parse_if(),
                "while" => return self.parse_while(),
                "for" => return self.parse_for(),
                "do" => return self.parse_do_while(),
                "switch" => return self.parse_switch(),
                "try" => return self.parse_try(),
                "break" => {
                    self.advance();
                    let label = self.parse_optional_label();
                    self.expect_delimiter(";")?;
                    return Ok(Statement::Break(label));
                }
                "continue" => {
                    self.advance();
                    let label = self.parse_optional_label();
                    self.expect_delimiter(";")?;
                    return Ok(Statement::Continue(label));
                }
                "return" => {
                    self.advance();
                    let value = if self.check_delimiter(";") {
                        None
                    } else {
                        Some(self.parse_expression()?)
                    };
                    self.expect_delimiter(";")?;
                    return Ok(Statement::Return(value));
                }
                "throw" => {
                    self.advance();
                    let value = self.parse_expression()?;
                    self.expect_delimiter(";")?;
                    return Ok(Statement::Throw(value));
                }
                _ => {}
            }
        }

        if self.check_kind(TokenKind::Identifier) && self.peek_at(1).is_operator(":") {
            let label = self.advance();
            self.advance(); // :
            let body = self.parse_statement()?;
            return Ok(Statement::Labeled {
                label: label.value().into(),
                body: Box::new(body),
            });
        }

        if self.is_at_local_variable_declaration() {
            let declaration = self.parse_local_variable_declaration()?;
            self.expect_delimiter(";")?;
            return Ok(declaration);
        }

        let expression = self.parse_expression()?;
        self.expect_delimiter(";")?;
        Ok(Statement::Expression(expression))
    }

    fn parse_optional_label(&mut self) -> Option<ecow::EcoString> {
        self.check_kind(TokenKind::Identifier)
            .then(|| self.advance().value().into())
    }

    /// Returns `true` if a local variable declaration starts here.
    fn is_at_local_variable_declaration(&self) -> bool {
        let token = self.current_token();
        if token.is_keyword("final") {
            return true;
        }
        if token.kind() == TokenKind::Keyword {
            return PRIMITIVE_TYPES.contains(&token.value());
        }
        token.kind() == TokenKind::Identifier
            && self.peek_at(self.skip_brackets(1)).kind() == TokenKind::Identifier
    }

    /// Returns the offset just past any `[]` pairs starting at `offset`.
    fn skip_brackets(&self, mut offset: usize) -> usize {
        while self.peek_at(offset).is_delimiter("[") && self.peek_at(offset + 1).is_delimiter("]")
        {
            offset += 2;
        }
        offset
    }

    /// `[final] Type name [= init] (, name [= init])*`, without the `;`.
    fn parse_local_variable_declaration(&mut self) -> ParseResult<Statement> {
        let modifiers = self.parse_modifiers();
        let ty = self.parse_type(false)?;
        let name = self.expect_identifier("variable name")?;
        let first = self.parse_declarator_rest(name.value().into(), &ty)?;
        let declarators = self.parse_more_declarators(first, &ty)?;
        Ok(Statement::VariableDeclaration {
            modifiers,
            ty,
            declarators,
        })
    }

    /// `( expr )`
    fn parse_condition(&mut self) -> ParseResult<Expression> {
        self.expect_delimiter("(")?;
        let condition = self.parse_expression()?;
        self.expect_delimiter(")")?;
        Ok(condition)
    }

    fn parse_if(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("if")?;
        let condition = self.parse_condition()?;
        let then_branch = Box::new(self.parse_statement()?);
        let else_branch = if self.match_keyword("else") {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn parse_while(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("while")?;
        let condition = self.parse_condition()?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::While { condition, body })
    }

    fn parse_do_while(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("do")?;
        let body = Box::new(self.parse_statement()?);
        self.expect_keyword("while")?;
        let condition = self.parse_condition()?;
        self.expect_delimiter(";")?;
        Ok(Statement::DoWhile { body, condition })
    }

    fn parse_for(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("for")?;
        self.expect_delimiter("(")?;
        if self.is_at_for_each() {
            return self.parse_for_each_rest();
        }

        let init = if self.check_delimiter(";") {
            Vec::new()
        } else if self.is_at_local_variable_declaration() {
            vec![self.parse_local_variable_declaration()?]
        } else {
            self.parse_expression_list()?
                .into_iter()
                .map(Statement::Expression)
                .collect()
        };
        self.expect_delimiter(";")?;

        let condition = if self.check_delimiter(";") {
            None
        } else {
            Some(self.parse_expression()?)
        };
        self.expect_delimiter(";")?;

        let update = if self.check_delimiter(")") {
            Vec::new()
        } else {
            self.parse_expression_list()?
        };
        self.expect_delimiter(")")?;

        let body = Box::new(self.parse_statement()?);
        Ok(Statement::For {
            init,
            condition,
            update,
            body,
        })
    }

    /// Peeks past `[final] Type []* name` for a `:`.
    fn is_at_for_each(&self) -> bool {
        let mut offset = 0;
        if self.peek_at(offset).is_keyword("final") {
            offset += 1;
        }
        let ty = self.peek_at(offset);
        let is_type = ty.kind() == TokenKind::Identifier
            || (ty.kind() == TokenKind::Keyword && PRIMITIVE_TYPES.contains(&ty.value()));
        if !is_type {
            return false;
        }
        offset = self.skip_brackets(offset + 1);
        self.peek_at(offset).kind() == TokenKind::Identifier
            && self.peek_at(offset + 1).is_operator(":")
    }

    /// The rest of `for ([final] T name : iterable) body` after `(`.
    fn parse_for_each_rest(&mut self) -> ParseResult<Statement> {
        self.parse_modifiers();
        let ty = self.parse_type(false)?;
        let name = self.expect_identifier("loop variable name")?;
        self.expect_operator(":")?;
        let iterable = self.parse_expression()?;
        self.expect_delimiter(")")?;
        let body = Box::new(self.parse_statement()?);
        Ok(Statement::ForEach {
            ty,
            name: name.value().into(),
            iterable,
            body,
        })
    }

    fn parse_expression_list(&mut self) -> ParseResult<Vec<Expression>> {
        let mut expressions = vec![self.parse_expression()?];
        while self.match_delimiter(",") {
            expressions.push(self.parse_expression()?);
        }
        Ok(expressions)
    }

    fn parse_switch(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("switch")?;
        let selector = self.parse_condition()?;
        self.expect_delimiter("{")?;
        let mut cases = Vec::new();
        while !self.match_delimiter("}") {
            let label = if self.match_keyword("case") {
                Some(self.parse_expression()?)
            } else if self.match_keyword("default") {
                None
            } else {
                return Err(self.error("expected 'case', 'default' or '}'"));
            };
            self.expect_operator(":")?;

            let mut body = Vec::new();
            while !(self.check_keyword("case")
                || self.check_keyword("default")
                || self.check_delimiter("}"))
            {
                if self.is_at_end() {
                    return Err(self.error("expected '}'"));
                }
                body.push(self.parse_statement()?);
            }
            cases.push(SwitchCase { label, body });
        }
        Ok(Statement::Switch { selector, cases })
    }

    fn parse_try(&mut self) -> ParseResult<Statement> {
        self.expect_keyword("try")?;
        let body = self.parse_block()?;

        let mut catches = Vec::new();
        while self.match_keyword("catch") {
            self.expect_delimiter("(")?;
            self.parse_modifiers();
            let ty = self.parse_type(false)?;
            let name = self.expect_identifier("exception variable name")?;
            self.expect_delimiter(")")?;
            let catch_body = self.parse_block()?;
            catches.push(CatchClause {
                ty,
                name: name.value().into(),
                body: catch_body,
            });
        }

        let finally = if self.match_keyword("finally") {
            Some(self.parse_block()?)
        } else {
            None
        };

        if catches.is_empty() && finally.is_none() {
            return Err(self.error("expected 'catch' or 'finally'"));
        }
        Ok(Statement::Try {
            body,
            catches,
            finally,
        })
    }
}
