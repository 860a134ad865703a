// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for Javalite.
//!
//! One method per precedence level, each calling into the next tighter
//! level. Binary levels build left-associative chains iteratively;
//! assignment and ternary recurse on their right-hand side.

use crate::ast::{
    AssignmentOperator, BinaryOperator, Expression, Fixity, Literal, TypeRef, UnaryOperator,
};
use crate::source_analysis::{ParseError, Token, TokenKind};

use super::{ParseResult, Parser};

impl Parser {
    // ========================================================================
    // Expression Parsing
    // ========================================================================

    /// Parses any expression.
    ///
    /// Entry point for every precedence level. Runs one nesting level
    /// deeper so parenthesised and bracketed input cannot exhaust the stack.
    pub(super) fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.nested(Self::parse_ternary)
    }

    /// `condition ? a : b`, right-associative.
    fn parse_ternary(&mut self) -> ParseResult<Expression> {
        let condition = self.parse_or()?;
        if !self.match_operator("?") {
            return Ok(condition);
        }
        let then_value = self.parse_expression()?;
        self.expect_operator(":")?;
        let else_value = self.nested(Self::parse_ternary)?;
        Ok(Expression::Ternary {
            condition: Box::new(condition),
            then_value: Box::new(then_value),
            else_value: Box::new(else_value),
        })
    }

    /// Parses a left-associative chain of `operators` over `operand`.
    fn parse_binary_chain(
        &mut self,
        operators: &[&str],
        operand: fn(&mut Self) -> ParseResult<Expression>,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;
        loop {
            let token = self.current_token();
            if token.kind() != TokenKind::Operator || !operators.contains(&token.value()) {
                return Ok(left);
            }
            let Some(operator) = BinaryOperator::from_operator(token.value()) else {
                return Ok(left);
            };
            self.advance();
            let right = operand(self)?;
            left = Expression::binary(operator, left, right);
        }
    }

    fn parse_or(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["||"], Self::parse_and)
    }

    fn parse_and(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["&&"], Self::parse_bit_or)
    }

    fn parse_bit_or(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["|"], Self::parse_bit_xor)
    }

    fn parse_bit_xor(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["^"], Self::parse_bit_and)
    }

    fn parse_bit_and(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["&"], Self::parse_assignment)
    }

    /// `target op= value`, right-associative.
    fn parse_assignment(&mut self) -> ParseResult<Expression> {
        let target = self.parse_equality()?;
        let token = self.current_token();
        if token.kind() != TokenKind::Operator {
            return Ok(target);
        }
        let Some(operator) = AssignmentOperator::from_operator(token.value()) else {
            return Ok(target);
        };
        if !target.is_assignable() {
            return Err(self.error("invalid assignment target"));
        }
        self.advance();
        let value = self.nested(Self::parse_assignment)?;
        Ok(Expression::assignment(operator, target, value))
    }

    fn parse_equality(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["==", "!="], Self::parse_relational)
    }

    /// `<` `>` `<=` `>=` and `instanceof`, all at one level.
    fn parse_relational(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_shift()?;
        loop {
            if self.match_keyword("instanceof") {
                let ty = self.parse_type(false)?;
                left = Expression::InstanceOf {
                    expression: Box::new(left),
                    ty,
                };
                continue;
            }
            let token = self.current_token();
            let operator = match (token.kind(), token.value()) {
                (TokenKind::Operator, "<") => BinaryOperator::Less,
                (TokenKind::Operator, ">") => BinaryOperator::Greater,
                (TokenKind::Operator, "<=") => BinaryOperator::LessEqual,
                (TokenKind::Operator, ">=") => BinaryOperator::GreaterEqual,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_shift()?;
            left = Expression::binary(operator, left, right);
        }
    }

    fn parse_shift(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["<<", ">>", ">>>"], Self::parse_additive)
    }

    fn parse_additive(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["+", "-"], Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        self.parse_binary_chain(&["*", "/", "%"], Self::parse_unary)
    }

    /// Prefix `! - + ~ ++ --`.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let token = self.current_token();
        if token.kind() == TokenKind::Operator {
            if let Some(operator) = UnaryOperator::from_prefix(token.value()) {
                self.advance();
                let operand = self.nested(Self::parse_unary)?;
                return Ok(Expression::unary(operator, Fixity::Prefix, operand));
            }
        }
        self.parse_postfix()
    }

    /// Postfix `++` and `--`.
    fn parse_postfix(&mut self) -> ParseResult<Expression> {
        let mut expression = self.parse_access()?;
        loop {
            let operator = if self.match_operator("++") {
                UnaryOperator::Increment
            } else if self.match_operator("--") {
                UnaryOperator::Decrement
            } else {
                return Ok(expression);
            };
            expression = Expression::unary(operator, Fixity::Postfix, expression);
        }
    }

    /// Calls, member access and indexing after a primary.
    fn parse_access(&mut self) -> ParseResult<Expression> {
        let mut expression = self.parse_primary()?;
        loop {
            if self.match_delimiter(".") {
                let name = self.expect_identifier("member name after '.'")?;
                expression = if self.check_delimiter("(") {
                    Expression::MethodCall {
                        target: Some(Box::new(expression)),
                        name: name.value().into(),
                        arguments: self.parse_arguments()?,
                    }
                } else {
                    Expression::FieldAccess {
                        target: Box::new(expression),
                        name: name.value().into(),
                    }
                };
            } else if self.match_delimiter("[") {
                let index = self.parse_expression()?;
                self.expect_delimiter("]")?;
                expression = Expression::ArrayAccess {
                    array: Box::new(expression),
                    index: Box::new(index),
                };
            } else {
                return Ok(expression);
            }
        }
    }

    fn parse_primary(&mut self) -> ParseResult<Expression> {
        let token = self.current_token().clone();
        match token.kind() {
            TokenKind::Number => {
                self.advance();
                parse_number(&token).map(Expression::Literal)
            }
            TokenKind::String => {
                self.advance();
                Ok(Expression::Literal(Literal::String(token.value().into())))
            }
            TokenKind::Char => {
                self.advance();
                let mut chars = token.value().chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Expression::Literal(Literal::Char(c))),
                    _ => Err(ParseError::new(
                        token,
                        "char literal must contain exactly one character",
                    )),
                }
            }
            TokenKind::Boolean => {
                self.advance();
                Ok(Expression::Literal(Literal::Boolean(token.value() == "true")))
            }
            TokenKind::Null => {
                self.advance();
                Ok(Expression::Literal(Literal::Null))
            }
            TokenKind::Identifier => {
                self.advance();
                if self.check_delimiter("(") {
                    Ok(Expression::MethodCall {
                        target: None,
                        name: token.value().into(),
                        arguments: self.parse_arguments()?,
                    })
                } else {
                    Ok(Expression::identifier(token.value()))
                }
            }
            TokenKind::Keyword => match token.value() {
                "this" | "super" => {
                    self.advance();
                    if self.check_delimiter("(") {
                        // Explicit constructor invocation: `this(...)`, `super(...)`.
                        Ok(Expression::MethodCall {
                            target: None,
                            name: token.value().into(),
                            arguments: self.parse_arguments()?,
                        })
                    } else if token.value() == "this" {
                        Ok(Expression::This)
                    } else {
                        Ok(Expression::Super)
                    }
                }
                "new" => self.parse_creation(),
                _ => Err(self.error("expected expression")),
            },
            TokenKind::Delimiter if token.value() == "(" => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect_delimiter(")")?;
                Ok(inner)
            }
            _ => Err(self.error("expected expression")),
        }
    }

    /// `( [expr (, expr)*] )`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.expect_delimiter("(")?;
        let mut arguments = Vec::new();
        if !self.check_delimiter(")") {
            loop {
                arguments.push(self.parse_expression()?);
                if !self.match_delimiter(",") {
                    break;
                }
            }
        }
        self.expect_delimiter(")")?;
        Ok(arguments)
    }

    /// `new T(args)`, `new T[n][]`, `new T[] { ... }`
    fn parse_creation(&mut self) -> ParseResult<Expression> {
        self.expect_keyword("new")?;
        let element_type = self.parse_element_type()?;

        if self.check_delimiter("(") {
            return Ok(Expression::ObjectCreation {
                ty: element_type,
                arguments: self.parse_arguments()?,
            });
        }
        if !self.check_delimiter("[") {
            return Err(self.error("expected '(' or '['"));
        }

        let mut dimensions = Vec::new();
        while self.match_delimiter("[") {
            if self.match_delimiter("]") {
                dimensions.push(None);
            } else {
                dimensions.push(Some(self.parse_expression()?));
                self.expect_delimiter("]")?;
            }
        }

        let initializer = if self.check_delimiter("{") {
            if dimensions.iter().any(Option::is_some) {
                return Err(self.error("array initializer cannot follow sized dimensions"));
            }
            Some(self.parse_array_initializer(&element_type)?)
        } else {
            None
        };

        Ok(Expression::ArrayCreation {
            element_type,
            dimensions,
            initializer,
        })
    }

    /// `{ [elem (, elem)* [,]] }` where nested `{ ... }` are sub-arrays.
    pub(super) fn parse_array_initializer(
        &mut self,
        element_type: &TypeRef,
    ) -> ParseResult<Vec<Expression>> {
        self.nested(|p| {
            p.expect_delimiter("{")?;
            let mut elements = Vec::new();
            while !p.check_delimiter("}") {
                let element = if p.check_delimiter("{") {
                    Expression::ArrayCreation {
                        element_type: element_type.clone(),
                        dimensions: vec![None],
                        initializer: Some(p.parse_array_initializer(element_type)?),
                    }
                } else {
                    p.parse_expression()?
                };
                elements.push(element);
                if !p.match_delimiter(",") {
                    break;
                }
            }
            p.expect_delimiter("}")?;
            Ok(elements)
        })
    }
}

/// Decodes a number token: digits with an optional fraction.
fn parse_number(token: &Token) -> ParseResult<Literal> {
    let text = token.value();
    if text.contains('.') {
        return text
            .parse::<f64>()
            .map(Literal::Decimal)
            .map_err(|_| ParseError::new(token.clone(), "invalid decimal literal"));
    }
    match text.parse::<i64>() {
        Ok(value) => Ok(Literal::Integer(value)),
        Err(_) => Err(ParseError::new(
            token.clone(),
            "integer literal is out of range",
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{
        AssignmentOperator, BinaryOperator, Expression, Fixity, Literal, TypeRef, UnaryOperator,
    };
    use crate::source_analysis::parser::tests::{parse_err, parse_expr};

    fn int(value: i64) -> Expression {
        Expression::Literal(Literal::Integer(value))
    }

    fn ident(name: &str) -> Expression {
        Expression::identifier(name)
    }

    fn bin(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
        Expression::binary(operator, left, right)
    }

    #[test]
    fn parse_literals() {
        assert_eq!(parse_expr("42"), int(42));
        assert_eq!(parse_expr("2.5"), Expression::Literal(Literal::Decimal(2.5)));
        assert_eq!(
            parse_expr("\"a\\tb\""),
            Expression::Literal(Literal::String("a\tb".into()))
        );
        assert_eq!(parse_expr("'\\n'"), Expression::Literal(Literal::Char('\n')));
        assert_eq!(parse_expr("true"), Expression::Literal(Literal::Boolean(true)));
        assert_eq!(parse_expr("false"), Expression::Literal(Literal::Boolean(false)));
        assert_eq!(parse_expr("null"), Expression::Literal(Literal::Null));
        assert_eq!(
            parse_expr("9223372036854775807"),
            int(i64::MAX)
        );
    }

    #[test]
    fn parse_literal_errors() {
        assert_eq!(
            parse_err("class T { long x = 9223372036854775808; }").message,
            "integer literal is out of range"
        );
        assert_eq!(
            parse_err("class T { char c = 'ab'; }").message,
            "char literal must contain exactly one character"
        );
        assert_eq!(
            parse_err("class T { char c = ''; }").message,
            "char literal must contain exactly one character"
        );
    }

    #[test]
    fn parse_multiplicative_binds_tighter_than_additive() {
        assert_eq!(
            parse_expr("1 + 2 * 3"),
            bin(
                BinaryOperator::Add,
                int(1),
                bin(BinaryOperator::Multiply, int(2), int(3)),
            )
        );
    }

    #[test]
    fn parse_binary_chains_are_left_associative() {
        assert_eq!(
            parse_expr("a - b - c"),
            bin(
                BinaryOperator::Subtract,
                bin(BinaryOperator::Subtract, ident("a"), ident("b")),
                ident("c"),
            )
        );
        assert_eq!(
            parse_expr("a << 1 >>> 2"),
            bin(
                BinaryOperator::UnsignedShiftRight,
                bin(BinaryOperator::ShiftLeft, ident("a"), int(1)),
                int(2),
            )
        );
    }

    #[test]
    fn parse_logical_and_bitwise_levels() {
        assert_eq!(
            parse_expr("a || b && c | d ^ e & f"),
            bin(
                BinaryOperator::Or,
                ident("a"),
                bin(
                    BinaryOperator::And,
                    ident("b"),
                    bin(
                        BinaryOperator::BitOr,
                        ident("c"),
                        bin(
                            BinaryOperator::BitXor,
                            ident("d"),
                            bin(BinaryOperator::BitAnd, ident("e"), ident("f")),
                        ),
                    ),
                ),
            )
        );
    }

    #[test]
    fn parse_equality_relational_shift_order() {
        assert_eq!(
            parse_expr("a == b < c << 1"),
            bin(
                BinaryOperator::Equal,
                ident("a"),
                bin(
                    BinaryOperator::Less,
                    ident("b"),
                    bin(BinaryOperator::ShiftLeft, ident("c"), int(1)),
                ),
            )
        );
    }

    #[test]
    fn parse_assignment_is_right_associative() {
        assert_eq!(
            parse_expr("a = b += 1"),
            Expression::assignment(
                AssignmentOperator::Assign,
                ident("a"),
                Expression::assignment(
                    AssignmentOperator::Compound(BinaryOperator::Add),
                    ident("b"),
                    int(1),
                ),
            )
        );
    }

    #[test]
    fn parse_assignment_binds_tighter_than_logical_operators() {
        assert_eq!(
            parse_expr("a = b && c"),
            bin(
                BinaryOperator::And,
                Expression::assignment(AssignmentOperator::Assign, ident("a"), ident("b")),
                ident("c"),
            )
        );
    }

    #[test]
    fn parse_assignment_value_includes_equality() {
        assert_eq!(
            parse_expr("ok = a == b"),
            Expression::assignment(
                AssignmentOperator::Assign,
                ident("ok"),
                bin(BinaryOperator::Equal, ident("a"), ident("b")),
            )
        );
    }

    #[test]
    fn parse_assignment_targets() {
        assert!(matches!(
            parse_expr("this.x = 1"),
            Expression::Assignment { target, .. }
                if matches!(*target, Expression::FieldAccess { .. })
        ));
        assert!(matches!(
            parse_expr("xs[i] *= 2"),
            Expression::Assignment { target, .. }
                if matches!(*target, Expression::ArrayAccess { .. })
        ));
        assert_eq!(
            parse_err("class T { int v = a + b = c; }").message,
            "invalid assignment target"
        );
        assert_eq!(
            parse_err("class T { int v = f() = 1; }").message,
            "invalid assignment target"
        );
    }

    #[test]
    fn parse_ternary_is_right_associative() {
        assert_eq!(
            parse_expr("a ? b : c ? d : e"),
            Expression::Ternary {
                condition: Box::new(ident("a")),
                then_value: Box::new(ident("b")),
                else_value: Box::new(Expression::Ternary {
                    condition: Box::new(ident("c")),
                    then_value: Box::new(ident("d")),
                    else_value: Box::new(ident("e")),
                }),
            }
        );
    }

    #[test]
    fn parse_ternary_condition_is_logical_or() {
        let Expression::Ternary { condition, .. } = parse_expr("x > 0 || y ? 1 : 2") else {
            panic!("expected ternary");
        };
        assert!(matches!(
            *condition,
            Expression::Binary {
                operator: BinaryOperator::Or,
                ..
            }
        ));
    }

    #[test]
    fn parse_unary_prefix_and_postfix() {
        assert_eq!(
            parse_expr("-x * !y"),
            bin(
                BinaryOperator::Multiply,
                Expression::unary(UnaryOperator::Negate, Fixity::Prefix, ident("x")),
                Expression::unary(UnaryOperator::Not, Fixity::Prefix, ident("y")),
            )
        );
        assert_eq!(
            parse_expr("++i"),
            Expression::unary(UnaryOperator::Increment, Fixity::Prefix, ident("i"))
        );
        assert_eq!(
            parse_expr("~-i--"),
            Expression::unary(
                UnaryOperator::BitNot,
                Fixity::Prefix,
                Expression::unary(
                    UnaryOperator::Negate,
                    Fixity::Prefix,
                    Expression::unary(UnaryOperator::Decrement, Fixity::Postfix, ident("i")),
                ),
            )
        );
    }

    #[test]
    fn parse_instanceof() {
        assert_eq!(
            parse_expr("o instanceof String[]"),
            Expression::InstanceOf {
                expression: Box::new(ident("o")),
                ty: TypeRef::array_of(TypeRef::named("String")),
            }
        );
    }

    #[test]
    fn parse_calls_members_and_indexing() {
        assert_eq!(
            parse_expr("System.out.println(xs[0], f())"),
            Expression::MethodCall {
                target: Some(Box::new(Expression::FieldAccess {
                    target: Box::new(ident("System")),
                    name: "out".into(),
                })),
                name: "println".into(),
                arguments: vec![
                    Expression::ArrayAccess {
                        array: Box::new(ident("xs")),
                        index: Box::new(int(0)),
                    },
                    Expression::MethodCall {
                        target: None,
                        name: "f".into(),
                        arguments: vec![],
                    },
                ],
            }
        );
    }

    #[test]
    fn parse_this_and_super() {
        assert_eq!(parse_expr("this"), Expression::This);
        assert!(matches!(
            parse_expr("super.toString()"),
            Expression::MethodCall { target: Some(t), .. } if *t == Expression::Super
        ));
    }

    #[test]
    fn parse_object_creation() {
        assert_eq!(
            parse_expr("new java.util.ArrayList()"),
            Expression::ObjectCreation {
                ty: TypeRef::named("java.util.ArrayList"),
                arguments: vec![],
            }
        );
        assert!(matches!(
            parse_expr("new Point(1, 2).x"),
            Expression::FieldAccess { target, .. }
                if matches!(*target, Expression::ObjectCreation { .. })
        ));
    }

    #[test]
    fn parse_array_creation_with_mixed_dimensions() {
        assert_eq!(
            parse_expr("new int[3][]"),
            Expression::ArrayCreation {
                element_type: TypeRef::named("int"),
                dimensions: vec![Some(int(3)), None],
                initializer: None,
            }
        );
    }

    #[test]
    fn parse_array_creation_with_initializer() {
        assert_eq!(
            parse_expr("new String[] { \"a\", \"b\", }"),
            Expression::ArrayCreation {
                element_type: TypeRef::named("String"),
                dimensions: vec![None],
                initializer: Some(vec![
                    Expression::Literal(Literal::String("a".into())),
                    Expression::Literal(Literal::String("b".into())),
                ]),
            }
        );
        assert_eq!(
            parse_err("class T { Object v = new int[2] {1, 2}; }").message,
            "array initializer cannot follow sized dimensions"
        );
    }

    #[test]
    fn parse_parenthesised_expression() {
        assert_eq!(
            parse_expr("(1 + 2) * 3"),
            bin(
                BinaryOperator::Multiply,
                bin(BinaryOperator::Add, int(1), int(2)),
                int(3),
            )
        );
    }

    #[test]
    fn parse_expression_errors() {
        assert_eq!(parse_err("class T { int v = ; }").message, "expected expression");
        assert_eq!(parse_err("class T { int v = (1; }").message, "expected ')'");
        assert_eq!(parse_err("class T { Object v = new Foo; }").message, "expected '(' or '['");
        assert_eq!(
            parse_err("class T { int v = a.; }").message,
            "expected member name after '.'"
        );
    }
}
