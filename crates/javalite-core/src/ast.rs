// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Javalite.
//!
//! The AST is a closed set of sum types: every node kind is one enum case,
//! and code that depends on the kind matches exhaustively. Nodes are built
//! whole by the parser and never mutated afterwards.
//!
//! Declarations and members carry the [`Position`] of their name so the
//! outline and editor navigation can point at them. Statements and
//! expressions carry no positions.
//!
//! # Example
//!
//! ```
//! use javalite_core::ast::{Declaration, Member, Statement};
//! use javalite_core::source_analysis::parse_source;
//!
//! let program = parse_source("class Foo { void bar() { return; } }").unwrap();
//! let Declaration::Class(class) = &program.declarations[0] else { panic!() };
//! let Member::Method(method) = &class.members[0] else { panic!() };
//! assert_eq!(method.name, "bar");
//! assert_eq!(
//!     method.body.as_ref().unwrap().statements,
//!     vec![Statement::Return(None)]
//! );
//! ```

use std::fmt;

use ecow::EcoString;

use crate::source_analysis::Position;

/// A parsed compilation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl Program {
    /// Creates a program from its declarations.
    #[must_use]
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Iterates over the top-level class declarations.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDeclaration> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Class(class) => Some(class),
            _ => None,
        })
    }
}

/// A top-level declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `package a.b.c;`
    Package(PackageDeclaration),
    /// `import a.b.C;`, `import static a.b.C.d;`, `import a.b.*;`
    Import(ImportDeclaration),
    /// `class Foo extends Bar implements Baz { ... }`
    Class(ClassDeclaration),
    /// `interface Foo extends Bar { ... }`
    Interface(InterfaceDeclaration),
}

impl Declaration {
    /// The position of the declaration's name.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Package(decl) => decl.position,
            Self::Import(decl) => decl.position,
            Self::Class(decl) => decl.position,
            Self::Interface(decl) => decl.position,
        }
    }
}

/// `package a.b.c;`
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDeclaration {
    /// Dotted package name.
    pub name: EcoString,
    pub position: Position,
}

/// An import declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    /// Dotted name, without a trailing `.*`.
    pub name: EcoString,
    /// `import static ...`
    pub is_static: bool,
    /// `import a.b.*;`
    pub is_wildcard: bool,
    pub position: Position,
}

/// A class declaration, top-level or nested.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: EcoString,
    /// The `extends` clause.
    pub superclass: Option<EcoString>,
    /// The `implements` clause.
    pub interfaces: Vec<EcoString>,
    pub members: Vec<Member>,
    pub position: Position,
}

/// An interface declaration, top-level or nested.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: EcoString,
    /// The `extends` clause.
    pub extends: Vec<EcoString>,
    pub members: Vec<Member>,
    pub position: Position,
}

/// A class or interface body member.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(FieldDeclaration),
    Constructor(ConstructorDeclaration),
    Method(MethodDeclaration),
    /// A nested class.
    Class(ClassDeclaration),
    /// A nested interface.
    Interface(InterfaceDeclaration),
}

impl Member {
    /// The position of the member's name (first declarator for fields).
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Field(field) => field.position,
            Self::Constructor(ctor) => ctor.position,
            Self::Method(method) => method.position,
            Self::Class(class) => class.position,
            Self::Interface(interface) => interface.position,
        }
    }
}

/// `private int x = 1, y;`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDeclaration {
    pub modifiers: Vec<Modifier>,
    /// The type before the names; see [`VariableDeclarator::ty`].
    pub ty: TypeRef,
    pub declarators: Vec<VariableDeclarator>,
    pub position: Position,
}

/// `public Foo(int x) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDeclaration {
    pub modifiers: Vec<Modifier>,
    pub name: EcoString,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<EcoString>,
    pub body: Block,
    pub position: Position,
}

/// A method. Abstract and interface methods have no body.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDeclaration {
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeRef,
    pub name: EcoString,
    pub parameters: Vec<Parameter>,
    pub throws: Vec<EcoString>,
    pub body: Option<Block>,
    pub position: Position,
}

/// A formal parameter: `final int[] xs`
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub modifiers: Vec<Modifier>,
    pub ty: TypeRef,
    pub name: EcoString,
}

/// Declaration modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
    Synchronized,
    Native,
    Transient,
    Volatile,
}

impl Modifier {
    /// Maps a keyword to its modifier.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "public" => Self::Public,
            "private" => Self::Private,
            "protected" => Self::Protected,
            "static" => Self::Static,
            "final" => Self::Final,
            "abstract" => Self::Abstract,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            _ => return None,
        })
    }

    /// The keyword spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// `void`, only valid as a method return type.
    Void,
    /// A primitive or (possibly dotted) class name: `int`, `String`, `java.util.List`
    Named(EcoString),
    /// The array-type wrapper: `T[]`
    Array(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named type.
    #[must_use]
    pub fn named(name: impl Into<EcoString>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `element` in one array dimension.
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns `true` for `void`.
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => f.write_str("void"),
            Self::Named(name) => f.write_str(name),
            Self::Array(element) => write!(f, "{element}[]"),
        }
    }
}

/// A `{ ... }` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    /// Creates a block from its statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// One name in a variable or field declaration: `x = 1` in `int x = 1, y;`
///
/// `ty` is the declarator's own type: the declaration's type plus any
/// brackets after the name, so `xs` in `int xs[], n;` is `int[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub name: EcoString,
    pub ty: TypeRef,
    pub initializer: Option<Expression>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If {
        condition: Expression,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expression,
        body: Box<Statement>,
    },
    /// `for (init; condition; update) body`
    For {
        init: Vec<Statement>,
        condition: Option<Expression>,
        update: Vec<Expression>,
        body: Box<Statement>,
    },
    /// `for (T name : iterable) body`
    ForEach {
        ty: TypeRef,
        name: EcoString,
        iterable: Expression,
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
        condition: Expression,
    },
    Switch {
        selector: Expression,
        cases: Vec<SwitchCase>,
    },
    Try {
        body: Block,
        catches: Vec<CatchClause>,
        finally: Option<Block>,
    },
    /// `label: statement`, the target of a labelled `break` or `continue`.
    Labeled {
        label: EcoString,
        body: Box<Statement>,
    },
    Break(Option<EcoString>),
    Continue(Option<EcoString>),
    Return(Option<Expression>),
    Throw(Expression),
    /// An expression followed by `;`.
    Expression(Expression),
    /// A local variable declaration: `final int x = 1, y;`
    VariableDeclaration {
        modifiers: Vec<Modifier>,
        ty: TypeRef,
        declarators: Vec<VariableDeclarator>,
    },
    /// A lone `;`.
    Empty,
}

/// One `case`/`default` arm of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// `None` for `default:`.
    pub label: Option<Expression>,
    pub body: Vec<Statement>,
}

/// `catch (T name) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub ty: TypeRef,
    pub name: EcoString,
    pub body: Block,
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Assignment {
        operator: AssignmentOperator,
        target: Box<Expression>,
        value: Box<Expression>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOperator,
        fixity: Fixity,
        operand: Box<Expression>,
    },
    /// `condition ? then : otherwise`
    Ternary {
        condition: Box<Expression>,
        then_value: Box<Expression>,
        else_value: Box<Expression>,
    },
    /// `expr instanceof T`
    InstanceOf {
        expression: Box<Expression>,
        ty: TypeRef,
    },
    Literal(Literal),
    Identifier(EcoString),
    /// `target.name(args)`, or `name(args)` with no target.
    MethodCall {
        target: Option<Box<Expression>>,
        name: EcoString,
        arguments: Vec<Expression>,
    },
    /// `target.name`
    FieldAccess {
        target: Box<Expression>,
        name: EcoString,
    },
    /// `array[index]`
    ArrayAccess {
        array: Box<Expression>,
        index: Box<Expression>,
    },
    /// `new T[n][]` or `new T[] { a, b }`
    ArrayCreation {
        element_type: TypeRef,
        /// One entry per `[]`; `None` for an empty dimension.
        dimensions: Vec<Option<Expression>>,
        initializer: Option<Vec<Expression>>,
    },
    /// `new T(args)`
    ObjectCreation {
        ty: TypeRef,
        arguments: Vec<Expression>,
    },
    This,
    Super,
}

impl Expression {
    /// Creates a binary expression.
    #[must_use]
    pub fn binary(operator: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates an assignment.
    #[must_use]
    pub fn assignment(operator: AssignmentOperator, target: Self, value: Self) -> Self {
        Self::Assignment {
            operator,
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(operator: UnaryOperator, fixity: Fixity, operand: Self) -> Self {
        Self::Unary {
            operator,
            fixity,
            operand: Box::new(operand),
        }
    }

    /// Creates an identifier reference.
    #[must_use]
    pub fn identifier(name: impl Into<EcoString>) -> Self {
        Self::Identifier(name.into())
    }

    /// Returns `true` if this expression may appear on the left of `=`.
    #[must_use]
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            Self::Identifier(_) | Self::FieldAccess { .. } | Self::ArrayAccess { .. }
        )
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Decimal(f64),
    String(EcoString),
    Char(char),
    Boolean(bool),
    Null,
}

/// Binary operators, including the logical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    BitOr,
    BitXor,
    BitAnd,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    ShiftLeft,
    ShiftRight,
    UnsignedShiftRight,
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl BinaryOperator {
    /// Maps an operator token to its binary operator.
    #[must_use]
    pub fn from_operator(op: &str) -> Option<Self> {
        Some(match op {
            "||" => Self::Or,
            "&&" => Self::And,
            "|" => Self::BitOr,
            "^" => Self::BitXor,
            "&" => Self::BitAnd,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            "<" => Self::Less,
            ">" => Self::Greater,
            "<=" => Self::LessEqual,
            ">=" => Self::GreaterEqual,
            "<<" => Self::ShiftLeft,
            ">>" => Self::ShiftRight,
            ">>>" => Self::UnsignedShiftRight,
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" => Self::Multiply,
            "/" => Self::Divide,
            "%" => Self::Remainder,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::UnsignedShiftRight => ">>>",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `=` and the compound assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    /// `op=`, e.g. `+=` or `>>>=`.
    Compound(BinaryOperator),
}

impl AssignmentOperator {
    /// Maps an operator token to its assignment operator.
    #[must_use]
    pub fn from_operator(op: &str) -> Option<Self> {
        if op == "=" {
            return Some(Self::Assign);
        }
        let binary = op.strip_suffix('=')?;
        match BinaryOperator::from_operator(binary)? {
            binary @ (BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Remainder
            | BinaryOperator::BitAnd
            | BinaryOperator::BitOr
            | BinaryOperator::BitXor
            | BinaryOperator::ShiftLeft
            | BinaryOperator::ShiftRight
            | BinaryOperator::UnsignedShiftRight) => Some(Self::Compound(binary)),
            _ => None,
        }
    }
}

impl fmt::Display for AssignmentOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign => f.write_str("="),
            Self::Compound(op) => write!(f, "{op}="),
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `!`
    Not,
    /// `-`
    Negate,
    /// `+`
    Plus,
    /// `~`
    BitNot,
    /// `++`
    Increment,
    /// `--`
    Decrement,
}

impl UnaryOperator {
    /// Maps a prefix operator token to its unary operator.
    #[must_use]
    pub fn from_prefix(op: &str) -> Option<Self> {
        Some(match op {
            "!" => Self::Not,
            "-" => Self::Negate,
            "+" => Self::Plus,
            "~" => Self::BitNot,
            "++" => Self::Increment,
            "--" => Self::Decrement,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Negate => "-",
            Self::Plus => "+",
            Self::BitNot => "~",
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }
}

/// Whether a unary operator precedes or follows its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Postfix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_ref_display() {
        assert_eq!(TypeRef::Void.to_string(), "void");
        assert_eq!(TypeRef::named("int").to_string(), "int");
        let matrix = TypeRef::array_of(TypeRef::array_of(TypeRef::named("double")));
        assert_eq!(matrix.to_string(), "double[][]");
    }

    #[test]
    fn modifier_keywords_round_trip() {
        for word in ["public", "private", "static", "final", "volatile"] {
            let modifier = Modifier::from_keyword(word).expect("modifier keyword");
            assert_eq!(modifier.as_str(), word);
        }
        assert_eq!(Modifier::from_keyword("class"), None);
    }

    #[test]
    fn assignment_operators() {
        assert_eq!(
            AssignmentOperator::from_operator("="),
            Some(AssignmentOperator::Assign)
        );
        assert_eq!(
            AssignmentOperator::from_operator(">>>="),
            Some(AssignmentOperator::Compound(
                BinaryOperator::UnsignedShiftRight
            ))
        );
        // Comparison operators end in `=` but do not assign.
        assert_eq!(AssignmentOperator::from_operator("=="), None);
        assert_eq!(AssignmentOperator::from_operator("<="), None);
        assert_eq!(AssignmentOperator::from_operator("!="), None);
        assert_eq!(
            AssignmentOperator::Compound(BinaryOperator::Add).to_string(),
            "+="
        );
    }

    #[test]
    fn assignable_expressions() {
        assert!(Expression::identifier("x").is_assignable());
        let access = Expression::ArrayAccess {
            array: Box::new(Expression::identifier("a")),
            index: Box::new(Expression::Literal(Literal::Integer(0))),
        };
        assert!(access.is_assignable());
        assert!(!Expression::This.is_assignable());
        assert!(!Expression::Literal(Literal::Null).is_assignable());
    }

    #[test]
    fn program_classes_skips_other_declarations() {
        let program = Program::new(vec![
            Declaration::Package(PackageDeclaration {
                name: "a.b".into(),
                position: Position::new(1, 9),
            }),
            Declaration::Class(ClassDeclaration {
                modifiers: vec![],
                name: "A".into(),
                superclass: None,
                interfaces: vec![],
                members: vec![],
                position: Position::new(2, 7),
            }),
        ]);
        let names: Vec<_> = program.classes().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
        assert_eq!(program.declarations[1].position(), Position::new(2, 7));
    }
}
