//! Operator-precedence resolver for infix expressions.
//!
//! Expression parsing happens in two stages:
//!
//! 1. The grammar engine scans left to right and collects a flat sequence of [`Item`]s: fully parsed
//!    unary operands alternating with infix operators. `instanceof` is followed by a [`Operand::Type`];
//!    the conditional continuation `? middle :` is one [`InfixOp::Conditional`] carrying its middle
//!    expression.
//! 2. [`fold`] turns that sequence into a tree in a single linear pass with an operator stack,
//!    consulting the precedence table in `jparse_core::lang::operators`.
//!
//! ## Notes
//! - Assignment and the conditional operator are right-associative; every other level folds left.
//! - Each reduction builds exactly one node, positioned at its left operand.
//! - A malformed sequence is a defect in stage one, so it is reported as [`ParseError::Internal`].

use jparse_core::lang::operators::{self, Associativity, OperatorId, Precedence, PrecedenceInfo};

use crate::ast::{Expr, Located, Type};
use crate::diagnostics::ParseError;

/// An operand collected by stage one.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Expr(Located<Expr>),
    /// Right-hand side of `instanceof`.
    Type(Located<Type>),
}

/// An infix operator collected by stage one.
#[derive(Debug, Clone, PartialEq)]
pub enum InfixOp {
    /// Operators with a precedence-table row: `||` through `%`, shifts included.
    Binary(OperatorId),
    /// `=` and compound assignment.
    Assign(OperatorId),
    InstanceOf,
    /// `? middle :`; the operands on either side become the condition and the else branch.
    Conditional(Box<Located<Expr>>),
}

impl InfixOp {
    fn level(&self) -> Result<Precedence, ParseError> {
        match self {
            InfixOp::Binary(id) => match operators::precedence_of(*id) {
                Some(level) if level > Precedence::Ternary => Ok(level),
                Some(level) => Err(ParseError::internal(format!(
                    "operator '{}' folded as binary but binds at {level:?}",
                    operators::as_str(*id)
                ))),
                None => Err(ParseError::internal(format!(
                    "operator '{}' has no precedence entry",
                    operators::as_str(*id)
                ))),
            },
            InfixOp::Assign(id) if operators::is_assignment(*id) => Ok(Precedence::Assignment),
            InfixOp::Assign(id) => Err(ParseError::internal(format!(
                "operator '{}' is not an assignment operator",
                operators::as_str(*id)
            ))),
            InfixOp::InstanceOf => Ok(operators::INSTANCEOF_PRECEDENCE),
            InfixOp::Conditional(_) => Ok(Precedence::Ternary),
        }
    }

    fn binding(&self) -> Result<&'static PrecedenceInfo, ParseError> {
        let level = self.level()?;
        operators::binding(level)
            .ok_or_else(|| ParseError::internal(format!("precedence table has no row for {level:?}")))
    }
}

/// One element of the flat sequence produced by stage one.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Operand(Operand),
    Operator(InfixOp),
}

/// Fold a flat `operand (operator operand)*` sequence into one expression tree.
///
/// ## Errors
/// - [`ParseError::Internal`] if operands and operators do not alternate, the sequence is empty or
///   ends with an operator, a type operand is not preceded by `instanceof` (or `instanceof` is not
///   followed by a type), or an operator has no precedence-table row.
pub fn fold(items: Vec<Item>) -> Result<Located<Expr>, ParseError> {
    let mut operands: Vec<Operand> = Vec::new();
    let mut stack: Vec<(InfixOp, &'static PrecedenceInfo)> = Vec::new();
    let mut expect_operand = true;

    for item in items {
        match item {
            Item::Operand(operand) => {
                if !expect_operand {
                    return Err(ParseError::internal("two operands without an operator between them"));
                }
                let after_instanceof = matches!(stack.last(), Some((InfixOp::InstanceOf, _)));
                match (&operand, after_instanceof) {
                    (Operand::Type(_), false) => {
                        return Err(ParseError::internal("type operand not preceded by 'instanceof'"));
                    }
                    (Operand::Expr(_), true) => {
                        return Err(ParseError::internal("'instanceof' must be followed by a type"));
                    }
                    _ => {}
                }
                operands.push(operand);
                expect_operand = false;
            }
            Item::Operator(op) => {
                if expect_operand {
                    return Err(ParseError::internal("operator without a left operand"));
                }
                let info = op.binding()?;
                while let Some((_, top)) = stack.last() {
                    let tighter = top.rank > info.rank
                        || (top.rank == info.rank && info.associativity == Associativity::Left);
                    if !tighter {
                        break;
                    }
                    reduce(&mut operands, &mut stack)?;
                }
                stack.push((op, info));
                expect_operand = true;
            }
        }
    }

    if expect_operand {
        return Err(ParseError::internal("expression sequence ends without an operand"));
    }
    while !stack.is_empty() {
        reduce(&mut operands, &mut stack)?;
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(Operand::Expr(expr)), true) => Ok(expr),
        (Some(Operand::Type(_)), true) => Err(ParseError::internal("expression folded to a bare type")),
        _ => Err(ParseError::internal("operand stack not reduced to a single expression")),
    }
}

/// Pop one operator and its two operands and push the combined node.
fn reduce(operands: &mut Vec<Operand>, stack: &mut Vec<(InfixOp, &'static PrecedenceInfo)>) -> Result<(), ParseError> {
    let (op, _) = stack
        .pop()
        .ok_or_else(|| ParseError::internal("operator stack underflow"))?;
    let right = operands
        .pop()
        .ok_or_else(|| ParseError::internal("missing right operand"))?;
    let left = match operands.pop() {
        Some(Operand::Expr(expr)) => expr,
        Some(Operand::Type(_)) => return Err(ParseError::internal("type used as a left operand")),
        None => return Err(ParseError::internal("missing left operand")),
    };
    let position = left.position;

    let node = match (op, right) {
        (InfixOp::InstanceOf, Operand::Type(ty)) => Expr::InstanceOf {
            expr: Box::new(left),
            ty,
        },
        (_, Operand::Type(_)) | (InfixOp::InstanceOf, _) => {
            return Err(ParseError::internal("'instanceof' operand mismatch"));
        }
        (InfixOp::Binary(operator), Operand::Expr(right)) => Expr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        },
        (InfixOp::Assign(operator), Operand::Expr(value)) => Expr::Assignment {
            operator,
            target: Box::new(left),
            value: Box::new(value),
        },
        (InfixOp::Conditional(middle), Operand::Expr(else_expr)) => Expr::Ternary {
            condition: Box::new(left),
            then_expr: middle,
            else_expr: Box::new(else_expr),
        },
    };
    operands.push(Operand::Expr(Located::new(node, position)));
    Ok(())
}
