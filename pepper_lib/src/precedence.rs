//! Python operator precedence, used when the formatter runs in
//! [`crate::options::ParenthesizeMode::Precedence`].
//!
//! Higher numbers bind more tightly.  An expression needs parentheses when its precedence is
//! lower than the precedence its position in the parent node requires.

use crate::ast::{BoolOperator, Expr, Operator, Stmt, UnaryOperator};
use crate::node_printer::NodeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Precedence {
    Yield = 0,
    NamedExpr = 1,
    Lambda = 2,
    IfExp = 3,
    Or = 4,
    And = 5,
    Not = 6,
    Comparison = 7,
    BitOr = 8,
    BitXor = 9,
    BitAnd = 10,
    Shift = 11,
    Additive = 12,
    Multiplicative = 13,
    Unary = 14,
    Power = 15,
    Await = 16,
    Primary = 17,
}

impl Precedence {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

fn operator_precedence(op: Operator) -> Precedence {
    match op {
        Operator::BitOr => Precedence::BitOr,
        Operator::BitXor => Precedence::BitXor,
        Operator::BitAnd => Precedence::BitAnd,
        Operator::LShift | Operator::RShift => Precedence::Shift,
        Operator::Add | Operator::Sub => Precedence::Additive,
        Operator::Mult | Operator::MatMult | Operator::Div | Operator::FloorDiv | Operator::Mod => {
            Precedence::Multiplicative
        }
        Operator::Pow => Precedence::Power,
    }
}

/// Get the precedence for an expression
pub fn get_precedence(expr: &Expr) -> u8 {
    let precedence = match expr {
        Expr::Yield { .. } | Expr::YieldFrom { .. } => Precedence::Yield,
        Expr::NamedExpr { .. } => Precedence::NamedExpr,
        Expr::Lambda { .. } => Precedence::Lambda,
        Expr::IfExp { .. } => Precedence::IfExp,
        Expr::BoolOp { op, .. } => match op {
            BoolOperator::Or => Precedence::Or,
            BoolOperator::And => Precedence::And,
        },
        Expr::UnaryOp { op, .. } => match op {
            UnaryOperator::Not => Precedence::Not,
            _ => Precedence::Unary,
        },
        Expr::Compare { .. } => Precedence::Comparison,
        Expr::BinOp { op, .. } => operator_precedence(*op),
        Expr::Await { .. } => Precedence::Await,
        Expr::Dict { .. }
        | Expr::Set { .. }
        | Expr::ListComp { .. }
        | Expr::SetComp { .. }
        | Expr::DictComp { .. }
        | Expr::GeneratorExp { .. }
        | Expr::Call { .. }
        | Expr::Constant(_)
        | Expr::Attribute { .. }
        | Expr::Subscript { .. }
        | Expr::Starred { .. }
        | Expr::Name { .. }
        | Expr::List { .. }
        | Expr::Tuple { .. }
        | Expr::Slice { .. }
        | Expr::Repr { .. } => Precedence::Primary,
    };
    precedence.as_u8()
}

fn same(a: &Expr, b: &Expr) -> bool {
    std::ptr::eq(a, b)
}

/// Return the precedence `child` must have to print without parentheses inside `parent`.
///
/// # Arguments
///
/// * `parent` - The node that contains `child`.
/// * `child` - The expression about to print.
pub fn required_precedence(parent: NodeRef, child: &Expr) -> u8 {
    match parent {
        NodeRef::Expr(expr) => match expr {
            Expr::BinOp { left, op, .. } => {
                let own = operator_precedence(*op);
                match (same(child, left), op) {
                    (true, Operator::Pow) => Precedence::Await.as_u8(),
                    (false, Operator::Pow) => Precedence::Unary.as_u8(),
                    (true, _) => own.as_u8(),
                    (false, _) => own.as_u8() + 1,
                }
            }
            Expr::BoolOp { op, .. } => match op {
                BoolOperator::Or => Precedence::Or.as_u8() + 1,
                BoolOperator::And => Precedence::And.as_u8() + 1,
            },
            Expr::UnaryOp { op, .. } => match op {
                UnaryOperator::Not => Precedence::Not.as_u8(),
                _ => Precedence::Unary.as_u8(),
            },
            Expr::Compare { .. } | Expr::Starred { .. } => Precedence::BitOr.as_u8(),
            Expr::IfExp { orelse, .. } => {
                if same(child, orelse) {
                    Precedence::IfExp.as_u8()
                } else {
                    Precedence::Or.as_u8()
                }
            }
            Expr::Await { .. }
            | Expr::Attribute { .. }
            | Expr::Call { .. }
            | Expr::Subscript { .. } => subscript_or_call_requirement(expr, child),
            Expr::Dict { items } => {
                let spread = items
                    .iter()
                    .any(|item| item.key.is_none() && same(child, &item.value));
                let key = items
                    .iter()
                    .any(|item| item.key.as_ref().is_some_and(|k| same(child, k)));
                if spread {
                    Precedence::BitOr.as_u8()
                } else if key {
                    Precedence::IfExp.as_u8()
                } else {
                    Precedence::Lambda.as_u8()
                }
            }
            Expr::DictComp { key, .. } => {
                if same(child, key) {
                    Precedence::IfExp.as_u8()
                } else {
                    Precedence::Lambda.as_u8()
                }
            }
            Expr::Slice { .. } => Precedence::IfExp.as_u8(),
            Expr::NamedExpr { .. }
            | Expr::Lambda { .. }
            | Expr::Set { .. }
            | Expr::ListComp { .. }
            | Expr::SetComp { .. }
            | Expr::GeneratorExp { .. }
            | Expr::List { .. }
            | Expr::Tuple { .. } => Precedence::Lambda.as_u8(),
            Expr::Yield { .. } | Expr::YieldFrom { .. } | Expr::Repr { .. } => {
                Precedence::Yield.as_u8()
            }
            Expr::Constant(_) | Expr::Name { .. } => Precedence::Primary.as_u8(),
        },
        NodeRef::Stmt(stmt) => match stmt {
            Stmt::Expr { .. }
            | Stmt::Assign { .. }
            | Stmt::AugAssign { .. }
            | Stmt::AnnAssign { .. }
            | Stmt::Return { .. } => Precedence::Yield.as_u8(),
            _ => Precedence::NamedExpr.as_u8(),
        },
        NodeRef::Comprehension(_) => Precedence::Or.as_u8(),
        NodeRef::Keyword(_)
        | NodeRef::Arguments(_)
        | NodeRef::Arg(_)
        | NodeRef::WithItem(_)
        | NodeRef::ExceptHandler(_) => Precedence::Lambda.as_u8(),
        NodeRef::Module(_) | NodeRef::Alias(_) => Precedence::Yield.as_u8(),
    }
}

/// Attribute access, calls and subscripts require a primary on the left but accept any
/// argument expression inside their brackets.
fn subscript_or_call_requirement(parent: &Expr, child: &Expr) -> u8 {
    match parent {
        Expr::Attribute { value, .. } | Expr::Subscript { value, .. } if same(child, value) => {
            Precedence::Primary.as_u8()
        }
        Expr::Call { func, .. } if same(child, func) => Precedence::Primary.as_u8(),
        Expr::Await { .. } => Precedence::Primary.as_u8(),
        _ => Precedence::Lambda.as_u8(),
    }
}

/// Return true if `child` binds less tightly than its position in `parent` requires.
pub fn needs_parens(parent: NodeRef, child: &Expr) -> bool {
    get_precedence(child) < required_precedence(parent, child)
}
