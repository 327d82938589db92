//! The `operators` module provides the symbol tables that map operator kinds to the tokens the
//! formatter writes, and the reverse mapping from Python `ast` operator node names.

use crate::ast::{BoolOperator, CmpOperator, Operator, UnaryOperator};
use crate::error::PepperError;
use std::str::FromStr;

/// Return the token for a binary operator.  Augmented assignment appends `=` to the same token.
pub fn binary_operator_symbol(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Sub => "-",
        Operator::Mult => "*",
        Operator::MatMult => "@",
        Operator::Div => "/",
        Operator::FloorDiv => "//",
        Operator::Mod => "%",
        Operator::Pow => "**",
        Operator::LShift => "<<",
        Operator::RShift => ">>",
        Operator::BitOr => "|",
        Operator::BitXor => "^",
        Operator::BitAnd => "&",
    }
}

/// Return the keyword for a boolean operator.
pub fn bool_operator_symbol(op: BoolOperator) -> &'static str {
    match op {
        BoolOperator::And => "and",
        BoolOperator::Or => "or",
    }
}

/// Return the token for a prefix operator.
pub fn unary_operator_symbol(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Invert => "~",
        UnaryOperator::Not => "not",
        UnaryOperator::UAdd => "+",
        UnaryOperator::USub => "-",
    }
}

/// Return the token for a comparison operator.
pub fn comparison_operator_symbol(op: CmpOperator) -> &'static str {
    match op {
        CmpOperator::Eq => "==",
        CmpOperator::NotEq => "!=",
        CmpOperator::Lt => "<",
        CmpOperator::LtE => "<=",
        CmpOperator::Gt => ">",
        CmpOperator::GtE => ">=",
        CmpOperator::Is => "is",
        CmpOperator::IsNot => "is not",
        CmpOperator::In => "in",
        CmpOperator::NotIn => "not in",
    }
}

impl FromStr for Operator {
    type Err = PepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Add" => Ok(Operator::Add),
            "Sub" => Ok(Operator::Sub),
            "Mult" => Ok(Operator::Mult),
            "MatMult" => Ok(Operator::MatMult),
            "Div" => Ok(Operator::Div),
            "FloorDiv" => Ok(Operator::FloorDiv),
            "Mod" => Ok(Operator::Mod),
            "Pow" => Ok(Operator::Pow),
            "LShift" => Ok(Operator::LShift),
            "RShift" => Ok(Operator::RShift),
            "BitOr" => Ok(Operator::BitOr),
            "BitXor" => Ok(Operator::BitXor),
            "BitAnd" => Ok(Operator::BitAnd),
            _ => Err(PepperError::UnsupportedConstruct(String::from(s))),
        }
    }
}

impl FromStr for BoolOperator {
    type Err = PepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "And" => Ok(BoolOperator::And),
            "Or" => Ok(BoolOperator::Or),
            _ => Err(PepperError::UnsupportedConstruct(String::from(s))),
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = PepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Invert" => Ok(UnaryOperator::Invert),
            "Not" => Ok(UnaryOperator::Not),
            "UAdd" => Ok(UnaryOperator::UAdd),
            "USub" => Ok(UnaryOperator::USub),
            _ => Err(PepperError::UnsupportedConstruct(String::from(s))),
        }
    }
}

impl FromStr for CmpOperator {
    type Err = PepperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Eq" => Ok(CmpOperator::Eq),
            "NotEq" => Ok(CmpOperator::NotEq),
            "Lt" => Ok(CmpOperator::Lt),
            "LtE" => Ok(CmpOperator::LtE),
            "Gt" => Ok(CmpOperator::Gt),
            "GtE" => Ok(CmpOperator::GtE),
            "Is" => Ok(CmpOperator::Is),
            "IsNot" => Ok(CmpOperator::IsNot),
            "In" => Ok(CmpOperator::In),
            "NotIn" => Ok(CmpOperator::NotIn),
            _ => Err(PepperError::UnsupportedConstruct(String::from(s))),
        }
    }
}
