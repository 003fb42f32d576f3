use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum OperatorError {
    #[error("unknown operator `{0}`")]
    UnknownOperator(String),
}

/// The operator of a [`Primitive`](crate::Term::Primitive) term.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PrimitiveOperator {
    Add,
    Subtract,
    Multiply,
}

impl fmt::Display for PrimitiveOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            PrimitiveOperator::Add => "+",
            PrimitiveOperator::Subtract => "-",
            PrimitiveOperator::Multiply => "*",
        };

        write!(f, "{}", symbol)
    }
}

impl FromStr for PrimitiveOperator {
    type Err = OperatorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(PrimitiveOperator::Add),
            "-" => Ok(PrimitiveOperator::Subtract),
            "*" => Ok(PrimitiveOperator::Multiply),
            _ => Err(OperatorError::UnknownOperator(symbol.to_owned())),
        }
    }
}

/// The comparison performed by a [`Branch`](crate::Term::Branch) term.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BranchOperator {
    Less,
    Equal,
}

impl fmt::Display for BranchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchOperator::Less => write!(f, "<"),
            BranchOperator::Equal => write!(f, "=="),
        }
    }
}

impl FromStr for BranchOperator {
    type Err = OperatorError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "<" => Ok(BranchOperator::Less),
            "==" => Ok(BranchOperator::Equal),
            _ => Err(OperatorError::UnknownOperator(symbol.to_owned())),
        }
    }
}
