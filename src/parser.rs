// parser.rs

use itertools::Itertools;
use std::fmt;

use crate::errors::CalcError;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operation. `divide` by zero is the one arithmetic input we
    /// reject instead of letting IEEE produce an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operation {
    // Long names, as they appear in `list` output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, PartialEq)]
pub enum Command {
    Exit,
    List,
    Clear,
    Eval { op: Operation, lhs: f64, rhs: f64 },
}

/// Parse one trimmed, non-empty input line. Keyword commands are matched
/// against the whole line first; anything else must be exactly
/// `<operation> <num1> <num2>`.
pub fn parse_line(line: &str) -> Result<Command, CalcError> {
    match line {
        "exit" => return Ok(Command::Exit),
        "list" => return Ok(Command::List),
        "clear" => return Ok(Command::Clear),
        _ => {}
    }
    let (op_token, lhs, rhs) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or(CalcError::InvalidFormat)?;
    let lhs: f64 = lhs.parse().map_err(|_| CalcError::InvalidFormat)?;
    let rhs: f64 = rhs.parse().map_err(|_| CalcError::InvalidFormat)?;
    // Operands are checked before the operation name, so `modulus 5 3` reports
    // an unknown operation while `modulus five 3` reports bad input.
    let op = Operation::from_token(op_token)
        .ok_or_else(|| CalcError::UnknownOperation(op_token.to_string()))?;
    Ok(Command::Eval { op, lhs, rhs })
}
