// errors.rs

use thiserror::Error;

/// Everything that can go wrong with a single command. None of these are
/// fatal: the loop reports the message and keeps running, and history is
/// never touched on the error path.
#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("Invalid input. Please enter a valid operation and two numbers.")]
    InvalidFormat,
    #[error("Unknown operation '{0}'. Supported operations: add, subtract, multiply, divide.")]
    UnknownOperation(String),
    #[error("Error: Improper Inputs. Division by zero is not allowed.")]
    DivisionByZero,
}
