use num_bigint::BigInt;
use std::fmt;

/// A recoverable calculation failure. Every variant carries enough of the
/// offending input to build a user-readable message; none of them is fatal.
#[derive(Clone, PartialEq)]
pub enum CalcError {
    DividedByZero(String),
    NegativeRoot(String),
    InvalidFactorial(String),
    NonPositiveLog(String),
    UndefinedTangent(String),
    NonFinitePower(String, String),

    EmptyMemory,

    WrongArgCount(String, usize),

    StrToFloat(String),
    IntToFloat(BigInt),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            CalcError::DividedByZero(s) => write!(f, "'{}' divided by zero", s),
            CalcError::NegativeRoot(s) => write!(f, "Square root of negative number '{}'", s),
            CalcError::InvalidFactorial(s) => {
                write!(f, "Factorial requires a non-negative integer, got '{}'", s)
            }
            CalcError::NonPositiveLog(s) => write!(f, "Logarithm of non-positive number '{}'", s),
            CalcError::UndefinedTangent(s) => write!(f, "Tangent is undefined at {} degrees", s),
            CalcError::NonFinitePower(b, e) => write!(f, "'{}^{}' is not a finite number", b, e),

            CalcError::EmptyMemory => write!(f, "Memory is empty"),

            CalcError::WrongArgCount(op, n) => {
                write!(f, "Operation '{}' requires {} argument(s)", op, n)
            }

            CalcError::StrToFloat(s) => write!(f, "Failed to convert '{}' to float", s),
            CalcError::IntToFloat(i) => write!(f, "Failed to convert integer {} to float", i),
        }
    }
}

impl fmt::Debug for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
