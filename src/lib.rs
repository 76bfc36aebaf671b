//! # Menu-driven calculator
//!
//! A calculation engine and session-state model for an interactive
//! command-line calculator. Operations are selected from a fixed set
//! rather than parsed from expressions:
//!
//! * arithmetic: add, subtract, multiply, divide
//! * power, square root, percentage (`x% of y`)
//! * factorial with an exact big-integer result
//! * logarithm base 10
//! * trigonometry: sin, cos, tan with operands in degrees
//!
//! Every operation in [`engine`] is a pure function of its operands and
//! reports mathematical domain violations (division by zero, negative
//! square root, factorial of a non-integer, tangent at 90 degrees and so
//! on) as [`errors::CalcError`] values. None of them panics or prints.
//!
//! Session state lives in [`session::Session`]: a single-slot memory
//! register and an append-only, timestamped history of completed
//! calculations. The caller owns the session for the lifetime of the
//! process; nothing is persisted.
//!
//! Results carry their own representation: a float result with zero
//! fractional part collapses to an exact integer, so `factorial(25)`
//! displays every digit instead of an approximation.

pub mod engine;
pub mod errors;
pub mod session;
pub mod value;
