use std::f64::consts;
use std::fmt;

use num_bigint::BigInt;
use num_traits::{FromPrimitive, One};

use lazy_static::lazy_static;

use crate::errors::*;
use crate::value::*;

// pub const PHI: f64 = 1.61803398874989484820458683436563811772030917980576286213544862;
pub const PHI: f64 = 1.618_033_988_749_895;

/// The fixed set of calculator operations. Every operation is a pure
/// function of its operands: no state, no I/O
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Percentage,
    Factorial,
    Log10,
    Sin,
    Cos,
    Tan,
}

lazy_static! {
    /// All operations in menu order
    pub static ref OPERATIONS: Vec<Operation> = vec![
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Percentage,
        Operation::Factorial,
        Operation::Log10,
        Operation::Sin,
        Operation::Cos,
        Operation::Tan,
    ];
}

impl Operation {
    /// Short lowercase name used in history entries and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::SquareRoot => "sqrt",
            Operation::Percentage => "percent",
            Operation::Factorial => "factorial",
            Operation::Log10 => "log10",
            Operation::Sin => "sin",
            Operation::Cos => "cos",
            Operation::Tan => "tan",
        }
    }

    /// Human-readable name for menus
    pub fn title(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Power",
            Operation::SquareRoot => "Square Root",
            Operation::Percentage => "Percentage",
            Operation::Factorial => "Factorial",
            Operation::Log10 => "Logarithm (base 10)",
            Operation::Sin => "Sine",
            Operation::Cos => "Cosine",
            Operation::Tan => "Tangent",
        }
    }

    /// Number of operands the operation consumes: 1 or 2
    pub fn arity(&self) -> usize {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Percentage => 2,
            _ => 1,
        }
    }

    /// True for trigonometric operations whose operand is an angle in degrees
    pub fn takes_degrees(&self) -> bool {
        match self {
            Operation::Sin | Operation::Cos | Operation::Tan => true,
            _ => false,
        }
    }
}

/// Returns a constant value by its name. Name is caseinsensitive
pub fn constant(name: &str) -> Option<Value> {
    match name.to_lowercase().as_str() {
        "e" => Some(Value::Float(consts::E)),
        "pi" => Some(Value::Float(consts::PI)),
        "phi" => Some(Value::Float(PHI)),
        _ => None,
    }
}

/// Names of all predefined constants
pub const CONSTANTS: [&str; 3] = ["pi", "e", "phi"];

fn divide(a: f64, b: f64) -> CalcResult {
    if b == 0.0 {
        return Err(CalcError::DividedByZero(a.to_string()));
    }
    Ok(Value::from_f64(a / b))
}

fn power(base: f64, exp: f64) -> CalcResult {
    let p = base.powf(exp);
    if !p.is_finite() {
        return Err(CalcError::NonFinitePower(base.to_string(), exp.to_string()));
    }
    Ok(Value::from_f64(p))
}

fn square_root(x: f64) -> CalcResult {
    if x < 0.0 {
        return Err(CalcError::NegativeRoot(x.to_string()));
    }
    Ok(Value::from_f64(x.sqrt()))
}

// x% of y
fn percentage(x: f64, y: f64) -> CalcResult {
    Ok(Value::from_f64(x / 100.0 * y))
}

/// Returns factorial of a number. The result is an exact big integer;
/// negative and non-integral operands are rejected
fn factorial(x: f64) -> CalcResult {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(CalcError::InvalidFactorial(x.to_string()));
    }
    let n = match BigInt::from_f64(x) {
        Some(n) => n,
        None => return Err(CalcError::InvalidFactorial(x.to_string())),
    };
    let mut res = BigInt::one();
    let mut cnt = BigInt::one();
    while cnt <= n {
        res *= cnt.clone();
        cnt += BigInt::one();
    }
    Ok(Value::Int(res))
}

fn log10(x: f64) -> CalcResult {
    if x <= 0.0 {
        return Err(CalcError::NonPositiveLog(x.to_string()));
    }
    Ok(Value::from_f64(x.log10()))
}

// angle is in degrees; the pole lattice 90 + k*180 has no tangent
fn is_tangent_pole(degrees: f64) -> bool {
    f64_equal(degrees.rem_euclid(180.0), 90.0)
}

fn tangent(degrees: f64) -> CalcResult {
    if is_tangent_pole(degrees) {
        return Err(CalcError::UndefinedTangent(degrees.to_string()));
    }
    Ok(Value::from_f64(degrees.to_radians().tan()))
}

/// Applies `op` to `args` and returns the result or the domain error.
/// Trigonometric operands are angles in degrees and are converted to
/// radians internally
pub fn compute(op: Operation, args: &[f64]) -> CalcResult {
    if args.len() != op.arity() {
        return Err(CalcError::WrongArgCount(op.name().to_string(), op.arity()));
    }
    match op {
        Operation::Add => Ok(Value::from_f64(args[0] + args[1])),
        Operation::Subtract => Ok(Value::from_f64(args[0] - args[1])),
        Operation::Multiply => Ok(Value::from_f64(args[0] * args[1])),
        Operation::Divide => divide(args[0], args[1]),
        Operation::Power => power(args[0], args[1]),
        Operation::SquareRoot => square_root(args[0]),
        Operation::Percentage => percentage(args[0], args[1]),
        Operation::Factorial => factorial(args[0]),
        Operation::Log10 => log10(args[0]),
        Operation::Sin => Ok(Value::from_f64(args[0].to_radians().sin())),
        Operation::Cos => Ok(Value::from_f64(args[0].to_radians().cos())),
        Operation::Tan => tangent(args[0]),
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn close(v: &CalcResult, expected: f64) -> bool {
        match v {
            Ok(val) => (val.as_f64().unwrap() - expected).abs() < 1e-9,
            Err(..) => false,
        }
    }

    #[test]
    fn test_basic_ops() {
        let v = compute(Operation::Add, &[2.0, 3.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(5))));
        let v = compute(Operation::Subtract, &[2.0, 3.5]);
        assert_eq!(v, Ok(Value::Float(-1.5)));
        let v = compute(Operation::Multiply, &[1.5, 4.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(6))));
        let v = compute(Operation::Divide, &[7.0, 2.0]);
        assert_eq!(v, Ok(Value::Float(3.5)));
        let v = compute(Operation::Divide, &[6.0, 3.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(2))));
    }

    #[test]
    fn test_commutativity() {
        for (a, b) in &[(2.0, 3.0), (-1.5, 4.25), (0.1, 0.2), (1e10, -7.0)] {
            assert_eq!(compute(Operation::Add, &[*a, *b]), compute(Operation::Add, &[*b, *a]));
            assert_eq!(
                compute(Operation::Multiply, &[*a, *b]),
                compute(Operation::Multiply, &[*b, *a])
            );
        }
    }

    #[test]
    fn test_divide_by_zero() {
        let v = compute(Operation::Divide, &[5.0, 0.0]);
        assert_eq!(v, Err(CalcError::DividedByZero("5".to_string())));
        let v = compute(Operation::Divide, &[0.0, 5.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(0))));
    }

    #[test]
    fn test_power() {
        let v = compute(Operation::Power, &[2.0, 10.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(1024))));
        let v = compute(Operation::Power, &[9.0, 0.5]);
        assert!(close(&v, 3.0));
        let v = compute(Operation::Power, &[2.0, -1.0]);
        assert_eq!(v, Ok(Value::Float(0.5)));
        // 0^-1 is infinite, (-8)^0.5 is NaN
        let v = compute(Operation::Power, &[0.0, -1.0]);
        assert_eq!(v, Err(CalcError::NonFinitePower("0".to_string(), "-1".to_string())));
        let v = compute(Operation::Power, &[-8.0, 0.5]);
        assert_eq!(v, Err(CalcError::NonFinitePower("-8".to_string(), "0.5".to_string())));
    }

    #[test]
    fn test_square_root() {
        let v = compute(Operation::SquareRoot, &[9.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(3))));
        let v = compute(Operation::SquareRoot, &[2.0]);
        assert!(close(&v, consts::SQRT_2));
        let sq = v.unwrap().as_f64().unwrap();
        assert!((sq * sq - 2.0).abs() < 1e-12);
        let v = compute(Operation::SquareRoot, &[0.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(0))));
        let v = compute(Operation::SquareRoot, &[-4.0]);
        assert_eq!(v, Err(CalcError::NegativeRoot("-4".to_string())));
    }

    #[test]
    fn test_percentage() {
        let v = compute(Operation::Percentage, &[50.0, 200.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(100))));
        let v = compute(Operation::Percentage, &[12.5, 8.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(1))));
        let v = compute(Operation::Percentage, &[10.0, 5.0]);
        assert_eq!(v, Ok(Value::Float(0.5)));
    }

    #[test]
    fn test_factorial() {
        let v = compute(Operation::Factorial, &[0.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(1))));
        let v = compute(Operation::Factorial, &[5.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(120))));
        let v = compute(Operation::Factorial, &[20.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(2_432_902_008_176_640_000u64))));
        // exact beyond u64 range
        let v = compute(Operation::Factorial, &[25.0]);
        let expected: BigInt = "15511210043330985984000000".parse().unwrap();
        assert_eq!(v, Ok(Value::Int(expected)));
        let v = compute(Operation::Factorial, &[-3.0]);
        assert_eq!(v, Err(CalcError::InvalidFactorial("-3".to_string())));
        let v = compute(Operation::Factorial, &[2.5]);
        assert_eq!(v, Err(CalcError::InvalidFactorial("2.5".to_string())));
    }

    #[test]
    fn test_log10() {
        let v = compute(Operation::Log10, &[100.0]);
        assert_eq!(v, Ok(Value::Int(BigInt::from(2))));
        let v = compute(Operation::Log10, &[2.0]);
        assert!(close(&v, 2.0f64.log10()));
        let v = compute(Operation::Log10, &[0.0]);
        assert_eq!(v, Err(CalcError::NonPositiveLog("0".to_string())));
        let v = compute(Operation::Log10, &[-1.5]);
        assert_eq!(v, Err(CalcError::NonPositiveLog("-1.5".to_string())));
    }

    #[test]
    fn test_trigonometry_degrees() {
        let v = compute(Operation::Sin, &[90.0]);
        assert!(close(&v, 1.0));
        let v = compute(Operation::Sin, &[30.0]);
        assert!(close(&v, 0.5));
        let v = compute(Operation::Cos, &[90.0]);
        assert!(close(&v, 0.0));
        let v = compute(Operation::Cos, &[60.0]);
        assert!(close(&v, 0.5));
        let v = compute(Operation::Tan, &[45.0]);
        assert!(close(&v, 1.0));
        let v = compute(Operation::Tan, &[0.0]);
        assert!(close(&v, 0.0));
    }

    #[test]
    fn test_tangent_poles() {
        for deg in &[90.0, 270.0, -90.0, 450.0] {
            let v = compute(Operation::Tan, &[*deg]);
            assert_eq!(v, Err(CalcError::UndefinedTangent(deg.to_string())), "tan({})", deg);
        }
        // close to a pole but not on it is still defined
        let v = compute(Operation::Tan, &[89.9]);
        assert!(v.is_ok());
    }

    #[test]
    fn test_arity_guard() {
        let v = compute(Operation::Add, &[1.0]);
        assert_eq!(v, Err(CalcError::WrongArgCount("add".to_string(), 2)));
        let v = compute(Operation::Factorial, &[1.0, 2.0]);
        assert_eq!(v, Err(CalcError::WrongArgCount("factorial".to_string(), 1)));
        for op in OPERATIONS.iter() {
            assert!(op.arity() == 1 || op.arity() == 2);
        }
    }

    #[test]
    fn test_constants() {
        assert_eq!(constant("pi"), Some(Value::Float(consts::PI)));
        assert_eq!(constant("PI"), Some(Value::Float(consts::PI)));
        assert_eq!(constant("e"), Some(Value::Float(consts::E)));
        assert_eq!(constant("phi"), Some(Value::Float(PHI)));
        assert_eq!(constant("tau"), None);
    }
}
