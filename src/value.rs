use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::fmt;
use std::str;

use crate::errors::*;

/// Calculation outcome: either a value or a domain error
pub type CalcResult = Result<Value, CalcError>;

/// Result of a calculation. Operations work on `f64` operands but a result
/// with zero fractional part collapses to an exact integer, and factorial
/// is always exact
#[derive(Clone)]
pub enum Value {
    /// Big integer number (factorial results, integral float results)
    Int(BigInt),
    /// Float number
    Float(f64),
}

const F64_BUF_LEN: usize = 48;
fn format_f64(g: f64) -> String {
    let mut buf = [b'\0'; F64_BUF_LEN];
    match dtoa::write(&mut buf[..], g) {
        Ok(len) => match str::from_utf8(&buf[..len]) {
            Ok(s) => s.to_string(),
            Err(..) => format!("{}", g),
        },
        Err(..) => format!("{}", g),
    }
}

pub(crate) fn f64_equal(f1: f64, f2: f64) -> bool {
    (f1 - f2).abs() <= f64::EPSILON
}

// f64 precision is about 19-20 digits, so any |f| >= 1e22 cannot be
// trusted to be the exact integer it looks like. The lower bound keeps
// near-zero noise (e.g. cos of a right angle) from collapsing to 0
fn is_like_int(f: f64) -> bool {
    let fa = f.abs();
    f == 0.0 || (fa >= 1.0 && fa < 1e22 && f64_equal(fa.floor(), fa))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Int(ref i) => write!(f, "{}", i),
            Value::Float(ref g) => write!(f, "{}", format_f64(*g)),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            Value::Int(ref i) => write!(f, "Int({:?})", i),
            Value::Float(ref g) => write!(f, "Float({:?})", g),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, &other) {
            (Value::Int(ref i1), Value::Int(ref i2)) => i1 == i2,
            (Value::Float(ref f1), Value::Float(ref f2)) => f1 == f2,
            (_, _) => false,
        }
    }
}

impl Default for Value {
    fn default() -> Value {
        Value::Int(BigInt::zero())
    }
}

impl Value {
    /// Wraps a finite float, collapsing an integral one into `Int`:
    /// `5.0` becomes `Int(5)` while `5.5` stays `Float(5.5)`
    pub fn from_f64(f: f64) -> Value {
        if f.is_finite() && is_like_int(f) {
            if let Some(i) = BigInt::from_f64(f) {
                return Value::Int(i);
            }
        }
        Value::Float(f)
    }

    /// Convert &str to float number
    /// Supported formats:
    /// * Without exponent - `1.023`
    /// * With exponent - `1.02e-5`
    ///
    /// Comma(,) can be used instead of decimal point(.):
    /// `1.25` is the same as `1,25`
    ///
    /// For convenience digits can be separated with underscores:
    /// `3_005.245_1` is the same as `3005.2451`
    pub fn from_str_float(s: &str) -> Result<f64, CalcError> {
        let s = s.trim().replace("_", "");
        let s = s.replace(" ", "");
        let s = s.replace(',', ".");
        if let Ok(f) = s.parse::<f64>() {
            Ok(f)
        } else {
            Err(CalcError::StrToFloat(s))
        }
    }

    /// Returns the value as a float. Fails only for an integer too large
    /// for `f64`
    pub fn as_f64(&self) -> Result<f64, CalcError> {
        match self {
            Value::Int(ref i) => {
                if let Some(f) = i.to_f64() {
                    Ok(f)
                } else {
                    Err(CalcError::IntToFloat(i.clone()))
                }
            }
            Value::Float(f) => Ok(*f),
        }
    }

    /// Returns true if the value is zero
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(ref i) => i.is_zero(),
            Value::Float(ref f) => *f == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_str() {
        let v = Value::from_str_float("10002");
        assert_eq!(v, Ok(10002.0f64));
        let v = Value::from_str_float("10_00_2");
        assert_eq!(v, Ok(10002.0f64));
        let v = Value::from_str_float("10_00_3.5");
        assert_eq!(v, Ok(10003.5f64));
        let v = Value::from_str_float("10_00_3,5");
        assert_eq!(v, Ok(10003.5f64));
        let v = Value::from_str_float("1.0002e5");
        assert_eq!(v, Ok(100020.0f64));
        let v = Value::from_str_float("200e-2");
        assert_eq!(v, Ok(2.0f64));
        let v = Value::from_str_float("  -4.5 ");
        assert_eq!(v, Ok(-4.5f64));
        let v = Value::from_str_float("abc");
        assert_eq!(v, Err(CalcError::StrToFloat("abc".to_string())));
    }

    #[test]
    fn test_collapse() {
        let v = Value::from_f64(5.0);
        assert_eq!(v, Value::Int(BigInt::from(5)));
        let v = Value::from_f64(-12.0);
        assert_eq!(v, Value::Int(BigInt::from(-12)));
        let v = Value::from_f64(5.5);
        assert_eq!(v, Value::Float(5.5));
        let v = Value::from_f64(0.0);
        assert_eq!(v, Value::Int(BigInt::from(0)));
        // beyond the precision cutoff the float stays a float
        let v = Value::from_f64(1e23);
        assert_eq!(v, Value::Float(1e23));
    }

    #[test]
    fn test_to_str() {
        let v = Value::Int(BigInt::from(12345));
        assert_eq!(v.to_string(), "12345");
        let v = Value::Float(2.25f64);
        assert_eq!(v.to_string(), "2.25");
        let v = Value::Float(-0.5f64);
        assert_eq!(v.to_string(), "-0.5");
    }

    #[test]
    fn test_as_f64() {
        let v = Value::Int(BigInt::from(7));
        assert_eq!(v.as_f64(), Ok(7.0));
        let v = Value::Float(1.5);
        assert_eq!(v.as_f64(), Ok(1.5));
    }
}
