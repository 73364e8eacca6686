//! Coefficient of a single term: an exact integer while every literal and every partial sum stays
//! integral, a float otherwise.
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// largest magnitude for which every integer is exactly representable as f64
const EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy)]
pub enum Coefficient {
    Integer(i64),
    Float(f64),
}

impl Coefficient {
    /// decode a coefficient literal like "5" or "9.3" (sign handled by the caller)
    pub fn from_literal(literal: &str) -> Option<Coefficient> {
        if !literal.contains('.') {
            if let Ok(value) = literal.parse::<i64>() {
                return Some(Coefficient::Integer(value));
            }
        }
        literal.parse::<f64>().ok().map(Coefficient::Float)
    }

    pub fn zero() -> Coefficient {
        Coefficient::Integer(0)
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            Coefficient::Integer(i) => i as f64,
            Coefficient::Float(f) => f,
        }
    }

    /// false for a float that overflowed to inf or became NaN
    pub fn is_finite(&self) -> bool {
        match self {
            Coefficient::Integer(_) => true,
            Coefficient::Float(f) => f.is_finite(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.to_f64() == 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.to_f64() < 0.0
    }

    pub fn abs(&self) -> Coefficient {
        if self.is_negative() { -*self } else { *self }
    }

    /// result of an arithmetic operation: a float whose value is integral collapses back to an
    /// integer, so the integer/float distinction only survives for non-integral values
    fn settle(value: f64) -> Coefficient {
        if value.is_finite() && value.fract() == 0.0 && value.abs() < EXACT_F64_INT {
            Coefficient::Integer(value as i64)
        } else {
            Coefficient::Float(value)
        }
    }

    fn combine(
        self,
        other: Coefficient,
        exact: fn(i64, i64) -> Option<i64>,
        approx: fn(f64, f64) -> f64,
    ) -> Coefficient {
        match (self, other) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => match exact(a, b) {
                Some(value) => Coefficient::Integer(value),
                None => Coefficient::Float(approx(a as f64, b as f64)),
            },
            (a, b) => Coefficient::settle(approx(a.to_f64(), b.to_f64())),
        }
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Coefficient::zero()
    }
}

impl From<i64> for Coefficient {
    fn from(value: i64) -> Self {
        Coefficient::Integer(value)
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Coefficient::Float(value)
    }
}

impl Add for Coefficient {
    type Output = Coefficient;
    fn add(self, other: Coefficient) -> Coefficient {
        self.combine(other, i64::checked_add, |a, b| a + b)
    }
}

impl Sub for Coefficient {
    type Output = Coefficient;
    fn sub(self, other: Coefficient) -> Coefficient {
        self.combine(other, i64::checked_sub, |a, b| a - b)
    }
}

impl Mul for Coefficient {
    type Output = Coefficient;
    fn mul(self, other: Coefficient) -> Coefficient {
        self.combine(other, i64::checked_mul, |a, b| a * b)
    }
}

impl Neg for Coefficient {
    type Output = Coefficient;
    fn neg(self) -> Coefficient {
        match self {
            Coefficient::Integer(i) => match i.checked_neg() {
                Some(value) => Coefficient::Integer(value),
                None => Coefficient::Float(-(i as f64)),
            },
            Coefficient::Float(f) => Coefficient::Float(-f),
        }
    }
}

// equality and ordering are by value: Integer(3) == Float(3.0)
impl PartialEq for Coefficient {
    fn eq(&self, other: &Coefficient) -> bool {
        match (self, other) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl PartialOrd for Coefficient {
    fn partial_cmp(&self, other: &Coefficient) -> Option<Ordering> {
        match (self, other) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => a.partial_cmp(b),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Integer(i) => write!(f, "{}", i),
            // -0.0 is printed as 0
            Coefficient::Float(x) => write!(f, "{}", x + 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_literal() {
        assert!(matches!(
            Coefficient::from_literal("5"),
            Some(Coefficient::Integer(5))
        ));
        assert!(matches!(
            Coefficient::from_literal("9.3"),
            Some(Coefficient::Float(x)) if x == 9.3
        ));
        // too large for i64, kept as a float
        assert!(matches!(
            Coefficient::from_literal("99999999999999999999"),
            Some(Coefficient::Float(_))
        ));
        assert!(Coefficient::from_literal("abc").is_none());
    }

    #[test]
    fn test_integer_arithmetic_stays_exact() {
        let a = Coefficient::Integer(5);
        let b = Coefficient::Integer(4);
        assert!(matches!(a - b, Coefficient::Integer(1)));
        assert!(matches!(a * b, Coefficient::Integer(20)));
        assert!(matches!(-a, Coefficient::Integer(-5)));
    }

    #[test]
    fn test_integral_float_sum_collapses_to_integer() {
        let sum = Coefficient::Float(1.5) + Coefficient::Float(1.5);
        assert!(matches!(sum, Coefficient::Integer(3)));
        let sum = Coefficient::Float(0.5) + Coefficient::Integer(1);
        assert!(matches!(sum, Coefficient::Float(x) if x == 1.5));
    }

    #[test]
    fn test_overflow_promotes_to_float() {
        let big = Coefficient::Integer(i64::MAX);
        assert!(matches!(big + Coefficient::Integer(1), Coefficient::Float(_)));
        assert!(matches!(-Coefficient::Integer(i64::MIN), Coefficient::Float(_)));
    }

    #[test]
    fn test_value_equality_and_display() {
        assert_eq!(Coefficient::Integer(3), Coefficient::Float(3.0));
        assert!(Coefficient::Integer(-2) < Coefficient::Float(1.5));
        assert_eq!(Coefficient::Integer(-4).abs(), Coefficient::Integer(4));
        assert_eq!(Coefficient::Float(9.3).to_string(), "9.3");
        assert_eq!(Coefficient::Integer(7).to_string(), "7");
        assert_eq!(Coefficient::Float(-0.0).to_string(), "0");
        assert!(Coefficient::Float(0.0).is_zero());
    }

    #[test]
    fn test_overflowing_literal_is_not_finite() {
        let big = "9".repeat(400);
        let coefficient = Coefficient::from_literal(&big).unwrap();
        assert!(!coefficient.is_finite());
        assert!(Coefficient::Integer(i64::MAX).is_finite());
        assert!(!(Coefficient::Float(f64::MAX) + Coefficient::Float(f64::MAX)).is_finite());
    }
}
