use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Rem, Sub};

/// A scalar value in the expression sub-language.
///
/// Integer and floating-point values stay distinct so that arithmetic over
/// integer constants renders without a fractional part. Mixing an integer
/// with a float promotes the result to a float.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the value widened to an `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(value) => *value as f64,
            Number::Float(value) => *value,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(value) => *value == 0,
            Number::Float(value) => *value == 0.0,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            Number::Float(value) => write!(f, "{}", value),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs + rhs),
            (lhs, rhs) => Number::Float(lhs.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs - rhs),
            (lhs, rhs) => Number::Float(lhs.as_f64() - rhs.as_f64()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs * rhs),
            (lhs, rhs) => Number::Float(lhs.as_f64() * rhs.as_f64()),
        }
    }
}

impl Rem for Number {
    type Output = Self;

    /// Remainder with the sign of the left operand. The caller guards
    /// against a zero right operand.
    fn rem(self, other: Self) -> Self {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => Number::Int(lhs % rhs),
            (lhs, rhs) => Number::Float(lhs.as_f64() % rhs.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Int(lhs), Number::Int(rhs)) => lhs.cmp(rhs),
            (lhs, rhs) => {
                let (lhs, rhs) = (lhs.as_f64(), rhs.as_f64());
                match (lhs.is_nan(), rhs.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Less),
                }
            }
        }
    }
}
