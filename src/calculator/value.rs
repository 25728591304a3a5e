use std::ops::{Add, Mul, Neg, Sub};

use crate::{calculator::operator::MAX_POWER, error::EvalError};

/// A numeric value flowing through the pipeline.
///
/// Whether a literal is an exact integer or a float is decided once, at
/// tokenization time, by the presence of a decimal point, and the identity
/// is preserved through every stage: `10 // 3` is legal while `10.0 // 3`
/// is not. Mixed arithmetic promotes to `Float`; integer arithmetic that
/// would overflow an `i64` is computed in floating point instead of
/// wrapping.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An exact integer value.
    Int(i64),
    /// A double precision floating-point value.
    Float(f64),
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl Number {
    /// Returns the value as an `f64`, widening integers.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(r) => r,
        }
    }

    /// Returns `true` if the value is [`Int`](Self::Int).
    #[must_use]
    pub const fn is_int(self) -> bool {
        matches!(self, Self::Int(..))
    }

    #[allow(clippy::float_cmp)]
    const fn is_zero(self) -> bool {
        match self {
            Self::Int(n) => n == 0,
            Self::Float(r) => r == 0.0,
        }
    }

    /// True division. The result is always a float.
    ///
    /// # Errors
    /// Fails with `Division by zero` when the divisor is zero, whether it is
    /// the integer `0` or the float `0.0`.
    pub fn try_div(self, rhs: Self, position: usize) -> Result<Self, EvalError> {
        if rhs.is_zero() {
            return Err(arithmetic("Division by zero", position));
        }
        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Floor division over exact integers.
    ///
    /// The quotient is floored, not truncated, so `-7 // 2` is `-4`.
    ///
    /// # Errors
    /// Fails when either operand is a float, when the divisor is zero, or on
    /// the single overflowing quotient `i64::MIN // -1`.
    pub fn floor_div(self, rhs: Self, position: usize) -> Result<Self, EvalError> {
        let (Self::Int(a), Self::Int(b)) = (self, rhs) else {
            return Err(arithmetic("Operator // requires integers", position));
        };
        if b == 0 {
            return Err(arithmetic("Division by zero", position));
        }
        let Some(quotient) = a.checked_div(b) else {
            return Err(arithmetic("Integer overflow", position));
        };

        let remainder = a % b;
        if remainder != 0 && (remainder < 0) != (b < 0) {
            return Ok(Self::Int(quotient - 1));
        }
        Ok(Self::Int(quotient))
    }

    /// Modulo over exact integers.
    ///
    /// A nonzero result takes the sign of the divisor, so `7 % (-2)` is
    /// `-1`.
    ///
    /// # Errors
    /// Fails when either operand is a float, when the divisor is zero, or on
    /// the overflowing `i64::MIN % -1`.
    pub fn modulo(self, rhs: Self, position: usize) -> Result<Self, EvalError> {
        let (Self::Int(a), Self::Int(b)) = (self, rhs) else {
            return Err(arithmetic("Operator % requires integers", position));
        };
        if b == 0 {
            return Err(arithmetic("Division by zero", position));
        }
        let Some(remainder) = a.checked_rem(b) else {
            return Err(arithmetic("Integer overflow", position));
        };

        if remainder != 0 && (remainder < 0) != (b < 0) {
            return Ok(Self::Int(remainder + b));
        }
        Ok(Self::Int(remainder))
    }

    /// Exponentiation.
    ///
    /// Integer base and non-negative integer exponent stay integer through
    /// checked exponentiation, promoting to float on overflow. A negative
    /// integer exponent yields a float. Everything else computes with
    /// `powf`.
    ///
    /// # Errors
    /// Fails with `Negative number under the root` for a negative base and a
    /// float exponent, and with `Too high a power to be raised` for any
    /// exponent above [`MAX_POWER`].
    #[allow(clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss)]
    pub fn pow(self, exponent: Self, position: usize) -> Result<Self, EvalError> {
        if self.as_f64() < 0.0 && !exponent.is_int() {
            return Err(arithmetic("Negative number under the root", position));
        }
        if exponent.as_f64() > MAX_POWER {
            return Err(arithmetic("Too high a power to be raised", position));
        }

        match (self, exponent) {
            (Self::Int(base), Self::Int(exp)) if exp >= 0 => {
                // exp is at most MAX_POWER here, so the casts are exact.
                Ok(base.checked_pow(exp as u32)
                       .map_or_else(|| Self::Float((base as f64).powi(exp as i32)), Self::Int))
            },
            _ => Ok(Self::Float(self.as_f64().powf(exponent.as_f64()))),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_add(b).map_or_else(|| Self::Float(a as f64 + b as f64), Self::Int)
            },
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_sub(b).map_or_else(|| Self::Float(a as f64 - b as f64), Self::Int)
            },
            _ => Self::Float(self.as_f64() - rhs.as_f64()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_mul(b).map_or_else(|| Self::Float(a as f64 * b as f64), Self::Int)
            },
            _ => Self::Float(self.as_f64() * rhs.as_f64()),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Int(n) => n.checked_neg().map_or_else(|| Self::Float(-(n as f64)), Self::Int),
            Self::Float(r) => Self::Float(-r),
        }
    }
}

/// Equality is numeric across variants, so `Int(2) == Float(2.0)`.
#[allow(clippy::float_cmp)]
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(r) => write!(f, "{r}"),
        }
    }
}

fn arithmetic(details: &str, position: usize) -> EvalError {
    EvalError::Arithmetic { details: details.to_string(),
                            position }
}
