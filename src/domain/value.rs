//! Node payload: a closed variant over integers and short text.

use std::fmt;

use rand::Rng;

/// Symbols used for random text values.
pub const ALPHANUMERIC: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Value carried by a tree node.
///
/// The kind is fixed at construction: nodes expose their value only by
/// shared reference, so an `Int` never turns into a `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Text(String),
}

/// Discriminant of [`Value`], used by layouts to request a random value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Text,
}

impl Value {
    /// Random text of exactly `len` characters drawn uniformly from [`ALPHANUMERIC`].
    pub fn random_text<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Self {
        let text = (0..len)
            .map(|_| ALPHANUMERIC[rng.gen_range(0..ALPHANUMERIC.len())] as char)
            .collect();
        Value::Text(text)
    }

    /// Random non-negative integer in the 31-bit range.
    pub fn random_int<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Value::Int(i64::from(rng.gen_range(0..=i32::MAX)))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Int(_) => None,
        }
    }
}

impl ValueKind {
    /// Generate a random value of this kind.
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R, text_len: usize) -> Value {
        match self {
            ValueKind::Int => Value::random_int(rng),
            ValueKind::Text => Value::random_text(rng, text_len),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Int => write!(f, "int"),
            ValueKind::Text => write!(f, "text"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
