//! Validated numeral parameters.
//!
//! Both newtypes reject values below two at construction, so any code holding
//! a [`Base`] or [`NumberLength`] can skip re-validation. Deserialization goes
//! through the same checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BeautyError, ErrorInfo};

fn invalid(code: &str, message: impl Into<String>) -> ErrorInfo {
    ErrorInfo::new(code, message.into())
}

/// Number of distinct digit symbols in a positional numeral system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Base(u32);

impl Base {
    /// Smallest base that still has more than one digit symbol.
    pub const MIN: u32 = 2;

    /// Validates and wraps a raw base.
    pub fn new(raw: u32) -> Result<Self, BeautyError> {
        if raw < Self::MIN {
            let info = invalid("base-too-small", "base must provide at least two digits")
                .with_context("base", raw.to_string())
                .with_hint("use 2 for binary, 10 for decimal");
            return Err(BeautyError::InvalidParameter(info));
        }
        Ok(Self(raw))
    }

    /// Returns the raw digit count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Largest digit value, `B - 1`.
    pub fn max_digit(self) -> u32 {
        self.0 - 1
    }
}

impl TryFrom<u32> for Base {
    type Error = BeautyError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Total digit count of the numerals being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumberLength(u32);

impl NumberLength {
    /// Shortest length with two non-empty halves.
    pub const MIN: u32 = 2;

    /// Validates and wraps a raw length.
    pub fn new(raw: u32) -> Result<Self, BeautyError> {
        if raw < Self::MIN {
            let info = invalid(
                "length-too-small",
                "number length must be at least two digits",
            )
            .with_context("length", raw.to_string());
            return Err(BeautyError::InvalidParameter(info));
        }
        Ok(Self(raw))
    }

    /// Returns the raw digit count.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of digits in one half, `floor(L / 2)`.
    pub fn half_length(self) -> u32 {
        self.0 / 2
    }

    /// Whether an unconstrained middle digit sits between the halves.
    pub fn has_middle_digit(self) -> bool {
        self.0 % 2 != 0
    }
}

impl TryFrom<u32> for NumberLength {
    type Error = BeautyError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NumberLength> for u32 {
    fn from(length: NumberLength) -> Self {
        length.0
    }
}

impl fmt::Display for NumberLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
