/*
    Floating-point widths and their bit layouts
*/

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Width of an IEEE-754 binary interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// 4-octet IEEE-754 binary32 (aka single, f32)
    Single,
    /// 8-octet IEEE-754 binary64 (aka double, f64)
    Double,
}

/// Bit layout of a [`FloatWidth`].
///
/// Fields are stored most-significant first: sign, exponent, mantissa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Bitwidth of the sign field.
    pub sign_bits: usize,
    /// Bitwidth of the exponent field.
    pub exponent_bits: usize,
    /// Bitwidth of the mantissa field (excluding the implicit bit).
    pub mantissa_bits: usize,
    /// Bitwidth of the representation.
    pub total_bits: usize,
}

const SINGLE: Layout = Layout {
    sign_bits: 1,
    exponent_bits: 8,
    mantissa_bits: 23,
    total_bits: 32,
};

const DOUBLE: Layout = Layout {
    sign_bits: 1,
    exponent_bits: 11,
    mantissa_bits: 52,
    total_bits: 64,
};

#[allow(clippy::len_without_is_empty)]
impl FloatWidth {
    /// Returns the bit layout of this width.
    #[inline(always)]
    pub const fn layout(self) -> Layout {
        match self {
            Self::Single => SINGLE,
            Self::Double => DOUBLE,
        }
    }

    /// Returns the storage size in bytes.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.layout().total_bits / 8
    }
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Double => f.write_str("double"),
        }
    }
}

// Derived format parameters
impl Layout {
    /// Radix, in this case, 2.
    pub const RADIX: u32 = 2;

    /// Number of (binary) digits in the significand.
    /// This is just `mantissa_bits + 1`.
    #[inline(always)]
    pub const fn precision(&self) -> usize {
        self.mantissa_bits + 1
    }

    /// Exponent of the largest finite value when written as
    /// `(-1)^s 2^e m` with `1 <= m < 2`.
    #[inline(always)]
    pub const fn emax(&self) -> i64 {
        (1i64 << (self.exponent_bits - 1)) - 1
    }

    /// Exponent of the smallest normal value.
    /// This is just `1 - emax`.
    #[inline(always)]
    pub const fn emin(&self) -> i64 {
        1 - self.emax()
    }

    /// The exponent field bias.
    #[inline(always)]
    pub const fn bias(&self) -> i64 {
        self.emax()
    }

    /// The all-ones exponent field, reserved for infinities and NaNs.
    #[inline(always)]
    pub const fn exponent_mask(&self) -> u64 {
        (1u64 << self.exponent_bits) - 1
    }

    /// Mask selecting the mantissa field of a packed value.
    #[inline(always)]
    pub const fn mantissa_mask(&self) -> u64 {
        (1u64 << self.mantissa_bits) - 1
    }

    /// The most significant mantissa bit, set for quiet NaNs.
    #[inline(always)]
    pub const fn quiet_bit(&self) -> u64 {
        1u64 << (self.mantissa_bits - 1)
    }

    /// Position of the sign bit in a packed value.
    #[inline(always)]
    pub const fn sign_shift(&self) -> usize {
        self.total_bits - 1
    }
}

/// Selects which width a literal is parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthSelector {
    Single,
    Double,
    /// Deduce the width from the literal: text containing a `.` is a double,
    /// anything else is left alone.
    Auto,
}

impl WidthSelector {
    /// Returns the explicit width, if any.
    pub fn width(self) -> Option<FloatWidth> {
        match self {
            Self::Single => Some(FloatWidth::Single),
            Self::Double => Some(FloatWidth::Double),
            Self::Auto => None,
        }
    }
}

impl From<FloatWidth> for WidthSelector {
    fn from(width: FloatWidth) -> Self {
        match width {
            FloatWidth::Single => Self::Single,
            FloatWidth::Double => Self::Double,
        }
    }
}

impl FromStr for WidthSelector {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "single" | "float" | "f32" => Ok(Self::Single),
            "double" | "f64" => Ok(Self::Double),
            "auto" | "deduce" | "[deduce]" => Ok(Self::Auto),
            _ => Err(Error::UnsupportedType(name.to_string())),
        }
    }
}
