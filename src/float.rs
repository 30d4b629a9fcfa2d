/*
    Native floating-point types
*/

use std::fmt;

use crate::render::render;
use crate::width::FloatWidth;
use crate::InspectOptions;

/// A native binary floating-point type with a known [`FloatWidth`].
///
/// Bit patterns are widened to `u64` so that one set of bit-level
/// routines serves both widths.
pub trait Binary: num_traits::Float + fmt::Debug {
    /// The width of this type.
    const WIDTH: FloatWidth;

    /// Reinterprets the value as its packed bit pattern.
    fn to_raw(self) -> u64;

    /// Reinterprets a packed bit pattern as a value.
    /// Bits above the width are ignored.
    fn from_raw(bits: u64) -> Self;

    /// Returns the in-memory storage of the value, in native byte order.
    fn ne_bytes(self) -> Vec<u8>;

    /// Returns the storage of the value in big-endian byte order.
    fn be_bytes(self) -> Vec<u8>;

    /// Correctly rounded conversion of a decimal literal
    /// (`[+-]digits[.digits][e[+-]digits]`).
    fn parse_decimal(text: &str) -> Option<Self>;

    /// Tags the value with its width.
    fn into_value(self) -> Value;
}

impl Binary for f32 {
    const WIDTH: FloatWidth = FloatWidth::Single;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits() as u64
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f32::from_bits(bits as u32)
    }

    fn ne_bytes(self) -> Vec<u8> {
        self.to_ne_bytes().to_vec()
    }

    fn be_bytes(self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn parse_decimal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn into_value(self) -> Value {
        Value::Single(self)
    }
}

impl Binary for f64 {
    const WIDTH: FloatWidth = FloatWidth::Double;

    #[inline]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline]
    fn from_raw(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    fn ne_bytes(self) -> Vec<u8> {
        self.to_ne_bytes().to_vec()
    }

    fn be_bytes(self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn parse_decimal(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    fn into_value(self) -> Value {
        Value::Double(self)
    }
}

/// A floating-point value tagged with its width.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Value {
    Single(f32),
    Double(f64),
}

impl Value {
    /// Returns the width of this value.
    pub fn width(&self) -> FloatWidth {
        match self {
            Self::Single(_) => FloatWidth::Single,
            Self::Double(_) => FloatWidth::Double,
        }
    }

    /// Returns the packed bit pattern, widened to 64 bits.
    pub fn to_bits(&self) -> u64 {
        match *self {
            Self::Single(v) => v.to_raw(),
            Self::Double(v) => v.to_raw(),
        }
    }

    /// Returns true if this value is a NaN.
    pub fn is_nan(&self) -> bool {
        match *self {
            Self::Single(v) => v.is_nan(),
            Self::Double(v) => v.is_nan(),
        }
    }

    /// Returns true if the sign bit is set.
    pub fn is_sign_negative(&self) -> bool {
        self.to_bits() >> self.width().layout().sign_shift() == 1
    }

    /// Renders the value with `precision` significant digits.
    pub fn render(&self, precision: usize) -> String {
        match *self {
            Self::Single(v) => render(v, precision),
            Self::Double(v) => render(v, precision),
        }
    }
}

/// Formats with `%g` semantics: the formatter's precision is the number of
/// significant digits, and defaults to the maximal precision used for
/// round-trip checks.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(InspectOptions::DEFAULT_PRECISION);
        f.write_str(&self.render(precision))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Single(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}
