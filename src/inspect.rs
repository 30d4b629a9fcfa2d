/*
    Bit inspection
*/

use std::fmt;
use std::num::FpCategory;

use bitvec::prelude::*;

use crate::float::{Binary, Value};
use crate::parse::ParsedValue;
use crate::render::render;
use crate::width::{FloatWidth, Layout};
use crate::{ByteOrder, InspectOptions};

/// A packed floating-point representation, most significant bit first.
pub type Bits = BitVec<u8, Msb0>;

/// The decomposition `value = significand * 2^exponent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalized {
    /// Zero, or a value with magnitude in `[0.5, 1)`.
    /// Infinities and NaNs are carried through unchanged.
    pub significand: Value,
    /// The base-2 exponent; there is none for infinities and NaNs.
    pub exponent: Option<i32>,
}

/// Everything there is to know about the encoding of a parsed literal.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionReport {
    input: String,
    value: Value,
    bits: Bits,
    internal: Option<String>,
    epsilon: Value,
    adjacent: Value,
    normalized: Normalized,
    class: FpCategory,
    precision: usize,
}

/// Inspects a parsed value with the default options.
pub fn inspect(value: ParsedValue) -> InspectionReport {
    inspect_with(value, &InspectOptions::default())
}

/// Inspects a parsed value.
pub fn inspect_with(value: ParsedValue, options: &InspectOptions) -> InspectionReport {
    let (input, value) = value.into_parts();
    match value {
        Value::Single(v) => inspect_binary(input, v, options),
        Value::Double(v) => inspect_binary(input, v, options),
    }
}

fn inspect_binary<T: Binary>(input: String, v: T, options: &InspectOptions) -> InspectionReport {
    let rendered = render(v, options.precision());
    let internal = (rendered != input).then_some(rendered);
    let (significand, exponent) = frexp(v);

    InspectionReport {
        input,
        value: v.into_value(),
        bits: storage_bits(v, options.byte_order()),
        internal,
        epsilon: T::epsilon().into_value(),
        adjacent: next_toward_zero(v).into_value(),
        normalized: Normalized {
            significand: significand.into_value(),
            exponent,
        },
        class: v.classify(),
        precision: options.precision(),
    }
}

/// Unpacks the storage of `v` into a bit string.
///
/// With [`ByteOrder::Native`] the in-memory bytes are read as one
/// little-endian word: the last byte comes first, each byte most
/// significant bit first.
pub fn storage_bits<T: Binary>(v: T, order: ByteOrder) -> Bits {
    let bytes = match order {
        ByteOrder::Native => {
            let mut bytes = v.ne_bytes();
            bytes.reverse();
            bytes
        }
        ByteOrder::Big => v.be_bytes(),
    };
    Bits::from_vec(bytes)
}

/// The next representable value from `v` toward zero.
///
/// Zero maps to (positive) zero, a NaN to itself, and an infinity
/// to the largest finite value of the same sign.
pub fn next_toward_zero<T: Binary>(v: T) -> T {
    if v.is_nan() {
        v
    } else if v.is_zero() {
        T::zero()
    } else {
        // the magnitude sits below the sign bit
        T::from_raw(v.to_raw() - 1)
    }
}

/// Splits `v` into a significand with magnitude in `[0.5, 1)` and a
/// base-2 exponent, like C's `frexp`.
///
/// Zeros are returned with exponent 0. Infinities and NaNs are returned
/// unchanged, without an exponent.
pub fn frexp<T: Binary>(v: T) -> (T, Option<i32>) {
    if v.is_nan() || v.is_infinite() {
        return (v, None);
    } else if v.is_zero() {
        return (v, Some(0));
    }

    let layout = T::WIDTH.layout();
    let m = layout.mantissa_bits;
    let bits = v.to_raw();
    let sign = bits & (1 << layout.sign_shift());
    let field = (bits >> m) & layout.exponent_mask();
    let mut frac = bits & layout.mantissa_mask();

    let exp = if field == 0 {
        // subnormal: move the leading one into the implicit bit
        let lead = 63 - frac.leading_zeros() as usize;
        let shift = m - lead;
        frac = (frac << shift) & layout.mantissa_mask();
        layout.emin() - shift as i64
    } else {
        field as i64 - layout.bias()
    };

    // 1.frac * 2^exp == 0.1frac * 2^(exp + 1)
    let half = (layout.bias() - 1) as u64;
    let significand = T::from_raw(sign | (half << m) | frac);
    (significand, Some((exp + 1) as i32))
}

/// Renders a bit string as `0`s and `1`s.
pub fn to_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter().by_vals().map(|b| if b { '1' } else { '0' }).collect()
}

impl InspectionReport {
    /// Returns the literal as it was typed.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn width(&self) -> FloatWidth {
        self.value.width()
    }

    fn layout(&self) -> Layout {
        self.width().layout()
    }

    /// Returns the full bit string, `total_bits` long.
    pub fn bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }

    pub fn sign_field(&self) -> &BitSlice<u8, Msb0> {
        &self.bits[..self.layout().sign_bits]
    }

    pub fn exponent_field(&self) -> &BitSlice<u8, Msb0> {
        let l = self.layout();
        &self.bits[l.sign_bits..l.sign_bits + l.exponent_bits]
    }

    pub fn mantissa_field(&self) -> &BitSlice<u8, Msb0> {
        let l = self.layout();
        &self.bits[l.sign_bits + l.exponent_bits..]
    }

    pub fn bit_string(&self) -> String {
        to_bit_string(&self.bits)
    }

    /// Returns true if rendering the value reproduces the input exactly.
    pub fn round_trips(&self) -> bool {
        self.internal.is_none()
    }

    /// Returns how the value renders when it differs from the input.
    pub fn internal(&self) -> Option<&str> {
        self.internal.as_deref()
    }

    /// Machine epsilon of the width.
    pub fn epsilon(&self) -> Value {
        self.epsilon
    }

    /// The next representable value toward zero.
    pub fn adjacent(&self) -> Value {
        self.adjacent
    }

    pub fn normalized(&self) -> Normalized {
        self.normalized
    }

    pub fn class(&self) -> FpCategory {
        self.class
    }

    /// Size of the representation in bits.
    pub fn size_bits(&self) -> usize {
        self.layout().total_bits
    }

    pub fn radix(&self) -> u32 {
        Layout::RADIX
    }
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;

        writeln!(f, "{:>20}{}", "Input: ", self.input)?;
        writeln!(f, "{:>20}{}", "Floating Point: ", self.round_trips())?;
        if let Some(internal) = &self.internal {
            writeln!(f, "{:>20}{}", "Internal: ", internal)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "{:>20}[{} {} {}]",
            "bits: ",
            to_bit_string(self.sign_field()),
            to_bit_string(self.exponent_field()),
            to_bit_string(self.mantissa_field()),
        )?;
        writeln!(f, "{:>20}{} bits", "size: ", self.size_bits())?;
        writeln!(f, "{:>20}{:.*}", "machine epsilon: ", p, self.epsilon)?;
        writeln!(f, "{:>20}{:.*}", "nextafter: ", p, self.adjacent)?;

        let Normalized { significand, exponent } = self.normalized;
        let exponent = exponent.map_or_else(|| "undefined".to_string(), |e| e.to_string());
        writeln!(
            f,
            "{:>20}{:.*} * {}^{}",
            "fp-format: ",
            p,
            significand,
            self.radix(),
            exponent
        )
    }
}
