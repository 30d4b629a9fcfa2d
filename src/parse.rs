/*
    Parsing literals
*/

use num_bigint::BigUint;

use crate::float::{Binary, Value};
use crate::round::round_exact;
use crate::width::{FloatWidth, WidthSelector};
use crate::{Error, InspectOptions, Result};

// Exponents are saturated well beyond the range of any width.
const EXP_LIMIT: i64 = 1 << 40;

/// A literal as typed by the user, along with the width it should be read as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericLiteral {
    text: String,
    selector: WidthSelector,
}

impl NumericLiteral {
    pub fn new(text: impl Into<String>, selector: WidthSelector) -> Self {
        Self {
            text: text.into(),
            selector,
        }
    }

    /// Returns the original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selector(&self) -> WidthSelector {
        self.selector
    }

    /// Returns the width this literal is read as.
    ///
    /// With [`WidthSelector::Auto`], only text containing a decimal point is
    /// read (as a double); for anything else there is no width.
    pub fn width(&self) -> Option<FloatWidth> {
        match self.selector {
            WidthSelector::Auto if self.text.contains('.') => Some(FloatWidth::Double),
            selector => selector.width(),
        }
    }
}

/// A value decoded from a literal, together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedValue {
    text: String,
    value: Value,
}

impl ParsedValue {
    /// Returns the text the value was decoded from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn width(&self) -> FloatWidth {
        self.value.width()
    }

    pub(crate) fn into_parts(self) -> (String, Value) {
        (self.text, self.value)
    }
}

/// Parses `text` as a value of `width`, ignoring anything after the number.
///
/// Conversion follows `strtof`/`strtod`: leading whitespace is skipped, and
/// decimal, hexadecimal (`0x1.8p3`), `inf`/`infinity` and `nan`/`nan(...)`
/// forms are accepted, case-insensitively. Decimal and hexadecimal literals
/// are rounded to the nearest value, ties to even.
pub fn parse(text: &str, width: FloatWidth) -> Result<ParsedValue> {
    parse_with(text, width, &InspectOptions::default())
}

/// Parses `text` as a value of `width`.
///
/// In strict mode, characters after the number are an error.
pub fn parse_with(text: &str, width: FloatWidth, options: &InspectOptions) -> Result<ParsedValue> {
    let number = scan(text).ok_or_else(|| Error::Parse(text.to_string()))?;
    if options.strict() && number.end != text.len() {
        return Err(Error::TrailingCharacters {
            literal: text.to_string(),
            offset: number.end,
        });
    }

    let value = match width {
        FloatWidth::Single => convert::<f32>(text, &number)?.into_value(),
        FloatWidth::Double => convert::<f64>(text, &number)?.into_value(),
    };
    Ok(ParsedValue {
        text: text.to_string(),
        value,
    })
}

/// Parses a literal at the width it selects.
///
/// Returns `None` when the width is deduced and the literal has no
/// decimal point; such literals are not read at all.
pub fn parse_literal(literal: &NumericLiteral, options: &InspectOptions) -> Result<Option<ParsedValue>> {
    literal
        .width()
        .map(|width| parse_with(literal.text(), width, options))
        .transpose()
}

// Numeric prefix of a literal
struct Number {
    negative: bool,
    // start of the number, including its sign
    start: usize,
    // one past the last character of the number
    end: usize,
    kind: Kind,
}

enum Kind {
    Decimal,
    // => (significand, binary exponent)
    Hex(BigUint, i64),
    Infinity,
    // => (payload)
    Nan(Option<u64>),
}

fn convert<T: Binary>(text: &str, number: &Number) -> Result<T> {
    let layout = T::WIDTH.layout();
    let m = layout.mantissa_bits;
    let sign = (number.negative as u64) << layout.sign_shift();

    let value = match &number.kind {
        Kind::Decimal => T::parse_decimal(&text[number.start..number.end])
            .ok_or_else(|| Error::Parse(text.to_string()))?,
        Kind::Hex(c, exp) => T::from_raw(round_exact(number.negative, c, *exp, layout)),
        Kind::Infinity => T::from_raw(sign | (layout.exponent_mask() << m)),
        Kind::Nan(payload) => {
            let quiet = layout.quiet_bit();
            let payload = payload.unwrap_or(0) & (quiet - 1);
            T::from_raw(sign | (layout.exponent_mask() << m) | quiet | payload)
        }
    };
    Ok(value)
}

// Finds the longest prefix of `text` that `strtod` would convert.
fn scan(text: &str) -> Option<Number> {
    let bytes = text.as_bytes();
    let start = bytes.iter().take_while(|b| is_space(**b)).count();

    let mut i = start;
    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let rest = &bytes[i..];
    let (len, kind) = if starts_with_ignore_case(rest, b"infinity") {
        (8, Kind::Infinity)
    } else if starts_with_ignore_case(rest, b"inf") {
        (3, Kind::Infinity)
    } else if starts_with_ignore_case(rest, b"nan") {
        let (len, payload) = scan_nan_payload(&rest[3..]);
        (3 + len, Kind::Nan(payload))
    } else if let Some((len, c, exp)) = scan_hex(rest) {
        (len, Kind::Hex(c, exp))
    } else {
        (scan_decimal(rest)?, Kind::Decimal)
    };

    Some(Number {
        negative,
        start,
        end: i + len,
        kind,
    })
}

// digits [. digits] [e [+-] digits], with at least one digit before the exponent
fn scan_decimal(bytes: &[u8]) -> Option<usize> {
    let int_digits = count_digits(bytes, 0, u8::is_ascii_digit);
    let mut i = int_digits;
    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(bytes, i + 1, u8::is_ascii_digit);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let (sign_len, _) = scan_sign(bytes, i + 1);
        let exp_digits = count_digits(bytes, i + 1 + sign_len, u8::is_ascii_digit);
        if exp_digits > 0 {
            i += 1 + sign_len + exp_digits;
        }
    }
    Some(i)
}

// 0x hexdigits [. hexdigits] [p [+-] digits], with at least one hex digit.
// Without a hex digit, only the leading `0` is a number.
fn scan_hex(bytes: &[u8]) -> Option<(usize, BigUint, i64)> {
    if !starts_with_ignore_case(bytes, b"0x") {
        return None;
    }

    let mut c = BigUint::default();
    let mut exp: i64 = 0;
    let mut i = 2;
    let mut digits = 0;
    while let Some(d) = bytes.get(i).and_then(|b| (*b as char).to_digit(16)) {
        c = (c << 4u32) + d;
        i += 1;
        digits += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        let mut j = i + 1;
        while let Some(d) = bytes.get(j).and_then(|b| (*b as char).to_digit(16)) {
            c = (c << 4u32) + d;
            exp = exp.saturating_sub(4);
            j += 1;
            digits += 1;
        }
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(i), Some(b'p' | b'P')) {
        let (sign_len, negative) = scan_sign(bytes, i + 1);
        let exp_start = i + 1 + sign_len;
        let exp_digits = count_digits(bytes, exp_start, u8::is_ascii_digit);
        if exp_digits > 0 {
            let e = exponent_value(&bytes[exp_start..exp_start + exp_digits]);
            exp = if negative { exp - e } else { exp + e };
            i = exp_start + exp_digits;
        }
    }
    Some((i, c, exp))
}

// ( n-char-sequence ) after `nan`; the sequence is read as an integer,
// and is only consumed when it is closed.
fn scan_nan_payload(bytes: &[u8]) -> (usize, Option<u64>) {
    if bytes.first() != Some(&b'(') {
        return (0, None);
    }
    let len = count_digits(bytes, 1, |b| b.is_ascii_alphanumeric() || *b == b'_');
    if bytes.get(1 + len) != Some(&b')') {
        return (0, None);
    }

    // only ASCII
    let seq = std::str::from_utf8(&bytes[1..1 + len]).unwrap_or_default();
    let payload = if let Some(hex) = seq.strip_prefix("0x").or_else(|| seq.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if seq.len() > 1 && seq.starts_with('0') {
        u64::from_str_radix(&seq[1..], 8).ok()
    } else {
        seq.parse().ok()
    };
    (len + 2, payload)
}

fn scan_sign(bytes: &[u8], i: usize) -> (usize, bool) {
    match bytes.get(i) {
        Some(b'-') => (1, true),
        Some(b'+') => (1, false),
        _ => (0, false),
    }
}

fn count_digits(bytes: &[u8], from: usize, pred: impl Fn(&u8) -> bool) -> usize {
    bytes.get(from..).map_or(0, |rest| rest.iter().take_while(|&b| pred(b)).count())
}

fn exponent_value(digits: &[u8]) -> i64 {
    digits
        .iter()
        .fold(0i64, |acc, d| (acc * 10 + (d - b'0') as i64).min(EXP_LIMIT))
}

fn starts_with_ignore_case(bytes: &[u8], prefix: &[u8]) -> bool {
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix)
}

// `isspace` in the C locale
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
