/*
    Exact decimal rendering
*/

use num_bigint::BigUint;

use crate::float::Binary;

/// Renders `value` with `precision` significant digits the way `printf`
/// renders `%.{precision}g`.
///
/// The decimal expansion of a binary value is finite, so the digits are
/// computed exactly and then rounded (ties to even) to `precision` digits.
/// A precision of 0 is treated as 1.
pub fn render<T: Binary>(value: T, precision: usize) -> String {
    let precision = precision.max(1);
    let sign = if value.is_sign_negative() { "-" } else { "" };

    if value.is_nan() {
        return format!("{sign}nan");
    } else if value.is_infinite() {
        return format!("{sign}inf");
    } else if value.is_zero() {
        return format!("{sign}0");
    }

    let (digits, exp) = exact_digits(value);
    let (digits, exp) = round_digits(digits, exp, precision);
    let digits = digits.trim_end_matches('0');

    let body = if exp < -4 || exp >= precision as i64 {
        scientific(digits, exp)
    } else {
        fixed(digits, exp)
    };
    format!("{sign}{body}")
}

// Returns the significant decimal digits of `|value|` and the decimal
// exponent of the first one, i.e., `|value| = 0.d1d2d3... * 10^(exp + 1)`.
// `value` must be finite and non-zero.
fn exact_digits<T: Binary>(value: T) -> (Vec<u8>, i64) {
    let (c, exp, _) = value.integer_decode();
    let c = BigUint::from(c);
    if exp >= 0 {
        let digits = (c << exp as u64).to_string().into_bytes();
        let len = digits.len() as i64;
        (digits, len - 1)
    } else {
        // c * 2^-k = c * 5^k * 10^-k
        let k = (-exp) as u32;
        let digits = (c * BigUint::from(5u32).pow(k)).to_string().into_bytes();
        let len = digits.len() as i64;
        (digits, len - 1 - k as i64)
    }
}

// Rounds a digit string to `precision` digits, ties to even.
// A carry out of the first digit bumps the exponent.
fn round_digits(mut digits: Vec<u8>, mut exp: i64, precision: usize) -> (String, i64) {
    if digits.len() > precision {
        let rest = digits.split_off(precision);
        let round_up = match rest[0] {
            b'6'..=b'9' => true,
            b'5' => {
                let sticky = rest[1..].iter().any(|&d| d != b'0');
                let odd = (digits[precision - 1] - b'0') % 2 == 1;
                sticky || odd
            }
            _ => false,
        };

        if round_up && increment(&mut digits) {
            digits.insert(0, b'1');
            digits.truncate(precision);
            exp += 1;
        }
    }

    // only ASCII digits
    let digits = digits.into_iter().map(char::from).collect();
    (digits, exp)
}

// Adds one unit in the last place, returning the carry out.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn scientific(digits: &str, exp: i64) -> String {
    let (lead, rest) = digits.split_at(1);
    let exp_sign = if exp < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{lead}e{exp_sign}{:02}", exp.abs())
    } else {
        format!("{lead}.{rest}e{exp_sign}{:02}", exp.abs())
    }
}

fn fixed(digits: &str, exp: i64) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        format!("{digits}{}", "0".repeat(int_len - digits.len()))
    } else {
        let (int, frac) = digits.split_at(int_len);
        format!("{int}.{frac}")
    }
}
