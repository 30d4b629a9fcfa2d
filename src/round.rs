/*
    Rounding exact binary values to a width
*/

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::width::Layout;

/// Rounds the exact value `(-1)^s * c * 2^exp` to the nearest value of
/// `layout` (ties to even) and returns its packed bit pattern.
///
/// Results below the normal range become subnormals (or zero), results
/// beyond the largest finite value become infinities.
pub(crate) fn round_exact(s: bool, c: &BigUint, exp: i64, layout: Layout) -> u64 {
    let sign = (s as u64) << layout.sign_shift();
    if c.is_zero() {
        return sign;
    }

    let m = layout.mantissa_bits as i64;

    // exponent of the leading digit
    let lead = c.bits() as i64 - 1 + exp;
    // exponent of the last digit that fits; subnormals lose precision
    let mut quantum = (lead - m).max(layout.emin() - m);

    let shift = quantum - exp;
    let mut c_new = if shift > 0 {
        // Truncation will occur:
        //  - the first bit shifted off is the `half_bit`
        //  - if any of the remaining bits are high, set `sticky_bit`
        let shift = shift as u64;
        let kept = c >> shift;
        let half_bit = c.bit(shift - 1);
        let sticky_bit = c.trailing_zeros().is_some_and(|tz| tz < shift - 1);
        if half_bit && (sticky_bit || kept.is_odd()) {
            kept + 1u32
        } else {
            kept
        }
    } else {
        // exact: at most `m` bits of padding
        c << (-shift) as u64
    };

    // carry out of the significand
    if c_new.bits() > layout.precision() as u64 {
        c_new >>= 1u32;
        quantum += 1;
    }

    let c_new = c_new.iter_u64_digits().next().unwrap_or(0);
    if c_new >> m == 0 {
        // subnormal or zero: `quantum` is the minimum here
        sign | c_new
    } else {
        let biased = quantum + m + layout.bias();
        if biased >= layout.exponent_mask() as i64 {
            // overflow
            sign | (layout.exponent_mask() << m)
        } else {
            sign | ((biased as u64) << m) | (c_new & layout.mantissa_mask())
        }
    }
}
