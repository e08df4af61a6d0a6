const HUNDRED: u128 = 100;
const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i64 = 1075;
const SUBNORMAL_EXPONENT: i64 = -1074;
const MAX_EXACT_SHIFT: u64 = 120;

/// Rounds a value to two decimal places, ties away from zero.
///
/// The decision is taken on the exact binary value rather than on `value * 100`,
/// so `1.005` (stored as `1.00499…`) rounds down to `1.0` while the exactly
/// representable `0.125` rounds up to `0.13`. The result is the double nearest
/// to the rounded decimal. Non-finite values and values too large to carry a
/// fractional part are returned unchanged.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let bits = value.abs().to_bits();
    let biased_exponent = (bits >> MANTISSA_BITS) & 0x7ff;
    let fraction = bits & ((1_u64 << MANTISSA_BITS) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction, SUBNORMAL_EXPONENT)
    } else {
        (
            fraction | (1_u64 << MANTISSA_BITS),
            biased_exponent as i64 - EXPONENT_BIAS,
        )
    };

    if exponent >= 0 {
        return value;
    }

    let shift = exponent.unsigned_abs();
    if shift > MAX_EXACT_SHIFT {
        // Magnitude is far below 0.005.
        return 0.0_f64.copysign(value);
    }

    let scaled = u128::from(mantissa) * HUNDRED;
    let unit = 1_u128 << shift;
    let mut hundredths = scaled >> shift;
    let remainder = scaled & (unit - 1);
    if remainder * 2 >= unit {
        hundredths += 1;
    }

    (hundredths as f64 / 100.0).copysign(value)
}
