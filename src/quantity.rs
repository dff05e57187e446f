//! Kubernetes resource quantity parsing.
//!
//! Converts quantity strings such as `2Gi`, `1500M`, `1.5Gi` or `129e6` into
//! an exact integer number of bytes. Binary suffixes use 1024 multipliers,
//! decimal suffixes and exponents use powers of ten. Fractional results are
//! rounded up, matching how the API server reports `Quantity.Value()`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// One kibibyte
pub const KIB: i128 = 1024;
/// One mebibyte
pub const MIB: i128 = 1024 * KIB;
/// One gibibyte
pub const GIB: i128 = 1024 * MIB;

// sign, whole digits, fraction digits, suffix
static QUANTITY_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?(Ki|Mi|Gi|Ti|Pi|Ei|[eE][+-]?[0-9]+|[numkMGTPE])?$")
        .ok()
});

/// Parse a quantity string into a byte count.
pub fn parse_bytes(quantity: &str) -> Result<i128> {
    let invalid = |reason: &'static str| Error::InvalidQuantity {
        quantity: quantity.to_string(),
        reason,
    };

    let re = QUANTITY_RE
        .as_ref()
        .ok_or_else(|| invalid("quantity pattern failed to compile"))?;
    let caps = re
        .captures(quantity)
        .ok_or_else(|| invalid("expected <number><suffix>, e.g. 2Gi"))?;

    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    let whole = caps.get(2).map_or("", |m| m.as_str());
    let fraction = caps.get(3).map_or("", |m| m.as_str());
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid("missing digits"));
    }
    // Trailing zeros add nothing but mantissa width
    let fraction = fraction.trim_end_matches('0');

    let digits = format!("{whole}{fraction}");
    let mantissa: i128 = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| invalid("value out of range"))?
    };

    let (exponent, binary_power): (i64, u32) = match caps.get(4).map(|m| m.as_str()) {
        None => (0, 0),
        Some("Ki") => (0, 1),
        Some("Mi") => (0, 2),
        Some("Gi") => (0, 3),
        Some("Ti") => (0, 4),
        Some("Pi") => (0, 5),
        Some("Ei") => (0, 6),
        Some("n") => (-9, 0),
        Some("u") => (-6, 0),
        Some("m") => (-3, 0),
        Some("k") => (3, 0),
        Some("M") => (6, 0),
        Some("G") => (9, 0),
        Some("T") => (12, 0),
        Some("P") => (15, 0),
        Some("E") => (18, 0),
        Some(scientific) => (
            scientific
                .get(1..)
                .unwrap_or_default()
                .parse()
                .map_err(|_| invalid("exponent out of range"))?,
            0,
        ),
    };
    let fraction_digits =
        i64::try_from(fraction.len()).map_err(|_| invalid("too many fraction digits"))?;
    let exponent = exponent
        .checked_sub(fraction_digits)
        .ok_or_else(|| invalid("exponent out of range"))?;

    let scaled = KIB
        .checked_pow(binary_power)
        .and_then(|scale| mantissa.checked_mul(scale))
        .ok_or_else(|| invalid("value out of range"))?;

    let magnitude = if exponent >= 0 {
        u32::try_from(exponent)
            .ok()
            .and_then(|e| 10i128.checked_pow(e))
            .and_then(|factor| scaled.checked_mul(factor))
            .ok_or_else(|| invalid("value out of range"))?
    } else {
        match u32::try_from(exponent.unsigned_abs())
            .ok()
            .and_then(|e| 10i128.checked_pow(e))
        {
            Some(divisor) => scaled / divisor + i128::from(scaled % divisor != 0),
            // Smaller than any representable divisor: anything non-zero rounds up to one byte.
            None => i128::from(scaled != 0),
        }
    };

    Ok(if negative { -magnitude } else { magnitude })
}
