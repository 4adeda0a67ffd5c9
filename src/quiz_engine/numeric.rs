//! Exact-arithmetic helpers shared by the level generators.
//!
//! Decimal answers are computed on integers scaled by a power of ten
//! (cents, tenths) and only turned into text at the end, so no answer ever
//! carries floating-point noise.

use std::fmt;

/// Greatest common divisor (Euclid). Always non-negative; `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// A fraction as written, not necessarily in lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    pub num: i64,
    pub den: i64,
}

impl Fraction {
    pub fn new(num: i64, den: i64) -> Self {
        Fraction { num, den }
    }

    /// Divide numerator and denominator by their GCD.
    pub fn reduced(self) -> Self {
        let g = gcd(self.num, self.den);
        if g <= 1 {
            return self;
        }
        Fraction { num: self.num / g, den: self.den / g }
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// Render `value / 10^places` with exactly `places` fractional digits.
///
/// `format_scaled(-5, 2) == "-0.05"`, `format_scaled(340, 2) == "3.40"`.
pub fn format_scaled(value: i64, places: u32) -> String {
    if places == 0 {
        return value.to_string();
    }
    let scale = 10i64.pow(places);
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.abs();
    format!(
        "{sign}{}.{:0width$}",
        abs / scale,
        abs % scale,
        width = places as usize
    )
}

/// Drop a fractional part made only of zeros: `"3.00"` → `"3"`.
///
/// Non-zero fractions are left untouched (`"3.50"` stays `"3.50"`).
pub fn strip_zero_fraction(s: &str) -> String {
    match s.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole.to_string(),
        _ => s.to_string(),
    }
}
