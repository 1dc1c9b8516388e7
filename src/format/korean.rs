//! Korean numeral-unit formatting.
//!
//! Population figures are first rounded to a single significant digit and
//! then rendered with the 백/천/만/천만 groupings a person would say out
//! loud ("약 60만 명").

const BAEK: u64 = 100;
const CHEON: u64 = 1_000;
const MAN: u64 = 10_000;
const CHEON_MAN: u64 = 10_000_000;

/// Rounds `n` to its first significant digit.
///
/// Zero and non-finite inputs are returned unchanged. Halves round away
/// from zero on the absolute value, and the sign is restored afterwards,
/// so `-561052` becomes `-600000`.
pub fn round_to_first_digit(n: f64) -> f64 {
    if n == 0.0 || !n.is_finite() {
        return n;
    }
    let abs = n.abs();
    let magnitude = leading_magnitude(abs);
    if magnitude == 0.0 {
        return n;
    }
    ((abs / magnitude).round() * magnitude).copysign(n)
}

/// Returns `10^floor(log10(abs))` for a positive finite `abs`.
///
/// `log10` can land just below an exact power of ten, so the exponent is
/// nudged until `10^exp <= abs < 10^(exp + 1)`. Subnormal inputs need a
/// magnitude below `f64::MIN_POSITIVE`, which `powi` flushes to zero.
fn leading_magnitude(abs: f64) -> f64 {
    let pow10 = |e: i32| 10f64.powf(e as f64);
    let mut exp = abs.log10().floor() as i32;
    if pow10(exp) > abs {
        exp -= 1;
    } else if pow10(exp + 1) <= abs {
        exp += 1;
    }
    pow10(exp)
}

/// Formats `n` using Korean numeral groupings.
///
/// Intended for values already passed through [`round_to_first_digit`].
/// Anything below 천만 is dropped once `n` reaches 천만, so 15,500,000
/// renders as "천만"; this is a known limitation of the display, kept on
/// purpose.
pub fn format_korean_number(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    if n >= CHEON_MAN {
        let cheon_man = n / CHEON_MAN;
        return if cheon_man == 1 {
            "천만".to_string()
        } else {
            format!("{}천만", cheon_man)
        };
    }

    if n >= MAN {
        let man = n / MAN;
        let remainder = n % MAN;
        return if remainder >= CHEON {
            format!("{}만 {}천", man, remainder / CHEON)
        } else if remainder >= BAEK {
            format!("{}만 {}백", man, remainder / BAEK)
        } else {
            format!("{}만", man)
        };
    }

    if n >= CHEON {
        format!("{}천", n / CHEON)
    } else if n >= BAEK {
        format!("{}백", n / BAEK)
    } else {
        n.to_string()
    }
}

/// Rounds a population and formats it, returning both forms.
pub fn approximate_population(population: u64) -> (u64, String) {
    let rounded = round_to_first_digit(population as f64) as u64;
    (rounded, format_korean_number(rounded))
}

/// Formats an area in km² for display.
///
/// The area is rounded to the nearest integer; anything that rounds to 0
/// shows as `"<1"`. Larger values are grouped with commas.
pub fn format_area(area_km2: f64) -> String {
    let rounded = area_km2.round();
    if rounded < 1.0 {
        return "<1".to_string();
    }
    group_thousands(rounded as u64)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
