/// Rounds half away from zero, which matches `Math.round` for the
/// non-negative values the page shows.
pub fn rounded(value: f64) -> i64 {
    value.round() as i64
}

/// Whole number with en-US thousands separators, e.g. `124,032`.
pub fn grouped(value: f64) -> String {
    let whole = rounded(value);
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// How many are still missing to reach `goal`, never below zero.
pub fn remaining(goal: i64, value: f64) -> i64 {
    (goal - rounded(value)).max(0)
}

/// Inline style for the staggered entrance of the `index`-th item.
pub fn stagger(base_ms: u32, step_ms: u32, index: usize) -> String {
    format!("animation-delay: {}ms;", base_ms as usize + index * step_ms as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.4), "999");
        assert_eq!(grouped(1_402.0), "1,402");
        assert_eq!(grouped(124_031.6), "124,032");
        assert_eq!(grouped(1_000_000.0), "1,000,000");
        assert_eq!(grouped(-4_500.0), "-4,500");
    }

    #[test]
    fn test_one_decimal() {
        assert_eq!(one_decimal(0.0), "0.0");
        assert_eq!(one_decimal(64.2), "64.2");
        assert_eq!(one_decimal(56.175), "56.2");
    }

    #[test]
    fn test_remaining() {
        assert_eq!(remaining(50, 0.0), 50);
        assert_eq!(remaining(50, 11.6), 38);
        assert_eq!(remaining(50, 72.0), 0);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(180, 120, 0), "animation-delay: 180ms;");
        assert_eq!(stagger(180, 120, 2), "animation-delay: 420ms;");
        assert_eq!(stagger(0, 90, 10), "animation-delay: 900ms;");
    }
}
