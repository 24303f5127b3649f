/// Formats an optional f64 with `decimals` places, or an empty string if None
/// or non-finite.
pub fn fmt_opt(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{x:.decimals$}"),
        _ => String::new(),
    }
}

/// Formats a fraction in `[0, 1]` as a percentage with two decimals.
pub fn fmt_pct(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_opt() {
        assert_eq!(fmt_opt(Some(0.123_456), 2), "0.12");
        assert_eq!(fmt_opt(Some(-1.0), 2), "-1.00");
        assert_eq!(fmt_opt(None, 2), "");
        assert_eq!(fmt_opt(Some(f64::NAN), 2), "");
    }

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(1.0 / 3.0), "33.33%");
        assert_eq!(fmt_pct(0.8), "80.00%");
        assert_eq!(fmt_pct(0.0), "0.00%");
    }
}
