//! Display formatting for stat values.

/// Format a stat value for display.
///
/// Integers render bare; non-integers truncate to one decimal place (the
/// tables show magnitudes, not precision). In fantasy mode a positive value
/// gets a `" pts"` suffix.
pub fn format_stat_value(value: f64, as_fantasy: bool) -> String {
    let mut out = if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", (value * 10.0).trunc() / 10.0)
    };
    if as_fantasy && value > 0.0 {
        out.push_str(" pts");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_render_bare() {
        assert_eq!(format_stat_value(12.0, false), "12");
        assert_eq!(format_stat_value(0.0, false), "0");
        assert_eq!(format_stat_value(-3.0, false), "-3");
    }

    #[test]
    fn test_non_integers_truncate_to_one_decimal() {
        assert_eq!(format_stat_value(23.46, false), "23.4");
        assert_eq!(format_stat_value(7.09, false), "7.0");
        assert_eq!(format_stat_value(-1.26, false), "-1.2");
    }

    #[test]
    fn test_fantasy_suffix_only_for_positive_values() {
        assert_eq!(format_stat_value(18.5, true), "18.5 pts");
        assert_eq!(format_stat_value(20.0, true), "20 pts");
        assert_eq!(format_stat_value(0.0, true), "0");
        assert_eq!(format_stat_value(-2.0, true), "-2");
    }
}
