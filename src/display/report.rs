//! Formatting helpers shared by the display modules

/// Format an amount with a currency symbol and two decimals
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Format a ratio (1.0 = 100%) as a whole percentage
pub fn format_ratio_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Format a section header like `=== Title ===`
pub fn format_header(title: &str) -> String {
    format!("=== {} ===", title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(40.0, "$"), "$40.00");
        assert_eq!(format_money(3.456, "$"), "$3.46");
        assert_eq!(format_money(-4.0, "$"), "-$4.00");
        assert_eq!(format_money(12.5, "€"), "€12.50");
    }

    #[test]
    fn test_format_ratio_percent() {
        assert_eq!(format_ratio_percent(1.0), "100%");
        assert_eq!(format_ratio_percent(1.5), "150%");
        assert_eq!(format_ratio_percent(0.92), "92%");
    }

    #[test]
    fn test_format_header() {
        assert_eq!(format_header("Weekly Summary"), "=== Weekly Summary ===");
    }
}
