// Locale helpers shared across the engine and any presentation layer. All
// pt-BR number/date knowledge lives here; the rest of the core is locale-free.

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use std::str::FromStr;

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Renders a value the way statement exports carry it: '.' thousands
    /// grouping, ',' decimal separator, fixed fraction digits.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let rendered = format!("{:.prec$}", value.abs(), prec = decimals);
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rendered.as_str(), None),
        };

        let mut out = String::new();
        // No sign on values that round to zero at this precision.
        if value.is_sign_negative() && rendered.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
            out.push('-');
        }
        let digits = int_part.len();
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push(',');
            out.push_str(frac);
        }
        out
    }

    /// Display rendering for totals, e.g. "R$ 1.060,00" / "-R$ 101,99".
    pub fn format_currency(value: f64) -> String {
        let magnitude = format_decimal(value.abs(), 2);
        if value < 0.0 {
            format!("-R$ {magnitude}")
        } else {
            format!("R$ {magnitude}")
        }
    }

    /// Calendar date from the canonical 8-digit `YYYYMMDD` encoding. Anything
    /// that is not 8 digits naming a real date yields None.
    pub fn parse_yyyymmdd(ymd: &str) -> Option<NaiveDate> {
        if ymd.len() != 8 || !ymd.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: i32 = ymd[0..4].parse().ok()?;
        let month: u32 = ymd[4..6].parse().ok()?;
        let day: u32 = ymd[6..8].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// "20251201" -> "01/12/2025". Inputs that are not 8 digits pass through.
    pub fn format_date_br(ymd: &str) -> String {
        if ymd.len() != 8 || !ymd.bytes().all(|b| b.is_ascii_digit()) {
            return ymd.to_string();
        }
        format!("{}/{}/{}", &ymd[6..8], &ymd[4..6], &ymd[0..4])
    }

}
