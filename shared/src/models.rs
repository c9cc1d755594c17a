use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cash-flow direction of a movement. The amount itself is always a
/// non-negative magnitude; the sign is carried here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    /// Single-letter code as found in the `Deb_Cred` column, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("D") {
            Some(Direction::Debit)
        } else if code.eq_ignore_ascii_case("C") {
            Some(Direction::Credit)
        } else {
            None
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Direction::Debit => "D",
            Direction::Credit => "C",
        }
    }
}

/// One statement transaction line, as accepted by the parser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub account: String,
    /// Canonical posting date, exactly 8 digits (`YYYYMMDD`).
    pub posting_date: String,
    /// Often numeric-looking but kept as a string; may hold arbitrary text.
    pub doc_number: String,
    pub description: String,
    /// Non-negative magnitude in BRL (e.g. 1060.00).
    pub amount: f64,
    pub direction: Direction,
    /// Calendar date derived from `posting_date`.
    pub date: NaiveDate,
}

impl Movement {
    /// Numeric value of the posting-date encoding, used for range filtering.
    pub fn posting_date_num(&self) -> u32 {
        self.posting_date.parse().unwrap_or(0)
    }

    /// Instant-payment transfer detection: the literal token anywhere in the
    /// description, any case.
    pub fn is_pix(&self) -> bool {
        self.description.to_lowercase().contains("pix")
    }
}

/// Category filter applied after the date-range restriction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilterMode {
    #[default]
    All,
    Credits,
    Debits,
    Pix,
    PixDebits,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Credits => "credits",
            FilterMode::Debits => "debits",
            FilterMode::Pix => "pix",
            FilterMode::PixDebits => "pix-debits",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "credits" => Ok(FilterMode::Credits),
            "debits" => Ok(FilterMode::Debits),
            "pix" => Ok(FilterMode::Pix),
            "pix-debits" => Ok(FilterMode::PixDebits),
            other => Err(format!(
                "unknown filter mode '{other}', expected one of: all, credits, debits, pix, pix-debits"
            )),
        }
    }
}

/// Filter parameters for one recomputation pass. Date bounds are raw
/// `YYYY-MM-DD` strings; anything else on a bound means "no restriction".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterParams {
    pub mode: FilterMode,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Totals derived from a filtered movement sequence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Totals {
    pub credits: f64,
    pub debits: f64,
    pub net: f64,
    pub pix_debits: f64,
}

/// Counters for rows the parser recovered from without failing the parse.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseDiagnostics {
    /// Data lines dropped (wrong field count, bad date or direction, negative amount).
    pub skipped_rows: usize,
    /// Rows kept with a zero amount because the `Valor` field did not parse.
    pub zeroed_amounts: usize,
    /// Header had 6 fields but the column names did not match.
    pub header_name_mismatch: bool,
}

/// Parser output: the ordered movement sequence plus recovery counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub movements: Vec<Movement>,
    pub diagnostics: ParseDiagnostics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_code() {
        assert_eq!(Direction::from_code("D"), Some(Direction::Debit));
        assert_eq!(Direction::from_code("c"), Some(Direction::Credit));
        assert_eq!(Direction::from_code("X"), None);
        assert_eq!(Direction::from_code("DC"), None);
        assert_eq!(Direction::from_code(""), None);
    }

    #[test]
    fn test_filter_mode_round_trip() {
        for mode in [
            FilterMode::All,
            FilterMode::Credits,
            FilterMode::Debits,
            FilterMode::Pix,
            FilterMode::PixDebits,
        ] {
            assert_eq!(mode.as_str().parse::<FilterMode>().unwrap(), mode);
        }
        assert!("pix_debits".parse::<FilterMode>().is_err());
    }

    #[test]
    fn test_pix_detection_is_case_insensitive() {
        let movement = Movement {
            account: "0007620524925".to_string(),
            posting_date: "20251201".to_string(),
            doc_number: "011822".to_string(),
            description: "Pix Recebido".to_string(),
            amount: 188.0,
            direction: Direction::Credit,
            date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        };
        assert!(movement.is_pix());

        let other = Movement {
            description: "DEPOSITO DINH LOTERICO".to_string(),
            ..movement
        };
        assert!(!other.is_pix());
    }

    #[test]
    fn test_posting_date_num() {
        let movement = Movement {
            account: String::new(),
            posting_date: "20251128".to_string(),
            doc_number: "281911".to_string(),
            description: String::new(),
            amount: 0.0,
            direction: Direction::Debit,
            date: NaiveDate::from_ymd_opt(2025, 11, 28).unwrap(),
        };
        assert_eq!(movement.posting_date_num(), 20251128);
    }
}
