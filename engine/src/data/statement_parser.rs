use std::cmp::Ordering;
use std::path::Path;

use crate::error::EngineError;
use shared::models::{Direction, Movement, ParseDiagnostics, Statement};
use shared::utils::brazilian_format;

// Statement exports are semicolon-delimited with every field quoted:
//   "Conta";"Data_Mov";"Nr_Doc";"Historico";"Valor";"Deb_Cred"
//   "0007620524925";"20251201";"011822";"PIX RECEBIDO";"188,00";"C"
const EXPECTED_HEADER: [&str; 6] = ["Conta", "Data_Mov", "Nr_Doc", "Historico", "Valor", "Deb_Cred"];
const FIELD_COUNT: usize = 6;

pub struct StatementParser;

impl StatementParser {
    pub fn load_from_file(path: &Path) -> Result<Statement, EngineError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse_text(&raw)
    }

    /// Parses raw statement text into an ordered movement sequence.
    ///
    /// The only fatal condition is a header that neither matches the expected
    /// column names nor has 6 fields. Malformed data rows are dropped and
    /// counted in the diagnostics; exports are often partial or dirty and a
    /// single bad line must not lose the rest of the file.
    pub fn parse_text(raw: &str) -> Result<Statement, EngineError> {
        let text = raw.strip_prefix('\u{feff}').unwrap_or(raw).trim();
        if text.is_empty() {
            return Ok(Statement::default());
        }

        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        // A header alone carries no movements.
        if lines.len() < 2 {
            return Ok(Statement::default());
        }

        let mut diagnostics = ParseDiagnostics::default();

        let header: Vec<String> = split_outside_quotes(lines[0])
            .iter()
            .map(|field| strip_quotes(field))
            .collect();
        let names_match = EXPECTED_HEADER
            .iter()
            .enumerate()
            .all(|(i, expected)| header.get(i).map_or(false, |h| h.eq_ignore_ascii_case(expected)));
        if !names_match {
            if header.len() != FIELD_COUNT {
                return Err(EngineError::InvalidHeader);
            }
            // Right shape, unexpected names. Accepted as-is.
            diagnostics.header_name_mismatch = true;
            tracing::warn!(header = ?header, "statement header names do not match the expected columns");
        }

        let mut movements = Vec::new();
        for line in &lines[1..] {
            match parse_row(line, &mut diagnostics) {
                Some(movement) => movements.push(movement),
                None => diagnostics.skipped_rows += 1,
            }
        }
        if diagnostics.skipped_rows > 0 {
            tracing::warn!(skipped = diagnostics.skipped_rows, "dropped malformed statement rows");
        }

        sort_movements(&mut movements);

        Ok(Statement {
            movements,
            diagnostics,
        })
    }
}

fn parse_row(line: &str, diagnostics: &mut ParseDiagnostics) -> Option<Movement> {
    let parts = split_outside_quotes(line);
    if parts.len() != FIELD_COUNT {
        return None;
    }

    let account = strip_quotes(&parts[0]);
    let posting_date = strip_quotes(&parts[1]);
    let doc_number = strip_quotes(&parts[2]);
    let description = strip_quotes(&parts[3]);
    let direction = Direction::from_code(&strip_quotes(&parts[5]))?;
    let date = brazilian_format::parse_yyyymmdd(&posting_date)?;

    let amount = match brazilian_format::parse_decimal(&strip_quotes(&parts[4])) {
        // The sign lives in Deb_Cred; a negative Valor is a broken row.
        Ok(value) if value < 0.0 => return None,
        Ok(value) if value.is_finite() => value,
        _ => {
            diagnostics.zeroed_amounts += 1;
            0.0
        }
    };

    Some(Movement {
        account,
        posting_date,
        doc_number,
        description,
        amount,
        direction,
        date,
    })
}

/// Splits on ';' only outside double-quoted spans, so a delimiter inside a
/// quoted field never breaks the column count.
fn split_outside_quotes(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ';' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Trims the field and strips one layer of surrounding double quotes.
fn strip_quotes(field: &str) -> String {
    let trimmed = field.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"') {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Most recent first; same-day rows fall back to the document number,
/// numerically when both sides parse as numbers, lexically otherwise.
fn sort_movements(movements: &mut [Movement]) {
    movements.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| doc_number_order(&b.doc_number, &a.doc_number))
    });
}

fn doc_number_order(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) if !x.is_nan() && !y.is_nan() => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        _ => a.cmp(b),
    }
}
