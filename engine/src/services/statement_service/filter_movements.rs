// Pure filtering pipeline: date-range restriction first, then the category
// filter. Referentially transparent; the input sequence is never touched.
use shared::models::{Direction, FilterMode, FilterParams, Movement};

/// Inclusive bound taken from a `YYYY-MM-DD` string, as the digits-only
/// number (`20251128`). Any other shape means "no restriction on this bound".
fn parse_date_bound(raw: &str) -> Option<u32> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    if !bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    {
        return None;
    }
    raw.replace('-', "").parse().ok()
}

pub fn filter_movements(movements: &[Movement], params: &FilterParams) -> Vec<Movement> {
    let from = params.start_date.as_deref().and_then(parse_date_bound);
    let to = params.end_date.as_deref().and_then(parse_date_bound);

    movements
        .iter()
        .filter(|m| from.map_or(true, |start| m.posting_date_num() >= start))
        .filter(|m| to.map_or(true, |end| m.posting_date_num() <= end))
        .filter(|m| match params.mode {
            FilterMode::All => true,
            FilterMode::Credits => m.direction == Direction::Credit,
            FilterMode::Debits => m.direction == Direction::Debit,
            FilterMode::Pix => m.is_pix(),
            FilterMode::PixDebits => m.is_pix() && m.direction == Direction::Debit,
        })
        .cloned()
        .collect()
}
