// Aggregation over a filtered sequence. Plain running f64 totals in sequence
// order; rounding only happens at display time.
use shared::models::{Direction, Movement, Totals};

/// The PIX+debit total is computed from the same view regardless of the
/// active category, so it tracks whatever the caller is currently looking at.
pub fn compute_totals(movements: &[Movement]) -> Totals {
    let mut totals = Totals::default();
    for m in movements {
        match m.direction {
            Direction::Credit => totals.credits += m.amount,
            Direction::Debit => totals.debits += m.amount,
        }
        if m.direction == Direction::Debit && m.is_pix() {
            totals.pix_debits += m.amount;
        }
    }
    totals.net = totals.credits - totals.debits;
    totals
}
