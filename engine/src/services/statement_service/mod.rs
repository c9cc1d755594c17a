// engine/src/services/statement_service/mod.rs
// Session-level service over the statement store: loading, filtering,
// aggregation, and export. Each operation lives in its own sibling module.

use crate::data::statement_store::StatementStore;
use shared::models::{FilterParams, Movement, ParseDiagnostics, Totals};

pub mod compute_totals;
pub mod export_csv;
pub mod filter_movements;
pub mod load_statement;

pub use compute_totals::compute_totals;
pub use export_csv::write_movements;
pub use filter_movements::filter_movements;

/// Owns the session state: the current statement and the current filter
/// parameters. Both are replaced wholesale; every derived view is recomputed
/// from scratch through the pure functions in the sibling modules.
pub struct StatementService {
    store: StatementStore,
    params: FilterParams,
}

impl StatementService {
    pub fn new() -> Self {
        StatementService {
            store: StatementStore::new(),
            params: FilterParams::default(),
        }
    }

    pub fn set_params(&mut self, params: FilterParams) {
        self.params = params;
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// The full parsed sequence, most recent first.
    pub fn movements(&self) -> &[Movement] {
        self.store.movements()
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        self.store.diagnostics()
    }

    /// The date-and-category filtered view of the current statement.
    pub fn filtered(&self) -> Vec<Movement> {
        filter_movements(self.store.movements(), &self.params)
    }

    /// Totals over the currently filtered view.
    pub fn totals(&self) -> Totals {
        compute_totals(&self.filtered())
    }
}

impl Default for StatementService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{Direction, FilterMode};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
\"Conta\";\"Data_Mov\";\"Nr_Doc\";\"Historico\";\"Valor\";\"Deb_Cred\"
\"0007620524925\";\"20251201\";\"011822\";\"PIX RECEBIDO\";\"188,00\";\"C\"
\"0007620524925\";\"20251201\";\"000000\";\"CREDITO JUROS\";\"0,01\";\"C\"
\"0007620524925\";\"20251128\";\"281911\";\"PIX ENVIADO\";\"290,00\";\"D\"
\"0007620524925\";\"20251128\";\"280945\";\"DEPOSITO DINH LOTERICO\";\"150,00\";\"C\"
\"0007620524925\";\"20251111\";\"111320\";\"PAG BOLETO IBC\";\"1.731,30\";\"D\"";

    fn loaded_service() -> StatementService {
        let mut service = StatementService::new();
        service.load_text(SAMPLE).unwrap();
        service
    }

    #[test]
    fn test_load_text_replaces_session() {
        let mut service = loaded_service();
        assert_eq!(service.movements().len(), 5);

        let count = service
            .load_text("\"Conta\";\"Data_Mov\";\"Nr_Doc\";\"Historico\";\"Valor\";\"Deb_Cred\"")
            .unwrap();
        assert_eq!(count, 0);
        assert!(service.movements().is_empty());
    }

    #[test]
    fn test_failed_reparse_clears_stale_rows() {
        let mut service = loaded_service();
        assert!(!service.movements().is_empty());

        let result = service.load_text("\"bad\";\"header\"\n\"x\";\"y\"");
        assert!(result.is_err());
        // The previous statement must not survive a failed parse.
        assert!(service.movements().is_empty());
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();
        file.flush().unwrap();

        let mut service = StatementService::new();
        let count = service.load_file(file.path()).unwrap();
        assert_eq!(count, 5);
    }

    #[test]
    fn test_filtered_respects_params() {
        let mut service = loaded_service();
        service.set_params(FilterParams {
            mode: FilterMode::PixDebits,
            ..FilterParams::default()
        });
        let filtered = service.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].doc_number, "281911");
    }

    #[test]
    fn test_totals_follow_the_filtered_view() {
        let mut service = loaded_service();
        service.set_params(FilterParams {
            mode: FilterMode::Credits,
            ..FilterParams::default()
        });
        let totals = service.totals();
        assert!((totals.credits - 338.01).abs() < 1e-9);
        assert_eq!(totals.debits, 0.0);
        assert_eq!(totals.pix_debits, 0.0);
    }

    #[test]
    fn test_default_params_keep_everything() {
        let service = loaded_service();
        assert_eq!(service.filtered().len(), service.movements().len());
        let totals = service.totals();
        assert!((totals.net - (338.01 - 2021.30)).abs() < 1e-9);
        assert_eq!(service.diagnostics().skipped_rows, 0);

        // Debit-side totals: one PIX transfer, one boleto payment.
        assert!((totals.debits - 2021.30).abs() < 1e-9);
        assert!((totals.pix_debits - 290.0).abs() < 1e-9);
    }

    #[test]
    fn test_export_filtered_writes_current_view() {
        let mut service = loaded_service();
        service.set_params(FilterParams {
            mode: FilterMode::Debits,
            ..FilterParams::default()
        });

        let mut out = Vec::new();
        let written = service.export_filtered(&mut out).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\"Conta\";\"Data_Mov\""));
        assert!(text.contains("\"1.731,30\""));
        assert!(!text.contains("PIX RECEBIDO"));
    }

    #[test]
    fn test_movements_expose_direction() {
        let service = loaded_service();
        assert_eq!(service.movements()[0].direction, Direction::Credit);
    }
}
