// Loading a statement replaces the whole session store. A failed reparse
// clears it, so callers never read stale rows after an error.
use std::path::Path;

use super::StatementService;
use crate::data::statement_parser::StatementParser;
use crate::error::EngineError;

impl StatementService {
    /// Parses raw statement text into the session. Returns the number of
    /// accepted movements.
    pub fn load_text(&mut self, raw: &str) -> Result<usize, EngineError> {
        match StatementParser::parse_text(raw) {
            Ok(statement) => {
                let count = statement.movements.len();
                tracing::info!(
                    rows = count,
                    skipped = statement.diagnostics.skipped_rows,
                    zeroed = statement.diagnostics.zeroed_amounts,
                    "statement loaded"
                );
                self.store.replace(statement);
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "statement parse failed, clearing session");
                self.store.clear();
                Err(e)
            }
        }
    }

    pub fn load_file(&mut self, path: &Path) -> Result<usize, EngineError> {
        tracing::info!(path = %path.display(), "loading statement file");
        let raw = std::fs::read_to_string(path)?;
        self.load_text(&raw)
    }
}
