// Export back to the statement's own wire format: semicolon-delimited,
// every field quoted, pt-BR amounts, single-letter direction codes.
use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use super::StatementService;
use crate::error::EngineError;
use shared::models::Movement;
use shared::utils::brazilian_format;

const EXPORT_HEADER: [&str; 6] = ["Conta", "Data_Mov", "Nr_Doc", "Historico", "Valor", "Deb_Cred"];

pub fn write_movements<W: Write>(writer: W, movements: &[Movement]) -> Result<(), EngineError> {
    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    wtr.write_record(EXPORT_HEADER)?;
    for m in movements {
        let valor = brazilian_format::format_decimal(m.amount, 2);
        wtr.write_record([
            m.account.as_str(),
            m.posting_date.as_str(),
            m.doc_number.as_str(),
            m.description.as_str(),
            valor.as_str(),
            m.direction.code(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

impl StatementService {
    /// Writes the currently filtered view. Returns the number of rows written.
    pub fn export_filtered<W: Write>(&self, writer: W) -> Result<usize, EngineError> {
        let filtered = self.filtered();
        write_movements(writer, &filtered)?;
        tracing::debug!(rows = filtered.len(), "filtered statement serialized");
        Ok(filtered.len())
    }
}
