// Holds the statement currently loaded in the session. The store is replaced
// wholesale on every reparse; accepted movements are never mutated in place.
use shared::models::{Movement, ParseDiagnostics, Statement};

#[derive(Debug, Default)]
pub struct StatementStore {
    current: Statement,
}

impl StatementStore {
    pub fn new() -> Self {
        StatementStore {
            current: Statement::default(),
        }
    }

    pub fn replace(&mut self, statement: Statement) {
        self.current = statement;
    }

    pub fn clear(&mut self) {
        self.current = Statement::default();
    }

    pub fn movements(&self) -> &[Movement] {
        &self.current.movements
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.current.diagnostics
    }

    pub fn len(&self) -> usize {
        self.current.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.movements.is_empty()
    }
}
