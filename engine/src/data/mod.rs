pub mod statement_parser;
pub mod statement_store;
