pub mod statement_service;
