//! Exportação do dataset canônico

pub mod csv;
