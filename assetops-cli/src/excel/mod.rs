//! Excel tooling: bulk-upload templates and spreadsheet-to-SQL conversion.

pub mod documents;
pub mod seed_sql;
pub mod templates;
