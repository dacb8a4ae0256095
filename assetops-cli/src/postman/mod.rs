//! Postman Collection v2.1 tooling: typed models, built-in generators for the
//! platform services, and the edit passes applied to consolidated documents.

pub mod attention;
pub mod builder;
pub mod consolidate;
pub mod enhance;
pub mod environment;
pub mod file_download;
pub mod generate;
pub mod reorganize;
pub mod types;
