//! Excel subcommands: template generation and spreadsheet-to-SQL conversion.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::excel::{documents, seed_sql, templates};

#[derive(Debug, Subcommand)]
pub enum ExcelCommands {
    /// Generate the master-data bulk-upload templates
    Templates {
        /// Directory the template files are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Generate the documents bulk-upload template
    DocumentsTemplate {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert an asset-registration spreadsheet into a SQL seed script
    ToSql {
        /// Input .xlsx file
        xlsx: PathBuf,
        /// Sheet to read
        #[arg(long, default_value = seed_sql::DEFAULT_SHEET)]
        sheet: String,
        /// Output SQL file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle(command: ExcelCommands) -> Result<()> {
    match command {
        ExcelCommands::Templates { out_dir } => templates::generate_all(&out_dir),
        ExcelCommands::DocumentsTemplate { output } => {
            let path =
                output.unwrap_or_else(|| PathBuf::from(documents::DOCUMENTS_TEMPLATE_FILE));
            documents::run(&path).map(|_| ())
        }
        ExcelCommands::ToSql { xlsx, sheet, output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(seed_sql::DEFAULT_OUTPUT));
            seed_sql::run(&xlsx, &sheet, &path)
        }
    }
}
