//! Command-line interface definitions.

pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::excel::ExcelCommands;
use commands::postman::PostmanCommands;

#[derive(Debug, Parser)]
#[command(
    name = "assetops-cli",
    about = "Postman collection and Excel tooling for the asset management services",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate and maintain Postman collections and environments
    #[command(subcommand)]
    Postman(PostmanCommands),
    /// Generate Excel templates and convert spreadsheets to SQL
    #[command(subcommand)]
    Excel(ExcelCommands),
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Postman(command) => commands::postman::handle(command),
        Commands::Excel(command) => commands::excel::handle(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from(["assetops-cli", "postman", "generate", "asset"]);
        assert!(matches!(
            cli.command,
            Commands::Postman(PostmanCommands::Generate { .. })
        ));
    }

    #[test]
    fn test_parse_to_sql_defaults() {
        let cli = Cli::parse_from(["assetops-cli", "excel", "to-sql", "book.xlsx"]);
        match cli.command {
            Commands::Excel(ExcelCommands::ToSql { xlsx, sheet, output }) => {
                assert_eq!(xlsx.to_str(), Some("book.xlsx"));
                assert_eq!(sheet, "Asset Registration");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
