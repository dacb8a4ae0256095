//! Postman subcommands: generators for the service collections and the edit
//! passes applied to consolidated files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::Colorize;

use crate::postman::{
    attention, consolidate, enhance, environment, file_download, generate, reorganize, types,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Service {
    Asset,
    Helpdesk,
    Notification,
}

impl Service {
    fn default_output(self) -> &'static str {
        match self {
            Service::Asset => "Asset_Service_Complete_API_Collection.postman_collection.json",
            Service::Helpdesk => "Helpdesk_Service_Complete_API_Collection.postman_collection.json",
            Service::Notification => "Notification_Service_API.postman_collection.json",
        }
    }

    fn collection(self) -> types::Collection {
        match self {
            Service::Asset => generate::asset::collection(),
            Service::Helpdesk => generate::helpdesk::collection(),
            Service::Notification => generate::notification::collection(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum PostmanCommands {
    /// Generate a complete collection for one of the services
    Generate {
        /// Which service to generate the collection for
        #[arg(value_enum)]
        service: Service,
        /// Output file (defaults to the service's conventional filename)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Merge the per-controller collections into one consolidated collection
    Consolidate {
        /// Directory holding the source collection and environment files
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    /// Rewrite legacy variable names and add missing endpoints
    Enhance {
        /// Collection file to enhance
        file: Option<PathBuf>,
    },
    /// Regroup folders to match the service controllers
    Reorganize {
        /// Collection file to reorganize
        file: Option<PathBuf>,
    },
    /// Insert the FileDownloadController folder if it is missing
    AddFileDownload {
        /// Collection file to update
        file: Option<PathBuf>,
    },
    /// Add the logged-in-user Need Your Attention variant
    AddAttentionVariant {
        /// Collection file to update
        file: Option<PathBuf>,
    },
    /// Sort environment variables into logical order
    SortEnv {
        /// Environment file to sort
        file: Option<PathBuf>,
    },
    /// Apply the documented variable catalog to an environment file
    UpdateEnv {
        /// Environment file to update (created when missing)
        file: Option<PathBuf>,
    },
}

fn collection_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| PathBuf::from(consolidate::CONSOLIDATED_COLLECTION_FILE))
}

fn environment_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| PathBuf::from(consolidate::CONSOLIDATED_ENVIRONMENT_FILE))
}

fn generate_collection(service: Service, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(service.default_output()));
    let collection = service.collection();

    let total_requests: usize = collection.item.iter().map(|i| i.child_count()).sum();
    types::save_collection(&collection, &path)?;

    println!("{} {}", "Generated:".green(), path.display());
    println!("   Folders: {}", collection.item.len());
    println!("   Requests: {}", total_requests);

    Ok(())
}

pub fn handle(command: PostmanCommands) -> Result<()> {
    match command {
        PostmanCommands::Generate { service, output } => generate_collection(service, output),
        PostmanCommands::Consolidate { dir } => consolidate::run(Path::new(&dir)),
        PostmanCommands::Enhance { file } => enhance::run(&collection_path(file)),
        PostmanCommands::Reorganize { file } => reorganize::run(&collection_path(file)),
        PostmanCommands::AddFileDownload { file } => file_download::run(&collection_path(file)),
        PostmanCommands::AddAttentionVariant { file } => attention::run(&collection_path(file)),
        PostmanCommands::SortEnv { file } => environment::run_sort(&environment_path(file)),
        PostmanCommands::UpdateEnv { file } => environment::run_update(&environment_path(file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_point_at_consolidated_files() {
        assert_eq!(
            collection_path(None),
            PathBuf::from("Asset_Service_Consolidated.postman_collection.json")
        );
        assert_eq!(
            environment_path(None),
            PathBuf::from("Asset_Service_Consolidated_Environment.postman_environment.json")
        );
        assert_eq!(
            collection_path(Some(PathBuf::from("custom.json"))),
            PathBuf::from("custom.json")
        );
    }

    #[test]
    fn test_generate_writes_collection_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asset.json");

        generate_collection(Service::Asset, Some(path.clone())).unwrap();

        let collection = types::load_collection(&path).unwrap();
        assert!(!collection.item.is_empty());
    }
}
