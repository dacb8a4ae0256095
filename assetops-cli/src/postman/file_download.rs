//! Insert the FileDownloadController folder when a collection predates it.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde_json::Map;

use super::types::{
    self, Collection, Folder, Header, Item, QueryParam, RequestItem, RequestSpec, Url,
};

const FILE_DOWNLOAD_DESCRIPTION: &str = "Download or view a file by filename.\n\n\
**Query Parameters:**\n\
- filename: File name to download (required)\n\
- inline: true for inline view, false for download (default: false)\n\n\
**Controller:** FileDownloadController\n\
**Base Path:** /api/asset/v1/files";

fn file_download_folder() -> Item {
    // Built by hand rather than through the builder because the raw URL keeps
    // its query string, matching the exported shape.
    let request = RequestItem {
        name: "Download or View File".into(),
        request: RequestSpec {
            method: "GET".into(),
            header: vec![Header::text("Authorization", "Bearer {{accessToken}}")
                .describe("JWT Bearer token from auth-service")],
            body: None,
            url: Url {
                raw: "{{assetbaseUrl}}/api/asset/v1/files/download?filename={{filename}}&inline=false"
                    .into(),
                host: vec!["{{assetbaseUrl}}".into()],
                path: vec!["api".into(), "asset".into(), "v1".into(), "files".into(), "download".into()],
                query: vec![
                    QueryParam::new("filename", "{{filename}}").describe("File name to download"),
                    QueryParam::new("inline", "false")
                        .describe("true for inline view, false for download"),
                ],
                variable: Vec::new(),
                extra: Map::new(),
            },
            description: Some(FILE_DOWNLOAD_DESCRIPTION.into()),
            extra: Map::new(),
        },
        response: Vec::new(),
        extra: Map::new(),
    };

    Folder::with_requests("13. FileDownload", vec![request])
}

/// `"13. Documents"` -> `(13, "Documents")`
fn split_numbered(name: &str) -> Option<(u32, &str)> {
    let (number, rest) = name.split_once(". ")?;
    number.parse().ok().map(|n| (n, rest))
}

/// Insert the FileDownload folder after the Documents folder, renumbering the
/// folders that follow. A no-op when any folder name already mentions file
/// download, so re-running is safe.
pub fn add_file_download(collection: &mut Collection) -> bool {
    let already_present = collection
        .item
        .iter()
        .any(|i| i.name().contains("FileDownload") || i.name().contains("File Download"));
    if already_present {
        return false;
    }

    let insert_index = collection
        .item
        .iter()
        .position(|i| i.name().contains("Document"))
        .map(|i| i + 1)
        .unwrap_or(collection.item.len());

    collection.item.insert(insert_index, file_download_folder());

    for item in collection.item.iter_mut().skip(insert_index + 1) {
        if let Some((number, rest)) = split_numbered(item.name()) {
            let renamed = format!("{}. {}", number + 1, rest);
            item.set_name(renamed);
        }
    }

    true
}

pub fn run(path: &Path) -> Result<()> {
    println!("Checking for FileDownloadController...");

    let mut collection = types::load_collection(path)?;
    if add_file_download(&mut collection) {
        types::save_collection(&collection, path)?;
        println!("{} FileDownloadController folder added", "Done:".green());
    } else {
        println!("  FileDownloadController already exists");
    }
    println!("   Total folders: {}", collection.item.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postman::types::{Info, SCHEMA_V2_1};

    fn collection_with_folders(names: &[&str]) -> Collection {
        Collection {
            info: Info {
                postman_id: "test".into(),
                name: "Test".into(),
                description: None,
                schema: SCHEMA_V2_1.into(),
                exporter_id: None,
                extra: Map::new(),
            },
            item: names
                .iter()
                .map(|n| Item::Folder(Folder::new(*n)))
                .collect(),
            variable: Vec::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_inserted_after_documents_with_renumbering() {
        let mut collection = collection_with_folders(&[
            "12. Documents",
            "13. Compliance",
            "14. Entity Types",
        ]);

        assert!(add_file_download(&mut collection));

        let names: Vec<&str> = collection.item.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["12. Documents", "13. FileDownload", "14. Compliance", "15. Entity Types"]
        );
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let mut collection =
            collection_with_folders(&["12. Documents", "13. Compliance", "14. Entity Types"]);

        assert!(add_file_download(&mut collection));
        let after_first: Vec<String> =
            collection.item.iter().map(|i| i.name().to_string()).collect();

        assert!(!add_file_download(&mut collection));
        let after_second: Vec<String> =
            collection.item.iter().map(|i| i.name().to_string()).collect();

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_appends_when_no_documents_folder() {
        let mut collection = collection_with_folders(&["1. Assets", "2. Categories"]);

        assert!(add_file_download(&mut collection));
        let names: Vec<&str> = collection.item.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["1. Assets", "2. Categories", "13. FileDownload"]);
    }

    #[test]
    fn test_unnumbered_folders_left_alone() {
        let mut collection =
            collection_with_folders(&["12. Documents", "Misc Folder", "14. Entity Types"]);

        assert!(add_file_download(&mut collection));
        let names: Vec<&str> = collection.item.iter().map(|i| i.name()).collect();
        assert_eq!(
            names,
            vec!["12. Documents", "13. FileDownload", "Misc Folder", "15. Entity Types"]
        );
    }

    #[test]
    fn test_split_numbered() {
        assert_eq!(split_numbered("13. Documents"), Some((13, "Documents")));
        assert_eq!(split_numbered("Documents"), None);
        assert_eq!(split_numbered("x. Documents"), None);
    }
}
