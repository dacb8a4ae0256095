//! Fixups for the consolidated collection: base-URL variable rename and
//! endpoints missing from the source collections.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use super::builder::RequestBuilder;
use super::types::{self, Collection, Folder, Header, Item, RequestItem, Variable};

/// Replace `{{baseUrl}}` with `{{assetbaseUrl}}` in every `raw` string and
/// `host` list of the document, then fix up the variable entry itself.
pub fn rewrite_base_url(collection: &mut Collection) -> Result<()> {
    let mut value =
        serde_json::to_value(&*collection).context("Failed to convert collection for rewrite")?;
    rewrite_placeholder(&mut value);
    *collection =
        serde_json::from_value(value).context("Failed to restore collection after rewrite")?;

    for var in &mut collection.variable {
        if var.key == "baseUrl" {
            var.key = "assetbaseUrl".into();
            var.value = "http://localhost:8083".into();
            var.description = Some("Base URL for Asset Service API".into());
        }
    }

    Ok(())
}

fn rewrite_placeholder(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                match (key.as_str(), &mut *entry) {
                    ("raw", Value::String(s)) => {
                        *s = s.replace("{{baseUrl}}", "{{assetbaseUrl}}");
                    }
                    ("host", Value::Array(hosts)) => {
                        for host in hosts {
                            if let Value::String(s) = host {
                                *s = s.replace("{{baseUrl}}", "{{assetbaseUrl}}");
                            }
                        }
                    }
                    _ => rewrite_placeholder(entry),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                rewrite_placeholder(item);
            }
        }
        _ => {}
    }
}

fn auth_header() -> Vec<Header> {
    vec![Header::text("Authorization", "Bearer {{accessToken}}")]
}

fn missing_audit_endpoints() -> Vec<RequestItem> {
    vec![
        RequestBuilder::new("Get Recent Audit Logs", "GET", "/api/asset/v1/audit/recent")
            .describe("Get recent audit logs with optional limit")
            .headers(auth_header())
            .query_described("limit", "100", "Number of recent logs to retrieve (default: 100)")
            .build(),
        RequestBuilder::new("Search Audit Logs", "GET", "/api/asset/v1/audit/search")
            .describe("Search audit logs by keyword")
            .headers(auth_header())
            .query_described("keyword", "{{searchKeyword}}", "Search keyword")
            .build(),
        RequestBuilder::new("Get Audit Statistics", "GET", "/api/asset/v1/audit/statistics")
            .describe("Get audit statistics")
            .headers(auth_header())
            .build(),
        RequestBuilder::new("Cleanup Old Audit Logs", "POST", "/api/asset/v1/audit/cleanup")
            .describe("Cleanup old audit logs")
            .headers(auth_header())
            .query_described(
                "daysToKeep",
                "90",
                "Number of days to keep (logs older than this will be deleted)",
            )
            .build(),
    ]
}

fn missing_document_endpoints() -> Vec<RequestItem> {
    use super::types::FormParam;

    vec![
        RequestBuilder::new("Bulk Upload Documents", "POST", "/api/asset/v1/documents/bulk")
            .describe("Bulk upload documents")
            .headers(vec![
                Header::text("Authorization", "Bearer {{accessToken}}"),
                Header::text("Content-Type", "application/json"),
            ])
            .json_body(serde_json::json!({
                "userId": "{{userId}}",
                "username": "{{username}}",
                "projectType": "{{projectType}}",
                "documents": [
                    {
                        "entityType": "ASSET",
                        "entityId": "{{assetId}}",
                        "docType": "PDF",
                        "fileName": "document1.pdf"
                    }
                ]
            }))
            .build(),
        RequestBuilder::new(
            "Bulk Upload Documents (Excel)",
            "POST",
            "/api/asset/v1/documents/bulk/excel",
        )
        .describe("Bulk upload documents from Excel")
        .headers(auth_header())
        .form_body(vec![
            FormParam::file("file"),
            FormParam::text("userId", "{{userId}}"),
            FormParam::text("username", "{{username}}"),
            FormParam::text("projectType", "{{projectType}}"),
        ])
        .build(),
    ]
}

fn find_folder_mut<'a>(collection: &'a mut Collection, needle: &str) -> Option<&'a mut Folder> {
    collection
        .item
        .iter_mut()
        .filter_map(|i| i.as_folder_mut())
        .find(|f| f.name.contains(needle))
}

/// Add the audit endpoints later controller revisions introduced, keyed by
/// request name so a second run leaves the folder untouched. The folder is
/// created when the collection predates the audit agent entirely.
pub fn add_missing_audit_endpoints(collection: &mut Collection) {
    if find_folder_mut(collection, "Audit Agent").is_none() {
        collection
            .item
            .push(Item::Folder(Folder::new("21. Audit Agent")));
    }
    let folder = find_folder_mut(collection, "Audit Agent").expect("folder just ensured");

    let existing: Vec<String> = folder.requests().map(|r| r.name.clone()).collect();
    for endpoint in missing_audit_endpoints() {
        if !existing.iter().any(|name| *name == endpoint.name) {
            folder.item.push(Item::Request(Box::new(endpoint)));
        }
    }
}

/// Add the bulk-document endpoints to the Documents folder, if it exists.
pub fn add_missing_document_endpoints(collection: &mut Collection) {
    let Some(folder) = find_folder_mut(collection, "Documents") else {
        return;
    };

    let existing: Vec<String> = folder.requests().map(|r| r.name.clone()).collect();
    for endpoint in missing_document_endpoints() {
        if !existing.iter().any(|name| *name == endpoint.name) {
            folder.item.push(Item::Request(Box::new(endpoint)));
        }
    }
}

pub fn ensure_base_url_variable(collection: &mut Collection) {
    if !collection.variable.iter().any(|v| v.key == "assetbaseUrl") {
        collection.variable.push(
            Variable::string("assetbaseUrl", "http://localhost:8083")
                .describe("Base URL for Asset Service API"),
        );
    }
}

/// Full enhancement pass: rewrite the base-URL placeholder, add the missing
/// endpoints, and save in place.
pub fn run(path: &Path) -> Result<()> {
    println!("Fixing and enhancing collection: {}", path.display());

    let mut collection = types::load_collection(path)?;

    println!("  Rewriting variable names (baseUrl -> assetbaseUrl)...");
    rewrite_base_url(&mut collection)?;

    println!("  Adding missing Audit Agent endpoints...");
    add_missing_audit_endpoints(&mut collection);

    println!("  Adding missing Document endpoints...");
    add_missing_document_endpoints(&mut collection);

    ensure_base_url_variable(&mut collection);
    types::save_collection(&collection, path)?;

    let total_requests: usize = collection.item.iter().map(|i| i.child_count()).sum();
    println!("{} collection fixed and enhanced", "Done:".green());
    println!("   Total folders: {}", collection.item.len());
    println!("   Total requests: {}", total_requests);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postman::types::{Info, SCHEMA_V2_1};
    use serde_json::Map;

    fn empty_collection() -> Collection {
        Collection {
            info: Info {
                postman_id: "test".into(),
                name: "Test".into(),
                description: None,
                schema: SCHEMA_V2_1.into(),
                exporter_id: None,
                extra: Map::new(),
            },
            item: Vec::new(),
            variable: Vec::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_rewrite_base_url_hits_raw_and_host() {
        let mut collection = empty_collection();
        let request = RequestBuilder::new("Legacy", "GET", "/api/asset/v1/assets").build();
        collection
            .item
            .push(Folder::with_requests("Legacy Folder", vec![request]));

        // Simulate a legacy document that still uses {{baseUrl}}.
        if let Some(folder) = collection.item[0].as_folder_mut() {
            if let Item::Request(r) = &mut folder.item[0] {
                r.request.url.raw = "{{baseUrl}}/api/asset/v1/assets".into();
                r.request.url.host = vec!["{{baseUrl}}".into()];
            }
        }
        collection.variable.push(Variable::string("baseUrl", "http://localhost:8080"));

        rewrite_base_url(&mut collection).unwrap();

        let folder = collection.item[0].as_folder().unwrap();
        let request = folder.requests().next().unwrap();
        assert_eq!(request.request.url.raw, "{{assetbaseUrl}}/api/asset/v1/assets");
        assert_eq!(request.request.url.host, vec!["{{assetbaseUrl}}"]);
        assert_eq!(collection.variable[0].key, "assetbaseUrl");
        assert_eq!(collection.variable[0].value, "http://localhost:8083");
    }

    #[test]
    fn test_audit_endpoints_created_and_idempotent() {
        let mut collection = empty_collection();

        add_missing_audit_endpoints(&mut collection);
        let folder = collection.item[0].as_folder().unwrap();
        assert_eq!(folder.name, "21. Audit Agent");
        assert_eq!(folder.item.len(), 4);

        // Second run must not duplicate anything.
        add_missing_audit_endpoints(&mut collection);
        assert_eq!(collection.item[0].child_count(), 4);
    }

    #[test]
    fn test_audit_endpoints_respect_existing_requests() {
        let mut collection = empty_collection();
        let existing =
            RequestBuilder::new("Get Audit Statistics", "GET", "/api/asset/v1/audit/statistics")
                .build();
        collection
            .item
            .push(Folder::with_requests("21. Audit Agent", vec![existing]));

        add_missing_audit_endpoints(&mut collection);
        assert_eq!(collection.item[0].child_count(), 4);
    }

    #[test]
    fn test_document_endpoints_skip_when_folder_absent() {
        let mut collection = empty_collection();
        add_missing_document_endpoints(&mut collection);
        assert!(collection.item.is_empty());
    }

    #[test]
    fn test_document_endpoints_added_once() {
        let mut collection = empty_collection();
        collection
            .item
            .push(Item::Folder(Folder::new("13. Documents")));

        add_missing_document_endpoints(&mut collection);
        assert_eq!(collection.item[0].child_count(), 2);

        add_missing_document_endpoints(&mut collection);
        assert_eq!(collection.item[0].child_count(), 2);
    }

    #[test]
    fn test_ensure_base_url_variable() {
        let mut collection = empty_collection();
        ensure_base_url_variable(&mut collection);
        ensure_base_url_variable(&mut collection);
        assert_eq!(collection.variable.len(), 1);
        assert_eq!(collection.variable[0].key, "assetbaseUrl");
    }
}
