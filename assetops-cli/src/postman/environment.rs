//! Environment file maintenance: logical sorting and the documented
//! variable catalog.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde_json::Map;

use super::types::{self, EnvValue, Environment};

/// Priority ordering for environment keys. Anything not listed sorts after
/// these, alphabetically.
const SORT_ORDER: &[&str] = &[
    // Base configuration
    "assetbaseUrl",
    "accessToken",
    // User context
    "userId",
    "username",
    "projectType",
    // Entity IDs
    "amcId",
    "assetId",
    "categoryId",
    "componentId",
    "documentId",
    "entityId",
    "entityTypeId",
    "makeId",
    "modelId",
    "outletId",
    "ruleId",
    "statusId",
    "subCategoryId",
    "targetUserId",
    "targetUsername",
    "vendorId",
    "violationId",
    "warrantyId",
    // Entity types and codes
    "entityType",
    "entityTypeCode",
    "statusCategory",
    "statusCode",
    // Status values
    "amcStatus",
    "warrantyStatus",
    // Warranty/AMC details
    "warrantyProvider",
    "warrantyTerms",
    // Dates
    "startDate",
    "endDate",
    // Document
    "docType",
    "filename",
    // Search and other
    "searchKeyword",
    "authToken",
    "assetId2",
];

/// Documented variable catalog: (key, value, type, description).
const VARIABLE_CATALOG: &[(&str, &str, &str, &str)] = &[
    ("assetbaseUrl", "http://localhost:8083", "default", "Base URL for Asset Service API"),
    ("accessToken", "", "secret", "JWT Bearer token from auth-service login endpoint"),
    ("userId", "1", "default", "Current user ID for operations"),
    ("username", "admin", "default", "Current username for operations"),
    ("projectType", "ASSET_SERVICE", "default", "Project type for notifications and audit"),
    ("assetId", "1", "default", "Asset ID for operations"),
    ("categoryId", "1", "default", "Category ID for operations"),
    ("subCategoryId", "1", "default", "SubCategory ID for operations"),
    ("makeId", "1", "default", "Make ID for operations"),
    ("modelId", "1", "default", "Model ID for operations"),
    ("vendorId", "1", "default", "Vendor ID for operations"),
    ("outletId", "1", "default", "Outlet ID for operations"),
    ("componentId", "1", "default", "Component ID for operations"),
    ("warrantyId", "1", "default", "Warranty ID for operations"),
    ("amcId", "1", "default", "AMC ID for operations"),
    ("documentId", "1", "default", "Document ID for operations"),
    ("targetUserId", "2", "default", "Target user ID for linking operations"),
    ("targetUsername", "user1", "default", "Target username for linking operations"),
    (
        "entityType",
        "ASSET",
        "default",
        "Entity type for compliance/document operations (ASSET, CATEGORY, VENDOR, etc.)",
    ),
    ("entityId", "1", "default", "Entity ID for compliance/document operations"),
    ("searchKeyword", "laptop", "default", "Search keyword for asset search"),
    ("filename", "example.pdf", "default", "File name for download operations"),
    ("ruleId", "1", "default", "Compliance rule ID"),
    ("violationId", "1", "default", "Compliance violation ID"),
];

/// Sort environment values: priority keys first in declaration order, then
/// everything else alphabetically. Stable with respect to duplicate keys.
pub fn sort_environment(environment: &mut Environment) {
    environment.values.sort_by(|a, b| {
        let rank = |key: &str| {
            SORT_ORDER
                .iter()
                .position(|k| *k == key)
                .unwrap_or(usize::MAX)
        };
        rank(&a.key).cmp(&rank(&b.key)).then_with(|| a.key.cmp(&b.key))
    });
}

fn catalog_value(key: &str, value: &str, kind: &str, description: &str) -> EnvValue {
    EnvValue {
        key: key.into(),
        value: value.into(),
        kind: Some(kind.into()),
        enabled: Some(true),
        description: Some(description.into()),
        extra: Map::new(),
    }
}

/// Upsert the documented variable catalog into an environment: existing
/// entries are replaced in place, new ones appended.
pub fn update_environment(environment: &mut Environment) {
    for &(key, value, kind, description) in VARIABLE_CATALOG {
        let replacement = catalog_value(key, value, kind, description);
        match environment.values.iter_mut().find(|v| v.key == key) {
            Some(existing) => *existing = replacement,
            None => environment.values.push(replacement),
        }
    }
}

fn environment_scaffold() -> Environment {
    Environment {
        id: "asset-service-env".into(),
        name: "Asset Service - Local".into(),
        values: Vec::new(),
        scope: Some("environment".into()),
        extra: Map::new(),
    }
}

pub fn run_sort(path: &Path) -> Result<()> {
    println!("Sorting environment variables...");

    let mut environment = types::load_environment(path)?;
    sort_environment(&mut environment);
    types::save_environment(&environment, path)?;

    println!("{} environment variables sorted", "Done:".green());
    println!("   Total variables: {}", environment.values.len());

    Ok(())
}

/// Apply the variable catalog to `path`, creating the file scaffold when it
/// does not exist yet.
pub fn run_update(path: &Path) -> Result<()> {
    let mut environment = if path.exists() {
        types::load_environment(path)?
    } else {
        log::debug!("environment file missing, creating scaffold: {}", path.display());
        environment_scaffold()
    };

    update_environment(&mut environment);
    types::save_environment(&environment, path)?;

    println!("{} environment file updated: {}", "Done:".green(), path.display());
    println!("   Total variables: {}", environment.values.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_keys(keys: &[&str]) -> Environment {
        let mut env = environment_scaffold();
        env.values = keys
            .iter()
            .map(|k| EnvValue {
                key: k.to_string(),
                value: "x".into(),
                kind: Some("default".into()),
                enabled: Some(true),
                description: None,
                extra: Map::new(),
            })
            .collect();
        env
    }

    #[test]
    fn test_sort_priority_then_alphabetical() {
        let mut env = env_with_keys(&["zzz", "userId", "filename", "aaa", "assetbaseUrl"]);
        sort_environment(&mut env);

        let keys: Vec<&str> = env.values.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(keys, vec!["assetbaseUrl", "userId", "filename", "aaa", "zzz"]);
    }

    #[test]
    fn test_sort_is_union_of_input_keys() {
        let input = ["warrantyId", "docType", "custom1", "accessToken", "custom2"];
        let mut env = env_with_keys(&input);
        sort_environment(&mut env);

        assert_eq!(env.values.len(), input.len());
        let mut sorted_in: Vec<&str> = input.to_vec();
        sorted_in.sort_unstable();
        let mut sorted_out: Vec<&str> = env.values.iter().map(|v| v.key.as_str()).collect();
        sorted_out.sort_unstable();
        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn test_update_replaces_in_place_and_appends() {
        let mut env = env_with_keys(&["custom", "assetId"]);
        update_environment(&mut env);

        // Existing assetId slot is replaced, not moved.
        assert_eq!(env.values[1].key, "assetId");
        assert_eq!(env.values[1].description.as_deref(), Some("Asset ID for operations"));

        // Untracked key untouched, catalog keys appended after it.
        assert_eq!(env.values[0].key, "custom");
        assert_eq!(env.values.len(), 1 + VARIABLE_CATALOG.len());

        let token = env.values.iter().find(|v| v.key == "accessToken").unwrap();
        assert_eq!(token.kind.as_deref(), Some("secret"));
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut env = environment_scaffold();
        update_environment(&mut env);
        let first = env.values.len();
        update_environment(&mut env);
        assert_eq!(env.values.len(), first);
    }
}
