//! Merge the per-controller collections and environments into single
//! consolidated documents.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde_json::Map;

use super::types::{
    self, Collection, Environment, Info, Item, Variable, SCHEMA_V2_1,
};

pub const CONSOLIDATED_COLLECTION_FILE: &str =
    "Asset_Service_Consolidated.postman_collection.json";
pub const CONSOLIDATED_ENVIRONMENT_FILE: &str =
    "Asset_Service_Consolidated_Environment.postman_environment.json";

/// Source collection files, keyed for the folder plan below.
const COLLECTION_SOURCES: &[(&str, &str)] = &[
    ("main", "Asset_Service_API.postman_collection.json"),
    ("complete", "Complete_Asset_Creation_API.postman_collection.json"),
    ("compliance", "Compliance_Agent_API.postman_collection.json"),
    ("master", "Master_Data_API.postman_collection.json"),
    ("userlink", "UserLinkController.postman_collection.json"),
    ("warranty", "Warranty_AMC_Controllers.postman_collection.json"),
];

const ENVIRONMENT_SOURCES: &[&str] = &[
    "Asset_Service_Environment.postman_environment.json",
    "Compliance_Agent_Environment.postman_environment.json",
    "Warranty_AMC_Environment.postman_environment.json",
];

/// (consolidated folder name, source collection key, source folder name).
/// A `None` source folder pulls every folder of that collection.
const FOLDER_PLAN: &[(&str, &str, Option<&str>)] = &[
    ("1. Assets", "main", Some("1. Assets")),
    ("2. Complete Asset Creation", "complete", Some("1. Complete Asset Creation")),
    ("3. Categories", "main", Some("2. Categories")),
    ("4. SubCategories", "main", Some("3. SubCategories")),
    ("5. Makes", "main", Some("4. Makes")),
    ("6. Models", "main", Some("5. Models")),
    ("7. Vendors", "main", Some("6. Vendors")),
    ("8. Outlets", "main", Some("7. Outlets")),
    ("9. Components", "main", Some("8. Components")),
    ("10. User Links", "userlink", None),
    ("11. Warranty", "warranty", Some("1. Warranty Operations")),
    ("12. AMC", "warranty", Some("2. AMC Operations")),
    ("13. Documents", "main", Some("12. Documents")),
    ("14. Master Data", "master", None),
    ("15. Compliance", "compliance", None),
    ("16. Compliance Rules", "main", Some("14. Compliance Rules")),
    ("17. Entity Types", "main", Some("15. Entity Types")),
    ("18. Status", "main", Some("16. Status")),
    ("19. Master Data Agent", "main", Some("17. Master Data Agent")),
    ("20. User Asset Link Agent", "main", Some("18. User Asset Link Agent")),
    ("21. Audit Agent", "main", Some("19. Audit Agent")),
];

const CONSOLIDATED_DESCRIPTION: &str = "Complete consolidated Postman collection for Asset Management Service.

**This collection includes:**
- All Asset CRUD operations (Create, Read, Update, Delete, Search, Bulk operations)
- Complete Asset Creation (one-go endpoint with warranty, document, and user assignment)
- Category, SubCategory, Make, Model management
- Vendor and Outlet management
- Component management
- Warranty and AMC operations
- Document upload and management
- User Link operations (link/delink assets, components, etc.)
- Master Data API (comprehensive data retrieval)
- Need Your Attention API (attention indicators)
- Compliance validation and rules
- Audit logging
- Status and Entity Type management
- File download operations

**Features:**
- All endpoints from all controllers
- Environment variables for easy configuration
- Comprehensive request examples
- Organized by functional areas

**Environment Variables:**
See Asset_Service_Consolidated_Environment.postman_environment.json for all available variables.";

/// Assemble the consolidated collection from already-loaded sources.
pub fn consolidate(sources: &HashMap<&str, Collection>) -> Collection {
    let mut consolidated = Collection {
        info: Info {
            postman_id: "asset-service-consolidated-complete".into(),
            name: "Asset Service - Complete Consolidated API Collection".into(),
            description: Some(CONSOLIDATED_DESCRIPTION.into()),
            schema: SCHEMA_V2_1.into(),
            exporter_id: Some("32725094".into()),
            extra: Map::new(),
        },
        item: Vec::new(),
        variable: Vec::new(),
        extra: Map::new(),
    };

    for &(folder_name, coll_key, source_folder) in FOLDER_PLAN {
        let Some(coll) = sources.get(coll_key) else {
            continue;
        };

        match source_folder {
            None => {
                consolidated.item.extend(coll.item.iter().cloned());
            }
            Some(source_name) => {
                if let Some(item) = coll.item.iter().find(|i| i.name() == source_name) {
                    let mut clone = item.clone();
                    clone.set_name(folder_name);
                    consolidated.item.push(clone);
                } else {
                    log::warn!("folder '{}' not found in '{}' collection", source_name, coll_key);
                }
            }
        }
    }

    consolidated.variable = merge_variables(sources);
    consolidated
}

/// Collection variables across all sources, first occurrence of a key wins.
/// Iteration follows the source table order so the result is deterministic.
fn merge_variables(sources: &HashMap<&str, Collection>) -> Vec<Variable> {
    let mut merged: Vec<Variable> = Vec::new();
    for &(key, _) in COLLECTION_SOURCES {
        let Some(coll) = sources.get(key) else { continue };
        for var in &coll.variable {
            if !merged.iter().any(|v| v.key == var.key) {
                merged.push(var.clone());
            }
        }
    }
    merged
}

/// Merge environment values, deduplicating by key. A later source can fill in
/// a description the first occurrence was missing.
pub fn merge_environments(environments: &[Environment]) -> Environment {
    let mut merged = Environment {
        id: "asset-service-consolidated-env".into(),
        name: "Asset Service - Consolidated Environment".into(),
        values: Vec::new(),
        scope: Some("environment".into()),
        extra: Map::new(),
    };

    for env in environments {
        for value in &env.values {
            match merged.values.iter_mut().find(|v| v.key == value.key) {
                None => merged.values.push(value.clone()),
                Some(existing) => {
                    if existing.description.is_none() && value.description.is_some() {
                        existing.description = value.description.clone();
                    }
                }
            }
        }
    }

    merged
}

/// Load the source files from `dir`, consolidate, and write both outputs
/// there. Missing source files are skipped with a warning so a partial
/// checkout still produces a usable collection.
pub fn run(dir: &Path) -> Result<()> {
    println!("Consolidating Postman collections and environments...");

    let mut sources: HashMap<&str, Collection> = HashMap::new();
    for &(key, file) in COLLECTION_SOURCES {
        let path = dir.join(file);
        if path.exists() {
            sources.insert(key, types::load_collection(&path)?);
        } else {
            log::warn!("source collection missing, skipping: {}", path.display());
        }
    }

    let consolidated = consolidate(&sources);
    let collection_path = dir.join(CONSOLIDATED_COLLECTION_FILE);
    types::save_collection(&consolidated, &collection_path)?;
    println!(
        "{} consolidated collection: {}",
        "Created".green(),
        collection_path.display()
    );
    println!("   Total folders: {}", consolidated.item.len());
    println!("   Total variables: {}", consolidated.variable.len());

    let mut environments = Vec::new();
    for file in ENVIRONMENT_SOURCES {
        let path = dir.join(file);
        if path.exists() {
            environments.push(types::load_environment(&path)?);
        } else {
            log::warn!("source environment missing, skipping: {}", path.display());
        }
    }

    let merged_env = merge_environments(&environments);
    let env_path = dir.join(CONSOLIDATED_ENVIRONMENT_FILE);
    types::save_environment(&merged_env, &env_path)?;
    println!(
        "{} consolidated environment: {}",
        "Created".green(),
        env_path.display()
    );
    println!("   Total environment variables: {}", merged_env.values.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postman::builder::RequestBuilder;
    use crate::postman::types::{EnvValue, Folder};

    fn collection_with(folders: Vec<(&str, usize)>, variables: Vec<Variable>) -> Collection {
        Collection {
            info: Info {
                postman_id: "test".into(),
                name: "Test".into(),
                description: None,
                schema: SCHEMA_V2_1.into(),
                exporter_id: None,
                extra: Map::new(),
            },
            item: folders
                .into_iter()
                .map(|(name, n)| {
                    let requests = (0..n)
                        .map(|i| {
                            RequestBuilder::new(format!("Req {i}"), "GET", "/api/asset/v1/assets")
                                .build()
                        })
                        .collect();
                    Folder::with_requests(name, requests)
                })
                .collect(),
            variable: variables,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_named_folder_is_cloned_and_renamed() {
        let mut sources = HashMap::new();
        sources.insert(
            "main",
            collection_with(
                vec![("1. Assets", 2), ("2. Categories", 3)],
                vec![Variable::string("assetbaseUrl", "http://localhost:8083")],
            ),
        );

        let merged = consolidate(&sources);
        let names: Vec<&str> = merged.item.iter().map(|i| i.name()).collect();
        assert!(names.contains(&"1. Assets"));
        assert!(names.contains(&"3. Categories"));
        assert!(!names.contains(&"2. Categories"));
    }

    #[test]
    fn test_none_source_appends_all_folders() {
        let mut sources = HashMap::new();
        sources.insert(
            "userlink",
            collection_with(vec![("Link Ops", 4), ("Attention", 1)], vec![]),
        );

        let merged = consolidate(&sources);
        let names: Vec<&str> = merged.item.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Link Ops", "Attention"]);
    }

    #[test]
    fn test_variable_merge_first_wins() {
        let mut sources = HashMap::new();
        sources.insert(
            "main",
            collection_with(vec![], vec![Variable::string("assetbaseUrl", "http://localhost:8083")]),
        );
        sources.insert(
            "warranty",
            collection_with(
                vec![],
                vec![
                    Variable::string("assetbaseUrl", "http://other:9999"),
                    Variable::string("warrantyId", "1"),
                ],
            ),
        );

        let merged = consolidate(&sources);
        assert_eq!(merged.variable.len(), 2);
        let base = merged.variable.iter().find(|v| v.key == "assetbaseUrl").unwrap();
        assert_eq!(base.value, "http://localhost:8083");
    }

    fn env_value(key: &str, description: Option<&str>) -> EnvValue {
        EnvValue {
            key: key.into(),
            value: "x".into(),
            kind: Some("default".into()),
            enabled: Some(true),
            description: description.map(String::from),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_environment_merge_dedupes_and_backfills_description() {
        let first = Environment {
            id: "a".into(),
            name: "A".into(),
            values: vec![env_value("assetId", None), env_value("userId", Some("acting user"))],
            scope: Some("environment".into()),
            extra: Map::new(),
        };
        let second = Environment {
            id: "b".into(),
            name: "B".into(),
            values: vec![env_value("assetId", Some("asset under test")), env_value("ruleId", None)],
            scope: Some("environment".into()),
            extra: Map::new(),
        };

        let merged = merge_environments(&[first, second]);
        assert_eq!(merged.values.len(), 3);
        let asset = merged.values.iter().find(|v| v.key == "assetId").unwrap();
        assert_eq!(asset.description.as_deref(), Some("asset under test"));
    }
}
