//! Controller-based regrouping of the consolidated collection
//!
//! Folders accumulated from several source collections are matched back to
//! the 20 service controllers, renamed with stable numbering, and merged when
//! one controller is spread over several folders. No request is dropped or
//! duplicated in the process.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde_json::Map;

use super::types::{self, Collection, Folder, Item, Variable};

struct ControllerMapping {
    controller: &'static str,
    base_path: &'static str,
    /// Folder names this controller's endpoints may live under, across the
    /// generations of source collections.
    folders: &'static [&'static str],
}

const CONTROLLER_MAPPINGS: &[ControllerMapping] = &[
    ControllerMapping {
        controller: "AssetController",
        base_path: "/api/asset/v1/assets",
        folders: &["1. Assets", "2. Complete Asset Creation"],
    },
    ControllerMapping {
        controller: "CategoryController",
        base_path: "/api/asset/v1/categories",
        folders: &["3. Categories"],
    },
    ControllerMapping {
        controller: "SubCategoryController",
        base_path: "/api/asset/v1/subcategories",
        folders: &["4. SubCategories"],
    },
    ControllerMapping {
        controller: "MakeController",
        base_path: "/api/asset/v1/makes",
        folders: &["5. Makes"],
    },
    ControllerMapping {
        controller: "ModelController",
        base_path: "/api/asset/v1/models",
        folders: &["6. Models"],
    },
    ControllerMapping {
        controller: "VendorController",
        base_path: "/api/asset/v1/vendors",
        folders: &["7. Vendors"],
    },
    ControllerMapping {
        controller: "OutletController",
        base_path: "/api/asset/v1/outlets",
        folders: &["8. Outlets"],
    },
    ControllerMapping {
        controller: "ComponentController",
        base_path: "/api/asset/v1/components",
        folders: &["9. Components"],
    },
    ControllerMapping {
        controller: "UserLinkController",
        base_path: "/api/asset/v1/userlinks",
        folders: &[
            "1. Link Entity (Universal)",
            "2. Delink Entity (Universal)",
            "3. Link Multiple Entities",
            "4. Delink Multiple Entities",
            "5. Query Operations",
            "6. Master Data API",
            "1. Get All Master Data",
            "2. Get Master Data by User ID",
            "3. Need Your Attention",
        ],
    },
    ControllerMapping {
        controller: "AssetWarrantyController",
        base_path: "/api/asset/v1/warranty",
        folders: &["11. Warranty", "1. Warranty Operations"],
    },
    ControllerMapping {
        controller: "AssetAmcController",
        base_path: "/api/asset/v1/amc",
        folders: &["12. AMC", "2. AMC Operations"],
    },
    ControllerMapping {
        controller: "DocumentController",
        base_path: "/api/asset/v1/documents",
        folders: &["13. Documents", "12. Documents"],
    },
    ControllerMapping {
        controller: "FileDownloadController",
        base_path: "/api/asset/v1/files",
        folders: &[],
    },
    ControllerMapping {
        controller: "ComplianceController",
        base_path: "/api/asset/v1/compliance",
        folders: &[
            "Compliance Validation",
            "Compliance Status",
            "Compliance Violations",
            "Compliance Reports",
            "Compliance Metrics",
        ],
    },
    ControllerMapping {
        controller: "ComplianceRuleController",
        base_path: "/api/asset/v1/compliance/rules",
        folders: &["16. Compliance Rules", "Compliance Rules", "14. Compliance Rules"],
    },
    ControllerMapping {
        controller: "EntityTypeController",
        base_path: "/api/asset/v1/entity-types",
        folders: &["17. Entity Types", "15. Entity Types"],
    },
    ControllerMapping {
        controller: "StatusController",
        base_path: "/api/asset/v1/statuses",
        folders: &["18. Status", "16. Status"],
    },
    ControllerMapping {
        controller: "MasterDataAgentController",
        base_path: "/api/asset/v1/masters",
        folders: &["19. Master Data Agent", "17. Master Data Agent"],
    },
    ControllerMapping {
        controller: "UserAssetLinkAgentController",
        base_path: "/api/asset/v1/user-asset-links",
        folders: &["20. User Asset Link Agent", "18. User Asset Link Agent"],
    },
    ControllerMapping {
        controller: "AuditAgentController",
        base_path: "/api/asset/v1/audit",
        folders: &["21. Audit Agent", "19. Audit Agent"],
    },
];

const REORGANIZED_DESCRIPTION: &str = "Complete consolidated Postman collection for Asset Management Service, organized by controller structure.

**Controller-Based Organization (20 Controllers):**
1. AssetController - Asset CRUD, Search, Bulk, Complete Creation
2. CategoryController - Category management
3. SubCategoryController - SubCategory management
4. MakeController - Make management
5. ModelController - Model management
6. VendorController - Vendor management
7. OutletController - Outlet management
8. ComponentController - Component management
9. UserLinkController - User linking, Master Data, Need Your Attention
10. AssetWarrantyController - Warranty operations
11. AssetAmcController - AMC operations
12. DocumentController - Document upload/management
13. FileDownloadController - File download operations
14. ComplianceController - Compliance validation, status, violations, reports, metrics
15. ComplianceRuleController - Compliance rules management
16. EntityTypeController - Entity type management
17. StatusController - Status management
18. MasterDataAgentController - Master data agent operations
19. UserAssetLinkAgentController - User asset link agent operations
20. AuditAgentController - Audit logging and tracking

**Features:**
- All endpoints from all 20 controllers
- Organized by controller structure
- Environment and global variables properly configured
- Comprehensive request examples
- Consistent variable naming (assetbaseUrl)

**Environment Variables:**
See Asset_Service_Consolidated_Environment.postman_environment.json for all 39 environment variables.";

/// Required collection variables, in the order they must appear.
fn required_variables() -> Vec<Variable> {
    vec![
        Variable::string("assetbaseUrl", "http://localhost:8083")
            .describe("Base URL for Asset Service API. Default: http://localhost:8083"),
        Variable::string("accessToken", "")
            .describe("JWT Bearer token obtained from auth-service login endpoint"),
        Variable::string("userId", "1").describe("Current user ID for operations"),
        Variable::string("username", "admin").describe("Current username for operations"),
        Variable::string("projectType", "ASSET_SERVICE")
            .describe("Project type for notifications and audit"),
    ]
}

fn folder_matches_base_path(item: &Item, base_path: &str) -> bool {
    let Some(folder) = item.as_folder() else {
        return false;
    };
    folder
        .requests()
        .any(|r| r.request.url.raw.contains(base_path))
}

/// Regroup top-level folders by controller, renumbering as we go. Leftover
/// folders keep their relative order and continue the numbering.
pub fn reorganize(collection: &mut Collection) {
    let mut pool: Vec<Option<Item>> = std::mem::take(&mut collection.item)
        .into_iter()
        .map(Some)
        .collect();
    let mut reorganized: Vec<Item> = Vec::new();
    let mut counter = 1usize;

    for mapping in CONTROLLER_MAPPINGS {
        let short_name = mapping.controller.trim_end_matches("Controller");
        let numbered = format!("{counter}. {short_name}");

        // Match by known folder name first.
        let mut matched: Vec<Item> = Vec::new();
        for &candidate in mapping.folders {
            for slot in pool.iter_mut() {
                if slot.as_ref().is_some_and(|i| i.name() == candidate) {
                    matched.push(slot.take().unwrap());
                    break;
                }
            }
        }

        // Fall back to URL inspection when nothing matched by name. Every
        // folder serving the base path is claimed so they merge below.
        if matched.is_empty() {
            for slot in pool.iter_mut() {
                if slot
                    .as_ref()
                    .is_some_and(|i| folder_matches_base_path(i, mapping.base_path))
                {
                    matched.push(slot.take().unwrap());
                }
            }
        }

        match matched.len() {
            0 => continue,
            1 => {
                let mut item = matched.pop().unwrap();
                item.set_name(numbered);
                reorganized.push(item);
            }
            _ => {
                let mut merged = Folder::new(numbered);
                for item in matched {
                    match item {
                        Item::Folder(f) => merged.item.extend(f.item),
                        request @ Item::Request(_) => merged.item.push(request),
                    }
                }
                reorganized.push(Item::Folder(merged));
            }
        }
        counter += 1;
    }

    // Anything not claimed by a controller is appended with continued
    // numbering.
    for slot in pool {
        if let Some(mut item) = slot {
            let renamed = format!("{counter}. {}", item.name());
            item.set_name(renamed);
            reorganized.push(item);
            counter += 1;
        }
    }

    collection.item = reorganized;
    collection.info.description = Some(REORGANIZED_DESCRIPTION.into());
}

/// Required variables first, in order, preserving any existing entry for a
/// required key; everything else follows alphabetically.
pub fn ensure_global_variables(collection: &mut Collection) {
    let existing = std::mem::take(&mut collection.variable);
    let mut result: Vec<Variable> = Vec::new();

    for required in required_variables() {
        match existing.iter().find(|v| v.key == required.key) {
            Some(current) => result.push(current.clone()),
            None => result.push(required),
        }
    }

    let mut remaining: Vec<Variable> = existing
        .into_iter()
        .filter(|v| !result.iter().any(|r| r.key == v.key))
        .collect();
    remaining.sort_by(|a, b| a.key.cmp(&b.key));
    result.extend(remaining);

    collection.variable = result;
}

/// Load, reorganize, sort variables, save in place, and print the resulting
/// folder layout.
pub fn run(path: &Path) -> Result<()> {
    println!("Reorganizing collection by controller structure...");

    let mut collection = types::load_collection(path)?;
    reorganize(&mut collection);
    ensure_global_variables(&mut collection);
    types::save_collection(&collection, path)?;

    println!("{} collection reorganized by controllers", "Done:".green());
    println!("   Total folders: {}", collection.item.len());
    println!("   Total collection variables: {}", collection.variable.len());
    println!("\nFolder organization (by controller):");
    for (i, item) in collection.item.iter().enumerate() {
        println!("  {:2}. {} ({} requests)", i + 1, item.name(), item.child_count());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postman::builder::RequestBuilder;
    use crate::postman::types::{Info, RequestItem, SCHEMA_V2_1};
    use std::collections::BTreeMap;

    fn folder(name: &str, requests: Vec<RequestItem>) -> Item {
        Folder::with_requests(name, requests)
    }

    fn request(name: &str, path: &str) -> RequestItem {
        RequestBuilder::new(name, "GET", path).build()
    }

    fn collection_of(items: Vec<Item>) -> Collection {
        Collection {
            info: Info {
                postman_id: "test".into(),
                name: "Test".into(),
                description: None,
                schema: SCHEMA_V2_1.into(),
                exporter_id: None,
                extra: Map::new(),
            },
            item: items,
            variable: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Multiset of request names across the whole tree.
    fn request_multiset(items: &[Item]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        fn walk(items: &[Item], counts: &mut BTreeMap<String, usize>) {
            for item in items {
                match item {
                    Item::Request(r) => *counts.entry(r.name.clone()).or_default() += 1,
                    Item::Folder(f) => walk(&f.item, counts),
                }
            }
        }
        walk(items, &mut counts);
        counts
    }

    #[test]
    fn test_single_match_renamed() {
        let mut collection = collection_of(vec![folder(
            "3. Categories",
            vec![request("List All Categories", "/api/asset/v1/categories")],
        )]);
        reorganize(&mut collection);
        assert_eq!(collection.item[0].name(), "1. Category");
    }

    #[test]
    fn test_multiple_matches_merged() {
        let mut collection = collection_of(vec![
            folder("1. Assets", vec![request("Create Asset", "/api/asset/v1/assets")]),
            folder(
                "2. Complete Asset Creation",
                vec![request("Complete Asset Creation", "/api/asset/v1/assets/complete")],
            ),
        ]);
        reorganize(&mut collection);
        assert_eq!(collection.item.len(), 1);
        assert_eq!(collection.item[0].name(), "1. Asset");
        assert_eq!(collection.item[0].child_count(), 2);
    }

    #[test]
    fn test_base_path_fallback() {
        let mut collection = collection_of(vec![folder(
            "Some Legacy Warranty Folder",
            vec![request("Create Warranty", "/api/asset/v1/warranty")],
        )]);
        reorganize(&mut collection);
        assert_eq!(collection.item[0].name(), "1. AssetWarranty");
    }

    #[test]
    fn test_base_path_fallback_merges_all_matches() {
        let mut collection = collection_of(vec![
            folder(
                "Legacy Warranty A",
                vec![request("Create Warranty", "/api/asset/v1/warranty")],
            ),
            folder(
                "Legacy Warranty B",
                vec![request("Get Warranty by ID", "/api/asset/v1/warranty/:id")],
            ),
        ]);
        reorganize(&mut collection);

        assert_eq!(collection.item.len(), 1);
        assert_eq!(collection.item[0].name(), "1. AssetWarranty");
        assert_eq!(collection.item[0].child_count(), 2);
    }

    #[test]
    fn test_leftovers_appended_with_continued_numbering() {
        let mut collection = collection_of(vec![
            folder("3. Categories", vec![request("List", "/api/asset/v1/categories")]),
            folder("Misc Experiments", vec![request("Ping", "/internal/ping")]),
        ]);
        reorganize(&mut collection);
        let names: Vec<&str> = collection.item.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["1. Category", "2. Misc Experiments"]);
    }

    #[test]
    fn test_request_multiset_preserved() {
        let mut collection = collection_of(vec![
            folder(
                "1. Assets",
                vec![
                    request("Create Asset", "/api/asset/v1/assets"),
                    request("Get Asset by ID", "/api/asset/v1/assets/:id"),
                ],
            ),
            folder(
                "2. Complete Asset Creation",
                vec![request("Complete Asset Creation", "/api/asset/v1/assets/complete")],
            ),
            folder("3. Categories", vec![request("List All Categories", "/api/asset/v1/categories")]),
            folder("Leftover", vec![request("Odd One", "/somewhere/else")]),
        ]);

        let before = request_multiset(&collection.item);
        reorganize(&mut collection);
        let after = request_multiset(&collection.item);
        assert_eq!(before, after);
    }

    #[test]
    fn test_ensure_global_variables_order() {
        let mut collection = collection_of(vec![]);
        collection.variable = vec![
            Variable::string("zebraId", "1"),
            Variable::string("assetbaseUrl", "http://example:1234"),
            Variable::string("amcId", "2"),
        ];

        ensure_global_variables(&mut collection);

        let keys: Vec<&str> = collection.variable.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["assetbaseUrl", "accessToken", "userId", "username", "projectType", "amcId", "zebraId"]
        );
        // Existing entry for a required key is preserved, not overwritten.
        assert_eq!(collection.variable[0].value, "http://example:1234");
    }
}
