//! Logged-in-user variant of the Need Your Attention endpoint.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use serde_json::Map;

use super::types::{self, Collection, Folder, Header, Item, RequestItem, RequestSpec, Url};

const LOGIN_USER_NOTE: &str = "\n\n**Note:** This endpoint automatically extracts the logged-in \
user information from the Authorization token for audit purposes. The data returned includes all \
entities, but the audit section will contain the login userId and loginUsername extracted from \
the JWT token.";

const FULL_DESCRIPTION: &str = r#"Get comprehensive 'Need Your Attention' data for the logged-in user.

**Endpoint:** GET /api/asset/v1/userlinks/need-your-attention

**Authentication:**
- Requires Authorization header with Bearer token
- The endpoint automatically extracts the logged-in user information from the token
- Login userId and username are included in the audit section of the response

**This endpoint returns:**
- **All Master Data:**
  - Users (from asset user links)
  - Assets (with category, subcategory, make, model, status, serial number, purchase date)
  - Components
  - Warranties (with asset details, dates, provider, status, terms)
  - AMCs (with asset details, dates, status)
  - Makes (with subcategory info)
  - Models (with make info)
  - Categories
  - Sub-categories (with category info)
  - Vendors (with contact details, address)
  - Outlets (with address, contact info, vendor info)
  - Statuses (with code, description, category)

- **Summary Counts:**
  - Total counts for all entity types

- **Attention Indicators:**
  - `expiringWarranties`: Warranties expiring within 30 days
  - `expiringWarrantiesCount`: Count of expiring warranties
  - `expiringAmcs`: AMCs expiring within 30 days
  - `expiringAmcsCount`: Count of expiring AMCs
  - `assetsWithoutWarranty`: Assets that don't have a warranty
  - `assetsWithoutWarrantyCount`: Count of assets without warranty
  - `assetsWithoutAmc`: Assets that don't have an AMC
  - `assetsWithoutAmcCount`: Count of assets without AMC
  - `unassignedAssets`: Assets not assigned to any user
  - `unassignedAssetsCount`: Count of unassigned assets

- **Audit Information:**
  - `loginUserId`: User ID extracted from JWT token
  - `loginUsername`: Username extracted from JWT token
  - `requestedAt`: Timestamp of the request
  - `requestType`: "NEED_YOUR_ATTENTION"

**Use Cases:**
- Dashboard overview showing all entities and attention items
- Identifying items that need attention (expiring warranties, unassigned assets, etc.)
- System health monitoring
- Reporting and analytics

**Note:** The logged-in user information is automatically extracted from the Authorization token. Make sure the token contains valid userId and username claims."#;

fn logged_in_user_request() -> RequestItem {
    RequestItem {
        name: "Get Need Your Attention (For Logged-In User)".into(),
        request: RequestSpec {
            method: "GET".into(),
            header: vec![
                Header::text("Authorization", "Bearer {{accessToken}}").describe(
                    "JWT Bearer token from auth-service. The token is used to extract login \
                     userId and username for audit purposes.",
                ),
                Header::text("Content-Type", "application/json"),
            ],
            body: None,
            url: Url {
                raw: "{{assetbaseUrl}}/api/asset/v1/userlinks/need-your-attention".into(),
                host: vec!["{{assetbaseUrl}}".into()],
                path: vec![
                    "api".into(),
                    "asset".into(),
                    "v1".into(),
                    "userlinks".into(),
                    "need-your-attention".into(),
                ],
                query: Vec::new(),
                variable: Vec::new(),
                extra: Map::new(),
            },
            description: Some(FULL_DESCRIPTION.into()),
            extra: Map::new(),
        },
        response: Vec::new(),
        extra: Map::new(),
    }
}

fn find_userlink_folder(collection: &mut Collection) -> Option<&mut Folder> {
    collection
        .item
        .iter_mut()
        .filter_map(|i| i.as_folder_mut())
        .find(|f| f.name.contains("UserLink"))
}

/// When a Need Your Attention request already exists, append the logged-in
/// user note to its description (unless one is already there); otherwise add
/// the full request. Returns false when no UserLink folder exists.
pub fn add_attention_variant(collection: &mut Collection) -> bool {
    let Some(folder) = find_userlink_folder(collection) else {
        return false;
    };

    let existing = folder.item.iter_mut().find_map(|item| match item {
        Item::Request(r) if r.name.contains("Need Your Attention") => Some(r),
        _ => None,
    });

    match existing {
        Some(request) => {
            let description = request.request.description.clone().unwrap_or_default();
            let lower = description.to_lowercase();
            if !lower.contains("login user") && !lower.contains("logged-in") {
                request.request.description = Some(description + LOGIN_USER_NOTE);
            }
        }
        None => {
            folder
                .item
                .push(Item::Request(Box::new(logged_in_user_request())));
        }
    }

    true
}

pub fn run(path: &Path) -> Result<()> {
    println!("Adding Need Your Attention endpoint for logged-in user...");

    let mut collection = types::load_collection(path)?;
    if add_attention_variant(&mut collection) {
        types::save_collection(&collection, path)?;
        println!("{} collection updated", "Done:".green());
    } else {
        println!("  UserLink folder not found!");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::postman::builder::RequestBuilder;
    use crate::postman::types::{Info, SCHEMA_V2_1};

    fn collection_with_userlink(requests: Vec<RequestItem>) -> Collection {
        Collection {
            info: Info {
                postman_id: "test".into(),
                name: "Test".into(),
                description: None,
                schema: SCHEMA_V2_1.into(),
                exporter_id: None,
                extra: Map::new(),
            },
            item: vec![Folder::with_requests("9. UserLink", requests)],
            variable: Vec::new(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_note_appended_to_existing_request() {
        let existing = RequestBuilder::new(
            "Get Need Your Attention",
            "GET",
            "/api/asset/v1/userlinks/need-your-attention",
        )
        .describe("Get comprehensive attention data")
        .build();
        let mut collection = collection_with_userlink(vec![existing]);

        assert!(add_attention_variant(&mut collection));

        let folder = collection.item[0].as_folder().unwrap();
        assert_eq!(folder.item.len(), 1);
        let description = folder
            .requests()
            .next()
            .unwrap()
            .request
            .description
            .as_deref()
            .unwrap();
        assert!(description.contains("logged-in user information"));
    }

    #[test]
    fn test_note_not_appended_twice() {
        let existing = RequestBuilder::new(
            "Get Need Your Attention",
            "GET",
            "/api/asset/v1/userlinks/need-your-attention",
        )
        .describe("Returns attention data for the logged-in user")
        .build();
        let mut collection = collection_with_userlink(vec![existing]);

        add_attention_variant(&mut collection);

        let folder = collection.item[0].as_folder().unwrap();
        let description = folder
            .requests()
            .next()
            .unwrap()
            .request
            .description
            .as_deref()
            .unwrap();
        assert_eq!(description, "Returns attention data for the logged-in user");
    }

    #[test]
    fn test_full_request_added_when_missing() {
        let mut collection = collection_with_userlink(vec![]);

        assert!(add_attention_variant(&mut collection));

        let folder = collection.item[0].as_folder().unwrap();
        assert_eq!(folder.item.len(), 1);
        assert_eq!(
            folder.requests().next().unwrap().name,
            "Get Need Your Attention (For Logged-In User)"
        );
    }

    #[test]
    fn test_no_userlink_folder() {
        let mut collection = collection_with_userlink(vec![]);
        collection.item[0].set_name("9. Something Else");
        assert!(!add_attention_variant(&mut collection));
    }
}
