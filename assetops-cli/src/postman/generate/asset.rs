//! Built-in Asset Service collection
//!
//! Covers every controller of the asset-service: asset CRUD plus search and
//! bulk uploads, the seven master-data controllers, warranty/AMC, user links,
//! statuses, entity types, compliance, scanning, the agent controllers and
//! file download. 21 numbered folders.

use serde_json::{json, Map, Value};

use crate::postman::builder::RequestBuilder;
use crate::postman::types::{
    Collection, Folder, FormParam, Info, Item, RequestItem, Variable, SCHEMA_V2_1,
};

pub fn collection() -> Collection {
    Collection {
        info: Info {
            postman_id: "asset-service-complete-v1".into(),
            name: "Asset Service - Complete API Collection".into(),
            description: Some(
                "Complete Postman collection for Asset Management Service with all controllers and endpoints"
                    .into(),
            ),
            schema: SCHEMA_V2_1.into(),
            exporter_id: Some("asset-service".into()),
            extra: Map::new(),
        },
        item: vec![
            assets_folder(),
            master_folder(2, &CATEGORIES),
            documents_folder(),
            master_folder(4, &SUBCATEGORIES),
            master_folder(5, &MAKES),
            master_folder(6, &MODELS),
            master_folder(7, &COMPONENTS),
            master_folder(8, &OUTLETS),
            master_folder(9, &VENDORS),
            coverage_folder(10, "Warranty", "warranty", warranty_create(), warranty_update()),
            coverage_folder(11, "AMC", "amc", amc_create(), amc_update()),
            user_links_folder(),
            statuses_folder(),
            entity_types_folder(),
            compliance_folder(),
            compliance_rules_folder(),
            asset_scan_folder(),
            master_data_agent_folder(),
            audit_agent_folder(),
            user_asset_link_agent_folder(),
            file_download_folder(),
        ],
        variable: vec![
            Variable::string("assetbaseUrl", "http://localhost:8083"),
            Variable::string("bearerToken", "your-jwt-token-here"),
            Variable::string("userId", "1"),
            Variable::string("username", "admin"),
            Variable::string("projectType", "ASSET_SERVICE"),
        ],
        extra: Map::new(),
    }
}

fn req(name: &str, method: &str, path: &str) -> RequestBuilder {
    RequestBuilder::new(name, method, path)
}

/// Wrap entity fields with the acting-user envelope every mutating endpoint
/// expects.
fn actor(fields: Value) -> Value {
    let mut map = Map::new();
    map.insert("userId".into(), "{{userId}}".into());
    map.insert("username".into(), "{{username}}".into());
    map.insert("projectType".into(), "{{projectType}}".into());
    if let Value::Object(extra) = fields {
        map.extend(extra);
    }
    Value::Object(map)
}

fn excel_upload(name: &str, path: &str, description: &str) -> RequestItem {
    req(name, "POST", path)
        .describe(description)
        .form_body(vec![
            FormParam::file("file"),
            FormParam::text("userId", "{{userId}}"),
            FormParam::text("username", "{{username}}"),
            FormParam::text("projectType", "{{projectType}}"),
        ])
        .build()
}

/// The favourite / most-like / sequence-order triple every entity controller
/// exposes.
fn engagement(singular: &str, base: &str) -> Vec<RequestItem> {
    vec![
        req(
            &format!("Update {singular} Favourite"),
            "PUT",
            &format!("{base}/:id/favourite"),
        )
        .describe("Toggle favourite")
        .query("isFavourite", "true")
        .build(),
        req(
            &format!("Update {singular} Most Like"),
            "PUT",
            &format!("{base}/:id/most-like"),
        )
        .describe("Toggle most like")
        .query("isMostLike", "true")
        .build(),
        req(
            &format!("Update {singular} Sequence Order"),
            "PUT",
            &format!("{base}/:id/sequence-order"),
        )
        .describe("Update sequence order")
        .query("sequenceOrder", "1")
        .build(),
    ]
}

struct MasterSpec {
    title: &'static str,
    singular: &'static str,
    /// Singular with its article, for descriptions ("a category", "an outlet")
    noun: &'static str,
    path: &'static str,
    create: fn() -> Value,
    update: fn() -> Value,
    bulk: fn() -> Value,
}

/// Standard master-data folder: CRUD, list, bulk, bulk-from-Excel and the
/// engagement triple.
fn master_folder(number: usize, spec: &MasterSpec) -> Item {
    let mut items = vec![
        req(&format!("Create {}", spec.singular), "POST", spec.path)
            .describe(format!("Create a new {}", spec.singular.to_lowercase()))
            .json_body(actor((spec.create)()))
            .build(),
        req(
            &format!("Update {}", spec.singular),
            "PUT",
            &format!("{}/:id", spec.path),
        )
        .describe(format!("Update {}", spec.noun))
        .json_body(actor((spec.update)()))
        .build(),
        req(
            &format!("Delete {}", spec.singular),
            "DELETE",
            &format!("{}/:id", spec.path),
        )
        .describe(format!("Soft delete {}", spec.noun))
        .json_body(actor(json!({})))
        .build(),
        req(&format!("List All {}", spec.title), "GET", spec.path)
            .describe(format!("Get all {}", spec.title.to_lowercase()))
            .build(),
        req(
            &format!("Get {} by ID", spec.singular),
            "GET",
            &format!("{}/:id", spec.path),
        )
        .describe(format!("Get {} by ID", spec.singular.to_lowercase()))
        .build(),
        req(
            &format!("Bulk Upload {}", spec.title),
            "POST",
            &format!("{}/bulk", spec.path),
        )
        .describe(format!("Bulk create {}", spec.title.to_lowercase()))
        .json_body(actor((spec.bulk)()))
        .build(),
        excel_upload(
            &format!("Bulk Upload {} from Excel", spec.title),
            &format!("{}/bulk/excel", spec.path),
            "Bulk upload from Excel",
        ),
    ];
    items.extend(engagement(spec.singular, spec.path));

    Folder::with_requests(format!("{number}. {}", spec.title), items)
}

static CATEGORIES: MasterSpec = MasterSpec {
    title: "Categories",
    singular: "Category",
    noun: "a category",
    path: "/api/asset/v1/categories",
    create: || json!({ "category": { "categoryName": "Electronics", "description": "Electronic devices" } }),
    update: || json!({ "category": { "categoryName": "Electronics Updated" } }),
    bulk: || json!({ "categories": [ { "categoryName": "Category 1" }, { "categoryName": "Category 2" } ] }),
};

static SUBCATEGORIES: MasterSpec = MasterSpec {
    title: "SubCategories",
    singular: "SubCategory",
    noun: "a subcategory",
    path: "/api/asset/v1/subcategories",
    create: || json!({ "subCategory": { "subCategoryName": "Laptops", "categoryId": 1 } }),
    update: || json!({ "subCategory": { "subCategoryName": "Laptops Updated" } }),
    bulk: || json!({ "subCategories": [ { "subCategoryName": "SubCat 1", "categoryId": 1 } ] }),
};

static MAKES: MasterSpec = MasterSpec {
    title: "Makes",
    singular: "Make",
    noun: "a make",
    path: "/api/asset/v1/makes",
    create: || json!({ "make": { "makeName": "Dell", "subCategoryId": 1 } }),
    update: || json!({ "make": { "makeName": "Dell Updated" } }),
    bulk: || json!({ "makes": [ { "makeName": "Make 1", "subCategoryId": 1 } ] }),
};

static MODELS: MasterSpec = MasterSpec {
    title: "Models",
    singular: "Model",
    noun: "a model",
    path: "/api/asset/v1/models",
    create: || json!({ "model": { "modelName": "XPS 15", "makeId": 1 } }),
    update: || json!({ "model": { "modelName": "XPS 15 Updated" } }),
    bulk: || json!({ "models": [ { "modelName": "Model 1", "makeId": 1 } ] }),
};

static COMPONENTS: MasterSpec = MasterSpec {
    title: "Components",
    singular: "Component",
    noun: "a component",
    path: "/api/asset/v1/components",
    create: || json!({ "component": { "componentName": "RAM 16GB", "description": "16GB DDR4 RAM" } }),
    update: || json!({ "component": { "componentName": "RAM 32GB" } }),
    bulk: || json!({ "components": [ { "componentName": "Component 1" } ] }),
};

static OUTLETS: MasterSpec = MasterSpec {
    title: "Outlets",
    singular: "Outlet",
    noun: "an outlet",
    path: "/api/asset/v1/outlets",
    create: || json!({ "outlet": { "outletName": "Best Buy", "address": "123 Main St" } }),
    update: || json!({ "outlet": { "outletName": "Best Buy Updated" } }),
    bulk: || json!({ "outlets": [ { "outletName": "Outlet 1" } ] }),
};

static VENDORS: MasterSpec = MasterSpec {
    title: "Vendors",
    singular: "Vendor",
    noun: "a vendor",
    path: "/api/asset/v1/vendors",
    create: || json!({ "vendor": { "vendorName": "Dell Inc", "contactEmail": "contact@dell.com" } }),
    update: || json!({ "vendor": { "vendorName": "Dell Inc Updated" } }),
    bulk: || json!({ "vendors": [ { "vendorName": "Vendor 1" } ] }),
};

fn assets_folder() -> Item {
    let mut items = vec![
        req("Create Asset", "POST", "/api/asset/v1/assets")
            .describe("Create a new asset")
            .json_body(actor(json!({
                "asset": {
                    "assetNameUdv": "Laptop Dell XPS 15",
                    "modelId": 1,
                    "serialNumber": "SN123456",
                    "categoryId": 1,
                    "subCategoryId": 1,
                    "makeId": 1,
                    "assetStatus": "ACTIVE"
                }
            })))
            .build(),
        req("Update Asset", "PUT", "/api/asset/v1/assets/:id")
            .describe("Update an existing asset")
            .json_body(actor(json!({
                "asset": {
                    "assetNameUdv": "Laptop Dell XPS 15 Updated",
                    "assetStatus": "ACTIVE"
                }
            })))
            .build(),
        req("Delete Asset (Soft Delete)", "DELETE", "/api/asset/v1/assets/:id")
            .describe("Soft delete an asset")
            .json_body(actor(json!({})))
            .build(),
        req("Get Asset by ID", "GET", "/api/asset/v1/assets/:id")
            .describe("Get asset details by ID")
            .build(),
        req("Search Assets", "GET", "/api/asset/v1/assets/search")
            .describe("Search assets with pagination")
            .query_described("keyword", "laptop", "Search keyword")
            .query_described("page", "0", "Page number")
            .query_described("size", "20", "Page size")
            .build(),
        req("Bulk Upload Assets", "POST", "/api/asset/v1/assets/bulk")
            .describe("Bulk create multiple assets")
            .json_body(actor(json!({
                "assets": [
                    { "assetNameUdv": "Asset 1", "modelId": 1, "serialNumber": "SN001" },
                    { "assetNameUdv": "Asset 2", "modelId": 2, "serialNumber": "SN002" }
                ]
            })))
            .build(),
        excel_upload(
            "Bulk Upload Assets from Excel",
            "/api/asset/v1/assets/bulk/excel",
            "Bulk upload assets from Excel file",
        ),
        req("Complete Asset Creation", "POST", "/api/asset/v1/assets/complete")
            .describe("Create asset with warranty, document, and user assignment in one request")
            .form_body(vec![
                FormParam::text("userId", "{{userId}}"),
                FormParam::text("username", "{{username}}"),
                FormParam::text("projectType", "{{projectType}}"),
                FormParam::text("assetNameUdv", "Complete Asset"),
                FormParam::text("modelId", "1"),
                FormParam::text("serialNumber", "SN123"),
                FormParam::text("warrantyStartDate", "2024-01-01"),
                FormParam::text("warrantyEndDate", "2025-01-01"),
                FormParam::text("targetUserId", "1"),
                FormParam::file("purchaseInvoice"),
            ])
            .build(),
    ];
    items.push(
        req("Update Asset Favourite", "PUT", "/api/asset/v1/assets/:id/favourite")
            .describe("Toggle favourite status for an asset")
            .query_described("isFavourite", "true", "Favourite status")
            .build(),
    );
    items.push(
        req("Update Asset Most Like", "PUT", "/api/asset/v1/assets/:id/most-like")
            .describe("Toggle most like status for an asset")
            .query_described("isMostLike", "true", "Most like status")
            .build(),
    );
    items.push(
        req("Update Asset Sequence Order", "PUT", "/api/asset/v1/assets/:id/sequence-order")
            .describe("Update sequence order for an asset (admin only)")
            .query_described("sequenceOrder", "1", "Sequence order")
            .build(),
    );

    Folder::with_requests("1. Assets", items)
}

fn documents_folder() -> Item {
    let bulk_request_json = json!({
        "documents": [
            { "entityType": "ASSET", "entityId": 1, "fileName": "doc1.pdf", "docType": "PDF" },
            { "entityType": "ASSET", "entityId": 2, "fileName": "doc2.jpg", "docType": "IMAGE" }
        ]
    });

    Folder::with_requests(
        "3. Documents",
        vec![
            req("Upload Document", "POST", "/api/asset/v1/documents/upload")
                .describe("Upload a single document file")
                .form_body(vec![
                    FormParam::file("file"),
                    FormParam::text("entityType", "ASSET"),
                    FormParam::text("entityId", "1"),
                    FormParam::text("userId", "{{userId}}"),
                    FormParam::text("username", "{{username}}"),
                    FormParam::text("projectType", "{{projectType}}"),
                    FormParam::text("docType", "PDF"),
                ])
                .build(),
            req("Get Document Details", "GET", "/api/asset/v1/documents/:id")
                .describe("Get document details by ID")
                .build(),
            req("Download Document", "GET", "/api/asset/v1/documents/download/:id")
                .describe("Download the actual document file")
                .build(),
            req("Delete Document", "DELETE", "/api/asset/v1/documents/:id")
                .describe("Soft delete a document")
                .json_body(actor(json!({ "entityType": "ASSET", "entityId": 1 })))
                .build(),
            req("Bulk Upload Documents", "POST", "/api/asset/v1/documents/bulk")
                .describe("Bulk upload multiple documents with files")
                .form_body(vec![
                    FormParam::file("files"),
                    FormParam::file("files"),
                    FormParam::text(
                        "request",
                        serde_json::to_string(&bulk_request_json).unwrap_or_default(),
                    ),
                    FormParam::text("userId", "{{userId}}"),
                    FormParam::text("username", "{{username}}"),
                    FormParam::text("projectType", "{{projectType}}"),
                ])
                .build(),
            req("Bulk Upload Documents (File Paths)", "POST", "/api/asset/v1/documents/bulk/paths")
                .describe("Bulk upload documents using existing file paths")
                .json_body(actor(json!({
                    "documents": [
                        {
                            "entityType": "ASSET",
                            "entityId": 1,
                            "fileName": "document1.pdf",
                            "filePath": "/path/to/file/document1.pdf",
                            "docType": "PDF"
                        }
                    ]
                })))
                .build(),
            excel_upload(
                "Bulk Upload Documents from Excel",
                "/api/asset/v1/documents/bulk/excel",
                "Bulk upload documents from Excel file",
            ),
        ],
    )
}

fn warranty_create() -> Value {
    actor(json!({
        "assetId": 1,
        "warrantyStartDate": "2024-01-01",
        "warrantyEndDate": "2025-01-01",
        "warrantyProvider": "Dell",
        "warrantyStatus": "ACTIVE"
    }))
}

fn warranty_update() -> Value {
    actor(json!({ "assetId": 1, "warrantyStatus": "EXPIRED" }))
}

fn amc_create() -> Value {
    actor(json!({
        "assetId": 1,
        "amcStartDate": "2024-01-01",
        "amcEndDate": "2025-01-01",
        "amcProvider": "Dell",
        "amcStatus": "ACTIVE"
    }))
}

fn amc_update() -> Value {
    actor(json!({ "assetId": 1, "amcStatus": "EXPIRED" }))
}

/// Warranty and AMC share a coverage-contract shape: CRUD plus the engagement
/// triple, no bulk endpoints.
fn coverage_folder(number: usize, title: &str, path_seg: &str, create: Value, update: Value) -> Item {
    let base = format!("/api/asset/v1/{path_seg}");
    let plural = if title == "AMC" { "AMCs".to_string() } else { "Warranties".to_string() };
    let noun = if title == "AMC" { "an AMC" } else { "a warranty" };

    let mut items = vec![
        req(&format!("Create {title}"), "POST", &base)
            .describe(format!("Create a new {title}"))
            .json_body(create)
            .build(),
        req(&format!("Update {title}"), "PUT", &format!("{base}/:id"))
            .describe(format!("Update {noun}"))
            .json_body(update)
            .build(),
        req(&format!("Delete {title}"), "DELETE", &format!("{base}/:id"))
            .describe(format!("Soft delete {noun}"))
            .json_body(actor(json!({})))
            .build(),
        req(&format!("List All {plural}"), "GET", &base)
            .describe(format!("Get all {plural}"))
            .build(),
        req(&format!("Get {title} by ID"), "GET", &format!("{base}/:id"))
            .describe(format!("Get {title} by ID"))
            .build(),
    ];
    items.extend(engagement(title, &base));

    Folder::with_requests(format!("{number}. {title}"), items)
}

fn user_links_folder() -> Item {
    Folder::with_requests(
        "12. User Links",
        vec![
            req("Link Entity to User", "POST", "/api/asset/v1/userlinks/link")
                .describe("Link an entity (ASSET, COMPONENT, etc.) to a user")
                .json_body(json!({
                    "entityType": "ASSET",
                    "entityId": 1,
                    "targetUserId": 1,
                    "targetUsername": "user1",
                    "userId": "{{userId}}",
                    "username": "{{username}}"
                }))
                .build(),
            req("Delink Entity from User", "POST", "/api/asset/v1/userlinks/delink")
                .describe("Delink an entity from a user")
                .json_body(json!({
                    "entityType": "ASSET",
                    "entityId": 1,
                    "targetUserId": 1,
                    "targetUsername": "user1",
                    "userId": "{{userId}}",
                    "username": "{{username}}"
                }))
                .build(),
            req("Link Multiple Entities", "POST", "/api/asset/v1/userlinks/link-multiple")
                .describe("Link multiple entities to a user in one request")
                .json_body(json!({
                    "targetUserId": 1,
                    "targetUsername": "user1",
                    "userId": "{{userId}}",
                    "username": "{{username}}",
                    "entities": [
                        { "entityType": "ASSET", "entityId": 1 },
                        { "entityType": "COMPONENT", "entityId": 1 }
                    ]
                }))
                .build(),
            req("Delink Multiple Entities", "POST", "/api/asset/v1/userlinks/delink-multiple")
                .describe("Delink multiple entities from a user")
                .json_body(json!({
                    "targetUserId": 1,
                    "targetUsername": "user1",
                    "userId": "{{userId}}",
                    "username": "{{username}}",
                    "entities": [ { "entityType": "ASSET", "entityId": 1 } ]
                }))
                .build(),
            req("Get Assigned Assets", "GET", "/api/asset/v1/userlinks/assigned-assets")
                .describe("Get all assets assigned to a user")
                .query("targetUserId", "1")
                .build(),
            req("Get Single Asset", "GET", "/api/asset/v1/userlinks/asset")
                .describe("Get single asset details")
                .query("assetId", "1")
                .build(),
            req("Get Users by SubCategory", "GET", "/api/asset/v1/userlinks/by-subcategory")
                .describe("Get users by subcategory")
                .query("subCategoryId", "1")
                .build(),
            req("Get All Master Data in Detail", "GET", "/api/asset/v1/userlinks/master-data/all")
                .describe("Get comprehensive master data")
                .query_disabled("userId", "1", "Optional user filter")
                .build(),
            req("Get Need Your Attention", "GET", "/api/asset/v1/userlinks/need-your-attention")
                .describe("Get comprehensive attention data for logged-in user")
                .build(),
        ],
    )
}

fn statuses_folder() -> Item {
    let mut items = vec![
        req("List All Statuses", "GET", "/api/asset/v1/statuses")
            .describe("Get all statuses")
            .build(),
        req("List Active Statuses", "GET", "/api/asset/v1/statuses/active")
            .describe("Get active statuses")
            .build(),
        req("List Statuses by Category", "GET", "/api/asset/v1/statuses/category/:category")
            .describe("Get statuses by category")
            .build(),
        req(
            "List Active Statuses by Category",
            "GET",
            "/api/asset/v1/statuses/category/:category/active",
        )
        .describe("Get active statuses by category")
        .build(),
        req("Find Status by Code", "GET", "/api/asset/v1/statuses/code/:code")
            .describe("Find status by code")
            .build(),
        req("Find Status by ID", "GET", "/api/asset/v1/statuses/:id")
            .describe("Find status by ID")
            .build(),
        req("Validate Status", "GET", "/api/asset/v1/statuses/validate/:code")
            .describe("Validate status code")
            .build(),
        req("Initialize Statuses", "POST", "/api/asset/v1/statuses/initialize")
            .describe("Initialize default statuses")
            .build(),
    ];
    items.extend(engagement("Status", "/api/asset/v1/statuses"));

    Folder::with_requests("13. Statuses", items)
}

fn entity_types_folder() -> Item {
    Folder::with_requests(
        "14. Entity Types",
        vec![
            req("List All Entity Types", "GET", "/api/asset/v1/entity-types")
                .describe("Get all entity types")
                .build(),
            req("List Active Entity Types", "GET", "/api/asset/v1/entity-types/active")
                .describe("Get active entity types")
                .build(),
            req("Find Entity Type by Code", "GET", "/api/asset/v1/entity-types/code/:code")
                .describe("Find entity type by code")
                .build(),
            req("Find Entity Type by ID", "GET", "/api/asset/v1/entity-types/:id")
                .describe("Find entity type by ID")
                .build(),
            req("Validate Entity Type", "GET", "/api/asset/v1/entity-types/validate/:code")
                .describe("Validate entity type code")
                .build(),
            req("Initialize Entity Types", "POST", "/api/asset/v1/entity-types/initialize")
                .describe("Initialize default entity types")
                .build(),
        ],
    )
}

fn compliance_folder() -> Item {
    Folder::with_requests(
        "15. Compliance",
        vec![
            req("Validate Entity", "POST", "/api/asset/v1/compliance/validate")
                .describe("Validate entity compliance")
                .json_body(json!({ "entityType": "ASSET", "entityId": 1 }))
                .build(),
            req(
                "Validate Entity by Type and ID",
                "GET",
                "/api/asset/v1/compliance/validate/:entityType/:entityId",
            )
            .describe("Validate entity compliance")
            .build(),
            req(
                "Get Compliance Status",
                "GET",
                "/api/asset/v1/compliance/status/:entityType/:entityId",
            )
            .describe("Get compliance status")
            .build(),
            req(
                "Get Violations",
                "GET",
                "/api/asset/v1/compliance/violations/:entityType/:entityId",
            )
            .describe("Get compliance violations")
            .query("unresolvedOnly", "true")
            .build(),
            req(
                "Resolve Violation",
                "POST",
                "/api/asset/v1/compliance/violations/:violationId/resolve",
            )
            .describe("Resolve a violation")
            .query("resolvedBy", "admin")
            .query("notes", "Resolved")
            .build(),
            req(
                "Generate Compliance Report",
                "GET",
                "/api/asset/v1/compliance/report/:entityType/:entityId",
            )
            .describe("Generate compliance report")
            .build(),
            req("Bulk Validation", "POST", "/api/asset/v1/compliance/validate/bulk/:entityType")
                .describe("Bulk validate entities")
                .json_body(json!([1, 2, 3]))
                .build(),
            req("Get Compliance Metrics", "GET", "/api/asset/v1/compliance/metrics")
                .describe("Get overall compliance metrics")
                .build(),
            req(
                "Get Compliance Metrics by Entity Type",
                "GET",
                "/api/asset/v1/compliance/metrics/:entityType",
            )
            .describe("Get compliance metrics by entity type")
            .build(),
            req("Get Violations Summary", "GET", "/api/asset/v1/compliance/violations/summary")
                .describe("Get violations summary")
                .build(),
        ],
    )
}

fn compliance_rules_folder() -> Item {
    Folder::with_requests(
        "16. Compliance Rules",
        vec![
            req("List All Rules", "GET", "/api/asset/v1/compliance/rules")
                .describe("Get all compliance rules")
                .build(),
            req(
                "List Rules by Entity Type",
                "GET",
                "/api/asset/v1/compliance/rules/entity-type/:entityType",
            )
            .describe("Get rules by entity type")
            .build(),
            req("Get Rule by ID", "GET", "/api/asset/v1/compliance/rules/:ruleId")
                .describe("Get rule by ID")
                .build(),
            req("Create Rule", "POST", "/api/asset/v1/compliance/rules")
                .describe("Create a compliance rule")
                .json_body(json!({
                    "ruleCode": "RULE001",
                    "ruleName": "Asset Warranty Required",
                    "entityType": "ASSET",
                    "ruleExpression": "warranty != null"
                }))
                .query("createdBy", "admin")
                .build(),
            req("Update Rule", "PUT", "/api/asset/v1/compliance/rules/:ruleId")
                .describe("Update a compliance rule")
                .json_body(json!({ "ruleCode": "RULE001", "ruleName": "Updated Rule" }))
                .query("updatedBy", "admin")
                .build(),
            req("Delete Rule", "DELETE", "/api/asset/v1/compliance/rules/:ruleId")
                .describe("Delete a compliance rule")
                .query("deletedBy", "admin")
                .build(),
            req("Initialize Default Rules", "POST", "/api/asset/v1/compliance/rules/initialize")
                .describe("Initialize default compliance rules")
                .query("createdBy", "SYSTEM")
                .build(),
            req("Get Rule Templates", "GET", "/api/asset/v1/compliance/rules/templates")
                .describe("Get available rule templates")
                .build(),
        ],
    )
}

fn asset_scan_folder() -> Item {
    Folder::with_requests(
        "17. Asset Scan",
        vec![
            req("Scan Asset (POST)", "POST", "/api/asset/v1/scan")
                .describe("Scan asset by QR code or barcode")
                .json_body(json!({ "scanValue": "SN123456", "scanType": "AUTO" }))
                .build(),
            req("Scan Asset (GET)", "GET", "/api/asset/v1/scan")
                .describe("Scan asset by QR code or barcode (GET)")
                .query("value", "SN123456")
                .query("type", "AUTO")
                .build(),
            req("Scan and Save Asset", "POST", "/api/asset/v1/scan/save")
                .describe("Scan QR/barcode and create/update asset with AI agent")
                .json_body(json!({
                    "scanValue": "SN123456",
                    "scanType": "AUTO",
                    "userId": "{{userId}}",
                    "username": "{{username}}"
                }))
                .build(),
        ],
    )
}

fn master_data_agent_folder() -> Item {
    Folder::with_requests(
        "18. Master Data Agent",
        vec![
            req("Create Category", "POST", "/api/asset/v1/masters/categories")
                .describe("Create category via master data agent")
                .json_body(json!({ "categoryName": "Electronics", "createdBy": "admin" }))
                .build(),
            req("Update Category", "PUT", "/api/asset/v1/masters/categories/:categoryId")
                .describe("Update category")
                .query("categoryName", "Electronics Updated")
                .query("updatedBy", "admin")
                .build(),
            req("Delete Category", "DELETE", "/api/asset/v1/masters/categories/:categoryId")
                .describe("Delete category")
                .query("deletedBy", "admin")
                .build(),
            req("Create SubCategory", "POST", "/api/asset/v1/masters/subcategories")
                .describe("Create subcategory")
                .json_body(json!({ "subCategoryName": "Laptops", "categoryId": 1, "createdBy": "admin" }))
                .build(),
            req(
                "Delete SubCategory",
                "DELETE",
                "/api/asset/v1/masters/subcategories/:subCategoryId",
            )
            .describe("Delete subcategory")
            .query("deletedBy", "admin")
            .build(),
            req("Create Make", "POST", "/api/asset/v1/masters/makes")
                .describe("Create make")
                .json_body(json!({ "makeName": "Dell", "subCategoryId": 1, "createdBy": "admin" }))
                .build(),
            req("Delete Make", "DELETE", "/api/asset/v1/masters/makes/:makeId")
                .describe("Delete make")
                .query("deletedBy", "admin")
                .build(),
            req("Create Model", "POST", "/api/asset/v1/masters/models")
                .describe("Create model")
                .json_body(json!({ "modelName": "XPS 15", "makeId": 1, "createdBy": "admin" }))
                .build(),
            req("Delete Model", "DELETE", "/api/asset/v1/masters/models/:modelId")
                .describe("Delete model")
                .query("deletedBy", "admin")
                .build(),
            req("Create Vendor", "POST", "/api/asset/v1/masters/vendors")
                .describe("Create vendor")
                .json_body(json!({ "vendorName": "Dell Inc", "createdBy": "admin" }))
                .build(),
            req("Create Outlet", "POST", "/api/asset/v1/masters/outlets")
                .describe("Create outlet")
                .json_body(json!({ "outletName": "Best Buy", "createdBy": "admin" }))
                .build(),
            req("Create Component", "POST", "/api/asset/v1/masters/components")
                .describe("Create component")
                .query("componentName", "RAM 16GB")
                .query("description", "16GB DDR4")
                .query("createdBy", "admin")
                .build(),
            req("Bulk Create Categories", "POST", "/api/asset/v1/masters/categories/bulk")
                .describe("Bulk create categories")
                .json_body(json!(["Category 1", "Category 2"]))
                .query("createdBy", "admin")
                .build(),
            req(
                "Validate Category",
                "GET",
                "/api/asset/v1/masters/validate/category/:categoryId",
            )
            .describe("Validate category exists")
            .build(),
            req("Get Master Data Summary", "GET", "/api/asset/v1/masters/summary")
                .describe("Get master data summary")
                .build(),
        ],
    )
}

fn audit_agent_folder() -> Item {
    Folder::with_requests(
        "19. Audit Agent",
        vec![
            req("Log Audit Event", "POST", "/api/asset/v1/audit/log")
                .describe("Log an audit event")
                .json_body(json!({
                    "username": "admin",
                    "eventMessage": "Asset created",
                    "action": "CREATE",
                    "entityType": "ASSET",
                    "entityId": 1
                }))
                .build(),
            req("Get All Audit Logs", "GET", "/api/asset/v1/audit")
                .describe("Get all audit logs")
                .build(),
            req("Get Audit Logs by Username", "GET", "/api/asset/v1/audit/username/:username")
                .describe("Get audit logs by username")
                .build(),
            req(
                "Get Audit Logs by Entity Type",
                "GET",
                "/api/asset/v1/audit/entity-type/:entityType",
            )
            .describe("Get audit logs by entity type")
            .build(),
            req("Get Audit Logs by Date Range", "GET", "/api/asset/v1/audit/date-range")
                .describe("Get audit logs by date range")
                .query("startDate", "2024-01-01T00:00:00")
                .query("endDate", "2024-12-31T23:59:59")
                .build(),
            req("Get Recent Audit Logs", "GET", "/api/asset/v1/audit/recent")
                .describe("Get recent audit logs")
                .query("limit", "100")
                .build(),
            req("Search Audit Logs", "GET", "/api/asset/v1/audit/search")
                .describe("Search audit logs")
                .query("keyword", "asset")
                .build(),
            req("Get Audit Statistics", "GET", "/api/asset/v1/audit/statistics")
                .describe("Get audit statistics")
                .build(),
            req("Cleanup Old Audit Logs", "POST", "/api/asset/v1/audit/cleanup")
                .describe("Cleanup old audit logs")
                .query("daysToKeep", "90")
                .build(),
        ],
    )
}

fn user_asset_link_agent_folder() -> Item {
    Folder::with_requests(
        "20. User Asset Link Agent",
        vec![
            req("Link Asset to User", "POST", "/api/asset/v1/user-asset-links/link-asset")
                .describe("Link asset to user")
                .json_body(json!({
                    "assetId": 1,
                    "userId": 1,
                    "username": "user1",
                    "email": "user1@example.com",
                    "mobile": "1234567890",
                    "createdBy": "admin"
                }))
                .build(),
            req("Link Component to User", "POST", "/api/asset/v1/user-asset-links/link-component")
                .describe("Link component to user")
                .json_body(json!({
                    "componentId": 1,
                    "userId": 1,
                    "username": "user1",
                    "email": "user1@example.com",
                    "mobile": "1234567890",
                    "createdBy": "admin"
                }))
                .build(),
            req("Delink Asset from User", "POST", "/api/asset/v1/user-asset-links/delink-asset")
                .describe("Delink asset from user")
                .query("assetId", "1")
                .query("userId", "1")
                .query("updatedBy", "admin")
                .build(),
            req(
                "Delink Component from User",
                "POST",
                "/api/asset/v1/user-asset-links/delink-component",
            )
            .describe("Delink component from user")
            .query("componentId", "1")
            .query("userId", "1")
            .query("updatedBy", "admin")
            .build(),
            req(
                "Get Assets Assigned to User",
                "GET",
                "/api/asset/v1/user-asset-links/user/:userId/assets",
            )
            .describe("Get assets assigned to user")
            .build(),
            req(
                "Get Components Assigned to User",
                "GET",
                "/api/asset/v1/user-asset-links/user/:userId/components",
            )
            .describe("Get components assigned to user")
            .build(),
            req(
                "Get Asset Assignment History",
                "GET",
                "/api/asset/v1/user-asset-links/asset/:assetId/history",
            )
            .describe("Get asset assignment history")
            .build(),
            req(
                "Get User Assignment History",
                "GET",
                "/api/asset/v1/user-asset-links/user/:userId/history",
            )
            .describe("Get user assignment history")
            .build(),
            req(
                "Check Asset Linked",
                "GET",
                "/api/asset/v1/user-asset-links/check/asset/:assetId/user/:userId",
            )
            .describe("Check if asset is linked to user")
            .build(),
            req("Get Link Statistics", "GET", "/api/asset/v1/user-asset-links/statistics")
                .describe("Get link statistics")
                .build(),
            req("Bulk Link Assets", "POST", "/api/asset/v1/user-asset-links/bulk-link-assets")
                .describe("Bulk link assets to user")
                .json_body(json!({
                    "assetIds": [1, 2, 3],
                    "userId": 1,
                    "username": "user1",
                    "createdBy": "admin"
                }))
                .build(),
        ],
    )
}

fn file_download_folder() -> Item {
    Folder::with_requests(
        "21. File Download",
        vec![req("Download or View File", "GET", "/api/asset/v1/files/download")
            .describe("Download or view a file")
            .query("filename", "document.pdf")
            .query("inline", "false")
            .build()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_count_and_numbering() {
        let collection = collection();
        assert_eq!(collection.item.len(), 21);
        for (i, item) in collection.item.iter().enumerate() {
            assert!(
                item.name().starts_with(&format!("{}. ", i + 1)),
                "folder {} misnumbered: {}",
                i,
                item.name()
            );
        }
    }

    #[test]
    fn test_collection_variables() {
        let collection = collection();
        let keys: Vec<&str> = collection.variable.iter().map(|v| v.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["assetbaseUrl", "bearerToken", "userId", "username", "projectType"]
        );
        assert_eq!(collection.variable[0].value, "http://localhost:8083");
    }

    #[test]
    fn test_master_data_folders_have_full_shape() {
        let collection = collection();
        let categories = collection.item[1].as_folder().unwrap();
        assert_eq!(categories.name, "2. Categories");
        let names: Vec<&str> = categories.requests().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"Bulk Upload Categories from Excel"));
        assert!(names.contains(&"Update Category Sequence Order"));
    }

    #[test]
    fn test_assets_folder_search_params() {
        let collection = collection();
        let assets = collection.item[0].as_folder().unwrap();
        let search = assets
            .requests()
            .find(|r| r.name == "Search Assets")
            .expect("search request");
        let keys: Vec<&str> = search.request.url.query.iter().map(|q| q.key.as_str()).collect();
        assert_eq!(keys, vec!["keyword", "page", "size"]);
    }

    #[test]
    fn test_every_request_uses_asset_base_url() {
        fn walk(items: &[Item], check: &mut dyn FnMut(&RequestItem)) {
            for item in items {
                match item {
                    Item::Request(r) => check(r),
                    Item::Folder(f) => walk(&f.item, check),
                }
            }
        }

        let collection = collection();
        walk(&collection.item, &mut |r| {
            assert!(
                r.request.url.raw.starts_with("{{assetbaseUrl}}/"),
                "unexpected base in {}",
                r.request.url.raw
            );
        });
    }
}
