//! Built-in Notification Service collection
//!
//! Folders are organised channel-first (SMS / EMAIL / WHATSAPP / INAPP), each
//! holding one subfolder per project type with a send-notification request per
//! seeded template. Placeholder maps are derived from the template code, and
//! every request carries a 202 example response.

use serde_json::{json, Map, Value};

use crate::postman::builder::RequestBuilder;
use crate::postman::types::{Collection, Folder, Info, Item, RequestItem, Variable, SCHEMA_V2_1};

const CHANNELS: [&str; 4] = ["SMS", "EMAIL", "WHATSAPP", "INAPP"];
const PROJECT_TYPES: [&str; 2] = ["ASSET_MGMT", "ECOM"];

/// Seeded notification templates, mirroring the service's template table.
const TEMPLATE_CATALOG: &[(&str, &str, &str)] = &[
    // (channel, project type, template code)
    ("SMS", "ASSET_MGMT", "OTP_LOGIN_SMS"),
    ("SMS", "ASSET_MGMT", "ASSET_CREATED_SMS"),
    ("SMS", "ASSET_MGMT", "ASSET_ASSIGNED_SMS"),
    ("SMS", "ASSET_MGMT", "WARRANTY_EXPIRY_SMS"),
    ("SMS", "ASSET_MGMT", "AMC_EXPIRY_SMS"),
    ("SMS", "ECOM", "ORDER_CONFIRMED_SMS"),
    ("SMS", "ECOM", "SHIPMENT_DISPATCHED_SMS"),
    ("SMS", "ECOM", "DELIVERY_DONE_SMS"),
    ("EMAIL", "ASSET_MGMT", "WELCOME_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "PASSWORD_RESET_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "ASSET_CREATED_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "ASSET_ASSIGNED_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "WARRANTY_EXPIRY_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "AMC_EXPIRY_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "DOCUMENT_UPLOADED_EMAIL"),
    ("EMAIL", "ASSET_MGMT", "AUDIT_ALERT_EMAIL"),
    ("EMAIL", "ECOM", "ORDER_CONFIRMED_EMAIL"),
    ("EMAIL", "ECOM", "SHIPMENT_DISPATCHED_EMAIL"),
    ("EMAIL", "ECOM", "DELIVERY_DONE_EMAIL"),
    ("WHATSAPP", "ASSET_MGMT", "OTP_LOGIN_WA"),
    ("WHATSAPP", "ASSET_MGMT", "ASSET_ASSIGNED_WA"),
    ("WHATSAPP", "ASSET_MGMT", "WARRANTY_EXPIRY_WA"),
    ("WHATSAPP", "ECOM", "ORDER_CONFIRMED_WA"),
    ("WHATSAPP", "ECOM", "SHIPMENT_DISPATCHED_WA"),
    ("INAPP", "ASSET_MGMT", "ASSET_ASSIGNED_INAPP"),
    ("INAPP", "ASSET_MGMT", "ASSET_RETURN_INAPP"),
    ("INAPP", "ASSET_MGMT", "MAINT_DUE_INAPP"),
    ("INAPP", "ASSET_MGMT", "USERLINK_CREATED_INAPP"),
    ("INAPP", "ECOM", "ORDER_CONFIRMED_INAPP"),
];

pub fn collection() -> Collection {
    let mut channel_folders = Vec::new();
    for channel in CHANNELS {
        let mut channel_folder = Folder::new(format!("{channel} Notifications"));
        for project in PROJECT_TYPES {
            let mut codes: Vec<&str> = TEMPLATE_CATALOG
                .iter()
                .filter(|(c, p, _)| *c == channel && *p == project)
                .map(|(_, _, code)| *code)
                .collect();
            if codes.is_empty() {
                continue;
            }
            codes.sort_unstable();

            let mut project_folder = Folder::new(format!("{project} - {channel}"));
            for code in codes {
                project_folder
                    .item
                    .push(Item::Request(Box::new(template_request(code, channel, project))));
            }
            channel_folder.item.push(Item::Folder(project_folder));
        }
        channel_folders.push(Item::Folder(channel_folder));
    }

    Collection {
        info: Info {
            postman_id: "notification-service-api-complete".into(),
            name: "Notification Service API - Complete Collection".into(),
            description: Some(
                "Comprehensive Postman collection for Notification Service API based on entity \
                 models and seed templates.\n\n\
                 **Key Features:**\n\
                 - Multi-channel notification support (SMS, Email, WhatsApp, In-App)\n\
                 - Template-based notifications with dynamic variable substitution\n\
                 - Asynchronous processing\n\
                 - Organized by channel, project type, and entity\n\n\
                 **Environment Variables Required:**\n\
                 - notificationbaseUrl: Base URL (default: http://localhost:8082)\n\
                 - accessToken: JWT Bearer token from auth-service\n\
                 - projectType: Project type (ASSET_MGMT or ECOM)\n\
                 - Various entity-specific variables (assetId, assetName, etc.)"
                    .into(),
            ),
            schema: SCHEMA_V2_1.into(),
            exporter_id: Some("notification-service".into()),
            extra: Map::new(),
        },
        item: channel_folders,
        variable: vec![
            Variable::string("notificationbaseUrl", "http://localhost:8082")
                .describe("Base URL for Notification Service API"),
            Variable::string("accessToken", "").describe("JWT Bearer token from auth-service"),
            Variable::string("projectType", "ASSET_MGMT")
                .describe("Project type: ASSET_MGMT or ECOM"),
        ],
        extra: Map::new(),
    }
}

/// Derive the placeholder map for a template from substrings of its code.
fn placeholders(code: &str) -> Map<String, Value> {
    let mut vars = Map::new();
    let mut put = |map: &mut Map<String, Value>, key: &str, value: &str| {
        map.insert(key.to_string(), Value::String(value.to_string()));
    };

    if code.contains("OTP") {
        put(&mut vars, "otp", "{{otp}}");
    }
    if code.contains("ASSET") {
        put(&mut vars, "assetId", "{{assetId}}");
        put(&mut vars, "assetName", "{{assetName}}");
    }
    if code.contains("AMC") || code.contains("WARRANTY") {
        put(&mut vars, "assetId", "{{assetId}}");
        put(&mut vars, "startDate", "{{startDate}}");
        put(&mut vars, "endDate", "{{endDate}}");
    }
    if code.contains("DOCUMENT") {
        put(&mut vars, "fileName", "{{fileName}}");
        put(&mut vars, "assetId", "{{assetId}}");
    }
    if code.contains("USERLINK") {
        put(&mut vars, "username", "{{username}}");
        put(&mut vars, "assetId", "{{assetId}}");
        put(&mut vars, "subCategory", "{{subCategoryName}}");
    }
    if code.contains("AUDIT") {
        put(&mut vars, "action", "CREATE");
        put(&mut vars, "entityName", "Asset");
        put(&mut vars, "entityId", "{{assetId}}");
        put(&mut vars, "username", "{{username}}");
    }
    if code.contains("ORDER") {
        put(&mut vars, "orderId", "{{orderId}}");
    }
    if code.contains("SHIPMENT") {
        put(&mut vars, "orderId", "{{orderId}}");
        put(&mut vars, "trackingLink", "{{trackingLink}}");
    }
    if code.contains("DELIVERY") {
        put(&mut vars, "orderId", "{{orderId}}");
    }
    if code.contains("WELCOME") {
        put(&mut vars, "name", "{{name}}");
    }
    if code.contains("PASSWORD_RESET") {
        put(&mut vars, "name", "{{name}}");
        put(&mut vars, "resetLink", "{{resetLink}}");
    }
    if code.contains("MAINT") {
        put(&mut vars, "assetId", "{{assetId}}");
        put(&mut vars, "date", "{{startDate}}");
    }
    if code.contains("ASSIGN") || code.contains("RETURN") {
        put(&mut vars, "assetId", "{{assetId}}");
        put(&mut vars, "name", "{{name}}");
    }
    if code.contains("CREATED") || code.contains("UPDATED") || code.contains("DELETED") {
        if code.starts_with("ASSET") {
            put(&mut vars, "assetName", "{{assetName}}");
            if code.contains("CREATED") || code.contains("UPDATED") {
                put(&mut vars, "username", "{{username}}");
            }
        }
    }

    vars
}

/// Template name for display: `ASSET_CREATED_SMS` -> `Asset Created Sms`
fn display_name(code: &str) -> String {
    code.split('_')
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn request_body(code: &str, channel: &str) -> Value {
    let mut body = Map::new();
    body.insert("channel".into(), channel.into());
    body.insert("templateCode".into(), code.into());
    body.insert("placeholders".into(), Value::Object(placeholders(code)));
    body.insert("username".into(), "{{username}}".into());
    body.insert("userId".into(), "{{userId}}".into());
    match channel {
        "SMS" | "WHATSAPP" => {
            body.insert("mobile".into(), "{{mobile}}".into());
        }
        "EMAIL" => {
            body.insert("email".into(), "{{email}}".into());
            body.insert("subject".into(), format!("Subject for {code}").into());
        }
        "INAPP" => {
            body.insert("subject".into(), format!("Title for {code}").into());
        }
        _ => {}
    }
    Value::Object(body)
}

fn request_description(code: &str, channel: &str, project: &str) -> String {
    let mut desc = format!("Send {channel} notification using template {code}.\n\n");
    desc.push_str(&format!("**Template Code:** {code}\n"));
    desc.push_str(&format!("**Project Type:** {project}\n"));
    desc.push_str(&format!("**Channel:** {channel}\n\n"));
    desc.push_str("**Request Fields:**\n");
    desc.push_str(&format!("- `channel`: {channel} (required)\n"));
    desc.push_str(&format!("- `templateCode`: {code} (required)\n"));
    match channel {
        "SMS" | "WHATSAPP" => desc.push_str("- `mobile`: {mobile} (required for SMS/WhatsApp)\n"),
        "EMAIL" => desc.push_str("- `email`: {email} (required for Email)\n"),
        _ => {}
    }
    desc.push_str("- `username`: {username} (optional, recommended)\n");
    desc.push_str("- `userId`: {userId} (optional, for audit/logging)\n");
    match channel {
        "EMAIL" => desc.push_str(&format!(
            "- `subject`: Subject for {code} (optional, overrides template subject)\n"
        )),
        "INAPP" => desc.push_str(&format!(
            "- `subject`: Title for {code} (optional, used as title)\n"
        )),
        _ => {}
    }
    desc.push_str("- `placeholders`: Map of template variables (required)\n\n");
    desc.push_str("**Placeholders:**\n");
    for (key, value) in placeholders(code) {
        let plain = value
            .as_str()
            .unwrap_or_default()
            .replace("{{", "")
            .replace("}}", "");
        desc.push_str(&format!("- `{key}`: {plain}\n"));
    }
    desc
}

fn template_request(code: &str, channel: &str, project: &str) -> RequestItem {
    let body = request_body(code, channel);
    let mut item = RequestBuilder::new(display_name(code), "POST", "/api/notifications")
        .vars("notificationbaseUrl", "accessToken")
        .describe(request_description(code, channel, project))
        .json_body(body.clone())
        .build();

    item.response = vec![json!({
        "name": format!("Success - {channel} Queued"),
        "originalRequest": {
            "method": "POST",
            "header": [
                { "key": "Authorization", "value": "Bearer {{accessToken}}" },
                { "key": "Content-Type", "value": "application/json" }
            ],
            "body": {
                "mode": "raw",
                "raw": serde_json::to_string_pretty(&body).unwrap_or_default(),
                "options": { "raw": { "language": "json" } }
            },
            "url": {
                "raw": "{{notificationbaseUrl}}/api/notifications",
                "host": ["{{notificationbaseUrl}}"],
                "path": ["api", "notifications"]
            }
        },
        "status": "Accepted",
        "code": 202,
        "_postman_previewlanguage": "text",
        "header": [
            { "key": "Content-Type", "value": "text/plain;charset=UTF-8" }
        ],
        "cookie": [],
        "body": format!("{channel} Notification accepted")
    })];

    item
}
