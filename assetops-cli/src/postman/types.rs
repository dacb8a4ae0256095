//! Postman Collection v2.1 and Environment document models
//!
//! The structs model the subset of the schema the tooling edits directly.
//! Everything else is carried through untouched via flattened maps so a
//! load -> edit -> save cycle never drops fields Postman put there.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const SCHEMA_V2_1: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Top-level Postman collection document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub info: Info,
    #[serde(default)]
    pub item: Vec<Item>,
    #[serde(default)]
    pub variable: Vec<Variable>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema: String,
    #[serde(rename = "_exporter_id", skip_serializing_if = "Option::is_none")]
    pub exporter_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A collection item is either a folder of further items or a request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Request(Box<RequestItem>),
    Folder(Folder),
}

impl Item {
    pub fn name(&self) -> &str {
        match self {
            Item::Request(r) => &r.name,
            Item::Folder(f) => &f.name,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Item::Request(r) => r.name = name.into(),
            Item::Folder(f) => f.name = name.into(),
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Item::Folder(f) => Some(f),
            Item::Request(_) => None,
        }
    }

    pub fn as_folder_mut(&mut self) -> Option<&mut Folder> {
        match self {
            Item::Folder(f) => Some(f),
            Item::Request(_) => None,
        }
    }

    pub fn as_request(&self) -> Option<&RequestItem> {
        match self {
            Item::Request(r) => Some(r),
            Item::Folder(_) => None,
        }
    }

    /// Direct child count (0 for requests)
    pub fn child_count(&self) -> usize {
        match self {
            Item::Folder(f) => f.item.len(),
            Item::Request(_) => 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub item: Vec<Item>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Folder {
            name: name.into(),
            description: None,
            item: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_requests(name: impl Into<String>, requests: Vec<RequestItem>) -> Item {
        let mut folder = Folder::new(name);
        folder.item = requests
            .into_iter()
            .map(|r| Item::Request(Box::new(r)))
            .collect();
        Item::Folder(folder)
    }

    /// Iterate the requests directly inside this folder
    pub fn requests(&self) -> impl Iterator<Item = &RequestItem> {
        self.item.iter().filter_map(|i| i.as_request())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestItem {
    pub name: String,
    pub request: RequestSpec,
    #[serde(default)]
    pub response: Vec<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestSpec {
    pub method: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header: Vec<Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Header {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
            kind: Some("text".into()),
            description: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Url {
    pub raw: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub host: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variable: Vec<UrlVariable>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        QueryParam {
            key: key.into(),
            value: value.into(),
            description: None,
            disabled: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = Some(true);
        self
    }
}

/// Postman URL path variable (a `:name` segment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlVariable {
    pub key: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formdata: Option<Vec<FormParam>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Body {
    /// Raw JSON body, pretty-printed with the Postman language hint
    pub fn json(value: &Value) -> Self {
        Body {
            mode: "raw".into(),
            raw: Some(serde_json::to_string_pretty(value).unwrap_or_default()),
            options: Some(serde_json::json!({ "raw": { "language": "json" } })),
            formdata: None,
            extra: Map::new(),
        }
    }

    pub fn formdata(parts: Vec<FormParam>) -> Self {
        Body {
            mode: "formdata".into(),
            raw: None,
            options: None,
            formdata: Some(parts),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormParam {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<Value>,
}

impl FormParam {
    pub fn text(key: impl Into<String>, value: impl Into<String>) -> Self {
        FormParam {
            key: key.into(),
            value: Some(value.into()),
            kind: "text".into(),
            src: None,
        }
    }

    /// A file upload part with an empty source list
    pub fn file(key: impl Into<String>) -> Self {
        FormParam {
            key: key.into(),
            value: None,
            kind: "file".into(),
            src: Some(Value::Array(Vec::new())),
        }
    }
}

/// Collection-scope variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub key: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Variable {
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Variable {
            key: key.into(),
            value: value.into(),
            kind: Some("string".into()),
            description: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Postman environment document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<EnvValue>,
    #[serde(rename = "_postman_variable_scope", skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvValue {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn load_collection(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read collection: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse collection: {}", path.display()))
}

pub fn save_collection(collection: &Collection, path: &Path) -> Result<()> {
    write_pretty_json(collection, path)
}

pub fn load_environment(path: &Path) -> Result<Environment> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read environment: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse environment: {}", path.display()))
}

pub fn save_environment(environment: &Environment, path: &Path) -> Result<()> {
    write_pretty_json(environment, path)
}

fn write_pretty_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize document")?;
    fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_untagged_roundtrip() {
        let json = serde_json::json!({
            "name": "1. Assets",
            "item": [
                {
                    "name": "Get Asset by ID",
                    "request": {
                        "method": "GET",
                        "url": {
                            "raw": "{{assetbaseUrl}}/api/asset/v1/assets/:id",
                            "host": ["{{assetbaseUrl}}"],
                            "path": ["api", "asset", "v1", "assets", ":id"]
                        }
                    },
                    "response": []
                }
            ]
        });

        let item: Item = serde_json::from_value(json).unwrap();
        let folder = item.as_folder().expect("should parse as folder");
        assert_eq!(folder.name, "1. Assets");
        assert_eq!(folder.item.len(), 1);
        assert!(folder.item[0].as_request().is_some());
    }

    #[test]
    fn test_unknown_fields_survive_roundtrip() {
        let json = serde_json::json!({
            "name": "Download File",
            "request": {
                "method": "GET",
                "url": { "raw": "{{assetbaseUrl}}/api/asset/v1/files/download" },
                "auth": { "type": "bearer" }
            },
            "response": [],
            "protocolProfileBehavior": { "disableBodyPruning": true }
        });

        let item: RequestItem = serde_json::from_value(json.clone()).unwrap();
        assert!(item.extra.contains_key("protocolProfileBehavior"));
        assert!(item.request.extra.contains_key("auth"));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["protocolProfileBehavior"], json["protocolProfileBehavior"]);
        assert_eq!(back["request"]["auth"], json["request"]["auth"]);
    }

    #[test]
    fn test_folder_child_count() {
        let folder = Folder::with_requests(
            "13. FileDownload",
            vec![RequestItem {
                name: "Download or View File".into(),
                request: RequestSpec {
                    method: "GET".into(),
                    header: vec![],
                    body: None,
                    url: Url {
                        raw: "{{assetbaseUrl}}/api/asset/v1/files/download".into(),
                        host: vec!["{{assetbaseUrl}}".into()],
                        path: vec!["api".into(), "asset".into(), "v1".into(), "files".into(), "download".into()],
                        query: vec![],
                        variable: vec![],
                        extra: Map::new(),
                    },
                    description: None,
                    extra: Map::new(),
                },
                response: vec![],
                extra: Map::new(),
            }],
        );

        assert_eq!(folder.child_count(), 1);
        assert_eq!(folder.name(), "13. FileDownload");
    }
}
