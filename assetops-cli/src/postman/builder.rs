//! Request construction helpers shared by the collection generators
//!
//! Every generated request follows the same conventions: the URL is a
//! `{{<base>}}` placeholder plus a path, `:name` path segments become Postman
//! URL variables, and the default headers carry a bearer token plus JSON
//! content type.

use serde_json::Value;

use super::types::{Body, FormParam, Header, QueryParam, RequestItem, RequestSpec, Url, UrlVariable};

pub struct RequestBuilder {
    name: String,
    method: String,
    path: String,
    base_url_var: String,
    token_var: String,
    description: Option<String>,
    body: Option<Body>,
    query: Vec<QueryParam>,
    headers: Option<Vec<Header>>,
}

impl RequestBuilder {
    pub fn new(name: impl Into<String>, method: impl Into<String>, path: impl Into<String>) -> Self {
        RequestBuilder {
            name: name.into(),
            method: method.into(),
            path: path.into(),
            base_url_var: "assetbaseUrl".into(),
            token_var: "bearerToken".into(),
            description: None,
            body: None,
            query: Vec::new(),
            headers: None,
        }
    }

    /// Override the `{{base}}` and `{{token}}` variable names used by the URL
    /// and the Authorization header.
    pub fn vars(mut self, base_url_var: &str, token_var: &str) -> Self {
        self.base_url_var = base_url_var.into();
        self.token_var = token_var.into();
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn json_body(mut self, value: Value) -> Self {
        self.body = Some(Body::json(&value));
        self
    }

    pub fn form_body(mut self, parts: Vec<FormParam>) -> Self {
        self.body = Some(Body::formdata(parts));
        // Multipart requests only carry the Authorization header; the boundary
        // content type is set by the client.
        if self.headers.is_none() {
            self.headers = Some(vec![Header::text(
                "Authorization",
                format!("Bearer {{{{{}}}}}", self.token_var),
            )]);
        }
        self
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.push(QueryParam::new(key, value));
        self
    }

    pub fn query_described(mut self, key: &str, value: &str, description: &str) -> Self {
        self.query.push(QueryParam::new(key, value).describe(description));
        self
    }

    pub fn query_disabled(mut self, key: &str, value: &str, description: &str) -> Self {
        self.query
            .push(QueryParam::new(key, value).describe(description).disabled());
        self
    }

    pub fn headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn build(self) -> RequestItem {
        let segments: Vec<&str> = self.path.split('/').filter(|s| !s.is_empty()).collect();

        let variables: Vec<UrlVariable> = segments
            .iter()
            .filter_map(|seg| seg.strip_prefix(':'))
            .map(|name| UrlVariable {
                key: name.to_string(),
                value: "1".into(),
                description: Some(name.replace("Id", " ID")),
            })
            .collect();

        let headers = self.headers.unwrap_or_else(|| {
            vec![
                Header::text(
                    "Authorization",
                    format!("Bearer {{{{{}}}}}", self.token_var),
                ),
                Header::text("Content-Type", "application/json"),
            ]
        });

        let raw = format!("{{{{{}}}}}/{}", self.base_url_var, segments.join("/"));

        RequestItem {
            name: self.name,
            request: RequestSpec {
                method: self.method,
                header: headers,
                body: self.body,
                url: Url {
                    raw,
                    host: vec![format!("{{{{{}}}}}", self.base_url_var)],
                    path: segments.iter().map(|s| s.to_string()).collect(),
                    query: self.query,
                    variable: variables,
                    extra: serde_json::Map::new(),
                },
                description: self.description,
                extra: serde_json::Map::new(),
            },
            response: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_variables_extracted() {
        let item = RequestBuilder::new("Get Asset by ID", "GET", "/api/asset/v1/assets/:assetId")
            .build();

        assert_eq!(item.request.url.raw, "{{assetbaseUrl}}/api/asset/v1/assets/:assetId");
        assert_eq!(
            item.request.url.path,
            vec!["api", "asset", "v1", "assets", ":assetId"]
        );
        assert_eq!(item.request.url.variable.len(), 1);
        let var = &item.request.url.variable[0];
        assert_eq!(var.key, "assetId");
        assert_eq!(var.value, "1");
        assert_eq!(var.description.as_deref(), Some("asset ID"));
    }

    #[test]
    fn test_default_headers() {
        let item = RequestBuilder::new("List Assets", "GET", "/api/asset/v1/assets").build();

        let header = &item.request.header;
        assert_eq!(header.len(), 2);
        assert_eq!(header[0].key, "Authorization");
        assert_eq!(header[0].value, "Bearer {{bearerToken}}");
        assert_eq!(header[1].key, "Content-Type");
        assert_eq!(header[1].value, "application/json");
    }

    #[test]
    fn test_vars_override() {
        let item = RequestBuilder::new("Send", "POST", "/api/notifications")
            .vars("notificationbaseUrl", "accessToken")
            .build();

        assert_eq!(item.request.url.raw, "{{notificationbaseUrl}}/api/notifications");
        assert_eq!(item.request.header[0].value, "Bearer {{accessToken}}");
    }

    #[test]
    fn test_form_body_drops_content_type() {
        let item = RequestBuilder::new("Bulk Excel", "POST", "/api/asset/v1/assets/bulk/excel")
            .form_body(vec![FormParam::file("file")])
            .build();

        assert_eq!(item.request.header.len(), 1);
        assert_eq!(item.request.header[0].key, "Authorization");
        let body = item.request.body.expect("formdata body");
        assert_eq!(body.mode, "formdata");
        assert_eq!(body.formdata.unwrap().len(), 1);
    }

    #[test]
    fn test_json_body_pretty_printed() {
        let item = RequestBuilder::new("Create Vendor", "POST", "/api/asset/v1/vendors")
            .json_body(serde_json::json!({ "name": "ABC Suppliers" }))
            .build();

        let body = item.request.body.expect("raw body");
        assert_eq!(body.mode, "raw");
        assert!(body.raw.unwrap().contains("\n"));
        assert_eq!(
            body.options.unwrap(),
            serde_json::json!({ "raw": { "language": "json" } })
        );
    }
}
