//! Built-in Helpdesk Service collection
//!
//! Eight folders: issues, escalations, escalation matrix, SLA, FAQs, queries,
//! chatbot and service knowledge.

use serde_json::{json, Map};

use crate::postman::builder::RequestBuilder;
use crate::postman::types::{Collection, Folder, Info, Item, Variable, SCHEMA_V2_1};

pub fn collection() -> Collection {
    Collection {
        info: Info {
            postman_id: "helpdesk-service-complete-v1".into(),
            name: "Helpdesk Service - Complete API Collection".into(),
            description: Some(
                "Complete Postman collection for Helpdesk Service with all controllers and endpoints"
                    .into(),
            ),
            schema: SCHEMA_V2_1.into(),
            exporter_id: Some("helpdesk-service".into()),
            extra: Map::new(),
        },
        item: vec![
            issues_folder(),
            escalations_folder(),
            escalation_matrix_folder(),
            sla_folder(),
            faqs_folder(),
            queries_folder(),
            chatbot_folder(),
            knowledge_folder(),
        ],
        variable: vec![
            Variable::string("helpdeskbaseUrl", "http://localhost:8084"),
            Variable::string("bearerToken", "your-jwt-token-here"),
        ],
        extra: Map::new(),
    }
}

fn req(name: &str, method: &str, path: &str) -> RequestBuilder {
    RequestBuilder::new(name, method, path).vars("helpdeskbaseUrl", "bearerToken")
}

fn issues_folder() -> Item {
    Folder::with_requests(
        "1. Issues",
        vec![
            req("Create Issue", "POST", "/api/helpdesk/issues")
                .describe("Create a new issue ticket")
                .json_body(json!({
                    "title": "Network connectivity issue",
                    "description": "Unable to connect to network",
                    "priority": "HIGH",
                    "relatedService": "ASSET_SERVICE",
                    "reportedBy": "user@example.com"
                }))
                .build(),
            req("Get All Issues", "GET", "/api/helpdesk/issues")
                .describe("Retrieve all issues")
                .build(),
            req("Get Issue by ID", "GET", "/api/helpdesk/issues/:id")
                .describe("Retrieve a specific issue by its ID")
                .build(),
            req("Get Issues by Status", "GET", "/api/helpdesk/issues/status/:status")
                .describe("Retrieve issues filtered by status")
                .query_described("status", "OPEN", "Issue status")
                .build(),
            req("Get Issues by Service", "GET", "/api/helpdesk/issues/service/:service")
                .describe("Retrieve issues filtered by related service")
                .build(),
            req("Get My Issues", "GET", "/api/helpdesk/issues/my-issues")
                .describe("Retrieve issues reported by the current user")
                .build(),
            req("Update Issue Status", "PATCH", "/api/helpdesk/issues/:id/status")
                .describe("Update the status of an issue")
                .query("status", "IN_PROGRESS")
                .build(),
            req("Assign Issue", "PATCH", "/api/helpdesk/issues/:id/assign")
                .describe("Assign an issue to a support agent")
                .query("assignedTo", "agent@example.com")
                .build(),
            req("Resolve Issue", "POST", "/api/helpdesk/issues/:id/resolve")
                .describe("Resolve an issue with a resolution description")
                .json_body(json!({
                    "resolutionDescription": "Issue resolved by restarting the router",
                    "resolvedBy": "agent@example.com"
                }))
                .build(),
            req("Close Issue", "PATCH", "/api/helpdesk/issues/:id/close")
                .describe("Close an issue")
                .build(),
        ],
    )
}

fn escalations_folder() -> Item {
    Folder::with_requests(
        "2. Escalations",
        vec![
            req("Escalate Issue", "POST", "/api/helpdesk/escalations/issue/:issueId")
                .describe("Manually escalate an issue to a higher support level")
                .json_body(json!({
                    "escalationReason": "Issue not resolved within SLA",
                    "escalatedBy": "agent@example.com",
                    "targetLevel": "LEVEL_2"
                }))
                .build(),
            req(
                "Auto-escalate Issue",
                "POST",
                "/api/helpdesk/escalations/issue/:issueId/auto-escalate",
            )
            .describe("Trigger auto-escalation check for an issue")
            .build(),
            req("Get Issue Escalations", "GET", "/api/helpdesk/escalations/issue/:issueId")
                .describe("Retrieve escalation history for an issue")
                .build(),
        ],
    )
}

fn escalation_matrix_folder() -> Item {
    Folder::with_requests(
        "3. Escalation Matrix",
        vec![
            req("Create Escalation Matrix", "POST", "/api/helpdesk/escalation-matrix")
                .describe("Create a new escalation matrix entry with SLA configuration")
                .json_body(json!({
                    "relatedService": "ASSET_SERVICE",
                    "priority": "HIGH",
                    "firstResponseTimeMinutes": 30,
                    "resolutionTimeMinutes": 240,
                    "level1EscalationMinutes": 60,
                    "level2EscalationMinutes": 120,
                    "level3EscalationMinutes": 180
                }))
                .build(),
            req("Get All Escalation Matrices", "GET", "/api/helpdesk/escalation-matrix")
                .describe("Retrieve all escalation matrix configurations")
                .build(),
            req("Get Escalation Matrix by ID", "GET", "/api/helpdesk/escalation-matrix/:id")
                .describe("Retrieve a specific escalation matrix by its ID")
                .build(),
            req(
                "Get Escalation Matrices by Service",
                "GET",
                "/api/helpdesk/escalation-matrix/service/:service",
            )
            .describe("Retrieve escalation matrices for a specific service")
            .build(),
            req(
                "Get Escalation Matrix",
                "GET",
                "/api/helpdesk/escalation-matrix/service/:service/priority/:priority",
            )
            .describe("Get active escalation matrix for service and priority")
            .build(),
            req("Update Escalation Matrix", "PUT", "/api/helpdesk/escalation-matrix/:id")
                .describe("Update an existing escalation matrix")
                .json_body(json!({
                    "relatedService": "ASSET_SERVICE",
                    "priority": "HIGH",
                    "firstResponseTimeMinutes": 30,
                    "resolutionTimeMinutes": 240
                }))
                .build(),
            req("Delete Escalation Matrix", "DELETE", "/api/helpdesk/escalation-matrix/:id")
                .describe("Delete an escalation matrix")
                .build(),
        ],
    )
}

fn sla_folder() -> Item {
    Folder::with_requests(
        "4. SLA",
        vec![
            req("Get SLA Tracking", "GET", "/api/helpdesk/sla/issue/:issueId")
                .describe("Retrieve SLA tracking information for an issue")
                .build(),
            req("Get SLA Breaches", "GET", "/api/helpdesk/sla/breaches")
                .describe("Retrieve all issues with SLA breaches")
                .build(),
            req(
                "Record First Response",
                "POST",
                "/api/helpdesk/sla/issue/:issueId/first-response",
            )
            .describe("Record the first response time for an issue")
            .build(),
        ],
    )
}

fn faqs_folder() -> Item {
    Folder::with_requests(
        "5. FAQs",
        vec![
            req("Create FAQ", "POST", "/api/helpdesk/faqs")
                .describe("Add a new frequently asked question")
                .json_body(json!({
                    "question": "How do I reset my password?",
                    "answer": "Click on forgot password link",
                    "category": "Authentication",
                    "relatedService": "ASSET_SERVICE"
                }))
                .build(),
            req("Get All FAQs", "GET", "/api/helpdesk/faqs")
                .describe("Retrieve all FAQs")
                .build(),
            req("Get FAQ by ID", "GET", "/api/helpdesk/faqs/:id")
                .describe("Retrieve a specific FAQ by its ID")
                .build(),
            req("Get FAQs by Service", "GET", "/api/helpdesk/faqs/service/:service")
                .describe("Retrieve FAQs filtered by related service")
                .build(),
            req("Get FAQs by Category", "GET", "/api/helpdesk/faqs/category/:category")
                .describe("Retrieve FAQs filtered by category")
                .build(),
            req("Search FAQs", "GET", "/api/helpdesk/faqs/search")
                .describe("Search FAQs by keyword")
                .query("keyword", "password")
                .build(),
            req("Search FAQs by Service", "GET", "/api/helpdesk/faqs/service/:service/search")
                .describe("Search FAQs by service and keyword")
                .query("keyword", "password")
                .build(),
            req("Update FAQ", "PUT", "/api/helpdesk/faqs/:id")
                .describe("Update an existing FAQ")
                .json_body(json!({ "question": "Updated question", "answer": "Updated answer" }))
                .build(),
            req("Mark FAQ as Helpful", "POST", "/api/helpdesk/faqs/:id/helpful")
                .describe("Increment the helpful count for an FAQ")
                .build(),
            req("Delete FAQ", "DELETE", "/api/helpdesk/faqs/:id")
                .describe("Delete an FAQ")
                .build(),
        ],
    )
}

fn queries_folder() -> Item {
    Folder::with_requests(
        "6. Queries",
        vec![
            req("Create Query", "POST", "/api/helpdesk/queries")
                .describe("Submit a new query")
                .json_body(json!({
                    "question": "How do I create an asset?",
                    "relatedService": "ASSET_SERVICE",
                    "askedBy": "user@example.com"
                }))
                .build(),
            req("Get All Queries", "GET", "/api/helpdesk/queries")
                .describe("Retrieve all queries")
                .build(),
            req("Get Query by ID", "GET", "/api/helpdesk/queries/:id")
                .describe("Retrieve a specific query by its ID")
                .build(),
            req("Get Queries by Status", "GET", "/api/helpdesk/queries/status/:status")
                .describe("Retrieve queries filtered by status")
                .build(),
            req("Get Queries by Service", "GET", "/api/helpdesk/queries/service/:service")
                .describe("Retrieve queries filtered by related service")
                .build(),
            req("Get My Queries", "GET", "/api/helpdesk/queries/my-queries")
                .describe("Retrieve queries asked by the current user")
                .build(),
            req("Answer Query", "POST", "/api/helpdesk/queries/:id/answer")
                .describe("Provide an answer to a pending query")
                .json_body(json!({
                    "answer": "You can create an asset using the asset creation API",
                    "answeredBy": "agent@example.com"
                }))
                .build(),
            req("Close Query", "PATCH", "/api/helpdesk/queries/:id/close")
                .describe("Close a query")
                .build(),
        ],
    )
}

fn chatbot_folder() -> Item {
    Folder::with_requests(
        "7. Chatbot",
        vec![
            req("Send Message to Chatbot", "POST", "/api/helpdesk/chatbot/message")
                .describe("Send a message to the chatbot and get a response")
                .json_body(json!({
                    "message": "How do I create an asset?",
                    "sessionId": "session-123"
                }))
                .build(),
            req("Get Session History", "GET", "/api/helpdesk/chatbot/session/:sessionId")
                .describe("Retrieve conversation history for a chatbot session")
                .build(),
        ],
    )
}

fn knowledge_folder() -> Item {
    Folder::with_requests(
        "8. Service Knowledge",
        vec![
            req("Create Knowledge Entry", "POST", "/api/helpdesk/knowledge")
                .describe("Add new knowledge about a service")
                .json_body(json!({
                    "title": "Asset Creation Process",
                    "content": "To create an asset, use the POST /api/asset/v1/assets endpoint",
                    "relatedService": "ASSET_SERVICE",
                    "category": "Asset Management"
                }))
                .build(),
            req("Get All Knowledge", "GET", "/api/helpdesk/knowledge")
                .describe("Retrieve all knowledge entries")
                .build(),
            req("Get Knowledge by ID", "GET", "/api/helpdesk/knowledge/:id")
                .describe("Retrieve a specific knowledge entry by its ID")
                .build(),
            req("Get Knowledge by Service", "GET", "/api/helpdesk/knowledge/service/:service")
                .describe("Retrieve knowledge entries filtered by service")
                .build(),
            req("Search Knowledge", "GET", "/api/helpdesk/knowledge/service/:service/search")
                .describe("Search knowledge entries by service and keyword")
                .query("keyword", "asset")
                .build(),
            req("Update Knowledge", "PUT", "/api/helpdesk/knowledge/:id")
                .describe("Update an existing knowledge entry")
                .json_body(json!({ "title": "Updated Title", "content": "Updated content" }))
                .build(),
            req("Delete Knowledge", "DELETE", "/api/helpdesk/knowledge/:id")
                .describe("Delete a knowledge entry")
                .build(),
        ],
    )
}
