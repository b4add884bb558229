//! Executes Fiken endpoints against the API.
//!
//! The executor owns the boundary between tool calls and HTTP: it builds the
//! request from the arguments, converts monetary fields on the way out and
//! back in, and turns the response into tool result text.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject};
use tracing::{debug, error, info, instrument};

use super::definitions::common::{error_result, success_result};
use super::endpoint::Endpoint;
use super::error::ToolError;
use crate::fiken::{ApiRequest, ApiResponse, FikenApi, to_major_units, to_minor_units};

/// Runs endpoint tool calls against a [`FikenApi`].
pub struct ApiExecutor {
    api: Arc<dyn FikenApi>,
    convert_money: bool,
}

impl ApiExecutor {
    pub fn new(api: Arc<dyn FikenApi>, convert_money: bool) -> Self {
        Self { api, convert_money }
    }

    /// Execute a tool call.
    ///
    /// Argument problems are returned as `Err`. Everything that happens
    /// after the request is built, including transport failures and API
    /// error statuses, is an error *result* the agent can read.
    #[instrument(skip_all, fields(tool = endpoint.name))]
    pub async fn execute(
        &self,
        endpoint: &Endpoint,
        args: &JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let request = self.build_request(endpoint, args)?;
        info!("{} {}", request.method, request.path);

        let response = match self.api.send(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed: {}", e);
                return Ok(error_result(&format!("Request failed: {e}")));
            }
        };

        if response.is_error() {
            return Ok(error_result(&format!(
                "API error {}: {}",
                response.status,
                response.body_text()
            )));
        }

        Ok(success_result(self.success_text(endpoint, args, response)))
    }

    /// Translate tool arguments into an API request.
    pub fn build_request(
        &self,
        endpoint: &Endpoint,
        args: &JsonObject,
    ) -> Result<ApiRequest, ToolError> {
        let path = endpoint.resolve_path(args)?;
        let query = endpoint.query(args)?;

        let body = match endpoint.body {
            Some(_) => {
                let raw = endpoint.body_bytes(args)?;
                Some(if self.convert_money {
                    to_minor_units(&raw).into_owned()
                } else {
                    raw
                })
            }
            None => None,
        };

        Ok(ApiRequest::new(endpoint.method, path)
            .with_query(query)
            .with_body(body))
    }

    fn success_text(&self, endpoint: &Endpoint, args: &JsonObject, response: ApiResponse) -> String {
        debug!("Status {} ({} bytes)", response.status, response.body.len());

        if !response.body.is_empty() {
            let body = if self.convert_money {
                to_major_units(&response.body).into_owned()
            } else {
                response.body
            };
            return String::from_utf8_lossy(&body).into_owned();
        }

        if let Some(label) = endpoint.deleted {
            let id = endpoint.resource_id(args).unwrap_or_default();
            return format!("{label} {id} deleted successfully");
        }

        if let Some(location) = response.location {
            return format!("Created: {location}");
        }

        format!("Request completed with status {}", response.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::endpoint::{PathParam, QueryParam};
    use crate::fiken::HttpMethod;
    use crate::fiken::testing::FakeApi;
    use rmcp::model::RawContent;
    use serde_json::{Value, json};

    const COMPANY: PathParam = PathParam::new("company_slug", "The company slug identifier");

    const GET_INVOICES: Endpoint = Endpoint {
        name: "get_invoices",
        description: "Retrieves invoices",
        method: HttpMethod::Get,
        path: "/companies/{company_slug}/invoices",
        path_params: &[COMPANY],
        query_params: &[
            QueryParam::integer("page", "page", "Page number"),
            QueryParam::integer("page_size", "pageSize", "Results per page"),
            QueryParam::string("settled", "settled", "Filter by settled status"),
        ],
        body: None,
        deleted: None,
    };

    const CREATE_INVOICE: Endpoint = Endpoint {
        name: "create_invoice",
        description: "Creates an invoice",
        method: HttpMethod::Post,
        path: "/companies/{company_slug}/invoices",
        path_params: &[COMPANY],
        query_params: &[],
        body: Some("JSON body with invoice details"),
        deleted: None,
    };

    const DELETE_CONTACT: Endpoint = Endpoint {
        name: "delete_contact",
        description: "Deletes a contact",
        method: HttpMethod::Delete,
        path: "/companies/{company_slug}/contacts/{contact_id}",
        path_params: &[COMPANY, PathParam::new("contact_id", "The contact ID")],
        query_params: &[],
        body: None,
        deleted: Some("Contact"),
    };

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn result_text(result: &CallToolResult) -> String {
        let content = result.content.first().expect("result has no content");
        match &content.raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    fn executor(api: &Arc<FakeApi>, convert_money: bool) -> ApiExecutor {
        ApiExecutor::new(api.clone(), convert_money)
    }

    #[tokio::test]
    async fn test_get_builds_request_and_converts_response() {
        let api = Arc::new(FakeApi::responding(
            200,
            r#"[{"invoiceId":1,"net":10000,"gross":12500,"invoiceNumber":10001}]"#,
        ));
        let result = executor(&api, true)
            .execute(
                &GET_INVOICES,
                &args(json!({"company_slug": "demo-as", "page": 0, "page_size": 25, "settled": "false"})),
            )
            .await
            .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        let value: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(value[0]["net"].as_f64(), Some(100.0));
        assert_eq!(value[0]["gross"].as_f64(), Some(125.0));
        assert_eq!(value[0]["invoiceNumber"], json!(10001));

        let request = api.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/companies/demo-as/invoices");
        assert_eq!(request.query.encode().unwrap(), "page=0&pageSize=25&settled=false");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_response_passthrough_when_conversion_disabled() {
        let body = r#"{"net":10000}"#;
        let api = Arc::new(FakeApi::responding(200, body));
        let result = executor(&api, false)
            .execute(&GET_INVOICES, &args(json!({"company_slug": "demo-as"})))
            .await
            .unwrap();
        assert_eq!(result_text(&result), body);
    }

    #[tokio::test]
    async fn test_post_converts_body_to_minor_units() {
        let api = Arc::new(FakeApi::replying(ApiResponse {
            status: 201,
            body: Vec::new(),
            location: Some("https://api.fiken.no/api/v2/companies/demo-as/invoices/55".to_string()),
        }));
        let result = executor(&api, true)
            .execute(
                &CREATE_INVOICE,
                &args(json!({
                    "company_slug": "demo-as",
                    "body": r#"{"lines":[{"unitPrice":199.5,"quantity":2}]}"#
                })),
            )
            .await
            .unwrap();

        assert_eq!(
            result_text(&result),
            "Created: https://api.fiken.no/api/v2/companies/demo-as/invoices/55"
        );

        let request = api.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        let sent: Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(sent["lines"][0]["unitPrice"], json!(19950));
        assert_eq!(sent["lines"][0]["quantity"], json!(2));
    }

    #[tokio::test]
    async fn test_post_body_sent_verbatim_when_conversion_disabled() {
        let api = Arc::new(FakeApi::responding(201, ""));
        let body = r#"{"net": 199.5}"#;
        executor(&api, false)
            .execute(&CREATE_INVOICE, &args(json!({"company_slug": "demo-as", "body": body})))
            .await
            .unwrap();
        assert_eq!(api.last_request().body.as_deref(), Some(body.as_bytes()));
    }

    #[tokio::test]
    async fn test_api_error_becomes_error_result() {
        let api = Arc::new(FakeApi::responding(404, r#"{"error":"not found"}"#));
        let result = executor(&api, true)
            .execute(&GET_INVOICES, &args(json!({"company_slug": "nope"})))
            .await
            .unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), r#"API error 404: {"error":"not found"}"#);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_error_result() {
        let api = Arc::new(FakeApi::failing());
        let result = executor(&api, true)
            .execute(&GET_INVOICES, &args(json!({"company_slug": "demo-as"})))
            .await
            .unwrap();
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Request failed: invalid URL"));
    }

    #[tokio::test]
    async fn test_missing_arguments_are_not_sent() {
        let api = Arc::new(FakeApi::responding(200, "[]"));
        let exec = executor(&api, true);

        let err = exec.execute(&GET_INVOICES, &args(json!({}))).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = exec
            .execute(&CREATE_INVOICE, &args(json!({"company_slug": "demo-as"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmation() {
        let api = Arc::new(FakeApi::responding(204, ""));
        let result = executor(&api, true)
            .execute(
                &DELETE_CONTACT,
                &args(json!({"company_slug": "demo-as", "contact_id": "12"})),
            )
            .await
            .unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Contact 12 deleted successfully");
        assert_eq!(api.last_request().method, HttpMethod::Delete);
    }

    #[tokio::test]
    async fn test_delete_with_dot_segment_id_is_not_sent() {
        let api = Arc::new(FakeApi::responding(204, ""));
        let exec = executor(&api, true);

        for id in ["..", "%2e%2e"] {
            let err = exec
                .execute(
                    &DELETE_CONTACT,
                    &args(json!({"company_slug": "demo-as", "contact_id": id})),
                )
                .await
                .unwrap_err();
            assert!(matches!(err, ToolError::InvalidArguments(_)), "{id}");
        }
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_response_reports_status() {
        let api = Arc::new(FakeApi::responding(202, ""));
        let result = executor(&api, true)
            .execute(&CREATE_INVOICE, &args(json!({"company_slug": "demo-as", "body": "{}"})))
            .await
            .unwrap();
        assert_eq!(result_text(&result), "Request completed with status 202");
    }
}
