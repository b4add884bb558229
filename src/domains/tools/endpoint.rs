//! Declarative description of a Fiken API tool.
//!
//! Every Fiken tool maps one tool call onto one HTTP request. Instead of a
//! file per tool, each tool is an [`Endpoint`] value in the catalog under
//! `definitions/fiken/`; this module turns an endpoint into an rmcp tool,
//! its input schema and the request it issues.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{JsonObject, Tool},
};
use serde_json::{Value, json};

use super::error::ToolError;
use super::executor::ApiExecutor;
use crate::fiken::{HttpMethod, QueryParams};

/// Argument name carrying the JSON request body.
pub const BODY_ARG: &str = "body";

/// JSON type of a query argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
}

impl ParamKind {
    fn json_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
        }
    }
}

/// A `{placeholder}` in the endpoint path. Always required.
#[derive(Debug, Clone, Copy)]
pub struct PathParam {
    pub name: &'static str,
    pub description: &'static str,
}

impl PathParam {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// A tool argument forwarded as a query parameter.
#[derive(Debug, Clone, Copy)]
pub struct QueryParam {
    /// Tool argument name (snake_case).
    pub arg: &'static str,
    /// Query key sent to Fiken (camelCase).
    pub key: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
}

impl QueryParam {
    pub const fn string(arg: &'static str, key: &'static str, description: &'static str) -> Self {
        Self {
            arg,
            key,
            kind: ParamKind::String,
            description,
            required: false,
        }
    }

    pub const fn integer(arg: &'static str, key: &'static str, description: &'static str) -> Self {
        Self {
            arg,
            key,
            kind: ParamKind::Integer,
            description,
            required: false,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// One Fiken API operation exposed as a tool.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API base, with `{arg}` placeholders.
    pub path: &'static str,
    pub path_params: &'static [PathParam],
    pub query_params: &'static [QueryParam],
    /// Description of the JSON body argument, if the endpoint takes one.
    pub body: Option<&'static str>,
    /// Label used in the confirmation text of a delete ("Contact 12 deleted").
    pub deleted: Option<&'static str>,
}

impl Endpoint {
    /// JSON schema of the tool arguments.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        let mut required = Vec::new();

        for param in self.path_params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": "string", "description": param.description }),
            );
            required.push(param.name);
        }

        for param in self.query_params {
            properties.insert(
                param.arg.to_string(),
                json!({ "type": param.kind.json_type(), "description": param.description }),
            );
            if param.required {
                required.push(param.arg);
            }
        }

        if let Some(description) = self.body {
            properties.insert(
                BODY_ARG.to_string(),
                json!({ "type": "string", "description": description }),
            );
            required.push(BODY_ARG);
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema
    }

    /// Substitute path arguments into the path template.
    pub fn resolve_path(&self, args: &JsonObject) -> Result<String, ToolError> {
        let mut path = String::with_capacity(self.path.len());
        let mut rest = self.path;

        // Substituted values are never rescanned for placeholders.
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + len];
            let param = self
                .path_params
                .iter()
                .find(|param| param.name == name)
                .ok_or_else(|| {
                    ToolError::internal(format!("{}: no parameter for '{{{name}}}'", self.name))
                })?;

            path.push_str(&rest[..start]);
            path.push_str(&path_segment(args, param)?);
            rest = &rest[start + len + 1..];
        }
        path.push_str(rest);

        Ok(path)
    }

    /// Collect query parameters from the arguments.
    pub fn query(&self, args: &JsonObject) -> Result<QueryParams, ToolError> {
        let mut query = QueryParams::new();

        for param in self.query_params {
            if let Some(value) = args.get(param.arg) {
                query.set_json(param.key, value);
            }
            if param.required && query.get(param.key).is_none() {
                return Err(ToolError::invalid_arguments(format!(
                    "Missing or invalid '{}' parameter",
                    param.arg
                )));
            }
        }

        Ok(query)
    }

    /// Raw JSON body from the arguments.
    ///
    /// Accepts a JSON document as a string, or a JSON object/array directly.
    pub fn body_bytes(&self, args: &JsonObject) -> Result<Vec<u8>, ToolError> {
        match args.get(BODY_ARG) {
            Some(Value::String(text)) if !text.trim().is_empty() => Ok(text.as_bytes().to_vec()),
            Some(value @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_vec(value).map_err(|e| ToolError::internal(e.to_string()))
            }
            _ => Err(ToolError::invalid_arguments(format!(
                "Missing or invalid '{BODY_ARG}' parameter"
            ))),
        }
    }

    /// Value of the last path argument, i.e. the id of the addressed resource.
    pub fn resource_id(&self, args: &JsonObject) -> Option<String> {
        self.path_params
            .last()
            .and_then(|param| string_arg(args, param.name).ok())
    }

    /// Create a Tool model for this endpoint (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute that executes this endpoint.
    pub fn create_route<S>(&'static self, executor: Arc<ApiExecutor>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(self.to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let executor = executor.clone();
            async move {
                executor
                    .execute(self, &args)
                    .await
                    .map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// A path argument that stays exactly one path segment after URL parsing.
fn path_segment(args: &JsonObject, param: &PathParam) -> Result<String, ToolError> {
    let value = string_arg(args, param.name)?;
    if matches!(value.as_str(), "." | "..") || value.contains(['/', '?', '#', '%', '{', '}']) {
        return Err(ToolError::invalid_arguments(format!(
            "'{}' is not a valid identifier: {}",
            param.name, value
        )));
    }
    Ok(value)
}

/// A required identifier argument. Numbers are accepted and stringified.
fn string_arg(args: &JsonObject, name: &str) -> Result<String, ToolError> {
    match args.get(name) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(ToolError::invalid_arguments(format!(
            "Missing or invalid '{name}' parameter"
        ))),
    }
}
