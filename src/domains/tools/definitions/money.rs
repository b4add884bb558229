//! Money unit conversion tool.
//!
//! Exposes the øre/kroner codec directly, so an agent can convert a JSON
//! document it built or received elsewhere.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::common::{error_result, success_result};
use crate::fiken::{Direction, convert_value};

/// Parameters for money conversion.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvertMoneyParams {
    /// JSON document to convert.
    #[schemars(description = "JSON document (object, array or scalar) to convert")]
    pub json: String,

    /// Conversion direction.
    #[schemars(
        description = "'to_major' converts øre to kroner, 'to_minor' converts kroner to øre (rounded to whole øre)"
    )]
    pub direction: Direction,
}

/// Money conversion tool implementation.
#[derive(Debug, Clone)]
pub struct ConvertMoneyTool;

impl ConvertMoneyTool {
    pub const NAME: &'static str = "convert_money_units";

    pub const DESCRIPTION: &'static str = "Converts the monetary fields of a JSON document between øre \
        (minor units, as stored by Fiken) and kroner (major units). Monetary fields are net, gross, \
        vat, amount, unitPrice, balance, paid, outstanding, netInNok, grossInNok, vatInNok and any \
        field whose name ends in 'Amount'. Other fields are left untouched.";

    /// Execute the conversion.
    pub fn execute(params: &ConvertMoneyParams) -> CallToolResult {
        info!("Converting money units {:?}", params.direction);

        let value: Value = match serde_json::from_str(&params.json) {
            Ok(value) => value,
            Err(e) => return error_result(&format!("Invalid JSON: {e}")),
        };

        match serde_json::to_string(&convert_value(value, params.direction)) {
            Ok(text) => success_result(text),
            Err(e) => error_result(&format!("Failed to serialize result: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConvertMoneyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for this tool.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: ConvertMoneyParams = serde_json::from_value(Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn result_text(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("expected text content"),
        }
    }

    fn convert(json: &str, direction: Direction) -> CallToolResult {
        ConvertMoneyTool::execute(&ConvertMoneyParams {
            json: json.to_string(),
            direction,
        })
    }

    #[test]
    fn test_to_major() {
        let result = convert(r#"{"net":10000,"vatType":"HIGH"}"#, Direction::ToMajor);
        assert!(!result.is_error.unwrap_or(false));
        let value: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(value["net"].as_f64(), Some(100.0));
        assert_eq!(value["vatType"], json!("HIGH"));
    }

    #[test]
    fn test_to_minor() {
        let result = convert(r#"[{"unitPrice":49.9},{"unitPrice":0.01}]"#, Direction::ToMinor);
        let value: Value = serde_json::from_str(&result_text(&result)).unwrap();
        assert_eq!(value, json!([{"unitPrice": 4990}, {"unitPrice": 1}]));
    }

    #[test]
    fn test_invalid_json_is_error_result() {
        let result = convert("{not json", Direction::ToMajor);
        assert!(result.is_error.unwrap_or(false));
        assert!(result_text(&result).starts_with("Invalid JSON"));
    }

    #[test]
    fn test_params_deserialize() {
        let params: ConvertMoneyParams =
            serde_json::from_value(json!({"json": "{}", "direction": "to_minor"})).unwrap();
        assert_eq!(params.direction, Direction::ToMinor);

        let bad = serde_json::from_value::<ConvertMoneyParams>(json!({"json": "{}", "direction": "up"}));
        assert!(bad.is_err());
    }

    #[test]
    fn test_tool_metadata() {
        let tool = ConvertMoneyTool::to_tool();
        assert_eq!(tool.name, "convert_money_units");
        assert!(tool.description.is_some());
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("json").is_some());
        assert!(properties.get("direction").is_some());
    }
}
