//! Tool registry - the single list of every tool the server exposes.

use std::iter;

use rmcp::model::Tool;

use super::definitions::{ConvertMoneyTool, fiken};
use super::endpoint::Endpoint;
use super::error::ToolError;

/// Central listing of all tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// All Fiken API endpoints exposed as tools.
    pub fn endpoints() -> impl Iterator<Item = &'static Endpoint> {
        fiken::all_endpoints()
    }

    /// Look up an endpoint by tool name.
    pub fn endpoint(name: &str) -> Result<&'static Endpoint, ToolError> {
        Self::endpoints()
            .find(|endpoint| endpoint.name == name)
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        iter::once(ConvertMoneyTool::NAME)
            .chain(Self::endpoints().map(|endpoint| endpoint.name))
            .collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        iter::once(ConvertMoneyTool::to_tool())
            .chain(Self::endpoints().map(Endpoint::to_tool))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 54);
        for expected in [
            "convert_money_units",
            "get_user",
            "get_companies",
            "get_account_balances",
            "create_bank_account",
            "delete_contact",
            "create_general_journal_entry",
            "get_transactions",
            "delete_product",
            "create_invoice_from_draft",
            "get_credit_note",
            "create_purchase",
            "get_sale",
            "get_offers",
            "get_order_confirmation",
            "update_project",
            "get_inbox_item",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_tool_names_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_get_all_tools_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, ToolRegistry::tool_names());
    }

    #[test]
    fn test_endpoint_lookup() {
        let endpoint = ToolRegistry::endpoint("get_invoice").unwrap();
        assert_eq!(endpoint.path, "/companies/{company_slug}/invoices/{invoice_id}");

        let err = ToolRegistry::endpoint("get_nothing").unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));

        assert!(ToolRegistry::endpoint(ConvertMoneyTool::NAME).is_err());
    }
}
