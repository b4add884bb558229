//! Tool Router - builds the rmcp ToolRouter from the registry.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::ConvertMoneyTool;
use super::executor::ApiExecutor;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(executor: Arc<ApiExecutor>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRegistry::endpoints().fold(
        ToolRouter::new().with_route(ConvertMoneyTool::create_route()),
        |router, endpoint| router.with_route(endpoint.create_route(executor.clone())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiken::testing::FakeApi;

    struct TestServer {}

    fn test_executor() -> Arc<ApiExecutor> {
        Arc::new(ApiExecutor::new(Arc::new(FakeApi::responding(200, "{}")), true))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_executor());
        let tools = router.list_all();
        assert_eq!(tools.len(), 54);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"convert_money_units"));
        assert!(names.contains(&"get_user"));
        assert!(names.contains(&"create_invoice"));
        assert!(names.contains(&"delete_invoice_draft"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_executor());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
