//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own
//! route; every route shares a single upstream PokéAPI client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{
    GetAbilityTool, GetEvolutionChainTool, GetGenerationTool, GetMoveTool, GetPokemonTool,
    GetSpeciesTool, GetTypeTool, ListPokemonTool, PokeApiClient,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let client = Arc::new(PokeApiClient::new(&config.api));

    ToolRouter::new()
        .with_route(GetPokemonTool::create_route(client.clone()))
        .with_route(GetSpeciesTool::create_route(client.clone()))
        .with_route(GetTypeTool::create_route(client.clone()))
        .with_route(GetAbilityTool::create_route(client.clone()))
        .with_route(GetMoveTool::create_route(client.clone()))
        .with_route(ListPokemonTool::create_route(client.clone()))
        .with_route(GetEvolutionChainTool::create_route(client.clone()))
        .with_route(GetGenerationTool::create_route(client))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config::default())
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 8);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get-pokemon"));
        assert!(names.contains(&"get-pokemon-species"));
        assert!(names.contains(&"get-pokemon-type"));
        assert!(names.contains(&"get-pokemon-ability"));
        assert!(names.contains(&"get-pokemon-move"));
        assert!(names.contains(&"list-pokemon"));
        assert!(names.contains(&"get-evolution-chain"));
        assert!(names.contains(&"get-generation"));
    }

    #[test]
    fn test_registry_matches_router() {
        // The registry metadata must describe exactly the tools the router
        // serves: same names, same schemas, same titles and descriptions.
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();

        let registry_tools = ToolRegistry::get_all_tools();
        assert_eq!(registry_tools.len(), router_tools.len());

        for registered in &registry_tools {
            let routed = router_tools
                .iter()
                .find(|t| t.name == registered.name)
                .unwrap_or_else(|| panic!("{} is not routed", registered.name));

            assert_eq!(routed.title, registered.title);
            assert_eq!(routed.description, registered.description);
            assert_eq!(routed.input_schema, registered.input_schema);
        }
    }
}
