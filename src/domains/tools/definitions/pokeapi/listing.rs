//! list-pokemon tool.
//!
//! Fetches a page of `/pokemon?limit=&offset=` and returns the entries
//! with derived ids. Page bounds are rejected up front rather than
//! silently clamped, so callers learn about bad paging parameters.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::client::PokeApiClient;
use super::common::{NamedResource, error_result, fetch_and_project};

const MIN_LIMIT: u32 = 1;
const MAX_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    20
}

/// Parameters for the list-pokemon tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPokemonParams {
    /// Page size.
    #[serde(default = "default_limit")]
    #[schemars(description = "Number of Pokémon to return (1-100, default 20)", range(min = 1, max = 100))]
    pub limit: u32,
    /// Number of entries to skip.
    #[serde(default)]
    #[schemars(description = "Number of Pokémon to skip (default 0)")]
    pub offset: u32,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    pub count: u32,
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

// ============================================================================
// Projected result
// ============================================================================

/// One Pokémon in a listing page.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonListEntry {
    pub id: u32,
    pub name: String,
}

/// A page of the Pokémon index.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonPage {
    pub count: u32,
    pub pokemon: Vec<PokemonListEntry>,
    pub has_more: bool,
}

/// Map an upstream index page to the projected page.
///
/// Ids are derived from the page position (offset + 1-based index), which
/// matches the national dex for the default listing order.
fn project_page(doc: ResourceList, offset: u32) -> PokemonPage {
    PokemonPage {
        count: doc.count,
        has_more: doc.next.is_some(),
        pokemon: doc
            .results
            .into_iter()
            .enumerate()
            .map(|(index, entry)| PokemonListEntry {
                id: offset + index as u32 + 1,
                name: entry.name,
            })
            .collect(),
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// list-pokemon tool implementation.
pub struct ListPokemonTool;

impl ListPokemonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list-pokemon";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "List Pokémon";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List Pokémon with pagination. Returns up to 100 entries per page with derived national-dex ids, the total count, and whether more pages exist.";

    const FALLBACK: &'static str = "Failed to list Pokemon";

    /// Execute the tool logic.
    pub async fn execute(params: &ListPokemonParams, client: &PokeApiClient) -> CallToolResult {
        info!(
            "Listing Pokémon: limit={} offset={}",
            params.limit, params.offset
        );

        if params.limit < MIN_LIMIT || params.limit > MAX_LIMIT {
            return error_result(format!(
                "Error: limit must be between {MIN_LIMIT} and {MAX_LIMIT}"
            ));
        }

        let offset = params.offset;
        let path = format!("/pokemon?limit={}&offset={}", params.limit, offset);
        fetch_and_project(client, &path, Self::FALLBACK, move |doc| {
            project_page(doc, offset)
        })
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListPokemonParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(Self::TITLE.into()),
        }
    }

    /// Create a ToolRoute for the rmcp tool router.
    pub fn create_route<S>(client: Arc<PokeApiClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: ListPokemonParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ApiConfig;
    use serde_json::json;

    fn page_doc(next: serde_json::Value, names: &[&str]) -> ResourceList {
        let results: Vec<serde_json::Value> = names
            .iter()
            .map(|name| json!({ "name": name, "url": "" }))
            .collect();
        serde_json::from_value(json!({
            "count": 1302,
            "next": next,
            "previous": null,
            "results": results
        }))
        .unwrap()
    }

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(t) => t.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_ids_derived_from_offset() {
        let doc = page_doc(json!("https://pokeapi.co/api/v2/pokemon?offset=23&limit=3"), &[
            "rattata", "raticate", "spearow",
        ]);
        let page = project_page(doc, 18);

        assert_eq!(page.pokemon.len(), 3);
        assert_eq!(page.pokemon[0].id, 19);
        assert_eq!(page.pokemon[1].id, 20);
        assert_eq!(page.pokemon[2].id, 21);
        assert_eq!(page.pokemon[0].name, "rattata");
    }

    #[test]
    fn test_full_page_ids_are_sequential() {
        let names: Vec<String> = (41..=60).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let page = project_page(page_doc(json!("https://example/next"), &refs), 40);

        let ids: Vec<u32> = page.pokemon.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, (41..=60).collect::<Vec<u32>>());
        assert!(page.has_more);
    }

    #[test]
    fn test_has_more_follows_next_link() {
        let more = project_page(page_doc(json!("https://example/next"), &["a"]), 0);
        assert!(more.has_more);

        let last = project_page(page_doc(json!(null), &["a"]), 0);
        assert!(!last.has_more);
        assert_eq!(last.count, 1302);
    }

    #[test]
    fn test_params_default_to_first_page() {
        let params: ListPokemonParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit, 20);
        assert_eq!(params.offset, 0);
    }

    #[tokio::test]
    async fn test_zero_limit_rejected_before_fetch() {
        let client = PokeApiClient::new(&ApiConfig::default());
        let params = ListPokemonParams {
            limit: 0,
            offset: 0,
        };

        let result = ListPokemonTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: limit must be between 1 and 100");
    }

    #[tokio::test]
    async fn test_oversized_limit_rejected_before_fetch() {
        let client = PokeApiClient::new(&ApiConfig::default());
        let params = ListPokemonParams {
            limit: 101,
            offset: 0,
        };

        let result = ListPokemonTool::execute(&params, &client).await;
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error: limit must be between 1 and 100");
    }

    #[tokio::test]
    #[ignore = "hits the live PokéAPI"]
    async fn test_first_page_live() {
        let client = PokeApiClient::new(&ApiConfig::default());
        let params = ListPokemonParams {
            limit: 5,
            offset: 0,
        };

        let result = ListPokemonTool::execute(&params, &client).await;
        assert_ne!(result.is_error, Some(true));
        assert!(text_of(&result).contains("bulbasaur"));
    }
}
