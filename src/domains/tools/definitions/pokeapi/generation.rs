//! get-generation tool.
//!
//! Fetches `/generation/{id-or-name}` and projects the region, the
//! alphabetized species roster, newly introduced types, and a move count.
//! Accepts both numeric ids and prefixed names ("Gen1", "generation-iii").

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

use super::client::{PokeApiClient, normalize_resource_name};
use super::common::{NamedResource, error_result, fetch_and_project};

/// Longest prefix first so "generation-iii" is never mangled by "gen".
const GENERATION_PREFIXES: [&str; 4] = ["generation-", "generation", "gen-", "gen"];

/// Generation selector: either a bare number or a prefixed name.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum GenerationIdent {
    Id(u32),
    Name(String),
}

/// Parameters for the get-generation tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetGenerationParams {
    /// The generation to look up.
    #[schemars(description = "Generation number (e.g. 1) or name (e.g. \"generation-i\", \"Gen1\")")]
    pub generation: GenerationIdent,
}

/// Reduce a generation selector to the bare identifier used in the
/// request path: "Gen1", "gen 1" and the number 1 all become "1".
fn normalize_generation(ident: &GenerationIdent) -> String {
    match ident {
        GenerationIdent::Id(id) => id.to_string(),
        GenerationIdent::Name(name) => {
            let normalized = normalize_resource_name(name);
            for prefix in GENERATION_PREFIXES {
                if let Some(rest) = normalized.strip_prefix(prefix) {
                    if !rest.is_empty() {
                        return rest.to_string();
                    }
                    // A bare prefix with nothing after it is not a selector.
                    return normalized;
                }
            }
            normalized
        }
    }
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    pub main_region: NamedResource,
    pub pokemon_species: Vec<NamedResource>,
    pub types: Vec<NamedResource>,
    pub moves: Vec<NamedResource>,
}

// ============================================================================
// Projected result
// ============================================================================

/// Generation record with the species roster sorted for stable output.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub id: u32,
    pub name: String,
    pub main_region: String,
    pub pokemon_species: Vec<String>,
    pub new_types: Vec<String>,
    pub move_count: usize,
}

/// Map the upstream document to the projected record.
fn project_generation(doc: Generation) -> GenerationSummary {
    let mut species: Vec<String> = doc
        .pokemon_species
        .into_iter()
        .map(|entry| entry.name)
        .collect();
    species.sort();

    GenerationSummary {
        id: doc.id,
        name: doc.name,
        main_region: doc.main_region.name,
        pokemon_species: species,
        new_types: doc.types.into_iter().map(|entry| entry.name).collect(),
        move_count: doc.moves.len(),
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-generation tool implementation.
pub struct GetGenerationTool;

impl GetGenerationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-generation";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Generation";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a Pokémon game generation: its main region, the full species roster in alphabetical order, the types it introduced, and how many moves it added.";

    const FALLBACK: &'static str = "Failed to fetch generation info";

    /// Execute the tool logic.
    pub async fn execute(params: &GetGenerationParams, client: &PokeApiClient) -> CallToolResult {
        let ident = normalize_generation(&params.generation);
        info!("Fetching generation: {ident}");

        if ident.is_empty() {
            return error_result("Error: generation must not be empty");
        }

        let path = format!("/generation/{ident}");
        fetch_and_project(client, &path, Self::FALLBACK, project_generation).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetGenerationParams>(),
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
                let params: GetGenerationParams =
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
    use serde_json::json;

    #[test]
    fn test_prefixed_names_and_ids_share_a_path() {
        // "Gen1" and the number 1 must hit the same endpoint.
        assert_eq!(
            normalize_generation(&GenerationIdent::Name("Gen1".to_string())),
            "1"
        );
        assert_eq!(normalize_generation(&GenerationIdent::Id(1)), "1");
    }

    #[test]
    fn test_prefix_stripping_variants() {
        let cases = [
            ("generation-i", "i"),
            ("GENERATION-III", "iii"),
            ("gen-2", "2"),
            ("Gen 2", "2"),
            ("generation9", "9"),
            ("kanto", "kanto"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                normalize_generation(&GenerationIdent::Name(input.to_string())),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_bare_prefix_is_not_stripped_to_nothing() {
        assert_eq!(
            normalize_generation(&GenerationIdent::Name("generation".to_string())),
            "generation"
        );
        assert_eq!(
            normalize_generation(&GenerationIdent::Name("gen".to_string())),
            "gen"
        );
    }

    #[test]
    fn test_untagged_ident_accepts_both_shapes() {
        let by_id: GetGenerationParams = serde_json::from_value(json!({ "generation": 3 })).unwrap();
        assert!(matches!(by_id.generation, GenerationIdent::Id(3)));

        let by_name: GetGenerationParams =
            serde_json::from_value(json!({ "generation": "Gen3" })).unwrap();
        assert!(matches!(by_name.generation, GenerationIdent::Name(ref n) if n == "Gen3"));
    }

    #[test]
    fn test_species_roster_sorted_alphabetically() {
        let doc: Generation = serde_json::from_value(json!({
            "id": 1,
            "name": "generation-i",
            "main_region": { "name": "kanto", "url": "" },
            "pokemon_species": [
                { "name": "bulbasaur", "url": "" },
                { "name": "abra", "url": "" },
                { "name": "zubat", "url": "" },
                { "name": "charmander", "url": "" }
            ],
            "types": [],
            "moves": [
                { "name": "pound", "url": "" },
                { "name": "karate-chop", "url": "" }
            ]
        }))
        .unwrap();

        let summary = project_generation(doc);
        assert_eq!(
            summary.pokemon_species,
            vec!["abra", "bulbasaur", "charmander", "zubat"]
        );
        assert_eq!(summary.main_region, "kanto");
        assert_eq!(summary.move_count, 2);
        assert!(summary.new_types.is_empty());
    }

    #[test]
    fn test_new_types_keep_upstream_order() {
        let doc: Generation = serde_json::from_value(json!({
            "id": 2,
            "name": "generation-ii",
            "main_region": { "name": "johto", "url": "" },
            "pokemon_species": [],
            "types": [
                { "name": "steel", "url": "" },
                { "name": "dark", "url": "" }
            ],
            "moves": []
        }))
        .unwrap();

        let summary = project_generation(doc);
        assert_eq!(summary.new_types, vec!["steel", "dark"]);
        assert_eq!(summary.move_count, 0);
    }
}
