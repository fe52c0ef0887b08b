//! get-pokemon-type tool.
//!
//! Fetches `/type/{id-or-name}` and flattens the six damage-relation
//! buckets into plain name lists, plus a count of Pokémon with the type.

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

/// Parameters for the get-pokemon-type tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetTypeParams {
    /// The type to look up.
    #[schemars(description = "Pokémon type name (e.g. \"fire\") or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct TypeInfo {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelations,
    pub pokemon: Vec<TypePokemon>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypePokemon {
    pub pokemon: NamedResource,
}

// ============================================================================
// Projected result
// ============================================================================

/// Flattened type matchup chart. Empty buckets serialize as empty arrays
/// so the shape is identical for every type.
#[derive(Debug, Clone, Serialize)]
pub struct TypeSummary {
    pub id: u32,
    pub name: String,
    pub double_damage_to: Vec<String>,
    pub double_damage_from: Vec<String>,
    pub half_damage_to: Vec<String>,
    pub half_damage_from: Vec<String>,
    pub no_damage_to: Vec<String>,
    pub no_damage_from: Vec<String>,
    pub pokemon_count: usize,
}

fn names(entries: Vec<NamedResource>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.name).collect()
}

/// Map the upstream document to the projected record.
fn project_type(doc: TypeInfo) -> TypeSummary {
    let relations = doc.damage_relations;
    TypeSummary {
        id: doc.id,
        name: doc.name,
        double_damage_to: names(relations.double_damage_to),
        double_damage_from: names(relations.double_damage_from),
        half_damage_to: names(relations.half_damage_to),
        half_damage_from: names(relations.half_damage_from),
        no_damage_to: names(relations.no_damage_to),
        no_damage_from: names(relations.no_damage_from),
        pokemon_count: doc.pokemon.len(),
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-pokemon-type tool implementation.
pub struct GetTypeTool;

impl GetTypeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-pokemon-type";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Pokémon Type";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch damage relations for a Pokémon type: which types it deals double/half/no damage to and takes double/half/no damage from, plus how many Pokémon have the type.";

    const FALLBACK: &'static str = "Failed to fetch type info";

    /// Execute the tool logic.
    pub async fn execute(params: &GetTypeParams, client: &PokeApiClient) -> CallToolResult {
        info!("Fetching Pokémon type: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        let path = format!("/type/{name}");
        fetch_and_project(client, &path, Self::FALLBACK, project_type).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetTypeParams>(),
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
                let params: GetTypeParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
