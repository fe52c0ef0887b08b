//! get-pokemon tool.
//!
//! Fetches a single Pokémon from the upstream `/pokemon/{id-or-name}`
//! endpoint and projects it down to the core battle data a reasoning
//! consumer needs: types, abilities, base stats, size, and sprites.

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

/// Parameters for the get-pokemon tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPokemonParams {
    /// The Pokémon to look up.
    #[schemars(description = "Pokémon name or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub stats: Vec<StatSlot>,
    pub sprites: Sprites,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    pub front_shiny: Option<String>,
}

// ============================================================================
// Projected result
// ============================================================================

/// Denormalized Pokémon record returned to the client.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonSummary {
    pub id: u32,
    pub name: String,
    pub height_m: f64,
    pub weight_kg: f64,
    pub types: Vec<String>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: Vec<PokemonStat>,
    pub sprites: SpriteSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonAbility {
    pub name: String,
    pub is_hidden: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PokemonStat {
    pub name: String,
    pub base: u32,
}

/// The three sprite URLs the upstream document is reduced to.
#[derive(Debug, Clone, Serialize)]
pub struct SpriteSet {
    pub front: Option<String>,
    pub back: Option<String>,
    pub shiny: Option<String>,
}

/// Map the upstream document to the projected record.
///
/// Height and weight arrive as decimeters/hectograms and are converted to
/// meters/kilograms by the fixed ratio of 10.
fn project_pokemon(doc: Pokemon) -> PokemonSummary {
    PokemonSummary {
        id: doc.id,
        name: doc.name,
        height_m: f64::from(doc.height) / 10.0,
        weight_kg: f64::from(doc.weight) / 10.0,
        types: doc
            .types
            .into_iter()
            .map(|slot| slot.type_ref.name)
            .collect(),
        abilities: doc
            .abilities
            .into_iter()
            .map(|slot| PokemonAbility {
                name: slot.ability.name,
                is_hidden: slot.is_hidden,
            })
            .collect(),
        stats: doc
            .stats
            .into_iter()
            .map(|slot| PokemonStat {
                name: slot.stat.name,
                base: slot.base_stat,
            })
            .collect(),
        sprites: SpriteSet {
            front: doc.sprites.front_default,
            back: doc.sprites.back_default,
            shiny: doc.sprites.front_shiny,
        },
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-pokemon tool implementation.
pub struct GetPokemonTool;

impl GetPokemonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-pokemon";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Pokémon";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a Pokémon by name or id and return its core battle data: types, abilities, base stats, height/weight in metric units, and sprite URLs.";

    const FALLBACK: &'static str = "Failed to fetch Pokemon";

    /// Execute the tool logic.
    pub async fn execute(params: &GetPokemonParams, client: &PokeApiClient) -> CallToolResult {
        info!("Fetching Pokémon: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        let path = format!("/pokemon/{name}");
        fetch_and_project(client, &path, Self::FALLBACK, project_pokemon).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPokemonParams>(),
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
                let params: GetPokemonParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
