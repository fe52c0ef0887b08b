//! get-pokemon-species tool.
//!
//! Fetches `/pokemon-species/{id-or-name}` and projects the lore-oriented
//! fields: English flavor text and genus, habitat, rarity flags, capture
//! rate, base happiness, and the evolution-chain reference URL.

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
use super::common::{
    DEFAULT_LOCALE, Localized, NamedResource, ResourceRef, error_result, fetch_and_project,
    first_for_locale,
};

const FORM_FEED: char = '\u{000C}';

/// Parameters for the get-pokemon-species tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSpeciesParams {
    /// The species to look up.
    #[schemars(description = "Pokémon species name or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub genera: Vec<Genus>,
    pub habitat: Option<NamedResource>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_baby: bool,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub evolution_chain: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

impl Localized for FlavorTextEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

impl Localized for Genus {
    fn language(&self) -> &str {
        &self.language.name
    }
}

// ============================================================================
// Projected result
// ============================================================================

/// Denormalized species record returned to the client.
///
/// `genus` and `flavor_text` stay truly absent when no English entry
/// exists; only `habitat` gets the `"unknown"` display default.
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesSummary {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    pub habitat: String,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_baby: bool,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub evolution_chain_url: String,
}

/// Map the upstream document to the projected record.
fn project_species(doc: PokemonSpecies) -> SpeciesSummary {
    let flavor_text = first_for_locale(&doc.flavor_text_entries, DEFAULT_LOCALE)
        .map(|entry| entry.flavor_text.replace(FORM_FEED, " "));
    let genus = first_for_locale(&doc.genera, DEFAULT_LOCALE).map(|entry| entry.genus.clone());

    SpeciesSummary {
        id: doc.id,
        name: doc.name,
        genus,
        flavor_text,
        habitat: doc
            .habitat
            .map(|h| h.name)
            .unwrap_or_else(|| "unknown".to_string()),
        is_legendary: doc.is_legendary,
        is_mythical: doc.is_mythical,
        is_baby: doc.is_baby,
        capture_rate: doc.capture_rate,
        base_happiness: doc.base_happiness,
        evolution_chain_url: doc.evolution_chain.url,
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-pokemon-species tool implementation.
pub struct GetSpeciesTool;

impl GetSpeciesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-pokemon-species";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Pokémon Species";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch species-level data for a Pokémon: English flavor text and genus, habitat, legendary/mythical/baby flags, capture rate, base happiness, and the evolution chain URL.";

    const FALLBACK: &'static str = "Failed to fetch Pokemon species";

    /// Execute the tool logic.
    pub async fn execute(params: &GetSpeciesParams, client: &PokeApiClient) -> CallToolResult {
        info!("Fetching Pokémon species: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        let path = format!("/pokemon-species/{name}");
        fetch_and_project(client, &path, Self::FALLBACK, project_species).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSpeciesParams>(),
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
                let params: GetSpeciesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
