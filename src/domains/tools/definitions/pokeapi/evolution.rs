//! get-evolution-chain tool.
//!
//! Resolves a species to its full evolution tree. Two sequential fetches:
//! `/pokemon-species/{name}` yields only a chain reference URL, whose tail
//! id segment is then followed to `/evolution-chain/{id}`. The nested
//! upstream graph is walked depth-first into a simplified tree.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::client::{ApiError, PokeApiClient, normalize_resource_name};
use super::common::{NamedResource, ResourceRef, api_failure, error_result, projection_result};

/// Hard cap on the tree walk. Real chains are at most three stages deep;
/// upstream data is assumed acyclic but not formally guaranteed, so
/// anything past this depth is truncated instead of recursed into.
const MAX_CHAIN_DEPTH: usize = 16;

/// Parameters for the get-evolution-chain tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetEvolutionChainParams {
    /// The species whose chain to resolve.
    #[schemars(description = "Pokémon species name or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

/// Just enough of the species document to reach the chain reference.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesChainRef {
    pub evolution_chain: ResourceRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionChain {
    pub chain: ChainLink,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    pub evolves_to: Vec<ChainLink>,
    pub evolution_details: Vec<EvolutionDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: NamedResource,
    pub min_level: Option<u32>,
    pub min_happiness: Option<u32>,
    pub min_affection: Option<u32>,
    pub item: Option<NamedResource>,
    pub held_item: Option<NamedResource>,
    #[serde(default)]
    pub time_of_day: String,
}

// ============================================================================
// Projected result
// ============================================================================

/// One requirement for an incoming evolution transition.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionStep {
    pub trigger: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_of_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_happiness: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_affection: Option<u32>,
}

/// One species in the evolution tree.
///
/// `children` and `evolution_details` are absent rather than empty: a leaf
/// node has no `children` key at all, and a base species (which nothing
/// evolves into) has no `evolution_details` key.
#[derive(Debug, Clone, Serialize)]
pub struct EvolutionNode {
    pub species_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution_details: Option<Vec<EvolutionStep>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<EvolutionNode>>,
}

fn project_step(detail: EvolutionDetail) -> EvolutionStep {
    EvolutionStep {
        trigger: detail.trigger.name,
        min_level: detail.min_level,
        item: detail.item.map(|item| item.name),
        held_item: detail.held_item.map(|item| item.name),
        time_of_day: (!detail.time_of_day.is_empty()).then_some(detail.time_of_day),
        min_happiness: detail.min_happiness,
        min_affection: detail.min_affection,
    }
}

/// Walk the upstream chain depth-first, preserving sibling order.
fn build_tree(link: ChainLink, depth: usize) -> EvolutionNode {
    let children: Vec<EvolutionNode> = if depth >= MAX_CHAIN_DEPTH {
        if !link.evolves_to.is_empty() {
            warn!(
                "Evolution chain exceeds depth cap {MAX_CHAIN_DEPTH}, truncating below '{}'",
                link.species.name
            );
        }
        Vec::new()
    } else {
        link.evolves_to
            .into_iter()
            .map(|child| build_tree(child, depth + 1))
            .collect()
    };

    let details: Vec<EvolutionStep> = link
        .evolution_details
        .into_iter()
        .map(project_step)
        .collect();

    EvolutionNode {
        species_name: link.species.name,
        evolution_details: (!details.is_empty()).then_some(details),
        children: (!children.is_empty()).then_some(children),
    }
}

/// Pull the chain id out of a reference URL such as
/// `https://pokeapi.co/api/v2/evolution-chain/67/`.
fn chain_id_from_url(url: &str) -> Result<String, ApiError> {
    url.split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::malformed(format!("could not extract evolution chain id from '{url}'"))
        })
}

async fn resolve_chain(client: &PokeApiClient, species: &str) -> Result<EvolutionNode, ApiError> {
    let species_doc: SpeciesChainRef = client
        .get_json(&format!("/pokemon-species/{species}"))
        .await?;
    let chain_id = chain_id_from_url(&species_doc.evolution_chain.url)?;

    let chain: EvolutionChain = client
        .get_json(&format!("/evolution-chain/{chain_id}"))
        .await?;
    Ok(build_tree(chain.chain, 0))
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-evolution-chain tool implementation.
pub struct GetEvolutionChainTool;

impl GetEvolutionChainTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-evolution-chain";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Evolution Chain";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch the full evolution tree for a Pokémon species, including branch evolutions and the trigger, level, item, happiness and time-of-day requirements for each transition.";

    const FALLBACK: &'static str = "Failed to fetch evolution chain";

    /// Execute the tool logic.
    pub async fn execute(
        params: &GetEvolutionChainParams,
        client: &PokeApiClient,
    ) -> CallToolResult {
        info!("Fetching evolution chain for: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        match resolve_chain(client, &name).await {
            Ok(tree) => projection_result(&tree, client.debug()),
            Err(err) => api_failure(&err, Self::FALLBACK),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetEvolutionChainParams>(),
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
                let params: GetEvolutionChainParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}
