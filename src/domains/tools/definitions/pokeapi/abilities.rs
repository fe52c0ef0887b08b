//! get-pokemon-ability tool.
//!
//! Fetches `/ability/{id-or-name}` and projects the English effect text
//! plus a truncated list of Pokémon that can carry the ability.

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
    DEFAULT_LOCALE, NamedResource, VerboseEffect, error_result, fetch_and_project,
    first_for_locale,
};

/// Upper bound on the carrier list; some abilities (e.g. levitate) are
/// shared by dozens of Pokémon and would otherwise dominate the output.
const MAX_CARRIERS: usize = 10;

/// Parameters for the get-pokemon-ability tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAbilityParams {
    /// The ability to look up.
    #[schemars(description = "Ability name (e.g. \"overgrow\") or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Ability {
    pub id: u32,
    pub name: String,
    pub effect_entries: Vec<VerboseEffect>,
    pub pokemon: Vec<AbilityPokemon>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityPokemon {
    pub is_hidden: bool,
    pub pokemon: NamedResource,
}

// ============================================================================
// Projected result
// ============================================================================

/// One Pokémon that can have the ability.
#[derive(Debug, Clone, Serialize)]
pub struct AbilityHolder {
    pub name: String,
    pub is_hidden: bool,
}

/// Ability record with effect text and a bounded carrier list.
#[derive(Debug, Clone, Serialize)]
pub struct AbilitySummary {
    pub id: u32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_effect: Option<String>,
    pub pokemon: Vec<AbilityHolder>,
}

/// Map the upstream document to the projected record.
fn project_ability(doc: Ability) -> AbilitySummary {
    let entry = first_for_locale(&doc.effect_entries, DEFAULT_LOCALE);

    AbilitySummary {
        id: doc.id,
        name: doc.name,
        effect: entry.map(|e| e.effect.clone()),
        short_effect: entry.map(|e| e.short_effect.clone()),
        pokemon: doc
            .pokemon
            .into_iter()
            .take(MAX_CARRIERS)
            .map(|carrier| AbilityHolder {
                name: carrier.pokemon.name,
                is_hidden: carrier.is_hidden,
            })
            .collect(),
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-pokemon-ability tool implementation.
pub struct GetAbilityTool;

impl GetAbilityTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-pokemon-ability";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Pokémon Ability";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch details for a Pokémon ability: the English effect and short effect text, and up to ten Pokémon that can have it (flagging hidden-ability carriers).";

    const FALLBACK: &'static str = "Failed to fetch ability info";

    /// Execute the tool logic.
    pub async fn execute(params: &GetAbilityParams, client: &PokeApiClient) -> CallToolResult {
        info!("Fetching ability: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        let path = format!("/ability/{name}");
        fetch_and_project(client, &path, Self::FALLBACK, project_ability).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAbilityParams>(),
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
                let params: GetAbilityParams =
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

    fn carriers(count: usize) -> serde_json::Value {
        let list: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                json!({
                    "is_hidden": i % 2 == 1,
                    "slot": 1,
                    "pokemon": { "name": format!("mon-{i}"), "url": "" }
                })
            })
            .collect();
        json!(list)
    }

    fn ability_doc(carrier_count: usize) -> Ability {
        serde_json::from_value(json!({
            "id": 65,
            "name": "overgrow",
            "effect_entries": [
                {
                    "effect": "Wenn KP niedrig sind, wird Pflanze verstärkt.",
                    "short_effect": "Verstärkt Pflanze.",
                    "language": { "name": "de", "url": "" }
                },
                {
                    "effect": "When this Pokémon has 1/3 or less of its HP remaining, its grass-type moves inflict 1.5× as much regular damage.",
                    "short_effect": "Strengthens grass moves at 1/3 max HP or less.",
                    "language": { "name": "en", "url": "" }
                }
            ],
            "pokemon": carriers(carrier_count)
        }))
        .unwrap()
    }

    #[test]
    fn test_english_effect_pair_selected() {
        let summary = project_ability(ability_doc(2));

        assert!(summary.effect.as_deref().unwrap().contains("1.5×"));
        assert_eq!(
            summary.short_effect.as_deref(),
            Some("Strengthens grass moves at 1/3 max HP or less.")
        );
    }

    #[test]
    fn test_carrier_list_truncated_to_ten() {
        let summary = project_ability(ability_doc(25));

        assert_eq!(summary.pokemon.len(), MAX_CARRIERS);
        // Upstream order is preserved; the first ten survive.
        assert_eq!(summary.pokemon[0].name, "mon-0");
        assert_eq!(summary.pokemon[9].name, "mon-9");
        assert!(!summary.pokemon[0].is_hidden);
        assert!(summary.pokemon[9].is_hidden);
    }

    #[test]
    fn test_short_lists_kept_whole() {
        let summary = project_ability(ability_doc(3));
        assert_eq!(summary.pokemon.len(), 3);
    }

    #[test]
    fn test_no_english_entry_omits_effect_fields() {
        let mut doc = serde_json::to_value(json!({
            "id": 1,
            "name": "stench",
            "effect_entries": [
                {
                    "effect": "Solo en español.",
                    "short_effect": "Español.",
                    "language": { "name": "es", "url": "" }
                }
            ],
            "pokemon": []
        }))
        .unwrap();
        doc["pokemon"] = carriers(0);

        let doc: Ability = serde_json::from_value(doc).unwrap();
        let summary = project_ability(doc);

        assert_eq!(summary.effect, None);
        assert_eq!(summary.short_effect, None);

        let rendered = serde_json::to_string(&summary).unwrap();
        assert!(!rendered.contains("short_effect"));
    }
}
