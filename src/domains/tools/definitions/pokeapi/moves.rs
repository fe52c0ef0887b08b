//! get-pokemon-move tool.
//!
//! Fetches `/move/{id-or-name}` and projects battle stats plus the
//! English short-effect text with the `$effect_chance%` placeholder
//! resolved against the move's actual effect chance.

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

const EFFECT_CHANCE_PLACEHOLDER: &str = "$effect_chance%";

/// Parameters for the get-pokemon-move tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetMoveParams {
    /// The move to look up.
    #[schemars(description = "Move name (e.g. \"thunderbolt\") or numeric id", length(min = 1))]
    pub name: String,
}

// ============================================================================
// Upstream schema (partial)
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Move {
    pub id: u32,
    pub name: String,
    pub effect_entries: Vec<VerboseEffect>,
    pub effect_chance: Option<u32>,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
    pub damage_class: NamedResource,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: i32,
    pub generation: NamedResource,
    pub target: NamedResource,
}

// ============================================================================
// Projected result
// ============================================================================

/// Move record returned to the client.
///
/// `power`, `accuracy` and `pp` stay nullable in the output: status moves
/// genuinely have no power, and hiding the field would be ambiguous.
#[derive(Debug, Clone, Serialize)]
pub struct MoveSummary {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub damage_class: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<String>,
    pub effect_chance: Option<u32>,
    pub generation: String,
    pub target: String,
}

/// Resolve the literal `$effect_chance%` placeholder PokéAPI embeds in
/// effect text. Left untouched when the move has no effect chance.
fn substitute_effect_chance(text: &str, chance: Option<u32>) -> String {
    match chance {
        Some(value) => text.replace(EFFECT_CHANCE_PLACEHOLDER, &format!("{value}%")),
        None => text.to_string(),
    }
}

/// Map the upstream document to the projected record.
fn project_move(doc: Move) -> MoveSummary {
    let effect = first_for_locale(&doc.effect_entries, DEFAULT_LOCALE)
        .map(|entry| substitute_effect_chance(&entry.short_effect, doc.effect_chance));

    MoveSummary {
        id: doc.id,
        name: doc.name,
        type_name: doc.type_ref.name,
        damage_class: doc.damage_class.name,
        power: doc.power,
        accuracy: doc.accuracy,
        pp: doc.pp,
        priority: doc.priority,
        effect,
        effect_chance: doc.effect_chance,
        generation: doc.generation.name,
        target: doc.target.name,
    }
}

// ============================================================================
// Tool definition
// ============================================================================

/// get-pokemon-move tool implementation.
pub struct GetMoveTool;

impl GetMoveTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-pokemon-move";

    /// Tool title shown to clients.
    pub const TITLE: &'static str = "Get Pokémon Move";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch details for a Pokémon move: type, damage class, power, accuracy, PP, priority, effect chance, the English effect text, introducing generation and target.";

    const FALLBACK: &'static str = "Failed to fetch move info";

    /// Execute the tool logic.
    pub async fn execute(params: &GetMoveParams, client: &PokeApiClient) -> CallToolResult {
        info!("Fetching move: {}", params.name);

        let name = normalize_resource_name(&params.name);
        if name.is_empty() {
            return error_result("Error: name must not be empty");
        }

        let path = format!("/move/{name}");
        fetch_and_project(client, &path, Self::FALLBACK, project_move).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetMoveParams>(),
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
                let params: GetMoveParams = serde_json::from_value(serde_json::Value::Object(args))
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

    fn thunderbolt_doc() -> Move {
        serde_json::from_value(json!({
            "id": 85,
            "name": "thunderbolt",
            "effect_entries": [
                {
                    "effect": "Inflicts regular damage. Has a $effect_chance% chance to paralyze the target.",
                    "short_effect": "Has a $effect_chance% chance to paralyze the target.",
                    "language": { "name": "en", "url": "" }
                }
            ],
            "effect_chance": 10,
            "type": { "name": "electric", "url": "" },
            "damage_class": { "name": "special", "url": "" },
            "power": 90,
            "accuracy": 100,
            "pp": 15,
            "priority": 0,
            "generation": { "name": "generation-i", "url": "" },
            "target": { "name": "selected-pokemon", "url": "" }
        }))
        .unwrap()
    }

    #[test]
    fn test_effect_chance_placeholder_substituted() {
        let summary = project_move(thunderbolt_doc());

        assert_eq!(
            summary.effect.as_deref(),
            Some("Has a 10% chance to paralyze the target.")
        );
        assert_eq!(summary.effect_chance, Some(10));
    }

    #[test]
    fn test_battle_stats_projected() {
        let summary = project_move(thunderbolt_doc());

        assert_eq!(summary.id, 85);
        assert_eq!(summary.type_name, "electric");
        assert_eq!(summary.damage_class, "special");
        assert_eq!(summary.power, Some(90));
        assert_eq!(summary.accuracy, Some(100));
        assert_eq!(summary.pp, Some(15));
        assert_eq!(summary.priority, 0);
        assert_eq!(summary.generation, "generation-i");
        assert_eq!(summary.target, "selected-pokemon");

        // The rename puts the type under its natural key.
        let rendered = serde_json::to_string(&summary).unwrap();
        assert!(rendered.contains("\"type\":\"electric\""));
    }

    #[test]
    fn test_status_move_keeps_explicit_nulls() {
        let doc: Move = serde_json::from_value(json!({
            "id": 45,
            "name": "growl",
            "effect_entries": [
                {
                    "effect": "Lowers the target's Attack by one stage.",
                    "short_effect": "Lowers the target's Attack by one stage.",
                    "language": { "name": "en", "url": "" }
                }
            ],
            "effect_chance": null,
            "type": { "name": "normal", "url": "" },
            "damage_class": { "name": "status", "url": "" },
            "power": null,
            "accuracy": 100,
            "pp": 40,
            "priority": 0,
            "generation": { "name": "generation-i", "url": "" },
            "target": { "name": "all-opponents", "url": "" }
        }))
        .unwrap();

        let summary = project_move(doc);
        assert_eq!(summary.power, None);

        // Nullable stats serialize as explicit nulls, unlike the effect text.
        let rendered = serde_json::to_string(&summary).unwrap();
        assert!(rendered.contains("\"power\":null"));
        assert!(rendered.contains("\"effect_chance\":null"));
    }

    #[test]
    fn test_placeholder_untouched_without_chance() {
        assert_eq!(
            substitute_effect_chance("Has a $effect_chance% chance to flinch.", None),
            "Has a $effect_chance% chance to flinch."
        );
        assert_eq!(
            substitute_effect_chance("Has a $effect_chance% chance to flinch.", Some(30)),
            "Has a 30% chance to flinch."
        );
    }

    #[test]
    fn test_negative_priority_supported() {
        let mut doc = thunderbolt_doc();
        doc.priority = -6;
        assert_eq!(project_move(doc).priority, -6);
    }
}
