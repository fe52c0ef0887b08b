//! Pokémon analysis prompt definition.

use super::PromptDefinition;
use rmcp::model::PromptArgument;

/// A guided, multi-step Pokémon analysis prompt.
pub struct AnalyzePokemonPrompt;

impl PromptDefinition for AnalyzePokemonPrompt {
    const NAME: &'static str = "analyze-pokemon";
    const DESCRIPTION: &'static str =
        "A step-by-step analysis plan for a Pokémon, combining stats, lore, type matchups and evolutions";

    fn template() -> &'static str {
        "\
Please analyze the Pokémon \"{{name}}\" thoroughly:

1. Call the get-pokemon tool with name \"{{name}}\" to get its base stats, types, abilities and sprites.
2. Call the get-pokemon-species tool with name \"{{name}}\" for its lore: flavor text, genus, habitat and whether it is legendary, mythical or a baby.
3. For each of its types, call the get-pokemon-type tool to map what it is strong and weak against.
4. Call the get-evolution-chain tool with name \"{{name}}\" to see where it sits in its evolution line and what triggers each evolution.

Then summarize: its likely battle role, its most important strengths and weaknesses, and how it fits into its evolutionary family."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "name".to_string(),
            title: None,
            description: Some("The name of the Pokémon to analyze".to_string()),
            required: Some(true),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_pokemon_metadata() {
        assert_eq!(AnalyzePokemonPrompt::NAME, "analyze-pokemon");
        assert!(!AnalyzePokemonPrompt::DESCRIPTION.is_empty());

        let args = AnalyzePokemonPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "name");
        assert_eq!(args[0].required, Some(true));
    }

    #[test]
    fn test_template_references_the_tools() {
        let template = AnalyzePokemonPrompt::template();
        assert!(template.contains("{{name}}"));
        assert!(template.contains("get-pokemon"));
        assert!(template.contains("get-pokemon-species"));
        assert!(template.contains("get-pokemon-type"));
        assert!(template.contains("get-evolution-chain"));
    }
}
