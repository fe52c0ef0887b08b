//! Pokémon type roster resource definition.

use super::ResourceDefinition;

/// The canonical 18-type roster, in national-dex introduction order.
const TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Pokémon type list resource (static JSON).
pub struct PokemonTypesResource;

impl ResourceDefinition for PokemonTypesResource {
    const URI: &'static str = "pokemon://types";
    const NAME: &'static str = "Pokémon Types";
    const DESCRIPTION: &'static str = "List of all 18 Pokémon types";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> String {
        serde_json::json!({
            "types": TYPE_NAMES,
            "note": "Use the get-pokemon-type tool for detailed damage relations of any type."
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_types_metadata() {
        assert_eq!(PokemonTypesResource::URI, "pokemon://types");
        assert_eq!(PokemonTypesResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_pokemon_types_content() {
        let content = PokemonTypesResource::content();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        let types = parsed["types"].as_array().unwrap();
        assert_eq!(types.len(), 18);
        assert!(types.contains(&serde_json::json!("fire")));
        assert!(types.contains(&serde_json::json!("fairy")));

        assert!(parsed["note"].as_str().unwrap().contains("get-pokemon-type"));
    }
}
