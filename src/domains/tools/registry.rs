//! Tool Registry - central metadata for all tools.
//!
//! This module provides:
//! - The static list of all available tool names
//! - Tool metadata for listing and startup logging

use rmcp::model::Tool;

use super::definitions::{
    GetAbilityTool, GetEvolutionChainTool, GetGenerationTool, GetMoveTool, GetPokemonTool,
    GetSpeciesTool, GetTypeTool, ListPokemonTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the single source of truth for tool names and metadata.
///
/// The router in `router.rs` must stay in sync with this list; a test over
/// there asserts the two agree.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetPokemonTool::NAME,
            GetSpeciesTool::NAME,
            GetTypeTool::NAME,
            GetAbilityTool::NAME,
            GetMoveTool::NAME,
            ListPokemonTool::NAME,
            GetEvolutionChainTool::NAME,
            GetGenerationTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetPokemonTool::to_tool(),
            GetSpeciesTool::to_tool(),
            GetTypeTool::to_tool(),
            GetAbilityTool::to_tool(),
            GetMoveTool::to_tool(),
            ListPokemonTool::to_tool(),
            GetEvolutionChainTool::to_tool(),
            GetGenerationTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 8);
        assert!(names.contains(&"get-pokemon"));
        assert!(names.contains(&"get-pokemon-species"));
        assert!(names.contains(&"get-pokemon-type"));
        assert!(names.contains(&"get-pokemon-ability"));
        assert!(names.contains(&"get-pokemon-move"));
        assert!(names.contains(&"list-pokemon"));
        assert!(names.contains(&"get-evolution-chain"));
        assert!(names.contains(&"get-generation"));
    }

    #[test]
    fn test_metadata_covers_every_tool() {
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), ToolRegistry::tool_names().len());

        for tool in &tools {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert!(tool.title.is_some(), "{} has no title", tool.name);
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object"),
                "{} schema is not an object schema",
                tool.name
            );
        }
    }
}
