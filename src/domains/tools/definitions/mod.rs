//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod pokeapi;

pub use pokeapi::{
    GetAbilityTool, GetEvolutionChainTool, GetGenerationTool, GetMoveTool, GetPokemonTool,
    GetSpeciesTool, GetTypeTool, ListPokemonTool, PokeApiClient,
};
