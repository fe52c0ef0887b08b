//! PokéAPI tools module.
//!
//! This module provides the tools that wrap the PokéAPI REST service:
//! - `pokemon`: Core stats, types, abilities and sprites for one Pokémon
//! - `species`: Lore-level data (flavor text, genus, habitat, rarity flags)
//! - `types`: Damage relations for a Pokémon type
//! - `abilities`: Effect text and carriers for an ability
//! - `moves`: Battle stats and effect text for a move
//! - `listing`: Paginated Pokémon index
//! - `evolution`: Recursive evolution-chain tree
//! - `generation`: Game-generation rosters
//!
//! Every tool follows the same shape: validate the input, fetch one or two
//! endpoints through [`client::PokeApiClient`], run a pure projector over
//! the partial upstream schema, and emit a uniform text envelope.

pub mod abilities;
pub mod client;
pub mod common;
pub mod evolution;
pub mod generation;
pub mod listing;
pub mod moves;
pub mod pokemon;
pub mod species;
pub mod types;

// Re-export the tools and their parameter types
pub use abilities::{GetAbilityParams, GetAbilityTool};
pub use client::{ApiError, PokeApiClient, normalize_resource_name};
pub use evolution::{GetEvolutionChainParams, GetEvolutionChainTool};
pub use generation::{GenerationIdent, GetGenerationParams, GetGenerationTool};
pub use listing::{ListPokemonParams, ListPokemonTool};
pub use moves::{GetMoveParams, GetMoveTool};
pub use pokemon::{GetPokemonParams, GetPokemonTool};
pub use species::{GetSpeciesParams, GetSpeciesTool};
pub use types::{GetTypeParams, GetTypeTool};
