//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain covers one part of the MCP surface: callable tools over
//! the PokéAPI, static reference resources, and reusable prompt templates.

pub mod prompts;
pub mod resources;
pub mod tools;
