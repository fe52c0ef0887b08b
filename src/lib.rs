//! PokéAPI MCP Server Library
//!
//! This crate exposes the public [PokéAPI](https://pokeapi.co) to MCP clients
//! as a set of read-only tools, resources, and prompts. Every tool validates
//! its input, performs a single GET against PokéAPI (two for evolution
//! chains), projects the response down to the fields an assistant actually
//! needs, and returns the result as pretty-printed JSON text.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: MCP tools backed by PokéAPI endpoints
//!   - **resources**: Static reference data that can be read by clients
//!   - **prompts**: Prompt templates for consistent interactions
//!
//! # Example
//!
//! ```rust,no_run
//! use pokeapi_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
