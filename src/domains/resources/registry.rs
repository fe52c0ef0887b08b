//! Resource Registry - central registration of all resources.
//!
//! This module provides dynamic resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{PokemonTypesResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        text: R::content(),
    }
}

/// Get all registered resources as ResourceEntries.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<PokemonTypesResource>()]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![PokemonTypesResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);

        let entry = &resources[0];
        assert_eq!(entry.resource.raw.uri, "pokemon://types");
        assert_eq!(entry.resource.raw.name, "Pokémon Types");
        assert_eq!(
            entry.resource.raw.mime_type.as_deref(),
            Some("application/json")
        );
        assert!(entry.text.contains("\"types\""));
    }

    #[test]
    fn test_resource_uris_match_entries() {
        let uris = resource_uris();
        let resources = get_all_resources();
        assert_eq!(uris.len(), resources.len());

        for entry in &resources {
            assert!(uris.contains(&entry.resource.raw.uri.as_str()));
        }
    }
}
