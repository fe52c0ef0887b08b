//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and related utilities
//! for defining and rendering prompt templates.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    /// Uses a simple {{variable}} syntax for substitution.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    ///
    /// `{{variable}}` is replaced with the value of `variable`. Placeholders
    /// with no matching argument are removed from the output.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut result = self.template.clone();

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        clean_unmatched_placeholders(&result)
    }
}

/// Remove any unmatched placeholder variables.
fn clean_unmatched_placeholders(template: &str) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        match rest[start..].find("}}") {
            Some(end) => rest = &rest[start + end + 2..],
            None => {
                // No closing braces; keep the tail literally.
                rest = &rest[start..];
                break;
            }
        }
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Analyze {{name}} in depth.");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "pikachu".to_string());

        assert_eq!(template.render(&args), "Analyze pikachu in depth.");
    }

    #[test]
    fn test_repeated_placeholder_substituted_everywhere() {
        let template =
            PromptTemplate::new("test", None, vec![], "{{name}} evolves; study {{name}}.");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "eevee".to_string());

        assert_eq!(template.render(&args), "eevee evolves; study eevee.");
    }

    #[test]
    fn test_unmatched_placeholder_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{name}}{{extra}}!");

        let mut args = HashMap::new();
        args.insert("name".to_string(), "ditto".to_string());

        assert_eq!(template.render(&args), "Hello ditto!");
    }

    #[test]
    fn test_unclosed_braces_kept_literally() {
        let template = PromptTemplate::new("test", None, vec![], "Odd {{name");
        assert_eq!(template.render(&HashMap::new()), "Odd {{name");
    }
}
