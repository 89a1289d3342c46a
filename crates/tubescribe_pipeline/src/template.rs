//! Prompt templates with named `{placeholder}` slots.

use derive_getters::Getters;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;
use tubescribe_error::{ConfigError, PipelineError, PipelineErrorKind};

/// Default title prompt.
pub const DEFAULT_TITLE_TEMPLATE: &str = "write me a youtube video title about {topic}";

/// Default script prompt. The trailing space is part of the prompt.
pub const DEFAULT_SCRIPT_TEMPLATE: &str = "Write me a youtube video script based on this title TITLE: {title} while leveraging this wikipedia research:{wikipedia_research} ";

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Valid placeholder regex")
});

/// A named prompt template.
///
/// Placeholders are `{identifier}` slots. Rendering substitutes every slot in
/// a single pass, so braces inside supplied values are never re-expanded.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tubescribe_pipeline::PromptTemplate;
///
/// let template = PromptTemplate::new("title", "a title about {topic}");
/// let inputs = HashMap::from([("topic", "tide pools")]);
/// assert_eq!(template.render(&inputs).unwrap(), "a title about tide pools");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PromptTemplate {
    /// Template name used in error messages
    name: String,
    /// Raw template text
    template: String,
    /// Distinct placeholder names in order of first appearance
    placeholders: Vec<String>,
}

impl PromptTemplate {
    /// Parses a template, collecting its placeholders.
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        let template = template.into();
        let mut placeholders: Vec<String> = Vec::new();
        for caps in PLACEHOLDER.captures_iter(&template) {
            let key = &caps[1];
            if !placeholders.iter().any(|p| p == key) {
                placeholders.push(key.to_string());
            }
        }

        Self {
            name: name.into(),
            template,
            placeholders,
        }
    }

    /// Whether the template contains `{placeholder}`.
    pub fn references(&self, placeholder: &str) -> bool {
        self.placeholders.iter().any(|p| p == placeholder)
    }

    /// Checks that every name in `required` appears as a placeholder.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first missing placeholder.
    pub fn require(&self, required: &[&str]) -> Result<(), ConfigError> {
        match required.iter().find(|r| !self.references(r)) {
            Some(missing) => Err(ConfigError::new(format!(
                "Template '{}' must reference {{{}}}",
                self.name, missing
            ))),
            None => Ok(()),
        }
    }

    /// Checks that every placeholder is one of `bound`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first placeholder no caller
    /// will supply.
    pub fn only_uses(&self, bound: &[&str]) -> Result<(), ConfigError> {
        match self.placeholders.iter().find(|p| !bound.contains(&p.as_str())) {
            Some(unbound) => Err(ConfigError::new(format!(
                "Template '{}' uses {{{}}}, which is never supplied (allowed: {})",
                self.name,
                unbound,
                bound
                    .iter()
                    .map(|b| format!("{{{}}}", b))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
            None => Ok(()),
        }
    }

    /// Renders the template with the given bindings.
    ///
    /// Extra bindings are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineErrorKind::TemplateBinding`] for the first
    /// placeholder without a binding.
    pub fn render(&self, inputs: &HashMap<&str, &str>) -> Result<String, PipelineError> {
        if let Some(missing) = self
            .placeholders
            .iter()
            .find(|p| !inputs.contains_key(p.as_str()))
        {
            return Err(PipelineError::new(PipelineErrorKind::TemplateBinding {
                template: self.name.clone(),
                placeholder: missing.clone(),
            }));
        }

        let rendered = PLACEHOLDER.replace_all(&self.template, |caps: &Captures| {
            inputs.get(&caps[1]).copied().unwrap_or_default().to_string()
        });
        Ok(rendered.into_owned())
    }
}
