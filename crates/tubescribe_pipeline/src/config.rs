//! TOML configuration for the pipeline and its remote clients.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (`include_str!` of `tubescribe.toml`)
//! 2. `~/.config/tubescribe/tubescribe.toml`
//! 3. `./tubescribe.toml`
//! 4. An explicit path, when given
//!
//! Credentials never come from here.

use crate::{
    DEFAULT_SCRIPT_TEMPLATE, DEFAULT_TITLE_TEMPLATE, PromptTemplate, RESEARCH_KEY, TITLE_KEY,
    TOPIC_KEY,
};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use tubescribe_error::{ConfigError, TubescribeError, TubescribeResult};

const DEFAULT_CONFIG: &str = include_str!("../../../tubescribe.toml");

/// Language-model client settings.
///
/// ```toml
/// [model]
/// model = "gpt-3.5-turbo-instruct"
/// base_url = "https://api.openai.com/v1"
/// max_tokens = 256
/// request_timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Completions model identifier
    pub model: String,
    /// API root; `/completions` is appended
    pub base_url: String,
    /// Completion length cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Per-request timeout
    pub request_timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo-instruct".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: Some(256),
            request_timeout_secs: 60,
        }
    }
}

impl ModelConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Encyclopedia lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// Wikipedia language edition, e.g. `en`
    pub language: String,
    /// Full `api.php` URL; overrides `language` when set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Number of search hits to summarize
    pub top_k_results: u32,
    /// Per-request timeout
    pub request_timeout_secs: u64,
    /// User-Agent header sent to Wikipedia
    pub user_agent: String,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            api_url: None,
            top_k_results: 3,
            request_timeout_secs: 30,
            user_agent: "tubescribe/0.1 (https://github.com/tubescribe/tubescribe)".to_string(),
        }
    }
}

impl ResearchConfig {
    /// The endpoint to query: `api_url` if set, otherwise the language
    /// edition's `api.php`.
    pub fn endpoint(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.wikipedia.org/w/api.php", self.language))
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Title prompt; must reference `{topic}` and nothing else
    pub title: String,
    /// Script prompt; must reference `{title}` and `{wikipedia_research}`
    /// and nothing else
    pub script: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_TEMPLATE.to_string(),
            script: DEFAULT_SCRIPT_TEMPLATE.to_string(),
        }
    }
}

impl TemplateConfig {
    /// The parsed title template.
    pub fn title_template(&self) -> PromptTemplate {
        PromptTemplate::new("title", self.title.as_str())
    }

    /// The parsed script template.
    pub fn script_template(&self) -> PromptTemplate {
        PromptTemplate::new("script", self.script.as_str())
    }

    /// Checks that each template references exactly the placeholders its
    /// stage binds: `{topic}` for titles, `{title}` and
    /// `{wikipedia_research}` for scripts.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the template and the missing or
    /// unbound placeholder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        const TITLE_BINDINGS: &[&str] = &[TOPIC_KEY];
        const SCRIPT_BINDINGS: &[&str] = &[TITLE_KEY, RESEARCH_KEY];

        let title = self.title_template();
        title.require(TITLE_BINDINGS)?;
        title.only_uses(TITLE_BINDINGS)?;

        let script = self.script_template();
        script.require(SCRIPT_BINDINGS)?;
        script.only_uses(SCRIPT_BINDINGS)
    }
}

/// Top-level Tubescribe configuration.
///
/// # Example
///
/// ```no_run
/// use tubescribe_pipeline::TubescribeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = TubescribeConfig::load()?;
/// println!("Model: {}", config.model.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct TubescribeConfig {
    /// Language-model client
    #[serde(default)]
    pub model: ModelConfig,
    /// Encyclopedia client
    #[serde(default)]
    pub research: ResearchConfig,
    /// Prompt templates
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl TubescribeConfig {
    /// Loads a single file; omitted keys take built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// template is missing a required placeholder or uses one its stage
    /// never binds.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> TubescribeResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Loads the layered configuration without an explicit file.
    ///
    /// # Errors
    ///
    /// See [`load_with`](Self::load_with).
    pub fn load() -> TubescribeResult<Self> {
        Self::load_with(None)
    }

    /// Loads bundled defaults, then the home and working-directory files if
    /// present, then `explicit` if given.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, any source fails to
    /// parse, or a template is missing a required placeholder or uses one its stage
    /// never binds.
    #[instrument(skip(explicit), fields(explicit = ?explicit.map(Path::display)))]
    pub fn load_with(explicit: Option<&Path>) -> TubescribeResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/tubescribe/tubescribe.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("tubescribe").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> TubescribeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                TubescribeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                TubescribeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.templates.validate()?;
        debug!(model = %config.model.model, research = %config.research.endpoint(), "Configuration loaded");
        Ok(config)
    }
}
