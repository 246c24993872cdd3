use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the responder finds its resources and what it says when it has nothing else.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ResponderConfig {
    #[serde(default = "default_resource_dir")]
    pub resource_dir: PathBuf,

    /// Keyed responses: comma-separated key line followed by response lines.
    #[serde(default = "default_responses_file")]
    pub responses_file: String,

    /// Default responses, one per blank-line separated block.
    #[serde(default = "default_default_responses_file")]
    pub default_responses_file: String,

    /// Used when no default responses could be loaded.
    #[serde(default = "default_fallback_response")]
    pub fallback_response: String,
}

fn default_resource_dir() -> PathBuf {
    ".".into()
}

fn default_responses_file() -> String {
    "responses.txt".into()
}

fn default_default_responses_file() -> String {
    "default.txt".into()
}

fn default_fallback_response() -> String {
    "Could you elaborate on that?".into()
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            resource_dir: default_resource_dir(),
            responses_file: default_responses_file(),
            default_responses_file: default_default_responses_file(),
            fallback_response: default_fallback_response(),
        }
    }
}

impl ResponderConfig {
    /// Loads the configuration from an optional TOML file, overridden by
    /// `RESPONDER_*` environment variables. Missing keys take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path_ref).required(false))
            .add_source(config::Environment::with_prefix("RESPONDER"))
            .build()
            .with_context(|| format!("Failed to build configuration from '{}'", path_ref.display()))?;
        let config: ResponderConfig = settings
            .try_deserialize()
            .context("Invalid responder configuration")?;
        log::info!(
            "Responder resources: '{}' and '{}' in '{}'",
            config.responses_file,
            config.default_responses_file,
            config.resource_dir.display()
        );
        Ok(config)
    }
}
