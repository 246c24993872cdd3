use crate::config::ResponderConfig;
use crate::parser::{fill_default_responses, fill_response_map, ResponseMap};
use crate::source::ResourceSource;

/// Keyed and default responses, loaded once and never modified.
#[derive(Debug, Clone)]
pub struct ResponseStore {
    responses: ResponseMap,
    defaults: Vec<String>,
    fallback: String,
}

impl ResponseStore {
    /// Loads both resources from `source`. Never fails: load errors are logged,
    /// the keyed map keeps whatever was parsed before the error, and the
    /// default list falls back to `config.fallback_response` when empty.
    pub fn load(source: &impl ResourceSource, config: &ResponderConfig) -> Self {
        let mut responses = ResponseMap::new();
        let loaded = source
            .read(&config.responses_file)
            .and_then(|text| fill_response_map(&mut responses, &config.responses_file, &text));
        match loaded {
            Ok(blocks) => log::info!(
                "Loaded {} keyed responses ({} keywords) from {}",
                blocks,
                responses.len(),
                config.responses_file
            ),
            Err(e) => log::error!("Error loading responses: {e}"),
        }

        let mut defaults = Vec::new();
        let loaded = source.read(&config.default_responses_file).and_then(|text| {
            fill_default_responses(&mut defaults, &config.default_responses_file, &text)
        });
        match loaded {
            Ok(count) => log::info!(
                "Loaded {} default responses from {}",
                count,
                config.default_responses_file
            ),
            Err(e) => log::error!("Error loading default responses: {e}"),
        }

        Self::new(responses, defaults, config.fallback_response.clone())
    }

    /// Builds a store from already parsed data, inserting `fallback` when
    /// `defaults` is empty.
    pub fn new(responses: ResponseMap, mut defaults: Vec<String>, fallback: String) -> Self {
        if defaults.is_empty() {
            log::warn!("No default responses available, using {:?}", fallback);
            defaults.push(fallback.clone());
        }
        Self {
            responses,
            defaults,
            fallback,
        }
    }

    pub fn response_for(&self, keyword: &str) -> Option<&str> {
        self.responses.get(keyword).map(String::as_str)
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    /// Never empty.
    pub fn default_responses(&self) -> &[String] {
        &self.defaults
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
