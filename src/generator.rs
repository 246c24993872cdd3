use rand::rngs::StdRng;
use rand::Rng;

use crate::config::ResponderConfig;
use crate::picker::DefaultPicker;
use crate::source::{DirSource, ResourceSource};
use crate::store::ResponseStore;

/// Turns a set of input words into a canned response.
///
/// If any word is a known keyword its response is returned, otherwise one of
/// the default responses is picked at random. Words are examined in the
/// iteration order of the supplied collection; for a `HashSet` that order is
/// arbitrary, so when several words match, any of their responses may be
/// returned.
#[derive(Debug)]
pub struct ResponseGenerator<R = StdRng> {
    store: ResponseStore,
    picker: DefaultPicker<R>,
}

impl ResponseGenerator<StdRng> {
    /// Loads resources from `config.resource_dir`.
    pub fn new(config: &ResponderConfig) -> Self {
        Self::from_source(&DirSource::new(&config.resource_dir), config)
    }

    pub fn from_source(source: &impl ResourceSource, config: &ResponderConfig) -> Self {
        Self::with_rng(source, config, rand::SeedableRng::from_entropy())
    }
}

impl<R: Rng> ResponseGenerator<R> {
    pub fn with_rng(source: &impl ResourceSource, config: &ResponderConfig, rng: R) -> Self {
        Self::from_store(ResponseStore::load(source, config), DefaultPicker::new(rng))
    }

    pub fn from_store(store: ResponseStore, picker: DefaultPicker<R>) -> Self {
        Self { store, picker }
    }

    pub fn generate<I, S>(&self, words: I) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            if let Some(response) = self.store.response_for(word.as_ref()) {
                return response;
            }
        }
        self.pick_default_response()
    }

    fn pick_default_response(&self) -> &str {
        self.picker
            .pick(self.store.default_responses())
            .unwrap_or_else(|e| {
                log::error!("{e}");
                self.store.fallback()
            })
    }

    pub fn store(&self) -> &ResponseStore {
        &self.store
    }
}
