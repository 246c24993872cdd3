use std::collections::HashMap;
use std::fs::read_to_string;
use std::io;
use std::path::PathBuf;

use crate::error::ResponderError;

/// Supplies the raw text of a named resource.
pub trait ResourceSource {
    fn read(&self, name: &str) -> Result<String, ResponderError>;
}

impl<F> ResourceSource for F
where
    F: Fn(&str) -> Result<String, ResponderError>,
{
    fn read(&self, name: &str) -> Result<String, ResponderError> {
        self(name)
    }
}

/// Reads resources as files relative to a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceSource for DirSource {
    fn read(&self, name: &str) -> Result<String, ResponderError> {
        let path = self.root.join(name);
        log::debug!("Reading '{}'", path.display());
        read_to_string(&path).map_err(|e| ResponderError::from_io(name, e))
    }
}

/// In-memory resources, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.resources.insert(name.into(), text.into());
        self
    }
}

impl ResourceSource for MemorySource {
    fn read(&self, name: &str) -> Result<String, ResponderError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| ResponderError::from_io(name, io::Error::from(io::ErrorKind::NotFound)))
    }
}
