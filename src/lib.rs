//! Keyword-triggered canned responses.
//!
//! A [`ResponseGenerator`] loads a keyed response resource and a default
//! response resource once, then answers sets of words: the response of a
//! recognized keyword, or a randomly picked default response.
//!
//! ```no_run
//! use responder::{ResponderConfig, ResponseGenerator};
//!
//! let config = ResponderConfig::load("Responder.toml")?;
//! let generator = ResponseGenerator::new(&config);
//! println!("{}", generator.generate(["my", "computer", "crashed"]));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod parser;
pub mod picker;
pub mod source;
pub mod store;

pub use crate::config::ResponderConfig;
pub use error::ResponderError;
pub use generator::ResponseGenerator;
pub use parser::ResponseMap;
pub use picker::DefaultPicker;
pub use source::{DirSource, MemorySource, ResourceSource};
pub use store::ResponseStore;
