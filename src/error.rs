use std::io;

use thiserror::Error;

/// Failures raised while loading the response resources or picking a default.
///
/// None of these escape `ResponseGenerator`; they are logged and the affected
/// structure is left empty or backed by the fallback response.
#[derive(Debug, Error)]
pub enum ResponderError {
    #[error("Unable to open {name}")]
    ResourceNotFound {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {name}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("Encountered two or more consecutive blank lines in {name} (line {line})")]
    MalformedInput { name: String, line: usize },

    #[error("No default responses to pick from")]
    EmptyDefaultList,
}

impl ResponderError {
    /// Classifies an I/O failure for the named resource.
    pub fn from_io(name: &str, source: io::Error) -> Self {
        let name = name.to_owned();
        match source.kind() {
            io::ErrorKind::NotFound => ResponderError::ResourceNotFound { name, source },
            _ => ResponderError::Io { name, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_classified_separately() {
        let err = ResponderError::from_io("responses.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ResponderError::ResourceNotFound { ref name, .. } if name == "responses.txt"));
        assert_eq!(err.to_string(), "Unable to open responses.txt");

        let err = ResponderError::from_io("default.txt", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ResponderError::Io { .. }));
    }

    #[test]
    fn malformed_input_names_the_line() {
        let err = ResponderError::MalformedInput {
            name: "default.txt".into(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Encountered two or more consecutive blank lines in default.txt (line 7)"
        );
    }
}
