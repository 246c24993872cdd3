// Kept in its own test binary: environment variables are process-wide and the
// other config tests expect an untouched environment.

use std::env;
use std::fs;
use std::path::Path;

use responder::ResponderConfig;

#[test]
fn environment_overrides_file_and_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("responder.toml");
    fs::write(
        &path,
        "resource_dir = \"res\"\nfallback_response = \"Pardon?\"\n",
    )
    .unwrap();

    env::set_var("RESPONDER_FALLBACK_RESPONSE", "Env says hi");
    env::set_var("RESPONDER_DEFAULT_RESPONSES_FILE", "fallbacks.txt");
    let from_file = ResponderConfig::load(&path);
    let without_file = ResponderConfig::load(dir.path().join("missing.toml"));
    env::remove_var("RESPONDER_FALLBACK_RESPONSE");
    env::remove_var("RESPONDER_DEFAULT_RESPONSES_FILE");

    let config = from_file.unwrap();
    assert_eq!(config.fallback_response, "Env says hi");
    assert_eq!(config.default_responses_file, "fallbacks.txt");
    assert_eq!(config.resource_dir, Path::new("res"));
    assert_eq!(config.responses_file, "responses.txt");

    let config = without_file.unwrap();
    assert_eq!(config.fallback_response, "Env says hi");
    assert_eq!(config.default_responses_file, "fallbacks.txt");
    assert_eq!(config.resource_dir, Path::new("."));
}
