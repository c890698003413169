// ABOUTME: Configuration module for the gsd-deck application
// ABOUTME: Provides output and metadata settings with environment variable handling

use std::env;
use std::path::PathBuf;

const DEFAULT_OUTPUT: &str = "get-shit-done-framework.pptx";
const DEFAULT_TITLE: &str = "Get Shit Done Framework";

/// Global configuration for the application
pub struct Config {
    pub output_path: PathBuf,
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let output_path = env::var("DECK_OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT));
        let title = env::var("DECK_TITLE").unwrap_or_else(|_| DEFAULT_TITLE.to_string());

        Self { output_path, title }
    }
}
