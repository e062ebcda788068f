use std::path::Path;

use serde::Deserialize;

/// Configuration loaded from `obo-graph.toml` next to the input file.
#[derive(Debug, Deserialize, Default)]
pub struct OboGraphConfig {
    /// Default relationship type when `--relationship` is not given.
    pub relationship: Option<String>,
    /// Default relationship types to merge in when `--merge` is not given.
    pub merge: Option<Vec<String>>,
}

impl OboGraphConfig {
    /// Load configuration from `obo-graph.toml` in the directory containing
    /// `input` (or the current directory when `input` has no parent).
    ///
    /// Returns a default (empty) configuration if the file does not exist or
    /// cannot be parsed.
    pub fn load_for(input: &Path) -> Self {
        let dir = input.parent().filter(|p| !p.as_os_str().is_empty());
        let config_path = dir.unwrap_or(Path::new(".")).join("obo-graph.toml");

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(config) => config,
                Err(err) => {
                    eprintln!("warning: failed to parse obo-graph.toml: {err}. Using defaults.");
                    Self::default()
                }
            },
            Err(err) => {
                eprintln!("warning: failed to read obo-graph.toml: {err}. Using defaults.");
                Self::default()
            }
        }
    }
}
