//! Search configuration loaded from TOML.
//!
//! ```toml
//! include-secondary-usage = true
//! companion-mods = ["network-extensions", "one-way-train-tracks"]
//! ```

use crate::catalog::CompanionMod;
use crate::error::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Host-level settings that influence filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
    /// Sum the secondary usage source into used/unused filtering.
    pub include_secondary_usage: bool,
    /// Companion mods whose generated assets count as custom content.
    pub companion_mods: Vec<CompanionMod>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            include_secondary_usage: true,
            companion_mods: vec![
                CompanionMod::NetworkExtensions,
                CompanionMod::ExtraTrainStationTracks,
                CompanionMod::OneWayTrainTracks,
            ],
        }
    }
}

impl SearchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse search configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search configuration at {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid search configuration at {}", path.display()))?;
        tracing::debug!("Loaded search configuration from {}", path.display());
        Ok(config)
    }

    pub fn recognizes(&self, producer: CompanionMod) -> bool {
        self.companion_mods.contains(&producer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = SearchConfig::from_toml_str("").unwrap();
        check!(config == SearchConfig::default());
        check!(config.recognizes(CompanionMod::OneWayTrainTracks));
    }

    #[test]
    fn parses_kebab_case_keys() {
        let config = SearchConfig::from_toml_str(
            r#"
            include-secondary-usage = false
            companion-mods = ["network-extensions"]
            "#,
        )
        .unwrap();

        check!(!config.include_secondary_usage);
        check!(config.recognizes(CompanionMod::NetworkExtensions));
        check!(!config.recognizes(CompanionMod::ExtraTrainStationTracks));
    }

    #[test]
    fn rejects_unknown_keys_and_mods() {
        check!(SearchConfig::from_toml_str("use-vanilla = true").is_err());
        check!(SearchConfig::from_toml_str(r#"companion-mods = ["nope"]"#).is_err());
    }

    #[test]
    fn load_reads_file_and_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "include-secondary-usage = false").unwrap();
        let config = SearchConfig::load(file.path()).unwrap();
        check!(!config.include_secondary_usage);

        let missing = file.path().with_extension("missing");
        let err = SearchConfig::load(&missing).unwrap_err();
        check!(format!("{:#}", err).contains("Failed to read search configuration"));
    }
}
