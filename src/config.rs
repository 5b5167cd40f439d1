use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LeakscanError, Result};
use crate::registry::PatternRegistry;

/// Scan tuning, optionally loaded from a `leakscan.toml` file.
///
/// The default config scans with the full catalog and no limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Pattern ids to skip entirely.
    #[serde(default)]
    pub ignore_patterns: HashSet<String>,
    /// Cap on deduplicated matches per pattern per blob. High-noise
    /// heuristics (`ip_address`, `env_file_content`) can flood results
    /// on large bodies; unset means unlimited.
    #[serde(default)]
    pub max_matches_per_pattern: Option<usize>,
}

impl ScanConfig {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ScanConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check that every ignored id references a catalog pattern. A typo
    /// here would silently ignore nothing, so it fails loudly instead.
    pub fn validate(&self, registry: &PatternRegistry) -> Result<()> {
        for id in &self.ignore_patterns {
            if registry.find(id).is_none() {
                return Err(LeakscanError::Config(format!(
                    "unknown pattern id '{}' in ignore_patterns",
                    id
                )));
            }
        }
        Ok(())
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# leakscan configuration

# Pattern ids to skip entirely.
# ignore_patterns = ["ip_address", "env_file_content"]

# Cap on deduplicated matches per pattern per blob (unset = unlimited).
# max_matches_per_pattern = 50
"#
    }
}
