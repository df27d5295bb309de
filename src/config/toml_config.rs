use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Dataset endpoints loaded from a TOML file:
///
/// ```toml
/// [datasets]
/// institutions = "https://example.com/government-institutions.json"
/// degree_programs = "https://example.com/government-degree-programs.json"
/// offerings = "https://example.com/government-course-offerings.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub datasets: DatasetsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetsSection {
    pub institutions: String,
    pub degree_programs: String,
    pub offerings: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(&path)?;
        toml::from_str(&text).map_err(|e| MatchError::ConfigError {
            message: format!("Failed to parse {}: {}", path.as_ref().display(), e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("datasets.institutions", &self.datasets.institutions)?;
        validate_url("datasets.degree_programs", &self.datasets.degree_programs)?;
        validate_url("datasets.offerings", &self.datasets.offerings)?;
        Ok(())
    }
}
