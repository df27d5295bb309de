pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_subject_count, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "edumatch")]
#[command(about = "Matches an A/L selection against government university offerings")]
pub struct CliConfig {
    /// A/L stream id or name (physical, bio, commerce, tech, arts)
    #[arg(long)]
    pub stream: String,

    /// The three selected subjects, comma separated
    #[arg(long, value_delimiter = ',')]
    pub subjects: Vec<String>,

    #[arg(long)]
    pub institutions_url: Option<String>,

    #[arg(long)]
    pub programs_url: Option<String>,

    #[arg(long)]
    pub offerings_url: Option<String>,

    /// Directory holding the three dataset JSON files (alternative to URLs)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// TOML file carrying the dataset endpoints (flags override it)
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved endpoints for the three datasets, merged from the optional TOML
/// file and the CLI flags (flags win).
#[derive(Debug, Clone)]
pub struct DatasetEndpoints {
    pub institutions_url: String,
    pub programs_url: String,
    pub offerings_url: String,
}

impl ConfigProvider for DatasetEndpoints {
    fn institutions_endpoint(&self) -> &str {
        &self.institutions_url
    }

    fn programs_endpoint(&self) -> &str {
        &self.programs_url
    }

    fn offerings_endpoint(&self) -> &str {
        &self.offerings_url
    }
}

impl CliConfig {
    pub fn endpoints(&self) -> Result<DatasetEndpoints> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        let resolve = |flag: &Option<String>, from_file: Option<&str>, field: &str| {
            flag.clone()
                .or_else(|| from_file.map(str::to_string))
                .ok_or_else(|| MatchError::MissingConfigError {
                    field: field.to_string(),
                })
        };

        Ok(DatasetEndpoints {
            institutions_url: resolve(
                &self.institutions_url,
                file.as_ref().map(|f| f.datasets.institutions.as_str()),
                "institutions_url",
            )?,
            programs_url: resolve(
                &self.programs_url,
                file.as_ref().map(|f| f.datasets.degree_programs.as_str()),
                "programs_url",
            )?,
            offerings_url: resolve(
                &self.offerings_url,
                file.as_ref().map(|f| f.datasets.offerings.as_str()),
                "offerings_url",
            )?,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("stream", &self.stream)?;
        validate_subject_count("subjects", &self.subjects)?;

        // Endpoint URLs are only required when not reading local files.
        if self.data_dir.is_none() {
            let endpoints = self.endpoints()?;
            validate_url("institutions_url", &endpoints.institutions_url)?;
            validate_url("programs_url", &endpoints.programs_url)?;
            validate_url("offerings_url", &endpoints.offerings_url)?;
        }

        Ok(())
    }
}

impl Validate for DatasetEndpoints {
    fn validate(&self) -> Result<()> {
        validate_url("institutions_url", &self.institutions_url)?;
        validate_url("programs_url", &self.programs_url)?;
        validate_url("offerings_url", &self.offerings_url)?;
        Ok(())
    }
}
