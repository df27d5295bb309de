use crate::domain::ports::{ConfigProvider, Dataset, DatasetSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the three datasets over HTTP. A non-success status is a load
/// failure; the body comes back as text so the ingestion stage can handle
/// BOM-prefixed payloads.
pub struct HttpDatasetSource {
    client: Client,
    institutions_url: String,
    programs_url: String,
    offerings_url: String,
}

impl HttpDatasetSource {
    pub fn new(institutions_url: String, programs_url: String, offerings_url: String) -> Self {
        Self {
            client: Client::new(),
            institutions_url,
            programs_url,
            offerings_url,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(
            config.institutions_endpoint().to_string(),
            config.programs_endpoint().to_string(),
            config.offerings_endpoint().to_string(),
        )
    }

    fn endpoint(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::Institutions => &self.institutions_url,
            Dataset::DegreePrograms => &self.programs_url,
            Dataset::CourseOfferings => &self.offerings_url,
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    async fn fetch(&self, dataset: Dataset) -> Result<String> {
        let url = self.endpoint(dataset);
        tracing::debug!("Fetching {} dataset from {}", dataset.name(), url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("{} dataset response: {}", dataset.name(), response.status());
        Ok(response.text().await?)
    }
}
