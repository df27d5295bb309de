use crate::utils::error::Result;
use async_trait::async_trait;

/// The three read-only collections the matcher consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Institutions,
    DegreePrograms,
    CourseOfferings,
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Institutions => "institutions",
            Dataset::DegreePrograms => "degree-programs",
            Dataset::CourseOfferings => "course-offerings",
        }
    }
}

/// Source of raw dataset payloads. Returns the body as text; BOM stripping
/// and JSON parsing happen downstream in the ingestion stage.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, dataset: Dataset) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn institutions_endpoint(&self) -> &str;
    fn programs_endpoint(&self) -> &str;
    fn offerings_endpoint(&self) -> &str;
}
