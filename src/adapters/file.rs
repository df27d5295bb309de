use crate::domain::ports::{Dataset, DatasetSource};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the three dataset files from a local directory, using the file names
/// the static exports ship under.
#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    base_path: PathBuf,
}

impl FileDatasetSource {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_name(dataset: Dataset) -> &'static str {
        match dataset {
            Dataset::Institutions => "government-institutions.json",
            Dataset::DegreePrograms => "government-degree-programs.json",
            Dataset::CourseOfferings => "government-course-offerings.json",
        }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn fetch(&self, dataset: Dataset) -> Result<String> {
        let path = self.base_path.join(Self::file_name(dataset));
        tracing::debug!("Reading {} dataset from {}", dataset.name(), path.display());
        Ok(fs::read_to_string(path)?)
    }
}
