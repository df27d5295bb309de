pub mod aggregate;
pub mod eligibility;
pub mod engine;
pub mod ingest;
pub mod normalize;
pub mod rank;

pub use crate::domain::model::{CourseOffering, DegreeProgram, Institution, UniversityMatch};
pub use crate::domain::ports::{ConfigProvider, Dataset, DatasetSource};
pub use crate::utils::error::Result;
