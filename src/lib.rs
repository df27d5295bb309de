pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FileDatasetSource, HttpDatasetSource};
pub use config::CliConfig;
pub use core::engine::MatchEngine;
pub use domain::model::{
    AlStream, CourseOffering, DegreeProgram, Institution, Selection, UniversityMatch,
};
pub use utils::error::{MatchError, Result};
