use crate::utils::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A government institution from the institutions dataset.
///
/// Loaded once per matching run and never mutated. The source `type` field is
/// sometimes a single string and sometimes an array; both coerce to `types`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Institution {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A/L entry requirements declared by a degree program.
///
/// Only the `"compulsory subjects"` logic type carries constraint semantics;
/// anything else leaves the program unconstrained beyond its stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logic_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<String>>,
}

/// A degree program from the degree-programs dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeProgram {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_years: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_of_instruction: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub al_requirements: Option<AlRequirements>,
}

impl DegreeProgram {
    /// Display title with the title -> name -> id fallback chain.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(&self.id)
    }
}

/// One (program, university) pairing from the course-offerings dataset.
///
/// The source splits cutoff categories across rows, so several raw rows can
/// share the same composite key; they are merged before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    pub degree_program_id: String,
    pub university_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposed_intake: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutoff_marks: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_year: Option<String>,
}

/// The fixed set of A/L subject streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlStream {
    PhysicalScience,
    BiologicalScience,
    Commerce,
    Technology,
    Arts,
}

impl FromStr for AlStream {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "physical" | "physical science" => Ok(AlStream::PhysicalScience),
            "bio" | "biological science" => Ok(AlStream::BiologicalScience),
            "commerce" => Ok(AlStream::Commerce),
            "tech" | "technology" => Ok(AlStream::Technology),
            "arts" => Ok(AlStream::Arts),
            other => Err(MatchError::SelectionError {
                message: format!("Unknown A/L stream: {}", other),
            }),
        }
    }
}

/// A student's confirmed stream and three-subject selection. Only
/// constructible through `new`, which enforces the subject count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub stream: AlStream,
    subjects: Vec<String>,
}

impl Selection {
    /// Builds a selection, enforcing the exactly-three-subjects domain rule.
    pub fn new(stream: AlStream, subjects: Vec<String>) -> Result<Self> {
        if subjects.len() != 3 {
            return Err(MatchError::SelectionError {
                message: format!("Expected exactly 3 subjects, got {}", subjects.len()),
            });
        }
        Ok(Self { stream, subjects })
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }
}

/// One ranked result row: a university and the eligible programs it offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniversityMatch {
    pub institution: Institution,
    pub programs: Vec<DegreeProgram>,
}
