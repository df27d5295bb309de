use crate::core::normalize::normalize;
use crate::domain::model::{AlStream, DegreeProgram, Selection};
use std::collections::HashSet;

/// One row of the stream-label table: the canonical label a selection
/// contributes, optionally gated on a selected elective subject.
struct StreamLabelRule {
    stream: AlStream,
    /// Normalized substrings of a selected subject that activate the label.
    /// Empty means the label always applies for the stream.
    elective_contains: &'static [&'static str],
    label: &'static str,
}

/// Program stream labels in the source data mostly follow the stream name,
/// but technology programs sometimes specialize by the second-slot elective
/// (ET/BST), hence the gated rows.
const STREAM_LABEL_RULES: &[StreamLabelRule] = &[
    StreamLabelRule {
        stream: AlStream::PhysicalScience,
        elective_contains: &[],
        label: "physical science",
    },
    StreamLabelRule {
        stream: AlStream::BiologicalScience,
        elective_contains: &[],
        label: "biological science",
    },
    StreamLabelRule {
        stream: AlStream::Commerce,
        elective_contains: &[],
        label: "commerce",
    },
    StreamLabelRule {
        stream: AlStream::Arts,
        elective_contains: &[],
        label: "arts",
    },
    StreamLabelRule {
        stream: AlStream::Technology,
        elective_contains: &[],
        label: "technology",
    },
    StreamLabelRule {
        stream: AlStream::Technology,
        elective_contains: &["engineering technology"],
        label: "engineering technology",
    },
    StreamLabelRule {
        stream: AlStream::Technology,
        elective_contains: &["bio system technology", "biosystem technology"],
        label: "biosystems technology",
    },
];

/// Subjects the datasets and the selection UI spell differently.
const SUBJECT_SYNONYMS: &[&[&str]] = &[&["combined maths", "combined mathematics"]];

/// Canonical stream-label tokens contributed by a selection.
pub fn stream_labels(selection: &Selection) -> Vec<&'static str> {
    let subjects: Vec<String> = selection.subjects().iter().map(|s| normalize(s)).collect();

    STREAM_LABEL_RULES
        .iter()
        .filter(|rule| rule.stream == selection.stream)
        .filter(|rule| {
            rule.elective_contains.is_empty()
                || subjects
                    .iter()
                    .any(|subject| rule.elective_contains.iter().any(|e| subject.contains(e)))
        })
        .map(|rule| rule.label)
        .collect()
}

/// Substring containment, not equality: source stream labels are often
/// compound phrases like "Physical Science or Any Stream". An unset or empty
/// stream never matches.
fn program_stream_matches(program_stream: Option<&str>, labels: &[&'static str]) -> bool {
    let stream = normalize(program_stream.unwrap_or_default());
    if stream.is_empty() {
        return false;
    }
    if stream.contains("any stream") {
        return true;
    }
    labels.iter().any(|label| stream.contains(label))
}

/// Selected subjects, normalized and expanded across synonym sets.
fn expanded_subjects(selection: &Selection) -> HashSet<String> {
    let mut expanded: HashSet<String> = selection
        .subjects()
        .iter()
        .map(|s| normalize(s))
        .collect();

    for synonyms in SUBJECT_SYNONYMS {
        if synonyms.iter().any(|s| expanded.contains(*s)) {
            expanded.extend(synonyms.iter().map(|s| s.to_string()));
        }
    }
    expanded
}

/// Only the "compulsory subjects" logic type constrains; anything else, or an
/// empty requirement list, passes unconditionally.
fn compulsory_subjects_satisfied(program: &DegreeProgram, selected: &HashSet<String>) -> bool {
    let Some(requirements) = &program.al_requirements else {
        return true;
    };
    if normalize(requirements.logic_type.as_deref().unwrap_or_default()) != "compulsory subjects" {
        return true;
    }

    let required: Vec<String> = requirements
        .subjects
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|s| normalize(s))
        .filter(|s| !s.is_empty())
        .collect();

    required.iter().all(|req| selected.contains(req))
}

/// Identifiers of the programs the selection is eligible for: the program
/// must pass both the stream filter and the compulsory-subjects check.
pub fn eligible_programs(programs: &[DegreeProgram], selection: &Selection) -> HashSet<String> {
    let labels = stream_labels(selection);
    let selected = expanded_subjects(selection);

    programs
        .iter()
        .filter(|p| program_stream_matches(p.stream.as_deref(), &labels))
        .filter(|p| compulsory_subjects_satisfied(p, &selected))
        .map(|p| p.id.clone())
        .collect()
}
