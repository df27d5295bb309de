use crate::core::aggregate::AggregatedOfferings;
use crate::domain::model::{DegreeProgram, Institution, UniversityMatch};
use std::collections::HashMap;

/// Resolves aggregated offerings into ranked matches. Universities without an
/// Institution record, and program ids without a DegreeProgram record, are
/// dropped silently. Universities offering the widest choice rank first;
/// ties break on institution name.
pub fn rank(
    aggregated: &AggregatedOfferings,
    institutions_by_id: &HashMap<String, Institution>,
    programs_by_id: &HashMap<String, DegreeProgram>,
) -> Vec<UniversityMatch> {
    let mut matches: Vec<UniversityMatch> = aggregated
        .iter()
        .filter_map(|(university_id, program_ids)| {
            let institution = institutions_by_id.get(university_id)?;

            let mut programs: Vec<DegreeProgram> = program_ids
                .keys()
                .filter_map(|pid| programs_by_id.get(pid))
                .cloned()
                .collect();
            programs.sort_by(|a, b| a.display_title().cmp(b.display_title()));

            Some(UniversityMatch {
                institution: institution.clone(),
                programs,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.programs
            .len()
            .cmp(&a.programs.len())
            .then_with(|| a.institution.name.cmp(&b.institution.name))
    });

    matches
}
