use crate::domain::model::CourseOffering;
use std::collections::{BTreeMap, HashSet};

/// Eligible offerings grouped by university, then by program, with duplicate
/// composite keys merged. BTreeMaps keep downstream iteration deterministic.
pub type AggregatedOfferings = BTreeMap<String, BTreeMap<String, CourseOffering>>;

/// Folds `incoming` into `existing` for a shared (program, university) key.
/// The source splits cutoff categories across partial rows, so the merge
/// unions cutoff keys (incoming wins on a shared key), takes the larger
/// intake when both are numeric, and keeps the first defined academic year.
fn merge_offering(existing: &mut CourseOffering, incoming: CourseOffering) {
    existing.proposed_intake = match (existing.proposed_intake, incoming.proposed_intake) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    if let Some(incoming_marks) = incoming.cutoff_marks {
        existing
            .cutoff_marks
            .get_or_insert_with(BTreeMap::new)
            .extend(incoming_marks);
    }

    if existing.academic_year.is_none() {
        existing.academic_year = incoming.academic_year;
    }
}

/// Filters offerings down to the eligible program set and merges duplicates.
/// Offerings with an empty key half, or pointing outside the eligible set,
/// are skipped without error.
pub fn aggregate(
    offerings: Vec<CourseOffering>,
    eligible_program_ids: &HashSet<String>,
) -> AggregatedOfferings {
    let mut by_university: AggregatedOfferings = BTreeMap::new();

    for offering in offerings {
        if offering.degree_program_id.is_empty() || offering.university_id.is_empty() {
            continue;
        }
        if !eligible_program_ids.contains(&offering.degree_program_id) {
            continue;
        }

        let programs = by_university
            .entry(offering.university_id.clone())
            .or_default();
        match programs.entry(offering.degree_program_id.clone()) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(offering);
            }
            std::collections::btree_map::Entry::Occupied(mut slot) => {
                merge_offering(slot.get_mut(), offering);
            }
        }
    }

    by_university
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn offering(
        program: &str,
        university: &str,
        intake: Option<i64>,
        cutoffs: &[(&str, serde_json::Value)],
        year: Option<&str>,
    ) -> CourseOffering {
        CourseOffering {
            degree_program_id: program.to_string(),
            university_id: university.to_string(),
            proposed_intake: intake,
            cutoff_marks: if cutoffs.is_empty() {
                None
            } else {
                Some(
                    cutoffs
                        .iter()
                        .map(|(k, v)| (k.to_string(), v.clone()))
                        .collect(),
                )
            },
            academic_year: year.map(str::to_string),
        }
    }

    fn eligible(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_cutoff_rows_merge_into_one_offering() {
        let rows = vec![
            offering("P1", "U1", None, &[("2023", json!("65"))], None),
            offering("P1", "U1", None, &[("2024", json!("68"))], None),
        ];

        let aggregated = aggregate(rows, &eligible(&["P1"]));
        let merged = &aggregated["U1"]["P1"];
        let marks = merged.cutoff_marks.as_ref().unwrap();
        assert_eq!(marks.len(), 2);
        assert_eq!(marks["2023"], json!("65"));
        assert_eq!(marks["2024"], json!("68"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let row = offering("P1", "U1", Some(100), &[("2023", json!(65))], Some("2023"));
        let once = aggregate(vec![row.clone()], &eligible(&["P1"]));
        let twice = aggregate(vec![row.clone(), row], &eligible(&["P1"]));
        assert_eq!(once["U1"]["P1"], twice["U1"]["P1"]);
    }

    #[test]
    fn test_merge_cutoff_union_is_order_independent() {
        let a = offering("P1", "U1", None, &[("2023", json!("65"))], None);
        let b = offering("P1", "U1", None, &[("2024", json!("68"))], None);

        let ab = aggregate(vec![a.clone(), b.clone()], &eligible(&["P1"]));
        let ba = aggregate(vec![b, a], &eligible(&["P1"]));
        assert_eq!(
            ab["U1"]["P1"].cutoff_marks,
            ba["U1"]["P1"].cutoff_marks
        );
    }

    #[test]
    fn test_intake_takes_maximum_when_both_numeric() {
        let rows = vec![
            offering("P1", "U1", Some(80), &[], None),
            offering("P1", "U1", Some(120), &[], None),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1"]));
        assert_eq!(aggregated["U1"]["P1"].proposed_intake, Some(120));
    }

    #[test]
    fn test_intake_keeps_present_value_when_other_absent() {
        let rows = vec![
            offering("P1", "U1", None, &[], None),
            offering("P1", "U1", Some(60), &[], None),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1"]));
        assert_eq!(aggregated["U1"]["P1"].proposed_intake, Some(60));
    }

    #[test]
    fn test_academic_year_first_defined_wins() {
        let rows = vec![
            offering("P1", "U1", None, &[], Some("2023/2024")),
            offering("P1", "U1", None, &[], Some("2024/2025")),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1"]));
        assert_eq!(
            aggregated["U1"]["P1"].academic_year.as_deref(),
            Some("2023/2024")
        );

        let rows = vec![
            offering("P1", "U1", None, &[], None),
            offering("P1", "U1", None, &[], Some("2024/2025")),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1"]));
        assert_eq!(
            aggregated["U1"]["P1"].academic_year.as_deref(),
            Some("2024/2025")
        );
    }

    #[test]
    fn test_ineligible_and_empty_key_offerings_are_skipped() {
        let rows = vec![
            offering("P1", "U1", None, &[], None),
            offering("P2", "U1", None, &[], None),
            offering("P1", "", None, &[], None),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1"]));
        assert_eq!(aggregated.len(), 1);
        assert_eq!(aggregated["U1"].len(), 1);
    }

    #[test]
    fn test_groups_programs_under_each_university() {
        let rows = vec![
            offering("P1", "U1", None, &[], None),
            offering("P2", "U1", None, &[], None),
            offering("P1", "U2", None, &[], None),
        ];
        let aggregated = aggregate(rows, &eligible(&["P1", "P2"]));
        assert_eq!(aggregated["U1"].len(), 2);
        assert_eq!(aggregated["U2"].len(), 1);
    }
}
