use crate::domain::model::{AlRequirements, CourseOffering, DegreeProgram, Institution};
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// Container keys historically used by each dataset, in lookup priority order.
pub const INSTITUTION_KEYS: &[&str] = &["institutions", "items", "data"];
pub const PROGRAM_KEYS: &[&str] = &["degreePrograms", "degree_programs", "programs", "data"];
pub const OFFERING_KEYS: &[&str] = &["offerings", "course_offerings", "data"];

/// Outcome of coercing one raw array: the records that survived validation
/// plus a count of the ones dropped, kept observable for diagnostics.
#[derive(Debug, Clone)]
pub struct CoercedBatch<T> {
    pub records: Vec<T>,
    pub dropped: usize,
}

/// Strips a leading byte-order mark; some exports of the source data carry one.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

pub fn parse_payload(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(strip_bom(text))?)
}

/// Extracts the record array from a payload of loosely known shape: a bare
/// array, or an object carrying the array under one of the candidate keys.
/// No match is degraded-but-valid input, not an error.
pub fn extract_array(payload: &Value, keys: &[&str]) -> Vec<Value> {
    if let Value::Array(items) = payload {
        return items.clone();
    }
    if let Value::Object(map) = payload {
        for key in keys {
            if let Some(Value::Array(items)) = map.get(*key) {
                return items.clone();
            }
        }
    }
    Vec::new()
}

pub fn load_institutions(payload: &Value) -> CoercedBatch<Institution> {
    coerce_batch(extract_array(payload, INSTITUTION_KEYS), coerce_institution)
}

pub fn load_programs(payload: &Value) -> CoercedBatch<DegreeProgram> {
    coerce_batch(extract_array(payload, PROGRAM_KEYS), coerce_program)
}

pub fn load_offerings(payload: &Value) -> CoercedBatch<CourseOffering> {
    coerce_batch(extract_array(payload, OFFERING_KEYS), coerce_offering)
}

fn coerce_batch<T>(items: Vec<Value>, coerce: fn(&Value) -> Option<T>) -> CoercedBatch<T> {
    let total = items.len();
    let records: Vec<T> = items.iter().filter_map(coerce).collect();
    let dropped = total - records.len();
    CoercedBatch { records, dropped }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_string)
}

fn string_list_field(value: &Value, key: &str) -> Option<Vec<String>> {
    let items = value.get(key)?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
    )
}

fn coerce_institution(value: &Value) -> Option<Institution> {
    if !value.is_object() {
        return None;
    }
    let id = string_field(value, "_id").or_else(|| string_field(value, "id"))?;
    let name = string_field(value, "name")?;

    // `type` appears both as a single tag and as a list.
    let types = match value.get("type") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };

    Some(Institution {
        id: id.trim().to_string(),
        name: name.trim().to_string(),
        types,
        location: string_field(value, "location"),
        description: string_field(value, "description"),
        image_url: string_field(value, "image_url"),
    })
}

fn coerce_program(value: &Value) -> Option<DegreeProgram> {
    if !value.is_object() {
        return None;
    }
    let id = string_field(value, "_id")?;

    let al_requirements = value
        .get("al_requirements")
        .filter(|v| v.is_object())
        .map(|req| AlRequirements {
            logic_type: string_field(req, "logic_type"),
            subjects: string_list_field(req, "subjects"),
        });

    Some(DegreeProgram {
        id: id.trim().to_string(),
        title: string_field(value, "title"),
        name: string_field(value, "name"),
        stream: string_field(value, "stream"),
        duration_years: value.get("duration_years").and_then(Value::as_f64),
        medium_of_instruction: string_list_field(value, "medium_of_instruction"),
        al_requirements,
    })
}

fn coerce_offering(value: &Value) -> Option<CourseOffering> {
    if !value.is_object() {
        return None;
    }
    let degree_program_id = string_field(value, "degree_program_id")?;
    let university_id = string_field(value, "university_id")?;

    let cutoff_marks = value
        .get("cutoff_marks")
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<BTreeMap<String, Value>>()
        });

    Some(CourseOffering {
        degree_program_id: degree_program_id.trim().to_string(),
        university_id: university_id.trim().to_string(),
        proposed_intake: value.get("proposed_intake").and_then(Value::as_i64),
        cutoff_marks,
        academic_year: string_field(value, "academic_year").map(|y| y.trim().to_string()),
    })
}
