use edumatch::domain::model::{AlStream, Selection};
use edumatch::{HttpDatasetSource, MatchEngine};
use httpmock::prelude::*;

fn mock_dataset(server: &MockServer, path: &str, body: &str) {
    let body = body.to_string();
    server.mock(move |when, then| {
        when.method(GET).path(path.to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .body(body.clone());
    });
}

fn source_for(server: &MockServer) -> HttpDatasetSource {
    HttpDatasetSource::new(
        server.url("/government-institutions.json"),
        server.url("/government-degree-programs.json"),
        server.url("/government-course-offerings.json"),
    )
}

fn physical_selection() -> Selection {
    Selection::new(
        AlStream::PhysicalScience,
        vec![
            "Combined Maths".to_string(),
            "Physics".to_string(),
            "ICT".to_string(),
        ],
    )
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_match_over_http() {
    let server = MockServer::start();

    // BOM-prefixed payload wrapped in a container object, the way the real
    // static exports arrive.
    mock_dataset(
        &server,
        "/government-institutions.json",
        "\u{feff}{\"institutions\": [
            {\"_id\": \"U1\", \"name\": \"University of Colombo\", \"type\": \"university\"},
            {\"_id\": \"U2\", \"name\": \"University of Moratuwa\"},
            {\"name\": \"Broken record without identifier\"}
        ]}",
    );

    mock_dataset(
        &server,
        "/government-degree-programs.json",
        r#"{"degreePrograms": [
            {"_id": "P1", "title": "Computer Science", "stream": "Physical Science"},
            {"_id": "P2", "title": "Engineering", "stream": "Physical Science",
             "al_requirements": {"logic_type": "Compulsory Subjects",
                                 "subjects": ["Combined Mathematics", "Physics"]}},
            {"_id": "P3", "title": "Medicine", "stream": "Biological Science"},
            {"_id": "P4", "title": "Statistics", "stream": "Any Stream"}
        ]}"#,
    );

    // P2 at U2 is split across two rows with different cutoff categories.
    mock_dataset(
        &server,
        "/government-course-offerings.json",
        r#"{"offerings": [
            {"degree_program_id": "P1", "university_id": "U1"},
            {"degree_program_id": "P4", "university_id": "U1"},
            {"degree_program_id": "P2", "university_id": "U2", "cutoff_marks": {"2023": "1.8"}},
            {"degree_program_id": "P2", "university_id": "U2", "cutoff_marks": {"2024": "1.9"}},
            {"degree_program_id": "P3", "university_id": "U1"},
            {"degree_program_id": "P1", "university_id": "U9"}
        ]}"#,
    );

    let engine = MatchEngine::new(source_for(&server));
    let matches = engine.run(&physical_selection()).await.unwrap();

    // U1 offers two eligible programs (P1, P4 via "Any Stream"; P3 is bio
    // only), U2 offers one; U9 is not a known institution.
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].institution.id, "U1");
    assert_eq!(matches[0].programs.len(), 2);
    assert_eq!(matches[0].programs[0].display_title(), "Computer Science");
    assert_eq!(matches[0].programs[1].display_title(), "Statistics");

    assert_eq!(matches[1].institution.id, "U2");
    assert_eq!(matches[1].programs.len(), 1);
    // "Combined Maths" satisfied "Combined Mathematics" via the synonym table.
    assert_eq!(matches[1].programs[0].id, "P2");
}

#[tokio::test]
async fn test_failed_dataset_fetch_fails_the_attempt() {
    let server = MockServer::start();

    mock_dataset(&server, "/government-institutions.json", "[]");
    mock_dataset(&server, "/government-degree-programs.json", "[]");
    server.mock(|when, then| {
        when.method(GET).path("/government-course-offerings.json");
        then.status(500);
    });

    let engine = MatchEngine::new(source_for(&server));
    assert!(engine.run(&physical_selection()).await.is_err());
}

#[tokio::test]
async fn test_empty_datasets_yield_no_matches_not_an_error() {
    let server = MockServer::start();

    mock_dataset(&server, "/government-institutions.json", r#"{"items": []}"#);
    mock_dataset(&server, "/government-degree-programs.json", r#"{"unknown_key": []}"#);
    mock_dataset(&server, "/government-course-offerings.json", "[]");

    let engine = MatchEngine::new(source_for(&server));
    let matches = engine.run(&physical_selection()).await.unwrap();
    assert!(matches.is_empty());
}
