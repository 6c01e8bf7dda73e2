use tempfile::TempDir;

use placement_core::feedback::{FeedbackEvent, FeedbackKind, FeedbackSink, JsonlFeedbackSink};
use placement_core::types::{Candidate, CandidateProfile, ProfileHash};

fn candidate() -> Candidate {
    Candidate::new(Some("B.Tech"), vec!["Python", "SQL"], vec!["IT"], vec!["Pune"])
}

#[test]
fn records_are_appended_and_read_back() {
    let dir = TempDir::new().unwrap();
    let sink = JsonlFeedbackSink::new(dir.path().join("feedback.jsonl"));

    let first = FeedbackEvent::new(&candidate(), "12", FeedbackKind::Impression);
    let second = FeedbackEvent::new(&candidate(), "12", FeedbackKind::Upvote);
    sink.record(&first).unwrap();
    sink.record(&second).unwrap();

    let events = sink.read_all().unwrap();
    assert_eq!(events, vec![first, second]);

    let raw = std::fs::read_to_string(sink.path()).unwrap();
    assert_eq!(raw.lines().count(), 2);
    assert!(raw.lines().all(|line| line.contains(r#""posting_id":"12""#)));
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let sink = JsonlFeedbackSink::new(dir.path().join("absent.jsonl"));
    assert!(sink.read_all().unwrap().is_empty());
}

#[test]
fn events_never_contain_raw_profile_fields() {
    let event = FeedbackEvent::new(&candidate(), "3", FeedbackKind::Downvote);
    let json = serde_json::to_string(&event).unwrap();

    assert!(json.contains(r#""kind":"downvote""#));
    assert!(json.contains("sha256:"));
    assert!(!json.contains("python"));
    assert!(!json.contains("pune"));
}

#[test]
fn profile_hash_ignores_input_order_and_case() {
    let a = Candidate::new(Some("B.Tech"), vec!["Python", "SQL"], vec!["IT"], vec!["Pune"]);
    let b = Candidate::new(Some("b tech"), vec!["sql", "python", "python"], vec!["it"], vec!["pune"]);
    assert_eq!(ProfileHash::from_candidate(&a), ProfileHash::from_candidate(&b));

    let c = Candidate::new(Some("B.Tech"), vec!["Python"], vec!["IT"], vec!["Pune"]);
    assert_ne!(ProfileHash::from_candidate(&a), ProfileHash::from_candidate(&c));
}

#[test]
fn profile_hash_keeps_fields_apart() {
    // the same value in different fields is a different profile
    let as_skill = Candidate::new(None, vec!["design"], vec![], vec![]);
    let as_sector = Candidate::new(None, vec![], vec!["design"], vec![]);
    assert_ne!(
        ProfileHash::from_candidate(&as_skill),
        ProfileHash::from_candidate(&as_sector)
    );
}

#[test]
fn request_profile_converts_with_comma_splitting() {
    let profile: CandidateProfile = serde_json::from_str(
        r#"{"education":"B.Tech","skills":["Python, SQL"],"location":["Pune"]}"#,
    )
    .unwrap();
    let converted = Candidate::from(profile);

    assert_eq!(converted.education, "b tech");
    assert_eq!(
        converted.skills.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["python", "sql"]
    );
    assert!(converted.sectors.is_empty());

    let direct = Candidate::new(Some("B.Tech"), vec!["Python", "SQL"], vec![], vec!["Pune"]);
    assert_eq!(ProfileHash::from_candidate(&converted), ProfileHash::from_candidate(&direct));
}
