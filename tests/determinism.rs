use placement_core::config::RecommenderConfig;
use placement_core::eligibility::EducationTier;
use placement_core::posting::{Catalog, RawPosting};
use placement_core::selection::{Recommender, ScoringWeights};
use placement_core::types::{
    Candidate, Recommendation, RecommendationMetadata, RecommendationResult, Refinement,
    ScoreSignals,
};

fn row(id: &str, title: &str, description: &str, education: &str, sector: &str, location: &str, skills: &[&str]) -> RawPosting {
    RawPosting {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        company: Some(format!("{title} co")),
        description: Some(description.to_string()),
        required_education: Some(education.to_string()),
        sector: Some(sector.to_string()),
        location: Some(location.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_catalog() -> Catalog {
    Catalog::from_raw(vec![
        row("1", "Data Analyst Intern", "Analyse sales data with Python and SQL", "B.Tech", "IT", "Mumbai, Pune", &["Python", "SQL", "Excel"]),
        row("2", "Marketing Intern", "Plan social media campaigns", "Any", "Marketing", "Delhi", &["SEO", "Content Writing"]),
        row("3", "ML Research Intern", "Train machine learning models", "M.Tech", "IT", "Bengaluru", &["Python", "Machine Learning"]),
        row("4", "Backend Intern", "Build REST APIs in Python", "B.E", "IT", "Pune", &["Python", "Django", "SQL"]),
        row("5", "Finance Intern", "Prepare reports in Excel", "B.Com", "Finance", "Mumbai", &["Excel", "Accounting"]),
        row("6", "Lab Assistant", "Support doctoral research", "PhD", "Research", "Chennai", &["Python"]),
    ])
}

fn sample_candidate() -> Candidate {
    Candidate::new(
        Some("B.Tech"),
        vec!["Python", "SQL"],
        vec!["IT"],
        vec!["Pune"],
    )
}

#[test]
fn repeated_requests_are_identical() {
    let recommender = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let candidate = sample_candidate();

    let first = recommender.recommend(&candidate, 4).unwrap();
    let second = recommender.recommend(&candidate, 4).unwrap();

    let json1 = serde_json::to_string_pretty(&first).unwrap();
    let json2 = serde_json::to_string_pretty(&second).unwrap();
    assert_eq!(json1, json2, "Recommendation output is not deterministic");
}

#[test]
fn independent_recommenders_agree() {
    let a = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let b = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let candidate = sample_candidate();

    assert_eq!(a.recommend(&candidate, 6).unwrap(), b.recommend(&candidate, 6).unwrap());
}

#[test]
fn candidate_input_order_does_not_matter() {
    let recommender = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let forward = Candidate::new(Some("B.Tech"), vec!["Python", "SQL"], vec!["IT"], vec!["Pune"]);
    let backward = Candidate::new(Some("b tech"), vec!["sql", "PYTHON", "sql"], vec!["it"], vec!["pune"]);

    assert_eq!(
        recommender.recommend(&forward, 5).unwrap(),
        recommender.recommend(&backward, 5).unwrap()
    );
}

#[test]
fn sample_ranking_is_stable() {
    let recommender = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let result = recommender.recommend(&sample_candidate(), 10).unwrap();

    let ids: Vec<&str> = result.recommendations.iter().map(|r| r.id.as_str()).collect();
    // PhD and M.Tech postings are filtered out for a B.Tech candidate
    assert_eq!(ids.len(), 4);
    assert!(!ids.contains(&"3"));
    assert!(!ids.contains(&"6"));
    assert_eq!(&ids[..2], &["1", "4"]);

    let top = &result.recommendations[0];
    assert_eq!(
        top.explanation,
        "skill match, sector match, location match, education match"
    );
    assert!(result
        .recommendations
        .windows(2)
        .all(|w| w[0].score >= w[1].score));

    assert_eq!(result.metadata.candidate_tier, EducationTier::Undergraduate);
    assert!(result.metadata.spaces_refit);
}

#[test]
fn weight_profiles_run_side_by_side() {
    let default = Recommender::new(sample_catalog(), RecommenderConfig::v0()).unwrap();
    let precision = Recommender::new(
        sample_catalog(),
        RecommenderConfig {
            weights: ScoringWeights::precision(),
            ..RecommenderConfig::v0()
        },
    )
    .unwrap();
    let candidate = sample_candidate();

    let a = default.recommend(&candidate, 3).unwrap();
    let b = precision.recommend(&candidate, 3).unwrap();

    assert_eq!(a.recommendations.len(), b.recommendations.len());
    assert_ne!(a.recommendations[0].score, b.recommendations[0].score);
}

#[test]
fn golden_result_serialization() {
    let result = RecommendationResult {
        recommendations: vec![Recommendation {
            id: "101".to_string(),
            title: "data analyst intern".to_string(),
            company: "acme".to_string(),
            location: "mumbai, pune".to_string(),
            skills: "python, sql".to_string(),
            sector: "it".to_string(),
            required_education: "b tech".to_string(),
            score: 87.5,
            signals: ScoreSignals {
                skill_similarity: 1.0,
                description_similarity: 0.5,
                sector_match: 1.0,
                location_match: 0.0,
                education_score: 1.0,
            },
            explanation: "skill match, sector match, education match".to_string(),
            refinement: None,
        }],
        metadata: RecommendationMetadata {
            top_k: 5,
            candidate_tier: EducationTier::Undergraduate,
            postings_considered: 42,
            postings_eligible: 30,
            postings_returned: 1,
            spaces_refit: true,
        },
    };

    let json_str = serde_json::to_string_pretty(&result).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "recommendations": [
        {
          "id": "101",
          "title": "data analyst intern",
          "company": "acme",
          "location": "mumbai, pune",
          "skills": "python, sql",
          "sector": "it",
          "required_education": "b tech",
          "score": 87.5,
          "signals": {
            "skill_similarity": 1.0,
            "description_similarity": 0.5,
            "sector_match": 1.0,
            "location_match": 0.0,
            "education_score": 1.0
          },
          "explanation": "skill match, sector match, education match"
        }
      ],
      "metadata": {
        "top_k": 5,
        "candidate_tier": "undergraduate",
        "postings_considered": 42,
        "postings_eligible": 30,
        "postings_returned": 1,
        "spaces_refit": true
      }
    }"#;

    let normalized_actual: String = json_str.chars().filter(|c| !c.is_whitespace()).collect();
    let normalized_expected: String = EXPECTED_JSON.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(normalized_actual, normalized_expected, "JSON structure mismatch against golden snapshot");

    let roundtrip: RecommendationResult = serde_json::from_str(&json_str).unwrap();
    assert_eq!(roundtrip, result);
}

#[test]
fn refinement_serializes_only_when_present() {
    let mut rec = Recommendation {
        id: "7".into(),
        title: String::new(),
        company: String::new(),
        location: String::new(),
        skills: String::new(),
        sector: String::new(),
        required_education: String::new(),
        score: 0.0,
        signals: ScoreSignals::default(),
        explanation: "semantic match".into(),
        refinement: None,
    };
    assert!(!serde_json::to_string(&rec).unwrap().contains("refinement"));

    rec.refinement = Some(Refinement {
        rank: Some(1),
        reason: "Strong Python fit.".into(),
    });
    let json = serde_json::to_string(&rec).unwrap();
    assert!(json.contains(r#""refinement":{"rank":1,"reason":"Strong Python fit."}"#));
}
