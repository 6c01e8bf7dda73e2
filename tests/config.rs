use std::io::Write;

use tempfile::NamedTempFile;

use placement_core::cache::{SpaceBuildConfig, SpaceBuildError};
use placement_core::config::{ConfigError, RecommenderConfig};
use placement_core::posting::Catalog;
use placement_core::selection::{Recommender, ScoringWeights, WeightError};
use placement_core::types::RecommendError;

#[test]
fn empty_object_yields_v0() {
    let config = RecommenderConfig::from_json_str("{}").unwrap();
    assert_eq!(config, RecommenderConfig::v0());
    assert_eq!(config.refine_pool_size, 20);
    assert_eq!(config.spaces, SpaceBuildConfig::v0());
    assert_eq!(config.weights, ScoringWeights::default());
}

#[test]
fn partial_documents_keep_remaining_defaults() {
    let config = RecommenderConfig::from_json_str(
        r#"{"weights":{"location":0.1},"spaces":{"max_skill_terms":50}}"#,
    )
    .unwrap();

    assert_eq!(config.weights.location, 0.1);
    assert_eq!(config.weights.skill, 0.60);
    assert_eq!(config.spaces.max_skill_terms, 50);
    assert_eq!(config.spaces.max_description_terms, 5000);
    assert_eq!(config.refine_pool_size, 20);
}

#[test]
fn loads_from_a_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"refine_pool_size": 8}}"#).unwrap();

    let config = RecommenderConfig::from_path(file.path()).unwrap();
    assert_eq!(config.refine_pool_size, 8);
}

#[test]
fn reports_io_and_parse_failures() {
    let missing = RecommenderConfig::from_path(std::path::Path::new("/definitely/not/here.json"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));

    let garbage = RecommenderConfig::from_json_str("{ weights: nope }");
    assert!(matches!(garbage, Err(ConfigError::Parse(_))));
}

#[test]
fn config_round_trips_through_json() {
    let config = RecommenderConfig {
        weights: ScoringWeights::precision(),
        ..RecommenderConfig::v0()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(RecommenderConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn recommender_rejects_flat_weights() {
    let config = RecommenderConfig {
        weights: ScoringWeights {
            skill: 0.2,
            description: 0.2,
            sector: 0.2,
            location: 0.2,
            education: 0.2,
        },
        ..RecommenderConfig::v0()
    };
    let err = Recommender::new(Catalog::empty(), config).unwrap_err();
    assert!(matches!(err, RecommendError::Weights(WeightError::SkillNotDominant)));
}

#[test]
fn recommender_rejects_zero_vocabulary() {
    let mut config = RecommenderConfig::v0();
    config.spaces.max_description_terms = 0;

    let err = Recommender::new(Catalog::empty(), config).unwrap_err();
    assert!(matches!(err, RecommendError::SpaceBuild(SpaceBuildError::InvalidConfig(_))));
}
