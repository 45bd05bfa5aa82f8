use milestone_core::models::*;

// --- Classification ---

#[test]
fn classification_boundaries_are_inclusive_lower_bounds() {
    let cases = [
        (100, Classification::Critical),
        (80, Classification::Critical),
        (79, Classification::Major),
        (60, Classification::Major),
        (59, Classification::Moderate),
        (40, Classification::Moderate),
        (39, Classification::Minor),
        (20, Classification::Minor),
        (19, Classification::Trivial),
        (0, Classification::Trivial),
    ];
    for (score, expected) in cases {
        assert_eq!(
            Classification::from_score(score),
            expected,
            "score {score}"
        );
    }
}

#[test]
fn classification_is_ordered() {
    assert!(Classification::Trivial < Classification::Minor);
    assert!(Classification::Minor < Classification::Moderate);
    assert!(Classification::Moderate < Classification::Major);
    assert!(Classification::Major < Classification::Critical);
}

#[test]
fn classification_parses_case_insensitively() {
    assert_eq!("major".parse::<Classification>(), Ok(Classification::Major));
    assert_eq!(
        " CRITICAL ".parse::<Classification>(),
        Ok(Classification::Critical)
    );
    assert!("huge".parse::<Classification>().is_err());
}

#[test]
fn classification_serializes_screaming_case() {
    let json = serde_json::to_string(&Classification::Moderate).unwrap();
    assert_eq!(json, "\"MODERATE\"");
}

// --- Restore strategy ---

#[test]
fn restore_strategy_table_matches_classification() {
    let critical = RestorePointStrategy::for_classification(Classification::Critical);
    assert!(critical.pre_mission && critical.post_mission);
    assert_eq!(critical.backup_type, BackupType::Full);
    assert_eq!(critical.backups, 2);

    let major = RestorePointStrategy::for_classification(Classification::Major);
    assert!(major.pre_mission && major.post_mission);
    assert_eq!(major.backup_type, BackupType::Full);
    assert_eq!(major.backups, 2);

    let moderate = RestorePointStrategy::for_classification(Classification::Moderate);
    assert!(!moderate.pre_mission);
    assert!(moderate.post_mission);
    assert_eq!(moderate.backup_type, BackupType::Incremental);
    assert_eq!(moderate.backups, 1);

    for tier in [Classification::Minor, Classification::Trivial] {
        let s = RestorePointStrategy::for_classification(tier);
        assert!(!s.pre_mission && !s.post_mission);
        assert_eq!(s.backup_type, BackupType::None);
        assert_eq!(s.backups, 0);
    }
}

#[test]
fn unrecognized_label_gets_moderate_row() {
    assert_eq!(
        RestorePointStrategy::for_label("SEVERE"),
        RestorePointStrategy::for_classification(Classification::Moderate)
    );
    assert_eq!(
        RestorePointStrategy::for_label("major"),
        RestorePointStrategy::for_classification(Classification::Major)
    );
}

#[test]
fn restore_strategy_serializes_camel_case() {
    let json =
        serde_json::to_value(RestorePointStrategy::for_classification(Classification::Major))
            .unwrap();
    assert_eq!(json["preMission"], true);
    assert_eq!(json["backupType"], "FULL");
    assert_eq!(json["backups"], 2);
}

// --- Factors ---

#[test]
fn factor_new_clamps_score_and_confidence() {
    let f = Factor::numeric(140.0, 140.0, 1.7);
    assert_eq!(f.score, 100.0);
    assert_eq!(f.confidence, 1.0);

    let f = Factor::numeric(-5.0, -5.0, -0.2);
    assert_eq!(f.score, 0.0);
    assert_eq!(f.confidence, 0.0);
}

#[test]
fn factor_value_serializes_untagged() {
    let label = serde_json::to_value(FactorValue::label("critical")).unwrap();
    assert_eq!(label, serde_json::json!("critical"));
    let number = serde_json::to_value(FactorValue::Number(15.0)).unwrap();
    assert_eq!(number, serde_json::json!(15.0));
}

#[test]
fn factor_kind_order_is_declaration_order() {
    let names: Vec<&str> = FactorKind::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        names,
        [
            "complexity",
            "riskScore",
            "domain",
            "novelty",
            "uniqueness",
            "keywords",
            "fileImpact"
        ]
    );
}

// --- Assessment ---

#[test]
fn fallback_assessment_is_complete_and_marked() {
    let a = Assessment::fallback();
    assert_eq!(a.milestone_score, 50);
    assert_eq!(a.classification, Classification::Moderate);
    assert_eq!(a.reasoning, "Fallback assessment (analysis failed)");
    assert!(a.is_fallback);
    assert_eq!(a.restore_point_strategy.backup_type, BackupType::Incremental);
    assert!(a.restore_point_strategy.post_mission);
    for (_, factor) in a.factors.iter() {
        assert!((0.0..=100.0).contains(&factor.score));
    }
}

#[test]
fn assessment_serializes_with_wire_field_names() {
    let json = serde_json::to_value(Assessment::fallback()).unwrap();
    assert_eq!(json["milestoneScore"], 50);
    assert_eq!(json["classification"], "MODERATE");
    assert!(json["factors"]["riskScore"].is_object());
    assert!(json["factors"]["fileImpact"].is_object());
    assert_eq!(json["feasibility"]["approachRisk"], "MODERATE");
    assert_eq!(json["uncertainty"]["avgConfidence"], 50);
    assert_eq!(json["restorePointStrategy"]["backupType"], "INCREMENTAL");
    assert!(json["timestamp"].is_string());
}

#[test]
fn assessment_json_roundtrip_preserves_content() {
    let a = Assessment::fallback();
    let json = a.to_json().unwrap();
    let back: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(back, a);
}

#[test]
fn summary_includes_classification_and_score() {
    let s = Assessment::fallback().summary();
    assert!(s.starts_with("MODERATE (50/100)"));
}
