//! Tests for the schema types.

use super::*;
use crate::store::ConfigError;

#[test]
fn subsidy_rule_full_entry_deserializes() {
    let json = r#"{
        "id": "OLD_AGE",
        "name": "养老补贴",
        "age_min": 60,
        "land_require": "林地",
        "amount_per_unit": 1200,
        "is_mutual_exclusive": false,
        "allow_multiple": true
    }"#;

    let rule: SubsidyRule = serde_json::from_str(json).unwrap();
    assert_eq!(rule.id, "OLD_AGE");
    assert_eq!(rule.name, "养老补贴");
    assert_eq!(rule.age_min, Some(60));
    assert_eq!(rule.land_require.as_deref(), Some("林地"));
    assert_eq!(rule.amount_per_unit, 1200.0);
    assert!(!rule.is_mutual_exclusive);
    assert!(rule.allow_multiple);
}

#[test]
fn subsidy_rule_null_and_missing_fields_default() {
    // `age_min: null` and an absent `land_require` are both "no requirement".
    let json = r#"{
        "id": "MED_C",
        "name": "医疗救助",
        "age_min": null,
        "amount_per_unit": 800
    }"#;

    let rule: SubsidyRule = serde_json::from_str(json).unwrap();
    assert_eq!(rule.age_min, None);
    assert_eq!(rule.land_require, None);
    assert!(!rule.is_mutual_exclusive);
    assert!(rule.allow_multiple, "allow_multiple defaults to true");
}

#[test]
fn subsidy_rule_missing_id_is_parse_error() {
    let json = r#"{"name": "无名", "amount_per_unit": 1}"#;
    assert!(serde_json::from_str::<SubsidyRule>(json).is_err());
}

#[test]
fn conflict_rule_deserializes() {
    let json = r#"{
        "subsidy_id": "MED_C",
        "conflicting_subsidy_id": "OLD_AGE",
        "description": "同期互斥"
    }"#;

    let rule: ConflictRule = serde_json::from_str(json).unwrap();
    assert_eq!(rule.subsidy_id, "MED_C");
    assert_eq!(rule.conflicting_subsidy_id, "OLD_AGE");
    assert_eq!(rule.description, "同期互斥");
}

#[test]
fn conflict_involves_both_orientations() {
    let rule = ConflictRule {
        subsidy_id: "EDU_A".to_string(),
        conflicting_subsidy_id: "EDU_B".to_string(),
        description: String::new(),
    };

    assert!(rule.involves("EDU_A", "EDU_B"));
    assert!(rule.involves("EDU_B", "EDU_A"));
    assert!(!rule.involves("EDU_A", "EDU_C"));
}

fn subsidy(id: &str) -> SubsidyRule {
    SubsidyRule {
        id: id.to_string(),
        name: id.to_string(),
        age_min: None,
        land_require: None,
        amount_per_unit: 1.0,
        is_mutual_exclusive: false,
        allow_multiple: true,
    }
}

fn conflict(left: &str, right: &str) -> ConflictRule {
    ConflictRule {
        subsidy_id: left.to_string(),
        conflicting_subsidy_id: right.to_string(),
        description: String::new(),
    }
}

#[test]
fn ruleset_accepts_valid_rules() {
    let set = RuleSet::new(
        vec![subsidy("A"), subsidy("B")],
        vec![conflict("A", "B")],
    )
    .unwrap();
    assert_eq!(set.subsidy_rules().len(), 2);
    assert_eq!(set.conflict_rules().len(), 1);
    assert!(!set.is_empty());
}

#[test]
fn ruleset_rejects_duplicate_ids() {
    let err = RuleSet::new(vec![subsidy("A"), subsidy("A")], Vec::new()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn ruleset_rejects_empty_id() {
    let err = RuleSet::new(vec![subsidy("")], Vec::new()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn ruleset_rejects_undefined_conflict_reference() {
    let err = RuleSet::new(vec![subsidy("A")], vec![conflict("A", "GHOST")]).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("GHOST"));
}

#[test]
fn ruleset_rejects_self_conflict() {
    let err = RuleSet::new(vec![subsidy("A")], vec![conflict("A", "A")]).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn empty_ruleset_is_empty() {
    assert!(RuleSet::empty().is_empty());
}
