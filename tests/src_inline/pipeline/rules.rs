use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::input::record::{StudentId, TaskScore};
use crate::model::flags::{FlagSet, flag_order};
use crate::model::pronouns::Gender;
use crate::model::scores::Score;
use crate::model::thresholds::band_order;
use crate::templates::TemplateSet;

fn band_label(band: MarkBand) -> &'static str {
    match band {
        MarkBand::Fail => "FAIL",
        MarkBand::Careful => "CAREFUL",
        MarkBand::Satisfactory => "SATISFACTORY",
        MarkBand::Good => "GOOD",
        MarkBand::Excellent => "EXCELLENT",
    }
}

fn labelled_store() -> TemplateStore {
    let mut sets = Vec::new();
    for &band in band_order() {
        sets.push(TemplateSet::new(
            TemplateKey::Band(band),
            vec![format!("[{} {{sname}} {{he_she}}] ", band_label(band))],
        ));
    }
    sets.push(TemplateSet::new(
        TemplateKey::TaskFailure,
        vec!["[task {ass_name} {his_her}] ".to_string()],
    ));
    for &flag in flag_order() {
        sets.push(TemplateSet::new(
            TemplateKey::Behaviour(flag),
            vec![format!("[{} {{him_her}}] ", flag.column())],
        ));
    }
    TemplateStore::from_sets(PathBuf::from("comments"), sets)
}

fn record(gender: Gender, final_score: Score, tasks: &[(&str, Score)], flags: FlagSet) -> StudentRecord {
    StudentRecord {
        id: StudentId {
            surname: "Smith".to_string(),
            preferred_name: "Jo".to_string(),
            number: "1".to_string(),
        },
        gender,
        tasks: tasks
            .iter()
            .map(|(n, s)| TaskScore {
                name: n.to_string(),
                score: *s,
            })
            .collect(),
        final_score,
        flags,
    }
}

#[test]
fn test_jo_scenario() {
    let store = labelled_store();
    let engine = CommentEngine::new(&store);
    let jo = record(
        Gender::Female,
        Score::Value(0.72),
        &[("Essay", Score::Value(0.3)), ("Poem", Score::Value(0.6))],
        FlagSet::empty().with(BehaviourFlag::Read),
    );
    let mut rng = StdRng::seed_from_u64(1);
    let comments = engine
        .evaluate(&jo, Some(RuleVariant::AdditionalLanguage), &mut rng)
        .unwrap();
    assert_eq!(
        comments,
        vec![
            "[GOOD Jo she] ".to_string(),
            "[task Essay her] ".to_string(),
            "[Read her] ".to_string(),
        ]
    );
}

#[test]
fn test_absent_final_mark_literal_for_both_variants() {
    let store = labelled_store();
    let engine = CommentEngine::new(&store);
    let r = record(Gender::Male, Score::Absent, &[], FlagSet::empty());
    for variant in [RuleVariant::AdditionalLanguage, RuleVariant::HomeLanguage] {
        let mut rng = StdRng::seed_from_u64(3);
        let comments = engine.evaluate(&r, Some(variant), &mut rng).unwrap();
        assert_eq!(comments, vec![NO_FINAL_MARK.to_string()]);
    }
}

#[test]
fn test_no_variant_skips_final_mark() {
    let r = record(
        Gender::Male,
        Score::Absent,
        &[("T1", Score::Value(0.1))],
        FlagSet::empty(),
    );
    assert_eq!(
        plan_comments(&r, None),
        vec![PlannedComment::Rule(RuleCategory::TaskFailure { task: "T1" })]
    );
}

#[test]
fn test_two_failed_tasks_in_column_order() {
    let store = labelled_store();
    let engine = CommentEngine::new(&store);
    let r = record(
        Gender::Male,
        Score::Value(0.9),
        &[
            ("Essay", Score::Value(0.2)),
            ("Poem", Score::Value(0.4)),
            ("Orals", Score::Absent),
            ("Test", Score::Value(0.39)),
        ],
        FlagSet::empty(),
    );
    let mut rng = StdRng::seed_from_u64(5);
    let comments = engine.evaluate(&r, None, &mut rng).unwrap();
    assert_eq!(
        comments,
        vec!["[task Essay his] ".to_string(), "[task Test his] ".to_string()]
    );
}

#[test]
fn test_flags_in_fixed_order() {
    let r = record(
        Gender::Female,
        Score::Absent,
        &[],
        FlagSet::empty()
            .with(BehaviourFlag::Read)
            .with(BehaviourFlag::Pleasure)
            .with(BehaviourFlag::Disruption),
    );
    let plan = plan_comments(&r, None);
    assert_eq!(
        plan,
        vec![
            PlannedComment::Rule(RuleCategory::Behaviour(BehaviourFlag::Pleasure)),
            PlannedComment::Rule(RuleCategory::Behaviour(BehaviourFlag::Disruption)),
            PlannedComment::Rule(RuleCategory::Behaviour(BehaviourFlag::Read)),
        ]
    );
}

#[test]
fn test_band_selection_per_variant() {
    let r = record(Gender::Male, Score::Value(0.45), &[], FlagSet::empty());
    assert_eq!(
        plan_comments(&r, Some(RuleVariant::AdditionalLanguage)),
        vec![PlannedComment::Rule(RuleCategory::FinalMark(MarkBand::Careful))]
    );
    assert_eq!(
        plan_comments(&r, Some(RuleVariant::HomeLanguage)),
        vec![PlannedComment::Rule(RuleCategory::FinalMark(MarkBand::Fail))]
    );
}

#[test]
fn test_task_name_empty_outside_task_rule() {
    let mut store_sets = vec![TemplateSet::new(
        TemplateKey::Behaviour(BehaviourFlag::Pleasure),
        vec!["<{ass_name}>".to_string()],
    )];
    store_sets.push(TemplateSet::new(TemplateKey::TaskFailure, vec!["x".to_string()]));
    let store = TemplateStore::from_sets(PathBuf::from("c"), store_sets);
    let engine = CommentEngine::new(&store);
    let r = record(
        Gender::Male,
        Score::Absent,
        &[],
        FlagSet::empty().with(BehaviourFlag::Pleasure),
    );
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(engine.evaluate(&r, None, &mut rng).unwrap(), vec!["<>".to_string()]);
}

#[test]
fn test_missing_set_surfaces_not_found() {
    let store = TemplateStore::from_sets(PathBuf::from("c"), Vec::new());
    let engine = CommentEngine::new(&store);
    let r = record(Gender::Male, Score::Value(0.5), &[], FlagSet::empty());
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        engine.evaluate(&r, Some(RuleVariant::HomeLanguage), &mut rng),
        Err(TemplateError::SetNotFound { file: "2_careful.txt", .. })
    ));
}

#[test]
fn test_unknown_placeholder_surfaces_render_error() {
    let store = TemplateStore::from_sets(
        PathBuf::from("c"),
        [TemplateSet::new(
            TemplateKey::Band(MarkBand::Good),
            vec!["{surname} did well".to_string()],
        )],
    );
    let engine = CommentEngine::new(&store);
    let r = record(Gender::Male, Score::Value(0.7), &[], FlagSet::empty());
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        engine.evaluate(&r, Some(RuleVariant::AdditionalLanguage), &mut rng),
        Err(TemplateError::Render { .. })
    ));
}

#[test]
fn test_fixed_seed_is_reproducible_and_fully_substituted() {
    let mut sets = Vec::new();
    for &band in band_order() {
        sets.push(TemplateSet::new(
            TemplateKey::Band(band),
            (0..8)
                .map(|i| format!("{i}:{{sname}} {{He_She}} {{his_her}}. "))
                .collect(),
        ));
    }
    let store = TemplateStore::from_sets(PathBuf::from("c"), sets);
    let engine = CommentEngine::new(&store);
    let r = record(Gender::Female, Score::Value(0.65), &[], FlagSet::empty());

    let draw = |seed: u64| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..16)
            .map(|_| {
                engine
                    .evaluate(&r, Some(RuleVariant::HomeLanguage), &mut rng)
                    .unwrap()
                    .concat()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(draw(42), draw(42));

    let mut distinct = std::collections::BTreeSet::new();
    for seed in 0..10 {
        for text in draw(seed) {
            assert!(!text.contains('{') && !text.contains('}'), "{text}");
            assert!(text.ends_with(":Jo She her. "), "{text}");
            distinct.insert(text);
        }
    }
    assert!(distinct.len() > 1);
}
