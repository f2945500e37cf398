use super::*;
use crate::input::table::parse_table;

const HEADER: &str = "Surname,Nickname,Sex,Number,Essay,Poem,Test,FINAL,Pleasure,Attention,Disruption,Read";

fn layout() -> ColumnLayout {
    let t = parse_table(HEADER).unwrap();
    ColumnLayout::from_header("10A_ENG_FAL", &t.header).unwrap()
}

fn row(line: &str) -> Row {
    let t = parse_table(&format!("{HEADER}\n{line}\n")).unwrap();
    t.rows.into_iter().next().unwrap()
}

#[test]
fn test_layout_task_columns_between_number_and_final() {
    let l = layout();
    let names: Vec<&str> = l.tasks.iter().map(|(_, n)| n.as_str()).collect();
    assert_eq!(names, vec!["Essay", "Poem", "Test"]);
    assert_eq!(l.final_mark, 7);
    assert_eq!(l.flags.len(), 4);
}

#[test]
fn test_layout_missing_column() {
    let t = parse_table("Surname,Nickname,Number,FINAL").unwrap();
    match ColumnLayout::from_header("c", &t.header) {
        Err(InputError::MissingColumn { column, .. }) => assert_eq!(column, "Sex"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_layout_final_before_number() {
    let t = parse_table("Surname,Nickname,Sex,FINAL,Number").unwrap();
    assert!(matches!(
        ColumnLayout::from_header("c", &t.header),
        Err(InputError::InvalidLayout { .. })
    ));
}

#[test]
fn test_layout_without_flag_columns() {
    let t = parse_table("Surname,Nickname,Sex,Number,T1,FINAL").unwrap();
    let l = ColumnLayout::from_header("c", &t.header).unwrap();
    assert!(l.flags.is_empty());
    assert_eq!(l.tasks, vec![(4, "T1".to_string())]);
}

#[test]
fn test_parse_full_record() {
    let r = parse_record(&layout(), &row("Smith,Jo,F,1234,0.3,A,0.6,0.72,,x,,X")).unwrap();
    assert_eq!(r.id.to_string(), "Smith_Jo_1234");
    assert_eq!(r.gender, Gender::Female);
    assert_eq!(r.tasks[0].score, Score::Value(0.3));
    assert_eq!(r.tasks[1].score, Score::Absent);
    assert_eq!(r.tasks[2].name, "Test");
    assert_eq!(r.final_score, Score::Value(0.72));
    let flags: Vec<BehaviourFlag> = r.flags.iter().collect();
    assert_eq!(flags, vec![BehaviourFlag::Attention, BehaviourFlag::Read]);
}

#[test]
fn test_invalid_final_score() {
    let err = parse_record(&layout(), &row("Smith,Jo,F,1234,0.3,A,0.6,nonsense,,,,")).unwrap_err();
    match err {
        RecordError::InvalidScore {
            line,
            student,
            field,
            value,
            source,
        } => {
            assert_eq!(line, 2);
            assert_eq!(student, "Smith_Jo_1234");
            assert_eq!(field, "FINAL");
            assert_eq!(value, "nonsense");
            assert_eq!(source, ScoreParseError::NotNumeric);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_invalid_task_score_names_task() {
    let err = parse_record(&layout(), &row("Smith,Jo,F,1234,0.3,7,0.6,0.5,,,,")).unwrap_err();
    assert!(matches!(
        err,
        RecordError::InvalidScore { ref field, source: ScoreParseError::OutOfRange, .. } if field == "Poem"
    ));
}

#[test]
fn test_missing_identity() {
    let err = parse_record(&layout(), &row("Smith,,F,1234,0.3,0.3,0.6,0.5,,,,")).unwrap_err();
    assert_eq!(
        err,
        RecordError::MissingIdentity {
            line: 2,
            field: "Nickname"
        }
    );
    assert_eq!(err.line(), 2);
}

#[test]
fn test_non_numeric_student_number() {
    let err = parse_record(&layout(), &row("Smith,Jo,F,12a,0.3,0.3,0.6,0.5,,,,")).unwrap_err();
    assert_eq!(
        err,
        RecordError::InvalidNumber {
            line: 2,
            value: "12a".to_string()
        }
    );
    assert_eq!(err.line(), 2);
}

#[test]
fn test_unknown_gender_is_not_an_error() {
    let r = parse_record(&layout(), &row("Smith,Jo,?,1234,0.3,0.3,0.6,0.5,,,,")).unwrap();
    assert_eq!(r.gender, Gender::Female);
    let r = parse_record(&layout(), &row("Smith,Jo,m,1234,0.3,0.3,0.6,0.5,,,,")).unwrap();
    assert_eq!(r.gender, Gender::Male);
}
