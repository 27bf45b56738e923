//! Integration tests for the object path grammar.

use worldnav::path::{ComponentStep, IndexField, PathError, PathRecord};

/// Canonical paths (no leading zeros) that must survive parse → format.
const CANONICAL_PATHS: &[&str] = &[
    "MyWorld@Main[0]:/Player[0]",
    "MyWorld@Main[0]:/Player[0]->Mesh[0]",
    "W@L[2]:/A[1]->C1[0]/C2[3]",
    "Untitled_1@PersistentLevel[0]:/BP_Door_C_12[4]->DefaultSceneRoot[0]/Frame[0]/Handle[2]",
    "W@Maps/Arena[10]:/Light[123]",
    "World With Spaces@Level One[0]:/Actor Two[1]->Comp Three[0]",
];

#[test]
fn test_strings_round_trip() {
    for path in CANONICAL_PATHS {
        let record = PathRecord::parse(path).unwrap();
        assert_eq!(&record.to_string(), path);
    }
}

#[test]
fn test_records_round_trip() {
    let records = vec![
        PathRecord::new("W", "L", "A"),
        PathRecord::new("W", "L", "A")
            .with_level_index(3)
            .with_actor_index(9)
            .with_component("Root", 0),
        PathRecord::new("Game", "Streamed", "Crate")
            .with_level_index(1)
            .with_component("Root", 0)
            .with_component("Lid", 1)
            .with_component("Hinge", 12),
    ];

    for record in records {
        let formatted = record.to_string();
        assert_eq!(PathRecord::parse(&formatted).unwrap(), record, "{formatted}");
    }
}

#[test]
fn test_leading_zeros_normalise_on_format() {
    let record = PathRecord::parse("W@L[01]:/A[002]->C[0003]").unwrap();
    assert_eq!(record.to_string(), "W@L[1]:/A[2]->C[3]");
}

#[test]
fn test_scenario_literal_fields() {
    let record = PathRecord::parse("MyWorld@Main[0]:/Player[0]->Mesh[0]").unwrap();
    assert_eq!(
        record,
        PathRecord {
            world_name: "MyWorld".to_string(),
            level_name: "Main".to_string(),
            level_index: 0,
            actor_name: "Player".to_string(),
            actor_index: 0,
            component_steps: vec![ComponentStep::new("Mesh", 0)],
        }
    );
}

#[test]
fn test_non_digit_in_any_index_fails() {
    let cases = [
        ("W@L[a]:/A[0]->C[0]", IndexField::Level, "a"),
        ("W@L[ 1]:/A[0]->C[0]", IndexField::Level, " 1"),
        ("W@L[0]:/A[1.5]->C[0]", IndexField::Actor, "1.5"),
        ("W@L[0]:/A[0]->C[0x1]", IndexField::Component, "0x1"),
        ("W@L[0]:/A[0]->C[0]/D[1e3]", IndexField::Component, "1e3"),
    ];

    for (path, field, text) in cases {
        assert_eq!(
            PathRecord::parse(path),
            Err(PathError::InvalidIndex {
                field,
                text: text.to_string()
            }),
            "{path}"
        );
    }
}

#[test]
fn test_error_messages() {
    let err = PathRecord::parse("W@L[0]:/A[q]").unwrap_err();
    assert_eq!(err.to_string(), "Failed to parse actor index: q");

    let err = PathRecord::parse("W@L[0]:/A[0]->C[0").unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Component names and indices must be the same length"));
}

#[test]
fn test_missing_names_fail() {
    for path in [
        "",
        "@L[0]:/A[0]->C[0]",
        "W@[0]:/A[0]",
        "W@L[0]:/[0]",
        "W@L[0]:/A",
        "L[0]:/A[0]",
        "[invalid world]",
        "[null Component]",
    ] {
        assert_eq!(
            PathRecord::parse(path),
            Err(PathError::MissingComponents),
            "{path:?}"
        );
    }
}

#[test]
fn test_first_error_wins() {
    // The level index fails before the missing world is noticed.
    assert!(matches!(
        PathRecord::parse("@L[z]:/A[0]"),
        Err(PathError::InvalidIndex {
            field: IndexField::Level,
            ..
        })
    ));
}
