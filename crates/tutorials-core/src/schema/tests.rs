use super::*;

const NOTE_FIELDS: [FieldSpec; 4] = [
    FieldSpec::required("title", FieldKind::String),
    FieldSpec::required("published", FieldKind::Date),
    FieldSpec::string_list_or_empty("labels"),
    FieldSpec::optional("link", FieldKind::String),
];

const NOTE: Schema = Schema::new(&NOTE_FIELDS);

fn yaml(s: &str) -> RawValue {
    RawValue::from_yaml_str(s).unwrap()
}

#[test]
fn valid_record_with_defaults() {
    let entry = NOTE.validate(&yaml("title: Hi\npublished: 2024-05-01\n")).unwrap();
    assert_eq!(entry.get("title"), Some(&FieldValue::String("Hi".into())));
    assert_eq!(
        entry.get("published"),
        Some(&FieldValue::Date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()))
    );
    assert_eq!(entry.get("labels"), Some(&FieldValue::StringList(vec![])));
    assert_eq!(entry.get("link"), None);
    assert_eq!(entry.len(), 3);
}

#[test]
fn missing_fields_are_all_reported() {
    let err = NOTE.validate(&yaml("labels: [a]\n")).unwrap_err();
    assert_eq!(err.fields(), vec!["title", "published"]);
    assert!(err.issues().iter().all(|i| i.kind == IssueKind::Missing));
}

#[test]
fn null_required_counts_as_missing() {
    let err = NOTE.validate(&yaml("title:\npublished: 2024-05-01\n")).unwrap_err();
    assert_eq!(err.issues(), &[FieldIssue::new("title", IssueKind::Missing)]);
}

#[test]
fn null_optional_is_type_mismatch() {
    let err = NOTE
        .validate(&yaml("title: a\npublished: 2024-05-01\nlink:\nlabels:\n"))
        .unwrap_err();
    assert_eq!(
        err.issues(),
        &[
            FieldIssue::new(
                "labels",
                IssueKind::WrongType {
                    expected: "array",
                    found: "null"
                }
            ),
            FieldIssue::new(
                "link",
                IssueKind::WrongType {
                    expected: "string",
                    found: "null"
                }
            ),
        ]
    );
}

#[test]
fn wrong_primitive_types() {
    let err = NOTE
        .validate(&yaml("title: 42\npublished: true\nlabels: one\n"))
        .unwrap_err();
    assert_eq!(
        err.issues(),
        &[
            FieldIssue::new(
                "title",
                IssueKind::WrongType {
                    expected: "string",
                    found: "integer"
                }
            ),
            FieldIssue::new(
                "published",
                IssueKind::WrongType {
                    expected: "date",
                    found: "boolean"
                }
            ),
            FieldIssue::new(
                "labels",
                IssueKind::WrongType {
                    expected: "array",
                    found: "string"
                }
            ),
        ]
    );
}

#[test]
fn list_elements_reported_by_index() {
    let err = NOTE
        .validate(&yaml("title: a\npublished: 2024-05-01\nlabels: [ok, 3, also-ok, false]\n"))
        .unwrap_err();
    let paths: Vec<&str> = err.issues().iter().map(|i| i.path.as_str()).collect();
    assert_eq!(paths, vec!["labels[1]", "labels[3]"]);
    assert_eq!(err.fields(), vec!["labels"]);
}

#[test]
fn unparseable_date() {
    let err = NOTE.validate(&yaml("title: a\npublished: someday\n")).unwrap_err();
    assert_eq!(
        err.issues(),
        &[FieldIssue::new(
            "published",
            IssueKind::InvalidDate("someday".into())
        )]
    );
}

#[test]
fn empty_required_string() {
    let err = NOTE.validate(&yaml("title: '   '\npublished: 2024-05-01\n")).unwrap_err();
    assert_eq!(err.issues(), &[FieldIssue::new("title", IssueKind::Empty)]);
}

#[test]
fn empty_optional_string_is_kept() {
    let entry = NOTE
        .validate(&yaml("title: a\npublished: 2024-05-01\nlink: ''\n"))
        .unwrap();
    assert_eq!(entry.get("link"), Some(&FieldValue::String(String::new())));
}

#[test]
fn unknown_keys_are_ignored() {
    let entry = NOTE
        .validate(&yaml("title: a\npublished: 2024-05-01\ndraft: true\n"))
        .unwrap();
    assert_eq!(entry.get("draft"), None);
}

#[test]
fn null_root_is_empty_mapping() {
    let err = NOTE.validate(&RawValue::Null).unwrap_err();
    assert_eq!(err.fields(), vec!["title", "published"]);
}

#[test]
fn non_mapping_root() {
    let err = NOTE.validate(&yaml("- a\n- b\n")).unwrap_err();
    assert_eq!(
        err.issues(),
        &[FieldIssue::new("", IssueKind::NotAMapping { found: "array" })]
    );
}

#[test]
fn take_leaves_mismatched_kind_in_place() {
    let mut entry = NOTE.validate(&yaml("title: a\npublished: 2024-05-01\n")).unwrap();
    assert_eq!(entry.take_date("title"), None);
    assert_eq!(entry.take_string("title").as_deref(), Some("a"));
    assert_eq!(entry.take_string("title"), None);
    assert_eq!(entry.take_string_list("labels"), Some(vec![]));
    assert!(entry.take_date("published").is_some());
    assert!(entry.is_empty());
}
