use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use onko_access::RowAccessor;
use onko_model::{DataAccessError, RawValue, Row};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_row() -> Row {
    Row::builder()
        .column("id", 1)
        .column("name", "  Testpatient  ")
        .column("count32", 42)
        .column("count64", 42i64)
        .column("ratio", 0.5)
        .column("active", true)
        .date("diagnosed_at", date(2025, 7, 11))
        .multi("markers", ["HER2", "ER"])
        .build()
}

#[test]
fn absent_columns_read_as_none() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert_eq!(accessor.text("missing").unwrap(), None);
    assert_eq!(accessor.int32("missing").unwrap(), None);
    assert_eq!(accessor.int64("missing").unwrap(), None);
    assert_eq!(accessor.double("missing").unwrap(), None);
    assert_eq!(accessor.date("missing").unwrap(), None);
    assert!(!accessor.is_true("missing").unwrap());
    assert!(accessor.is_absent("missing"));
    assert!(!accessor.is_absent("name"));
}

#[test]
fn text_trims_and_renders_integers() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert_eq!(accessor.text("name").unwrap().as_deref(), Some("Testpatient"));
    assert_eq!(accessor.text("count32").unwrap().as_deref(), Some("42"));
    assert_eq!(accessor.text("count64").unwrap().as_deref(), Some("42"));
}

#[test]
fn text_rejects_non_textual_kinds() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert!(matches!(
        accessor.text("ratio"),
        Err(DataAccessError::TypeMismatch { .. })
    ));
    assert!(matches!(
        accessor.text("diagnosed_at"),
        Err(DataAccessError::TypeMismatch { .. })
    ));
}

#[test]
fn integers_widen_but_doubles_never_narrow() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert_eq!(accessor.int32("count32").unwrap(), Some(42));
    assert_eq!(accessor.int64("count32").unwrap(), Some(42));
    assert_eq!(accessor.double("count32").unwrap(), Some(42.0));
    assert_eq!(accessor.int64("count64").unwrap(), Some(42));
    assert_eq!(accessor.double("count64").unwrap(), Some(42.0));
    assert_eq!(accessor.double("ratio").unwrap(), Some(0.5));

    // no narrowing paths
    assert!(accessor.int32("count64").is_err());
    assert!(accessor.int32("ratio").is_err());
    assert!(accessor.int64("ratio").is_err());
}

#[test]
fn date_reads_as_utc_midnight() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    let expected = Utc.with_ymd_and_hms(2025, 7, 11, 0, 0, 0).unwrap();
    assert_eq!(accessor.date("diagnosed_at").unwrap(), Some(expected));
    assert!(accessor.date("name").is_err());
}

#[test]
fn is_true_accepts_documented_encodings() {
    let row = Row::builder()
        .column("b_true", true)
        .column("b_false", false)
        .column("i_one", 1)
        .column("i_zero", 0)
        .column("l_one", 1i64)
        .column("d_one", 1.0)
        .column("s_one", "1")
        .column("s_other", "yes")
        .build();
    let accessor = RowAccessor::new(&row);

    assert!(accessor.is_true("b_true").unwrap());
    assert!(!accessor.is_true("b_false").unwrap());
    assert!(accessor.is_true("i_one").unwrap());
    assert!(!accessor.is_true("i_zero").unwrap());
    assert!(accessor.is_true("l_one").unwrap());
    assert!(accessor.is_true("d_one").unwrap());
    assert!(accessor.is_true("s_one").unwrap());
    assert!(!accessor.is_true("s_other").unwrap());
}

#[test]
fn is_true_rejects_dates_and_lists() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert!(accessor.is_true("diagnosed_at").is_err());
    assert!(accessor.is_true("markers").is_err());
}

#[test]
fn multi_reads_lists_and_defaults_to_empty() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert_eq!(
        accessor.multi("markers").unwrap(),
        vec!["HER2".to_string(), "ER".to_string()]
    );
    assert!(accessor.multi("missing").unwrap().is_empty());
    assert!(accessor.multi("name").is_err());
}

#[test]
fn require_all_present_names_first_missing_column() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    assert!(accessor.require_all_present(&["id", "name"]).is_ok());
    let err = accessor
        .require_all_present(&["id", "gone", "also_gone"])
        .unwrap_err();
    assert_eq!(
        err,
        DataAccessError::MissingColumn {
            column: "gone".to_string()
        }
    );
}

#[test]
fn with_value_runs_only_when_present() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    let mut seen = None;
    accessor
        .with_value("name", |value: String| seen = Some(value))
        .unwrap();
    assert_eq!(seen.as_deref(), Some("Testpatient"));

    let mut ran = false;
    accessor
        .with_value("missing", |_: String| ran = true)
        .unwrap();
    assert!(!ran);
}

#[test]
fn with_value_still_rejects_wrong_kinds() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    let result = accessor.with_value("name", |_: i32| {});
    assert!(matches!(
        result,
        Err(DataAccessError::TypeMismatch { .. })
    ));
}

#[test]
fn with_required_value_fails_with_supplied_error() {
    let row = sample_row();
    let accessor = RowAccessor::new(&row);

    let err = accessor
        .with_required_value(
            "missing",
            |_: String| {},
            DataAccessError::MissingColumn {
                column: "missing".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        DataAccessError::MissingColumn {
            column: "missing".to_string()
        }
    );
}

#[test]
fn with_property_requires_value_and_version() {
    let base = Row::builder()
        .column("id", 1)
        .property("icd10", "C61", 42)
        .build();

    let mut seen = None;
    RowAccessor::new(&base)
        .with_property("icd10", |value: String, version| {
            seen = Some((value, version));
        })
        .unwrap();
    assert_eq!(seen, Some(("C61".to_string(), 42)));

    // removing the value column suppresses the action
    let no_value = base.without_columns(["icd10"]);
    let mut ran = false;
    RowAccessor::new(&no_value)
        .with_property("icd10", |_: String, _| ran = true)
        .unwrap();
    assert!(!ran);

    // removing the version column suppresses it as well
    let no_version = base.without_columns(["icd10_propcat_version"]);
    let mut ran = false;
    RowAccessor::new(&no_version)
        .with_property("icd10", |_: String, _| ran = true)
        .unwrap();
    assert!(!ran);
}

#[test]
fn with_required_property_fails_only_for_missing_value() {
    let base = Row::builder()
        .column("id", 1)
        .property("icd10", "C61", 42)
        .build();
    let missing = || DataAccessError::MissingColumn {
        column: "icd10".to_string(),
    };

    let no_value = base.without_columns(["icd10"]);
    let err = RowAccessor::new(&no_value)
        .with_required_property("icd10", |_: String, _| {}, missing())
        .unwrap_err();
    assert_eq!(err, missing());

    // a missing version column is an absent attribute, not a failure
    let no_version = base.without_columns(["icd10_propcat_version"]);
    let mut ran = false;
    RowAccessor::new(&no_version)
        .with_required_property("icd10", |_: String, _| ran = true, missing())
        .unwrap();
    assert!(!ran);
}

#[test]
fn id_and_parent_id() {
    let row = Row::builder().column("id", 7).column("parent_id", 3).build();
    let accessor = RowAccessor::new(&row);
    assert_eq!(accessor.id().unwrap(), 7);
    assert_eq!(accessor.parent_id().unwrap(), Some(3));

    let orphan = Row::builder().column("id", 7).build();
    assert_eq!(RowAccessor::new(&orphan).parent_id().unwrap(), None);

    let headless = row.without_columns(["id"]);
    assert_eq!(
        RowAccessor::new(&headless).id().unwrap_err(),
        DataAccessError::MissingIdentity
    );
}

proptest! {
    #[test]
    fn int32_widens_consistently(value in any::<i32>()) {
        let row = Row::builder().column("v", value).build();
        let accessor = RowAccessor::new(&row);
        prop_assert_eq!(accessor.text("v").unwrap(), Some(value.to_string()));
        prop_assert_eq!(accessor.int64("v").unwrap(), Some(i64::from(value)));
        prop_assert_eq!(accessor.double("v").unwrap(), Some(f64::from(value)));
    }

    #[test]
    fn text_columns_round_trip_after_trim(value in "[a-zA-Z0-9 äöüß]{0,40}") {
        let row = Row::builder().column("v", value.as_str()).build();
        let accessor = RowAccessor::new(&row);
        prop_assert_eq!(accessor.text("v").unwrap(), Some(value.trim().to_string()));
    }
}
