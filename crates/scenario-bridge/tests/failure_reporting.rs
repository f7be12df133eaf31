//! Behavioural tests for translating scenario failures into host failures.

use rstest::rstest;
use scenario_bridge::test_support::{NotifierEvent, RecordingNotifier};
use scenario_bridge::{
    BridgeError, Description, FailureCause, FailureRecord, MessageOnlyFailureCause, Notifier,
    ScenarioError, ScenarioIdentity, UniqueId,
};
use serde_json::json;

fn data_row() -> UniqueId {
    let mut row = UniqueId::new();
    row.insert("input".into(), json!([1, 2]));
    row.insert("label".into(), json!("pair"));
    row
}

#[rstest]
#[case::plain("expected true")]
#[case::empty("")]
#[case::punctuated("Expected: \"a\" <> 'b' & c")]
#[case::whitespace("  padded  ")]
fn message_only_cause_echoes_message(#[case] message: &str) {
    let cause = MessageOnlyFailureCause::new(message);
    assert_eq!(cause.message(), message);
    assert_eq!(cause.to_string(), message);
    assert_eq!(cause.trace(), format!("{message}\n"));
}

#[rstest]
#[case::leaf(Description::test("adds"))]
#[case::suite(Description::suite("math").with_child(Description::test("adds")))]
#[case::scenario(Description::scenario(ScenarioIdentity::parameterized("rows", data_row())))]
fn failure_record_preserves_inputs(#[case] description: Description) {
    let record = FailureRecord::builder()
        .description(description.clone())
        .message("expectation not satisfied")
        .build();
    let Ok(record) = record else {
        panic!("complete builder should succeed");
    };
    assert_eq!(record.description(), &description);
    assert_eq!(record.cause().message(), "expectation not satisfied");
}

#[test]
fn failure_record_without_description_is_invalid() {
    let result = FailureRecord::builder().message("boom").build();
    assert!(matches!(
        result,
        Err(BridgeError::InvalidArgument("description"))
    ));
}

#[test]
fn parameterized_error_reads_back_all_fields() {
    let error = ScenarioError::parameterized("rows", data_row(), "expected [1, 2] to be sorted");
    assert_eq!(error.name(), "rows");
    assert_eq!(error.unique_id(), Some(&data_row()));
    assert_eq!(error.message(), "expected [1, 2] to be sorted");
    assert!(error.identity().is_parameterized());
}

#[test]
fn scenario_error_reaches_notifier_as_single_line() {
    let leaf = Description::scenario(ScenarioIdentity::parameterized("rows", data_row()));
    let tree = Description::suite("data")
        .with_child(Description::scenario(ScenarioIdentity::new("rows")))
        .with_child(leaf.clone());
    let error = ScenarioError::parameterized("rows", data_row(), "expected sorted input");
    let record = match error.locate_in(&tree) {
        Ok(record) => record,
        Err(error) => panic!("parameterized row should be found: {error}"),
    };

    let mut notifier = RecordingNotifier::default();
    notifier.test_failure(record.into());

    let expected = NotifierEvent::Failed {
        description: leaf,
        message: "expected sorted input".into(),
        trace: "expected sorted input\n".into(),
    };
    assert_eq!(notifier.events(), [expected]);
}

#[test]
fn scenario_error_is_usable_as_failure_cause() {
    let error = ScenarioError::new("adds", "expected 4, got 5");
    let cause: &dyn FailureCause = &error;
    assert_eq!(cause.message(), "expected 4, got 5");
    assert_eq!(cause.trace(), "expected 4, got 5\n");
}
