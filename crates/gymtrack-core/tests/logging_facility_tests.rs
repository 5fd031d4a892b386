#![allow(clippy::unwrap_used, clippy::expect_used)]

use gymtrack_core::errors::{ExErrorKind, PlannerError};
use gymtrack_core::logging_facility::test_capture::init_test_capture;
use gymtrack_core::{log_op_end, log_op_error, log_op_start};
use gymtrack_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, exercise_count = 3);

    capture.assert_event_exists(op_name, EVENT_START);
    let count = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name)
            && e.fields.get("exercise_count").map(String::as_str) == Some("3")
    });
    assert_eq!(count, 1);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = PlannerError::ExerciseNotFound {
        exercise_id: "ex-1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event captured");

    assert_eq!(
        error_event.fields.get("err_kind"),
        Some(&format!("{:?}", ExErrorKind::NotFound))
    );
    assert_eq!(
        error_event.fields.get("err_code").map(String::as_str),
        Some("ERR_NOT_FOUND")
    );
}
