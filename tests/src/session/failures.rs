#![cfg(test)]
use teamgen_core::TeamError;
use teamgen_core::questions::questions_for_name;

use crate::support::{ADA, Failure, session, session_failing};

#[tokio::test]
async fn write_failure_ends_the_session_with_an_error() {
    let (session, harness) = session_failing(
        &["Start", "Render Team Roster"],
        &ADA,
        Some(Failure::File),
    );

    let result = session.run().await;

    assert!(matches!(result, Err(TeamError::WriteFile { .. })));
    assert_eq!(harness.rendered().len(), 1, "render happens before the write");
    assert_eq!(harness.writes.lock().unwrap().directories.len(), 1);
}

#[tokio::test]
async fn directory_failure_skips_the_write() {
    let (session, harness) = session_failing(
        &["Start", "Render Team Roster"],
        &ADA,
        Some(Failure::Directory),
    );

    let result = session.run().await;

    let Err(err) = result else {
        panic!("directory failure must be fatal");
    };
    assert!(matches!(err, TeamError::CreateDir { .. }));
    assert!(err.to_string().starts_with("failed to create output directory output"));
    assert!(harness.writes.lock().unwrap().files.is_empty());
}

#[tokio::test]
async fn closed_input_is_fatal() {
    let (session, harness) = session(&["Start"], &["Ada", "1"]);

    let result = session.run().await;

    assert!(matches!(result, Err(TeamError::Prompt(_))));
    assert!(harness.rendered().is_empty());
}

#[test]
fn unknown_role_aborts() {
    let err = questions_for_name("Director").unwrap_err();
    assert!(matches!(err, TeamError::UnknownRole(ref name) if name == "Director"));
    assert_eq!(err.to_string(), "Employee role does not exist: Director");
}
