#![cfg(test)]
use std::path::PathBuf;

use teamgen_common::team::{Employee, RoleKind};
use teamgen_core::session::SessionOutcome;

use crate::support::{ADA, BO, CY, session};

#[tokio::test]
async fn manager_only_roster_is_rendered() {
    let (session, harness) = session(&["Start", "Render Team Roster"], &ADA);

    let outcome = session.run().await.unwrap();

    let rendered = harness.rendered();
    assert_eq!(rendered.len(), 1, "renderer should be called exactly once");
    let roster = &rendered[0];
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].kind(), RoleKind::Manager);
    assert_eq!(roster[0].name(), "Ada");
    assert_eq!(roster[0].id().as_str(), "1");
    assert_eq!(roster[0].email(), "ada@x.com");
    assert_eq!(roster[0].office_number(), Some("100"));

    let (roster, path) = match outcome {
        SessionOutcome::Rendered { roster, path } => (roster, path),
        other => panic!("expected a rendered outcome, got {other:?}"),
    };
    assert_eq!(roster.members(), rendered[0].as_slice());
    assert_eq!(path, PathBuf::from("output/team.html"));

    let writes = harness.writes.lock().unwrap();
    assert_eq!(writes.directories, [PathBuf::from("output")]);
    assert_eq!(
        writes.files,
        [(PathBuf::from("output/team.html"), "<html>1 members</html>".to_string())]
    );
}

#[tokio::test]
async fn members_are_kept_in_arrival_order() {
    let inputs = [ADA, BO, CY].concat();
    let (session, harness) = session(
        &["Start", "Add Intern", "Add Engineer", "Render Team Roster"],
        &inputs,
    );

    session.run().await.unwrap();

    let rendered = harness.rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(
        rendered[0],
        vec![
            Employee::manager("Ada", "1", "ada@x.com", "100").unwrap(),
            Employee::intern("Bo", "2", "bo@y.com", "MIT").unwrap(),
            Employee::engineer("Cy", "3", "cy@z.com", "cy-dev").unwrap(),
        ]
    );
}

#[tokio::test]
async fn rejected_answer_is_asked_again_without_residue() {
    let (session, harness) = session(
        &["Start", "Render Team Roster"],
        &["Ada", "12a3", "123", "ada@x.com", "100"],
    );

    session.run().await.unwrap();

    let manager = &harness.rendered()[0][0];
    assert_eq!(manager.id().as_str(), "123");
    assert_eq!(manager.name(), "Ada");
    assert_eq!(harness.rejections(), ["ID can only contain numbers!"]);
    assert_eq!(
        harness.asked(),
        [
            "What is the Manager's name?",
            "What is the Manager's id?",
            "What is the Manager's id?",
            "What is the Manager's email?",
            "What is the Manager's office number?",
        ]
    );
}

#[tokio::test]
async fn exit_at_start_skips_everything() {
    let (session, harness) = session(&["Exit"], &[]);

    let outcome = session.run().await.unwrap();

    assert_eq!(outcome, SessionOutcome::Declined);
    assert!(harness.asked().is_empty(), "no manager question may be asked");
    assert!(harness.rendered().is_empty());
    assert!(harness.writes.lock().unwrap().files.is_empty());
}

#[tokio::test]
async fn exit_without_rendering_keeps_roster_but_writes_nothing() {
    let inputs = [ADA, CY].concat();
    let (session, harness) = session(
        &["Start", "Add Engineer", "Exit without Rendering"],
        &inputs,
    );

    let outcome = session.run().await.unwrap();

    let roster = match outcome {
        SessionOutcome::ExitedWithoutRendering(roster) => roster,
        other => panic!("expected exit without rendering, got {other:?}"),
    };
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.members()[1].github(), Some("cy-dev"));
    assert!(harness.rendered().is_empty());

    let writes = harness.writes.lock().unwrap();
    assert!(writes.directories.is_empty());
    assert!(writes.files.is_empty());
}

#[tokio::test]
async fn team_size_is_unbounded() {
    let mut picks = vec!["Start"];
    let mut inputs = ADA.to_vec();
    for _ in 0..25 {
        picks.push("Add Intern");
        inputs.extend(BO);
    }
    picks.push("Render Team Roster");

    let (session, harness) = session(&picks, &inputs);
    session.run().await.unwrap();

    let roster = &harness.rendered()[0];
    assert_eq!(roster.len(), 26);
    assert_eq!(roster[0].kind(), RoleKind::Manager);
    assert!(roster[1..].iter().all(|e| e.kind() == RoleKind::Intern));
}

#[tokio::test]
async fn menus_offer_no_second_manager() {
    let (session, harness) = session(&["Start", "Exit without Rendering"], &ADA);
    session.run().await.unwrap();

    let prompts = harness.prompts.lock().unwrap();
    assert_eq!(prompts.menus[0], ["Start", "Exit"]);
    assert_eq!(
        prompts.menus[1],
        ["Add Intern", "Add Engineer", "Render Team Roster", "Exit without Rendering"]
    );
    assert!(prompts.menus.iter().flatten().all(|choice| !choice.contains("Manager")));
}
