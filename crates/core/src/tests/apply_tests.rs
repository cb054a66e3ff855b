// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{add_test_athlete, create_test_actor, create_test_cause};
use crate::{Command, CoreError, Outcome, RosterState, TransitionResult, apply};
use practice_roster_domain::{AthleteId, DomainError, EntityKind, ErrorCategory, VolunteerId};

#[test]
fn test_valid_command_returns_new_state() {
    let state: RosterState = RosterState::new();
    let command: Command = Command::AddAthlete {
        name: String::from("Mia"),
        notes: String::new(),
        role_ids: Vec::new(),
    };

    let transition: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(transition.new_state.athletes().len(), 1);
    assert_eq!(transition.new_state.athletes()[0].name, "Mia");
    assert!(state.athletes().is_empty());
}

#[test]
fn test_valid_command_emits_audit_event() {
    let state: RosterState = RosterState::new();
    let command: Command = Command::AddRole {
        namespace: EntityKind::Volunteer,
        name: String::from("Buddy"),
    };

    let transition: TransitionResult =
        apply(&state, command, create_test_actor(), create_test_cause()).unwrap();

    assert_eq!(transition.audit_event.action.name, "AddRole");
    assert_eq!(transition.audit_event.actor.id, "coach-123");
    assert_eq!(transition.audit_event.cause.id, "req-456");
    assert_eq!(transition.audit_event.before.volunteer_roles, 0);
    assert_eq!(transition.audit_event.after.volunteer_roles, 1);
    assert!(
        transition
            .audit_event
            .action
            .details
            .unwrap()
            .starts_with("Added volunteer role")
    );
}

#[test]
fn test_invalid_command_leaves_state_untouched() {
    let mut state: RosterState = RosterState::new();
    add_test_athlete(&mut state, "Mia");
    let before: RosterState = state.clone();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::AddAthlete {
            name: String::from("   "),
            notes: String::new(),
            role_ids: Vec::new(),
        },
        create_test_actor(),
        create_test_cause(),
    );

    let err: CoreError = result.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(state, before);
}

#[test]
fn test_update_unknown_athlete_is_not_found() {
    let state: RosterState = RosterState::new();
    let missing: AthleteId = AthleteId::new("_missing");

    let err: CoreError = apply(
        &state,
        Command::UpdateAthlete {
            athlete_id: missing.clone(),
            name: String::from("Mia"),
            notes: String::new(),
            role_ids: Vec::new(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::DomainViolation(DomainError::AthleteNotFound(missing))
    );
    assert_eq!(err.category(), ErrorCategory::NotFound);
}

#[test]
fn test_duplicate_role_is_rejected() {
    let mut state: RosterState = RosterState::new();
    state.add_role(EntityKind::Athlete, "Sprinter").unwrap();

    let err: CoreError = apply(
        &state,
        Command::AddRole {
            namespace: EntityKind::Athlete,
            name: String::from(" Sprinter "),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Duplicate);
}

#[test]
fn test_noop_command_still_emits_audit_event() {
    let mut state: RosterState = RosterState::new();
    let athlete_id: AthleteId = add_test_athlete(&mut state, "Mia");

    let transition: TransitionResult = apply(
        &state,
        Command::ReassignVolunteer {
            volunteer_id: VolunteerId::new("_sam"),
            from_athlete_id: athlete_id.clone(),
            to_athlete_id: athlete_id,
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(transition.outcome, Outcome::Reassigned(None));
    assert!(transition.outcome.is_noop());
    assert_eq!(transition.new_state, state);
    assert_eq!(transition.audit_event.action.name, "ReassignVolunteer");
    assert_eq!(transition.audit_event.before, transition.audit_event.after);
}

#[test]
fn test_assign_outcome_reports_changes() {
    let mut state: RosterState = RosterState::new();
    let athlete_id: AthleteId = add_test_athlete(&mut state, "Mia");
    let volunteer_id: VolunteerId = state.add_volunteer("Sam", Vec::new()).unwrap();

    let transition: TransitionResult = apply(
        &state,
        Command::AssignVolunteer {
            athlete_id: athlete_id.clone(),
            volunteer_id: volunteer_id.clone(),
        },
        create_test_actor(),
        create_test_cause(),
    )
    .unwrap();

    match transition.outcome {
        Outcome::Assigned(change) => {
            assert!(change.assignments_changed);
            assert!(change.history_changed);
            assert_eq!(change.athlete_id, athlete_id);
            assert_eq!(change.volunteer_id, volunteer_id);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(transition.audit_event.after.assignment_links, 1);
    assert_eq!(transition.audit_event.after.history_links, 1);
}

#[test]
fn test_command_names_are_stable() {
    assert_eq!(Command::FinalizeCheckin.name(), "FinalizeCheckin");
    assert_eq!(
        Command::DeleteRole {
            namespace: EntityKind::Athlete,
            role_id: practice_roster_domain::RoleId::new("_r"),
        }
        .name(),
        "DeleteRole"
    );
}
