// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::outcome::{Outcome, RoleDeletion};
use crate::state::{RosterState, TransitionResult};
use practice_roster_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};

/// Applies a command to the current state, producing a new state and audit event.
///
/// The command runs against a copy of `state`, so a failing command leaves
/// the caller's roster exactly as it was. Every successful command yields
/// one audit event, including commands that turn out to change nothing.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, outcome and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A name is empty after trimming
/// - A role name is already taken in its namespace
/// - An athlete or volunteer being edited does not exist
pub fn apply(
    state: &RosterState,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();
    let mut new_state: RosterState = state.clone();

    let outcome: Outcome = match command {
        Command::AddAthlete {
            name,
            notes,
            role_ids,
        } => Outcome::AthleteAdded {
            athlete_id: new_state.add_athlete(&name, &notes, role_ids)?,
        },
        Command::UpdateAthlete {
            athlete_id,
            name,
            notes,
            role_ids,
        } => {
            new_state.update_athlete(&athlete_id, &name, &notes, role_ids)?;
            Outcome::AthleteUpdated { athlete_id }
        }
        Command::AddVolunteer { name, role_ids } => Outcome::VolunteerAdded {
            volunteer_id: new_state.add_volunteer(&name, role_ids)?,
        },
        Command::UpdateVolunteer {
            volunteer_id,
            name,
            role_ids,
        } => {
            new_state.update_volunteer(&volunteer_id, &name, role_ids)?;
            Outcome::VolunteerUpdated { volunteer_id }
        }
        Command::AddRole { namespace, name } => Outcome::RoleAdded {
            namespace,
            role_id: new_state.add_role(namespace, &name)?,
        },
        Command::DeleteRole { namespace, role_id } => {
            let deletion: RoleDeletion = new_state.delete_role(namespace, &role_id);
            Outcome::RoleDeleted {
                namespace,
                role_id,
                deletion,
            }
        }
        Command::ToggleCheckin { entity } => {
            let checked_in: bool = new_state.toggle_checkin(&entity);
            Outcome::CheckinToggled { entity, checked_in }
        }
        Command::AssignVolunteer {
            athlete_id,
            volunteer_id,
        } => Outcome::Assigned(new_state.assign(&athlete_id, &volunteer_id)),
        Command::UnassignVolunteer {
            athlete_id,
            volunteer_id,
        } => Outcome::Unassigned(new_state.unassign(&athlete_id, &volunteer_id)),
        Command::ReassignVolunteer {
            volunteer_id,
            from_athlete_id,
            to_athlete_id,
        } => Outcome::Reassigned(new_state.reassign(
            &volunteer_id,
            &from_athlete_id,
            &to_athlete_id,
        )),
        Command::FinalizeCheckin => Outcome::CheckinFinalized(new_state.finalize_checkin()),
    };

    let before: StateSnapshot = state.to_snapshot();
    let after: StateSnapshot = new_state.to_snapshot();
    let action: Action = Action::new(String::from(action_name), Some(outcome.to_string()));
    let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

    Ok(TransitionResult {
        new_state,
        outcome,
        audit_event,
    })
}
