// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Each mutating handler translates a request into a [`Command`], applies it
//! to the owner's live session, and returns the response together with the
//! [`FlushRequest`] the caller hands to storage. Read handlers only look at
//! the session's roster.

use practice_roster::{Command, Outcome, TransitionResult};
use practice_roster_audit::{AuditEvent, Cause};
use practice_roster_domain::{
    AthleteId, EntityKind, EntityRef, OwnerKey, RoleId, VolunteerId,
};
use practice_roster_persistence::SnapshotStore;
use std::str::FromStr;

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    AddAthleteRequest, AddRoleRequest, AddRoleResponse, AddVolunteerRequest,
    AssignVolunteerRequest, AssignmentResponse, AthleteResponse, AuditEventInfo,
    AuditTimelineResponse, CheckinToggleResponse, DeleteRoleResponse, FinalizeCheckinResponse,
    ReassignVolunteerRequest, ReassignVolunteerResponse, RoleUsageResponse, SessionResponse,
    UpdateAthleteRequest, UpdateVolunteerRequest, VolunteerResponse,
};
use crate::session::{FlushRequest, RosterSession, SessionRegistry};
use crate::views::{
    AssignmentBoard, CheckinView, PastVolunteersView, RosterView, build_assignment_board,
    build_checkin_view, build_past_volunteers, build_roster_view,
};

/// Result of an API operation that changes the roster.
#[derive(Debug, Clone)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The snapshot and audit event to hand to storage.
    pub flush: FlushRequest,
}

/// Parses a role namespace or entity kind from its path form.
fn parse_kind(value: &str) -> Result<EntityKind, ApiError> {
    EntityKind::from_str(value).map_err(translate_domain_error)
}

fn to_role_ids(values: &[String]) -> Vec<RoleId> {
    values.iter().map(|value| RoleId::new(value)).collect()
}

fn unexpected_outcome(outcome: &Outcome) -> ApiError {
    ApiError::Internal {
        message: format!("Unexpected outcome: {outcome:?}"),
    }
}

/// Applies a command and pairs the outcome with a flush request.
fn run(
    session: &mut RosterSession,
    command: Command,
    cause: Cause,
) -> Result<(Outcome, FlushRequest), ApiError> {
    let result: TransitionResult = session.apply(command, cause)?;
    let flush: FlushRequest = session.flush_request(Some(result.audit_event));
    Ok((result.outcome, flush))
}

fn session_response(session: &RosterSession, message: String) -> SessionResponse {
    SessionResponse {
        owner_key: session.owner_key().value().to_string(),
        athletes: session.state().athletes().len(),
        volunteers: session.state().volunteers().len(),
        message,
    }
}

/// Begins a session for an owner.
///
/// # Errors
///
/// Returns an error if the owner already has a session or the stored roster
/// cannot be read.
pub fn begin_session<S: SnapshotStore + ?Sized>(
    registry: &mut SessionRegistry,
    store: &mut S,
    owner_key: OwnerKey,
) -> Result<SessionResponse, ApiError> {
    let session: &mut RosterSession = registry.begin(store, owner_key)?;
    let message: String = format!("Session started for owner '{}'", session.owner_key());
    Ok(session_response(session, message))
}

/// Ends an owner's session.
///
/// The returned flush request carries the final roster and no audit event.
/// The caller writes it before the roster is gone for good.
///
/// # Errors
///
/// Returns an error if the owner has no session.
pub fn end_session(
    registry: &mut SessionRegistry,
    owner_key: &OwnerKey,
) -> Result<ApiResult<SessionResponse>, ApiError> {
    let session: RosterSession = registry.end(owner_key)?;
    let message: String = format!("Session ended for owner '{owner_key}'");
    Ok(ApiResult {
        response: session_response(&session, message),
        flush: session.flush_request(None),
    })
}

/// Adds an athlete.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn add_athlete(
    session: &mut RosterSession,
    request: AddAthleteRequest,
    cause: Cause,
) -> Result<ApiResult<AthleteResponse>, ApiError> {
    let command: Command = Command::AddAthlete {
        name: request.name,
        notes: request.notes,
        role_ids: to_role_ids(&request.role_ids),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    match outcome {
        Outcome::AthleteAdded { ref athlete_id } => Ok(ApiResult {
            response: AthleteResponse {
                athlete_id: athlete_id.value().to_string(),
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Edits an athlete's name, notes and roles.
///
/// # Errors
///
/// Returns an error if the athlete does not exist or the name is empty.
pub fn update_athlete(
    session: &mut RosterSession,
    athlete_id: &str,
    request: UpdateAthleteRequest,
    cause: Cause,
) -> Result<ApiResult<AthleteResponse>, ApiError> {
    let command: Command = Command::UpdateAthlete {
        athlete_id: AthleteId::new(athlete_id),
        name: request.name,
        notes: request.notes,
        role_ids: to_role_ids(&request.role_ids),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    Ok(ApiResult {
        response: AthleteResponse {
            athlete_id: athlete_id.to_string(),
            message: outcome.to_string(),
        },
        flush,
    })
}

/// Adds a volunteer.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn add_volunteer(
    session: &mut RosterSession,
    request: AddVolunteerRequest,
    cause: Cause,
) -> Result<ApiResult<VolunteerResponse>, ApiError> {
    let command: Command = Command::AddVolunteer {
        name: request.name,
        role_ids: to_role_ids(&request.role_ids),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    match outcome {
        Outcome::VolunteerAdded { ref volunteer_id } => Ok(ApiResult {
            response: VolunteerResponse {
                volunteer_id: volunteer_id.value().to_string(),
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Edits a volunteer's name and roles.
///
/// # Errors
///
/// Returns an error if the volunteer does not exist or the name is empty.
pub fn update_volunteer(
    session: &mut RosterSession,
    volunteer_id: &str,
    request: UpdateVolunteerRequest,
    cause: Cause,
) -> Result<ApiResult<VolunteerResponse>, ApiError> {
    let command: Command = Command::UpdateVolunteer {
        volunteer_id: VolunteerId::new(volunteer_id),
        name: request.name,
        role_ids: to_role_ids(&request.role_ids),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    Ok(ApiResult {
        response: VolunteerResponse {
            volunteer_id: volunteer_id.to_string(),
            message: outcome.to_string(),
        },
        flush,
    })
}

/// Defines a role in a namespace.
///
/// # Errors
///
/// Returns an error if the namespace is unknown, the name is empty, or the
/// name is already taken in the namespace.
pub fn add_role(
    session: &mut RosterSession,
    namespace: &str,
    request: AddRoleRequest,
    cause: Cause,
) -> Result<ApiResult<AddRoleResponse>, ApiError> {
    let command: Command = Command::AddRole {
        namespace: parse_kind(namespace)?,
        name: request.name,
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    match outcome {
        Outcome::RoleAdded {
            namespace,
            ref role_id,
        } => Ok(ApiResult {
            response: AddRoleResponse {
                namespace: namespace.to_string(),
                role_id: role_id.value().to_string(),
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Deletes a role, removing it from every entity in its namespace.
///
/// Deleting an unknown role succeeds and changes nothing.
///
/// # Errors
///
/// Returns an error if the namespace is unknown.
pub fn delete_role(
    session: &mut RosterSession,
    namespace: &str,
    role_id: &str,
    cause: Cause,
) -> Result<ApiResult<DeleteRoleResponse>, ApiError> {
    let command: Command = Command::DeleteRole {
        namespace: parse_kind(namespace)?,
        role_id: RoleId::new(role_id),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    match outcome {
        Outcome::RoleDeleted {
            namespace,
            ref role_id,
            deletion,
        } => Ok(ApiResult {
            response: DeleteRoleResponse {
                namespace: namespace.to_string(),
                role_id: role_id.value().to_string(),
                existed: deletion.existed,
                removed_from_entity_count: deletion.removed_from_entity_count,
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Reports how many entities carry a role.
///
/// # Errors
///
/// Returns an error if the namespace is unknown or the role does not exist.
pub fn get_role_usage(
    session: &RosterSession,
    namespace: &str,
    role_id: &str,
) -> Result<RoleUsageResponse, ApiError> {
    let kind: EntityKind = parse_kind(namespace)?;
    let role_id: RoleId = RoleId::new(role_id);
    let name: String = session
        .state()
        .find_role(kind, &role_id)
        .map(|role| role.name.clone())
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Role"),
            message: format!("Role '{role_id}' does not exist in the {kind} namespace"),
        })?;

    Ok(RoleUsageResponse {
        namespace: kind.to_string(),
        role_id: role_id.value().to_string(),
        name,
        usage: session.state().role_usage(kind, &role_id),
    })
}

/// Flips an athlete's or volunteer's check-in.
///
/// # Errors
///
/// Returns an error if the kind is unknown.
pub fn toggle_checkin(
    session: &mut RosterSession,
    kind: &str,
    id: &str,
    cause: Cause,
) -> Result<ApiResult<CheckinToggleResponse>, ApiError> {
    let entity: EntityRef = EntityRef::from_parts(parse_kind(kind)?, id);
    let command: Command = Command::ToggleCheckin { entity };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    match outcome {
        Outcome::CheckinToggled {
            ref entity,
            checked_in,
        } => Ok(ApiResult {
            response: CheckinToggleResponse {
                kind: entity.kind().to_string(),
                id: entity.id_value().to_string(),
                checked_in,
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Finalizes check-in, pruning assignments and history to who is present.
///
/// # Errors
///
/// Returns an error if the core rejects the command.
pub fn finalize_checkin(
    session: &mut RosterSession,
    cause: Cause,
) -> Result<ApiResult<FinalizeCheckinResponse>, ApiError> {
    let (outcome, flush): (Outcome, FlushRequest) =
        run(session, Command::FinalizeCheckin, cause)?;

    match outcome {
        Outcome::CheckinFinalized(ref summary) => Ok(ApiResult {
            response: FinalizeCheckinResponse {
                retained_athletes: summary.retained_athletes,
                dropped_athletes: summary
                    .dropped_athletes
                    .iter()
                    .map(|athlete_id| athlete_id.value().to_string())
                    .collect(),
                released_assignments: summary.released_assignments,
                message: outcome.to_string(),
            },
            flush,
        }),
        _ => Err(unexpected_outcome(&outcome)),
    }
}

/// Assigns a volunteer to an athlete.
///
/// Assigning a volunteer that is already assigned to the athlete changes
/// nothing.
///
/// # Errors
///
/// Returns an error if the core rejects the command.
pub fn assign_volunteer(
    session: &mut RosterSession,
    request: AssignVolunteerRequest,
    cause: Cause,
) -> Result<ApiResult<AssignmentResponse>, ApiError> {
    let command: Command = Command::AssignVolunteer {
        athlete_id: AthleteId::new(&request.athlete_id),
        volunteer_id: VolunteerId::new(&request.volunteer_id),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    Ok(ApiResult {
        response: AssignmentResponse {
            athlete_id: request.athlete_id,
            volunteer_id: request.volunteer_id,
            changed: !outcome.is_noop(),
            message: outcome.to_string(),
        },
        flush,
    })
}

/// Removes a volunteer from an athlete.
///
/// # Errors
///
/// Returns an error if the core rejects the command.
pub fn unassign_volunteer(
    session: &mut RosterSession,
    athlete_id: &str,
    volunteer_id: &str,
    cause: Cause,
) -> Result<ApiResult<AssignmentResponse>, ApiError> {
    let command: Command = Command::UnassignVolunteer {
        athlete_id: AthleteId::new(athlete_id),
        volunteer_id: VolunteerId::new(volunteer_id),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    Ok(ApiResult {
        response: AssignmentResponse {
            athlete_id: athlete_id.to_string(),
            volunteer_id: volunteer_id.to_string(),
            changed: !outcome.is_noop(),
            message: outcome.to_string(),
        },
        flush,
    })
}

/// Moves a volunteer from one athlete to another.
///
/// Moving a volunteer onto the athlete it came from changes nothing.
///
/// # Errors
///
/// Returns an error if the core rejects the command.
pub fn reassign_volunteer(
    session: &mut RosterSession,
    request: ReassignVolunteerRequest,
    cause: Cause,
) -> Result<ApiResult<ReassignVolunteerResponse>, ApiError> {
    let command: Command = Command::ReassignVolunteer {
        volunteer_id: VolunteerId::new(&request.volunteer_id),
        from_athlete_id: AthleteId::new(&request.from_athlete_id),
        to_athlete_id: AthleteId::new(&request.to_athlete_id),
    };
    let (outcome, flush): (Outcome, FlushRequest) = run(session, command, cause)?;

    Ok(ApiResult {
        response: ReassignVolunteerResponse {
            moved: !outcome.is_noop(),
            message: outcome.to_string(),
        },
        flush,
    })
}

/// Returns the roster view.
#[must_use]
pub fn get_roster(session: &RosterSession) -> RosterView {
    build_roster_view(session.state())
}

/// Returns the check-in view.
#[must_use]
pub fn get_checkin(session: &RosterSession) -> CheckinView {
    build_checkin_view(session.state())
}

/// Returns the assignment board.
#[must_use]
pub fn get_assignment_board(session: &RosterSession) -> AssignmentBoard {
    build_assignment_board(session.state())
}

/// Returns the volunteers an athlete worked with before but not now.
///
/// # Errors
///
/// Returns an error if the athlete is not on the roster.
pub fn get_past_volunteers(
    session: &RosterSession,
    athlete_id: &str,
) -> Result<PastVolunteersView, ApiError> {
    build_past_volunteers(session.state(), &AthleteId::new(athlete_id)).ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Athlete"),
            message: format!("Athlete '{athlete_id}' does not exist"),
        }
    })
}

fn audit_event_info(event: &AuditEvent) -> AuditEventInfo {
    AuditEventInfo {
        event_id: event.event_id,
        action: event.action.name.clone(),
        details: event.action.details.clone(),
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        before_snapshot: event.before.summary(),
        after_snapshot: event.after.summary(),
    }
}

/// Lists an owner's stored audit timeline, oldest first.
///
/// # Errors
///
/// Returns an error if the timeline cannot be read.
pub fn get_audit_timeline<S: SnapshotStore + ?Sized>(
    store: &mut S,
    owner_key: &OwnerKey,
) -> Result<AuditTimelineResponse, ApiError> {
    let events: Vec<AuditEvent> = store
        .list_audit_events(owner_key)
        .map_err(|e| translate_persistence_error(&e))?;

    Ok(AuditTimelineResponse {
        owner_key: owner_key.value().to_string(),
        events: events.iter().map(audit_event_info).collect(),
    })
}
