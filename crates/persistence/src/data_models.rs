// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use practice_roster_audit::{Action, Actor, Cause, StateSnapshot};
use serde::{Deserialize, Serialize};

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

impl From<&Actor> for ActorData {
    fn from(actor: &Actor) -> Self {
        Self {
            id: actor.id.clone(),
            actor_type: actor.actor_type.clone(),
        }
    }
}

impl From<ActorData> for Actor {
    fn from(data: ActorData) -> Self {
        Self::new(data.id, data.actor_type)
    }
}

/// Serializable representation of a Cause.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseData {
    pub id: String,
    pub description: String,
}

impl From<&Cause> for CauseData {
    fn from(cause: &Cause) -> Self {
        Self {
            id: cause.id.clone(),
            description: cause.description.clone(),
        }
    }
}

impl From<CauseData> for Cause {
    fn from(data: CauseData) -> Self {
        Self::new(data.id, data.description)
    }
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

impl From<&Action> for ActionData {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name.clone(),
            details: action.details.clone(),
        }
    }
}

impl From<ActionData> for Action {
    fn from(data: ActionData) -> Self {
        Self::new(data.name, data.details)
    }
}

/// Serializable representation of a `StateSnapshot`.
///
/// Every count defaults to zero so rows written before a count existed
/// still load.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSnapshotData {
    pub athletes: usize,
    pub volunteers: usize,
    pub athlete_roles: usize,
    pub volunteer_roles: usize,
    pub checked_in_athletes: usize,
    pub checked_in_volunteers: usize,
    pub assigned_athletes: usize,
    pub assignment_links: usize,
    pub history_links: usize,
}

impl From<&StateSnapshot> for StateSnapshotData {
    fn from(snapshot: &StateSnapshot) -> Self {
        Self {
            athletes: snapshot.athletes,
            volunteers: snapshot.volunteers,
            athlete_roles: snapshot.athlete_roles,
            volunteer_roles: snapshot.volunteer_roles,
            checked_in_athletes: snapshot.checked_in_athletes,
            checked_in_volunteers: snapshot.checked_in_volunteers,
            assigned_athletes: snapshot.assigned_athletes,
            assignment_links: snapshot.assignment_links,
            history_links: snapshot.history_links,
        }
    }
}

impl From<StateSnapshotData> for StateSnapshot {
    fn from(data: StateSnapshotData) -> Self {
        Self {
            athletes: data.athletes,
            volunteers: data.volunteers,
            athlete_roles: data.athlete_roles,
            volunteer_roles: data.volunteer_roles,
            checked_in_athletes: data.checked_in_athletes,
            checked_in_volunteers: data.checked_in_volunteers,
            assigned_athletes: data.assigned_athletes,
            assignment_links: data.assignment_links,
            history_links: data.history_links,
        }
    }
}

/// Type alias for audit event row data.
///
/// `(event_id, actor_json, cause_json, action_json, before_json, after_json)`
pub type AuditEventRow = (i64, String, String, String, String, String);
