// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

#[cfg(test)]
mod tests;

use practice_roster_domain::OwnerKey;

/// Represents the entity performing an action.
///
/// For roster edits this is normally the signed-in owner; background
/// processes use their own actor type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "owner", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// Creates the actor representing a roster owner.
    #[must_use]
    pub fn owner(owner_key: &OwnerKey) -> Self {
        Self::new(owner_key.value().to_string(), String::from("owner"))
    }
}

/// Represents the reason or trigger for an action.
///
/// A cause describes why a state change was initiated, such as a click or a
/// drag-and-drop gesture in the roster UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, event ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AssignVolunteer`", "`FinalizeCheckin`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// Collection sizes of a roster at one point in time.
///
/// Audit events record these before and after every transition. They are
/// deliberately aggregate counts: the full roster is stored separately as a
/// snapshot document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Number of athlete records.
    pub athletes: usize,
    /// Number of volunteer records.
    pub volunteers: usize,
    /// Number of athlete-namespace roles.
    pub athlete_roles: usize,
    /// Number of volunteer-namespace roles.
    pub volunteer_roles: usize,
    /// Number of checked-in athletes.
    pub checked_in_athletes: usize,
    /// Number of checked-in volunteers.
    pub checked_in_volunteers: usize,
    /// Number of athletes with at least one assigned volunteer.
    pub assigned_athletes: usize,
    /// Total athlete-to-volunteer assignment links.
    pub assignment_links: usize,
    /// Total athlete-to-volunteer history links.
    pub history_links: usize,
}

impl StateSnapshot {
    /// Renders the snapshot as a compact `key=value` summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "athletes={},volunteers={},athlete_roles={},volunteer_roles={},\
             checked_in_athletes={},checked_in_volunteers={},assigned_athletes={},\
             assignment_links={},history_links={}",
            self.athletes,
            self.volunteers,
            self.athlete_roles,
            self.volunteer_roles,
            self.checked_in_athletes,
            self.checked_in_volunteers,
            self.assigned_athletes,
            self.assignment_links,
            self.history_links
        )
    }
}

/// An immutable audit event representing a roster transition.
///
/// Every successful state change produces exactly one audit event capturing:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The roster shape before and after the transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The identifier assigned when the event is stored.
    /// `None` until persisted.
    pub event_id: Option<i64>,
    /// The roster owner this event belongs to, once known.
    pub owner_key: Option<OwnerKey>,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new, unscoped and unpersisted `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            owner_key: None,
            actor,
            cause,
            action,
            before,
            after,
        }
    }

    /// Returns this event scoped to a roster owner.
    #[must_use]
    pub fn with_owner(mut self, owner_key: OwnerKey) -> Self {
        self.owner_key = Some(owner_key);
        self
    }

    /// Returns this event with its persisted identifier.
    #[must_use]
    pub const fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}
