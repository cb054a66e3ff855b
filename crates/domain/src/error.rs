// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{AthleteId, EntityKind, VolunteerId};

/// Broad classification of domain errors.
///
/// Callers use this to decide how to report a failure without matching on
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A required text field was empty or malformed.
    Validation,
    /// A uniquely named item already exists.
    Duplicate,
    /// The operation targets an id that does not exist.
    NotFound,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An entity name is empty or invalid.
    InvalidName {
        /// The kind of entity being named.
        kind: EntityKind,
        /// Why the name was rejected.
        reason: String,
    },
    /// A role name is empty or invalid.
    InvalidRoleName {
        /// The role namespace.
        namespace: EntityKind,
        /// Why the name was rejected.
        reason: String,
    },
    /// A role with the same name already exists in the namespace.
    DuplicateRole {
        /// The role namespace.
        namespace: EntityKind,
        /// The duplicate name.
        name: String,
    },
    /// The athlete does not exist.
    AthleteNotFound(AthleteId),
    /// The volunteer does not exist.
    VolunteerNotFound(VolunteerId),
    /// The entity kind string is not recognised.
    InvalidEntityKind(String),
    /// The owner key is empty or invalid.
    InvalidOwnerKey(String),
}

impl DomainError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::InvalidRoleName { .. }
            | Self::InvalidEntityKind(_)
            | Self::InvalidOwnerKey(_) => ErrorCategory::Validation,
            Self::DuplicateRole { .. } => ErrorCategory::Duplicate,
            Self::AthleteNotFound(_) | Self::VolunteerNotFound(_) => ErrorCategory::NotFound,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { kind, reason } => write!(f, "Invalid {kind} name: {reason}"),
            Self::InvalidRoleName { namespace, reason } => {
                write!(f, "Invalid {namespace} role name: {reason}")
            }
            Self::DuplicateRole { namespace, name } => {
                write!(f, "Role '{name}' already exists in the {namespace} namespace")
            }
            Self::AthleteNotFound(id) => write!(f, "Athlete '{id}' not found"),
            Self::VolunteerNotFound(id) => write!(f, "Volunteer '{id}' not found"),
            Self::InvalidEntityKind(kind) => {
                write!(
                    f,
                    "Invalid entity kind: '{kind}'. Must be 'athlete' or 'volunteer'"
                )
            }
            Self::InvalidOwnerKey(msg) => write!(f, "Invalid owner key: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
