// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use practice_roster::CoreError;
use practice_roster_domain::DomainError;
use practice_roster_persistence::PersistenceError;

use crate::session::SessionError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The owner has no active session.
    NoActiveSession {
        /// The owner that was addressed.
        owner_key: String,
    },
    /// The owner already has an active session.
    SessionAlreadyActive {
        /// The owner that was addressed.
        owner_key: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::NoActiveSession { owner_key } => {
                write!(f, "No active session for owner '{owner_key}'")
            }
            Self::SessionAlreadyActive { owner_key } => {
                write!(f, "A session is already active for owner '{owner_key}'")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::AlreadyActive(owner_key) => Self::SessionAlreadyActive {
                owner_key: owner_key.value().to_string(),
            },
            SessionError::NotActive(owner_key) => Self::NoActiveSession {
                owner_key: owner_key.value().to_string(),
            },
            SessionError::LoadFailed { .. } => Self::Internal {
                message: err.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidName { .. } => ApiError::InvalidInput {
            field: String::from("name"),
            message: err.to_string(),
        },
        DomainError::InvalidRoleName { .. } => ApiError::InvalidInput {
            field: String::from("role_name"),
            message: err.to_string(),
        },
        DomainError::DuplicateRole { .. } => ApiError::DomainRuleViolation {
            rule: String::from("unique_role_name"),
            message: err.to_string(),
        },
        DomainError::AthleteNotFound(ref athlete_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Athlete"),
            message: format!("Athlete '{athlete_id}' does not exist"),
        },
        DomainError::VolunteerNotFound(ref volunteer_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Volunteer"),
            message: format!("Volunteer '{volunteer_id}' does not exist"),
        },
        DomainError::InvalidEntityKind(_) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: err.to_string(),
        },
        DomainError::InvalidOwnerKey(_) => ApiError::InvalidInput {
            field: String::from("owner_key"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

/// Translates a persistence error into an API error.
///
/// Every storage failure surfaces as an internal error.
#[must_use]
pub fn translate_persistence_error(err: &PersistenceError) -> ApiError {
    ApiError::Internal {
        message: format!("Persistence error: {err}"),
    }
}
