// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error translation tests.

use practice_roster::CoreError;
use practice_roster_domain::{AthleteId, DomainError, EntityKind, OwnerKey};
use practice_roster_persistence::PersistenceError;

use crate::{
    ApiError, SessionError, translate_core_error, translate_domain_error,
    translate_persistence_error,
};

#[test]
fn test_invalid_name_translates_to_invalid_input() {
    let err: ApiError = translate_domain_error(DomainError::InvalidName {
        kind: EntityKind::Volunteer,
        reason: String::from("Name cannot be empty"),
    });

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, ref message }
            if field == "name" && message.contains("volunteer")
    ));
}

#[test]
fn test_duplicate_role_translates_to_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::DuplicateRole {
        namespace: EntityKind::Athlete,
        name: String::from("Sprinter"),
    });

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, ref message }
            if rule == "unique_role_name" && message.contains("Sprinter")
    ));
}

#[test]
fn test_core_error_unwraps_domain_violation() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::AthleteNotFound(AthleteId::new("_a9")),
    ));

    assert_eq!(
        err,
        ApiError::ResourceNotFound {
            resource_type: String::from("Athlete"),
            message: String::from("Athlete '_a9' does not exist"),
        }
    );
}

#[test]
fn test_session_errors_translate_to_session_variants() {
    let owner_key: OwnerKey = OwnerKey::new("coach-123").unwrap();

    assert_eq!(
        ApiError::from(SessionError::NotActive(owner_key.clone())),
        ApiError::NoActiveSession {
            owner_key: String::from("coach-123")
        }
    );
    assert_eq!(
        ApiError::from(SessionError::AlreadyActive(owner_key.clone())),
        ApiError::SessionAlreadyActive {
            owner_key: String::from("coach-123")
        }
    );
    assert!(matches!(
        ApiError::from(SessionError::LoadFailed {
            owner_key,
            source: PersistenceError::SerializationError(String::from("bad json")),
        }),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_persistence_errors_are_internal() {
    let err: ApiError =
        translate_persistence_error(&PersistenceError::QueryFailed(String::from("locked")));

    assert_eq!(err.to_string(), "Internal error: Persistence error: Query failed: locked");
}
