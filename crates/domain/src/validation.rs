// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{EntityKind, Role, RoleId};
use std::collections::HashSet;

/// Normalizes and validates an athlete or volunteer name.
///
/// # Arguments
///
/// * `kind` - The kind of entity being named (used in the error)
/// * `name` - The raw name as entered
///
/// # Returns
///
/// The name with surrounding whitespace removed.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn normalize_name(kind: EntityKind, name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();

    // Rule: name must not be empty
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName {
            kind,
            reason: String::from("Name cannot be empty"),
        });
    }

    Ok(trimmed.to_string())
}

/// Normalizes free-text athlete notes.
///
/// Notes are optional, so this never fails.
#[must_use]
pub fn normalize_notes(notes: &str) -> String {
    notes.trim().to_string()
}

/// Normalizes and validates a role name.
///
/// # Errors
///
/// Returns an error if the name is empty after trimming.
pub fn normalize_role_name(namespace: EntityKind, name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidRoleName {
            namespace,
            reason: String::from("Role name cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates that a role name is unique within its namespace.
///
/// Comparison is an exact, case-sensitive match against the stored names.
/// The name is expected to be normalized already.
///
/// # Arguments
///
/// * `namespace` - The namespace being checked
/// * `name` - The normalized candidate name
/// * `existing_roles` - The roles already defined in the namespace
///
/// # Errors
///
/// Returns an error if a role with the same name already exists.
pub fn validate_role_name_unique(
    namespace: EntityKind,
    name: &str,
    existing_roles: &[Role],
) -> Result<(), DomainError> {
    // Rule: within a namespace, role names must be unique
    if existing_roles.iter().any(|role| role.name == name) {
        return Err(DomainError::DuplicateRole {
            namespace,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Removes duplicate role ids, keeping the first occurrence of each.
///
/// Role ids on an entity model a set; order of first appearance is kept so
/// the stored list matches the selection order.
#[must_use]
pub fn normalize_role_ids(role_ids: Vec<RoleId>) -> Vec<RoleId> {
    let mut seen: HashSet<RoleId> = HashSet::with_capacity(role_ids.len());
    role_ids
        .into_iter()
        .filter(|role_id| seen.insert(role_id.clone()))
        .collect()
}
