// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role registry: the athlete and volunteer role namespaces.

use crate::error::CoreError;
use crate::outcome::RoleDeletion;
use crate::state::RosterState;
use practice_roster_domain::{
    EntityKind, Role, RoleId, RosterEntity, normalize_role_name, validate_role_name_unique,
};

impl RosterState {
    /// Defines a new role in a namespace.
    ///
    /// # Arguments
    ///
    /// * `namespace` - The namespace the role belongs to
    /// * `name` - The role name (trimmed before use)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - A role with the same name already exists in the namespace
    pub fn add_role(&mut self, namespace: EntityKind, name: &str) -> Result<RoleId, CoreError> {
        let name: String = normalize_role_name(namespace, name)?;
        validate_role_name_unique(namespace, &name, self.roles(namespace))?;

        let role_id: RoleId = self.fresh_role_id();
        self.roles_mut(namespace)
            .push(Role::new(role_id.clone(), name));

        Ok(role_id)
    }

    /// Deletes a role and removes it from every entity in its namespace.
    ///
    /// Deleting an unknown role succeeds and affects nothing. Any
    /// confirmation for roles still in use happens before this is called;
    /// see [`RosterState::role_usage`].
    pub fn delete_role(&mut self, namespace: EntityKind, role_id: &RoleId) -> RoleDeletion {
        let roles: &mut Vec<Role> = self.roles_mut(namespace);
        let before: usize = roles.len();
        roles.retain(|role| &role.id != role_id);
        let existed: bool = roles.len() != before;

        let removed_from_entity_count: usize = match namespace {
            EntityKind::Athlete => strip_role(&mut self.athletes, role_id),
            EntityKind::Volunteer => strip_role(&mut self.volunteers, role_id),
        };

        RoleDeletion {
            existed,
            removed_from_entity_count,
        }
    }

    /// Returns the roles defined in a namespace, in creation order.
    #[must_use]
    pub fn roles(&self, namespace: EntityKind) -> &[Role] {
        match namespace {
            EntityKind::Athlete => &self.athlete_roles,
            EntityKind::Volunteer => &self.volunteer_roles,
        }
    }

    /// Looks up a role by id within a namespace.
    #[must_use]
    pub fn find_role(&self, namespace: EntityKind, role_id: &RoleId) -> Option<&Role> {
        self.roles(namespace).iter().find(|role| &role.id == role_id)
    }

    /// Counts the entities in a namespace that carry a role.
    ///
    /// Callers use this to decide whether to ask for confirmation before
    /// deleting the role.
    #[must_use]
    pub fn role_usage(&self, namespace: EntityKind, role_id: &RoleId) -> usize {
        match namespace {
            EntityKind::Athlete => count_with_role(&self.athletes, role_id),
            EntityKind::Volunteer => count_with_role(&self.volunteers, role_id),
        }
    }

    /// Resolves role ids to role names, skipping ids that no longer exist.
    #[must_use]
    pub fn role_names(&self, namespace: EntityKind, role_ids: &[RoleId]) -> Vec<&str> {
        role_ids
            .iter()
            .filter_map(|role_id| self.find_role(namespace, role_id))
            .map(|role| role.name.as_str())
            .collect()
    }

    const fn roles_mut(&mut self, namespace: EntityKind) -> &mut Vec<Role> {
        match namespace {
            EntityKind::Athlete => &mut self.athlete_roles,
            EntityKind::Volunteer => &mut self.volunteer_roles,
        }
    }
}

/// Removes a role id from every entity, returning how many entities lost it.
fn strip_role<E: RosterEntity>(entities: &mut [E], role_id: &RoleId) -> usize {
    let mut affected: usize = 0;
    for entity in entities.iter_mut().filter(|entity| entity.has_role(role_id)) {
        entity.roles_mut().retain(|id| id != role_id);
        affected += 1;
    }
    affected
}

fn count_with_role<E: RosterEntity>(entities: &[E], role_id: &RoleId) -> usize {
    entities
        .iter()
        .filter(|entity| entity.has_role(role_id))
        .count()
}
