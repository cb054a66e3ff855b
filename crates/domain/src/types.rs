// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::id::generate_id;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a string-backed identifier newtype.
///
/// Each identifier kind gets its own type so athlete, volunteer and role ids
/// cannot be mixed up at call sites. All of them serialize as bare strings.
macro_rules! identifier_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing identifier value.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self(value.to_string())
            }

            /// Creates a fresh, randomly generated identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

identifier_type!(
    /// Identifies an athlete within one owner's roster.
    AthleteId
);

identifier_type!(
    /// Identifies a volunteer (or coach) within one owner's roster.
    VolunteerId
);

identifier_type!(
    /// Identifies a role within its namespace.
    RoleId
);

/// The two kinds of roster entity.
///
/// The kind also names the role namespace: athlete roles and volunteer roles
/// are independent partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A participant in the practice.
    Athlete,
    /// A volunteer or coach who works with athletes.
    Volunteer,
}

impl EntityKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Athlete => "athlete",
            Self::Volunteer => "volunteer",
        }
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "athlete" => Ok(Self::Athlete),
            "volunteer" => Ok(Self::Volunteer),
            _ => Err(DomainError::InvalidEntityKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reference to a roster entity tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    /// An athlete reference.
    Athlete(AthleteId),
    /// A volunteer reference.
    Volunteer(VolunteerId),
}

impl EntityRef {
    /// Returns the kind of the referenced entity.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Athlete(_) => EntityKind::Athlete,
            Self::Volunteer(_) => EntityKind::Volunteer,
        }
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub fn id_value(&self) -> &str {
        match self {
            Self::Athlete(id) => id.value(),
            Self::Volunteer(id) => id.value(),
        }
    }

    /// Builds a reference from a kind and a raw identifier value.
    #[must_use]
    pub fn from_parts(kind: EntityKind, id: &str) -> Self {
        match kind {
            EntityKind::Athlete => Self::Athlete(AthleteId::new(id)),
            EntityKind::Volunteer => Self::Volunteer(VolunteerId::new(id)),
        }
    }
}

/// A named role definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// The role identifier, unique within its namespace.
    pub id: RoleId,
    /// The display name, unique within its namespace (case-sensitive).
    pub name: String,
}

impl Role {
    /// Creates a new role.
    #[must_use]
    pub const fn new(id: RoleId, name: String) -> Self {
        Self { id, name }
    }
}

/// Shared behaviour of athletes and volunteers.
///
/// Role cascades and lookups are written once against this trait and
/// instantiated per entity kind.
pub trait RosterEntity {
    /// The identifier type of this entity.
    type Id: Clone + Eq;

    /// The role namespace this entity draws from.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the role ids carried by this entity.
    fn roles(&self) -> &[RoleId];

    /// Returns the role ids for in-place modification.
    fn roles_mut(&mut self) -> &mut Vec<RoleId>;

    /// Checks whether this entity carries the given role.
    fn has_role(&self, role_id: &RoleId) -> bool {
        self.roles().contains(role_id)
    }
}

/// An athlete on the roster.
///
/// Athlete notes are not part of the record; they live in the roster's
/// notes map keyed by athlete id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Athlete {
    /// The athlete identifier.
    pub id: AthleteId,
    /// The athlete's display name.
    pub name: String,
    /// Athlete-namespace role ids, without duplicates.
    pub roles: Vec<RoleId>,
}

impl Athlete {
    /// Creates a new athlete record.
    #[must_use]
    pub const fn new(id: AthleteId, name: String, roles: Vec<RoleId>) -> Self {
        Self { id, name, roles }
    }
}

impl RosterEntity for Athlete {
    type Id = AthleteId;

    const KIND: EntityKind = EntityKind::Athlete;

    fn id(&self) -> &AthleteId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> &[RoleId] {
        &self.roles
    }

    fn roles_mut(&mut self) -> &mut Vec<RoleId> {
        &mut self.roles
    }
}

/// A volunteer or coach on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    /// The volunteer identifier.
    pub id: VolunteerId,
    /// The volunteer's display name.
    pub name: String,
    /// Volunteer-namespace role ids, without duplicates.
    pub roles: Vec<RoleId>,
}

impl Volunteer {
    /// Creates a new volunteer record.
    #[must_use]
    pub const fn new(id: VolunteerId, name: String, roles: Vec<RoleId>) -> Self {
        Self { id, name, roles }
    }
}

impl RosterEntity for Volunteer {
    type Id = VolunteerId;

    const KIND: EntityKind = EntityKind::Volunteer;

    fn id(&self) -> &VolunteerId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> &[RoleId] {
        &self.roles
    }

    fn roles_mut(&mut self) -> &mut Vec<RoleId> {
        &mut self.roles
    }
}

/// The opaque per-user key under which a roster is stored.
///
/// Supplied by the identity provider when a session becomes active.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerKey(String);

impl OwnerKey {
    /// Creates an owner key.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidOwnerKey(String::from(
                "Owner key cannot be empty",
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OwnerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
