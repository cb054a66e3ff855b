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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod id;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::{DomainError, ErrorCategory};
pub use id::generate_id;
pub use types::{
    Athlete, AthleteId, EntityKind, EntityRef, OwnerKey, Role, RoleId, RosterEntity, Volunteer,
    VolunteerId,
};
pub use validation::{
    normalize_name, normalize_notes, normalize_role_ids, normalize_role_name,
    validate_role_name_unique,
};
