// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `owners`: Owner lookups
//! - `snapshots`: Snapshot loading
//! - `audit`: Audit timeline retrieval

pub mod audit;
pub mod owners;
pub mod snapshots;

pub use audit::get_audit_timeline;
pub use owners::lookup_owner_id;
pub use snapshots::load_snapshot;
