// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque identifier generation.
//!
//! Identifiers only need to be unique within one owner's roster. They are
//! built from a random `u64` rendered in base 36 behind a leading underscore,
//! which keeps them compatible with documents written by earlier versions of
//! the roster (`_` followed by lowercase alphanumerics).

/// Number of base-36 digits in a generated identifier.
const ID_DIGITS: usize = 12;

/// Radix used to render identifiers.
const ID_RADIX: u64 = 36;

/// Generates a fresh opaque identifier.
///
/// No counters are persisted and no global coordination takes place; callers
/// that need a hard uniqueness guarantee within a collection must check for
/// collisions themselves.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn generate_id() -> String {
    let mut value: u64 = rand::random::<u64>();
    let mut id: String = String::with_capacity(ID_DIGITS + 1);
    id.push('_');

    for _ in 0..ID_DIGITS {
        // remainder is always below the radix
        let digit: u32 = (value % ID_RADIX) as u32;
        id.push(char::from_digit(digit, 36).unwrap_or('0'));
        value /= ID_RADIX;
    }

    id
}
