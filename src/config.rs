/*!
This module contains global configuration constants for the comparison chain.

Only the sign of a chain result is part of the contract. The magnitudes are fixed here so that
results are stable across releases, but callers should not depend on them.
*/

/// The result reported by a chain that has not seen a differentiating key.
pub const EQUAL_RESULT: i32 = 0;

/// The result reported by a chain that decided the left record sorts first.
pub const LESS_RESULT: i32 = -1;

/// The result reported by a chain that decided the left record sorts last.
pub const GREATER_RESULT: i32 = 1;
