//! Wildcard pattern matching for Ethereum addresses.
//!
//! Pattern syntax:
//! - `*` matches any run of characters (including none)
//! - `#` matches any digit (0-9)
//! - `@` matches any hex letter (a-f)
//! - anything else is a case-insensitive literal
//!
//! Comma-separated patterns form an alternation: a candidate matches the set
//! if it matches any one of them.

mod pattern;

pub use pattern::{Pattern, PatternError, PatternSet};
