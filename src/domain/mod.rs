//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, roles, timestamps, errors)
//! - `schedule` - Weekly recurrences, calendar views, and recurring event expansion
//! - `classroom` - Classroom aggregate, meeting pattern, and enrollment
//! - `user` - Registered accounts and email addresses

pub mod classroom;
pub mod foundation;
pub mod schedule;
pub mod user;
