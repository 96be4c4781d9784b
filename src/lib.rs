//! Immagreat - Education services backend
//!
//! Teachers create classrooms with a weekly meeting pattern; students are
//! enrolled by email. The calendar expands each visible classroom's
//! recurrence into concrete sessions over a day, week or month, and members
//! can obtain a token to join the classroom's live video room.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
