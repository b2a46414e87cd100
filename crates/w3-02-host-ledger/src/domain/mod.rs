//! # Domain Layer
//!
//! Plain data describing calls, blocks and log entries.

pub mod addressing;
pub mod entities;
