//! # Ports Layer
//!
//! The driving port the fee router uses to authenticate submissions.

pub mod inbound;
