//! Business logic and trait definitions for Lucy.
//!
//! This crate defines the "ports" (the transcript store and completion
//! provider traits) that the infrastructure layer implements, and the
//! conversation controller built on top of them. It depends only on
//! `lucy-types` -- never on `lucy-infra` or any database/IO crate.

pub mod completion;
pub mod conversation;
pub mod transcript;
