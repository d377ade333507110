//! HTTP surface for the Lucy widget API.

pub mod error;
pub mod handlers;
pub mod router;
