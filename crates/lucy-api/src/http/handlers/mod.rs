//! HTTP request handlers for the widget API.

pub mod completion;
pub mod messages;
