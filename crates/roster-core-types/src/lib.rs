//! Core types shared across Roster facilities
//!
//! This crate holds the canonical schema constants used by the logging
//! facility and by anything that asserts on captured log events:
//!
//! - **Field keys**: component, op, event, duration, error classification
//! - **Event names**: start, end, end_error

pub mod schema;
