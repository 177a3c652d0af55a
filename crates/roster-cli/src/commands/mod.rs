//! CLI command handlers
//!
//! Each handler owns the lifecycle logging of its operation
//! (`log_op_start!` / `log_op_end!` / `log_op_error!`).

pub mod demo;
pub mod person;
pub mod random;
