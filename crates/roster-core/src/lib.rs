//! Roster Core - validated person records and ordered person lists
//!
//! This crate provides:
//! - `Person`: name, surname, age and gender, validated on every assignment
//! - `Script` detection (Latin / Cyrillic) and title-case normalisation
//! - `PersonList`: an ordered, index-addressed list of persons
//! - A random person factory driven by an injectable RNG
//! - The error facility (`RosterError`, `ExError`) and logging facility

pub mod demo;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use roster_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, PersonField, Result, RosterError};
pub use model::{Gender, Person, PersonBuilder, Script, DEFAULT_AGE, MAX_AGE, MIN_AGE};
pub use ops::PersonList;
