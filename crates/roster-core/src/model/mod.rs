pub mod gender;
pub mod names;
pub mod person;
pub mod script;

pub use gender::Gender;
pub use person::{Person, PersonBuilder, DEFAULT_AGE, MAX_AGE, MIN_AGE};
pub use script::Script;
