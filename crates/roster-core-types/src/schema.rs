//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Person fields
pub const FIELD_PERSON_FIELD: &str = "field";
pub const FIELD_AGE: &str = "age";
pub const FIELD_GENDER: &str = "gender";

// List addressing
pub const FIELD_INDEX: &str = "index";
pub const FIELD_LIST_LEN: &str = "list_len";

// Random generation
pub const FIELD_SEED: &str = "seed";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
