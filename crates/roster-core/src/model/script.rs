use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PersonField, Result, RosterError};

/// Writing system a name or surname is written in
///
/// `Unknown` is reserved for the empty string; every non-empty accepted value
/// is either `Latin` or `Cyrillic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Unknown,
    Latin,
    Cyrillic,
}

impl Script {
    /// Script of a single letter, or `None` if `c` is not a letter of either script
    ///
    /// Latin covers ASCII `A-Z`/`a-z`. Cyrillic covers the basic block
    /// `А-я` (U+0410..=U+044F) plus `Ё`/`ё`.
    pub fn of_char(c: char) -> Option<Script> {
        match c {
            'A'..='Z' | 'a'..='z' => Some(Script::Latin),
            '\u{0410}'..='\u{044F}' | '\u{0401}' | '\u{0451}' => Some(Script::Cyrillic),
            _ => None,
        }
    }

    /// Detect the script of a whole value
    ///
    /// Returns `None` when the value is not one run of letters from a single
    /// script, optionally split once by an inner hyphen (`"Anna-Maria"`).
    pub fn detect(value: &str) -> Option<Script> {
        if value.is_empty() {
            return Some(Script::Unknown);
        }

        let mut script = None;
        let mut hyphens = 0;
        // Start as if a hyphen was just seen so a leading hyphen is rejected.
        let mut after_hyphen = true;

        for c in value.chars() {
            if c == '-' {
                hyphens += 1;
                if after_hyphen || hyphens > 1 {
                    return None;
                }
                after_hyphen = true;
                continue;
            }

            let current = Script::of_char(c)?;
            match script {
                None => script = Some(current),
                Some(existing) if existing != current => return None,
                Some(_) => {}
            }
            after_hyphen = false;
        }

        if after_hyphen {
            return None;
        }

        script
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Unknown => f.write_str("Unknown"),
            Script::Latin => f.write_str("Latin"),
            Script::Cyrillic => f.write_str("Cyrillic"),
        }
    }
}

/// Classify `value` for `field`, failing with `InvalidFormat` if it is not acceptable
///
/// # Errors
///
/// Returns `InvalidFormat` for digits, symbols, whitespace, mixed scripts,
/// leading/trailing hyphens, or more than one hyphen.
pub fn classify(field: PersonField, value: &str) -> Result<Script> {
    Script::detect(value).ok_or_else(|| RosterError::InvalidFormat {
        field,
        value: value.to_string(),
    })
}

/// Lowercase the whole value, then uppercase its first character
///
/// Hyphen-separated parts are not capitalised independently:
/// `"ivan-PETROV"` becomes `"Ivan-petrov"`.
pub fn title_case(value: &str) -> String {
    let lower = value.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
