use std::fmt;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::gender::Gender;
use super::names::{FEMALE_NAMES, MALE_NAMES, SURNAMES};
use super::script::{self, Script};
use crate::errors::{PersonField, Result, RosterError};

/// Minimum accepted age (inclusive)
pub const MIN_AGE: i32 = 0;

/// Maximum accepted age (inclusive)
pub const MAX_AGE: i32 = 122;

/// Age given to a person when none is supplied
pub const DEFAULT_AGE: i32 = 18;

/// Person - a validated name, surname, age and gender
///
/// Every value held by a `Person` has passed validation: name and surname are
/// empty or a single-script word (stored title-cased), both non-empty names
/// share one script, and the age lies in `[MIN_AGE, MAX_AGE]`.
///
/// Construct through [`Person::new`] or [`Person::builder`]; mutate through
/// the setters, which leave the person untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    name: String,
    surname: String,
    age: i32,
    gender: Gender,
}

impl Person {
    /// Create a new Person from all four values
    ///
    /// # Errors
    /// * `InvalidFormat` - If name or surname is not a single-script word
    /// * `AgeOutOfRange` - If age is outside `[MIN_AGE, MAX_AGE]`
    /// * `LanguageMismatch` - If name and surname use different scripts
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        age: i32,
        gender: Gender,
    ) -> Result<Self> {
        Self::builder()
            .name(name)
            .surname(surname)
            .age(age)
            .gender(gender)
            .build()
    }

    /// Start staging a Person; unset values keep their defaults
    pub fn builder() -> PersonBuilder {
        PersonBuilder::default()
    }

    /// Pick a random person using the supplied RNG
    ///
    /// Gender is uniform over both genders, the name comes from the list
    /// matching the gender and the surname from a shared list. Age is drawn
    /// from `[MIN_AGE, MAX_AGE)`, so `MAX_AGE` itself is never produced.
    ///
    /// # Errors
    /// Propagates validation errors from construction; the built-in word
    /// lists always validate.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        let gender = if rng.random_range(0..2) == 0 {
            Gender::Male
        } else {
            Gender::Female
        };

        let names: &[&str] = match gender {
            Gender::Male => &MALE_NAMES,
            Gender::Female => &FEMALE_NAMES,
        };
        let name = names.choose(rng).copied().unwrap_or_default();
        let surname = SURNAMES.choose(rng).copied().unwrap_or_default();
        let age = rng.random_range(MIN_AGE..MAX_AGE);

        tracing::debug!(name, surname, age, gender = %gender, "picked random person");

        Self::new(name, surname, age, gender)
    }

    /// Pick a random person using the thread-local RNG
    ///
    /// # Errors
    /// See [`Person::random`].
    pub fn random_thread_local() -> Result<Self> {
        Self::random(&mut rand::rng())
    }

    /// Normalised name (may be empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalised surname (may be empty)
    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Script shared by the name pair, `Unknown` when both are empty
    pub fn script(&self) -> Script {
        [&self.name, &self.surname]
            .into_iter()
            .filter_map(|value| Script::detect(value))
            .find(|script| *script != Script::Unknown)
            .unwrap_or(Script::Unknown)
    }

    /// Set the name, normalising it to title case
    ///
    /// # Errors
    /// * `InvalidFormat` - If the value is not a single-script word
    /// * `LanguageMismatch` - If the current surname uses another script
    pub fn set_name(&mut self, value: &str) -> Result<()> {
        let (name_script, normalized) = normalize(PersonField::Name, value)?;
        let surname_script = script::classify(PersonField::Surname, &self.surname)?;
        ensure_same_script(name_script, surname_script)?;

        self.name = normalized;
        Ok(())
    }

    /// Set the surname, normalising it to title case
    ///
    /// # Errors
    /// * `InvalidFormat` - If the value is not a single-script word
    /// * `LanguageMismatch` - If the current name uses another script
    pub fn set_surname(&mut self, value: &str) -> Result<()> {
        let (surname_script, normalized) = normalize(PersonField::Surname, value)?;
        let name_script = script::classify(PersonField::Name, &self.name)?;
        ensure_same_script(name_script, surname_script)?;

        self.surname = normalized;
        Ok(())
    }

    /// Set the age
    ///
    /// # Errors
    /// * `AgeOutOfRange` - If age is outside `[MIN_AGE, MAX_AGE]`
    pub fn set_age(&mut self, age: i32) -> Result<()> {
        check_age(age)?;
        self.age = age;
        Ok(())
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.gender = gender;
    }

    /// Re-check the cross-field invariant on the whole person
    ///
    /// Both names are re-classified and, when both are non-empty, must share
    /// a script. The result does not depend on which name was set first.
    ///
    /// # Errors
    /// * `InvalidFormat` - If a stored name is not a single-script word
    /// * `LanguageMismatch` - If the two names use different scripts
    pub fn validate(&self) -> Result<()> {
        let name_script = script::classify(PersonField::Name, &self.name)?;
        let surname_script = script::classify(PersonField::Surname, &self.surname)?;
        ensure_same_script(name_script, surname_script)
    }
}

impl Default for Person {
    fn default() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::default(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}; Age - {}; Gender - {}",
            self.name, self.surname, self.age, self.gender
        )
    }
}

/// Staged construction of a [`Person`]
///
/// Values are only checked in [`PersonBuilder::build`], after all of them are
/// known, so an invalid person can never be observed.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    name: String,
    surname: String,
    age: i32,
    gender: Gender,
}

impl Default for PersonBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            surname: String::new(),
            age: DEFAULT_AGE,
            gender: Gender::default(),
        }
    }
}

impl PersonBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Validate the staged values and produce a Person
    ///
    /// Fields are checked in the order name, surname, age; the cross-field
    /// script check runs last.
    ///
    /// # Errors
    /// * `InvalidFormat` - If name or surname is not a single-script word
    /// * `AgeOutOfRange` - If age is outside `[MIN_AGE, MAX_AGE]`
    /// * `LanguageMismatch` - If name and surname use different scripts
    pub fn build(self) -> Result<Person> {
        let (_, name) = normalize(PersonField::Name, &self.name)?;
        let (_, surname) = normalize(PersonField::Surname, &self.surname)?;
        check_age(self.age)?;

        let person = Person {
            name,
            surname,
            age: self.age,
            gender: self.gender,
        };
        person.validate()?;

        Ok(person)
    }
}

/// Wire shape of a person; deserialisation routes it through the builder
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonRecord {
    name: String,
    surname: String,
    age: i32,
    gender: Gender,
}

impl TryFrom<PersonRecord> for Person {
    type Error = RosterError;

    fn try_from(record: PersonRecord) -> Result<Self> {
        Person::new(record.name, record.surname, record.age, record.gender)
    }
}

impl From<Person> for PersonRecord {
    fn from(person: Person) -> Self {
        Self {
            name: person.name,
            surname: person.surname,
            age: person.age,
            gender: person.gender,
        }
    }
}

fn normalize(field: PersonField, value: &str) -> Result<(Script, String)> {
    let detected = script::classify(field, value).inspect_err(|_| {
        tracing::debug!(field = %field, value, "rejected malformed value");
    })?;
    Ok((detected, script::title_case(value)))
}

fn ensure_same_script(name_script: Script, surname_script: Script) -> Result<()> {
    if name_script == Script::Unknown
        || surname_script == Script::Unknown
        || name_script == surname_script
    {
        return Ok(());
    }

    Err(RosterError::LanguageMismatch {
        name_script,
        surname_script,
    })
}

fn check_age(age: i32) -> Result<()> {
    if (MIN_AGE..=MAX_AGE).contains(&age) {
        Ok(())
    } else {
        Err(RosterError::AgeOutOfRange {
            value: age,
            min: MIN_AGE,
            max: MAX_AGE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_person() {
        let person = Person::default();
        assert_eq!(person.name(), "");
        assert_eq!(person.surname(), "");
        assert_eq!(person.age(), DEFAULT_AGE);
        assert_eq!(person.gender(), Gender::Male);
        assert!(person.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults_match_default_person() {
        assert_eq!(Person::builder().build().unwrap(), Person::default());
    }

    #[test]
    fn test_display_format() {
        let person = Person::new("Roboute", "Crybaby", 19, Gender::Male).unwrap();
        assert_eq!(person.to_string(), "Roboute Crybaby; Age - 19; Gender - Male");
    }

    #[test]
    fn test_script_of_pair() {
        assert_eq!(Person::default().script(), Script::Unknown);
        let person = Person::new("", "Иванов", 30, Gender::Male).unwrap();
        assert_eq!(person.script(), Script::Cyrillic);
    }

    #[test]
    fn test_ensure_same_script_ignores_unknown() {
        assert!(ensure_same_script(Script::Unknown, Script::Cyrillic).is_ok());
        assert!(ensure_same_script(Script::Latin, Script::Unknown).is_ok());
        assert!(ensure_same_script(Script::Latin, Script::Cyrillic).is_err());
    }

    #[test]
    fn test_check_age_bounds() {
        assert!(check_age(MIN_AGE).is_ok());
        assert!(check_age(MAX_AGE).is_ok());
        assert!(check_age(MIN_AGE - 1).is_err());
        assert!(check_age(MAX_AGE + 1).is_err());
    }
}
