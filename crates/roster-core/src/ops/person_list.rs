use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, RosterError};
use crate::model::Person;

/// Ordered, index-addressed list of persons
///
/// A thin wrapper over `Vec<Person>`: insertion order is preserved,
/// duplicates are allowed, and valid indices are `0..count()`.
/// Not thread-safe - designed for single-owner, single-threaded use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonList {
    persons: Vec<Person>,
}

impl PersonList {
    /// Create a new empty PersonList
    pub fn new() -> Self {
        Self {
            persons: Vec::new(),
        }
    }

    /// Append a person; its index is the previous count
    pub fn add(&mut self, person: Person) {
        self.persons.push(person);
        tracing::debug!(index = self.persons.len() - 1, "added person");
    }

    /// Number of persons in the list
    pub fn count(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Get the person at `index`
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= count()`.
    pub fn get(&self, index: usize) -> Result<&Person> {
        self.persons
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Remove and return the person at `index`, shifting later persons left
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= count()`; the list is unchanged.
    pub fn remove_at(&mut self, index: usize) -> Result<Person> {
        if index >= self.persons.len() {
            return Err(self.out_of_range(index));
        }

        let removed = self.persons.remove(index);
        tracing::debug!(index, list_len = self.persons.len(), "removed person");
        Ok(removed)
    }

    /// Remove every person
    pub fn clear(&mut self) {
        tracing::debug!(removed = self.persons.len(), "cleared list");
        self.persons.clear();
    }

    /// Iterate over persons in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    fn out_of_range(&self, index: usize) -> RosterError {
        RosterError::IndexOutOfRange {
            index,
            count: self.persons.len(),
        }
    }
}

impl<'a> IntoIterator for &'a PersonList {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}

impl FromIterator<Person> for PersonList {
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        Self {
            persons: iter.into_iter().collect(),
        }
    }
}

/// One person per line, or `List is empty.` for an empty list
impl fmt::Display for PersonList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.persons.is_empty() {
            return writeln!(f, "List is empty.");
        }
        for person in &self.persons {
            writeln!(f, "{}", person)?;
        }
        Ok(())
    }
}
