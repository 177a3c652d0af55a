//! Scripted walkthrough of list operations
//!
//! Builds two lists ("olds" and "youth") and replays a fixed sequence of
//! add / copy / remove / clear steps, snapshotting both lists after each.

use std::fmt;

use crate::errors::Result;
use crate::model::{Gender, Person};
use crate::ops::PersonList;

/// State of both lists after one scripted step
#[derive(Debug, Clone, PartialEq)]
pub struct DemoStep {
    pub label: &'static str,
    pub olds: PersonList,
    pub youth: PersonList,
}

impl fmt::Display for DemoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(f, "List of olds:")?;
        write!(f, "{}", self.olds)?;
        writeln!(f, "List of youth:")?;
        write!(f, "{}", self.youth)
    }
}

/// Build the two starting lists
///
/// # Errors
/// Propagates person validation errors.
pub fn seed_lists() -> Result<(PersonList, PersonList)> {
    let olds = [
        Person::new("God", "Emperror", 122, Gender::Male)?,
        Person::new("Chorus", "Traitor", 70, Gender::Male)?,
        Person::new("Sangiunius", "Primarch", 66, Gender::Male)?,
    ]
    .into_iter()
    .collect();

    let youth = [
        Person::new("Roboute", "Crybaby", 19, Gender::Male)?,
        Person::new("Abaddon", "Vredina", 14, Gender::Male)?,
        Person::new("Celestina", "Holy", 7, Gender::Female)?,
    ]
    .into_iter()
    .collect();

    Ok((olds, youth))
}

/// Run the scripted walkthrough and return a snapshot per step
///
/// # Errors
/// Propagates person validation and list addressing errors.
pub fn run() -> Result<Vec<DemoStep>> {
    let (mut olds, mut youth) = seed_lists()?;
    let mut steps = Vec::with_capacity(5);

    let mut snapshot = |label: &'static str, olds: &PersonList, youth: &PersonList| {
        steps.push(DemoStep {
            label,
            olds: olds.clone(),
            youth: youth.clone(),
        });
    };

    snapshot("Initial lists", &olds, &youth);

    olds.add(Person::new("Magnus", "Nottraitor", 48, Gender::Male)?);
    snapshot("New person has been added to the 1st list", &olds, &youth);

    youth.add(olds.get(1)?.clone());
    snapshot(
        "Second person from the 1st list has been added to the 2nd list",
        &olds,
        &youth,
    );

    olds.remove_at(1)?;
    snapshot(
        "Second person from the 1st list has been removed",
        &olds,
        &youth,
    );

    youth.clear();
    snapshot("2nd list (youth) has been cleared", &olds, &youth);

    Ok(steps)
}
