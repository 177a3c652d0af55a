use roster_core::{Gender, Person, PersonList};

/// Build a valid Latin-script person, panicking on invalid test input
#[allow(dead_code)]
pub fn latin_person(name: &str, surname: &str, age: i32) -> Person {
    Person::new(name, surname, age, Gender::Male).unwrap()
}

/// Build a list of persons named after `names`, all with surname "Test"
#[allow(dead_code)]
pub fn list_of(names: &[&str]) -> PersonList {
    names
        .iter()
        .map(|name| latin_person(name, "Test", 30))
        .collect()
}
