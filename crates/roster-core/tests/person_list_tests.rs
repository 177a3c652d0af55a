mod common;

use common::{latin_person, list_of};
use roster_core::{PersonList, RosterError};

// ===== ADD / GET TESTS =====

#[test]
fn test_add_then_get_last_returns_added_person() {
    let mut list = list_of(&["Alpha", "Beta"]);
    let person = latin_person("Gamma", "Ray", 51);

    list.add(person.clone());

    let last = list.get(list.count() - 1).unwrap();
    assert_eq!(last, &person);
}

#[test]
fn test_add_index_equals_prior_count() {
    let mut list = PersonList::new();
    for (expected_index, name) in ["Alpha", "Beta", "Gamma"].iter().enumerate() {
        assert_eq!(list.count(), expected_index);
        list.add(latin_person(name, "Test", 20));
        assert_eq!(list.get(expected_index).unwrap().name(), *name);
    }
}

#[test]
fn test_duplicates_are_kept() {
    let person = latin_person("Alpha", "Test", 20);
    let mut list = PersonList::new();
    list.add(person.clone());
    list.add(person.clone());

    assert_eq!(list.count(), 2);
    assert_eq!(list.get(0).unwrap(), list.get(1).unwrap());
}

#[test]
fn test_empty_list_get_and_remove_fail() {
    let mut list = PersonList::new();

    assert_eq!(
        list.get(0),
        Err(RosterError::IndexOutOfRange { index: 0, count: 0 })
    );
    assert_eq!(
        list.remove_at(0),
        Err(RosterError::IndexOutOfRange { index: 0, count: 0 })
    );
}

#[test]
fn test_get_past_end_fails() {
    let list = list_of(&["Alpha", "Beta", "Gamma"]);
    assert!(matches!(
        list.get(3),
        Err(RosterError::IndexOutOfRange { index: 3, count: 3 })
    ));
    assert!(list.get(usize::MAX).is_err());
}

// ===== REMOVE TESTS =====

#[test]
fn test_remove_at_shifts_following_persons() {
    let mut list = list_of(&["Alpha", "Beta", "Gamma"]);

    let removed = list.remove_at(1).unwrap();

    assert_eq!(removed.name(), "Beta");
    assert_eq!(list.count(), 2);
    assert_eq!(list.get(0).unwrap().name(), "Alpha");
    assert_eq!(list.get(1).unwrap().name(), "Gamma");
}

#[test]
fn test_remove_at_out_of_range_keeps_order() {
    let mut list = list_of(&["Alpha", "Beta"]);
    let before = list.clone();

    assert!(list.remove_at(2).is_err());
    assert_eq!(list, before);
}

#[test]
fn test_remove_first_and_last() {
    let mut list = list_of(&["Alpha", "Beta", "Gamma"]);

    list.remove_at(2).unwrap();
    list.remove_at(0).unwrap();

    assert_eq!(list.count(), 1);
    assert_eq!(list.get(0).unwrap().name(), "Beta");
}

// ===== CLEAR TESTS =====

#[test]
fn test_clear_empties_list() {
    let mut list = list_of(&["Alpha", "Beta", "Gamma"]);

    list.clear();

    assert_eq!(list.count(), 0);
    assert!(list.is_empty());
    assert!(matches!(
        list.get(0),
        Err(RosterError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_clear_on_empty_list_is_noop() {
    let mut list = PersonList::new();
    list.clear();
    assert_eq!(list.count(), 0);
}

// ===== ITERATION / RENDERING TESTS =====

#[test]
fn test_iteration_follows_index_order() {
    let list = list_of(&["Alpha", "Beta", "Gamma"]);
    let names: Vec<_> = list.iter().map(|p| p.name().to_string()).collect();
    assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

    let mut via_ref = Vec::new();
    for person in &list {
        via_ref.push(person.name());
    }
    assert_eq!(via_ref, ["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_display_lists_one_person_per_line() {
    let list = list_of(&["Alpha", "Beta"]);
    assert_eq!(
        list.to_string(),
        "Alpha Test; Age - 30; Gender - Male\nBeta Test; Age - 30; Gender - Male\n"
    );
}

#[test]
fn test_copy_between_lists_is_independent() {
    let source = list_of(&["Alpha", "Beta"]);
    let mut target = PersonList::new();

    target.add(source.get(1).unwrap().clone());
    let mut copied = target.remove_at(0).unwrap();
    copied.set_age(99).unwrap();

    assert_eq!(source.get(1).unwrap().age(), 30);
}
