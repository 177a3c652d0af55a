use roster_core::errors::{ExError, ExErrorKind, PersonField, RosterError};
use roster_core::{Gender, Person, PersonList, Script};

#[test]
fn test_invalid_format_verifiable_by_kind() {
    let err = Person::new("N1ck", "Smith", 30, Gender::Male).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidFormat);
    assert_eq!(ex_err.code(), "ERR_INVALID_FORMAT");
    assert_eq!(ex_err.field(), Some(PersonField::Name));
    assert!(ex_err.message().contains("N1ck"));
}

#[test]
fn test_language_mismatch_conversion() {
    let err = RosterError::LanguageMismatch {
        name_script: Script::Latin,
        surname_script: Script::Cyrillic,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::LanguageMismatch);
    assert_eq!(ex_err.code(), "ERR_LANGUAGE_MISMATCH");
    assert_eq!(ex_err.message(), "Name is Latin, surname is Cyrillic");
}

#[test]
fn test_age_out_of_range_conversion() {
    let mut person = Person::default();
    let err = person.set_age(150).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Age value must be in range [0:122], got 150"
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::OutOfRange);
    assert_eq!(ex_err.op(), Some("set_age"));
}

#[test]
fn test_index_out_of_range_carries_index() {
    let list = PersonList::new();
    let err = list.get(5).unwrap_err();

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::IndexOutOfRange);
    assert_eq!(ex_err.code(), "ERR_INDEX_OUT_OF_RANGE");
    assert_eq!(ex_err.index(), Some(5));
    assert_ne!(ex_err.kind(), ExErrorKind::OutOfRange);
}

#[test]
fn test_serialization_error_from_serde_json() {
    let json_err = serde_json::from_str::<Person>("{").unwrap_err();
    let err: RosterError = json_err.into();

    assert!(matches!(err, RosterError::Serialization { .. }));
    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidFormat, "ERR_INVALID_FORMAT"),
        (ExErrorKind::LanguageMismatch, "ERR_LANGUAGE_MISMATCH"),
        (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
        (ExErrorKind::IndexOutOfRange, "ERR_INDEX_OUT_OF_RANGE"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_error_display_messages() {
    let err = RosterError::InvalidFormat {
        field: PersonField::Surname,
        value: "Sm1th".to_string(),
    };
    assert!(err.to_string().starts_with("Invalid surname 'Sm1th'"));

    let err = RosterError::IndexOutOfRange { index: 3, count: 2 };
    assert_eq!(
        err.to_string(),
        "Index 3 is out of range for list of 2 persons"
    );
}
