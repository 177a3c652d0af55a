pub mod person_list;

pub use person_list::PersonList;
