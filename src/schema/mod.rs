pub mod error;
pub mod field;
pub mod people_index;
pub mod person;
pub mod record;
