pub mod builder;
pub mod lookup;
pub mod people_index;
