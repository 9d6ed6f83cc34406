use std::collections::HashMap;

// Types
pub type CityName = String;
pub type Zipcode = String;

/// Source table of city -> postal codes, as supplied by a data source
pub type CityZipcodes = HashMap<CityName, Vec<Zipcode>>;

// Values
pub const PEOPLE_INDEX_FIELD: &str = "people_index";
pub const NAME_FIELD: &str = "name";
pub const ZIPCODE_FIELD: &str = "zipcode";
