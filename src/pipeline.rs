use serde_json::Value;

use crate::{
    index::people_index::PeopleIndex,
    sample::DataSource,
    schema::{error::SchemaValidationError, people_index::PeopleIndexSchema, record::RecordSchema},
};

#[derive(Debug)]
pub struct RoundTripReport {
    pub people_count: usize,
    pub original: PeopleIndex,
    pub serialized: Value,
    pub deserialized: PeopleIndex,
}

impl RoundTripReport {
    pub fn is_equal(&self) -> bool {
        self.deserialized == self.original
    }
}

/// Builds an index from the source, dumps it, then loads the dump back
#[tracing::instrument(skip_all)]
pub fn round_trip(source: &mut impl DataSource) -> Result<RoundTripReport, SchemaValidationError> {
    let city_zipcodes = source.city_zipcodes();
    let people = source.people();

    let original = PeopleIndex::new(&city_zipcodes, &people);

    log::info!(
        "Indexed {} people into {} cities",
        people.len(),
        original.len()
    );

    let schema = PeopleIndexSchema::new();
    let serialized = schema.dump(&original);
    let deserialized = schema.load_value(&serialized)?;

    Ok(RoundTripReport {
        people_count: people.len(),
        original,
        serialized,
        deserialized,
    })
}
