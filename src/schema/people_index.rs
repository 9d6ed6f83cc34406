use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::{consts::consts::PEOPLE_INDEX_FIELD, index::people_index::PeopleIndex};

use super::{
    error::{FieldPath, SchemaValidationError},
    field::CollectionMapField,
    person::PersonSchema,
    record::{expect_object, required_field, RecordSchema},
};

/// `{"people_index": {<city>: [<person>, ...], ...}}`
#[derive(Clone, Debug, Default)]
pub struct PeopleIndexSchema {
    people_index: CollectionMapField<PersonSchema>,
}

impl PeopleIndexSchema {
    pub fn new() -> Self {
        Self {
            people_index: CollectionMapField::new(PersonSchema),
        }
    }
}

impl RecordSchema for PeopleIndexSchema {
    type Record = PeopleIndex;

    #[tracing::instrument(skip_all)]
    fn dump(&self, index: &PeopleIndex) -> Value {
        let mut object = Map::with_capacity(1);
        object.insert(
            PEOPLE_INDEX_FIELD.to_string(),
            self.people_index.dump(index.as_map()),
        );

        log::debug!(
            "Dumped {} cities, {} memberships",
            index.len(),
            index.membership_count()
        );

        Value::Object(object)
    }

    #[tracing::instrument(skip_all)]
    fn load(&self, value: &Value, path: &FieldPath) -> Result<PeopleIndex, SchemaValidationError> {
        let object = expect_object(value, path)?;
        let (people_index, people_index_path) = required_field(object, PEOPLE_INDEX_FIELD, path)?;

        let people_index = self.people_index.load(people_index, &people_index_path)?;

        Ok(PeopleIndex::from_map(people_index))
    }
}

// Lets an index travel through any serde format, using the same document shape as the schema
impl Serialize for PeopleIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PeopleIndexSchema::new().dump(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PeopleIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        PeopleIndexSchema::new()
            .load_value(&value)
            .map_err(de::Error::custom)
    }
}
