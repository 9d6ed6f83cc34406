use serde_json::{Map, Value};

use crate::{
    consts::consts::{NAME_FIELD, ZIPCODE_FIELD},
    model::person::Person,
};

use super::{
    error::{FieldPath, SchemaValidationError},
    record::{expect_object, required_str, RecordSchema},
};

/// `{"name": <string>, "zipcode": <string>}`, both required
#[derive(Clone, Copy, Debug, Default)]
pub struct PersonSchema;

impl RecordSchema for PersonSchema {
    type Record = Person;

    fn dump(&self, person: &Person) -> Value {
        let mut object = Map::with_capacity(2);
        object.insert(NAME_FIELD.to_string(), Value::from(person.name()));
        object.insert(ZIPCODE_FIELD.to_string(), Value::from(person.zipcode()));

        Value::Object(object)
    }

    fn load(&self, value: &Value, path: &FieldPath) -> Result<Person, SchemaValidationError> {
        let object = expect_object(value, path)?;

        let name = required_str(object, NAME_FIELD, path)?;
        let zipcode = required_str(object, ZIPCODE_FIELD, path)?;

        Ok(Person::new(name, zipcode))
    }
}
