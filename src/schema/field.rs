use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use serde_json::{Map, Value};

use super::{
    error::{FieldPath, SchemaValidationError},
    record::{expect_array, expect_object, RecordSchema},
};

/// Field holding a map from string keys to collections of records.
///
/// Encodes each collection as an array, applying the child schema to every element. Decoding
/// applies the child schema the same way and collects each array back into a set, so any
/// duplicates in the input collapse.
#[derive(Clone, Debug, Default)]
pub struct CollectionMapField<S> {
    child: S,
}

impl<S: RecordSchema> CollectionMapField<S> {
    pub fn new(child: S) -> Self {
        Self { child }
    }

    pub fn child(&self) -> &S {
        &self.child
    }

    /// Element order within each array follows the iteration order of the collection
    pub fn dump<C>(&self, map: &HashMap<String, C>) -> Value
    where
        for<'c> &'c C: IntoIterator<Item = &'c S::Record>,
    {
        let mut object = Map::with_capacity(map.len());

        for (key, collection) in map.iter() {
            let records: Vec<Value> = collection
                .into_iter()
                .map(|record| self.child.dump(record))
                .collect();

            object.insert(key.clone(), Value::Array(records));
        }

        Value::Object(object)
    }

    pub fn load(
        &self,
        value: &Value,
        path: &FieldPath,
    ) -> Result<HashMap<String, HashSet<S::Record>>, SchemaValidationError>
    where
        S::Record: Eq + Hash,
    {
        let object = expect_object(value, path)?;
        let mut map = HashMap::with_capacity(object.len());

        for (key, collection) in object.iter() {
            let key_path = path.key(key);
            let elements = expect_array(collection, &key_path)?;

            let records = elements
                .iter()
                .enumerate()
                .map(|(index, element)| self.child.load(element, &key_path.index(index)))
                .collect::<Result<HashSet<S::Record>, SchemaValidationError>>()?;

            map.insert(key.clone(), records);
        }

        Ok(map)
    }
}
