use serde_json::{Map, Value};

use super::error::{FieldPath, SchemaError, SchemaValidationError};

/// Two way conversion between a record and its structured (JSON value) form.
///
/// `dump` cannot fail for a well formed record. `load` checks the shape of the input and
/// reports the first problem it finds, together with where in the document it was.
pub trait RecordSchema {
    type Record;

    fn dump(&self, record: &Self::Record) -> Value;

    fn load(&self, value: &Value, path: &FieldPath) -> Result<Self::Record, SchemaValidationError>;

    /// Loads a value that is the root of its document
    fn load_value(&self, value: &Value) -> Result<Self::Record, SchemaValidationError> {
        self.load(value, &FieldPath::root())
    }

    fn dumps(&self, record: &Self::Record) -> Result<String, SchemaError> {
        Ok(serde_json::to_string(&self.dump(record))?)
    }

    fn dumps_pretty(&self, record: &Self::Record) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(&self.dump(record))?)
    }

    fn loads(&self, data: &str) -> Result<Self::Record, SchemaError> {
        let value: Value = serde_json::from_str(data)?;

        Ok(self.load_value(&value)?)
    }
}

pub fn expect_object<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>, SchemaValidationError> {
    value
        .as_object()
        .ok_or_else(|| SchemaValidationError::wrong_type(path, "object", value))
}

pub fn expect_array<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Vec<Value>, SchemaValidationError> {
    value
        .as_array()
        .ok_or_else(|| SchemaValidationError::wrong_type(path, "array", value))
}

/// Looks up a field that must be present. Returns the value along with its path.
pub fn required_field<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    path: &FieldPath,
) -> Result<(&'a Value, FieldPath), SchemaValidationError> {
    let field_path = path.field(name);

    match object.get(name) {
        Some(value) => Ok((value, field_path)),
        None => Err(SchemaValidationError::MissingField(field_path)),
    }
}

pub fn required_str<'a>(
    object: &'a Map<String, Value>,
    name: &str,
    path: &FieldPath,
) -> Result<&'a str, SchemaValidationError> {
    let (value, field_path) = required_field(object, name, path)?;

    value
        .as_str()
        .ok_or_else(|| SchemaValidationError::wrong_type(&field_path, "string", value))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn required_str_reads_present_string() {
        let value = json!({ "name": "Ada" });
        let object = value.as_object().unwrap();

        assert_eq!(
            required_str(object, "name", &FieldPath::root()).unwrap(),
            "Ada"
        );
    }

    #[test]
    fn required_str_rejects_missing_field() {
        let value = json!({});
        let object = value.as_object().unwrap();

        let error = required_str(object, "name", &FieldPath::root()).unwrap_err();

        assert_eq!(
            error,
            SchemaValidationError::MissingField(FieldPath::root().field("name"))
        );
    }

    #[rstest]
    #[case::number(json!({ "name": 1 }), "number")]
    #[case::null(json!({ "name": null }), "null")]
    #[case::array(json!({ "name": ["Ada"] }), "array")]
    #[case::object(json!({ "name": {} }), "object")]
    #[case::boolean(json!({ "name": true }), "boolean")]
    fn required_str_rejects_non_strings(#[case] value: Value, #[case] found_kind: &'static str) {
        let object = value.as_object().unwrap();

        let error = required_str(object, "name", &FieldPath::root()).unwrap_err();

        assert_eq!(
            error,
            SchemaValidationError::WrongType {
                path: FieldPath::root().field("name"),
                expected: "string",
                found: found_kind,
            }
        );
    }

    #[test]
    fn expect_object_and_array_check_shape() {
        let path = FieldPath::root();

        assert!(expect_object(&json!({}), &path).is_ok());
        assert!(expect_object(&json!([]), &path).is_err());
        assert!(expect_array(&json!([]), &path).is_ok());
        assert!(expect_array(&json!("[]"), &path).is_err());
    }
}
