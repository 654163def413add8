//! Output validator for structured responses.
//!
//! Checks model output against an object schema before deserialization:
//! top-level type, required properties, and per-property types. A violation
//! is reported with the offending path so the invoker can log it; the
//! correction pipeline treats any violation as "no result".

use serde_json::Value;

/// A single schema violation with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// What went wrong.
    pub message: String,
    /// JSON path to the violation (e.g., "search", "edits[0].replace").
    pub path: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.path)
        }
    }
}

/// Validator for structured output.
pub struct OutputValidator {
    schema: Value,
}

impl OutputValidator {
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Validate data against the schema, collecting every violation.
    pub fn validate(&self, data: &Value) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        validate_value(data, &self.schema, "", &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn validate_value(data: &Value, schema: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    if let Some(expected) = schema.get("type").and_then(|t| t.as_str()) {
        if !type_matches(data, expected) {
            errors.push(ValidationError::new(
                format!("expected type '{}', got '{}'", expected, type_name(data)),
                path,
            ));
            return;
        }
    }

    if let Some(obj) = data.as_object() {
        let required: Vec<&str> = schema
            .get("required")
            .and_then(|r| r.as_array())
            .map(|arr| arr.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default();
        for name in required {
            if !obj.contains_key(name) {
                errors.push(ValidationError::new(
                    format!("missing required property '{}'", name),
                    join_path(path, name),
                ));
            }
        }

        if let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) {
            for (name, prop_schema) in properties {
                if let Some(value) = obj.get(name) {
                    validate_value(value, prop_schema, &join_path(path, name), errors);
                }
            }
        }
    }
}

fn type_matches(data: &Value, expected: &str) -> bool {
    match expected {
        "string" => data.is_string(),
        "integer" => data.is_i64(),
        "number" => data.is_number(),
        "boolean" => data.is_boolean(),
        "array" => data.is_array(),
        "object" => data.is_object(),
        "null" => data.is_null(),
        _ => true,
    }
}

fn type_name(data: &Value) -> &'static str {
    match data {
        Value::String(_) => "string",
        Value::Number(_) => {
            if data.is_i64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Null => "null",
    }
}

fn join_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structured::schema::corrected_edit_schema;
    use serde_json::json;

    #[test]
    fn test_well_formed_correction_passes() {
        let validator = OutputValidator::new(corrected_edit_schema());
        let data = json!({
            "search": "a",
            "replace": "b",
            "explanation": "x",
            "noChangesRequired": false
        });
        assert!(validator.validate(&data).is_ok());
    }

    #[test]
    fn test_optional_flag_may_be_absent() {
        let validator = OutputValidator::new(corrected_edit_schema());
        let data = json!({"search": "a", "replace": "b", "explanation": "x"});
        assert!(validator.validate(&data).is_ok());
    }

    #[test]
    fn test_missing_required_property_fails() {
        let validator = OutputValidator::new(corrected_edit_schema());
        let data = json!({"search": "a", "explanation": "x"});
        let errors = validator.validate(&data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("replace"));
    }

    #[test]
    fn test_wrong_property_type_fails() {
        let validator = OutputValidator::new(corrected_edit_schema());
        let data = json!({
            "search": "a",
            "replace": "b",
            "explanation": "x",
            "noChangesRequired": "yes"
        });
        let errors = validator.validate(&data).unwrap_err();
        assert_eq!(errors[0].path, "noChangesRequired");
        assert!(errors[0].message.contains("boolean"));
    }

    #[test]
    fn test_non_object_top_level_fails() {
        let validator = OutputValidator::new(corrected_edit_schema());
        let errors = validator.validate(&json!("not an object")).unwrap_err();
        assert!(errors[0].message.contains("object"));
    }
}
