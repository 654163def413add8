//! Schema generation utilities.

use serde_json::json;

/// Generator for JSON object schemas with customization options.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    description: Option<String>,
    properties: Vec<(String, serde_json::Value)>,
    required: Vec<String>,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    pub fn build(self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = serde_json::Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }
        if let Some(desc) = self.description {
            map.insert("description".into(), desc.into());
        }

        map.into()
    }
}

/// Structured-output schema for a corrected edit.
///
/// `search`, `replace`, and `explanation` are required strings;
/// `noChangesRequired` is an optional boolean.
pub fn corrected_edit_schema() -> serde_json::Value {
    SchemaGenerator::new()
        .description("A corrected search/replace edit")
        .add_property("search", json!({"type": "string"}))
        .add_property("replace", json!({"type": "string"}))
        .add_property("explanation", json!({"type": "string"}))
        .add_property("noChangesRequired", json!({"type": "boolean"}))
        .require("search")
        .require("replace")
        .require("explanation")
        .build()
}
