//! Output schema → Gemini `responseSchema` conversion.
//!
//! Gemini uses an OpenAPI subset with uppercase type names:
//! - `FieldType::String` → `"STRING"`
//! - `FieldType::Boolean` → `"BOOLEAN"`
//! - `FieldType::Integer` → `"INTEGER"`
//! - `FieldType::ObjectArray` → `"ARRAY"` of `"OBJECT"`
//!
//! `propertyOrdering` keeps the declared field order in the generated JSON.

use neuralcore_domain::{FieldType, OutputSchema, SchemaField};
use serde_json::{Map, Value, json};

/// Convert a declared output schema to a Gemini object schema.
pub fn to_response_schema(schema: &OutputSchema) -> Value {
    object_schema(&schema.fields)
}

fn object_schema(fields: &[SchemaField]) -> Value {
    let mut properties = Map::new();
    let mut ordering = Vec::with_capacity(fields.len());
    let mut required = Vec::new();

    for field in fields {
        properties.insert(field.name.to_string(), field_schema(field));
        ordering.push(json!(field.name));
        if field.required {
            required.push(json!(field.name));
        }
    }

    let mut object = Map::new();
    object.insert("type".to_string(), json!("OBJECT"));
    object.insert("properties".to_string(), Value::Object(properties));
    object.insert("propertyOrdering".to_string(), Value::Array(ordering));
    if !required.is_empty() {
        object.insert("required".to_string(), Value::Array(required));
    }
    Value::Object(object)
}

fn field_schema(field: &SchemaField) -> Value {
    let mut prop = match &field.field_type {
        FieldType::String => json!({ "type": "STRING" }),
        FieldType::Boolean => json!({ "type": "BOOLEAN" }),
        FieldType::Integer => json!({ "type": "INTEGER" }),
        FieldType::ObjectArray(items) => json!({
            "type": "ARRAY",
            "items": object_schema(items),
        }),
    };
    if let (Some(description), Value::Object(map)) = (field.description, &mut prop) {
        map.insert("description".to_string(), json!(description));
    }
    prop
}
