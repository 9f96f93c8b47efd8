//! Declared output schemas
//!
//! A provider-neutral description of the JSON object the completion service
//! must return. Infrastructure adapters translate it into their wire format.

/// Type of one schema field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Boolean,
    Integer,
    /// Array of objects with the given fields.
    ObjectArray(Vec<SchemaField>),
}

/// One named property of the output object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub field_type: FieldType,
    pub description: Option<&'static str>,
    pub required: bool,
}

impl SchemaField {
    pub fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            description: None,
            required: false,
        }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldType::String)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldType::Integer)
    }

    pub fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Shape of the top-level JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSchema {
    pub fields: Vec<SchemaField>,
}

impl OutputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: SchemaField) -> Self {
        self.fields.push(field);
        self
    }
}
