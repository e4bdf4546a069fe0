//! Dictionary schema model
//!
//! A schema is a JSON-Schema-like document whose `properties` mapping names
//! each field and gives it either a primitive `type` or a `$ref` to another
//! dictionary. Documents arrive untyped from the schema service and are
//! normalized here, once, into explicit sum types.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Suffix the schema service expects on reference targets (`"Customer.json"`).
pub const REF_SUFFIX: &str = ".json";

// ============================================================================
// Primitive Kind
// ============================================================================

/// Primitive JSON kinds a dictionary field can hold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl PrimitiveKind {
    /// Every kind, in the order the field dialog offers them
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::Object,
        PrimitiveKind::Array,
        PrimitiveKind::String,
        PrimitiveKind::Number,
        PrimitiveKind::Integer,
        PrimitiveKind::Boolean,
        PrimitiveKind::Null,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Object => "Object",
            PrimitiveKind::Array => "Array",
            PrimitiveKind::String => "String",
            PrimitiveKind::Number => "Number",
            PrimitiveKind::Integer => "Integer",
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Null => "Null",
        }
    }

    /// Parse a `type` value. The service writes `"String"`, plain JSON Schema
    /// writes `"string"`; both are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "object" => Some(PrimitiveKind::Object),
            "array" => Some(PrimitiveKind::Array),
            "string" => Some(PrimitiveKind::String),
            "number" => Some(PrimitiveKind::Number),
            "integer" => Some(PrimitiveKind::Integer),
            "boolean" => Some(PrimitiveKind::Boolean),
            "null" => Some(PrimitiveKind::Null),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::parse(s).ok_or_else(|| format!("unknown field kind: {}", s))
    }
}

// ============================================================================
// Property Spec
// ============================================================================

/// Normalized definition of one schema property
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertySpec {
    /// `{"type": "<kind>"}`
    Primitive(PrimitiveKind),
    /// `{"$ref": "<target>"}`; the target is stored as written by the service
    Reference(String),
    /// Neither a usable `$ref` nor a recognized `type`
    Untyped,
}

impl PropertySpec {
    pub fn reference(dictionary: &str) -> Self {
        PropertySpec::Reference(format!("{}{}", dictionary, REF_SUFFIX))
    }

    /// Normalize a raw property entry. A non-empty `$ref` wins over `type`.
    pub fn from_value(value: &Value) -> Self {
        if let Some(target) = value.get("$ref").and_then(Value::as_str) {
            if !target.is_empty() {
                return PropertySpec::Reference(target.to_string());
            }
        }

        match value
            .get("type")
            .and_then(Value::as_str)
            .and_then(PrimitiveKind::parse)
        {
            Some(kind) => PropertySpec::Primitive(kind),
            None => PropertySpec::Untyped,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        match self {
            PropertySpec::Primitive(kind) => {
                obj.insert("type".to_string(), Value::String(kind.name().to_string()));
            }
            PropertySpec::Reference(target) => {
                obj.insert("$ref".to_string(), Value::String(target.clone()));
            }
            PropertySpec::Untyped => {}
        }
        Value::Object(obj)
    }

    /// Referenced dictionary name with the service suffix removed
    pub fn ref_dictionary(&self) -> Option<&str> {
        match self {
            PropertySpec::Reference(target) => {
                Some(target.strip_suffix(REF_SUFFIX).unwrap_or(target))
            }
            _ => None,
        }
    }
}

// ============================================================================
// Schema
// ============================================================================

/// A dictionary's schema: ordered properties plus the authoring-time
/// `required` list. Declaration order drives column and field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    properties: IndexMap<String, PropertySpec>,
    required: Vec<String>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property insertion, mostly for tests and the in-memory store
    pub fn with_property(mut self, name: impl Into<String>, spec: PropertySpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Insert or replace a property, keeping its original position on replace
    pub fn insert(&mut self, name: impl Into<String>, spec: PropertySpec) {
        self.properties.insert(name.into(), spec);
    }

    pub fn mark_required(&mut self, name: &str) {
        if !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
    }

    /// Normalize any JSON document. Non-objects and a missing or malformed
    /// `properties` entry produce an empty schema.
    pub fn from_value(value: &Value) -> Self {
        let mut schema = Schema::new();

        if let Some(props) = value.get("properties").and_then(Value::as_object) {
            for (name, prop) in props {
                schema.insert(name.clone(), PropertySpec::from_value(prop));
            }
        }

        if let Some(required) = value.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                schema.mark_required(name);
            }
        }

        schema
    }

    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("type".to_string(), Value::String("object".to_string()));

        let props: Map<String, Value> = self
            .properties
            .iter()
            .map(|(name, spec)| (name.clone(), spec.to_value()))
            .collect();
        obj.insert("properties".to_string(), Value::Object(props));

        if !self.required.is_empty() {
            obj.insert(
                "required".to_string(),
                Value::Array(self.required.iter().cloned().map(Value::String).collect()),
            );
        }

        Value::Object(obj)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.properties.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Schema::from_value(&value))
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

// ============================================================================
// Tests
// ============================================================================
