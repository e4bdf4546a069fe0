//! Schema interpretation
//!
//! Turns a [`Schema`] into the ordered field descriptors that both the
//! record table and the record form are built from.

use crate::domain::{PrimitiveKind, PropertySpec, Schema};
use std::fmt;

/// Display/control category of a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Primitive(PrimitiveKind),
    Ref,
    Unknown,
}

impl DescriptorKind {
    /// Secondary header label: the primitive's name, `ref` or `unknown`
    pub fn label(&self) -> &'static str {
        match self {
            DescriptorKind::Primitive(kind) => kind.name(),
            DescriptorKind::Ref => "ref",
            DescriptorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&PropertySpec> for DescriptorKind {
    fn from(spec: &PropertySpec) -> Self {
        match spec {
            PropertySpec::Reference(_) => DescriptorKind::Ref,
            PropertySpec::Primitive(kind) => DescriptorKind::Primitive(*kind),
            PropertySpec::Untyped => DescriptorKind::Unknown,
        }
    }
}

/// One derived field
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: DescriptorKind,
    /// Referenced dictionary (suffix stripped), for `Ref` fields only
    pub ref_target: Option<String>,
    /// Marked required at authoring time. Informational only.
    pub required: bool,
}

/// Derive one descriptor per property, in declaration order. Total: never
/// fails, malformed properties come out as `Unknown`.
pub fn derive_fields(schema: &Schema) -> Vec<FieldDescriptor> {
    schema
        .properties()
        .map(|(name, spec)| FieldDescriptor {
            name: name.to_string(),
            kind: DescriptorKind::from(spec),
            ref_target: spec.ref_dictionary().map(String::from),
            required: schema.is_required(name),
        })
        .collect()
}
