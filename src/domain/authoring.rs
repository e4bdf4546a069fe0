//! Client-side shaping of schema authoring requests
//!
//! The service accepts whatever it is sent; these rules make sure it is only
//! ever sent well-formed requests: no blank names, and exactly one of
//! `type`/`ref` per field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::schema::{PrimitiveKind, REF_SUFFIX};

/// Body of `POST /schemas`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDictionary {
    pub name: String,
}

impl NewDictionary {
    /// `None` when the trimmed name is empty; such requests are never sent.
    pub fn shape(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        Some(Self {
            name: input.to_string(),
        })
    }
}

/// Kind chosen in the field dialog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKindChoice {
    Primitive(PrimitiveKind),
    Ref,
}

impl Default for FieldKindChoice {
    fn default() -> Self {
        FieldKindChoice::Primitive(PrimitiveKind::String)
    }
}

impl FieldKindChoice {
    /// Every choice, in dialog order: the primitives, then `ref`
    pub fn all() -> Vec<FieldKindChoice> {
        PrimitiveKind::ALL
            .iter()
            .copied()
            .map(FieldKindChoice::Primitive)
            .chain(std::iter::once(FieldKindChoice::Ref))
            .collect()
    }

    /// Stable value used in selects and on the command line
    pub fn value(&self) -> &'static str {
        match self {
            FieldKindChoice::Primitive(kind) => kind.name(),
            FieldKindChoice::Ref => "ref",
        }
    }

    pub fn is_ref(&self) -> bool {
        matches!(self, FieldKindChoice::Ref)
    }
}

impl fmt::Display for FieldKindChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for FieldKindChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("ref") {
            return Ok(FieldKindChoice::Ref);
        }
        s.parse::<PrimitiveKind>().map(FieldKindChoice::Primitive)
    }
}

/// Body of `POST /schemas/{name}/fields`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFieldRequest {
    pub field_name: String,
    #[serde(rename = "type")]
    pub kind: Option<PrimitiveKind>,
    pub required: bool,
    #[serde(rename = "ref")]
    pub reference: Option<String>,
}

/// State of the "add field" dialog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldDraft {
    pub field_name: String,
    pub kind: FieldKindChoice,
    /// Checkbox state; ignored when `kind` is `ref`
    pub required: bool,
    /// Target dictionary name, without suffix; empty when none chosen
    pub ref_target: String,
}

impl FieldDraft {
    pub fn new(field_name: impl Into<String>, kind: FieldKindChoice) -> Self {
        Self {
            field_name: field_name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn target(mut self, dictionary: impl Into<String>) -> Self {
        self.ref_target = dictionary.into();
        self
    }

    /// Build the request, or `None` when the trimmed field name is empty or
    /// a `ref` field has no target. Such requests are never sent.
    ///
    /// A `ref` field always goes out with `type = null` and
    /// `required = false`; a primitive field always goes out with
    /// `ref = null`. Exactly one of the two is non-null.
    pub fn to_request(&self) -> Option<AddFieldRequest> {
        if self.field_name.trim().is_empty() {
            return None;
        }

        let request = match self.kind {
            FieldKindChoice::Ref => {
                let target = self.ref_target.trim();
                if target.is_empty() {
                    return None;
                }
                AddFieldRequest {
                    field_name: self.field_name.clone(),
                    kind: None,
                    required: false,
                    reference: Some(format!("{}{}", target, REF_SUFFIX)),
                }
            }
            FieldKindChoice::Primitive(kind) => AddFieldRequest {
                field_name: self.field_name.clone(),
                kind: Some(kind),
                required: self.required,
                reference: None,
            },
        };

        Some(request)
    }

    /// Reset after a successful submit. Kind and checkbox stay as they were.
    pub fn clear_inputs(&mut self) {
        self.field_name.clear();
        self.ref_target.clear();
    }
}
