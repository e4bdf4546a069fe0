//! Form controls
//!
//! Each descriptor kind maps to exactly one control, and each control owns
//! the coercion from raw input text to a stored value. New kinds are added
//! by extending [`DescriptorKind`] and the table in [`FormControl::for_kind`].

use super::resolver::DescriptorKind;
use crate::domain::{PrimitiveKind, RecordValue};

/// Input control used for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormControl {
    /// Free-text identifier of a record in another dictionary
    ReferenceInput,
    TextInput,
    /// Numeric entry; anything unparsable becomes NaN
    NumberInput,
    /// unset / true / false
    TriStateSelect,
    /// Raw structured text, stored verbatim
    RawTextArea,
}

impl FormControl {
    pub fn for_kind(kind: DescriptorKind) -> Self {
        match kind {
            DescriptorKind::Ref => FormControl::ReferenceInput,
            DescriptorKind::Primitive(PrimitiveKind::String) => FormControl::TextInput,
            DescriptorKind::Primitive(PrimitiveKind::Number)
            | DescriptorKind::Primitive(PrimitiveKind::Integer) => FormControl::NumberInput,
            DescriptorKind::Primitive(PrimitiveKind::Boolean) => FormControl::TriStateSelect,
            DescriptorKind::Primitive(PrimitiveKind::Object)
            | DescriptorKind::Primitive(PrimitiveKind::Array)
            | DescriptorKind::Primitive(PrimitiveKind::Null)
            | DescriptorKind::Unknown => FormControl::RawTextArea,
        }
    }

    /// Coerce raw input. `None` means the field must be absent from the draft.
    pub fn coerce(&self, raw: &str) -> Option<RecordValue> {
        match self {
            FormControl::ReferenceInput | FormControl::TextInput => {
                Some(RecordValue::Text(raw.to_string()))
            }
            FormControl::NumberInput => Some(RecordValue::Number(
                raw.trim().parse::<f64>().unwrap_or(f64::NAN),
            )),
            FormControl::TriStateSelect => match raw {
                "true" => Some(RecordValue::Boolean(true)),
                "false" => Some(RecordValue::Boolean(false)),
                _ => None,
            },
            FormControl::RawTextArea => Some(RecordValue::Raw(raw.to_string())),
        }
    }

    /// Text to show in the control for a stored value
    pub fn display(&self, value: Option<&RecordValue>) -> String {
        match (self, value) {
            (_, None) => String::new(),
            (FormControl::TriStateSelect, Some(RecordValue::Boolean(b))) => b.to_string(),
            (_, Some(value)) => value.to_string(),
        }
    }

    /// Choices for select-style controls, as `(value, label)`
    pub fn choices(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            FormControl::TriStateSelect => &[("", "-- Select --"), ("true", "true"), ("false", "false")],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_table() {
        use PrimitiveKind::*;
        let expect = [
            (DescriptorKind::Ref, FormControl::ReferenceInput),
            (DescriptorKind::Primitive(String), FormControl::TextInput),
            (DescriptorKind::Primitive(Number), FormControl::NumberInput),
            (DescriptorKind::Primitive(Integer), FormControl::NumberInput),
            (DescriptorKind::Primitive(Boolean), FormControl::TriStateSelect),
            (DescriptorKind::Primitive(Object), FormControl::RawTextArea),
            (DescriptorKind::Primitive(Array), FormControl::RawTextArea),
            (DescriptorKind::Primitive(Null), FormControl::RawTextArea),
            (DescriptorKind::Unknown, FormControl::RawTextArea),
        ];
        for (kind, control) in expect {
            assert_eq!(FormControl::for_kind(kind), control, "{:?}", kind);
        }
    }

    #[test]
    fn test_number_coercion_accepts_nan() {
        let control = FormControl::NumberInput;
        assert_eq!(control.coerce("30"), Some(RecordValue::Number(30.0)));
        assert_eq!(control.coerce(" 2.5 "), Some(RecordValue::Number(2.5)));

        let value = control.coerce("thirty").and_then(|v| v.as_number()).unwrap();
        assert!(value.is_nan());
    }

    #[test]
    fn test_tri_state_coercion() {
        let control = FormControl::TriStateSelect;
        assert_eq!(control.coerce("true"), Some(RecordValue::Boolean(true)));
        assert_eq!(control.coerce("false"), Some(RecordValue::Boolean(false)));
        assert_eq!(control.coerce(""), None);
    }

    #[test]
    fn test_raw_text_is_not_parsed() {
        let raw = r#"{"not": "validated""#;
        assert_eq!(
            FormControl::RawTextArea.coerce(raw),
            Some(RecordValue::Raw(raw.to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        let control = FormControl::TriStateSelect;
        assert_eq!(control.display(Some(&RecordValue::Boolean(false))), "false");
        assert_eq!(control.display(None), "");
        assert_eq!(FormControl::NumberInput.display(Some(&RecordValue::Number(30.0))), "30");
    }
}
