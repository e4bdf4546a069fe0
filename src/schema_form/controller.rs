//! Record form controller
//!
//! Owns the single draft while a form is open. Edits are merged one key at
//! a time; saving hands a copy of the draft to the record collection and
//! leaves the controller closed with an empty draft.

use tracing::debug;

use super::fields::FormControl;
use super::resolver::{derive_fields, FieldDescriptor};
use crate::domain::{Record, RecordCollection, Schema};

/// A field of the open form together with its control
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub descriptor: FieldDescriptor,
    pub control: FormControl,
}

#[derive(Clone, Debug)]
pub struct FormController {
    fields: Vec<FormField>,
    draft: Record,
    open: bool,
}

impl FormController {
    /// Open a form for `schema` with an empty draft
    pub fn open(schema: &Schema) -> Self {
        let fields = derive_fields(schema)
            .into_iter()
            .map(|descriptor| FormField {
                control: FormControl::for_kind(descriptor.kind),
                descriptor,
            })
            .collect();

        Self {
            fields,
            draft: Record::new(),
            open: true,
        }
    }

    /// Re-open after a save or cancel. Always starts from an empty draft.
    pub fn begin(&mut self) {
        self.draft.clear();
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn draft(&self) -> &Record {
        &self.draft
    }

    /// Control for a field name. Names outside the schema get raw text.
    pub fn control_for(&self, name: &str) -> FormControl {
        self.fields
            .iter()
            .find(|f| f.descriptor.name == name)
            .map(|f| f.control)
            .unwrap_or(FormControl::RawTextArea)
    }

    /// Merge one edit into the draft (create-or-overwrite). A boolean set
    /// back to "unset" removes the key.
    pub fn set_field(&mut self, name: &str, raw: &str) {
        match self.control_for(name).coerce(raw) {
            Some(value) => self.draft.insert(name, value),
            None => {
                self.draft.remove(name);
            }
        }
    }

    /// Current value of a field as control text
    pub fn value_of(&self, name: &str) -> String {
        self.control_for(name).display(self.draft.get(name))
    }

    /// Append the draft to `records`, clear it and close. Required flags are
    /// not checked.
    pub fn commit(&mut self, records: &mut RecordCollection) -> Record {
        let record = std::mem::take(&mut self.draft);
        records.push(record.clone());
        self.open = false;
        debug!(fields = record.len(), total = records.len(), "Record committed");
        record
    }

    /// Drop the draft and close. `records` is never touched.
    pub fn discard(&mut self) {
        self.draft.clear();
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PrimitiveKind, PropertySpec, RecordValue};

    fn schema() -> Schema {
        Schema::new()
            .with_property("name", PropertySpec::Primitive(PrimitiveKind::String))
            .with_property("age", PropertySpec::Primitive(PrimitiveKind::Integer))
            .with_property("active", PropertySpec::Primitive(PrimitiveKind::Boolean))
            .with_property("meta", PropertySpec::Primitive(PrimitiveKind::Object))
    }

    #[test]
    fn test_fields_follow_schema_order() {
        let form = FormController::open(&schema());
        let controls: Vec<(&str, FormControl)> = form
            .fields()
            .iter()
            .map(|f| (f.descriptor.name.as_str(), f.control))
            .collect();
        assert_eq!(
            controls,
            vec![
                ("name", FormControl::TextInput),
                ("age", FormControl::NumberInput),
                ("active", FormControl::TriStateSelect),
                ("meta", FormControl::RawTextArea),
            ]
        );
    }

    #[test]
    fn test_draft_is_sparse() {
        let mut form = FormController::open(&schema());
        form.set_field("name", "Bob");
        assert_eq!(form.draft().len(), 1);
        assert!(!form.draft().contains("age"));
    }

    #[test]
    fn test_boolean_false_is_stored_and_unset_is_absent() {
        let mut form = FormController::open(&schema());
        form.set_field("active", "false");
        assert_eq!(form.draft().get("active"), Some(&RecordValue::Boolean(false)));

        form.set_field("active", "");
        assert!(!form.draft().contains("active"));
    }

    #[test]
    fn test_commit_appends_and_resets() {
        let mut records = RecordCollection::new();
        let mut form = FormController::open(&schema());
        form.set_field("name", "Alice");
        form.set_field("age", "30");

        let record = form.commit(&mut records);
        assert_eq!(records.len(), 1);
        assert_eq!(records.get(0), Some(&record));
        assert!(form.draft().is_empty());
        assert!(!form.is_open());
    }

    #[test]
    fn test_commit_does_not_alias_previous_records() {
        let mut records = RecordCollection::new();
        let mut form = FormController::open(&schema());

        form.set_field("name", "first");
        form.commit(&mut records);

        form.begin();
        form.set_field("name", "second");
        form.commit(&mut records);

        assert_eq!(records.get(0).unwrap().get("name"), Some(&RecordValue::Text("first".into())));
        assert_eq!(records.get(1).unwrap().get("name"), Some(&RecordValue::Text("second".into())));
    }

    #[test]
    fn test_discard_leaves_records_alone() {
        let mut records = RecordCollection::new();
        let mut form = FormController::open(&schema());
        form.set_field("name", "ghost");
        form.discard();

        assert!(records.is_empty());
        assert!(!form.is_open());

        form.begin();
        assert!(form.draft().is_empty());
        assert!(form.is_open());

        form.set_field("name", "real");
        form.commit(&mut records);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_required_is_not_enforced() {
        let mut schema = schema();
        schema.mark_required("name");

        let mut records = RecordCollection::new();
        let mut form = FormController::open(&schema);
        let record = form.commit(&mut records);
        assert!(record.is_empty());
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_value_of_and_unknown_names() {
        let mut form = FormController::open(&schema());
        form.set_field("age", "abc");
        assert_eq!(form.value_of("age"), "NaN");

        form.set_field("extra", "{raw}");
        assert_eq!(form.draft().get("extra"), Some(&RecordValue::Raw("{raw}".into())));
        assert_eq!(form.value_of("missing"), "");
    }
}
