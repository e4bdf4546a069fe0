//! Workspace state
//!
//! Everything the console shows lives here: the dictionary tree, cached
//! field names, the open dictionary with its session records, and at most
//! one open record form. All methods are synchronous state transitions; the
//! calls to the schema service that feed them live in
//! [`Console`](super::console::Console).

use std::collections::{HashMap, HashSet};

use crate::domain::{Record, RecordCollection, Schema};
use crate::schema_form::{render_table, FormController, TableView};

/// The dictionary currently shown in the main area
#[derive(Clone, Debug)]
pub struct OpenDictionary {
    pub name: String,
    pub schema: Schema,
    pub records: RecordCollection,
}

#[derive(Clone, Debug, Default)]
pub struct Workspace {
    dictionaries: Vec<String>,
    dictionaries_expanded: bool,
    properties: HashMap<String, Vec<String>>,
    expanded: HashSet<String>,
    reference_candidates: Vec<String>,
    open: Option<OpenDictionary>,
    form: Option<FormController>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Sidebar tree
    // ------------------------------------------------------------------

    pub fn dictionaries(&self) -> &[String] {
        &self.dictionaries
    }

    pub fn replace_dictionaries(&mut self, names: Vec<String>) {
        self.dictionaries = names;
    }

    pub fn is_dictionaries_expanded(&self) -> bool {
        self.dictionaries_expanded
    }

    /// Flip the root node; returns the new state
    pub fn toggle_dictionaries(&mut self) -> bool {
        self.dictionaries_expanded = !self.dictionaries_expanded;
        self.dictionaries_expanded
    }

    pub fn properties_of(&self, dictionary: &str) -> &[String] {
        self.properties
            .get(dictionary)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn replace_properties(&mut self, dictionary: &str, names: Vec<String>) {
        self.properties.insert(dictionary.to_string(), names);
    }

    pub fn is_expanded(&self, dictionary: &str) -> bool {
        self.expanded.contains(dictionary)
    }

    /// Flip one dictionary node; returns the new state
    pub fn toggle_properties(&mut self, dictionary: &str) -> bool {
        if self.expanded.remove(dictionary) {
            false
        } else {
            self.expanded.insert(dictionary.to_string());
            true
        }
    }

    /// Dictionaries offered as targets in the "add field" dialog
    pub fn reference_candidates(&self) -> &[String] {
        &self.reference_candidates
    }

    pub fn replace_reference_candidates(&mut self, names: Vec<String>) {
        self.reference_candidates = names;
    }

    // ------------------------------------------------------------------
    // Open dictionary and records
    // ------------------------------------------------------------------

    pub fn current(&self) -> Option<&OpenDictionary> {
        self.open.as_ref()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.open.as_ref().map(|d| d.name.as_str())
    }

    /// Show `schema` for `name`. Records start empty and any open form is
    /// dropped, even when the same dictionary is opened again.
    pub fn open_dictionary(&mut self, name: &str, schema: Schema) {
        self.form = None;
        self.open = Some(OpenDictionary {
            name: name.to_string(),
            schema,
            records: RecordCollection::new(),
        });
    }

    /// Swap in a newer schema for the open dictionary (after a field was
    /// added to it). Records are kept; an open form is rebuilt on next use.
    /// No-op when `name` is not the open dictionary.
    pub fn refresh_schema(&mut self, name: &str, schema: Schema) -> bool {
        match self.open.as_mut() {
            Some(open) if open.name == name => {
                open.schema = schema;
                self.form = None;
                true
            }
            _ => false,
        }
    }

    pub fn records(&self) -> Option<&RecordCollection> {
        self.open.as_ref().map(|d| &d.records)
    }

    /// Table for the open dictionary
    pub fn table(&self) -> Option<TableView> {
        self.open
            .as_ref()
            .map(|d| render_table(&d.schema, d.records.as_slice()))
    }

    // ------------------------------------------------------------------
    // Record form
    // ------------------------------------------------------------------

    pub fn form(&self) -> Option<&FormController> {
        self.form.as_ref().filter(|f| f.is_open())
    }

    /// Open the form with an empty draft. `false` when no dictionary is open.
    pub fn begin_record(&mut self) -> bool {
        let Some(open) = self.open.as_ref() else {
            return false;
        };
        match self.form.as_mut() {
            Some(form) => form.begin(),
            None => self.form = Some(FormController::open(&open.schema)),
        }
        true
    }

    /// Apply one edit to the draft. `false` when no form is open.
    pub fn set_draft_field(&mut self, name: &str, raw: &str) -> bool {
        match self.form.as_mut().filter(|f| f.is_open()) {
            Some(form) => {
                form.set_field(name, raw);
                true
            }
            None => false,
        }
    }

    /// Commit the draft into the open dictionary's records
    pub fn save_record(&mut self) -> Option<Record> {
        let form = self.form.as_mut().filter(|f| f.is_open())?;
        let open = self.open.as_mut()?;
        Some(form.commit(&mut open.records))
    }

    /// Discard the draft; `false` when no form was open
    pub fn cancel_record(&mut self) -> bool {
        match self.form.as_mut().filter(|f| f.is_open()) {
            Some(form) => {
                form.discard();
                true
            }
            None => false,
        }
    }
}
