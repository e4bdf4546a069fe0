//! Console: named user intents against the schema service
//!
//! Every intent that talks to the service returns
//! `Result<Outcome, ServiceError>`. On `Err` the failure has already been
//! logged and the workspace is exactly as it was before the call; callers
//! are free to ignore the error.
//!
//! Writes are followed by dependent reads (create then reload the list, add
//! field then reload its fields), issued only after the write succeeded.
//! Once the write went through the intent reports `Applied`: a failing
//! follow-up read is logged and leaves its part of the workspace stale.

use std::sync::Arc;
use tracing::{debug, error, info};

use super::workspace::Workspace;
use crate::domain::{FieldDraft, NewDictionary, Record, SchemaPort, ServiceResult};

/// What an intent did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Request(s) sent and the workspace updated
    Applied,
    /// Nothing to do: blank input, or the data was already there
    Skipped,
}

pub struct Console {
    service: Arc<dyn SchemaPort>,
    workspace: Workspace,
}

impl Console {
    pub fn new(service: Arc<dyn SchemaPort>) -> Self {
        Self {
            service,
            workspace: Workspace::new(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    // ------------------------------------------------------------------
    // Dictionaries
    // ------------------------------------------------------------------

    pub async fn reload_dictionaries(&mut self) -> ServiceResult<Outcome> {
        let names = self
            .service
            .list_dictionaries()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load dictionary list"))?;
        debug!(count = names.len(), "Dictionary list loaded");
        self.workspace.replace_dictionaries(names);
        Ok(Outcome::Applied)
    }

    /// Expand/collapse the dictionary tree. The list is fetched on first
    /// expansion only.
    pub async fn toggle_dictionaries(&mut self) -> ServiceResult<Outcome> {
        let expanded = self.workspace.toggle_dictionaries();
        if expanded && self.workspace.dictionaries().is_empty() {
            return self.reload_dictionaries().await;
        }
        Ok(Outcome::Skipped)
    }

    /// Create a dictionary, then reload the list. Blank names send nothing.
    pub async fn create_dictionary(&mut self, name: &str) -> ServiceResult<Outcome> {
        let Some(request) = NewDictionary::shape(name) else {
            debug!("Ignoring dictionary with blank name");
            return Ok(Outcome::Skipped);
        };

        self.service
            .create_dictionary(&request)
            .await
            .inspect_err(|e| error!(dictionary = %request.name, error = %e, "Failed to create dictionary"))?;
        info!(dictionary = %request.name, "Dictionary created");

        // already logged; the list just stays stale
        let _ = self.reload_dictionaries().await;
        Ok(Outcome::Applied)
    }

    // ------------------------------------------------------------------
    // Fields
    // ------------------------------------------------------------------

    pub async fn reload_properties(&mut self, dictionary: &str) -> ServiceResult<Outcome> {
        let names = self
            .service
            .list_properties(dictionary)
            .await
            .inspect_err(|e| error!(dictionary, error = %e, "Failed to load dictionary fields"))?;
        self.workspace.replace_properties(dictionary, names);
        Ok(Outcome::Applied)
    }

    /// Expand/collapse one dictionary node; its fields are re-fetched on
    /// every expansion.
    pub async fn toggle_properties(&mut self, dictionary: &str) -> ServiceResult<Outcome> {
        if self.workspace.toggle_properties(dictionary) {
            return self.reload_properties(dictionary).await;
        }
        Ok(Outcome::Skipped)
    }

    /// Load the dictionary names offered as reference targets. A failure
    /// keeps the previous candidates.
    pub async fn prepare_field_dialog(&mut self) -> ServiceResult<Outcome> {
        let names = self
            .service
            .list_dictionaries()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to load reference targets"))?;
        self.workspace.replace_reference_candidates(names);
        Ok(Outcome::Applied)
    }

    /// Add a field, then reload that dictionary's field list. When the
    /// dictionary is the one open, its schema is refreshed as well so the
    /// table and form pick up the new column. `Err` only when the add itself
    /// failed.
    pub async fn add_field(&mut self, dictionary: &str, draft: &FieldDraft) -> ServiceResult<Outcome> {
        let Some(request) = draft.to_request() else {
            debug!(dictionary, "Ignoring field with blank name or missing ref target");
            return Ok(Outcome::Skipped);
        };

        self.service
            .add_field(dictionary, &request)
            .await
            .inspect_err(|e| error!(dictionary, field = %request.field_name, error = %e, "Failed to add field"))?;
        info!(dictionary, field = %request.field_name, "Field added");

        let _ = self.reload_properties(dictionary).await;

        if self.workspace.current_name() == Some(dictionary) {
            match self.service.get_schema(dictionary).await {
                Ok(schema) => {
                    self.workspace.refresh_schema(dictionary, schema);
                }
                Err(e) => error!(dictionary, error = %e, "Failed to refresh schema"),
            }
        }

        Ok(Outcome::Applied)
    }

    // ------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------

    /// Load the full schema and show it with an empty record collection
    pub async fn open_dictionary(&mut self, dictionary: &str) -> ServiceResult<Outcome> {
        let schema = self
            .service
            .get_schema(dictionary)
            .await
            .inspect_err(|e| error!(dictionary, error = %e, "Failed to load schema"))?;
        info!(dictionary, fields = schema.len(), "Dictionary opened");
        self.workspace.open_dictionary(dictionary, schema);
        Ok(Outcome::Applied)
    }

    pub fn begin_record(&mut self) -> Outcome {
        applied(self.workspace.begin_record())
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> Outcome {
        applied(self.workspace.set_draft_field(name, raw))
    }

    /// Records are session-local: nothing is sent to the service.
    pub fn save_record(&mut self) -> Option<Record> {
        self.workspace.save_record()
    }

    pub fn cancel_record(&mut self) -> Outcome {
        applied(self.workspace.cancel_record())
    }
}

fn applied(done: bool) -> Outcome {
    if done {
        Outcome::Applied
    } else {
        Outcome::Skipped
    }
}
