//! User intents that talk to the schema service
//!
//! Each intent updates the shared workspace only after its request
//! succeeded. Failures are logged to the browser console and otherwise
//! ignored.

use leptos::prelude::*;
use lexicon::application::Workspace;
use lexicon::domain::{FieldDraft, NewDictionary};
use wasm_bindgen_futures::spawn_local;

use crate::api;

pub fn reload_dictionaries(workspace: RwSignal<Workspace>) {
    spawn_local(async move {
        match api::list_dictionaries().await {
            Ok(names) => {
                log::debug!("Loaded {} dictionaries", names.len());
                workspace.update(|w| w.replace_dictionaries(names));
            }
            Err(e) => log::error!("Failed to load dictionary list: {}", e),
        }
    });
}

/// Expand/collapse the dictionary root; the list is fetched the first time
pub fn toggle_dictionaries(workspace: RwSignal<Workspace>) {
    let expanded = workspace
        .try_update(|w| w.toggle_dictionaries())
        .unwrap_or(false);
    if expanded && workspace.with_untracked(|w| w.dictionaries().is_empty()) {
        reload_dictionaries(workspace);
    }
}

/// Returns `false` (and sends nothing) for a blank name
pub fn create_dictionary(workspace: RwSignal<Workspace>, input: &str) -> bool {
    let Some(request) = NewDictionary::shape(input) else {
        return false;
    };

    spawn_local(async move {
        match api::create_dictionary(&request).await {
            Ok(()) => {
                log::info!("Created dictionary {}", request.name);
                reload_dictionaries(workspace);
            }
            Err(e) => log::error!("Failed to create dictionary {}: {}", request.name, e),
        }
    });
    true
}

pub fn reload_properties(workspace: RwSignal<Workspace>, dictionary: String) {
    spawn_local(async move {
        match api::list_properties(&dictionary).await {
            Ok(names) => workspace.update(|w| w.replace_properties(&dictionary, names)),
            Err(e) => log::error!("Failed to load fields of {}: {}", dictionary, e),
        }
    });
}

/// Expand/collapse a dictionary node; fields are re-fetched on each expansion
pub fn toggle_properties(workspace: RwSignal<Workspace>, dictionary: String) {
    let expanded = workspace
        .try_update(|w| w.toggle_properties(&dictionary))
        .unwrap_or(false);
    if expanded {
        reload_properties(workspace, dictionary);
    }
}

/// Load the reference targets offered by the add-field dialog
pub fn prepare_field_dialog(workspace: RwSignal<Workspace>) {
    spawn_local(async move {
        match api::list_dictionaries().await {
            Ok(names) => workspace.update(|w| w.replace_reference_candidates(names)),
            Err(e) => log::error!("Failed to load reference targets: {}", e),
        }
    });
}

/// Returns `false` (and sends nothing) for a blank field name or a ref
/// field without a target
pub fn add_field(workspace: RwSignal<Workspace>, dictionary: String, draft: &FieldDraft) -> bool {
    let Some(request) = draft.to_request() else {
        return false;
    };

    spawn_local(async move {
        if let Err(e) = api::add_field(&dictionary, &request).await {
            log::error!("Failed to add field {} to {}: {}", request.field_name, dictionary, e);
            return;
        }
        log::info!("Added field {} to {}", request.field_name, dictionary);

        match api::list_properties(&dictionary).await {
            Ok(names) => workspace.update(|w| w.replace_properties(&dictionary, names)),
            Err(e) => log::error!("Failed to load fields of {}: {}", dictionary, e),
        }

        let is_open = workspace.with_untracked(|w| w.current_name() == Some(dictionary.as_str()));
        if is_open {
            match api::get_schema(&dictionary).await {
                Ok(schema) => {
                    workspace.update(|w| {
                        w.refresh_schema(&dictionary, schema);
                    });
                }
                Err(e) => log::error!("Failed to refresh schema of {}: {}", dictionary, e),
            }
        }
    });
    true
}

/// Load a dictionary's schema and show it with an empty record list
pub fn open_dictionary(workspace: RwSignal<Workspace>, dictionary: String) {
    spawn_local(async move {
        match api::get_schema(&dictionary).await {
            Ok(schema) => {
                log::info!("Opened {} ({} fields)", dictionary, schema.len());
                workspace.update(|w| w.open_dictionary(&dictionary, schema));
            }
            Err(e) => log::error!("Failed to load schema of {}: {}", dictionary, e),
        }
    });
}
