use leptos::prelude::*;
use lexicon::application::Workspace;

pub mod record_form;
pub mod record_table;
pub mod sidebar;
pub mod workspace_panel;

/// The workspace signal provided by `App`
pub fn use_workspace() -> RwSignal<Workspace> {
    expect_context::<RwSignal<Workspace>>()
}
