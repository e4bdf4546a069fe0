use leptos::prelude::*;
use lexicon::application::Workspace;

mod actions;
mod api;
mod components;

use components::sidebar::Sidebar;
use components::workspace_panel::WorkspacePanel;

#[component]
pub fn App() -> impl IntoView {
    // Single source of truth for the whole console
    provide_context(RwSignal::new(Workspace::new()));

    view! {
        <div class="flex h-screen bg-gray-100">
            <Sidebar />

            // Main Content
            <div class="flex-1 overflow-y-auto">
                <WorkspacePanel />
            </div>
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
