use leptos::prelude::*;

use super::record_form::RecordForm;
use super::record_table::RecordTable;
use super::use_workspace;

/// Main area: the open dictionary's records and, when open, the record form
#[component]
pub fn WorkspacePanel() -> impl IntoView {
    let workspace = use_workspace();
    // Memos so draft edits don't rebuild the panel (and the focused input)
    let current = Memo::new(move |_| workspace.with(|w| w.current_name().map(String::from)));
    let form_open = Memo::new(move |_| workspace.with(|w| w.form().is_some()));

    view! {
        <div class="p-6">
            {move || match current.get() {
                Some(name) => view! {
                    <div>
                        <div class="flex justify-between items-center mb-6">
                            <h2 class="text-2xl font-bold">{name}</h2>
                            <button
                                class="bg-blue-500 hover:bg-blue-600 text-white px-4 py-2 rounded disabled:opacity-50"
                                disabled=move || form_open.get()
                                on:click=move |_| {
                                    workspace.update(|w| {
                                        w.begin_record();
                                    });
                                }
                            >
                                "+ New Record"
                            </button>
                        </div>
                        <RecordTable />
                        <Show when=move || form_open.get()>
                            <RecordForm />
                        </Show>
                    </div>
                }.into_any(),
                None => view! {
                    <div class="text-center py-12 bg-white rounded-lg shadow">
                        <p class="text-gray-500">"Open a dictionary from the sidebar to see its records"</p>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
