use leptos::ev::MouseEvent;
use leptos::prelude::*;
use lexicon::domain::{FieldDraft, FieldKindChoice};

use super::use_workspace;
use crate::actions;

/// What a right-click opened a menu on
#[derive(Clone, Debug, PartialEq)]
enum MenuTarget {
    Root,
    Dictionary(String),
}

#[derive(Clone, Debug, PartialEq)]
struct ContextMenu {
    target: MenuTarget,
    x: i32,
    y: i32,
}

impl ContextMenu {
    fn at(target: MenuTarget, ev: &MouseEvent) -> Self {
        Self {
            target,
            x: ev.client_x(),
            y: ev.client_y(),
        }
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let workspace = use_workspace();
    let menu = RwSignal::new(None::<ContextMenu>);
    let create_open = RwSignal::new(false);
    // Dictionary the add-field dialog is open for
    let field_dialog = RwSignal::new(None::<String>);

    let expanded = move || workspace.with(|w| w.is_dictionaries_expanded());

    view! {
        <div
            class="w-64 bg-gray-800 text-white p-4 flex flex-col"
            on:click=move |_| menu.set(None)
        >
            <h1 class="text-2xl font-bold mb-8">"Lexicon"</h1>

            <div
                class="p-2 hover:bg-gray-700 rounded cursor-pointer select-none"
                on:click=move |_| actions::toggle_dictionaries(workspace)
                on:contextmenu=move |ev: MouseEvent| {
                    ev.prevent_default();
                    menu.set(Some(ContextMenu::at(MenuTarget::Root, &ev)));
                }
            >
                {move || if expanded() { "▾ Dictionaries" } else { "▸ Dictionaries" }}
            </div>

            <Show when=expanded>
                <ul class="ml-3 space-y-1 flex-1 overflow-y-auto">
                    {move || {
                        workspace
                            .with(|w| w.dictionaries().to_vec())
                            .into_iter()
                            .map(|name| view! { <DictionaryNode name=name menu=menu /> })
                            .collect_view()
                    }}
                </ul>
            </Show>

            {move || menu.get().map(|m| {
                let style = format!("left: {}px; top: {}px;", m.x, m.y);
                match m.target {
                    MenuTarget::Root => view! {
                        <div class="fixed z-50 bg-white text-gray-800 rounded shadow-lg py-1 text-sm" style=style>
                            <button
                                class="block w-full text-left px-4 py-1 hover:bg-gray-100"
                                on:click=move |_| create_open.set(true)
                            >
                                "New dictionary"
                            </button>
                        </div>
                    }.into_any(),
                    MenuTarget::Dictionary(name) => {
                        let open_name = name.clone();
                        view! {
                            <div class="fixed z-50 bg-white text-gray-800 rounded shadow-lg py-1 text-sm" style=style>
                                <button
                                    class="block w-full text-left px-4 py-1 hover:bg-gray-100"
                                    on:click=move |_| actions::open_dictionary(workspace, open_name.clone())
                                >
                                    "Open records"
                                </button>
                                <button
                                    class="block w-full text-left px-4 py-1 hover:bg-gray-100"
                                    on:click=move |_| {
                                        actions::prepare_field_dialog(workspace);
                                        field_dialog.set(Some(name.clone()));
                                    }
                                >
                                    "Add field"
                                </button>
                            </div>
                        }.into_any()
                    }
                }
            })}

            <Show when=move || create_open.get()>
                <CreateDictionaryModal open=create_open />
            </Show>

            {move || field_dialog.get().map(|dictionary| view! {
                <AddFieldModal dictionary=dictionary dialog=field_dialog />
            })}

            <div class="text-xs text-gray-500 mt-4">
                "Right-click for actions"
            </div>
        </div>
    }
}

#[component]
fn DictionaryNode(name: String, menu: RwSignal<Option<ContextMenu>>) -> impl IntoView {
    let workspace = use_workspace();
    let toggle_name = name.clone();
    let menu_name = name.clone();
    let expanded_name = name.clone();
    let props_name = name.clone();

    let expanded = move || workspace.with(|w| w.is_expanded(&expanded_name));
    let is_current = {
        let name = name.clone();
        move || workspace.with(|w| w.current_name() == Some(name.as_str()))
    };

    view! {
        <li>
            <div
                class=move || {
                    if is_current() {
                        "p-1 rounded cursor-pointer select-none bg-gray-700"
                    } else {
                        "p-1 rounded cursor-pointer select-none hover:bg-gray-700"
                    }
                }
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    actions::toggle_properties(workspace, toggle_name.clone());
                }
                on:contextmenu=move |ev: MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    menu.set(Some(ContextMenu::at(MenuTarget::Dictionary(menu_name.clone()), &ev)));
                }
            >
                {name.clone()}
            </div>
            <Show when=expanded>
                <ul class="ml-4 text-sm text-gray-300">
                    {
                        let props_name = props_name.clone();
                        move || {
                            workspace
                                .with(|w| w.properties_of(&props_name).to_vec())
                                .into_iter()
                                .map(|field| view! { <li class="py-0.5">{field}</li> })
                                .collect_view()
                        }
                    }
                </ul>
            </Show>
        </li>
    }
}

// ============================================================================
// Modals
// ============================================================================

#[component]
fn Modal(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-40 bg-black bg-opacity-50 flex items-center justify-center"
            on:click=|ev: MouseEvent| ev.stop_propagation()
        >
            <div class="bg-white text-gray-800 rounded-lg shadow-xl p-6 w-96">
                <h3 class="text-lg font-bold mb-4">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn CreateDictionaryModal(open: RwSignal<bool>) -> impl IntoView {
    let workspace = use_workspace();
    let name = RwSignal::new(String::new());

    // A blank name sends nothing and keeps the dialog open
    let on_save = move |_| {
        if actions::create_dictionary(workspace, &name.get_untracked()) {
            name.set(String::new());
            open.set(false);
        }
    };

    view! {
        <Modal title="New dictionary">
            <input
                type="text"
                class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Dictionary name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <div class="flex justify-end space-x-2 mt-4">
                <button class="px-4 py-2 rounded text-gray-600 hover:bg-gray-100" on:click=move |_| open.set(false)>
                    "Cancel"
                </button>
                <button class="px-4 py-2 rounded bg-blue-500 hover:bg-blue-600 text-white" on:click=on_save>
                    "Create"
                </button>
            </div>
        </Modal>
    }
}

#[component]
fn AddFieldModal(dictionary: String, dialog: RwSignal<Option<String>>) -> impl IntoView {
    let workspace = use_workspace();
    let draft = RwSignal::new(FieldDraft::default());
    let is_ref = move || draft.with(|d| d.kind.is_ref());

    let on_save = move |_| {
        let current = draft.get_untracked();
        if actions::add_field(workspace, dictionary.clone(), &current) {
            draft.update(|d| d.clear_inputs());
            dialog.set(None);
        }
    };

    view! {
        <Modal title="Add field">
            <div class="space-y-3">
                <input
                    type="text"
                    class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                    placeholder="Field name"
                    prop:value=move || draft.with(|d| d.field_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| d.field_name = value);
                    }
                />

                <select
                    class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md"
                    prop:value=move || draft.with(|d| d.kind.value())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<FieldKindChoice>() {
                            Ok(kind) => draft.update(|d| d.kind = kind),
                            Err(e) => log::warn!("{}", e),
                        }
                    }
                >
                    {FieldKindChoice::all().into_iter().map(|choice| view! {
                        <option value=choice.value()>{choice.value()}</option>
                    }).collect_view()}
                </select>

                <Show
                    when=is_ref
                    fallback=move || view! {
                        <label class="flex items-center space-x-2 text-sm">
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| d.required)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    draft.update(|d| d.required = checked);
                                }
                            />
                            <span>"Required"</span>
                        </label>
                    }
                >
                    <select
                        class="w-full px-3 py-2 text-sm border border-gray-300 rounded-md bg-yellow-50"
                        prop:value=move || draft.with(|d| d.ref_target.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.ref_target = value);
                        }
                    >
                        <option value="">"-- Select --"</option>
                        {move || workspace
                            .with(|w| w.reference_candidates().to_vec())
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect_view()}
                    </select>
                </Show>
            </div>

            <div class="flex justify-end space-x-2 mt-4">
                <button class="px-4 py-2 rounded text-gray-600 hover:bg-gray-100" on:click=move |_| dialog.set(None)>
                    "Cancel"
                </button>
                <button class="px-4 py-2 rounded bg-blue-500 hover:bg-blue-600 text-white" on:click=on_save>
                    "Add"
                </button>
            </div>
        </Modal>
    }
}
