use leptos::prelude::*;
use lexicon::schema_form::{FormControl, FormField};

use super::use_workspace;

const INPUT_CLASS: &str =
    "w-full px-3 py-2 text-sm border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Data-entry form for the open dictionary, one control per field
#[component]
pub fn RecordForm() -> impl IntoView {
    let workspace = use_workspace();
    let fields = workspace.with_untracked(|w| {
        w.form().map(|f| f.fields().to_vec()).unwrap_or_default()
    });

    view! {
        <div class="mt-6 bg-white rounded-lg shadow p-6">
            <h3 class="text-lg font-bold mb-4">"New record"</h3>
            <div class="space-y-4">
                {fields.into_iter().map(|field| view! { <FieldRow field=field /> }).collect_view()}
            </div>
            <div class="flex justify-end space-x-2 mt-6">
                <button
                    class="px-4 py-2 rounded text-gray-600 hover:bg-gray-100"
                    on:click=move |_| {
                        workspace.update(|w| {
                            w.cancel_record();
                        });
                    }
                >
                    "Cancel"
                </button>
                <button
                    class="px-4 py-2 rounded bg-blue-500 hover:bg-blue-600 text-white"
                    on:click=move |_| {
                        workspace.update(|w| {
                            if let Some(record) = w.save_record() {
                                log::debug!("Saved record with {} fields", record.len());
                            }
                        });
                    }
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}

#[component]
fn FieldRow(field: FormField) -> impl IntoView {
    let workspace = use_workspace();
    let name = field.descriptor.name.clone();
    let label = match &field.descriptor.ref_target {
        Some(target) => format!("{} (ref {})", name, target),
        None => format!("{} ({})", name, field.descriptor.kind),
    };

    // The control shows what was typed, not the coerced draft value:
    // a number input would otherwise lose "-" or "2." mid-edit.
    let value = RwSignal::new(workspace.with_untracked(|w| {
        w.form().map(|f| f.value_of(&name)).unwrap_or_default()
    }));
    let on_edit = Callback::new(move |raw: String| {
        value.set(raw.clone());
        workspace.update(|w| {
            w.set_draft_field(&name, &raw);
        });
    });

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">
                {label}
                {field.descriptor.required.then(|| view! { <span class="text-red-500">" *"</span> })}
            </label>
            <FieldControl control=field.control value=value on_edit=on_edit />
        </div>
    }
}

#[component]
fn FieldControl(control: FormControl, value: RwSignal<String>, on_edit: Callback<String>) -> impl IntoView {
    match control {
        FormControl::ReferenceInput => view! {
            <input
                type="text"
                class=format!("{} bg-yellow-50", INPUT_CLASS)
                placeholder="Record id"
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
        }.into_any(),
        FormControl::TextInput => view! {
            <input
                type="text"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
        }.into_any(),
        FormControl::NumberInput => view! {
            <input
                type="number"
                step="any"
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            />
        }.into_any(),
        FormControl::TriStateSelect => view! {
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_edit.run(event_target_value(&ev))
            >
                {control.choices().iter().map(|(choice, label)| view! {
                    <option value=*choice>{*label}</option>
                }).collect_view()}
            </select>
        }.into_any(),
        FormControl::RawTextArea => view! {
            <textarea
                rows="3"
                class=format!("{} font-mono", INPUT_CLASS)
                prop:value=move || value.get()
                on:input=move |ev| on_edit.run(event_target_value(&ev))
            ></textarea>
        }.into_any(),
    }
}
