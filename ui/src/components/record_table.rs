use leptos::prelude::*;
use lexicon::schema_form::{TableBody, NO_RECORDS};

use super::use_workspace;

#[component]
pub fn RecordTable() -> impl IntoView {
    let workspace = use_workspace();
    let table = Memo::new(move |_| workspace.with(|w| w.table()));

    move || {
        table.get().map(|table| {
            view! {
                <table class="min-w-full bg-white rounded-lg shadow text-sm">
                    <thead class="bg-gray-50">
                        <tr>
                            {table.columns.iter().map(|column| view! {
                                <th class="px-4 py-2 text-left">
                                    <div class="font-medium text-gray-900">{column.name.clone()}</div>
                                    <div class="text-xs text-gray-500">{column.kind_label}</div>
                                </th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {match table.body {
                            TableBody::Placeholder { colspan } => view! {
                                <tr>
                                    <td class="px-4 py-6 text-center text-gray-500" colspan=colspan.to_string()>
                                        {NO_RECORDS}
                                    </td>
                                </tr>
                            }.into_any(),
                            TableBody::Rows(rows) => rows.into_iter().map(|row| view! {
                                <tr class="border-t">
                                    {row.into_iter().map(|cell| view! {
                                        <td class="px-4 py-2">{cell}</td>
                                    }).collect_view()}
                                </tr>
                            }).collect_view().into_any(),
                        }}
                    </tbody>
                </table>
            }
        })
    }
}
