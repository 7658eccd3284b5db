use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::editor::ParamEditor;
use crate::model::EditorParam;

/// Every current parameter as an editable input, plus a console dump button.
#[component]
pub fn ParamsList() -> impl IntoView {
    let editor = expect_context::<ParamEditor>();

    view! {
        <div class="container">
            <div class="input-list">
                <For
                    each=move || editor.params()
                    key=|row| row.id
                    children=move |row| view! { <ParamRow row=row /> }
                />
            </div>
            <button class="btn" on:click=move |_| editor.dump()>
                "Вывод в консоль"
            </button>
        </div>
    }
}

#[component]
fn ParamRow(row: EditorParam) -> impl IntoView {
    let editor = expect_context::<ParamEditor>();
    let id = row.id;
    let kind = row.kind;

    // Rows are keyed by id, so the value has to be read back reactively.
    let value = Signal::derive(move || editor.value_of(id).unwrap_or_default());

    view! {
        <div class="input-list__item">
            <InputField
                name=row.name
                value=value
                kind=Signal::derive(move || kind)
                on_change=move |text: String| editor.update(id, text)
            />
            <button
                class="input-list__delete-button"
                on:click=move |_| editor.delete(id)
            >
                "x"
            </button>
        </div>
    }
}
