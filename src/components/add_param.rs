use leptos::prelude::*;

use crate::components::input_field::InputField;
use crate::editor::ParamEditor;
use crate::form::PendingParam;
use crate::model::ParamType;

/// Form collecting the type, name and value of a new parameter.
#[component]
pub fn AddParam() -> impl IntoView {
    let editor = expect_context::<ParamEditor>();
    let pending = RwSignal::new(PendingParam::default());

    let kind = Signal::derive(move || pending.with(|p| p.kind));
    let name = Signal::derive(move || pending.with(|p| p.name.clone()));
    let value = Signal::derive(move || pending.with(|p| p.value.clone()));

    let on_type_change = move |ev: leptos::ev::Event| {
        match event_target_value(&ev).parse::<ParamType>() {
            Ok(kind) => pending.update(|p| p.set_kind(kind)),
            Err(e) => log::warn!("{}", e),
        }
    };

    let on_submit = move |_| {
        if pending.with_untracked(PendingParam::is_incomplete) {
            return;
        }
        let id = editor.next_id();
        if let Some(row) = pending.try_update(|p| p.take(id)).flatten() {
            editor.add(row);
        }
    };

    view! {
        <div class="container">
            <div class="input-list">
                <label>
                    "Type:"
                    <br />
                    <select
                        class="input"
                        prop:value=move || kind.get().as_str().to_string()
                        on:change=on_type_change
                    >
                        {ParamType::ALL
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <InputField
                    name="Name"
                    value=name
                    on_change=move |text: String| pending.update(|p| p.name = text)
                />
                <InputField
                    name="Value"
                    value=value
                    kind=kind
                    on_change=move |text: String| pending.update(|p| p.value = text)
                />
            </div>
            <button
                class="btn"
                on:click=on_submit
                disabled=move || pending.with(PendingParam::is_incomplete)
            >
                "Добавить"
            </button>
        </div>
    }
}
