use leptos::prelude::*;

use crate::model::ParamType;

/// Longest text any field accepts.
pub const MAX_INPUT_LEN: usize = 20;

/// A labeled, length-bounded input.
///
/// Holds no state of its own: it shows `value` and reports every edit
/// through `on_change`.
#[component]
pub fn InputField(
    /// Label text, rendered with a trailing colon.
    #[prop(into)]
    name: String,
    /// The value to display.
    value: Signal<String>,
    /// Picks a text or numeric input. Defaults to text.
    #[prop(optional)]
    kind: Option<Signal<ParamType>>,
    #[prop(optional)]
    placeholder: Option<&'static str>,
    /// Receives the raw text after each keystroke.
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
) -> impl IntoView {
    let input_type = move || kind.map(|k| k.get()).unwrap_or_default().input_type();

    view! {
        <label>
            {name}":"
            <br />
            <input
                class="input"
                type=input_type
                maxlength=MAX_INPUT_LEN.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Some(on_change) = on_change {
                        on_change.run(event_target_value(&ev));
                    }
                }
            />
        </label>
    }
}
