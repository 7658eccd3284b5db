use leptos::prelude::*;

use crate::components::add_param::AddParam;
use crate::components::params_list::ParamsList;
use crate::editor::ParamEditor;
use crate::seed::{self, Seed};

#[component]
pub fn App() -> impl IntoView {
    let seed = seed::load().unwrap_or_else(|e| {
        log::error!("Failed to load seed parameters, starting empty: {}", e);
        Seed::default()
    });

    // The single editor instance; the form and the list both mutate it.
    let editor = ParamEditor::new(&seed.params, &seed.model);
    provide_context(editor);

    view! {
        <div class="app">
            <main>
                <AddParam />
                <ParamsList />
            </main>
        </div>
    }
}
