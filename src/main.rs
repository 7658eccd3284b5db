mod app;
mod components;
mod editor;
mod error;
mod form;
mod logging;
mod model;
mod seed;

use app::App;

fn main() {
    logging::init();
    leptos::mount::mount_to_body(App);
}
