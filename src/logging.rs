//! Browser console logging.

use log::Level;

use crate::model::EditorParam;

/// Level used when `PARAM_EDITOR_LOG` is unset or unparseable.
const DEFAULT_LEVEL: Level = Level::Info;

fn level_from(spec: Option<&str>) -> Level {
    spec.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the panic hook and route the `log` facade to the console.
pub fn init() {
    console_error_panic_hook::set_once();

    let level = level_from(option_env!("PARAM_EDITOR_LOG"));
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Logger already set: {}", e).into());
    }
}

/// Print the rows as a structured value so the console can expand them.
pub fn dump_params(rows: &[EditorParam]) {
    match serde_wasm_bindgen::to_value(&rows) {
        Ok(value) => web_sys::console::log_2(&"params".into(), &value),
        Err(e) => log::error!("Failed to serialize params: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_env_spec() {
        assert_eq!(level_from(Some("debug")), Level::Debug);
        assert_eq!(level_from(Some(" WARN ")), Level::Warn);
        assert_eq!(level_from(Some("loud")), DEFAULT_LEVEL);
        assert_eq!(level_from(None), DEFAULT_LEVEL);
    }
}
