//! Catalog and initial values shipped with the app.

use serde::Deserialize;

use crate::error::EditorError;
use crate::model::{Model, Param};

const SEED_JSON: &str = include_str!("../seed/params.json");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Seed {
    pub params: Vec<Param>,
    #[serde(default)]
    pub model: Model,
}

impl Seed {
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Decode the embedded seed document.
pub fn load() -> Result<Seed, EditorError> {
    Seed::from_json(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ParamType, ParamValue};

    #[test]
    fn test_embedded_seed_decodes() {
        let seed = load().unwrap();

        assert_eq!(seed.params.len(), 2);
        assert_eq!(seed.params[0].id, 1);
        assert_eq!(seed.params[0].name, "Назначение");
        assert_eq!(seed.params[0].kind, ParamType::String);
        assert_eq!(seed.params[1].name, "Длина");

        assert_eq!(
            seed.model.param_values,
            vec![
                ParamValue { param_id: 1, value: "повседневное".to_string() },
                ParamValue { param_id: 2, value: "макси".to_string() },
            ]
        );
    }

    #[test]
    fn test_missing_model_defaults_to_empty() {
        let seed = Seed::from_json(r#"{"params":[{"id":5,"name":"Вес","type":"number"}]}"#).unwrap();
        assert_eq!(seed.params[0].kind, ParamType::Number);
        assert!(seed.model.param_values.is_empty());
    }

    #[test]
    fn test_bad_type_is_seed_error() {
        let err = Seed::from_json(r#"{"params":[{"id":1,"name":"x","type":"date"}]}"#).unwrap_err();
        assert!(matches!(err, EditorError::Seed(_)));
    }
}
