use thiserror::Error;

use crate::model::ParamId;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Unknown parameter type: {0}")]
    UnknownParamType(String),

    #[error("Parameter id {0} is already in use")]
    DuplicateId(ParamId),

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}

