//! Parameter catalog, seed values and the editable row built from both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EditorError;

pub type ParamId = u64;

/// How a parameter's text value is meant to be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    #[default]
    String,
    Number,
}

impl ParamType {
    /// Selector order.
    pub const ALL: [ParamType; 2] = [ParamType::String, ParamType::Number];

    pub fn as_str(self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
        }
    }

    /// Capitalized name shown in the type selector.
    pub fn label(self) -> &'static str {
        match self {
            ParamType::String => "String",
            ParamType::Number => "Number",
        }
    }

    /// HTML `type` attribute for an input editing this kind of value.
    pub fn input_type(self) -> &'static str {
        match self {
            ParamType::String => "text",
            ParamType::Number => "number",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamType {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(ParamType::String),
            "number" => Ok(ParamType::Number),
            other => Err(EditorError::UnknownParamType(other.to_string())),
        }
    }
}

/// A catalog slot: which parameters exist and how their values are typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
}

/// Seed value for a catalog slot. Always stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamValue {
    pub param_id: ParamId,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub param_values: Vec<ParamValue>,
}

impl Model {
    /// First seed value recorded for `id`, if any.
    pub fn value_for(&self, id: ParamId) -> Option<&ParamValue> {
        self.param_values.iter().find(|v| v.param_id == id)
    }
}

/// A catalog slot merged with its current value; the unit the editor edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorParam {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub value: String,
}

impl EditorParam {
    pub fn new(id: ParamId, name: impl Into<String>, kind: ParamType, value: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            value: value.into(),
        }
    }

    pub fn from_param(param: &Param, value: &ParamValue) -> Self {
        Self::new(param.id, param.name.clone(), param.kind, value.value.clone())
    }
}
