use serde_json::{Map, Value};

use crate::domain::Outage;
use crate::error::AppError;
use crate::normalize::fields::{coerce_int_field, coerce_text_field, Coercion};

const INT_FIELDS: [&str; 7] = [
    "id",
    "starttime",
    "stoptime",
    "warntime",
    "createdby",
    "modifiedby",
    "lastmodified",
];
const TEXT_FIELDS: [&str; 2] = ["title", "description"];

/// Accepted shapes for building an [`Outage`].
#[derive(Debug, Clone, PartialEq)]
pub enum OutageInput {
    /// Loosely-typed key/value source, e.g. a decoded form or JSON row.
    Mapping(Map<String, Value>),
    /// An already structured record.
    Record(Outage),
}

impl From<Map<String, Value>> for OutageInput {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<Outage> for OutageInput {
    fn from(outage: Outage) -> Self {
        Self::Record(outage)
    }
}

impl Outage {
    /// Build from a mapping or record. Mapping values that cannot be coerced into their
    /// field are left unset.
    pub fn from_input(input: impl Into<OutageInput>) -> Self {
        match input.into() {
            OutageInput::Record(outage) => outage,
            OutageInput::Mapping(map) => {
                from_mapping(&map, Coercion::Lenient).unwrap_or_default()
            }
        }
    }

    /// Like [`Outage::from_input`], but an uncoercible mapping value fails with
    /// `OUTAGE_FIELD_PARSE_FAILED`.
    pub fn from_input_strict(input: impl Into<OutageInput>) -> Result<Self, AppError> {
        match input.into() {
            OutageInput::Record(outage) => Ok(outage),
            OutageInput::Mapping(map) => from_mapping(&map, Coercion::Strict),
        }
    }

    /// Build from an untyped value: absent or `null` yields an empty record, an object is
    /// read as a mapping, any other shape is rejected.
    pub fn from_value(value: Option<&Value>) -> Result<Self, AppError> {
        from_value_with(value, Coercion::Lenient)
    }

    pub fn from_value_strict(value: Option<&Value>) -> Result<Self, AppError> {
        from_value_with(value, Coercion::Strict)
    }
}

fn from_value_with(value: Option<&Value>, coercion: Coercion) -> Result<Outage, AppError> {
    match value {
        None | Some(Value::Null) => Ok(Outage::default()),
        Some(Value::Object(map)) => from_mapping(map, coercion),
        Some(other) => Err(AppError::invalid_input(format!(
            "got {}",
            value_kind(other)
        ))),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn from_mapping(map: &Map<String, Value>, coercion: Coercion) -> Result<Outage, AppError> {
    for key in map.keys() {
        if !INT_FIELDS.contains(&key.as_str()) && !TEXT_FIELDS.contains(&key.as_str()) {
            tracing::trace!(target: "outage_core::input", %key, "ignoring unknown field");
        }
    }

    let int = |field: &str| coerce_int_field(field, map.get(field), coercion);
    let text = |field: &str| coerce_text_field(field, map.get(field), coercion);

    let outage = Outage {
        id: int("id")?,
        starttime: int("starttime")?,
        stoptime: int("stoptime")?,
        warntime: int("warntime")?,
        title: text("title")?,
        description: text("description")?,
        createdby: int("createdby")?,
        modifiedby: int("modifiedby")?,
        lastmodified: int("lastmodified")?,
    };

    tracing::debug!(
        target: "outage_core::input",
        id = ?outage.id,
        starttime = ?outage.starttime,
        stoptime = ?outage.stoptime,
        "outage built from mapping"
    );
    Ok(outage)
}
