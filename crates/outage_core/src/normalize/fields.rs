use serde_json::Value;

use crate::error::AppError;

/// How construction treats a value that cannot be coerced into its field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Unparseable values become unknown (`None`) and are logged.
    #[default]
    Lenient,
    /// Unparseable values fail with `OUTAGE_FIELD_PARSE_FAILED`.
    Strict,
}

impl Coercion {
    fn settle<T>(
        self,
        field: &str,
        parsed: Result<Option<T>, AppError>,
    ) -> Result<Option<T>, AppError> {
        match (self, parsed) {
            (Coercion::Lenient, Err(err)) => {
                tracing::warn!(
                    target: "outage_core::normalize",
                    field,
                    details = err.details.as_deref().unwrap_or_default(),
                    "unparseable value treated as unset"
                );
                Ok(None)
            }
            (_, parsed) => parsed,
        }
    }
}

/// Coerce a loosely-typed value into an integer field.
///
/// Missing, `null`, blank and unparseable values are unknown (`None`), never zero.
/// Unparseable values are logged with the raw input.
pub fn parse_int_field(field: &str, value: Option<&Value>) -> Option<i64> {
    coerce_int_field(field, value, Coercion::Lenient).unwrap_or_default()
}

pub fn coerce_int_field(
    field: &str,
    value: Option<&Value>,
    coercion: Coercion,
) -> Result<Option<i64>, AppError> {
    coercion.settle(field, parse_int_field_strict(field, value))
}

/// Strict integer coercion.
///
/// Contract:
/// - Missing, `null` and blank strings are unknown (`None`), never zero.
/// - Integers, whole-valued floats and numeric strings parse to `Some`.
/// - Everything else is a parse failure carrying the raw value (no silent truncation).
pub fn parse_int_field_strict(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<i64>, AppError> {
    let Some(value) = value else { return Ok(None) };
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => number_to_i64(n)
            .map(Some)
            .ok_or_else(|| AppError::field_parse_failed(field, format!("value={n}"))),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse::<i64>().map(Some).map_err(|e| {
                AppError::field_parse_failed(field, format!("value={trimmed}; err={e}"))
            })
        }
        other => Err(AppError::field_parse_failed(
            field,
            format!("unsupported value={other}"),
        )),
    }
}

fn number_to_i64(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    let f = n.as_f64()?;
    // Exclusive upper bound: i64::MAX is not representable as f64.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Coerce a loosely-typed value into a text field, leniently.
pub fn parse_text_field(field: &str, value: Option<&Value>) -> Option<String> {
    coerce_text_field(field, value, Coercion::Lenient).unwrap_or_default()
}

pub fn coerce_text_field(
    field: &str,
    value: Option<&Value>,
    coercion: Coercion,
) -> Result<Option<String>, AppError> {
    coercion.settle(field, parse_text_field_strict(field, value))
}

/// Strict text coercion. Numbers keep their decimal rendering; other non-strings fail.
pub fn parse_text_field_strict(
    field: &str,
    value: Option<&Value>,
) -> Result<Option<String>, AppError> {
    let Some(value) = value else { return Ok(None) };
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(AppError::field_parse_failed(
            field,
            format!("unsupported value={other}"),
        )),
    }
}
