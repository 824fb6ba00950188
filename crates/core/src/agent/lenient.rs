use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Deserializes an optional field, turning a value of the wrong shape into
/// `None` instead of failing the whole document.
pub(super) fn or_absent<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            debug!("ignoring malformed field: {err}");
            Ok(None)
        }
    }
}

/// Deserializes an optional sequence element by element.
///
/// A value that is not an array is absent, and an element that fails to
/// deserialize is skipped without affecting its siblings.
pub(super) fn entries<'de, D, T>(
    deserializer: D,
) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(values) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let entries = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("ignoring malformed entry #{index}: {err}");
                None
            }
        })
        .collect();
    Ok(Some(entries))
}

/// Deserializes an optional text field.
///
/// Numbers and booleans are kept in their JSON text form, arrays and
/// objects are absent.
pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null => None,
        other => {
            debug!("ignoring non-text value: {other}");
            None
        }
    };
    Ok(text)
}
