//! Unwrapping of Medium's JSON transport.
//!
//! Every JSON body Medium returns is preceded by an anti-hijacking guard. All
//! reads of server data go through [`unwrap_json`] (or [`decode`], which is
//! built on it).
use crate::medium::error::{Result, ScoutError};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Terminator of the guard that precedes every JSON payload.
pub const JSON_GUARD: &str = "])}while(1);</x>";

/// Strip one occurrence of [`JSON_GUARD`] and parse what follows.
pub fn unwrap_json(body: &str) -> Result<Value> {
    let (_, json) = body
        .split_once(JSON_GUARD)
        .ok_or_else(|| ScoutError::Parse("response is missing the JSON guard".into()))?;
    Ok(serde_json::from_str(json)?)
}

/// [`unwrap_json`] followed by a typed conversion.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value = unwrap_json(body)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
pub(crate) fn wrap(value: &Value) -> String {
    format!("{JSON_GUARD}{value}")
}
