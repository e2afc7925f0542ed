//! Call-site payload classification
//!
//! Log calls take two loosely typed arguments, `data` and `message`. Each is
//! converted once at the call boundary into a [`LoggablePayload`], and
//! [`resolve`] decides which one is the message and which one supplies context
//! fields.

use super::error::LoggerError;
use super::log_context::{FieldValue, LogContext};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::hash::Hash;

/// The shape of a value passed to a log call
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoggablePayload {
    /// Elements become fields keyed by their index: `"0"`, `"1"`, ...
    Sequence(Vec<FieldValue>),
    /// Entries become fields directly
    Mapping(LogContext),
    /// A message
    Text(String),
    /// An error; its description goes under the logger's error key
    ErrorValue(String),
    /// Contributes nothing
    #[default]
    Empty,
}

impl LoggablePayload {
    /// Capture an error by its display text
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        LoggablePayload::ErrorValue(err.to_string())
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, LoggablePayload::Text(_))
    }

    /// Context fields contributed by this payload
    fn into_fields(self, error_key: &str) -> LogContext {
        match self {
            LoggablePayload::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            LoggablePayload::Mapping(context) => context,
            LoggablePayload::ErrorValue(description) => {
                LogContext::new().with_field(error_key, description)
            }
            LoggablePayload::Text(_) | LoggablePayload::Empty => LogContext::new(),
        }
    }
}

/// Split a call's two arguments into the message and the context fields
///
/// Whichever argument is text becomes the message, so `(text, payload)` and
/// `(payload, text)` are equivalent. When both are text, `data` wins.
pub(crate) fn resolve(
    data: LoggablePayload,
    message: LoggablePayload,
    error_key: &str,
) -> (Option<String>, LogContext) {
    use LoggablePayload::Text;

    match (data, message) {
        (Text(text), Text(_)) => (Some(text), LogContext::new()),
        (Text(text), source) => (Some(text), source.into_fields(error_key)),
        (source, Text(text)) => (Some(text), source.into_fields(error_key)),
        (source, _) => (None, source.into_fields(error_key)),
    }
}

impl From<()> for LoggablePayload {
    fn from(_: ()) -> Self {
        LoggablePayload::Empty
    }
}

impl From<&str> for LoggablePayload {
    fn from(text: &str) -> Self {
        LoggablePayload::Text(text.to_string())
    }
}

impl From<String> for LoggablePayload {
    fn from(text: String) -> Self {
        LoggablePayload::Text(text)
    }
}

impl From<&String> for LoggablePayload {
    fn from(text: &String) -> Self {
        LoggablePayload::Text(text.clone())
    }
}

impl<T: Into<LoggablePayload>> From<Option<T>> for LoggablePayload {
    fn from(value: Option<T>) -> Self {
        value.map_or(LoggablePayload::Empty, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for LoggablePayload {
    fn from(items: Vec<T>) -> Self {
        LoggablePayload::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>, const N: usize> From<[T; N]> for LoggablePayload {
    fn from(items: [T; N]) -> Self {
        LoggablePayload::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<LogContext> for LoggablePayload {
    fn from(context: LogContext) -> Self {
        LoggablePayload::Mapping(context)
    }
}

impl From<&LogContext> for LoggablePayload {
    fn from(context: &LogContext) -> Self {
        LoggablePayload::Mapping(context.clone())
    }
}

impl From<IndexMap<String, FieldValue>> for LoggablePayload {
    fn from(fields: IndexMap<String, FieldValue>) -> Self {
        LoggablePayload::Mapping(fields.into())
    }
}

impl<K, V> From<HashMap<K, V>> for LoggablePayload
where
    K: Into<String> + Eq + Hash,
    V: Into<FieldValue>,
{
    fn from(map: HashMap<K, V>) -> Self {
        LoggablePayload::Mapping(map.into())
    }
}

impl From<FieldValue> for LoggablePayload {
    /// Arrays, objects and strings keep their shape; scalars contribute nothing
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Array(items) => LoggablePayload::Sequence(items),
            FieldValue::Object(context) => LoggablePayload::Mapping(context),
            FieldValue::String(text) => LoggablePayload::Text(text),
            _ => LoggablePayload::Empty,
        }
    }
}

impl From<serde_json::Value> for LoggablePayload {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::from(value).into()
    }
}

impl From<LoggerError> for LoggablePayload {
    fn from(err: LoggerError) -> Self {
        LoggablePayload::from_error(&err)
    }
}

impl From<&LoggerError> for LoggablePayload {
    fn from(err: &LoggerError) -> Self {
        LoggablePayload::from_error(err)
    }
}

impl From<std::io::Error> for LoggablePayload {
    fn from(err: std::io::Error) -> Self {
        LoggablePayload::from_error(&err)
    }
}

impl From<&std::io::Error> for LoggablePayload {
    fn from(err: &std::io::Error) -> Self {
        LoggablePayload::from_error(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LoggablePayload {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LoggablePayload::from_error(err.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context(value: serde_json::Value) -> LogContext {
        match FieldValue::from(value) {
            FieldValue::Object(context) => context,
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn test_text_then_mapping() {
        let (message, fields) = resolve("hello".into(), json!({"foo": "bar"}).into(), "error");
        assert_eq!(message.as_deref(), Some("hello"));
        assert_eq!(fields, context(json!({"foo": "bar"})));
    }

    #[test]
    fn test_mapping_then_text() {
        let (message, fields) = resolve(json!({"foo": "bar"}).into(), "hello".into(), "error");
        assert_eq!(message.as_deref(), Some("hello"));
        assert_eq!(fields, context(json!({"foo": "bar"})));
    }

    #[test]
    fn test_sequence_indexes() {
        let (message, fields) = resolve(vec!["a", "b"].into(), ().into(), "error");
        assert_eq!(message, None);
        assert_eq!(fields, context(json!({"0": "a", "1": "b"})));
    }

    #[test]
    fn test_array_is_sequence() {
        let (_, fields) = resolve(["foo", "bar"].into(), "tuple log".into(), "error");
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["0", "1"]);
    }

    #[test]
    fn test_text_overrides_text_message() {
        let (message, fields) = resolve("first".into(), "second".into(), "error");
        assert_eq!(message.as_deref(), Some("first"));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_error_value_uses_error_key() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config missing");
        let (message, fields) = resolve(err.into(), "load failed".into(), "err");

        assert_eq!(message.as_deref(), Some("load failed"));
        assert_eq!(fields, context(json!({"err": "config missing"})));
    }

    #[test]
    fn test_text_with_error_message_slot() {
        let (message, fields) = resolve(
            "exception log".into(),
            LoggerError::other("boom").into(),
            "error",
        );
        assert_eq!(message.as_deref(), Some("exception log"));
        assert_eq!(fields, context(json!({"error": "boom"})));
    }

    #[test]
    fn test_empty_and_scalars() {
        let (message, fields) = resolve(().into(), ().into(), "error");
        assert_eq!(message, None);
        assert!(fields.is_empty());

        assert_eq!(LoggablePayload::from(json!(42)), LoggablePayload::Empty);
        assert_eq!(LoggablePayload::from(None::<&str>), LoggablePayload::Empty);
    }

    #[test]
    fn test_two_mappings_ignore_second() {
        let (message, fields) = resolve(
            json!({"a": 1}).into(),
            json!({"b": 2}).into(),
            "error",
        );
        assert_eq!(message, None);
        assert_eq!(fields, context(json!({"a": 1})));
    }
}
