//! Logger options
//!
//! [`LoggerOptions`] is the configuration object accepted at construction and
//! by `Logger::set_config`. Every key is optional. When loaded from JSON each
//! key is parsed on its own and a value of the wrong type is ignored rather
//! than failing the whole object.

use super::error::{LoggerError, Result};
use super::log_context::LogContext;
use super::log_level::LogLevel;
use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// A set of field names given as a list, a fixed array, or a comma-separated string
///
/// ```
/// use rust_json_logger::KeyList;
///
/// let from_list = KeyList::from(vec!["foo", "bar"]);
/// let from_array = KeyList::from(["foo", "bar"]);
/// let from_str = KeyList::from("foo,bar");
/// assert_eq!(from_list, from_array);
/// assert_eq!(from_array, from_str);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyList(IndexSet<String>);

impl KeyList {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            keys.into_iter()
                .map(Into::<String>::into)
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }
}

impl From<&str> for KeyList {
    /// Split on commas; surrounding whitespace and empty segments are dropped
    fn from(joined: &str) -> Self {
        Self::from_keys(joined.split(',').map(str::trim))
    }
}

impl From<String> for KeyList {
    fn from(joined: String) -> Self {
        Self::from(joined.as_str())
    }
}

impl<S: Into<String>> From<Vec<S>> for KeyList {
    fn from(keys: Vec<S>) -> Self {
        Self::from_keys(keys)
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for KeyList {
    fn from(keys: [S; N]) -> Self {
        Self::from_keys(keys)
    }
}

impl From<&[&str]> for KeyList {
    fn from(keys: &[&str]) -> Self {
        Self::from_keys(keys.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for KeyList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<'de> Deserialize<'de> for KeyList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Shape {
            List(Vec<String>),
            Joined(String),
        }

        Ok(match Shape::deserialize(deserializer)? {
            Shape::List(keys) => KeyList::from(keys),
            Shape::Joined(joined) => KeyList::from(joined),
        })
    }
}

/// Parse a value of any shape, keeping it only if it has the expected type
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Options recognized by logger construction and reconfiguration
///
/// # Example
///
/// ```
/// use rust_json_logger::{LoggerOptions, LogLevel};
///
/// let options = LoggerOptions::new()
///     .level(LogLevel::Debug)
///     .omit("password,token")
///     .redact(["email"])
///     .newlines(true);
///
/// let from_json = LoggerOptions::from_json_str(
///     r#"{"level": "DEBUG", "omit": "password,token", "redact": ["email"], "newlines": true}"#,
/// ).unwrap();
///
/// assert_eq!(options, from_json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggerOptions {
    #[serde(deserialize_with = "lenient")]
    pub level: Option<String>,
    #[serde(alias = "omitted_keys", deserialize_with = "lenient")]
    pub omit: Option<KeyList>,
    #[serde(deserialize_with = "lenient")]
    pub redact: Option<KeyList>,
    #[serde(deserialize_with = "lenient")]
    pub redact_value: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub newlines: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub log_none: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub base: Option<LogContext>,
    #[serde(deserialize_with = "lenient")]
    pub msg_key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub error_key: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub enabled: Option<bool>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Build options from an already parsed JSON object
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(LoggerError::config(
                "LoggerOptions",
                "options must be a JSON object",
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn omit(mut self, keys: impl Into<KeyList>) -> Self {
        self.omit = Some(keys.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn redact(mut self, keys: impl Into<KeyList>) -> Self {
        self.redact = Some(keys.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn redact_value(mut self, placeholder: impl Into<String>) -> Self {
        self.redact_value = Some(placeholder.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn newlines(mut self, newlines: bool) -> Self {
        self.newlines = Some(newlines);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_none(mut self, log_none: bool) -> Self {
        self.log_none = Some(log_none);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn base(mut self, base: LogContext) -> Self {
        self.base = Some(base);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn msg_key(mut self, key: impl Into<String>) -> Self {
        self.msg_key = Some(key.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_key(mut self, key: impl Into<String>) -> Self {
        self.error_key = Some(key.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// The requested minimum level, if any
    ///
    /// A name outside the level table is an `InvalidConfiguration` error.
    pub fn parsed_level(&self) -> Result<Option<LogLevel>> {
        self.level
            .as_deref()
            .map(|raw| {
                raw.parse::<LogLevel>()
                    .map_err(|_| LoggerError::config("level", format!("unknown level '{}'", raw)))
            })
            .transpose()
    }
}
