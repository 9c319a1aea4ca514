use std::fmt;
use std::path::Path;

use hashbrown::HashMap;
use serde_yml::Value;

use crate::error::{ParamsError, Result};

/// A single value supplied by a parameter source.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => write!(f, "{}", value),
            ParamValue::Int(value) => write!(f, "{}", value),
            ParamValue::Float(value) => write!(f, "{}", value),
            ParamValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Conversion from a source value into a typed parameter. `None` means the
/// value has the wrong type and the default applies.
pub trait FromParamValue: Sized {
    fn from_param(value: ParamValue) -> Option<Self>;
}

impl FromParamValue for String {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl FromParamValue for i32 {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Int(value) => i32::try_from(value).ok(),
            _ => None,
        }
    }
}

impl FromParamValue for f64 {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Float(value) => Some(value),
            ParamValue::Int(value) => Some(value as f64),
            _ => None,
        }
    }
}

impl FromParamValue for bool {
    fn from_param(value: ParamValue) -> Option<Self> {
        match value {
            ParamValue::Bool(value) => Some(value),
            _ => None,
        }
    }
}

/// Key/value lookup used to populate the store at startup.
pub trait ParamSource {
    fn value(&self, key: &str) -> Option<ParamValue>;

    /// Returns the value under `key`, or `default` when the key is absent
    /// or holds a value of another type.
    fn get<T: FromParamValue>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        lookup(self, key, default)
    }
}

pub(crate) fn lookup<S, T>(source: &S, key: &str, default: T) -> T
where
    S: ParamSource + ?Sized,
    T: FromParamValue,
{
    source
        .value(key)
        .and_then(T::from_param)
        .unwrap_or(default)
}

#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, ParamValue>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.values.insert(key.into(), value.into());
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.insert(key, value);
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParamSource for MapSource {
    fn value(&self, key: &str) -> Option<ParamValue> {
        self.values.get(key).cloned()
    }
}

/// Parameters read from a YAML mapping, optionally scoped to a nested
/// namespace such as
///
/// ```yaml
/// mosaic:
///   working_dir: /data/run1
///   nkeypoints: 2000
/// ```
#[derive(Debug, Clone)]
pub struct YamlSource {
    root: Value,
}

impl YamlSource {
    pub fn from_yaml(text: &str) -> Result<Self> {
        let root: Value = serde_yml::from_str(text)?;
        if !root.is_mapping() {
            return Err(ParamsError::NotAMapping);
        }

        Ok(Self { root })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&text)
    }

    /// Narrows lookups to the mapping stored under `namespace`.
    pub fn with_namespace(self, namespace: &str) -> Result<Self> {
        match self.root.get(namespace) {
            Some(scoped) if scoped.is_mapping() => Ok(Self {
                root: scoped.clone(),
            }),
            _ => Err(ParamsError::MissingNamespace(namespace.to_string())),
        }
    }
}

impl ParamSource for YamlSource {
    fn value(&self, key: &str) -> Option<ParamValue> {
        match self.root.get(key)? {
            Value::String(value) => Some(ParamValue::Str(value.clone())),
            Value::Bool(value) => Some(ParamValue::Bool(*value)),
            Value::Number(number) => number
                .as_i64()
                .map(ParamValue::Int)
                .or_else(|| Some(ParamValue::Float(number.as_f64()))),
            _ => None,
        }
    }
}
