use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved option value, already converted out of its raw wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    String(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value:?}"),
            Self::String(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Conversion from a resolved [`OptionValue`] into the type an option is
/// declared to read as. On mismatch the value is handed back for reporting.
pub trait FromOptionValue: Sized {
    /// Human-readable name of the expected shape, used in error messages.
    const EXPECTED: &'static str;

    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue>;
}

impl FromOptionValue for String {
    const EXPECTED: &'static str = "string";

    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue> {
        match value {
            OptionValue::String(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl FromOptionValue for i64 {
    const EXPECTED: &'static str = "integer";

    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue> {
        match value {
            OptionValue::Integer(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl FromOptionValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue> {
        match value {
            OptionValue::Boolean(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl FromOptionValue for f64 {
    const EXPECTED: &'static str = "number";

    #[allow(clippy::cast_precision_loss)]
    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue> {
        match value {
            OptionValue::Number(value) => Ok(value),
            OptionValue::Integer(value) => Ok(value as f64),
            other => Err(other),
        }
    }
}

impl<T: FromOptionValue> FromOptionValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_option_value(value: OptionValue) -> Result<Self, OptionValue> {
        match value {
            OptionValue::Null => Ok(None),
            other => T::from_option_value(other).map(Some),
        }
    }
}

/// The default of a declared option.
///
/// `Unset` means no default was given, which makes the option required.
/// `Absent` is an explicit "no value" default: the option is optional and
/// reads as nothing when omitted. `Value` is an ordinary default.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue<D> {
    Unset,
    Absent,
    Value(D),
}

impl<D> Default for DefaultValue<D> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<D> DefaultValue<D> {
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub const fn as_ref(&self) -> DefaultValue<&D> {
        match self {
            Self::Unset => DefaultValue::Unset,
            Self::Absent => DefaultValue::Absent,
            Self::Value(value) => DefaultValue::Value(value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(D) -> U) -> DefaultValue<U> {
        match self {
            Self::Unset => DefaultValue::Unset,
            Self::Absent => DefaultValue::Absent,
            Self::Value(value) => DefaultValue::Value(f(value)),
        }
    }
}

impl<D: Clone + Into<OptionValue>> DefaultValue<D> {
    /// The default as the resolver sees it: an explicit "no value" becomes
    /// [`OptionValue::Null`].
    pub fn to_option_value(&self) -> DefaultValue<OptionValue> {
        match self {
            Self::Unset => DefaultValue::Unset,
            Self::Absent => DefaultValue::Value(OptionValue::Null),
            Self::Value(value) => DefaultValue::Value(value.clone().into()),
        }
    }
}
