use serde::{Deserialize, Serialize};

use super::{ChannelType, CommandType, OptionType};
use crate::options::OptionValue;

/// A numeric bound, kept in the same shape it was declared with so integer
/// options serialize integer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericBound {
    Integer(i64),
    Float(f64),
}

impl From<i64> for NumericBound {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for NumericBound {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for NumericBound {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// One predefined choice offered for an option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandChoice {
    pub name: String,
    pub value: OptionValue,
}

impl CommandChoice {
    pub fn new(name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The registration shape of a single command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub name: String,
    pub description: String,
    #[serde(rename = "required", default)]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<CommandChoice>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_types: Option<Vec<ChannelType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<NumericBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<NumericBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u16>,
    #[serde(default)]
    pub autocomplete: bool,
}

/// The registration payload for one command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandSchema {
    #[serde(rename = "type")]
    pub kind: CommandType,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let option = CommandOption {
            kind: OptionType::String,
            name: "text".to_string(),
            description: "Text to echo".to_string(),
            is_required: true,
            choices: None,
            channel_types: None,
            min_value: None,
            max_value: None,
            min_length: Some(1),
            max_length: None,
            autocomplete: false,
        };

        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({
                "type": 3,
                "name": "text",
                "description": "Text to echo",
                "required": true,
                "min_length": 1,
                "autocomplete": false
            })
        );
    }

    #[test]
    fn test_bounds_keep_their_shape() {
        assert_eq!(
            serde_json::to_value(NumericBound::from(5)).unwrap(),
            json!(5)
        );
        assert_eq!(
            serde_json::to_value(NumericBound::from(0.5)).unwrap(),
            json!(0.5)
        );
    }

    #[test]
    fn test_context_menu_schema_has_no_options_field() {
        let schema = CommandSchema {
            kind: CommandType::User,
            name: "User Info".to_string(),
            description: String::new(),
            options: Vec::new(),
        };

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({ "type": 2, "name": "User Info", "description": "" })
        );
    }
}
