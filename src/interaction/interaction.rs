use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entities::{InteractionMember, Message, User};
use crate::schema::{CommandType, OptionType, Snowflake};

/// An option value exactly as it arrived on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDataOption {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: OptionType,
    pub value: Value,
}

impl CommandDataOption {
    pub fn new(name: impl Into<String>, kind: OptionType, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
        }
    }
}

/// Entities the platform resolved ahead of time for this interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedData {
    #[serde(default)]
    pub users: HashMap<Snowflake, User>,
    #[serde(default)]
    pub members: HashMap<Snowflake, InteractionMember>,
    #[serde(default)]
    pub messages: HashMap<Snowflake, Message>,
}

/// One command invocation received from the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Snowflake,
    pub command_name: String,
    #[serde(default = "default_command_type")]
    pub command_type: CommandType,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    #[serde(default)]
    pub target_id: Option<Snowflake>,
    #[serde(default)]
    pub resolved: Option<ResolvedData>,
}

const fn default_command_type() -> CommandType {
    CommandType::ChatInput
}

impl Interaction {
    pub fn new(id: impl Into<Snowflake>, command_type: CommandType, command_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command_name: command_name.into(),
            command_type,
            guild_id: None,
            options: Vec::new(),
            target_id: None,
            resolved: None,
        }
    }

    pub fn with_option(mut self, option: CommandDataOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_target(mut self, target_id: impl Into<Snowflake>, resolved: ResolvedData) -> Self {
        self.target_id = Some(target_id.into());
        self.resolved = Some(resolved);
        self
    }

    /// Looks up a supplied option by name.
    pub fn option(&self, name: &str) -> Option<&CommandDataOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chat_input() {
        let interaction: Interaction = serde_json::from_str(
            r#"{
                "id": "10",
                "command_name": "echo",
                "options": [{ "name": "text", "type": 3, "value": "hi" }]
            }"#,
        )
        .unwrap();

        assert_eq!(interaction.command_type, CommandType::ChatInput);
        assert_eq!(interaction.option("text").unwrap().value, Value::from("hi"));
        assert!(interaction.option("times").is_none());
        assert!(interaction.resolved.is_none());
    }

    #[test]
    fn test_deserialize_context_menu() {
        let interaction: Interaction = serde_json::from_str(
            r#"{
                "id": "11",
                "command_name": "User Info",
                "command_type": 2,
                "target_id": "5",
                "resolved": { "users": { "5": { "id": "5", "username": "ferris" } } }
            }"#,
        )
        .unwrap();

        let resolved = interaction.resolved.unwrap();
        assert_eq!(interaction.target_id, Some(Snowflake(5)));
        assert_eq!(resolved.users[&Snowflake(5)].username, "ferris");
        assert!(resolved.members.is_empty());
    }
}
