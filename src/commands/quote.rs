use async_trait::async_trait;
use serde_json::{json, Value};

use crate::command::CommandHandler;
use crate::core::CommandError;
use crate::define_command;
use crate::interaction::{Context, Message};
use crate::options::ContextMenuOption;

define_command! {
    /// Message context-menu command quoting the targeted message.
    pub struct Quote(Message, "Quote", "Quote a message") {
        target: Message = ContextMenuOption::message(),
    }
}

#[async_trait]
impl CommandHandler for Quote {
    async fn invoke(&self, _context: &Context) -> Result<Value, CommandError> {
        let message = self.target()?;
        let quoted: Vec<String> = message
            .content
            .lines()
            .map(|line| format!("> {line}"))
            .collect();

        Ok(json!({
            "content": format!("{}\n- {}", quoted.join("\n"), message.author.display_name()),
            "message_id": message.id,
            "channel_id": message.channel_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandDefinition, InteractionResolver};
    use crate::interaction::{Interaction, ResolvedData, User};
    use crate::schema::{CommandType, Snowflake};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_quotes_every_line() {
        let mut resolved = ResolvedData::default();
        resolved.messages.insert(
            Snowflake(7),
            Message {
                id: Snowflake(7),
                channel_id: Snowflake(8),
                author: User::new(1, "ferris"),
                content: "first\nsecond".to_string(),
            },
        );
        let interaction =
            Interaction::new(4, CommandType::Message, "Quote").with_target(7, resolved);
        let context = Arc::new(Context::new(interaction));

        let mut command = Quote::new(Arc::new(InteractionResolver));
        command.base_mut().bind(Arc::clone(&context));
        let output = command.invoke(&context).await.unwrap();

        assert_eq!(output["content"], "> first\n> second\n- ferris");
        assert_eq!(output["message_id"], "7");
    }

    #[test]
    fn test_registers_as_message_command() {
        let schema = Quote::schema();
        assert_eq!(schema.kind, CommandType::Message);
        assert_eq!(schema.name, "Quote");
        assert!(schema.options.is_empty());
    }
}
