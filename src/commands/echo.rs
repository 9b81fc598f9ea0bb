use async_trait::async_trait;
use serde_json::{json, Value};

use crate::command::CommandHandler;
use crate::core::CommandError;
use crate::define_command;
use crate::interaction::Context;
use crate::options::{boolean, integer, string};

const DEFAULT_SEPARATOR: &str = " ";
const MIN_TIMES: i64 = 1;
const MAX_TIMES: i64 = 5;

define_command! {
    /// Repeats a message back to the invoking user.
    pub struct Echo(ChatInput, "echo", "Repeat a message back") {
        text: String = string("text", "Text to repeat")
            .min_length(1)
            .max_length(200)
            .autocomplete("recent-echoes"),
        times: i64 = integer("times", "How many times to repeat it")
            .with_default(1)
            .min_value(MIN_TIMES)
            .max_value(MAX_TIMES),
        separator: Option<String> = string("separator", "What goes between repeats")
            .choice("space", " ")
            .choice("newline", "\n")
            .optional(),
        shout: bool = boolean("shout", "Uppercase the reply").with_default(false),
    }
}

#[async_trait]
impl CommandHandler for Echo {
    async fn invoke(&self, _context: &Context) -> Result<Value, CommandError> {
        let text = self.text()?;
        // The platform enforces declared bounds, interaction files do not.
        let times = usize::try_from(self.times()?.clamp(MIN_TIMES, MAX_TIMES)).unwrap_or(1);
        let separator = self
            .separator()?
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());

        let mut content = vec![text; times].join(&separator);
        if self.shout()? {
            content = content.to_uppercase();
        }

        Ok(json!({ "content": content }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandDefinition, InteractionResolver};
    use crate::interaction::{CommandDataOption, Interaction};
    use crate::schema::{CommandType, OptionType};
    use std::sync::Arc;

    async fn run(options: Vec<CommandDataOption>) -> Result<Value, CommandError> {
        let mut interaction = Interaction::new(1, CommandType::ChatInput, "echo");
        interaction.options = options;
        let context = Arc::new(Context::new(interaction));

        let mut command = Echo::new(Arc::new(InteractionResolver));
        command.base_mut().bind(Arc::clone(&context));
        command.invoke(&context).await
    }

    #[test]
    fn test_schema() {
        let schema = Echo::schema();
        let required: Vec<(&str, bool)> = schema
            .options
            .iter()
            .map(|option| (option.name.as_str(), option.is_required))
            .collect();

        assert_eq!(schema.description, "Repeat a message back");
        assert_eq!(
            required,
            vec![
                ("text", true),
                ("times", false),
                ("separator", false),
                ("shout", false)
            ]
        );
        assert!(schema.options[0].autocomplete);
        assert_eq!(schema.options[2].choices.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_echo_variants() {
        let cases = vec![
            (
                vec![CommandDataOption::new("text", OptionType::String, "hi")],
                "hi",
            ),
            (
                vec![
                    CommandDataOption::new("text", OptionType::String, "hi"),
                    CommandDataOption::new("times", OptionType::Integer, 3),
                ],
                "hi hi hi",
            ),
            (
                vec![
                    CommandDataOption::new("text", OptionType::String, "hi"),
                    CommandDataOption::new("times", OptionType::Integer, 2),
                    CommandDataOption::new("separator", OptionType::String, "\n"),
                    CommandDataOption::new("shout", OptionType::Boolean, true),
                ],
                "HI\nHI",
            ),
        ];

        for (options, expected) in cases {
            let output = run(options).await.unwrap();
            assert_eq!(output["content"], expected, "Failed on: {expected:?}");
        }
    }

    #[tokio::test]
    async fn test_times_is_clamped_to_declared_bounds() {
        let cases = [(400_000_000_000_000_000_i64, "hi hi hi hi hi"), (-3, "hi")];

        for (times, expected) in cases {
            let output = run(vec![
                CommandDataOption::new("text", OptionType::String, "hi"),
                CommandDataOption::new("times", OptionType::Integer, times),
            ])
            .await
            .unwrap();
            assert_eq!(output["content"], expected, "Failed on times: {times}");
        }
    }

    #[tokio::test]
    async fn test_missing_text_is_reported() {
        match run(Vec::new()).await {
            Err(CommandError::Resolve(error)) => {
                assert_eq!(error.to_string(), "Missing required option 'text'");
            }
            other => panic!("Expected a resolve error, got {other:?}"),
        }
    }
}
