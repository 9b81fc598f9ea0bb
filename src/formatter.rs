use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use crate::core::{AppError, Config, OutputFormat};
use crate::schema::{CommandOption, CommandSchema, NumericBound};

/// Renders registration payloads and handler output for the terminal.
pub struct OutputFormatter {
    format: OutputFormat,
    pretty_json: bool,
}

impl OutputFormatter {
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.output,
            pretty_json: config.pretty_json,
        }
    }

    pub fn format_schemas(&self, schemas: &[CommandSchema]) -> Result<String, AppError> {
        match self.format {
            OutputFormat::Json => self.to_json(&schemas),
            OutputFormat::Text => Ok(schemas
                .iter()
                .map(schema_text)
                .collect::<Vec<_>>()
                .join("\n\n")),
        }
    }

    /// Text output shows the reply content when the handler produced one.
    pub fn format_output(&self, output: &Value) -> Result<String, AppError> {
        match (self.format, output.get("content").and_then(Value::as_str)) {
            (OutputFormat::Text, Some(content)) => Ok(content.to_string()),
            _ => self.to_json(output),
        }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, AppError> {
        let rendered = if self.pretty_json {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

fn schema_text(schema: &CommandSchema) -> String {
    let mut lines = vec![format!(
        "{} {}",
        schema.name.bold(),
        format!("({:?})", schema.kind).dimmed()
    )];
    if !schema.description.is_empty() {
        lines.push(format!("  {}", schema.description));
    }
    lines.extend(schema.options.iter().map(option_text));
    lines.join("\n")
}

fn option_text(option: &CommandOption) -> String {
    let requirement = if option.is_required {
        "required".yellow()
    } else {
        "optional".dimmed()
    };
    let mut line = format!(
        "  {} <{:?}> {requirement} {}",
        option.name.cyan(),
        option.kind,
        option.description
    );

    let constraints = constraints(option);
    if !constraints.is_empty() {
        line.push_str(&format!(" [{}]", constraints.join(", ")).dimmed().to_string());
    }
    line
}

fn constraints(option: &CommandOption) -> Vec<String> {
    let mut constraints = Vec::new();
    if let Some(choices) = &option.choices {
        let names: Vec<&str> = choices.iter().map(|choice| choice.name.as_str()).collect();
        constraints.push(format!("choices: {}", names.join("|")));
    }
    if let Some(types) = &option.channel_types {
        constraints.push(format!("channels: {types:?}"));
    }
    match (&option.min_value, &option.max_value) {
        (None, None) => {}
        (min, max) => constraints.push(format!("value {}..{}", bound(min), bound(max))),
    }
    match (option.min_length, option.max_length) {
        (None, None) => {}
        (min, max) => constraints.push(format!(
            "length {}..{}",
            min.map(|m| m.to_string()).unwrap_or_default(),
            max.map(|m| m.to_string()).unwrap_or_default()
        )),
    }
    if option.autocomplete {
        constraints.push("autocomplete".to_string());
    }
    constraints
}

fn bound(bound: &Option<NumericBound>) -> String {
    match bound {
        Some(NumericBound::Integer(value)) => value.to_string(),
        Some(NumericBound::Float(value)) => value.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandDefinition;
    use crate::commands::{Echo, Quote};
    use serde_json::json;

    fn formatter(output: OutputFormat, pretty_json: bool) -> OutputFormatter {
        OutputFormatter::new(&Config {
            output,
            pretty_json,
            log_level: "warn".to_string(),
        })
    }

    #[test]
    fn test_schema_text_lists_options() {
        let text = formatter(OutputFormat::Text, true)
            .format_schemas(&[Echo::schema(), Quote::schema()])
            .unwrap();

        assert!(text.contains("echo"));
        assert!(text.contains("Repeat a message back"));
        assert!(text.contains("choices: space|newline"));
        assert!(text.contains("value 1..5"));
        assert!(text.contains("length 1..200"));
        assert!(text.contains("Quote"));
    }

    #[test]
    fn test_schema_json_is_wire_shape() {
        let rendered = formatter(OutputFormat::Json, false)
            .format_schemas(&[Quote::schema()])
            .unwrap();
        assert_eq!(rendered, r#"[{"type":3,"name":"Quote","description":""}]"#);
    }

    #[test]
    fn test_output_formats() {
        let output = json!({ "content": "hi", "extra": 1 });
        let cases = [
            (OutputFormat::Text, false, "hi".to_string()),
            (
                OutputFormat::Json,
                false,
                r#"{"content":"hi","extra":1}"#.to_string(),
            ),
        ];

        for (format, pretty, expected) in cases {
            assert_eq!(
                formatter(format, pretty).format_output(&output).unwrap(),
                expected,
                "Failed on format: {format:?}"
            );
        }
    }

    #[test]
    fn test_text_output_without_content_falls_back_to_json() {
        let rendered = formatter(OutputFormat::Text, true)
            .format_output(&json!({ "value": 2 }))
            .unwrap();
        assert_eq!(rendered, "{\n  \"value\": 2\n}");
    }
}
