use async_trait::async_trait;
use serde_json::{json, Value};

use crate::command::CommandHandler;
use crate::core::CommandError;
use crate::define_command;
use crate::interaction::Context;
use crate::options::{integer, number, string};

/// Lowest temperature expressible in either supported unit.
const ABSOLUTE_ZERO_F: f64 = -459.67;
const DEFAULT_PRECISION: i64 = 1;
const MAX_PRECISION: i64 = 6;

define_command! {
    /// Converts a temperature between Celsius and Fahrenheit.
    pub struct Convert(ChatInput, "convert", "Convert a temperature") {
        degrees: f64 = number("degrees", "Temperature to convert").min_value(ABSOLUTE_ZERO_F),
        unit: String = string("unit", "Unit the temperature is given in")
            .choice("Celsius", "c")
            .choice("Fahrenheit", "f")
            .with_default("c"),
        precision: Option<i64> = integer("precision", "Decimal places in the reply")
            .min_value(0)
            .max_value(MAX_PRECISION)
            .optional(),
    }
}

#[async_trait]
impl CommandHandler for Convert {
    async fn invoke(&self, _context: &Context) -> Result<Value, CommandError> {
        let degrees = self.degrees()?;
        let unit = self.unit()?;
        let (converted, target) = match unit.as_str() {
            "c" => (degrees * 9.0 / 5.0 + 32.0, "f"),
            "f" => ((degrees - 32.0) * 5.0 / 9.0, "c"),
            other => {
                return Err(CommandError::Execution(format!("Unknown unit: {other}")));
            }
        };
        let precision = self
            .precision()?
            .unwrap_or(DEFAULT_PRECISION)
            .clamp(0, MAX_PRECISION);
        let precision = usize::try_from(precision).unwrap_or(1);

        Ok(json!({
            "content": format!(
                "{degrees:.precision$}°{} is {converted:.precision$}°{}",
                unit.to_uppercase(),
                target.to_uppercase()
            ),
            "value": converted,
            "unit": target,
        }))
    }
}
