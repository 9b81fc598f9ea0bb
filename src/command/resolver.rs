use log::debug;
use serde_json::Value;

use crate::core::ResolveError;
use crate::interaction::Context;
use crate::options::{DefaultValue, OptionSchema, OptionValue};
use crate::schema::OptionType;

/// Turns a declared option into its value for a bound invocation.
pub trait ValueResolver: Send + Sync {
    /// Resolves `option` against the invocation in `context`.
    ///
    /// # Errors
    /// When the invocation does not supply a usable value for the option.
    fn resolve_option(
        &self,
        context: &Context,
        option: &dyn OptionSchema,
    ) -> Result<OptionValue, ResolveError>;
}

/// Resolves options from the values carried by the interaction itself,
/// falling back to declared defaults for omitted options.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractionResolver;

impl ValueResolver for InteractionResolver {
    fn resolve_option(
        &self,
        context: &Context,
        option: &dyn OptionSchema,
    ) -> Result<OptionValue, ResolveError> {
        let name = option.name();

        let Some(supplied) = context.interaction.option(name) else {
            debug!("[Resolve] option '{name}' omitted, using its default");
            return match option.default_value() {
                DefaultValue::Value(value) => Ok(value),
                DefaultValue::Absent => Ok(OptionValue::Null),
                DefaultValue::Unset => Err(ResolveError::MissingRequired {
                    option: name.to_string(),
                }),
            };
        };

        if supplied.kind != option.kind() {
            return Err(ResolveError::KindMismatch {
                option: name.to_string(),
                expected: option.kind(),
                actual: supplied.kind,
            });
        }

        let value = convert(name, option.kind(), &supplied.value)?;
        debug!("[Resolve] option '{name}' resolved to {value}");
        Ok(value)
    }
}

/// Converts a raw wire value according to the option's type.
fn convert(name: &str, kind: OptionType, raw: &Value) -> Result<OptionValue, ResolveError> {
    let converted = match kind {
        OptionType::Integer => whole_number(raw).map(OptionValue::Integer),
        OptionType::Number => raw.as_f64().map(OptionValue::Number),
        OptionType::Boolean => raw.as_bool().map(OptionValue::Boolean),
        // Entity options carry the id of the referenced entity.
        OptionType::String
        | OptionType::User
        | OptionType::Channel
        | OptionType::Role
        | OptionType::Mentionable
        | OptionType::Attachment => raw.as_str().map(|s| OptionValue::String(s.to_string())),
        OptionType::SubCommand | OptionType::SubCommandGroup => None,
    };

    converted.ok_or_else(|| ResolveError::InvalidValue {
        option: name.to_string(),
        kind,
        value: raw.to_string(),
    })
}

/// Reads a JSON number without a fractional part as an integer, so `2.0`
/// is accepted and `2.5` is not.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_number(raw: &Value) -> Option<i64> {
    raw.as_i64().or_else(|| {
        raw.as_f64()
            .filter(|value| value.fract() == 0.0)
            .filter(|value| *value >= i64::MIN as f64 && *value < i64::MAX as f64)
            .map(|value| value as i64)
    })
}
