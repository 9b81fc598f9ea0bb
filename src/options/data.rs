use std::collections::HashMap;
use std::fmt;

use super::value::{DefaultValue, OptionValue};
use crate::schema::{ChannelType, CommandChoice, CommandOption, NumericBound, OptionType};

/// Name of a handler that serves autocomplete suggestions for an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteHandler(pub String);

impl From<&str> for AutocompleteHandler {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for AutocompleteHandler {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Per-locale names and descriptions for an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Localizations {
    pub names: HashMap<String, String>,
    pub descriptions: HashMap<String, String>,
}

/// The declared shape of one command option.
///
/// Built once when a command type declares the option and never modified
/// afterwards. Whether the option is required is derived from `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionData<D> {
    pub kind: OptionType,
    pub name: String,
    pub description: String,
    pub default: DefaultValue<D>,
    pub choices: Option<Vec<CommandChoice>>,
    pub channel_types: Option<Vec<ChannelType>>,
    pub min_value: Option<NumericBound>,
    pub max_value: Option<NumericBound>,
    pub min_length: Option<u16>,
    pub max_length: Option<u16>,
    pub autocomplete: Option<AutocompleteHandler>,
    pub localizations: Option<Localizations>,
}

impl<D> OptionData<D> {
    pub fn new(kind: OptionType, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            default: DefaultValue::Unset,
            choices: None,
            channel_types: None,
            min_value: None,
            max_value: None,
            min_length: None,
            max_length: None,
            autocomplete: None,
            localizations: None,
        }
    }

    /// An option is required exactly when it has no default, explicit
    /// "no value" defaults included.
    pub const fn is_required(&self) -> bool {
        self.default.is_unset()
    }

    /// Transcribes the declaration into its registration shape.
    ///
    /// Constraints are copied verbatim. Only the presence of an autocomplete
    /// handler is forwarded, as a flag; localizations are not forwarded.
    pub fn to_command_option(&self) -> CommandOption {
        CommandOption {
            kind: self.kind,
            name: self.name.clone(),
            description: self.description.clone(),
            is_required: self.is_required(),
            choices: self.choices.clone(),
            channel_types: self.channel_types.clone(),
            min_value: self.min_value,
            max_value: self.max_value,
            min_length: self.min_length,
            max_length: self.max_length,
            autocomplete: self.autocomplete.is_some(),
        }
    }
}

/// Type-erased view of an [`OptionData`], handed to value resolvers and
/// collected when a command's registration payload is built.
pub trait OptionSchema: fmt::Debug + Send + Sync {
    fn kind(&self) -> OptionType;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn is_required(&self) -> bool;
    fn default_value(&self) -> DefaultValue<OptionValue>;
    fn to_command_option(&self) -> CommandOption;
}

impl<D> OptionSchema for OptionData<D>
where
    D: Clone + Into<OptionValue> + fmt::Debug + Send + Sync,
{
    fn kind(&self) -> OptionType {
        self.kind
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn is_required(&self) -> bool {
        OptionData::is_required(self)
    }

    fn default_value(&self) -> DefaultValue<OptionValue> {
        self.default.to_option_value()
    }

    fn to_command_option(&self) -> CommandOption {
        OptionData::to_command_option(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_option() -> OptionData<String> {
        OptionData::new(OptionType::String, "text", "Text to echo")
    }

    #[test]
    fn test_required_only_when_default_unset() {
        let mut data = text_option();
        assert!(data.to_command_option().is_required);

        data.default = DefaultValue::Absent;
        assert!(!data.to_command_option().is_required);

        data.default = DefaultValue::Value(String::new());
        assert!(!data.to_command_option().is_required);
    }

    #[test]
    fn test_constraints_pass_through_verbatim() {
        let mut data = OptionData::<i64>::new(OptionType::Integer, "age", "Your age");
        // Inverted bounds are not this layer's problem.
        data.min_value = Some(NumericBound::Integer(10));
        data.max_value = Some(NumericBound::Integer(1));
        data.channel_types = Some(vec![ChannelType::GuildText, ChannelType::PublicThread]);
        data.choices = Some(vec![CommandChoice::new("ten", 10)]);

        let option = data.to_command_option();
        assert_eq!(option.min_value, Some(NumericBound::Integer(10)));
        assert_eq!(option.max_value, Some(NumericBound::Integer(1)));
        assert_eq!(
            option.channel_types,
            Some(vec![ChannelType::GuildText, ChannelType::PublicThread])
        );
        assert_eq!(option.choices, Some(vec![CommandChoice::new("ten", 10)]));
        assert_eq!(option.min_length, None);
        assert_eq!(option.max_length, None);
    }

    #[test]
    fn test_autocomplete_forwards_presence_only() {
        let mut data = text_option();
        assert!(!data.to_command_option().autocomplete);

        data.autocomplete = Some(AutocompleteHandler::from("recent"));
        assert!(data.to_command_option().autocomplete);
    }

    #[test]
    fn test_to_command_option_is_idempotent() {
        let mut data = text_option();
        data.min_length = Some(1);
        data.localizations = Some(Localizations::default());

        assert_eq!(data.to_command_option(), data.to_command_option());
    }

    #[test]
    fn test_erased_default_value() {
        let mut data = text_option();
        data.default = DefaultValue::Value("hi".to_string());

        let schema: &dyn OptionSchema = &data;
        assert_eq!(schema.name(), "text");
        assert_eq!(schema.kind(), OptionType::String);
        assert!(!schema.is_required());
        assert_eq!(
            schema.default_value(),
            DefaultValue::Value(OptionValue::from("hi"))
        );
    }
}
