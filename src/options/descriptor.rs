use std::fmt;

use super::data::{AutocompleteHandler, Localizations, OptionData, OptionSchema};
use super::value::{DefaultValue, FromOptionValue, OptionValue};
use crate::command::InvocationHost;
use crate::core::ResolveError;
use crate::interaction::Context;
use crate::schema::{ChannelType, CommandChoice, CommandType, NumericBound};

/// Read access to a declared option.
///
/// Reading without an instance, or through an instance that is not bound to
/// an invocation, yields the unbound fallback and never touches a resolver.
pub trait OptionAccess<T>: Send + Sync {
    /// The declaration backing this option.
    fn schema(&self) -> &dyn OptionSchema;

    /// The placeholder read while no invocation is bound.
    fn unbound(&self) -> T;

    /// Reads the option through `instance`.
    ///
    /// # Errors
    /// Whatever the instance's resolver reports, unchanged.
    fn get(&self, instance: Option<&dyn InvocationHost>) -> Result<T, ResolveError>;

    /// The command type this option can only be declared on, if any.
    fn target_type(&self) -> Option<CommandType> {
        None
    }
}

/// Returns the invocation `instance` is currently bound to, if any.
pub(crate) fn bound_context<'a>(instance: Option<&'a dyn InvocationHost>) -> Option<&'a Context> {
    instance.and_then(|host| host.current_context())
}

/// Binds an [`OptionData`] to the type it reads as.
///
/// `T` is the type reads produce and `D` the type of the declared default.
/// The descriptor holds no per-invocation state, so one instance is shared by
/// every command instance of the declaring type.
#[derive(Clone, PartialEq)]
pub struct OptionDescriptor<T, D = T> {
    data: OptionData<D>,
    unbound_default: T,
}

impl<T: fmt::Debug, D: fmt::Debug> fmt::Debug for OptionDescriptor<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("name", &self.data.name)
            .field("kind", &self.data.kind)
            .field("default", &self.data.default)
            .field("unbound_default", &self.unbound_default)
            .finish_non_exhaustive()
    }
}

impl<T, D> OptionDescriptor<T, D> {
    pub fn new(data: OptionData<D>, unbound_default: T) -> Self {
        Self {
            data,
            unbound_default,
        }
    }

    pub const fn data(&self) -> &OptionData<D> {
        &self.data
    }

    pub const fn unbound_default(&self) -> &T {
        &self.unbound_default
    }

    /// Makes the option optional with `value` as its default.
    pub fn with_default(mut self, value: impl Into<D>) -> Self {
        self.data.default = DefaultValue::Value(value.into());
        self
    }

    /// Makes the option optional, reading as `None` when it is omitted and
    /// while no invocation is bound. An ordinary default set earlier is kept.
    pub fn optional(self) -> OptionDescriptor<Option<T>, D> {
        let mut data = self.data;
        if data.default.is_unset() {
            data.default = DefaultValue::Absent;
        }
        OptionDescriptor::new(data, None)
    }

    /// Restricts a channel option to the given channel kinds.
    pub fn channel_types(mut self, types: impl IntoIterator<Item = ChannelType>) -> Self {
        self.data.channel_types = Some(types.into_iter().collect());
        self
    }

    pub fn localizations(mut self, localizations: Localizations) -> Self {
        self.data.localizations = Some(localizations);
        self
    }
}

/// Default types whose options may offer predefined choices and autocomplete.
pub trait ChoiceValue: Into<OptionValue> {}

impl ChoiceValue for String {}
impl ChoiceValue for i64 {}
impl ChoiceValue for f64 {}

impl<T, D: ChoiceValue> OptionDescriptor<T, D> {
    /// Adds a predefined choice.
    pub fn choice(mut self, name: impl Into<String>, value: impl Into<D>) -> Self {
        self.data
            .choices
            .get_or_insert_with(Vec::new)
            .push(CommandChoice::new(name, value.into()));
        self
    }

    pub fn autocomplete(mut self, handler: impl Into<AutocompleteHandler>) -> Self {
        self.data.autocomplete = Some(handler.into());
        self
    }
}

impl<T> OptionDescriptor<T, String> {
    pub fn min_length(mut self, length: u16) -> Self {
        self.data.min_length = Some(length);
        self
    }

    pub fn max_length(mut self, length: u16) -> Self {
        self.data.max_length = Some(length);
        self
    }
}

impl<T> OptionDescriptor<T, i64> {
    pub fn min_value(mut self, value: i64) -> Self {
        self.data.min_value = Some(NumericBound::Integer(value));
        self
    }

    pub fn max_value(mut self, value: i64) -> Self {
        self.data.max_value = Some(NumericBound::Integer(value));
        self
    }
}

impl<T> OptionDescriptor<T, f64> {
    pub fn min_value(mut self, value: f64) -> Self {
        self.data.min_value = Some(NumericBound::Float(value));
        self
    }

    pub fn max_value(mut self, value: f64) -> Self {
        self.data.max_value = Some(NumericBound::Float(value));
        self
    }
}

impl<T, D> OptionAccess<T> for OptionDescriptor<T, D>
where
    T: FromOptionValue + Clone + Send + Sync,
    D: Clone + Into<OptionValue> + fmt::Debug + Send + Sync,
{
    fn schema(&self) -> &dyn OptionSchema {
        &self.data
    }

    fn unbound(&self) -> T {
        self.unbound_default.clone()
    }

    fn get(&self, instance: Option<&dyn InvocationHost>) -> Result<T, ResolveError> {
        let (Some(host), Some(context)) = (instance, bound_context(instance)) else {
            return Ok(self.unbound());
        };

        let value = host.client().resolve_option(context, &self.data)?;
        T::from_option_value(value).map_err(|value| ResolveError::UnexpectedValue {
            option: self.data.name.clone(),
            expected: T::EXPECTED,
            value: value.to_string(),
        })
    }
}
