use super::data::{OptionData, OptionSchema};
use super::descriptor::{bound_context, OptionAccess, OptionDescriptor};
use crate::command::InvocationHost;
use crate::core::ResolveError;
use crate::interaction::{Interaction, Message, ResolvedData, ResolvedUser, User};
use crate::schema::{CommandType, OptionType, Snowflake};

/// Entity a context-menu command can target.
pub trait ContextMenuTarget: Clone + Send + Sync + 'static {
    /// The kind of command that targets this entity.
    const COMMAND_TYPE: CommandType;

    /// Placeholder read while no invocation is bound.
    fn empty() -> Self;

    /// Looks the target up in the interaction's resolved data.
    ///
    /// # Panics
    /// If the interaction has no target, or its resolved data lacks a matching
    /// entity. The platform always sends both, so either case means the
    /// dispatch layer handed over a malformed interaction.
    fn from_interaction(interaction: &Interaction) -> Self;
}

fn target_of(interaction: &Interaction) -> (Snowflake, &ResolvedData) {
    let Some(target_id) = interaction.target_id else {
        panic!("interaction {} has no target id", interaction.id);
    };
    let Some(resolved) = interaction.resolved.as_ref() else {
        panic!(
            "interaction {} has no resolved data for target {target_id}",
            interaction.id
        );
    };
    (target_id, resolved)
}

impl ContextMenuTarget for ResolvedUser {
    const COMMAND_TYPE: CommandType = CommandType::User;

    fn empty() -> Self {
        Self::User(User::empty())
    }

    fn from_interaction(interaction: &Interaction) -> Self {
        let (target_id, resolved) = target_of(interaction);
        // The member record carries guild data the plain user lacks.
        let found = resolved
            .members
            .get(&target_id)
            .cloned()
            .map(Self::Member)
            .or_else(|| resolved.users.get(&target_id).cloned().map(Self::User));

        // The id match is the user-like check: the record must describe the target itself.
        match found {
            Some(user) if user.id() == target_id => user,
            Some(user) => panic!(
                "interaction {} resolved target {target_id} to user {}",
                interaction.id,
                user.id()
            ),
            None => panic!(
                "interaction {} has no resolved user for target {target_id}",
                interaction.id
            ),
        }
    }
}

impl ContextMenuTarget for Message {
    const COMMAND_TYPE: CommandType = CommandType::Message;

    fn empty() -> Self {
        Message::empty()
    }

    fn from_interaction(interaction: &Interaction) -> Self {
        let (target_id, resolved) = target_of(interaction);

        match resolved.messages.get(&target_id) {
            Some(message) if message.id == target_id => message.clone(),
            Some(message) => panic!(
                "interaction {} resolved target {target_id} to message {}",
                interaction.id, message.id
            ),
            None => panic!(
                "interaction {} has no resolved message for target {target_id}",
                interaction.id
            ),
        }
    }
}

/// The synthetic `target` option of a context-menu command.
///
/// Reads while unbound behave like any other option. Bound reads skip the
/// value resolver and look the target up in the interaction directly.
#[derive(Debug, Clone)]
pub struct ContextMenuOption<T> {
    inner: OptionDescriptor<T, String>,
}

impl<T: ContextMenuTarget> ContextMenuOption<T> {
    pub fn new() -> Self {
        Self {
            inner: OptionDescriptor::new(
                OptionData::new(OptionType::String, "target", "target"),
                T::empty(),
            ),
        }
    }
}

impl<T: ContextMenuTarget> Default for ContextMenuOption<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextMenuOption<ResolvedUser> {
    pub fn user() -> Self {
        Self::new()
    }
}

impl ContextMenuOption<Message> {
    pub fn message() -> Self {
        Self::new()
    }
}

impl<T: ContextMenuTarget> OptionAccess<T> for ContextMenuOption<T> {
    fn schema(&self) -> &dyn OptionSchema {
        self.inner.data()
    }

    fn unbound(&self) -> T {
        self.inner.unbound_default().clone()
    }

    fn get(&self, instance: Option<&dyn InvocationHost>) -> Result<T, ResolveError> {
        Ok(bound_context(instance).map_or_else(
            || self.unbound(),
            |context| T::from_interaction(&context.interaction),
        ))
    }

    fn target_type(&self) -> Option<CommandType> {
        Some(T::COMMAND_TYPE)
    }
}
