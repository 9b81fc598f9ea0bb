use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use super::resolver::ValueResolver;
use crate::core::CommandError;
use crate::interaction::Context;
use crate::options::OptionSchema;
use crate::schema::{CommandSchema, CommandType};

/// Anything that can host option reads: it knows which invocation, if any,
/// it is currently bound to, and which resolver turns options into values.
pub trait InvocationHost {
    fn current_context(&self) -> Option<&Context>;
    fn client(&self) -> &dyn ValueResolver;
}

/// Per-instance binding state embedded in every command.
pub struct CommandBase {
    client: Arc<dyn ValueResolver>,
    current_context: Option<Arc<Context>>,
}

impl CommandBase {
    pub fn new(client: Arc<dyn ValueResolver>) -> Self {
        Self {
            client,
            current_context: None,
        }
    }

    /// Binds this instance to `context`. Option reads resolve against it
    /// until [`unbind`](Self::unbind) is called.
    pub fn bind(&mut self, context: Arc<Context>) {
        if let Some(previous) = &self.current_context {
            warn!(
                "[Binding] rebinding from interaction {} to {} without unbinding",
                previous.interaction.id, context.interaction.id
            );
        }
        debug!(
            "[Binding] bound to interaction {} ({})",
            context.interaction.id,
            context.command_name()
        );
        self.current_context = Some(context);
    }

    pub fn unbind(&mut self) -> Option<Arc<Context>> {
        self.current_context.take()
    }

    pub const fn is_bound(&self) -> bool {
        self.current_context.is_some()
    }
}

impl InvocationHost for CommandBase {
    fn current_context(&self) -> Option<&Context> {
        self.current_context.as_deref()
    }

    fn client(&self) -> &dyn ValueResolver {
        self.client.as_ref()
    }
}

/// A command type with statically declared options.
///
/// Usually implemented through [`define_command!`](crate::define_command).
pub trait CommandDefinition: InvocationHost + Send + Sync + Sized + 'static {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;
    const TYPE: CommandType;

    fn from_base(base: CommandBase) -> Self;
    fn base(&self) -> &CommandBase;
    fn base_mut(&mut self) -> &mut CommandBase;

    /// Declared options, in declaration order.
    fn options() -> Vec<&'static dyn OptionSchema>;

    /// Command types required by the declared context-menu targets.
    fn target_types() -> Vec<CommandType>;

    /// Checks that every context-menu target matches the command type.
    ///
    /// # Panics
    /// If a target belongs to another kind of command. Such a command could
    /// never read its target, so the declaration itself is wrong.
    fn check_targets() {
        if let Some(target) = Self::target_types().into_iter().find(|t| *t != Self::TYPE) {
            panic!(
                "command '{}' is a {:?} command but declares a {target:?} target",
                Self::NAME,
                Self::TYPE
            );
        }
    }

    fn new(client: Arc<dyn ValueResolver>) -> Self {
        Self::from_base(CommandBase::new(client))
    }

    /// Builds the registration payload. Context-menu commands register
    /// without a description or options.
    fn schema() -> CommandSchema {
        if Self::TYPE.is_context_menu() {
            return CommandSchema {
                kind: Self::TYPE,
                name: Self::NAME.to_string(),
                description: String::new(),
                options: Vec::new(),
            };
        }

        CommandSchema {
            kind: Self::TYPE,
            name: Self::NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            options: Self::options()
                .into_iter()
                .map(|option| option.to_command_option())
                .collect(),
        }
    }
}

/// Trait that must be implemented by every dispatchable command
#[async_trait]
pub trait CommandHandler: CommandDefinition {
    /// Runs the command. Option accessors on `self` resolve against
    /// `context` for the duration of the call.
    async fn invoke(&self, context: &Context) -> Result<Value, CommandError>;
}
