use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

use super::base::CommandHandler;
use super::resolver::ValueResolver;
use crate::core::CommandError;
use crate::interaction::Context;
use crate::schema::{CommandSchema, CommandType};

/// Object-safe handle on a registered command type.
#[async_trait]
trait RegisteredCommand: Send + Sync {
    fn schema(&self) -> CommandSchema;

    async fn invoke(
        &self,
        client: Arc<dyn ValueResolver>,
        context: Arc<Context>,
    ) -> Result<Value, CommandError>;
}

struct Registration<C>(PhantomData<fn() -> C>);

#[async_trait]
impl<C: CommandHandler> RegisteredCommand for Registration<C> {
    fn schema(&self) -> CommandSchema {
        C::schema()
    }

    async fn invoke(
        &self,
        client: Arc<dyn ValueResolver>,
        context: Arc<Context>,
    ) -> Result<Value, CommandError> {
        let mut command = C::new(client);
        command.base_mut().bind(Arc::clone(&context));
        let result = command.invoke(&context).await;
        command.base_mut().unbind();
        result
    }
}

/// Registry for looking up and dispatching to declared commands
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<(CommandType, String), Box<dyn RegisteredCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers `C`, keyed by its type and name.
    ///
    /// # Panics
    /// If `C` declares a context-menu target for another kind of command.
    pub fn register<C: CommandHandler>(&mut self) {
        C::check_targets();
        let key = (C::TYPE, C::NAME.to_string());
        debug!("[Registry] registering {:?} command '{}'", C::TYPE, C::NAME);
        if self
            .commands
            .insert(key, Box::new(Registration::<C>(PhantomData)))
            .is_some()
        {
            warn!("[Registry] replaced existing command '{}'", C::NAME);
        }
    }

    pub fn contains(&self, kind: CommandType, name: &str) -> bool {
        self.commands.contains_key(&(kind, name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registration payloads of every command, ordered by name then type.
    pub fn schemas(&self) -> Vec<CommandSchema> {
        let mut schemas: Vec<CommandSchema> =
            self.commands.values().map(|command| command.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name).then(a.kind.cmp(&b.kind)));
        schemas
    }

    /// Runs the command the bound interaction names on a fresh instance.
    pub async fn invoke(
        &self,
        client: Arc<dyn ValueResolver>,
        context: Arc<Context>,
    ) -> Result<Value, CommandError> {
        let interaction = &context.interaction;
        let command = self
            .commands
            .get(&(interaction.command_type, interaction.command_name.clone()))
            .ok_or_else(|| CommandError::NotFound(interaction.command_name.clone()))?;

        command.invoke(client, Arc::clone(&context)).await
    }
}
