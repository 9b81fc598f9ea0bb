use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::base::CommandHandler;
use super::registry::CommandRegistry;
use super::resolver::{InteractionResolver, ValueResolver};
use crate::commands::{Convert, Echo, Quote, UserInfo};
use crate::core::CommandError;
use crate::interaction::{Context, Interaction};
use crate::schema::CommandSchema;

/// Owns the registered commands and the resolver their instances read
/// options through.
pub struct Client {
    registry: CommandRegistry,
    resolver: Arc<dyn ValueResolver>,
}

impl Client {
    pub fn new(resolver: Arc<dyn ValueResolver>) -> Self {
        Self {
            registry: CommandRegistry::new(),
            resolver,
        }
    }

    /// A client resolving from interaction payloads, with the built-in
    /// commands registered.
    pub fn with_default_commands() -> Self {
        let mut client = Self::new(Arc::new(InteractionResolver));
        client
            .register::<Echo>()
            .register::<Convert>()
            .register::<UserInfo>()
            .register::<Quote>();
        client
    }

    pub fn register<C: CommandHandler>(&mut self) -> &mut Self {
        self.registry.register::<C>();
        self
    }

    pub const fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Payload for registering every known command with the platform.
    pub fn registration_payload(&self) -> Vec<CommandSchema> {
        self.registry.schemas()
    }

    /// Binds `interaction` to a fresh instance of the command it names and
    /// runs it.
    pub async fn handle_interaction(&self, interaction: Interaction) -> Result<Value, CommandError> {
        debug!(
            "[Client] dispatching interaction {} to '{}'",
            interaction.id, interaction.command_name
        );
        let context = Arc::new(Context::new(interaction));
        self.registry
            .invoke(Arc::clone(&self.resolver), context)
            .await
    }
}
