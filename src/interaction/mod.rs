pub mod entities;
#[allow(clippy::module_inception)]
pub mod interaction;

pub use entities::{InteractionMember, Message, ResolvedUser, User};
pub use interaction::{CommandDataOption, Interaction, ResolvedData};

/// The invocation a command instance is bound to while it executes.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub interaction: Interaction,
}

impl Context {
    pub fn new(interaction: Interaction) -> Self {
        Self { interaction }
    }

    pub fn command_name(&self) -> &str {
        &self.interaction.command_name
    }
}
