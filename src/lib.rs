//! Declarative slash-command options that read as typed values once a
//! command instance is bound to an interaction.

pub mod cli;
pub mod command;
pub mod commands;
pub mod core;
pub mod formatter;
pub mod interaction;
pub mod options;
pub mod schema;

pub use crate::command::{
    Client, CommandBase, CommandDefinition, CommandHandler, CommandRegistry, InteractionResolver,
    InvocationHost, ValueResolver,
};
pub use crate::core::{AppError, CommandError, Config, OutputFormat, ResolveError};
pub use crate::formatter::OutputFormatter;
pub use crate::options::{
    boolean, integer, number, string, ContextMenuOption, DefaultValue, OptionAccess, OptionData,
    OptionDescriptor, OptionValue,
};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use paste::paste;
}
