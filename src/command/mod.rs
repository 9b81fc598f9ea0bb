//! Command declaration, binding and dispatch.

mod base;
mod client;
mod macros;
mod registry;
mod resolver;

pub use base::{CommandBase, CommandDefinition, CommandHandler, InvocationHost};
pub use client::Client;
pub use registry::CommandRegistry;
pub use resolver::{InteractionResolver, ValueResolver};
