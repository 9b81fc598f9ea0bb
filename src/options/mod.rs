//! Option declarations and their binding to invocations.

pub mod constructors;
pub mod context_menu;
pub mod data;
pub mod descriptor;
pub mod value;

pub use constructors::{boolean, integer, number, string};
pub use context_menu::{ContextMenuOption, ContextMenuTarget};
pub use data::{AutocompleteHandler, Localizations, OptionData, OptionSchema};
pub use descriptor::{ChoiceValue, OptionAccess, OptionDescriptor};
pub use value::{DefaultValue, FromOptionValue, OptionValue};
