//! Wire-level vocabulary shared with the command registration API.

pub mod command_option;
pub mod snowflake;
pub mod types;

pub use command_option::{CommandChoice, CommandOption, CommandSchema, NumericBound};
pub use snowflake::Snowflake;
pub use types::{ChannelType, CommandType, OptionType};
