mod config;
pub mod error;

pub use config::Config;
pub use config::OutputFormat;
pub use error::{AppError, CommandError, ResolveError};
