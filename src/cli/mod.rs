pub mod args;
pub mod run;

pub use args::{Action, Args};
pub use run::run;
