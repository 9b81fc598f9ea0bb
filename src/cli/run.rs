use std::fs;
use std::path::Path;

use env_logger::Env;
use log::{debug, LevelFilter};

use super::args::{Action, Args};
use crate::command::Client;
use crate::core::{AppError, CommandError, Config};
use crate::formatter::OutputFormatter;
use crate::interaction::Interaction;

/// Initialises logging. `--debug` forces the debug level, otherwise
/// `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config, debug: bool) {
    let mut builder = if debug {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Debug);
        builder
    } else {
        env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
    };
    // A logger may already be installed when running embedded.
    let _ = builder.try_init();
}

/// Reads an interaction payload from `path`.
pub fn read_interaction(path: &Path) -> Result<Interaction, AppError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {e}", path.display())))?;
    Ok(serde_json::from_str(&contents)?)
}

pub async fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::load()?;
    if let Some(output) = args.output {
        config.update_output(output);
    }
    init_logging(&config, args.debug);

    debug!(
        "[SETTINGS] output: {:?}, pretty_json: {}",
        config.output, config.pretty_json
    );

    let formatter = OutputFormatter::new(&config);
    let client = Client::with_default_commands();

    let rendered = match args.action {
        Action::Schema { command } => {
            let mut schemas = client.registration_payload();
            if let Some(name) = command {
                schemas.retain(|schema| schema.name == name);
                if schemas.is_empty() {
                    return Err(CommandError::NotFound(name).into());
                }
            }
            formatter.format_schemas(&schemas)?
        }
        Action::Invoke { path } => {
            let interaction = read_interaction(&path)?;
            let output = client.handle_interaction(interaction).await?;
            formatter.format_output(&output)?
        }
    };

    println!("{rendered}");
    Ok(())
}
