mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::warn;

use cli::{App, Cli, Commands, ConfigCommands};
use now_playing_bridge::config::Config;
use now_playing_bridge::logging;

fn main() -> Result<()> {
    // A broken config file must not lock out the `config` subcommands
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Initialize logging
    logging::init(&config.logging);
    if let Some(e) = &load_error {
        warn!("Using default config: {e:#}");
    }

    let cli = Cli::parse();
    let app = App::new(config, load_error);

    match cli.command {
        Commands::Publish {
            title,
            artist,
            media_type,
            window,
        } => {
            app.publish(&title, &artist, media_type, window)?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                app.config_path()?;
            }
            ConfigCommands::Show => {
                app.config_show()?;
            }
            ConfigCommands::Init => {
                app.config_init()?;
            }
        },
    }

    Ok(())
}
