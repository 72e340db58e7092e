use anyhow::{Context, Result, bail};

use now_playing_bridge::config::Config;
use now_playing_bridge::{MediaStatusPublisher, MediaType, NowPlayingMetadata, ViewScope};

pub struct App {
    pub config: Config,
    /// Why the config file was ignored, if it was
    pub load_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config, load_error: Option<anyhow::Error>) -> Self {
        Self { config, load_error }
    }

    pub fn publish(
        &self,
        title: &str,
        artist: &str,
        media_type: MediaType,
        window: Option<isize>,
    ) -> Result<()> {
        let scope = window.map_or(ViewScope::CurrentView, ViewScope::Window);
        let metadata = NowPlayingMetadata {
            title: title.to_string(),
            artist: artist.to_string(),
            media_type,
        };

        MediaStatusPublisher::native(scope)
            .publish_now_playing(&metadata)
            .with_context(|| format!("Failed to publish to {scope}"))?;

        println!("Now playing: {} - {}", display_or_blank(artist), display_or_blank(title));
        Ok(())
    }

    pub fn config_path(&self) -> Result<()> {
        println!("{}", Config::config_path().display());
        Ok(())
    }

    pub fn config_show(&self) -> Result<()> {
        if let Some(e) = &self.load_error {
            bail!("Invalid config at {}: {e:#}", Config::config_path().display());
        }
        print!("{}", self.config.to_toml()?);
        Ok(())
    }

    pub fn config_init(&self) -> Result<()> {
        let path = Config::config_path();
        if path.exists() {
            println!("Config already exists: {}", path.display());
            if self.load_error.is_some() {
                println!("It could not be parsed; fix or remove it and run init again.");
            }
            return Ok(());
        }

        Config::default().save()?;
        println!("Wrote default config to: {}", path.display());
        Ok(())
    }
}

fn display_or_blank(s: &str) -> &str {
    if s.is_empty() { "(blank)" } else { s }
}
