use clap::{Parser, Subcommand};

use now_playing_bridge::MediaType;

mod commands;
pub use commands::*;

#[derive(Parser)]
#[command(name = "nowplaying")]
#[command(about = "Publish now-playing metadata to the system media transport controls")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a track in the OS media overlay and mark it playing
    Publish {
        /// Track title
        #[arg(short, long, default_value = "")]
        title: String,
        /// Track artist
        #[arg(short, long, default_value = "")]
        artist: String,
        /// Media type (music, video, image)
        #[arg(short, long, default_value = "music", value_parser = parse_media_type)]
        media_type: MediaType,
        /// Scope to a window handle (decimal or 0x-prefixed hex) instead of the current view
        #[arg(short, long, value_parser = parse_window_handle)]
        window: Option<isize>,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write the default configuration if none exists
    Init,
}

/// `unknown` has no title or artist fields in the overlay, so it is refused here.
pub fn parse_media_type(s: &str) -> Result<MediaType, String> {
    match s.parse::<MediaType>()? {
        MediaType::Unknown => Err("Media type unknown cannot carry a title or artist".to_string()),
        media_type => Ok(media_type),
    }
}

pub fn parse_window_handle(s: &str) -> Result<isize, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => isize::from_str_radix(hex, 16),
        None => s.parse::<isize>(),
    };
    match parsed {
        Ok(0) => Err("Window handle must not be zero".to_string()),
        Ok(hwnd) => Ok(hwnd),
        Err(e) => Err(format!("Invalid window handle {s}: {e}")),
    }
}
