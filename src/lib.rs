//! Publishes "now playing" metadata to the Windows System Media Transport
//! Controls, built as a native plugin for UI frameworks that load C-ABI
//! libraries.

pub mod config;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod models;
pub mod platform;
pub mod publisher;

pub use error::{PlatformError, PublishError, UnavailableStage};
pub use models::{MediaType, NowPlayingMetadata, PlaybackStatus};
pub use platform::ViewScope;
pub use publisher::MediaStatusPublisher;
