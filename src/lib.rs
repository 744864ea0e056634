pub mod config;
pub mod demo;
pub mod host;

pub use config::{Config, ConfigError};
pub use host::{MenuHost, NavigationEvent};
