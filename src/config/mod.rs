use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use pixmenu_kit::components::menu::{MenuMode, DEFAULT_Y_PADDING};
use pixmenu_kit::components::menu_item::MenuItemStyle;
use pixmenu_kit::display::{Color, Font};
use pixmenu_kit::theme::{Theme, ThemeScheme};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toml::map::Entry;
use tracing::warn;

/// Environment variable naming one more config file, merged last
pub const CONFIG_ENV: &str = "PIXMENU_CONFIG";

const LOCAL_CONFIG: &str = "pixmenu_config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub font: Font,
    pub menu: MenuConfig,
    pub host: HostConfig,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Panel size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        // SSD1306 class OLED
        Self {
            width: 128,
            height: 64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub mode: MenuMode,
    /// Gap between rows
    pub y_padding: i32,
    pub theme_scheme: ThemeScheme,
    /// Overrides the scheme's text color, `#RRGGBB` or `#RRGGBBWW`
    pub foreground: Option<Color>,
    pub background: Option<Color>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            mode: MenuMode::default(),
            y_padding: DEFAULT_Y_PADDING,
            theme_scheme: ThemeScheme::default(),
            foreground: None,
            background: None,
        }
    }
}

impl MenuConfig {
    /// Scheme colors with the explicit overrides applied
    pub fn theme(&self) -> Theme {
        let mut theme = Theme::for_scheme(self.theme_scheme);
        if let Some(foreground) = self.foreground {
            theme.foreground = foreground;
            theme.border = foreground;
        }
        if let Some(background) = self.background {
            theme.background = background;
        }
        theme
    }

    pub fn item_style(&self, font: &Font) -> MenuItemStyle {
        MenuItemStyle::new()
            .with_font(font.clone())
            .with_theme(&self.theme())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Polling period
    pub tick_interval_ms: u64,
    /// Ticks to run before exiting, 0 runs until interrupted
    pub ticks: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            ticks: 24,
        }
    }
}

impl Config {
    pub fn with<R>(f: impl FnOnce(&Config) -> R) -> R {
        let config = CONFIG.get_or_init(Config::init);
        f(config)
    }

    /// Defaults overridden by a single file, without the other layers
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let value = content
            .parse::<toml::Value>()
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut merged = Self::default_value()?;
        merge_value(&mut merged, value);

        let config: Config = merged.try_into().map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn init() -> Self {
        let mut merged = match Self::default_value() {
            Ok(value) => value,
            Err(err) => {
                warn!("{err}, using default config");
                return Self::default();
            }
        };

        // Load config files in order of priority (lowest to highest)
        let mut found_any_config = false;
        for path in config_layers() {
            found_any_config |= merge_file(&mut merged, &path);
        }

        if !found_any_config {
            warn!("No configuration file found, using default config");
        }

        let config: Config = match merged.try_into() {
            Ok(config) => config,
            Err(err) => {
                warn!("Falling back to default config due to invalid overrides: {err}");
                return Self::default();
            }
        };

        if let Err(err) = config.validate() {
            warn!("Falling back to default config: {err}");
            return Self::default();
        }

        tracing::info!(
            "Config initialized: {}x{} display, {:?} mode",
            config.display.width,
            config.display.height,
            config.menu.mode
        );
        config
    }

    fn default_value() -> Result<toml::Value, ConfigError> {
        toml::Value::try_from(Self::default())
            .map_err(|err| ConfigError::Invalid(format!("default config is not valid toml: {err}")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width <= 0 || self.display.height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "display size must be positive, got {}x{}",
                self.display.width, self.display.height
            )));
        }
        if self.font.glyph_width <= 0 || self.font.glyph_height <= 0 {
            return Err(ConfigError::Invalid(format!(
                "font `{}` needs a positive glyph size",
                self.font.name
            )));
        }
        if self.menu.y_padding < 0 {
            return Err(ConfigError::Invalid(format!(
                "menu.y_padding must not be negative, got {}",
                self.menu.y_padding
            )));
        }
        if self.host.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "host.tick_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Candidate files, lowest priority first
fn config_layers() -> Vec<PathBuf> {
    let mut layers = Vec::new();
    // 1. System config
    layers.extend(get_system_config_path());
    // 2. User config (XDG)
    layers.extend(get_user_config_path());
    // 3. Current directory (dev override)
    layers.push(PathBuf::from(LOCAL_CONFIG));
    // 4. Explicit file (highest priority)
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        layers.push(PathBuf::from(path));
    }
    layers
}

/// Merge one layer if it can be read; returns whether it was applied
fn merge_file(merged: &mut toml::Value, path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(path) else {
        tracing::debug!("No config at {}", path.display());
        return false;
    };

    match content.parse::<toml::Value>() {
        Ok(value) => {
            merge_value(merged, value);
            tracing::info!("Loaded config from {}", path.display());
            true
        }
        Err(err) => {
            warn!("Failed to parse {}: {err}", path.display());
            false
        }
    }
}

fn merge_value(base: &mut toml::Value, overrides: toml::Value) {
    match (base, overrides) {
        (toml::Value::Table(base_map), toml::Value::Table(override_map)) => {
            for (key, override_value) in override_map {
                match base_map.entry(key) {
                    Entry::Occupied(mut entry) => merge_value(entry.get_mut(), override_value),
                    Entry::Vacant(entry) => {
                        entry.insert(override_value);
                    }
                }
            }
        }
        (base_value, override_value) => {
            *base_value = override_value;
        }
    }
}

fn get_system_config_path() -> Option<PathBuf> {
    let path = PathBuf::from("/etc/pixmenu/config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

fn get_user_config_path() -> Option<PathBuf> {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config"))
        })?;

    let path = config_dir.join("pixmenu").join("config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.display.width, 128);
        assert_eq!(config.display.height, 64);
        assert_eq!(config.menu.mode, MenuMode::Rotary);
        assert_eq!(config.menu.y_padding, 2);
        assert_eq!(config.menu.theme(), Theme::dark());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_menu_section_from_toml() {
        let overrides = r##"
            [menu]
            mode = "joystick"
            theme_scheme = "light"
            foreground = "#102030"
        "##;

        let config: Config = toml::from_str(overrides).expect("Config should deserialize");
        assert_eq!(config.menu.mode, MenuMode::Joystick);

        let theme = config.menu.theme();
        assert_eq!(theme.foreground, Color::from_rgb(0x10, 0x20, 0x30));
        assert_eq!(theme.background, Theme::light().background);

        let style = config.menu.item_style(&config.font);
        assert_eq!(style.foreground, theme.foreground);
        assert_eq!(style.font, Font::default());
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [menu]
            foreground = "white"
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_get_user_config_path_with_xdg_config_home() {
        let temp_dir = tempfile::tempdir().unwrap();

        // Set XDG_CONFIG_HOME temporarily
        let old_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let config_dir = temp_dir.path().join("pixmenu");
        fs::create_dir_all(&config_dir).unwrap();
        let config_file = config_dir.join("config.toml");
        fs::write(&config_file, "# test config").unwrap();

        let path = get_user_config_path();
        assert_eq!(path, Some(config_file));

        // Cleanup
        if let Some(old) = old_xdg {
            env::set_var("XDG_CONFIG_HOME", old);
        } else {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_get_user_config_path_falls_back_to_home() {
        let temp_dir = tempfile::tempdir().unwrap();

        let old_xdg = env::var("XDG_CONFIG_HOME").ok();
        let old_home = env::var("HOME").ok();
        env::remove_var("XDG_CONFIG_HOME");
        env::set_var("HOME", temp_dir.path());

        let config_dir = temp_dir.path().join(".config").join("pixmenu");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("config.toml"), "").unwrap();

        let path = get_user_config_path();
        assert_eq!(path, Some(config_dir.join("config.toml")));

        if let Some(old) = old_xdg {
            env::set_var("XDG_CONFIG_HOME", old);
        }
        if let Some(old) = old_home {
            env::set_var("HOME", old);
        } else {
            env::remove_var("HOME");
        }
    }

    #[test]
    #[serial]
    fn test_get_user_config_path_without_file() {
        let temp_dir = tempfile::tempdir().unwrap();

        let old_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        assert!(get_user_config_path().is_none());

        if let Some(old) = old_xdg {
            env::set_var("XDG_CONFIG_HOME", old);
        } else {
            env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_env_config_is_the_last_layer() {
        let old = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, "/tmp/pixmenu-override.toml");

        let layers = config_layers();
        assert_eq!(
            layers.last(),
            Some(&PathBuf::from("/tmp/pixmenu-override.toml"))
        );
        assert!(layers.contains(&PathBuf::from(LOCAL_CONFIG)));

        if let Some(old) = old {
            env::set_var(CONFIG_ENV, old);
        } else {
            env::remove_var(CONFIG_ENV);
        }
    }

    #[test]
    fn test_get_system_config_path() {
        // Only returns Some if the file exists
        if let Some(p) = get_system_config_path() {
            assert_eq!(p, PathBuf::from("/etc/pixmenu/config.toml"));
        }
    }

    #[test]
    fn test_config_merge_priority() {
        let mut base = Config::default_value().unwrap();

        merge_value(
            &mut base,
            r#"
            [display]
            width = 96
            [menu]
            y_padding = 4
        "#
            .parse()
            .unwrap(),
        );
        merge_value(
            &mut base,
            r#"
            [display]
            width = 240
        "#
            .parse()
            .unwrap(),
        );

        let config: Config = base.try_into().unwrap();
        assert_eq!(config.display.width, 240);
        // untouched keys of an overridden table survive
        assert_eq!(config.display.height, 64);
        assert_eq!(config.menu.y_padding, 4);
    }

    #[test]
    fn test_merge_file_skips_broken_layers() {
        let temp_dir = tempfile::tempdir().unwrap();
        let broken = temp_dir.path().join("broken.toml");
        fs::write(&broken, "[display\nwidth = ").unwrap();

        let mut base = Config::default_value().unwrap();
        let before = base.clone();

        assert!(!merge_file(&mut base, &broken));
        assert!(!merge_file(&mut base, &temp_dir.path().join("missing.toml")));
        assert_eq!(base, before);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [font]
            name = "6x10"
            glyph_width = 6
            glyph_height = 10

            [host]
            ticks = 0
        "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.font.name, "6x10");
        assert_eq!(config.font.spacing, 1);
        assert_eq!(config.host.ticks, 0);
        assert_eq!(config.host.tick_interval_ms, 100);
    }

    #[test]
    fn test_load_from_errors() {
        let temp_dir = tempfile::tempdir().unwrap();

        let missing = Config::load_from(temp_dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));

        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "display = [").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));

        fs::write(&path, "[display]\nheight = 0").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("0"));
    }
}
