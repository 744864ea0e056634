use serde::{Deserialize, Serialize};

use crate::display::Color;

/// Which palette the menu starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScheme {
    /// Lit text on a dark panel, the natural look of an OLED
    #[default]
    Dark,
    /// Dark text on a lit panel
    Light,
}

/// Colors used by the menu and layout components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            foreground: Color::ON,
            background: Color::OFF,
            border: Color::ON,
        }
    }

    pub fn light() -> Self {
        Self {
            foreground: Color::OFF,
            background: Color::ON,
            border: Color::OFF,
        }
    }

    pub fn for_scheme(scheme: ThemeScheme) -> Self {
        match scheme {
            ThemeScheme::Dark => Self::dark(),
            ThemeScheme::Light => Self::light(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
