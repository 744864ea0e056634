pub mod common;
pub mod components;
pub mod display;
pub mod rendering;
pub mod theme;

// Re-export commonly used items
pub use common::{Dimension, Position, Rect};
pub use components::layout::{
    BoxModel, DrawingPanel, LayoutItem, RootLayout, Stack, StackAlignment, StackDirection,
    TextPanel,
};
pub use components::menu::{
    EnterOutcome, GraphicalDisplayMenu, MenuMode, MenuSnapshot, MenuState, ScrollPlan,
};
pub use components::menu_item::{MenuItem, MenuItemKind, MenuItemStyle};
pub use display::{Color, DisplayError, DisplaySurface, Font, PageId, TextAlign};
pub use rendering::Framebuffer;

/// Convenience prelude for building menus and layouts
pub mod prelude {
    pub use crate::common::{Dimension, Position, Rect};
    pub use crate::components::layout::{
        BoxModel, DrawingPanel, LayoutItem, RootLayout, Stack, StackAlignment, StackDirection,
        TextPanel,
    };
    pub use crate::components::menu::{
        EnterOutcome, GraphicalDisplayMenu, MenuMode, MenuSnapshot, MenuState, ScrollPlan,
    };
    pub use crate::components::menu_item::{
        DefaultValueFormatter, MenuItem, MenuItemKind, MenuItemStyle, MenuItemValueArguments,
        ValueFormatter,
    };
    pub use crate::display::{Color, DisplaySurface, Font, PageId, TextAlign};
    pub use crate::rendering::Framebuffer;
    pub use crate::theme::{Theme, ThemeScheme};
}
