mod data;
mod renderer;
mod style;
mod value;

pub use data::{MenuItem, MenuItemKind};
pub use renderer::MenuItemRenderer;
pub use style::MenuItemStyle;
pub use value::{DefaultValueFormatter, MenuItemValueArguments, ValueFormatter};
