pub mod panel;
pub mod root;
pub mod stack;
pub mod text;
pub mod traits;

pub use panel::DrawingPanel;
pub use root::RootLayout;
pub use stack::{Stack, StackAlignment, StackDirection};
pub use text::TextPanel;
pub use traits::{BoxModel, LayoutItem};
