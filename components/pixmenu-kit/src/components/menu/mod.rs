mod graphical;
mod scroll;
mod state;

pub use graphical::{GraphicalDisplayMenu, DEFAULT_Y_PADDING};
pub use scroll::{ScrollDetector, ScrollPlan};
pub use state::{EnterOutcome, MenuMode, MenuSnapshot, MenuState};
