pub mod framebuffer;

pub use framebuffer::{Framebuffer, PrintedText};
