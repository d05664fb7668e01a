mod color;
mod renderer;

pub use color::parse_color;
pub use renderer::{render, save_sheet};
