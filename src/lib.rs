pub mod cli;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod sprite;

pub use cli::CliArgs;
pub use error::SheetError;
pub use layout::{Extent, Placement, Row, SheetLayout};
pub use sprite::SourceImage;
