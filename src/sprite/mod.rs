mod loader;
mod source;

pub use loader::load_images;
pub use source::SourceImage;
