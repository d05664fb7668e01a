use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sheetpack")]
#[command(version, about = "Pack images into a single bordered sprite sheet", long_about = None)]
pub struct CliArgs {
    /// Input image files, packed in the order given
    #[arg(long = "input_images", required = true, num_args = 1..)]
    pub input_images: Vec<PathBuf>,

    /// Output file path (format inferred from the extension)
    #[arg(long = "output_image")]
    pub output_image: PathBuf,

    /// Maximum sheet width in pixels; the sheet shrinks to the widest row
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Border thickness between and around images in pixels
    #[arg(long = "border_width", default_value_t = 1)]
    pub border_width: u32,

    /// Border color: a named color or hex like '#rrggbb'
    #[arg(long = "border_color", default_value = "green")]
    pub border_color: String,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
