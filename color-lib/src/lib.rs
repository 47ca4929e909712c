pub mod color;
pub mod palette;

pub use color::{sRGB, to_string};
pub use palette::Palette;
