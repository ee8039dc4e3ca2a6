pub mod image;
pub mod rect;
