pub mod colors;
pub mod fonts;
