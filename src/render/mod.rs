//! Text renderings of trees.

pub mod ascii_art;

pub use ascii_art::{ascii_art, ascii_art_of};
