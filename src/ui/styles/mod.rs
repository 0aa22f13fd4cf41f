//! UI styling: colors shared by the board widget and the screens

pub mod colors;

pub use colors::*;
