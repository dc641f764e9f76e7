//! Terminal output formatting
//!
//! Tiles, keyboard, share grid and round banners.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_board, write_keyboard, write_outcome, write_progress};
