//! Command implementations

pub mod daily;
pub mod play;
pub mod score;

pub use daily::{DailyInfo, daily_info};
pub use play::run_play;
pub use score::score_guess;
