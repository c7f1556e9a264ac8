//! Pure economy formulas.
//!
//! Nothing here touches [`GameState`](crate::state::GameState) directly except
//! achievement evaluation; actions call these helpers and apply the results.
pub mod achievements;
pub mod fans;
pub mod market;
pub mod progression;
pub mod writing;

pub use achievements::{criterion_holds, evaluate};
pub use fans::daily_churn;
pub use market::{initial_history, pump_ban_chance, pump_boost, tick_asset};
pub use progression::{Perks, genre_unlocked, perks, progress, rank_for};
pub use writing::{ChapterYield, chapter_income, chapter_quality_gain, chapter_stamina, chapter_words};

/// Rounds to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
