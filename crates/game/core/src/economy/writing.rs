//! Chapter output formulas.
use super::{Perks, round2};
use crate::config::GameConfig;

/// Words, income and quality produced by one chapter.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterYield {
    pub words: u64,
    pub income: f64,
    pub quality_gain: f64,
    pub stamina_cost: u32,
}

/// Words written this chapter. `roll` in `[0, 1)` spreads the result over
/// `base ± word_variance / 2`.
pub fn chapter_words(base_words: u32, roll: f64, perks: &Perks, config: &GameConfig) -> u64 {
    let spread = 1.0 - config.word_variance / 2.0 + roll * config.word_variance;
    (base_words as f64 * spread * perks.word_count_factor).floor() as u64
}

/// Royalties for a chapter, boosted by writing skill.
pub fn chapter_income(words: u64, writing_skill: f64, config: &GameConfig) -> f64 {
    (words as f64 * config.income_per_word * (1.0 + writing_skill / 100.0)).floor()
}

/// Quality gained by a chapter before the quality cap.
pub fn chapter_quality_gain(hardcore: bool, inspiration: u32, config: &GameConfig) -> f64 {
    let base = if hardcore {
        config.hardcore_quality_gain
    } else {
        config.normal_quality_gain
    };
    round2(base * (1.0 + inspiration as f64 / 50.0))
}

/// Stamina cost after the writing perk discount.
pub fn chapter_stamina(base_cost: u32, perks: &Perks) -> u32 {
    (base_cost as f64 * perks.writing_stamina_factor).ceil() as u32
}
