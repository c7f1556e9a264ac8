use crate::env::{PerkEffect, StatusLevel};
use crate::state::{AuthorRank, Genre};

/// Highest rank whose threshold the reputation has reached.
///
/// An empty ladder leaves every author at [`AuthorRank::Novice`].
pub fn rank_for(reputation: u64, ladder: &[StatusLevel]) -> AuthorRank {
    ladder
        .iter()
        .filter(|level| level.threshold <= reputation)
        .map(|level| level.rank)
        .max()
        .unwrap_or_default()
}

/// Percentage of the way from the current threshold to the next, `0..=100`.
///
/// Returns 100 at the top of the ladder.
pub fn progress(reputation: u64, ladder: &[StatusLevel]) -> u32 {
    let current = rank_for(reputation, ladder);
    let floor = ladder
        .iter()
        .find(|level| level.rank == current)
        .map_or(0, |level| level.threshold);
    let Some(ceiling) = ladder
        .iter()
        .filter(|level| level.rank > current)
        .map(|level| level.threshold)
        .min()
    else {
        return 100;
    };

    if ceiling <= floor {
        return 100;
    }
    let gained = reputation.saturating_sub(floor) as f64;
    let span = (ceiling - floor) as f64;
    ((gained / span) * 100.0).clamp(0.0, 100.0) as u32
}

/// Whether any level at or below `rank` unlocks the genre.
pub fn genre_unlocked(rank: AuthorRank, genre: Genre, ladder: &[StatusLevel]) -> bool {
    ladder
        .iter()
        .filter(|level| level.rank <= rank)
        .any(|level| level.unlocked_genres.contains(&genre))
}

/// Combined effect of every rank skill earned so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perks {
    pub writing_stamina_factor: f64,
    pub post_heat_factor: f64,
    pub word_count_factor: f64,
    pub inspiration_free: bool,
}

impl Default for Perks {
    fn default() -> Self {
        Self {
            writing_stamina_factor: 1.0,
            post_heat_factor: 1.0,
            word_count_factor: 1.0,
            inspiration_free: false,
        }
    }
}

impl Perks {
    fn apply(mut self, effect: PerkEffect) -> Self {
        match effect {
            PerkEffect::WritingStaminaFactor(factor) => self.writing_stamina_factor *= factor,
            PerkEffect::PostHeatFactor(factor) => self.post_heat_factor *= factor,
            PerkEffect::WordCountFactor(factor) => self.word_count_factor *= factor,
            PerkEffect::InspirationFree => self.inspiration_free = true,
        }
        self
    }
}

/// Folds the skill effects of all levels up to and including `rank`.
pub fn perks(rank: AuthorRank, ladder: &[StatusLevel]) -> Perks {
    ladder
        .iter()
        .filter(|level| level.rank <= rank)
        .flat_map(|level| level.skills.iter())
        .filter_map(|skill| skill.effect)
        .fold(Perks::default(), Perks::apply)
}
