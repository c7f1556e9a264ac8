//! Progression oracle: the author-rank ladder and starting identities.
use crate::state::{AuthorRank, Genre, IdentityKind};

/// Mechanical effect granted by a rank skill. Effects stack across every
/// level the author has reached.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerkEffect {
    /// Multiplies the stamina cost of writing a chapter.
    WritingStaminaFactor(f64),
    /// Multiplies heat earned from social posts.
    PostHeatFactor(f64),
    /// Multiplies words produced per chapter.
    WordCountFactor(f64),
    /// Writing no longer consumes inspiration.
    InspirationFree,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankSkill {
    pub id: String,
    pub name: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<PerkEffect>,
}

/// One rung of the author-rank ladder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusLevel {
    pub rank: AuthorRank,
    /// Reputation needed to reach this rank.
    pub threshold: u64,
    pub unlocked_genres: Vec<Genre>,
    pub perks: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<RankSkill>,
}

/// Starting background: funds, audience and craft.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentityProfile {
    pub kind: IdentityKind,
    pub name: String,
    pub description: String,
    pub initial_funds: f64,
    pub initial_fans: u64,
    pub initial_skill: f64,
    pub specialty: Vec<Genre>,
    pub initial_house_level: u8,
}

pub trait ProgressionOracle: Send + Sync {
    /// Ladder levels ordered by ascending threshold.
    fn ladder(&self) -> &[StatusLevel];

    fn identities(&self) -> &[IdentityProfile];

    fn level(&self, rank: AuthorRank) -> Option<&StatusLevel> {
        self.ladder().iter().find(|level| level.rank == rank)
    }

    fn identity(&self, kind: IdentityKind) -> Option<&IdentityProfile> {
        self.identities().iter().find(|profile| profile.kind == kind)
    }
}
