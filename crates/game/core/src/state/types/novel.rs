use crate::config::GameConfig;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Genre {
    Daily,
    Campus,
    Taboo,
    Abo,
    Fantasy,
    Tragedy,
}

impl Genre {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "日常",
            Self::Campus => "校园",
            Self::Taboo => "禁忌",
            Self::Abo => "ABO",
            Self::Fantasy => "玄幻",
            Self::Tragedy => "虐文",
        }
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tendency {
    #[default]
    Sweet,
    Bitter,
    Spicy,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Orientation {
    Romance,
    PureLove,
    #[default]
    Yuri,
    Diverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NovelId(pub u32);

impl core::fmt::Display for NovelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "novel#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterOutline {
    pub chapter_number: u32,
    pub title: String,
    pub goal: String,
    pub is_modified: bool,
}

impl ChapterOutline {
    pub fn new(chapter_number: u32, title: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            chapter_number,
            title: title.into(),
            goal: goal.into(),
            is_modified: false,
        }
    }

    /// Placeholder outline used when the text service returns nothing.
    pub fn fallback(chapter_number: u32) -> Self {
        Self::new(
            chapter_number,
            format!("第 {} 章", chapter_number),
            "推进主线剧情",
        )
    }

    pub fn fallback_set(count: u32) -> Vec<Self> {
        (1..=count).map(Self::fallback).collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NovelFans {
    pub organic: u64,
    pub hardcore: u64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Novel {
    pub id: NovelId,
    pub title: String,
    pub genre: Genre,
    pub tendency: Tendency,
    pub orientation: Orientation,
    pub word_count: u64,
    pub popularity: u32,
    pub total_income: f64,
    pub is_finished: bool,
    pub reviews: Vec<String>,
    pub tension: u32,
    pub quality: f64,
    pub heat: u64,
    pub controversy: u32,
    pub fans: NovelFans,
    pub monthly_tickets: u64,
    pub outlines: Vec<ChapterOutline>,
    pub current_chapter_index: usize,
    pub legacy_income_rate: f64,
}

impl Novel {
    pub const START_POPULARITY: u32 = 50;
    pub const START_TENSION: u32 = 10;
    pub const START_HEAT: u64 = 100;

    pub fn new(
        id: NovelId,
        title: String,
        genre: Genre,
        tendency: Tendency,
        outlines: Vec<ChapterOutline>,
    ) -> Self {
        Self {
            id,
            title,
            genre,
            tendency,
            orientation: Orientation::Yuri,
            word_count: 0,
            popularity: Self::START_POPULARITY,
            total_income: 0.0,
            is_finished: false,
            reviews: Vec::new(),
            tension: Self::START_TENSION,
            quality: 0.0,
            heat: Self::START_HEAT,
            controversy: 0,
            fans: NovelFans::default(),
            monthly_tickets: 0,
            outlines,
            current_chapter_index: 0,
            legacy_income_rate: 0.0,
        }
    }

    pub fn current_outline(&self) -> Option<&ChapterOutline> {
        self.outlines.get(self.current_chapter_index)
    }

    /// Moves to the next chapter, staying on the last outline once reached.
    pub fn advance_chapter(&mut self) {
        let last = self.outlines.len().saturating_sub(1);
        self.current_chapter_index = (self.current_chapter_index + 1).min(last);
    }

    /// Appends reader comments, keeping only the most recent ones.
    pub fn push_reviews(&mut self, comments: impl IntoIterator<Item = String>) {
        self.reviews.extend(comments);
        if self.reviews.len() > GameConfig::MAX_REVIEWS {
            let excess = self.reviews.len() - GameConfig::MAX_REVIEWS;
            self.reviews.drain(..excess);
        }
    }

    pub fn add_quality(&mut self, gain: f64) {
        self.quality = (self.quality + gain).min(GameConfig::MAX_QUALITY);
    }

    pub fn shift_tension(&mut self, delta: i64) {
        self.tension =
            super::career::clamp_shift(self.tension, delta, GameConfig::MAX_TENSION);
    }
}

/// Novels in progress and on the shelf.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Library {
    pub active: Option<Novel>,
    pub finished: Vec<Novel>,
}

impl Library {
    pub fn iter(&self) -> impl Iterator<Item = &Novel> {
        self.active.iter().chain(self.finished.iter())
    }

    pub fn find(&self, id: NovelId) -> Option<&Novel> {
        self.iter().find(|novel| novel.id == id)
    }
}
