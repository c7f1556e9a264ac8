//! Lifestyle catalogs: housing, the shop, offline hobbies and inspiration quotes.

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HousingTier {
    pub level: u8,
    pub name: String,
    /// Paid every day.
    pub rent: f64,
    /// Stamina restored on each rest.
    pub stamina_regen: u32,
}

/// One effect of a shop item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatEffect {
    Stamina(u32),
    Mood(u32),
    Reputation(u64),
    /// Multiplies writing skill by `1 + percent / 100`.
    SkillPercent(f64),
    Shards(u32),
    MaxStamina(u32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub effects: Vec<StatEffect>,
}

/// Offline hobby that trades stamina for shards, mood and skill.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatherOption {
    pub id: String,
    pub name: String,
    pub stamina_cost: u32,
    pub mood: i32,
    pub shards: u32,
    pub skill: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum QuoteCategory {
    Tension,
    Pure,
    Angst,
}

/// Quote the author can weave into the active novel for a shard price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InspirationQuote {
    pub id: String,
    pub text: String,
    pub category: QuoteCategory,
    pub shard_cost: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mood: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tension: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub quality: f64,
}

pub trait LifestyleOracle: Send + Sync {
    fn housing(&self) -> &[HousingTier];
    fn shop_items(&self) -> &[ShopItem];
    fn gather_options(&self) -> &[GatherOption];
    fn quotes(&self) -> &[InspirationQuote];

    fn housing_tier(&self, level: u8) -> Option<&HousingTier> {
        self.housing().iter().find(|tier| tier.level == level)
    }

    fn shop_item(&self, id: &str) -> Option<&ShopItem> {
        self.shop_items().iter().find(|item| item.id == id)
    }

    fn gather_option(&self, id: &str) -> Option<&GatherOption> {
        self.gather_options().iter().find(|option| option.id == id)
    }

    fn quote(&self, id: &str) -> Option<&InspirationQuote> {
        self.quotes().iter().find(|quote| quote.id == id)
    }
}
