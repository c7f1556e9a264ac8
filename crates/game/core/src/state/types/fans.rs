/// Audience bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FanTier {
    Passerby,
    Followers,
    Hardcore,
    Stans,
}

/// Audience split into four tiers. Counts never go negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanTiers {
    pub passerby: u64,
    pub followers: u64,
    pub hardcore: u64,
    pub stans: u64,
}

impl FanTiers {
    pub fn total(&self) -> u64 {
        self.passerby + self.followers + self.hardcore + self.stans
    }

    /// Share of the audience made up of stans, `0.0` for an empty audience.
    pub fn stan_ratio(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.stans as f64 / total as f64,
        }
    }

    pub fn get(&self, tier: FanTier) -> u64 {
        match tier {
            FanTier::Passerby => self.passerby,
            FanTier::Followers => self.followers,
            FanTier::Hardcore => self.hardcore,
            FanTier::Stans => self.stans,
        }
    }

    fn slot(&mut self, tier: FanTier) -> &mut u64 {
        match tier {
            FanTier::Passerby => &mut self.passerby,
            FanTier::Followers => &mut self.followers,
            FanTier::Hardcore => &mut self.hardcore,
            FanTier::Stans => &mut self.stans,
        }
    }

    /// Applies a signed change, saturating at zero.
    pub fn shift(&mut self, tier: FanTier, delta: i64) {
        let slot = self.slot(tier);
        *slot = if delta >= 0 {
            slot.saturating_add(delta as u64)
        } else {
            slot.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Moves up to `amount` fans from one tier to another and returns how many moved.
    pub fn convert(&mut self, from: FanTier, to: FanTier, amount: u64) -> u64 {
        let moved = amount.min(self.get(from));
        *self.slot(from) -= moved;
        *self.slot(to) += moved;
        moved
    }
}
