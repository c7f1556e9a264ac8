#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RankingBoard {
    Monthly,
    Potential,
    RichFans,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingEntry {
    pub rank: u32,
    pub author: String,
    pub title: String,
    pub score: u64,
    pub tickets: u64,
    pub trend: Trend,
    pub is_player: bool,
}

/// The three leaderboards shown to the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rankings {
    pub monthly: Vec<RankingEntry>,
    pub potential: Vec<RankingEntry>,
    pub rich_fans: Vec<RankingEntry>,
}

impl Rankings {
    pub fn board(&self, board: RankingBoard) -> &[RankingEntry] {
        match board {
            RankingBoard::Monthly => &self.monthly,
            RankingBoard::Potential => &self.potential,
            RankingBoard::RichFans => &self.rich_fans,
        }
    }

    pub fn board_mut(&mut self, board: RankingBoard) -> &mut Vec<RankingEntry> {
        match board {
            RankingBoard::Monthly => &mut self.monthly,
            RankingBoard::Potential => &mut self.potential,
            RankingBoard::RichFans => &mut self.rich_fans,
        }
    }

    pub fn player_entry_mut(&mut self, board: RankingBoard) -> Option<&mut RankingEntry> {
        self.board_mut(board)
            .iter_mut()
            .find(|entry| entry.is_player)
    }

    /// Sorts a board by score (descending, stable) and renumbers ranks from 1.
    pub fn re_rank(&mut self, board: RankingBoard) {
        let entries = self.board_mut(board);
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        for (index, entry) in entries.iter_mut().enumerate() {
            entry.rank = index as u32 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(author: &str, score: u64, is_player: bool) -> RankingEntry {
        RankingEntry {
            rank: 0,
            author: author.into(),
            title: String::new(),
            score,
            tickets: 0,
            trend: Trend::Stable,
            is_player,
        }
    }

    #[test]
    fn re_rank_sorts_descending() {
        let mut rankings = Rankings::default();
        rankings.monthly = vec![entry("a", 10, false), entry("me", 30, true), entry("b", 20, false)];
        rankings.re_rank(RankingBoard::Monthly);

        let order: Vec<_> = rankings.monthly.iter().map(|e| (e.rank, e.author.as_str())).collect();
        assert_eq!(order, vec![(1, "me"), (2, "b"), (3, "a")]);
    }
}
