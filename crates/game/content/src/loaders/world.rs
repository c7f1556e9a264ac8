//! Rival authors and macro-event catalog loader.

use std::path::Path;

use career_core::GameEvent;
use career_core::env::RivalEntry;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldCatalog {
    #[serde(default)]
    pub rivals: Vec<RivalEntry>,
    pub macro_events: Vec<GameEvent>,
}

/// Loader for `world.ron`.
pub struct WorldLoader;

impl WorldLoader {
    pub fn load(path: &Path) -> LoadResult<WorldCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<WorldCatalog> {
        let catalog: WorldCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))?;

        ensure_unique("macro event", catalog.macro_events.iter().map(|e| e.id.as_str()))?;
        validate_events("macro event", &catalog.macro_events)?;
        Ok(catalog)
    }
}

/// Every event must offer the player at least one choice.
pub(crate) fn validate_events(kind: &str, events: &[GameEvent]) -> LoadResult<()> {
    for event in events {
        anyhow::ensure!(
            !event.options.is_empty(),
            "{} '{}' has no options",
            kind,
            event.id
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::RankingBoard;

    #[test]
    fn parses_rivals_and_events() {
        let catalog = WorldLoader::parse(
            r#"(
                rivals: [(board: Monthly, author: "墨染", title: "长夜", score: 9000)],
                macro_events: [(
                    id: "rate_cut",
                    title: "央行降息",
                    description: "",
                    options: [(text: "加仓", impact: (money: -500.0))],
                    market_effect: Some((target_asset: ("index_fund"), bias: 20)),
                )],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.rivals[0].board, RankingBoard::Monthly);
        assert_eq!(catalog.rivals[0].tickets, 0);
        let event = &catalog.macro_events[0];
        assert_eq!(event.options[0].impact.money, -500.0);
        assert_eq!(event.options[0].impact.mood, 0);
        assert_eq!(
            event.market_effect.as_ref().map(|effect| effect.bias),
            Some(20)
        );
    }

    #[test]
    fn rejects_event_without_options() {
        let result = WorldLoader::parse(
            r#"(macro_events: [(id: "empty", title: "", description: "", options: [])])"#,
        );
        assert!(result.is_err());
    }
}
