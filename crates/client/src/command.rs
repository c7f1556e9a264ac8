//! Line commands understood by the REPL.

use anyhow::{Context, Result, anyhow, bail};

use career_core::{
    Action, ApplyQuoteAction, AssetId, BoostRankingAction, BrainstormAction, BuyAssetAction,
    BuyItemAction, ChangeResidenceAction, FinishNovelAction, FollowNpcAction, GatherAction, Genre,
    Npc, NovelId, PostAction, PostKind, PumpAssetAction, RankingBoard, ResolveEventAction,
    SellAssetAction, SignFilmBetAction, Tendency, WritingMode,
};

pub const HELP: &str = "\
commands:
  status | market | feed | danmu | help | quit
  start <genre> <tendency> [title]   write [normal|hardcore] [inspiration]
  revise <direction>                 finish | quote <id> | brainstorm <shards>
  buy <asset> <shares>               sell <asset> <shares> | pump <asset>
  post <kind>                        follow curator | follow guru <asset>
  shop <item> | gather <option>      move <level> | rest | boost <board>
  resolve <option> | ip <novel> | film <novel> | news
  save | export
post kinds: tease brag share interact vote play_dead leave_note";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Status,
    Market,
    Feed,
    Danmu,
    Save,
    Export,
    /// Raise a macro event now.
    News,
    Start {
        genre: Genre,
        tendency: Tendency,
        title: Option<String>,
    },
    Write {
        mode: WritingMode,
        inspiration: u32,
    },
    Revise(String),
    NegotiateIp(NovelId),
    /// Anything that maps straight onto an engine action.
    Act(Action),
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();
        let rest = args.join(" ");

        let command = match head.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            "status" => Self::Status,
            "market" => Self::Market,
            "feed" => Self::Feed,
            "danmu" => Self::Danmu,
            "save" => Self::Save,
            "export" => Self::Export,
            "news" => Self::News,
            "start" => Self::Start {
                genre: parse_arg(&args, 0, "genre")?,
                tendency: parse_arg(&args, 1, "tendency")?,
                title: Some(args.get(2..).unwrap_or_default().join(" "))
                    .filter(|title| !title.is_empty()),
            },
            "write" => {
                let mode = match args.first() {
                    Some(mode) => mode
                        .parse()
                        .map_err(|_| anyhow!("unknown writing mode `{mode}`"))?,
                    None => WritingMode::Normal,
                };
                let inspiration = match args.get(1) {
                    Some(_) => parse_arg(&args, 1, "inspiration")?,
                    None => 0,
                };
                Self::Write { mode, inspiration }
            }
            "revise" if rest.is_empty() => bail!("missing direction"),
            "revise" => Self::Revise(rest),
            "ip" => Self::NegotiateIp(NovelId(parse_arg(&args, 0, "novel id")?)),
            "finish" => Self::Act(FinishNovelAction.into()),
            "rest" => Self::Act(career_core::AdvanceDayAction.into()),
            "quote" => Self::Act(
                ApplyQuoteAction {
                    quote_id: required(&args, 0, "quote id")?.to_string(),
                }
                .into(),
            ),
            "brainstorm" => Self::Act(
                BrainstormAction {
                    shards: parse_arg(&args, 0, "shards")?,
                }
                .into(),
            ),
            "buy" => Self::Act(
                BuyAssetAction {
                    asset: AssetId::new(required(&args, 0, "asset")?),
                    shares: parse_arg(&args, 1, "shares")?,
                }
                .into(),
            ),
            "sell" => Self::Act(
                SellAssetAction {
                    asset: AssetId::new(required(&args, 0, "asset")?),
                    shares: parse_arg(&args, 1, "shares")?,
                }
                .into(),
            ),
            "pump" => Self::Act(
                PumpAssetAction {
                    asset: AssetId::new(required(&args, 0, "asset")?),
                }
                .into(),
            ),
            "post" => Self::Act(
                PostAction {
                    kind: parse_arg::<PostKind>(&args, 0, "post kind")?,
                }
                .into(),
            ),
            "follow" => {
                let npc = match required(&args, 0, "npc")? {
                    "curator" => Npc::Curator,
                    "guru" => Npc::FinanceGuru {
                        asset: AssetId::new(required(&args, 1, "asset")?),
                    },
                    other => bail!("unknown npc `{other}`"),
                };
                Self::Act(FollowNpcAction { npc }.into())
            }
            "shop" => Self::Act(
                BuyItemAction {
                    item: required(&args, 0, "item")?.to_string(),
                }
                .into(),
            ),
            "gather" => Self::Act(
                GatherAction {
                    option: required(&args, 0, "option")?.to_string(),
                }
                .into(),
            ),
            "move" => Self::Act(
                ChangeResidenceAction {
                    level: parse_arg(&args, 0, "housing level")?,
                }
                .into(),
            ),
            "boost" => Self::Act(
                BoostRankingAction {
                    board: parse_arg::<RankingBoard>(&args, 0, "board")?,
                }
                .into(),
            ),
            "resolve" => Self::Act(
                ResolveEventAction {
                    option_index: parse_arg(&args, 0, "option")?,
                }
                .into(),
            ),
            "film" => Self::Act(
                SignFilmBetAction {
                    novel: NovelId(parse_arg(&args, 0, "novel id")?),
                }
                .into(),
            ),
            other => bail!("unknown command `{other}`, try `help`"),
        };

        Ok(Some(command))
    }
}

fn required<'a>(args: &[&'a str], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .with_context(|| format!("missing {what}"))
}

fn parse_arg<T: std::str::FromStr>(args: &[&str], index: usize, what: &str) -> Result<T> {
    let raw = required(args, index, what)?;
    raw.parse()
        .map_err(|_| anyhow!("invalid {what} `{raw}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn start_takes_an_optional_title() {
        assert_eq!(
            Command::parse("start daily sweet 雨夜 的约定").unwrap(),
            Some(Command::Start {
                genre: Genre::Daily,
                tendency: Tendency::Sweet,
                title: Some("雨夜 的约定".into()),
            })
        );
        assert!(matches!(
            Command::parse("start campus bitter").unwrap(),
            Some(Command::Start { title: None, .. })
        ));
    }

    #[test]
    fn write_defaults_to_normal() {
        assert_eq!(
            Command::parse("write").unwrap(),
            Some(Command::Write {
                mode: WritingMode::Normal,
                inspiration: 0,
            })
        );
        assert_eq!(
            Command::parse("WRITE hardcore 3").unwrap(),
            Some(Command::Write {
                mode: WritingMode::Hardcore,
                inspiration: 3,
            })
        );
    }

    #[test]
    fn trades_map_to_actions() {
        let Some(Command::Act(action)) = Command::parse("buy ip_index 10").unwrap() else {
            panic!("expected an action");
        };
        assert_eq!(action.as_snake_case(), "buy_asset");
    }

    #[test]
    fn bad_input_explains_itself() {
        let error = Command::parse("buy ip_index lots").unwrap_err();
        assert_eq!(error.to_string(), "invalid shares `lots`");
        assert!(Command::parse("dance").is_err());
        assert_eq!(
            Command::parse("revise").unwrap_err().to_string(),
            "missing direction"
        );
    }
}
