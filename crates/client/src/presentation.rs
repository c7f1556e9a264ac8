//! Plain-text rendering of state snapshots and runtime events.

use std::fmt::Write;

use career_core::{ActionResult, ExecutionOutcome, GameState};
use career_runtime::{CareerEvent, Event, FeedKind, MarketEvent, SocialPost};

pub fn status(state: &GameState) -> String {
    let author = &state.author;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "第 {} 天 | {} | 声望 {} | 资金 {:.2}",
        state.clock.day,
        state.career.rank.label(),
        author.reputation,
        author.money
    );
    let _ = writeln!(
        out,
        "体力 {}/{} | 健康 {} | 心情 {} | 灵感 {} | 碎片 {} | 文笔 {:.1}",
        author.stamina,
        author.max_stamina,
        author.health,
        author.mood,
        author.inspiration,
        author.shards,
        author.writing_skill
    );
    let fans = &state.fans;
    let _ = writeln!(
        out,
        "粉丝 {} (路人 {} / 关注 {} / 铁粉 {} / 死忠 {}) | 热度 {}",
        fans.total(),
        fans.passerby,
        fans.followers,
        fans.hardcore,
        fans.stans,
        state.social.global_heat
    );

    match &state.library.active {
        Some(novel) => {
            let _ = writeln!(
                out,
                "连载中 {} 《{}》[{}] {} 字 | 人气 {} | 收入 {:.2}",
                novel.id,
                novel.title,
                novel.genre.label(),
                novel.word_count,
                novel.popularity,
                novel.total_income
            );
            if let Some(next) = novel.outlines.get(novel.current_chapter_index) {
                let _ = writeln!(out, "  下一章 第{}章 {}: {}", next.chapter_number, next.title, next.goal);
            }
        }
        None => {
            let _ = writeln!(out, "暂无连载");
        }
    }
    for novel in &state.library.finished {
        let _ = writeln!(out, "  完结 {} 《{}》 {} 字", novel.id, novel.title, novel.word_count);
    }

    if let Some(event) = &state.events.pending {
        let _ = writeln!(out, "待处理事件: {}", event.title);
        for (index, option) in event.options.iter().enumerate() {
            let _ = writeln!(out, "  [{index}] {}", option.text);
        }
    }

    out
}

pub fn market(state: &GameState) -> String {
    let mut out = String::new();
    for asset in &state.market.assets {
        let holding = state
            .market
            .portfolio
            .get(&asset.id)
            .map(|holding| format!(" | 持仓 {} @ {:.2}", holding.shares, holding.average_cost))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<16} {:>10.2} 情绪 {:>+4}{holding}",
            asset.id.to_string(),
            asset.price,
            asset.sentiment
        );
    }
    for news in state.market.news.iter().rev().take(3) {
        let _ = writeln!(out, "[第{}天] {}", news.day, news.text);
    }
    out
}

pub fn feed(posts: &[SocialPost]) -> String {
    let mut out = String::new();
    for post in posts {
        let badge = match post.kind {
            FeedKind::Reader => "读者",
            FeedKind::Curator => "推书",
            FeedKind::FinanceGuru => "财经",
            FeedKind::Nudge => "催更",
        };
        let _ = writeln!(
            out,
            "[{badge}] {}: {} (赞 {} 评 {})",
            post.author, post.content, post.likes, post.replies
        );
    }
    out
}

/// One line per action result worth mentioning.
pub fn outcome(outcome: &ExecutionOutcome) -> String {
    match &outcome.action_result {
        ActionResult::Novel(id) => format!("{id} 已更新"),
        ActionResult::Chapter(chapter) => format!(
            "写了 {} 字, 收入 {:.2}, 体力 -{}",
            chapter.words, chapter.income, chapter.stamina_cost
        ),
        ActionResult::Trade(receipt) => match receipt.realized_profit {
            Some(profit) => format!(
                "卖出 {} x{} @ {:.2}, 盈亏 {profit:+.2}",
                receipt.asset, receipt.shares, receipt.price
            ),
            None => format!(
                "买入 {} x{} @ {:.2}, 花费 {:.2}",
                receipt.asset, receipt.shares, receipt.price, receipt.total
            ),
        },
        ActionResult::Pump(pump) if pump.banned => format!("{} 拉盘被发现, 账号禁言", pump.asset),
        ActionResult::Pump(pump) => format!("{} 情绪 {:+}", pump.asset, pump.sentiment_change),
        ActionResult::Social(social) => {
            format!("热度 +{}, 月票 +{}", social.heat_gained, social.tickets)
        }
        ActionResult::Day(report) => format!("第 {} 天开始, 房租 {:.2}", report.day, report.rent),
        ActionResult::Rank(Some(change)) => {
            format!("{} -> {}", change.from.label(), change.to.label())
        }
        ActionResult::Rank(None) | ActionResult::Done => "完成".to_string(),
        ActionResult::Unlocked(ids) => format!("解锁 {}", ids.join(", ")),
    }
}

/// Notifications printed as events arrive; `None` for the quiet ones.
pub fn event(event: &Event) -> Option<String> {
    match event {
        Event::Career(CareerEvent::RankChanged { from, to, .. }) => {
            Some(format!("★ 晋升: {} -> {}", from.label(), to.label()))
        }
        Event::Career(CareerEvent::AchievementUnlocked {
            title, reward_text, ..
        }) => Some(format!("★ 成就「{title}」 {reward_text}")),
        Event::Career(CareerEvent::DayAdvanced { report }) => {
            let mut line = format!("=== 第 {} 天 ===", report.day);
            if report.broke {
                line.push_str(" 交不起房租, 领取了低保");
            }
            if report.legacy_income > 0.0 {
                let _ = write!(line, " 完结作品收入 {:.2}", report.legacy_income);
            }
            if report.nudged {
                line.push_str(" 读者在催更了");
            }
            Some(line)
        }
        Event::Career(CareerEvent::EventQueued { event, .. }) => {
            Some(format!("! {}: {} (resolve <选项>)", event.title, event.description))
        }
        Event::Market(MarketEvent::MarketTicked { prices, .. }) => {
            let movers = prices
                .iter()
                .filter(|(_, _, sentiment)| sentiment.abs() > 30)
                .map(|(id, price, _)| format!("{id} {price:.2}"))
                .collect::<Vec<_>>();
            (!movers.is_empty()).then(|| format!("市场异动: {}", movers.join(", ")))
        }
        Event::GameState(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::{AuthorRank, DayReport};

    #[test]
    fn day_reports_mention_hardship() {
        let line = event(&Event::Career(CareerEvent::DayAdvanced {
            report: DayReport {
                day: 4,
                rent: 300.0,
                broke: true,
                legacy_income: 0.0,
                ip_payouts: Vec::new(),
                nudged: false,
            },
        }))
        .unwrap();
        assert!(line.contains("第 4 天"));
        assert!(line.contains("低保"));
    }

    #[test]
    fn rank_changes_use_labels() {
        let line = event(&Event::Career(CareerEvent::RankChanged {
            from: AuthorRank::Novice,
            to: AuthorRank::Contracted,
            day: 9,
        }))
        .unwrap();
        assert_eq!(line, "★ 晋升: 萌新写手 -> 签约作者");
    }

    #[test]
    fn calm_markets_stay_quiet() {
        let tick = Event::Market(MarketEvent::MarketTicked {
            day: 2,
            prices: Vec::new(),
        });
        assert_eq!(event(&tick), None);
    }
}
