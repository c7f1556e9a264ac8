//! Price walk and manipulation odds.
use crate::config::GameConfig;
use crate::state::{AssetState, PriceHistory};

/// Advances one asset by a day.
///
/// `roll` is a uniform sample in `[0, 1)`. The sentiment carried from the
/// previous day tilts the walk before being overwritten by the new move.
/// Returns the fractional change applied to the price.
pub fn tick_asset(asset: &mut AssetState, volatility: f64, roll: f64, config: &GameConfig) -> f64 {
    let tilt = asset.sentiment as f64 / 100.0 * config.sentiment_bias_weight;
    let change = ((roll - 0.5) * 2.0 + tilt) * volatility;

    asset.price = (asset.price * (1.0 + change)).max(config.min_price);
    asset.record_price(asset.price);
    asset.sentiment = if volatility > 0.0 {
        (change / volatility * 50.0).floor() as i32
    } else {
        0
    };

    change
}

/// Builds a starting price history by walking from `base` once per roll.
///
/// The asset's current price stays at `base`; only the history is synthetic.
pub fn initial_history(
    base: f64,
    volatility: f64,
    rolls: impl IntoIterator<Item = f64>,
) -> PriceHistory {
    let mut history = PriceHistory::new();
    let mut price = base;
    for roll in rolls.into_iter().take(history.capacity()) {
        price *= 1.0 + (roll - 0.5) * volatility;
        history.push(price);
    }
    history
}

/// Sentiment added by a successful pump, scaled by reputation.
pub fn pump_boost(reputation: u64) -> i32 {
    match reputation {
        r if r >= 20_000 => 80,
        r if r >= 5_000 => 30,
        _ => 5,
    }
}

/// Chance that a pump gets the author banned. Pumping again while the
/// previous manipulation is still cooling down is almost always caught.
pub fn pump_ban_chance(cooldown: u32, config: &GameConfig) -> f64 {
    if cooldown > 0 {
        config.pump_ban_chance_on_cooldown
    } else {
        config.pump_ban_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AssetId;

    fn asset(price: f64, sentiment: i32) -> AssetState {
        let mut asset = AssetState::new(AssetId::from("fund"), price, PriceHistory::new());
        asset.sentiment = sentiment;
        asset
    }

    #[test]
    fn neutral_roll_keeps_price() {
        let config = GameConfig::default();
        let mut fund = asset(100.0, 0);
        let change = tick_asset(&mut fund, 0.1, 0.5, &config);
        assert_eq!(change, 0.0);
        assert_eq!(fund.price, 100.0);
        assert_eq!(fund.history.len(), 1);
        assert_eq!(fund.sentiment, 0);
    }

    #[test]
    fn extreme_roll_moves_by_volatility() {
        let config = GameConfig::default();
        let mut stock = asset(100.0, 0);
        tick_asset(&mut stock, 0.1, 0.0, &config);
        assert!((stock.price - 90.0).abs() < 1e-9);
        assert_eq!(stock.sentiment, -50);
    }

    #[test]
    fn positive_sentiment_tilts_the_walk() {
        let config = GameConfig::default();
        let mut hyped = asset(100.0, 80);
        let change = tick_asset(&mut hyped, 0.1, 0.5, &config);
        assert!(change > 0.0);
        assert!(hyped.price > 100.0);
    }

    #[test]
    fn price_never_drops_below_floor() {
        let config = GameConfig::default();
        let mut penny = asset(0.011, -100);
        for _ in 0..50 {
            tick_asset(&mut penny, 0.9, 0.0, &config);
        }
        assert!(penny.price >= config.min_price);
    }

    #[test]
    fn initial_history_walks_from_base() {
        let history = initial_history(10.0, 0.2, [1.0, 0.0, 0.5]);
        assert_eq!(history.len(), 3);
        assert!((history[0] - 11.0).abs() < 1e-9);
        assert!((history[1] - 9.9).abs() < 1e-9);
        assert!((history[2] - 9.9).abs() < 1e-9);
    }

    #[test]
    fn pump_odds_depend_on_cooldown() {
        let config = GameConfig::default();
        assert_eq!(pump_ban_chance(0, &config), 0.05);
        assert_eq!(pump_ban_chance(4, &config), 0.7);
        assert_eq!(pump_boost(100), 5);
        assert_eq!(pump_boost(5_000), 30);
        assert_eq!(pump_boost(20_000), 80);
    }
}
