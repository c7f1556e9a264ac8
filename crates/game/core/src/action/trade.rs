//! Buying and selling listed assets.
use super::result::{ActionResult, TradeReceipt};
use super::{ActionTransition, TradeError};
use crate::env::{AssetSpec, GameEnv};
use crate::state::{AssetId, GameState};

/// Looks up the asset listing and enforces its rank gate.
fn tradable<'a>(
    asset: &AssetId,
    state: &GameState,
    env: &GameEnv<'a>,
) -> Result<&'a AssetSpec, TradeError> {
    let spec = env
        .market()?
        .asset(asset)
        .ok_or_else(|| TradeError::UnknownAsset(asset.clone()))?;
    if state.career.rank < spec.min_rank {
        return Err(TradeError::RankTooLow {
            asset: asset.clone(),
            required: spec.min_rank,
            current: state.career.rank,
        });
    }
    Ok(spec)
}

fn current_price(asset: &AssetId, state: &GameState) -> Result<f64, TradeError> {
    state
        .market
        .asset(asset)
        .map(|listing| listing.price)
        .ok_or_else(|| TradeError::UnknownAsset(asset.clone()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuyAssetAction {
    pub asset: AssetId,
    pub shares: u64,
}

impl ActionTransition for BuyAssetAction {
    type Error = TradeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        tradable(&self.asset, state, env)?;
        if self.shares == 0 {
            return Err(TradeError::ZeroShares);
        }
        let required = current_price(&self.asset, state)? * self.shares as f64;
        if state.author.money < required {
            return Err(TradeError::InsufficientFunds {
                required,
                available: state.author.money,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let price = current_price(&self.asset, state)?;
        let total = price * self.shares as f64;

        state.author.money -= total;
        state
            .market
            .portfolio
            .entry(self.asset.clone())
            .or_default()
            .add(self.shares, price);

        Ok(ActionResult::Trade(TradeReceipt {
            asset: self.asset.clone(),
            shares: self.shares,
            price,
            total,
            realized_profit: None,
        }))
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        debug_assert!(state.author.money >= -1e-6, "purchase overdrew the account");
        Ok(())
    }
}

/// Sells up to `shares`; the order is clipped to the position held.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellAssetAction {
    pub asset: AssetId,
    pub shares: u64,
}

impl ActionTransition for SellAssetAction {
    type Error = TradeError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        tradable(&self.asset, state, env)?;
        if self.shares == 0 {
            return Err(TradeError::ZeroShares);
        }
        if state.market.shares_held(&self.asset) == 0 {
            return Err(TradeError::NothingToSell(self.asset.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let price = current_price(&self.asset, state)?;
        let holding = state
            .market
            .portfolio
            .get_mut(&self.asset)
            .ok_or_else(|| TradeError::NothingToSell(self.asset.clone()))?;

        let sold = self.shares.min(holding.shares);
        let proceeds = price * sold as f64;
        let profit = proceeds - holding.average_cost * sold as f64;

        holding.shares -= sold;
        if holding.shares == 0 {
            state.market.portfolio.remove(&self.asset);
        }

        state.author.money += proceeds;
        state.career.total_investment_profit += profit;
        state.career.max_profit_single_trade = state.career.max_profit_single_trade.max(profit);

        Ok(ActionResult::Trade(TradeReceipt {
            asset: self.asset.clone(),
            shares: sold,
            price,
            total: proceeds,
            realized_profit: Some(profit),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AuthorRank;
    use crate::testing::{TestOracles, fresh_state, set_price};

    fn fund() -> AssetId {
        AssetId::from("money_fund")
    }

    #[test]
    fn buy_then_sell_realises_profit() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        set_price(&mut state, &fund(), 10.0);

        let buy = BuyAssetAction {
            asset: fund(),
            shares: 100,
        };
        buy.pre_validate(&state, &env).unwrap();
        buy.apply(&mut state, &env).unwrap();
        assert_eq!(state.author.money, 4_000.0);
        assert_eq!(state.market.shares_held(&fund()), 100);

        set_price(&mut state, &fund(), 15.0);
        let sell = SellAssetAction {
            asset: fund(),
            shares: 500,
        };
        sell.pre_validate(&state, &env).unwrap();
        let ActionResult::Trade(receipt) = sell.apply(&mut state, &env).unwrap() else {
            panic!("expected trade receipt");
        };

        assert_eq!(receipt.shares, 100);
        assert_eq!(receipt.realized_profit, Some(500.0));
        assert_eq!(state.author.money, 5_500.0);
        assert_eq!(state.career.total_investment_profit, 500.0);
        assert_eq!(state.career.max_profit_single_trade, 500.0);
        assert!(state.market.portfolio.is_empty());
    }

    #[test]
    fn losses_do_not_lower_best_trade() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        set_price(&mut state, &fund(), 10.0);
        state.career.max_profit_single_trade = 50.0;

        BuyAssetAction {
            asset: fund(),
            shares: 10,
        }
        .apply(&mut state, &env)
        .unwrap();
        set_price(&mut state, &fund(), 5.0);
        SellAssetAction {
            asset: fund(),
            shares: 10,
        }
        .apply(&mut state, &env)
        .unwrap();

        assert_eq!(state.career.total_investment_profit, -50.0);
        assert_eq!(state.career.max_profit_single_trade, 50.0);
    }

    #[test]
    fn rank_gate_blocks_trading() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let mut state = fresh_state(&oracles);
        let tech = AssetId::from("tech_stock");

        let buy = BuyAssetAction {
            asset: tech.clone(),
            shares: 1,
        };
        assert_eq!(
            buy.pre_validate(&state, &env),
            Err(TradeError::RankTooLow {
                asset: tech.clone(),
                required: AuthorRank::Legend,
                current: AuthorRank::Novice,
            })
        );

        state.career.rank = AuthorRank::Legend;
        state.author.money = 1_000_000.0;
        buy.pre_validate(&state, &env).unwrap();
    }

    #[test]
    fn invalid_orders_are_rejected() {
        let oracles = TestOracles::default();
        let env = oracles.env();
        let state = fresh_state(&oracles);

        let unknown = BuyAssetAction {
            asset: AssetId::from("tulips"),
            shares: 1,
        };
        assert_eq!(
            unknown.pre_validate(&state, &env),
            Err(TradeError::UnknownAsset(AssetId::from("tulips")))
        );

        let zero = BuyAssetAction {
            asset: fund(),
            shares: 0,
        };
        assert_eq!(zero.pre_validate(&state, &env), Err(TradeError::ZeroShares));

        let too_many = BuyAssetAction {
            asset: fund(),
            shares: 1_000_000,
        };
        assert!(matches!(
            too_many.pre_validate(&state, &env),
            Err(TradeError::InsufficientFunds { .. })
        ));

        let nothing = SellAssetAction {
            asset: fund(),
            shares: 1,
        };
        assert_eq!(
            nothing.pre_validate(&state, &env),
            Err(TradeError::NothingToSell(fund()))
        );
    }
}
