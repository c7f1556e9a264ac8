//! Daily market random walk.

use super::SystemError;
use crate::action::ActionTransition;
use crate::action::result::ActionResult;
use crate::economy;
use crate::env::{GameEnv, compute_seed, streams};
use crate::state::GameState;

/// Moves every listed asset one step, with one roll per asset.
///
/// Rolls are keyed by the asset's position in the market so that adding news
/// or reordering holdings never changes prices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketTickAction;

impl ActionTransition for MarketTickAction {
    type Error = SystemError;
    type Result = ActionResult;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let market = env.market()?;
        match state
            .market
            .assets
            .iter()
            .find(|asset| market.asset(&asset.id).is_none())
        {
            Some(asset) => Err(SystemError::UnlistedAsset(asset.id.clone())),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let config = env.game_config()?;
        let market = env.market()?;
        let rng = env.rng()?;
        let (game_seed, nonce) = (state.game_seed, state.clock.nonce);

        for (index, asset) in state.market.assets.iter_mut().enumerate() {
            let spec = market
                .asset(&asset.id)
                .ok_or_else(|| SystemError::UnlistedAsset(asset.id.clone()))?;
            let roll = rng.unit_f64(compute_seed(
                game_seed,
                nonce,
                streams::MARKET_TICK,
                index as u32,
            ));
            economy::tick_asset(asset, spec.volatility, roll, config);
        }
        Ok(ActionResult::Done)
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let floor = env.game_config()?.min_price;
        debug_assert!(
            state.market.assets.iter().all(|asset| asset.price >= floor),
            "market tick pushed a price below the floor"
        );
        Ok(())
    }
}
